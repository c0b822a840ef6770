//! Participant model.
//!
//! A participant is one member of a roster. The engine treats participants
//! as immutable values for the duration of a single call; ownership of the
//! roster stays with the surrounding application.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-session attendance flags: participant id → present.
///
/// Participants missing from the map are treated as present.
pub type AttendanceMap = HashMap<String, bool>;

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Participant {
    /// Creates a participant with the given ID and an empty name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display label: the name, or the ID when no name is set.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Collects the IDs of a participant list, preserving order.
pub fn participant_ids(participants: &[Participant]) -> Vec<String> {
    participants.iter().map(|p| p.id.clone()).collect()
}
