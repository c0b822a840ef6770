//! Placement tracing.
//!
//! The partitioner reports every placement, undo and reset to a
//! [`PlacementObserver`]. [`PlacementTrace`] records those events so a
//! presentation layer can replay intermediate states at its own pace.
//! Observation never influences the search.

use serde::{Deserialize, Serialize};

use super::Strategy;

/// Receives placement events from the partitioner.
///
/// All methods default to no-ops.
pub trait PlacementObserver {
    /// A participant was placed into a group.
    fn on_place(&mut self, _participant_id: &str, _group_index: usize, _strategy: Strategy) {}

    /// A backtracking placement was undone.
    fn on_undo(&mut self, _participant_id: &str, _group_index: usize) {}

    /// All groups were emptied before the greedy pass.
    fn on_reset(&mut self) {}
}

/// Observer that discards every event.
impl PlacementObserver for () {}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Participant placed into a group.
    Placed {
        participant_id: String,
        group_index: usize,
        strategy: Strategy,
    },
    /// Backtracking removed a participant from a group.
    Undone {
        participant_id: String,
        group_index: usize,
    },
    /// Groups were cleared.
    Reset,
}

/// Ordered log of placement events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementTrace {
    events: Vec<TraceEvent>,
}

impl PlacementTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of backtracking undos.
    pub fn undo_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Undone { .. }))
            .count()
    }

    /// Group contents after replaying the first `steps` events.
    ///
    /// `steps` beyond the end replays the whole trace.
    pub fn snapshot_at(&self, steps: usize, group_count: usize) -> Vec<Vec<String>> {
        let mut groups: Vec<Vec<String>> = vec![Vec::new(); group_count];
        for event in self.events.iter().take(steps) {
            match event {
                TraceEvent::Placed {
                    participant_id,
                    group_index,
                    ..
                } => {
                    if let Some(group) = groups.get_mut(*group_index) {
                        group.push(participant_id.clone());
                    }
                }
                TraceEvent::Undone {
                    participant_id,
                    group_index,
                } => {
                    if let Some(group) = groups.get_mut(*group_index) {
                        if let Some(pos) = group.iter().rposition(|m| m == participant_id) {
                            group.remove(pos);
                        }
                    }
                }
                TraceEvent::Reset => groups.iter_mut().for_each(Vec::clear),
            }
        }
        groups
    }
}

impl PlacementObserver for PlacementTrace {
    fn on_place(&mut self, participant_id: &str, group_index: usize, strategy: Strategy) {
        self.events.push(TraceEvent::Placed {
            participant_id: participant_id.to_string(),
            group_index,
            strategy,
        });
    }

    fn on_undo(&mut self, participant_id: &str, group_index: usize) {
        self.events.push(TraceEvent::Undone {
            participant_id: participant_id.to_string(),
            group_index,
        });
    }

    fn on_reset(&mut self) {
        self.events.push(TraceEvent::Reset);
    }
}
