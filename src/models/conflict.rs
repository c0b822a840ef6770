//! Pairwise incompatibility constraints.
//!
//! A [`ConflictPair`] declares that two participants should not share a
//! group. A [`ConflictModel`] is the symmetric adjacency built from a list
//! of pairs and answers `has_conflict` queries during partitioning.
//!
//! Pairs may reference participants that are not currently eligible
//! (e.g. absent today). Such stale references are inert.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::{EngineError, Result};

/// An unordered pair of distinct participant IDs that should be kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    /// The two participant IDs.
    pub members: [String; 2],
    /// Optional human-readable reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConflictPair {
    /// Creates a conflict pair.
    ///
    /// # Errors
    /// `InvalidArgument` if both IDs are equal.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(EngineError::InvalidArgument(format!(
                "conflict pair references '{a}' twice"
            )));
        }
        Ok(Self {
            members: [a, b],
            reason: None,
        })
    }

    /// Attaches a reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether the pair references the same ID twice.
    ///
    /// Only possible for pairs that bypassed [`ConflictPair::new`]
    /// (e.g. deserialized data).
    pub fn is_reflexive(&self) -> bool {
        self.members[0] == self.members[1]
    }

    /// Whether this pair involves `id`.
    pub fn involves(&self, id: &str) -> bool {
        self.members[0] == id || self.members[1] == id
    }

    /// The pair as an order-independent key (smaller ID first).
    pub fn key(&self) -> (&str, &str) {
        let (a, b) = (self.members[0].as_str(), self.members[1].as_str());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Symmetric incompatibility relation over participant IDs.
///
/// Invariant: `has_conflict(a, b) == has_conflict(b, a)` for all IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictModel {
    adjacency: HashMap<String, BTreeSet<String>>,
}

impl ConflictModel {
    /// Creates an empty model (no conflicts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model from a list of declared pairs.
    ///
    /// Duplicate pairs collapse into one edge. Reflexive pairs are skipped.
    pub fn build(pairs: &[ConflictPair]) -> Self {
        let mut model = Self::new();
        for pair in pairs {
            if pair.is_reflexive() {
                tracing::debug!(id = %pair.members[0], "skipping reflexive conflict pair");
                continue;
            }
            model.add(&pair.members[0], &pair.members[1]);
        }
        model
    }

    /// Adds a single edge in both directions.
    ///
    /// Reflexive edges are ignored.
    pub fn add(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Builder: adds an edge and returns self.
    pub fn with_conflict(mut self, a: &str, b: &str) -> Self {
        self.add(a, b);
        self
    }

    /// Whether `a` and `b` are declared incompatible.
    ///
    /// Always `false` when `a == b`.
    pub fn has_conflict(&self, a: &str, b: &str) -> bool {
        a != b
            && self
                .adjacency
                .get(a)
                .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// IDs that conflict with `id`, in sorted order.
    pub fn conflicts_of(&self, id: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of `members` that conflict with `id`.
    pub fn conflicts_with_group<'a, I>(&self, id: &str, members: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        members
            .into_iter()
            .filter(|m| self.has_conflict(id, m))
            .count()
    }

    /// Number of distinct unordered conflict pairs.
    pub fn pair_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Number of participants involved in at least one conflict.
    pub fn participant_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the model holds no conflicts.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
