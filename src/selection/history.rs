//! Bounded, most-recent-first selection history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Recently selected participant IDs for one pool, newest first.
///
/// The history is a plain value: [`select`](super::select) takes one and
/// returns the updated copy, so callers decide where it lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionHistory {
    recent: VecDeque<String>,
}

impl SelectionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remembered selections.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Whether nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Whether `id` was selected recently.
    pub fn contains(&self, id: &str) -> bool {
        self.recent.iter().any(|r| r == id)
    }

    /// The most recent selection.
    pub fn last(&self) -> Option<&str> {
        self.recent.front().map(String::as_str)
    }

    /// Remembered IDs, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.recent.clear();
    }

    /// Pushes `id` to the front and truncates to `bound` entries.
    pub fn record(&mut self, id: impl Into<String>, bound: usize) {
        self.recent.push_front(id.into());
        self.recent.truncate(bound.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_newest_first() {
        let mut h = SelectionHistory::new();
        h.record("A", 3);
        h.record("B", 3);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(h.last(), Some("B"));
        assert!(h.contains("A"));
    }

    #[test]
    fn test_record_truncates() {
        let mut h = SelectionHistory::new();
        for id in ["A", "B", "C", "D"] {
            h.record(id, 2);
        }
        assert_eq!(h.iter().collect::<Vec<_>>(), vec!["D", "C"]);
    }

    #[test]
    fn test_zero_bound_keeps_one() {
        let mut h = SelectionHistory::new();
        h.record("A", 0);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut h = SelectionHistory::new();
        h.record("A", 2);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.last(), None);
    }
}
