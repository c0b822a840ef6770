//! Partition (solution) model.
//!
//! A partition is an ordered list of groups, each holding participant IDs.
//! Every eligible participant appears in exactly one group.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::PlacementTrace;

/// An ordered sequence of groups of participant IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    groups: Vec<Vec<String>>,
}

impl Partition {
    /// Wraps explicit groups.
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    /// An empty partition (no groups).
    pub fn empty() -> Self {
        Self::default()
    }

    /// All groups in order.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Members of the group at `index`.
    pub fn group(&self, index: usize) -> Option<&[String]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group sizes in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Total number of placed participants.
    pub fn participant_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Index of the group containing `id`.
    pub fn group_of(&self, id: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.iter().any(|member| member == id))
    }

    /// Whether `id` is placed in some group.
    pub fn contains(&self, id: &str) -> bool {
        self.group_of(id).is_some()
    }

    /// Whether every ID in `ids` appears in exactly one group and nothing
    /// else is placed.
    pub fn is_partition_of<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected: Vec<&str> = ids.into_iter().collect();
        let mut seen = HashSet::new();
        for member in self.groups.iter().flatten() {
            if !seen.insert(member.as_str()) {
                return false;
            }
        }
        seen.len() == expected.len() && expected.iter().all(|id| seen.contains(id))
    }

    /// Placements in reveal order: group by group, members in placement order.
    ///
    /// This is the order a presentation layer replays a finished partition in.
    pub fn reveal_order(&self) -> Vec<(usize, &str)> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(g, members)| members.iter().map(move |m| (g, m.as_str())))
            .collect()
    }

    /// Consumes the partition, returning the raw groups.
    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}

/// Quality of a partition with respect to a conflict model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionQuality {
    /// Unordered same-group pairs that are in conflict.
    pub conflict_count: usize,
    /// Conflict count per group, in group order.
    pub group_conflicts: Vec<usize>,
}

impl PartitionQuality {
    /// Whether no group contains a conflicting pair.
    pub fn is_conflict_free(&self) -> bool {
        self.conflict_count == 0
    }
}

/// Which phase of the partitioner produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Bounded backtracking found a conflict-free assignment.
    Backtracking,
    /// Backtracking was exhausted; the conflict-minimizing greedy pass ran.
    Greedy,
}

/// Full result of a partition call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionOutcome {
    /// The produced groups.
    pub partition: Partition,
    /// Audited quality of `partition`.
    pub quality: PartitionQuality,
    /// Phase that produced the partition.
    pub strategy: Strategy,
    /// Backtracking nodes visited (including the aborted search, if any).
    pub nodes_visited: u64,
    /// Shuffle seed, when the engine seeded its own random source.
    pub seed: Option<u64>,
    /// Recorded placement events, when tracing was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<PlacementTrace>,
}

impl PartitionOutcome {
    /// Splits into the partition and its quality.
    pub fn into_parts(self) -> (Partition, PartitionQuality) {
        (self.partition, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Partition {
        Partition::new(vec![
            vec!["A".into(), "C".into()],
            vec!["B".into(), "D".into(), "E".into()],
        ])
    }

    #[test]
    fn test_partition_queries() {
        let p = sample();
        assert_eq!(p.len(), 2);
        assert_eq!(p.sizes(), vec![2, 3]);
        assert_eq!(p.participant_count(), 5);
        assert_eq!(p.group_of("D"), Some(1));
        assert_eq!(p.group_of("Z"), None);
        assert!(p.contains("A"));
        assert_eq!(p.group(0).unwrap(), &["A".to_string(), "C".to_string()]);
        assert!(p.group(2).is_none());
    }

    #[test]
    fn test_is_partition_of() {
        let p = sample();
        assert!(p.is_partition_of(["A", "B", "C", "D", "E"]));
        assert!(!p.is_partition_of(["A", "B", "C", "D"]));
        assert!(!p.is_partition_of(["A", "B", "C", "D", "E", "F"]));

        let dup = Partition::new(vec![vec!["A".into()], vec!["A".into()]]);
        assert!(!dup.is_partition_of(["A"]));
    }

    #[test]
    fn test_reveal_order() {
        let p = sample();
        assert_eq!(
            p.reveal_order(),
            vec![(0, "A"), (0, "C"), (1, "B"), (1, "D"), (1, "E")]
        );
    }

    #[test]
    fn test_empty_partition() {
        let p = Partition::empty();
        assert!(p.is_empty());
        assert!(p.is_partition_of(std::iter::empty()));
        assert!(p.reveal_order().is_empty());
    }

    #[test]
    fn test_quality_conflict_free() {
        assert!(PartitionQuality::default().is_conflict_free());
        let q = PartitionQuality {
            conflict_count: 1,
            group_conflicts: vec![1, 0],
        };
        assert!(!q.is_conflict_free());
    }
}
