//! Partition quality auditing.
//!
//! Counts realized conflicts in a partition: the number of unordered
//! same-group pairs that the conflict model declares incompatible.
//!
//! # Complexity
//! O(Σ gᵢ²) over group sizes gᵢ. Rosters are classroom-scale, so the
//! quadratic pass is cheap.

use crate::models::{ConflictModel, ConflictPair, Partition, PartitionQuality};

/// Audits `partition` against `model`.
///
/// # Example
/// ```
/// use u_grouping::audit::audit;
/// use u_grouping::models::{ConflictModel, Partition};
///
/// let model = ConflictModel::new().with_conflict("A", "B");
/// let partition = Partition::new(vec![
///     vec!["A".into(), "B".into()],
///     vec!["C".into()],
/// ]);
/// let quality = audit(&partition, &model);
/// assert_eq!(quality.conflict_count, 1);
/// assert_eq!(quality.group_conflicts, vec![1, 0]);
/// ```
pub fn audit(partition: &Partition, model: &ConflictModel) -> PartitionQuality {
    PartitionQuality::calculate(partition, model)
}

impl PartitionQuality {
    /// Computes quality from a partition and its conflict model.
    pub fn calculate(partition: &Partition, model: &ConflictModel) -> Self {
        let group_conflicts: Vec<usize> = partition
            .groups()
            .iter()
            .map(|group| count_group_conflicts(group, model))
            .collect();
        Self {
            conflict_count: group_conflicts.iter().sum(),
            group_conflicts,
        }
    }
}

/// Conflicting pairs inside one group.
pub fn count_group_conflicts(group: &[String], model: &ConflictModel) -> usize {
    if model.is_empty() {
        return 0;
    }
    let mut conflicts = 0;
    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            if model.has_conflict(&group[i], &group[j]) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Lists every realized conflict as `(group_index, pair)`.
///
/// Pairs carry no reason; callers holding the original declarations can
/// match them by [`ConflictPair::key`].
pub fn conflicting_pairs(partition: &Partition, model: &ConflictModel) -> Vec<(usize, ConflictPair)> {
    let mut found = Vec::new();
    for (g, group) in partition.groups().iter().enumerate() {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if model.has_conflict(&group[i], &group[j]) {
                    found.push((
                        g,
                        ConflictPair {
                            members: [group[i].clone(), group[j].clone()],
                            reason: None,
                        },
                    ));
                }
            }
        }
    }
    found
}
