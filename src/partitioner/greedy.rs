//! Conflict-minimizing greedy placement.
//!
//! Fallback when bounded backtracking finds no conflict-free assignment.
//!
//! # Algorithm
//! 1. Empty every group.
//! 2. For each participant in the same order the search used, pick the
//!    group with room that has the fewest conflicting members.
//! 3. Ties go to the currently smallest group, then to the lowest index.
//!
//! Always completes: the target sizes sum to the participant count, so
//! some group has room at every step.

use super::search::Placement;
use crate::models::{PlacementObserver, Strategy};

/// Places every participant in `order`. Returns `false` only if the
/// targets leave no room for someone, which the caller rules out.
pub(crate) fn place_greedy<O: PlacementObserver>(
    placement: &mut Placement<'_, O>,
    order: &[usize],
) -> bool {
    placement.reset();
    for &p in order {
        let best = (0..placement.groups.len())
            .filter(|&g| placement.has_room(g))
            .min_by_key(|&g| {
                let group = &placement.groups[g];
                (placement.conflicts.count_in(p, group), group.len())
            });
        match best {
            Some(g) => placement.push(p, g, Strategy::Greedy),
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit;
    use crate::models::{ConflictModel, Partition, PlacementTrace, TraceEvent};
    use crate::partitioner::search::LocalConflicts;

    fn greedy(ids: &[&str], model: &ConflictModel, targets: &[usize]) -> Vec<Vec<String>> {
        let local = LocalConflicts::build(ids, model);
        let order: Vec<usize> = (0..ids.len()).collect();
        let mut observer = ();
        let mut placement = Placement::new(ids, &local, targets, &mut observer);
        assert!(place_greedy(&mut placement, &order));
        placement.into_id_groups()
    }

    #[test]
    fn test_prefers_smallest_group_on_tie() {
        let groups = greedy(&["A", "B", "C", "D"], &ConflictModel::new(), &[2, 2]);
        assert_eq!(groups, vec![vec!["A", "C"], vec!["B", "D"]]);
    }

    #[test]
    fn test_single_group_takes_everyone() {
        let model = ConflictModel::new()
            .with_conflict("A", "B")
            .with_conflict("A", "C")
            .with_conflict("B", "C");
        let groups = greedy(&["A", "B", "C"], &model, &[3]);
        assert_eq!(groups, vec![vec!["A", "B", "C"]]);
        assert_eq!(audit(&Partition::new(groups), &model).conflict_count, 3);
    }

    #[test]
    fn test_minimizes_conflicts_under_pressure() {
        // Triangle into [2, 1]: one conflict is unavoidable, never more.
        let model = ConflictModel::new()
            .with_conflict("A", "B")
            .with_conflict("A", "C")
            .with_conflict("B", "C");
        let groups = greedy(&["A", "B", "C"], &model, &[2, 1]);
        assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(audit(&Partition::new(groups), &model).conflict_count, 1);
    }

    #[test]
    fn test_respects_targets() {
        let model = ConflictModel::new().with_conflict("A", "B");
        let groups = greedy(&["A", "B", "C", "D", "E"], &model, &[3, 2]);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn test_no_room_reports_failure() {
        let ids = ["A", "B"];
        let local = LocalConflicts::build(&ids, &ConflictModel::new());
        let targets = [1];
        let mut observer = ();
        let mut placement = Placement::new(&ids, &local, &targets, &mut observer);
        assert!(!place_greedy(&mut placement, &[0, 1]));
    }

    #[test]
    fn test_reset_is_traced() {
        let ids = ["A"];
        let local = LocalConflicts::build(&ids, &ConflictModel::new());
        let targets = [1];
        let mut trace = PlacementTrace::new();
        let mut placement = Placement::new(&ids, &local, &targets, &mut trace);
        assert!(place_greedy(&mut placement, &[0]));
        drop(placement);
        assert_eq!(trace.events()[0], TraceEvent::Reset);
        assert!(matches!(
            trace.events()[1],
            TraceEvent::Placed {
                strategy: Strategy::Greedy,
                ..
            }
        ));
    }
}
