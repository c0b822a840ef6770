//! Balanced, conflict-aware partitioning.
//!
//! # Algorithm
//!
//! 1. Shuffle the eligible participants with a seeded random source.
//!    The shuffle is the only source of variation: a fixed seed gives a
//!    fixed partition.
//! 2. Run bounded backtracking ([`backtrack`]) for a conflict-free
//!    assignment that honors the target sizes.
//! 3. If the search is exhausted or runs out of budget, fall back to the
//!    conflict-minimizing greedy pass ([`greedy`]) over the same order.
//! 4. Audit the result and report which phase produced it.
//!
//! # Example
//!
//! ```
//! use u_grouping::models::{ConflictModel, ConflictPair, Participant, PartitionRequest};
//! use u_grouping::partitioner::partition;
//! use u_grouping::planner::plan_sizes;
//!
//! let eligible: Vec<Participant> = ["A", "B", "C", "D"]
//!     .into_iter()
//!     .map(Participant::new)
//!     .collect();
//! let model = ConflictModel::build(&[ConflictPair::new("A", "B").unwrap()]);
//! let sizes = plan_sizes(eligible.len(), &PartitionRequest::group_count(2)).unwrap();
//!
//! let outcome = partition(&eligible, &model, &sizes, Some(7)).unwrap();
//! assert_eq!(outcome.quality.conflict_count, 0);
//! assert_ne!(outcome.partition.group_of("A"), outcome.partition.group_of("B"));
//! ```

mod backtrack;
mod greedy;
mod search;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{
    ConflictModel, Participant, Partition, PartitionOutcome, PartitionQuality, PlacementObserver,
    PlacementTrace, Strategy, TargetSizes,
};
use backtrack::Backtracker;
use search::{LocalConflicts, Placement, SearchStatus};

/// Partitions `eligible` into groups of `sizes` using default settings.
///
/// With `seed = None` the engine draws a seed from the thread RNG and
/// reports it in the outcome, so any run can be reproduced.
///
/// # Errors
/// `SizeMismatch` if `sizes` does not sum to `eligible.len()`.
pub fn partition(
    eligible: &[Participant],
    model: &ConflictModel,
    sizes: &TargetSizes,
    seed: Option<u64>,
) -> Result<PartitionOutcome> {
    BalancedPartitioner::new().partition(eligible, model, sizes, seed)
}

/// Conflict-aware partitioner with tunable search budget.
#[derive(Debug, Clone, Default)]
pub struct BalancedPartitioner {
    config: EngineConfig,
}

impl BalancedPartitioner {
    /// Creates a partitioner with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Partitions with a seeded shuffle.
    ///
    /// Records a placement trace when the configuration asks for one.
    pub fn partition(
        &self,
        eligible: &[Participant],
        model: &ConflictModel,
        sizes: &TargetSizes,
        seed: Option<u64>,
    ) -> Result<PartitionOutcome> {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut outcome = if self.config.record_trace {
            let mut trace = PlacementTrace::new();
            let mut outcome =
                self.partition_observed(eligible, model, sizes, &mut rng, &mut trace)?;
            outcome.trace = Some(trace);
            outcome
        } else {
            self.partition_observed(eligible, model, sizes, &mut rng, &mut ())?
        };
        outcome.seed = Some(seed);
        Ok(outcome)
    }

    /// Partitions using a caller-supplied random source.
    pub fn partition_with_rng<R: Rng + ?Sized>(
        &self,
        eligible: &[Participant],
        model: &ConflictModel,
        sizes: &TargetSizes,
        rng: &mut R,
    ) -> Result<PartitionOutcome> {
        self.partition_observed(eligible, model, sizes, rng, &mut ())
    }

    /// Partitions and records every placement step.
    pub fn partition_traced<R: Rng + ?Sized>(
        &self,
        eligible: &[Participant],
        model: &ConflictModel,
        sizes: &TargetSizes,
        rng: &mut R,
    ) -> Result<PartitionOutcome> {
        let mut trace = PlacementTrace::new();
        let mut outcome = self.partition_observed(eligible, model, sizes, rng, &mut trace)?;
        outcome.trace = Some(trace);
        Ok(outcome)
    }

    /// Partitions, reporting placement events to `observer`.
    ///
    /// The observer sees events only; it cannot change the outcome.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(participants = eligible.len(), groups = sizes.len())
    )]
    pub fn partition_observed<R, O>(
        &self,
        eligible: &[Participant],
        model: &ConflictModel,
        sizes: &TargetSizes,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<PartitionOutcome>
    where
        R: Rng + ?Sized,
        O: PlacementObserver,
    {
        let n = eligible.len();
        if sizes.total() != n {
            return Err(EngineError::SizeMismatch {
                expected: n,
                actual: sizes.total(),
            });
        }

        let ids: Vec<&str> = eligible.iter().map(|p| p.id.as_str()).collect();
        let conflicts = LocalConflicts::build(&ids, model);
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);

        let budget = self.config.search_budget(n, sizes.len());
        let mut placement = Placement::new(&ids, &conflicts, sizes.as_slice(), observer);
        let (status, nodes_visited) = Backtracker::new(&mut placement, &order, budget).run();

        let strategy = match status {
            SearchStatus::Found => Strategy::Backtracking,
            SearchStatus::Exhausted | SearchStatus::BudgetExceeded => {
                tracing::debug!(?status, nodes_visited, budget, "backtracking gave up, placing greedily");
                if !greedy::place_greedy(&mut placement, &order) {
                    return Err(EngineError::SizeMismatch {
                        expected: n,
                        actual: sizes.total(),
                    });
                }
                Strategy::Greedy
            }
        };

        let partition = Partition::new(placement.into_id_groups());
        let quality = PartitionQuality::calculate(&partition, model);

        tracing::info!(
            ?strategy,
            conflicts = quality.conflict_count,
            nodes_visited,
            "partition complete"
        );
        if !quality.is_conflict_free() {
            tracing::warn!(
                conflicts = quality.conflict_count,
                "no conflict-free grouping found; returning minimal-conflict grouping"
            );
        }

        Ok(PartitionOutcome {
            partition,
            quality,
            strategy,
            nodes_visited,
            seed: None,
            trace: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictPair, PartitionRequest, TraceEvent};
    use crate::planner::plan_sizes;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::new(format!("S{i:02}")).with_name(format!("Student {i}")))
            .collect()
    }

    fn ids_of(eligible: &[Participant]) -> Vec<&str> {
        eligible.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_conflicts_even_split() {
        let eligible = roster(9);
        let sizes = plan_sizes(9, &PartitionRequest::group_count(3)).unwrap();
        let outcome = partition(&eligible, &ConflictModel::new(), &sizes, Some(1)).unwrap();

        assert_eq!(outcome.partition.sizes(), vec![3, 3, 3]);
        assert_eq!(outcome.quality.conflict_count, 0);
        assert_eq!(outcome.strategy, Strategy::Backtracking);
        assert!(outcome.partition.is_partition_of(ids_of(&eligible)));
    }

    #[test]
    fn test_size_mismatch() {
        let eligible = roster(5);
        let sizes = TargetSizes::new(vec![2, 2]).unwrap();
        let err = partition(&eligible, &ConflictModel::new(), &sizes, Some(1)).unwrap_err();
        assert_eq!(
            err,
            EngineError::SizeMismatch {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_empty_roster() {
        let outcome =
            partition(&[], &ConflictModel::new(), &TargetSizes::empty(), Some(3)).unwrap();
        assert!(outcome.partition.is_empty());
        assert_eq!(outcome.quality.conflict_count, 0);
    }

    #[test]
    fn test_same_seed_same_partition() {
        let eligible = roster(12);
        let model = ConflictModel::new()
            .with_conflict("S00", "S01")
            .with_conflict("S02", "S03");
        let sizes = plan_sizes(12, &PartitionRequest::group_size(4)).unwrap();

        let a = partition(&eligible, &model, &sizes, Some(42)).unwrap();
        let b = partition(&eligible, &model, &sizes, Some(42)).unwrap();
        assert_eq!(a.partition, b.partition);
        assert_eq!(a.seed, Some(42));
    }

    #[test]
    fn test_unseeded_run_reports_reproducible_seed() {
        let eligible = roster(10);
        let sizes = plan_sizes(10, &PartitionRequest::group_count(3)).unwrap();
        let model = ConflictModel::new().with_conflict("S00", "S09");
        let first = partition(&eligible, &model, &sizes, None).unwrap();
        let replay = partition(&eligible, &model, &sizes, first.seed).unwrap();
        assert_eq!(first.partition, replay.partition);
    }

    #[test]
    fn test_separates_every_conflicting_pair_when_possible() {
        let eligible = roster(20);
        // A perfect matching of conflicts; 4 groups of 5 can always split it.
        let pairs: Vec<ConflictPair> = (0..10)
            .map(|i| {
                ConflictPair::new(format!("S{:02}", 2 * i), format!("S{:02}", 2 * i + 1)).unwrap()
            })
            .collect();
        let model = ConflictModel::build(&pairs);
        let sizes = plan_sizes(20, &PartitionRequest::group_count(4)).unwrap();

        for seed in 0..20 {
            let outcome = partition(&eligible, &model, &sizes, Some(seed)).unwrap();
            assert_eq!(outcome.quality.conflict_count, 0, "seed {seed}");
            assert_eq!(outcome.partition.sizes(), vec![5, 5, 5, 5]);
        }
    }

    #[test]
    fn test_triangle_single_group_falls_back() {
        let eligible: Vec<Participant> = ["A", "B", "C"].into_iter().map(Participant::new).collect();
        let model = ConflictModel::new()
            .with_conflict("A", "B")
            .with_conflict("A", "C")
            .with_conflict("B", "C");
        let sizes = plan_sizes(3, &PartitionRequest::group_count(1)).unwrap();

        let outcome = partition(&eligible, &model, &sizes, Some(5)).unwrap();
        assert_eq!(outcome.partition.len(), 1);
        assert_eq!(outcome.quality.conflict_count, 3);
        assert_eq!(outcome.strategy, Strategy::Greedy);
    }

    #[test]
    fn test_dense_conflicts_stay_within_budget() {
        // Everyone conflicts with everyone: no zero-conflict grouping exists
        // and exhaustive search would be enormous.
        let eligible = roster(24);
        let mut model = ConflictModel::new();
        for i in 0..24 {
            for j in (i + 1)..24 {
                model.add(&eligible[i].id, &eligible[j].id);
            }
        }
        let sizes = plan_sizes(24, &PartitionRequest::group_count(4)).unwrap();
        let partitioner = BalancedPartitioner::new();
        let budget = partitioner.config().search_budget(24, 4);

        let outcome = partitioner.partition(&eligible, &model, &sizes, Some(9)).unwrap();
        assert_eq!(outcome.strategy, Strategy::Greedy);
        assert!(outcome.nodes_visited <= budget + 1);
        // Four complete graphs of six: 4 × C(6, 2).
        assert_eq!(outcome.quality.conflict_count, 60);
        assert_eq!(outcome.partition.sizes(), vec![6, 6, 6, 6]);
    }

    #[test]
    fn test_tiny_budget_still_places_everyone() {
        // A triangle cannot be split across two groups.
        let eligible = roster(8);
        let model = ConflictModel::new()
            .with_conflict("S00", "S01")
            .with_conflict("S01", "S02")
            .with_conflict("S00", "S02");
        let sizes = plan_sizes(8, &PartitionRequest::group_count(2)).unwrap();
        let config = EngineConfig::default()
            .with_search_budget_factor(1)
            .with_min_search_budget(1);

        let outcome = BalancedPartitioner::new()
            .with_config(config)
            .partition(&eligible, &model, &sizes, Some(11))
            .unwrap();
        assert_eq!(outcome.strategy, Strategy::Greedy);
        assert!(outcome.nodes_visited <= 17);
        assert!(outcome.partition.is_partition_of(ids_of(&eligible)));
        assert_eq!(outcome.partition.sizes(), vec![4, 4]);
        assert!(outcome.quality.conflict_count >= 1);
    }

    #[test]
    fn test_trace_replays_to_final_partition() {
        let eligible = roster(6);
        let model = ConflictModel::new()
            .with_conflict("S00", "S01")
            .with_conflict("S02", "S03");
        let sizes = plan_sizes(6, &PartitionRequest::group_count(2)).unwrap();
        let mut rng = StdRng::seed_from_u64(21);

        let outcome = BalancedPartitioner::new()
            .partition_traced(&eligible, &model, &sizes, &mut rng)
            .unwrap();
        let trace = outcome.trace.as_ref().unwrap();
        let replayed = trace.snapshot_at(trace.len(), outcome.partition.len());
        assert_eq!(replayed, outcome.partition.groups());
        assert!(matches!(trace.events()[0], TraceEvent::Placed { .. }));
    }

    #[test]
    fn test_trace_does_not_change_outcome() {
        let eligible = roster(10);
        let model = ConflictModel::new()
            .with_conflict("S00", "S01")
            .with_conflict("S01", "S02")
            .with_conflict("S00", "S02");
        let sizes = plan_sizes(10, &PartitionRequest::group_count(3)).unwrap();

        let plain = BalancedPartitioner::new()
            .partition(&eligible, &model, &sizes, Some(77))
            .unwrap();
        let traced = BalancedPartitioner::new()
            .with_config(EngineConfig::default().with_trace(true))
            .partition(&eligible, &model, &sizes, Some(77))
            .unwrap();
        assert_eq!(plain.partition, traced.partition);
        assert!(plain.trace.is_none());
        assert!(traced.trace.is_some());
    }

    #[test]
    fn test_stale_conflicts_are_inert() {
        let eligible = roster(4);
        let model = ConflictModel::new().with_conflict("S00", "GONE");
        let sizes = plan_sizes(4, &PartitionRequest::group_count(2)).unwrap();
        let outcome = partition(&eligible, &model, &sizes, Some(2)).unwrap();
        assert_eq!(outcome.quality.conflict_count, 0);
        assert_eq!(outcome.strategy, Strategy::Backtracking);
    }
}
