//! Constraint-aware group partitioning and selection for rosters.
//!
//! Splits a roster into balanced groups while keeping declared
//! incompatible pairs apart, and picks participants at random without
//! immediate repeats. The engine is pure and synchronous: persistence,
//! presentation, and pacing belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Participant`, `ConflictPair`,
//!   `ConflictModel`, `PartitionRequest`, `TargetSizes`, `Partition`,
//!   `PartitionQuality`, `PlacementTrace`
//! - **`roster`**: Eligibility filtering by attendance
//! - **`planner`**: Target group sizes and request bounds
//! - **`partitioner`**: Bounded backtracking with greedy fallback
//! - **`audit`**: Conflict counting for any partition
//! - **`selection`**: Repetition-avoiding random selection and session scoping
//! - **`scoreboard`**: Per-group scores
//! - **`validation`**: Input integrity checks (duplicate IDs, bad pairs)
//! - **`config`**: Search budget and history tuning
//!
//! # Pipeline
//!
//! ```
//! use u_grouping::models::{AttendanceMap, ConflictModel, ConflictPair, Participant, PartitionRequest};
//! use u_grouping::{partitioner, planner, roster};
//!
//! let class: Vec<Participant> = (1..=9)
//!     .map(|i| Participant::new(format!("S{i}")))
//!     .collect();
//! let attendance = AttendanceMap::new();
//! let eligible = roster::filter_eligible(&class, &attendance, false);
//!
//! let model = ConflictModel::build(&[ConflictPair::new("S1", "S2").unwrap()]);
//! let sizes = planner::plan_sizes(eligible.len(), &PartitionRequest::group_count(3)).unwrap();
//! let outcome = partitioner::partition(&eligible, &model, &sizes, Some(1)).unwrap();
//!
//! assert_eq!(outcome.partition.sizes(), vec![3, 3, 3]);
//! assert_eq!(outcome.quality.conflict_count, 0);
//! ```
//!
//! # References
//!
//! - Knuth (2019), "The Art of Computer Programming", Vol. 4B (backtracking)
//! - Garey & Johnson (1979), "Computers and Intractability" (graph partitioning)

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod partitioner;
pub mod planner;
pub mod roster;
pub mod scoreboard;
pub mod selection;
pub mod validation;

pub use error::{EngineError, Result};
