//! Grouping domain models.
//!
//! Value types shared by every engine stage. All of them are transient:
//! they are built per call and carry no hidden state.
//!
//! # Domain Mappings
//!
//! | u-grouping | Classroom | Workshop | Sports |
//! |------------|-----------|----------|--------|
//! | Participant | Student | Attendee | Player |
//! | ConflictPair | "Keep apart" note | Seating rule | Rivalry |
//! | Partition | Group assignment | Breakout rooms | Teams |

mod conflict;
mod participant;
mod partition;
mod request;
mod trace;

pub use conflict::{ConflictModel, ConflictPair};
pub use participant::{participant_ids, AttendanceMap, Participant};
pub use partition::{Partition, PartitionOutcome, PartitionQuality, Strategy};
pub use request::{PartitionRequest, RequestMode, TargetSizes};
pub use trace::{PlacementObserver, PlacementTrace, TraceEvent};
