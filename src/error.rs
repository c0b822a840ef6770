//! Error types for the grouping engine.
//!
//! Every error is a precondition violation detected before any state
//! is mutated, so a failed call never leaves partial results behind.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A request parameter is out of range (e.g. a group count of zero).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Target group sizes do not add up to the number of eligible participants.
    #[error("Target sizes sum to {actual}, expected {expected} eligible participants")]
    SizeMismatch { expected: usize, actual: usize },

    /// Selection was requested from a pool with no members.
    #[error("Cannot select from an empty pool")]
    EmptyPool,

    /// Engine configuration could not be parsed or holds unusable values.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
