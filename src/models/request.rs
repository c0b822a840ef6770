//! Partition requests and target group sizes.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// How the roster should be divided.
///
/// Exactly one mode is active per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionRequest {
    /// Produce exactly `n` groups of near-equal size.
    FixedGroupCount(usize),
    /// Produce groups of `k` members; the last group takes the remainder.
    FixedGroupSize(usize),
}

/// Discriminant of a [`PartitionRequest`], used for request bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// Value is a group count.
    GroupCount,
    /// Value is a per-group size.
    GroupSize,
}

impl PartitionRequest {
    /// Creates a fixed-group-count request.
    pub fn group_count(n: usize) -> Self {
        Self::FixedGroupCount(n)
    }

    /// Creates a fixed-group-size request.
    pub fn group_size(k: usize) -> Self {
        Self::FixedGroupSize(k)
    }

    /// The request mode.
    pub fn mode(&self) -> RequestMode {
        match self {
            Self::FixedGroupCount(_) => RequestMode::GroupCount,
            Self::FixedGroupSize(_) => RequestMode::GroupSize,
        }
    }

    /// The numeric parameter (count or size).
    pub fn value(&self) -> usize {
        match *self {
            Self::FixedGroupCount(n) => n,
            Self::FixedGroupSize(k) => k,
        }
    }

    /// Checks that the parameter is at least 1.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero count or size.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::FixedGroupCount(0) => Err(EngineError::InvalidArgument(
                "group count must be at least 1".into(),
            )),
            Self::FixedGroupSize(0) => Err(EngineError::InvalidArgument(
                "group size must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// Ordered, strictly positive group sizes.
///
/// One entry per group to produce. The sum must match the number of
/// eligible participants when passed to the partitioner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSizes(Vec<usize>);

impl TargetSizes {
    /// Wraps explicit sizes.
    ///
    /// # Errors
    /// `InvalidArgument` if any size is zero.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(EngineError::InvalidArgument(format!(
                "target size at index {pos} is zero"
            )));
        }
        Ok(Self(sizes))
    }

    /// No groups (used for an empty roster).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn from_positive(sizes: Vec<usize>) -> Self {
        debug_assert!(sizes.iter().all(|&s| s > 0));
        Self(sizes)
    }

    /// Sizes in group order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no groups are planned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all sizes (participants covered).
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Size of the largest group.
    pub fn max_size(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Size of the smallest group.
    pub fn min_size(&self) -> usize {
        self.0.iter().copied().min().unwrap_or(0)
    }
}
