//! Target size planning.
//!
//! Turns a [`PartitionRequest`] into concrete per-group sizes, and exposes
//! the request bounds a UI offers for a roster of a given size.
//!
//! # Distribution
//!
//! | Mode | Groups | Sizes |
//! |------|--------|-------|
//! | `FixedGroupCount(n)` | `n` | `N / n`, first `N mod n` groups get +1 |
//! | `FixedGroupSize(k)` | `ceil(N / k)` | `k`, last group holds the remainder |

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PartitionRequest, RequestMode, TargetSizes};

/// Smallest group count offered in group-count mode.
pub const MIN_GROUP_COUNT: usize = 2;
/// Largest group count offered in group-count mode.
pub const MAX_GROUP_COUNT: usize = 8;
/// Smallest group size offered in group-size mode.
pub const MIN_GROUP_SIZE: usize = 1;

/// Computes target group sizes for `eligible` participants.
///
/// The result is empty iff `eligible == 0`; otherwise every size is
/// positive and the sizes sum to `eligible`.
///
/// # Errors
/// `InvalidArgument` for a zero group count or size.
///
/// # Example
/// ```
/// use u_grouping::models::PartitionRequest;
/// use u_grouping::planner::plan_sizes;
///
/// let sizes = plan_sizes(10, &PartitionRequest::group_count(3)).unwrap();
/// assert_eq!(sizes.as_slice(), &[4, 3, 3]);
///
/// let sizes = plan_sizes(10, &PartitionRequest::group_size(4)).unwrap();
/// assert_eq!(sizes.as_slice(), &[4, 4, 2]);
/// ```
pub fn plan_sizes(eligible: usize, request: &PartitionRequest) -> Result<TargetSizes> {
    request.validate()?;
    if eligible == 0 {
        return Ok(TargetSizes::empty());
    }

    let sizes: Vec<usize> = match *request {
        PartitionRequest::FixedGroupCount(n) => {
            let base = eligible / n;
            let remainder = eligible % n;
            (0..n)
                .map(|i| base + usize::from(i < remainder))
                .filter(|&s| s > 0)
                .collect()
        }
        PartitionRequest::FixedGroupSize(k) => {
            let groups = eligible.div_ceil(k);
            (0..groups)
                .map(|i| k.min(eligible - i * k))
                .collect()
        }
    };

    tracing::debug!(eligible, ?request, ?sizes, "planned target sizes");
    Ok(TargetSizes::from_positive(sizes))
}

/// Allowed range for a request value given the roster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBounds {
    /// Smallest allowed value.
    pub min: usize,
    /// Largest allowed value (never below `min`).
    pub max: usize,
}

impl RequestBounds {
    /// Bounds for `eligible` participants in the given mode.
    ///
    /// Group count ranges over `2..=min(N, 8)`; group size over `1..=N`.
    /// An undersized roster collapses the range to its minimum.
    pub fn for_roster(eligible: usize, mode: RequestMode) -> Self {
        let (min, max) = match mode {
            RequestMode::GroupCount => (MIN_GROUP_COUNT, eligible.min(MAX_GROUP_COUNT)),
            RequestMode::GroupSize => (MIN_GROUP_SIZE, eligible),
        };
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl PartitionRequest {
    /// Returns this request with its value clamped to the roster's bounds.
    pub fn clamped(&self, eligible: usize) -> Self {
        let bounds = RequestBounds::for_roster(eligible, self.mode());
        match self.mode() {
            RequestMode::GroupCount => Self::FixedGroupCount(bounds.clamp(self.value())),
            RequestMode::GroupSize => Self::FixedGroupSize(bounds.clamp(self.value())),
        }
    }
}
