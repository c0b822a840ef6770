//! Per-group scores.
//!
//! Each group of a partition carries a non-negative score. Scores belong
//! to one partition: a new partition starts from zero.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::Partition;

/// Scores indexed by group position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupScores {
    scores: Vec<u32>,
}

impl GroupScores {
    /// Zeroed scores for `group_count` groups.
    pub fn new(group_count: usize) -> Self {
        Self {
            scores: vec![0; group_count],
        }
    }

    /// Zeroed scores sized to `partition`.
    pub fn for_partition(partition: &Partition) -> Self {
        Self::new(partition.len())
    }

    /// Score of group `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.scores.get(index).copied()
    }

    /// All scores in group order.
    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    /// Adds `delta` (possibly negative), saturating at zero.
    ///
    /// # Errors
    /// `InvalidArgument` if `index` is out of range.
    pub fn adjust(&mut self, index: usize, delta: i64) -> Result<u32> {
        let slot = self.slot(index)?;
        let next = (i64::from(*slot) + delta).clamp(0, i64::from(u32::MAX));
        *slot = next as u32;
        Ok(*slot)
    }

    /// Sets the score, clamping negatives to zero.
    ///
    /// # Errors
    /// `InvalidArgument` if `index` is out of range.
    pub fn set(&mut self, index: usize, value: i64) -> Result<u32> {
        let slot = self.slot(index)?;
        *slot = value.clamp(0, i64::from(u32::MAX)) as u32;
        Ok(*slot)
    }

    /// Zeroes every score.
    pub fn reset(&mut self) {
        self.scores.iter_mut().for_each(|s| *s = 0);
    }

    /// Index of the highest-scoring group; the first one wins ties.
    pub fn leader(&self) -> Option<usize> {
        let best = *self.scores.iter().max()?;
        self.scores.iter().position(|&s| s == best)
    }

    fn slot(&mut self, index: usize) -> Result<&mut u32> {
        let len = self.scores.len();
        self.scores.get_mut(index).ok_or_else(|| {
            EngineError::InvalidArgument(format!("group {index} does not exist ({len} groups)"))
        })
    }
}
