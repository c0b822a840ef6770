//! Repetition-avoiding random selection.
//!
//! # Policy
//!
//! Pick uniformly from the pool, excluding IDs in the pool's history.
//! If that excludes everyone, clear the history and pick from the whole
//! pool. Then push the pick to the front of the history, truncated to
//! `max(1, ceil(pool size × ratio))` entries.
//!
//! With a pool of two or more this never repeats the previous pick, and
//! because the history stays shorter than the pool every member keeps
//! rotating through.

mod history;
mod session;

pub use history::SelectionHistory;
pub use session::{PoolKey, SelectionSession};

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Result of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The chosen participant ID.
    pub participant_id: String,
    /// History after recording the choice.
    pub history: SelectionHistory,
    /// Whether the history was cleared because it covered the whole pool.
    pub history_reset: bool,
}

/// Selects one ID from `pool` using the thread RNG and default settings.
///
/// # Errors
/// `EmptyPool` if `pool` is empty.
///
/// # Example
/// ```
/// use u_grouping::selection::{select, SelectionHistory};
///
/// let pool = vec!["X".to_string(), "Y".to_string()];
/// let (first, history) = select(&pool, &SelectionHistory::new()).unwrap();
/// let (second, _) = select(&pool, &history).unwrap();
/// assert_ne!(first, second);
/// ```
pub fn select(pool: &[String], history: &SelectionHistory) -> Result<(String, SelectionHistory)> {
    let selection = Selector::new().select(pool, history, &mut rand::rng())?;
    Ok((selection.participant_id, selection.history))
}

/// Selector with a configurable history ratio.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: EngineConfig,
}

impl Selector {
    /// Creates a selector with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// History bound for a pool of `pool_size` members.
    pub fn history_bound(&self, pool_size: usize) -> usize {
        self.config.history_bound(pool_size)
    }

    /// Selects one ID from `pool`.
    ///
    /// `history` is not modified; the updated history is returned in the
    /// [`Selection`].
    ///
    /// # Errors
    /// `EmptyPool` if `pool` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        pool: &[String],
        history: &SelectionHistory,
        rng: &mut R,
    ) -> Result<Selection> {
        if pool.is_empty() {
            return Err(EngineError::EmptyPool);
        }

        let fresh: Vec<&String> = pool.iter().filter(|id| !history.contains(id)).collect();
        let mut next = history.clone();
        let history_reset = fresh.is_empty();

        let chosen = if history_reset {
            tracing::debug!(
                pool = pool.len(),
                history = history.len(),
                "history covers the whole pool, clearing"
            );
            next.clear();
            pool.choose(rng)
        } else {
            fresh.choose(rng).copied()
        }
        .ok_or(EngineError::EmptyPool)?
        .clone();

        next.record(chosen.clone(), self.history_bound(pool.len()));
        Ok(Selection {
            participant_id: chosen,
            history: next,
            history_reset,
        })
    }
}
