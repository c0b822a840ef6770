//! Engine tuning parameters.
//!
//! None of these affect correctness: any finite search budget and any
//! history ratio in `(0, 1]` satisfy the engine's guarantees.
//!
//! # Example
//!
//! ```
//! use u_grouping::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("search_budget_factor = 16").unwrap();
//! assert_eq!(config.search_budget_factor, 16);
//! assert_eq!(config.search_budget(10, 2), 1_024); // floor applies
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default node budget multiplier (nodes per participant × group).
pub const DEFAULT_SEARCH_BUDGET_FACTOR: u64 = 64;
/// Default lower bound on the node budget.
pub const DEFAULT_MIN_SEARCH_BUDGET: u64 = 1_024;
/// Default fraction of a pool remembered by selection history.
pub const DEFAULT_HISTORY_RATIO: f64 = 0.3;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Backtracking budget is `factor × participants × groups` nodes.
    pub search_budget_factor: u64,
    /// Budget floor, so tiny rosters still get a meaningful search.
    pub min_search_budget: u64,
    /// Selection history bound as a fraction of pool size.
    pub history_ratio: f64,
    /// Whether partition calls record a placement trace.
    pub record_trace: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_budget_factor: DEFAULT_SEARCH_BUDGET_FACTOR,
            min_search_budget: DEFAULT_MIN_SEARCH_BUDGET,
            history_ratio: DEFAULT_HISTORY_RATIO,
            record_trace: false,
        }
    }
}

impl EngineConfig {
    /// Parses a TOML fragment. Missing keys take their defaults.
    ///
    /// # Errors
    /// `Config` if the text is not valid TOML or holds unusable values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the budget multiplier.
    pub fn with_search_budget_factor(mut self, factor: u64) -> Self {
        self.search_budget_factor = factor;
        self
    }

    /// Sets the budget floor.
    pub fn with_min_search_budget(mut self, min: u64) -> Self {
        self.min_search_budget = min;
        self
    }

    /// Sets the history ratio.
    pub fn with_history_ratio(mut self, ratio: f64) -> Self {
        self.history_ratio = ratio;
        self
    }

    /// Enables or disables placement tracing.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    /// `Config` for a zero budget factor or a ratio outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.search_budget_factor == 0 {
            return Err(EngineError::Config(
                "search_budget_factor must be positive".into(),
            ));
        }
        if !(self.history_ratio > 0.0 && self.history_ratio <= 1.0) {
            return Err(EngineError::Config(format!(
                "history_ratio must be in (0, 1], got {}",
                self.history_ratio
            )));
        }
        Ok(())
    }

    /// Node budget for a search over `participants` into `groups` groups.
    ///
    /// Finite and a pure function of its inputs.
    pub fn search_budget(&self, participants: usize, groups: usize) -> u64 {
        let scaled = self
            .search_budget_factor
            .saturating_mul(participants as u64)
            .saturating_mul(groups as u64);
        scaled.max(self.min_search_budget)
    }

    /// Maximum history length for a pool of `pool_size` members.
    ///
    /// `ceil(pool_size × ratio)`, never below 1.
    pub fn history_bound(&self, pool_size: usize) -> usize {
        // Products like 100 × 0.3 land a hair above the integer.
        let scaled = pool_size as f64 * self.history_ratio;
        let bound = (scaled - 1e-9).ceil() as usize;
        bound.max(1)
    }
}
