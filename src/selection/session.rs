//! Per-view selection state.
//!
//! A [`SelectionSession`] keeps one history for the whole roster and one
//! per group of the current partition, and drops them when what they
//! describe goes stale.
//!
//! The session is single-owner (`&mut self`). Callers sharing one across
//! threads wrap it in a `Mutex`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{SelectionHistory, Selector};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{Participant, Partition};

/// Identifies a selection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolKey {
    /// The whole eligible roster.
    Global,
    /// One group of the current partition, by index.
    Group(usize),
}

/// Selection histories scoped to one roster view.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    selector: Selector,
    histories: HashMap<PoolKey, SelectionHistory>,
}

impl SelectionSession {
    /// Creates a session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.selector = Selector::new().with_config(config);
        self
    }

    /// Selects from an explicit pool, updating that pool's history on success.
    pub fn select_from<R: Rng + ?Sized>(
        &mut self,
        key: PoolKey,
        pool: &[String],
        rng: &mut R,
    ) -> Result<String> {
        let current = self.histories.get(&key).cloned().unwrap_or_default();
        let selection = self.selector.select(pool, &current, rng)?;
        self.histories.insert(key, selection.history);
        Ok(selection.participant_id)
    }

    /// Selects from the whole eligible roster.
    pub fn select_global<R: Rng + ?Sized>(
        &mut self,
        eligible: &[Participant],
        rng: &mut R,
    ) -> Result<String> {
        let pool: Vec<String> = eligible.iter().map(|p| p.id.clone()).collect();
        self.select_from(PoolKey::Global, &pool, rng)
    }

    /// Selects from one group of `partition`.
    ///
    /// # Errors
    /// `InvalidArgument` if `group_index` is out of range; `EmptyPool`
    /// if the group has no members.
    pub fn select_in_group<R: Rng + ?Sized>(
        &mut self,
        partition: &Partition,
        group_index: usize,
        rng: &mut R,
    ) -> Result<String> {
        let group = partition.group(group_index).ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "group {group_index} does not exist ({} groups)",
                partition.len()
            ))
        })?;
        self.select_from(PoolKey::Group(group_index), group, rng)
    }

    /// History for `key`, if any selection was made from it.
    pub fn history(&self, key: PoolKey) -> Option<&SelectionHistory> {
        self.histories.get(&key)
    }

    /// Drops all group-scoped histories. Call after a new partition.
    pub fn on_partition_changed(&mut self) {
        self.histories.retain(|key, _| *key == PoolKey::Global);
        tracing::debug!("partition changed, cleared group histories");
    }

    /// Drops every history. Call after the eligible roster changes.
    ///
    /// Group histories go too: groups drawn from the old roster no longer
    /// describe who is eligible.
    pub fn on_roster_changed(&mut self) {
        self.histories.clear();
        tracing::debug!("roster changed, cleared all selection histories");
    }
}
