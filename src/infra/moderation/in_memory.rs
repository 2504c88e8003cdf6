// IN-MEMORY implementation of WarningStore.
//
// Warnings live only as long as the process does. Nothing is written to disk.

use crate::core::moderation::{WarningError, WarningStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;

/// guild_id -> (member_id -> reasons, oldest first)
///
/// **DashMap:**
/// Each guild lives in one shard, and the entry guard holds that shard's lock
/// for the whole append or remove. Two warnings for the same member can't
/// interleave, so no count is ever lost.
pub struct InMemoryWarningStore {
    guilds: DashMap<u64, HashMap<u64, Vec<String>>>,
}

impl InMemoryWarningStore {
    pub fn new() -> Self {
        Self {
            guilds: DashMap::new(),
        }
    }

    #[cfg(test)]
    fn guild_count(&self) -> usize {
        self.guilds.len()
    }
}

impl Default for InMemoryWarningStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WarningStore for InMemoryWarningStore {
    async fn append(
        &self,
        guild_id: u64,
        member_id: u64,
        reason: String,
    ) -> Result<usize, WarningError> {
        let mut members = self.guilds.entry(guild_id).or_default();
        let list = members.entry(member_id).or_default();
        list.push(reason);
        Ok(list.len())
    }

    async fn list(&self, guild_id: u64, member_id: u64) -> Result<Vec<String>, WarningError> {
        // get() never inserts, so looking up an unknown member leaves no trace
        Ok(self
            .guilds
            .get(&guild_id)
            .and_then(|members| members.get(&member_id).cloned())
            .unwrap_or_default())
    }

    async fn remove(&self, guild_id: u64, member_id: u64) -> Result<bool, WarningError> {
        let removed = match self.guilds.get_mut(&guild_id) {
            Some(mut members) => members.remove(&member_id).is_some(),
            None => false,
        };

        // Drop the guild too once its last member is gone. The emptiness check
        // runs under the shard lock, so a concurrent append can't be lost.
        self.guilds
            .remove_if(&guild_id, |_, members| members.is_empty());

        Ok(removed)
    }
}
