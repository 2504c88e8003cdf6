// Warning ledger - core business logic for moderator-issued warnings.
//
// Warnings are kept per guild, per member, in the order they were issued.
// The position of a reason in its list is its warning number.
//
// NO Discord dependencies here - just pure domain logic.

use super::moderation_models::WarningError;
use async_trait::async_trait;

// ============================================================================
// STORAGE TRAIT (PORT)
// ============================================================================

/// Trait for holding warning lists.
///
/// Implementations must keep "no warnings" representable by absence only:
/// a member either has a non-empty list or no entry at all.
#[async_trait]
pub trait WarningStore: Send + Sync {
    /// Append a reason to a member's list, creating it if needed.
    /// Returns the new length. Must be atomic per (guild, member).
    async fn append(
        &self,
        guild_id: u64,
        member_id: u64,
        reason: String,
    ) -> Result<usize, WarningError>;

    /// All reasons for a member, oldest first. Never creates an entry.
    async fn list(&self, guild_id: u64, member_id: u64) -> Result<Vec<String>, WarningError>;

    /// Drop a member's list. Returns whether one existed.
    async fn remove(&self, guild_id: u64, member_id: u64) -> Result<bool, WarningError>;
}

// ============================================================================
// CORE SERVICE
// ============================================================================

/// The warning ledger.
///
/// Lists grow without bound; there is no cap on how many warnings a single
/// member can collect.
pub struct WarningService<S: WarningStore> {
    store: S,
}

impl<S: WarningStore> WarningService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a warning and return the member's new total.
    pub async fn add_warning(
        &self,
        guild_id: u64,
        member_id: u64,
        reason: &str,
    ) -> Result<usize, WarningError> {
        if reason.trim().is_empty() {
            return Err(WarningError::EmptyReason);
        }

        let count = self
            .store
            .append(guild_id, member_id, reason.to_string())
            .await?;

        tracing::info!(guild_id, member_id, count, "Warning recorded");
        Ok(count)
    }

    pub async fn list_warnings(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Vec<String>, WarningError> {
        self.store.list(guild_id, member_id).await
    }

    /// Remove every warning for a member. Returns `false` if there were none.
    pub async fn clear_warnings(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<bool, WarningError> {
        let removed = self.store.remove(guild_id, member_id).await?;
        if removed {
            tracing::info!(guild_id, member_id, "Warnings cleared");
        }
        Ok(removed)
    }
}
