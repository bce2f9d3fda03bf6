//! Repository port traits for player storage.

use async_trait::async_trait;
use rucksack_domain::{Item, ItemDelta, ItemId, Player, PlayerId};

use super::error::RepoError;
use super::types::WriteOutcome;

// =============================================================================
// Player Store
// =============================================================================

/// Keyed player storage with conditional, item-scoped writes.
///
/// Every write that names an item is conditioned on that item still being in
/// the player's inventory at write time, and acts on the first matching item.
/// Each call is atomic on its own; there is no multi-call transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Load a player.
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, RepoError>;

    /// Load a player only if `item_id` is currently in their inventory.
    async fn get_with_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<Option<Player>, RepoError>;

    /// Add `delta` to the item's counters and the player's hp in one write.
    async fn increment_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
        delta: &ItemDelta,
    ) -> Result<WriteOutcome, RepoError>;

    /// Remove the item from the inventory.
    async fn remove_item(&self, id: &PlayerId, item_id: &ItemId)
        -> Result<WriteOutcome, RepoError>;

    /// Append an item; `NoMatch` when the player does not exist.
    async fn append_item(&self, id: &PlayerId, item: &Item) -> Result<WriteOutcome, RepoError>;

    /// Replace whatever is stored under `player.id()` with `player`.
    async fn replace(&self, player: &Player) -> Result<(), RepoError>;
}
