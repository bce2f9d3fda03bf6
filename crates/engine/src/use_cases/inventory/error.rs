//! Inventory operation errors.

use rucksack_domain::{DomainError, ItemId, PlayerId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The player is unknown, or does not carry the item.
    #[error("Item {item_id} is not in the inventory of {player_id}")]
    ItemNotFound { player_id: PlayerId, item_id: ItemId },

    /// The item's depletable counter is exhausted. `removed` is true when the
    /// item was taken out of the inventory as part of the refusal.
    #[error("Item {item_id} is depleted")]
    ItemDepleted { item_id: ItemId, removed: bool },

    #[error("Player is already at maximum health; {item_name} was not used")]
    AtMaxHealth { item_name: String },

    #[error("Invalid item: {0}")]
    InvalidItem(#[from] DomainError),

    /// The item left the inventory between the read and the conditional write.
    #[error("Item {item_id} was modified concurrently")]
    ConcurrentModification { item_id: ItemId },

    #[error("Player store unavailable: {0}")]
    StoreUnavailable(#[from] RepoError),
}

impl InventoryError {
    pub(super) fn item_not_found(player_id: &PlayerId, item_id: &ItemId) -> Self {
        Self::ItemNotFound {
            player_id: player_id.clone(),
            item_id: item_id.clone(),
        }
    }
}
