//! Discard item use case.
//!
//! Throws an item out of the rucksack for good.

use std::sync::Arc;

use rucksack_domain::{ItemId, PlayerId};

use crate::infrastructure::ports::{PlayerRepo, WriteOutcome};

use super::error::InventoryError;
use super::types::DiscardItemResult;

/// Discard item use case.
pub struct DiscardItem {
    players: Arc<dyn PlayerRepo>,
}

impl DiscardItem {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    /// Remove the first item carrying `item_id`.
    ///
    /// A concurrent removal between the read and the write is reported as
    /// `ItemNotFound`: from the caller's view the item is already gone.
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<DiscardItemResult, InventoryError> {
        let player = self
            .players
            .get_with_item(player_id, item_id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(player_id, item_id))?;

        let item = player
            .find_item(item_id)
            .cloned()
            .ok_or_else(|| InventoryError::item_not_found(player_id, item_id))?;

        match self.players.remove_item(player_id, item_id).await? {
            WriteOutcome::Applied => {
                tracing::info!(player_id = %player_id, item_id = %item_id, "Discarded item");
                Ok(DiscardItemResult { item })
            }
            WriteOutcome::NoMatch => Err(InventoryError::item_not_found(player_id, item_id)),
        }
    }
}
