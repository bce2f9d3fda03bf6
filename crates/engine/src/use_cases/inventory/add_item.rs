//! Add item use case.
//!
//! Puts a new item at the end of a player's inventory.

use std::sync::Arc;

use rucksack_domain::{Item, PlayerId};
use rucksack_shared::NewItemData;

use crate::infrastructure::ports::{PlayerRepo, WriteOutcome};

use super::error::InventoryError;

/// Add item use case.
///
/// Only the item's shape is checked (id, name, known type). Duplicate ids are
/// accepted; later operations act on the first match.
pub struct AddItem {
    players: Arc<dyn PlayerRepo>,
}

impl AddItem {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn execute(
        &self,
        player_id: &PlayerId,
        data: NewItemData,
    ) -> Result<Item, InventoryError> {
        let item = Item::try_from(data)?;

        match self.players.append_item(player_id, &item).await? {
            WriteOutcome::Applied => {
                tracing::info!(
                    player_id = %player_id,
                    item_id = %item.id,
                    kind = item.kind.tag(),
                    "Added item"
                );
                Ok(item)
            }
            WriteOutcome::NoMatch => Err(InventoryError::PlayerNotFound(player_id.clone())),
        }
    }
}
