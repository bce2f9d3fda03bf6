//! Use item use case.
//!
//! Fires a weapon or throwable, drinks a consumable, or inspects a quest item.

use std::sync::Arc;

use rucksack_domain::{ItemId, PlayerId, UseRejection};

use crate::infrastructure::ports::{PlayerRepo, WriteOutcome};

use super::error::InventoryError;
use super::types::UseItemResult;

/// Use item use case.
///
/// Orchestrates: inventory lookup, the pure use rules, and a single
/// conditional write (or a removal when a weapon or throwable is exhausted).
pub struct UseItem {
    players: Arc<dyn PlayerRepo>,
}

impl UseItem {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    /// Execute the use item use case.
    ///
    /// # Returns
    /// * `Ok(UseItemResult)` - The effect plus the item as it was before use
    /// * `Err(InventoryError)` - Missing item, depletion, full health, or store failure
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<UseItemResult, InventoryError> {
        let player = self
            .players
            .get_with_item(player_id, item_id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(player_id, item_id))?;

        let item = player
            .find_item(item_id)
            .cloned()
            .ok_or_else(|| InventoryError::item_not_found(player_id, item_id))?;

        let plan = match item.plan_use(player.stats()) {
            Ok(plan) => plan,
            Err(UseRejection::Depleted { removes_item }) => {
                if removes_item {
                    // Another request may have removed it already; the answer is the same.
                    let outcome = self.players.remove_item(player_id, item_id).await?;
                    tracing::info!(
                        player_id = %player_id,
                        item_id = %item_id,
                        ?outcome,
                        "Removed depleted item"
                    );
                }
                return Err(InventoryError::ItemDepleted {
                    item_id: item_id.clone(),
                    removed: removes_item,
                });
            }
            Err(UseRejection::AtMaxHealth) => {
                return Err(InventoryError::AtMaxHealth {
                    item_name: item.name.to_string(),
                });
            }
        };

        if !plan.delta.is_empty() {
            match self
                .players
                .increment_item(player_id, item_id, &plan.delta)
                .await?
            {
                WriteOutcome::Applied => {}
                WriteOutcome::NoMatch => {
                    tracing::warn!(
                        player_id = %player_id,
                        item_id = %item_id,
                        "Item vanished before the use could be written"
                    );
                    return Err(InventoryError::ConcurrentModification {
                        item_id: item_id.clone(),
                    });
                }
            }
        }

        tracing::info!(
            player_id = %player_id,
            item_id = %item_id,
            kind = item.kind.tag(),
            effect = ?plan.effect,
            "Used item"
        );

        Ok(UseItemResult {
            item,
            effect: plan.effect,
        })
    }
}
