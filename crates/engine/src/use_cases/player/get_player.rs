//! Get player use case.

use std::sync::Arc;

use rucksack_domain::{Player, PlayerId};

use crate::infrastructure::ports::PlayerRepo;

use super::error::PlayerError;

/// Load a player with their full inventory.
pub struct GetPlayer {
    players: Arc<dyn PlayerRepo>,
}

impl GetPlayer {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<Player, PlayerError> {
        self.players
            .get(player_id)
            .await?
            .ok_or_else(|| PlayerError::NotFound(player_id.clone()))
    }
}
