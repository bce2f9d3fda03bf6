//! Reset player use case.
//!
//! Restores the demo player to its template state.

use std::sync::Arc;

use rucksack_domain::Player;

use crate::infrastructure::ports::PlayerRepo;

use super::error::PlayerError;

/// Replace the stored player with a fixed template.
///
/// The template's own id is the key that gets replaced, so the reset player is
/// always readable under the id it was written with.
pub struct ResetPlayer {
    players: Arc<dyn PlayerRepo>,
    template: Player,
}

impl ResetPlayer {
    pub fn new(players: Arc<dyn PlayerRepo>, template: Player) -> Self {
        Self { players, template }
    }

    pub async fn execute(&self) -> Result<Player, PlayerError> {
        self.players.replace(&self.template).await?;
        tracing::info!(
            player_id = %self.template.id(),
            items = self.template.inventory().len(),
            "Reset player to template"
        );
        Ok(self.template.clone())
    }
}
