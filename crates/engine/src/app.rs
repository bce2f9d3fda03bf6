//! Application state and composition.

use std::sync::Arc;

use rucksack_domain::Player;

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::inventory::{AddItem, DiscardItem, InventoryUseCases, UseItem};
use crate::use_cases::player::{GetPlayer, PlayerUseCases, ResetPlayer};

/// Main application state.
///
/// Holds the use cases, each sharing the same player store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub inventory: InventoryUseCases,
    pub player: PlayerUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// `reset_template` is the player that `/init` restores.
    pub fn new(player_repo: Arc<dyn PlayerRepo>, reset_template: Player) -> Self {
        let inventory = InventoryUseCases::new(
            Arc::new(UseItem::new(player_repo.clone())),
            Arc::new(DiscardItem::new(player_repo.clone())),
            Arc::new(AddItem::new(player_repo.clone())),
        );
        let player = PlayerUseCases::new(
            Arc::new(GetPlayer::new(player_repo.clone())),
            Arc::new(ResetPlayer::new(player_repo, reset_template)),
        );

        Self {
            use_cases: UseCases { inventory, player },
        }
    }
}
