//! Player use cases: reading a player and resetting the demo world.

use std::sync::Arc;

mod error;
mod get_player;
mod reset_player;
mod seed;

pub use error::PlayerError;
pub use get_player::GetPlayer;
pub use reset_player::ResetPlayer;
pub use seed::{demo_player, DEMO_PLAYER_ID};

/// Container for player use cases.
pub struct PlayerUseCases {
    pub get_player: Arc<GetPlayer>,
    pub reset_player: Arc<ResetPlayer>,
}

impl PlayerUseCases {
    pub fn new(get_player: Arc<GetPlayer>, reset_player: Arc<ResetPlayer>) -> Self {
        Self {
            get_player,
            reset_player,
        }
    }
}
