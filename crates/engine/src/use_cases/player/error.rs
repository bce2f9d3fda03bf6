//! Player operation errors.

use rucksack_domain::PlayerId;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while reading or resetting a player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Player not found: {0}")]
    NotFound(PlayerId),
    #[error("Player store unavailable: {0}")]
    StoreUnavailable(#[from] RepoError),
}
