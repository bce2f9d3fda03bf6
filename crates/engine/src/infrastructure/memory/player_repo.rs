//! In-process player store.
//!
//! Each write runs under the map's per-entry lock, so the item-presence check
//! and the mutation are atomic with respect to other writers of the same
//! player.

use async_trait::async_trait;
use dashmap::DashMap;
use rucksack_domain::{Item, ItemDelta, ItemId, Player, PlayerId};

use crate::infrastructure::ports::{PlayerRepo, RepoError, WriteOutcome};

#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: DashMap<PlayerId, Player>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.players.get(id).map(|entry| entry.value().clone()))
    }

    async fn get_with_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<Option<Player>, RepoError> {
        Ok(self
            .players
            .get(id)
            .filter(|entry| entry.has_item(item_id))
            .map(|entry| entry.value().clone()))
    }

    async fn increment_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
        delta: &ItemDelta,
    ) -> Result<WriteOutcome, RepoError> {
        let applied = self
            .players
            .get_mut(id)
            .is_some_and(|mut entry| entry.apply_delta(item_id, delta));
        Ok(outcome(applied))
    }

    async fn remove_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<WriteOutcome, RepoError> {
        let removed = self
            .players
            .get_mut(id)
            .and_then(|mut entry| entry.remove_item(item_id))
            .is_some();
        Ok(outcome(removed))
    }

    async fn append_item(&self, id: &PlayerId, item: &Item) -> Result<WriteOutcome, RepoError> {
        let appended = match self.players.get_mut(id) {
            Some(mut entry) => {
                entry.push_item(item.clone());
                true
            }
            None => false,
        };
        Ok(outcome(appended))
    }

    async fn replace(&self, player: &Player) -> Result<(), RepoError> {
        self.players.insert(player.id().clone(), player.clone());
        Ok(())
    }
}

fn outcome(applied: bool) -> WriteOutcome {
    if applied {
        WriteOutcome::Applied
    } else {
        WriteOutcome::NoMatch
    }
}
