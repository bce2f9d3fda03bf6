//! Player aggregate - the single character, its stats and its inventory
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: identity and inventory are only changed through methods
//! - **Newtypes**: `PlayerId`, `Username` are valid by construction
//! - **Builder pattern**: `with_inventory` / `with_item` for seeding
//!
//! Inventory order is insertion order. Duplicate item ids are allowed; every
//! lookup and mutation by id acts on the first match.

use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::ids::{ItemId, PlayerId};
use crate::value_objects::{ItemDelta, Stats, Username};

/// A player and everything they carry.
///
/// # Example
///
/// ```
/// use rucksack_domain::{Item, ItemId, ItemKind, ItemName, Player, PlayerId, Stats, Username};
///
/// let potion = Item::new(
///     ItemId::new("c_1").unwrap(),
///     ItemName::new("Nano-Potion").unwrap(),
///     ItemKind::consumable(Some(50), Some(5)),
/// );
/// let player = Player::new(
///     PlayerId::new("Agent_46").unwrap(),
///     Username::new("IronTony").unwrap(),
///     Stats::new(50, 150, 300),
/// )
/// .with_item(potion);
///
/// assert_eq!(player.inventory().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    username: Username,
    stats: Stats,
    #[serde(default)]
    inventory: Vec<Item>,
}

impl Player {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(id: PlayerId, username: Username, stats: Stats) -> Self {
        Self {
            id,
            username,
            stats,
            inventory: Vec::new(),
        }
    }

    pub fn with_inventory(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.inventory = items.into_iter().collect();
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[inline]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// First item carrying `item_id`, if any.
    pub fn find_item(&self, item_id: &ItemId) -> Option<&Item> {
        self.inventory.iter().find(|item| &item.id == item_id)
    }

    pub fn has_item(&self, item_id: &ItemId) -> bool {
        self.find_item(item_id).is_some()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append an item at the end of the inventory.
    pub fn push_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Remove the first item carrying `item_id`.
    ///
    /// Returns the removed item, or `None` when nothing matched.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|item| &item.id == item_id)?;
        Some(self.inventory.remove(index))
    }

    /// Apply `delta` to the first item carrying `item_id` and to the stats.
    ///
    /// Nothing is changed and `false` is returned when the item is absent, so
    /// callers can use this as the conditional half of an atomic update.
    pub fn apply_delta(&mut self, item_id: &ItemId, delta: &ItemDelta) -> bool {
        let Some(item) = self.inventory.iter_mut().find(|item| &item.id == item_id) else {
            return false;
        };
        item.apply_delta(delta);
        if let Some(hp) = delta.stats_hp {
            self.stats = self.stats.with_hp_delta(hp);
        }
        true
    }
}
