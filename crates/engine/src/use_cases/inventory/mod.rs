//! Inventory use cases.
//!
//! Using, discarding and adding items in a player's rucksack.

use std::sync::Arc;

mod add_item;
mod discard_item;
mod error;
mod types;
mod use_item;

pub use add_item::AddItem;
pub use discard_item::DiscardItem;
pub use error::InventoryError;
pub use types::{DiscardItemResult, UseItemResult};
pub use use_item::UseItem;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub use_item: Arc<UseItem>,
    pub discard_item: Arc<DiscardItem>,
    pub add_item: Arc<AddItem>,
}

impl InventoryUseCases {
    pub fn new(
        use_item: Arc<UseItem>,
        discard_item: Arc<DiscardItem>,
        add_item: Arc<AddItem>,
    ) -> Self {
        Self {
            use_item,
            discard_item,
            add_item,
        }
    }
}
