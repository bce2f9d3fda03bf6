//! Inventory operation result types.

use rucksack_domain::{Item, UseEffect};

/// Result of using an item.
///
/// `item` is the snapshot read before the use, so its counters show the
/// state the decision was made on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseItemResult {
    pub item: Item,
    pub effect: UseEffect,
}

/// Result of discarding an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardItemResult {
    pub item: Item,
}
