//! Counter changes produced by using an item

use serde::{Deserialize, Serialize};

/// Field increments a store applies in one conditional write.
///
/// Each field is an amount to add (usually `-1` for counters). `None` means the
/// field is left alone. Counters absent on the stored item stay absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDelta {
    /// Added to the owning player's `stats.hp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_hp: Option<i64>,
    /// Added to the item's `quantity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Added to the item's `durability`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<i64>,
}

impl ItemDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats_hp(mut self, amount: i64) -> Self {
        self.stats_hp = Some(amount);
        self
    }

    pub fn with_quantity(mut self, amount: i64) -> Self {
        self.quantity = Some(amount);
        self
    }

    pub fn with_durability(mut self, amount: i64) -> Self {
        self.durability = Some(amount);
        self
    }

    /// True when applying this delta would change nothing.
    pub fn is_empty(&self) -> bool {
        self.stats_hp.is_none() && self.quantity.is_none() && self.durability.is_none()
    }
}
