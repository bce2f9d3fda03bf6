//! Outcome types of the item-use rules
//!
//! Resolving a use is pure: [`crate::Item::plan_use`] inspects a snapshot of the
//! item and the player's stats and returns either a [`UsePlan`] (what happened
//! plus the counters to write) or a [`UseRejection`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::SpecialEffect;
use crate::value_objects::ItemDelta;

/// Damage dealt by weapons and throwables that do not define their own.
pub const DEFAULT_DAMAGE: i64 = 10;

/// What using an item does, independent of persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum UseEffect {
    /// A weapon or throwable was fired.
    Attack { damage: i64 },
    /// A consumable changed the player's hp by `hp_delta`.
    Consume {
        hp_delta: i64,
        special_effect: SpecialEffect,
    },
    /// A quest item was looked at. Nothing changes.
    Inspect,
}

/// An accepted use: the effect to report and the conditional write to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsePlan {
    pub effect: UseEffect,
    pub delta: ItemDelta,
}

impl UsePlan {
    pub fn new(effect: UseEffect, delta: ItemDelta) -> Self {
        Self { effect, delta }
    }
}

/// Why a use was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UseRejection {
    /// The depletable counter is exhausted.
    ///
    /// `removes_item` is true for weapons and throwables, whose exhausted
    /// items leave the inventory. Empty consumables stay.
    #[error("Item is depleted")]
    Depleted { removes_item: bool },

    /// A healing consumable was used while hp is already at maximum.
    #[error("Already at maximum health")]
    AtMaxHealth,
}
