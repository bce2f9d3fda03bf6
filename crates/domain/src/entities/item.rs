//! Item entity - things a player carries in the inventory
//!
//! # Tagged Kinds
//!
//! Each item kind carries only the attributes that apply to it, so "is this
//! field present for this kind" cannot be asked of the wrong kind:
//!
//! | kind       | attributes                               |
//! |------------|------------------------------------------|
//! | weapon     | `damage`, `durability`                   |
//! | consumable | `heal_amount`, `quantity`, `special_effect` |
//! | throwable  | `damage`, `quantity`                     |
//! | quest_item | `quantity`                               |
//!
//! On the wire an item is one flat object with a `type` discriminator:
//!
//! ```json
//! { "id": "w_1", "name": "Repulsor", "type": "weapon", "damage": 150, "durability": 3 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::{
    ItemDelta, ItemName, Stats, UseEffect, UsePlan, UseRejection, DEFAULT_DAMAGE,
};

/// An item in a player's inventory
///
/// # ADR-008 Tier 4: Simple Data Struct
///
/// Identity and name are valid by construction; the kind's counters may hold
/// any value, including zero or negative after repeated use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// The closed set of item kinds and their attributes.
///
/// An absent `quantity` means an unbounded stack; an absent `durability` means
/// the weapon never wears out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        damage: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        durability: Option<i64>,
    },
    Consumable {
        /// Negative values hurt the player.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heal_amount: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<i64>,
        #[serde(default, skip_serializing_if = "SpecialEffect::is_none")]
        special_effect: SpecialEffect,
    },
    Throwable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        damage: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<i64>,
    },
    QuestItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<i64>,
    },
}

/// Narrative flavour attached to a consumable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    #[default]
    None,
    /// Produces the "get stoned" response instead of the plain consume one.
    Intoxicating,
}

impl SpecialEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for SpecialEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Intoxicating => write!(f, "intoxicating"),
        }
    }
}

impl std::str::FromStr for SpecialEffect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "intoxicating" => Ok(Self::Intoxicating),
            other => Err(DomainError::parse(format!("Unknown special effect: {other}"))),
        }
    }
}

/// Loose attribute bag used to build an [`ItemKind`] from untyped input.
///
/// Attributes that do not belong to the chosen kind are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemAttributes {
    pub damage: Option<i64>,
    pub heal_amount: Option<i64>,
    pub quantity: Option<i64>,
    pub durability: Option<i64>,
    pub special_effect: SpecialEffect,
}

impl ItemKind {
    pub fn weapon(damage: Option<i64>, durability: Option<i64>) -> Self {
        Self::Weapon { damage, durability }
    }

    pub fn consumable(heal_amount: Option<i64>, quantity: Option<i64>) -> Self {
        Self::Consumable {
            heal_amount,
            quantity,
            special_effect: SpecialEffect::None,
        }
    }

    pub fn throwable(damage: Option<i64>, quantity: Option<i64>) -> Self {
        Self::Throwable { damage, quantity }
    }

    pub fn quest_item(quantity: Option<i64>) -> Self {
        Self::QuestItem { quantity }
    }

    /// Build a kind from its wire tag and a loose attribute bag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for an unknown tag.
    pub fn from_attributes(tag: &str, attrs: ItemAttributes) -> Result<Self, DomainError> {
        match tag.trim() {
            "weapon" => Ok(Self::weapon(attrs.damage, attrs.durability)),
            "consumable" => Ok(Self::Consumable {
                heal_amount: attrs.heal_amount,
                quantity: attrs.quantity,
                special_effect: attrs.special_effect,
            }),
            "throwable" => Ok(Self::throwable(attrs.damage, attrs.quantity)),
            "quest_item" => Ok(Self::quest_item(attrs.quantity)),
            "" => Err(DomainError::validation("Item type cannot be empty")),
            other => Err(DomainError::parse(format!("Unknown item type: {other}"))),
        }
    }

    /// The wire tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Weapon { .. } => "weapon",
            Self::Consumable { .. } => "consumable",
            Self::Throwable { .. } => "throwable",
            Self::QuestItem { .. } => "quest_item",
        }
    }

    pub fn quantity(&self) -> Option<i64> {
        match self {
            Self::Consumable { quantity, .. }
            | Self::Throwable { quantity, .. }
            | Self::QuestItem { quantity } => *quantity,
            Self::Weapon { .. } => None,
        }
    }

    pub fn durability(&self) -> Option<i64> {
        match self {
            Self::Weapon { durability, .. } => *durability,
            _ => None,
        }
    }

    pub fn damage(&self) -> Option<i64> {
        match self {
            Self::Weapon { damage, .. } | Self::Throwable { damage, .. } => *damage,
            _ => None,
        }
    }

    pub fn heal_amount(&self) -> Option<i64> {
        match self {
            Self::Consumable { heal_amount, .. } => *heal_amount,
            _ => None,
        }
    }

    pub fn special_effect(&self) -> SpecialEffect {
        match self {
            Self::Consumable { special_effect, .. } => *special_effect,
            _ => SpecialEffect::None,
        }
    }
}

impl Item {
    pub fn new(id: ItemId, name: ItemName, kind: ItemKind) -> Self {
        Self { id, name, kind }
    }

    /// Tag a consumable with a special effect. Other kinds are returned unchanged.
    pub fn with_special_effect(mut self, effect: SpecialEffect) -> Self {
        if let ItemKind::Consumable { special_effect, .. } = &mut self.kind {
            *special_effect = effect;
        }
        self
    }

    /// Resolve what using this item does for a player with `stats`.
    ///
    /// Depletion is checked against the counter *before* the use:
    /// a weapon with durability 1 is still usable (and drops to 0);
    /// the next use is rejected.
    pub fn plan_use(&self, stats: &Stats) -> Result<UsePlan, UseRejection> {
        match &self.kind {
            ItemKind::Weapon { damage, durability } => {
                if durability.is_some_and(|d| d <= 0) {
                    return Err(UseRejection::Depleted { removes_item: true });
                }
                let delta = match durability {
                    Some(_) => ItemDelta::new().with_durability(-1),
                    None => ItemDelta::new(),
                };
                Ok(UsePlan::new(
                    UseEffect::Attack {
                        damage: damage.unwrap_or(DEFAULT_DAMAGE),
                    },
                    delta,
                ))
            }
            ItemKind::Throwable { damage, quantity } => {
                if quantity.is_some_and(|q| q < 1) {
                    return Err(UseRejection::Depleted { removes_item: true });
                }
                let delta = match quantity {
                    Some(_) => ItemDelta::new().with_quantity(-1),
                    None => ItemDelta::new(),
                };
                Ok(UsePlan::new(
                    UseEffect::Attack {
                        damage: damage.unwrap_or(DEFAULT_DAMAGE),
                    },
                    delta,
                ))
            }
            ItemKind::Consumable {
                heal_amount,
                quantity,
                special_effect,
            } => {
                if quantity.is_some_and(|q| q < 1) {
                    return Err(UseRejection::Depleted {
                        removes_item: false,
                    });
                }
                let heal = heal_amount.unwrap_or(0);
                if heal > 0 && stats.is_at_max_health() {
                    return Err(UseRejection::AtMaxHealth);
                }

                let hp_delta = stats.healing_delta(heal);
                let mut delta = ItemDelta::new();
                if hp_delta != 0 {
                    delta = delta.with_stats_hp(hp_delta);
                }
                if quantity.is_some() {
                    delta = delta.with_quantity(-1);
                }
                Ok(UsePlan::new(
                    UseEffect::Consume {
                        hp_delta,
                        special_effect: *special_effect,
                    },
                    delta,
                ))
            }
            ItemKind::QuestItem { .. } => Ok(UsePlan::new(UseEffect::Inspect, ItemDelta::new())),
        }
    }

    /// Apply the item-counter part of `delta`.
    ///
    /// Counters that are absent on this item stay absent; the `stats_hp` part
    /// belongs to the owning player.
    pub fn apply_delta(&mut self, delta: &ItemDelta) {
        match &mut self.kind {
            ItemKind::Weapon { durability, .. } => {
                add_to(durability, delta.durability);
            }
            ItemKind::Consumable { quantity, .. }
            | ItemKind::Throwable { quantity, .. }
            | ItemKind::QuestItem { quantity } => {
                add_to(quantity, delta.quantity);
            }
        }
    }
}

fn add_to(counter: &mut Option<i64>, amount: Option<i64>) {
    if let (Some(value), Some(amount)) = (counter.as_mut(), amount) {
        *value = value.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, kind: ItemKind) -> Item {
        Item::new(ItemId::new(id).unwrap(), ItemName::new(name).unwrap(), kind)
    }

    fn stats(hp: i64, max_hp: i64) -> Stats {
        Stats::new(hp, max_hp, 300)
    }

    #[test]
    fn weapon_with_durability_attacks_and_wears() {
        let revolver = item("w_2", "Revolver", ItemKind::weapon(Some(70), Some(1)));
        let plan = revolver.plan_use(&stats(50, 150)).unwrap();

        assert_eq!(plan.effect, UseEffect::Attack { damage: 70 });
        assert_eq!(plan.delta, ItemDelta::new().with_durability(-1));
    }

    #[test]
    fn worn_out_weapon_is_depleted_and_removed() {
        let revolver = item("w_2", "Revolver", ItemKind::weapon(Some(70), Some(0)));
        let result = revolver.plan_use(&stats(50, 150));

        assert_eq!(result, Err(UseRejection::Depleted { removes_item: true }));
    }

    #[test]
    fn weapon_without_damage_uses_default() {
        let stick = item("w_9", "Stick", ItemKind::weapon(None, None));
        let plan = stick.plan_use(&stats(50, 150)).unwrap();

        assert_eq!(plan.effect, UseEffect::Attack { damage: DEFAULT_DAMAGE });
        assert!(plan.delta.is_empty());
    }

    #[test]
    fn throwable_spends_quantity_not_durability() {
        let grenade = item("w_3", "granate", ItemKind::throwable(None, Some(4)));
        let plan = grenade.plan_use(&stats(50, 150)).unwrap();

        assert_eq!(plan.effect, UseEffect::Attack { damage: DEFAULT_DAMAGE });
        assert_eq!(plan.delta, ItemDelta::new().with_quantity(-1));
    }

    #[test]
    fn empty_throwable_is_depleted_and_removed() {
        let grenade = item("w_3", "granate", ItemKind::throwable(Some(40), Some(0)));
        assert_eq!(
            grenade.plan_use(&stats(50, 150)),
            Err(UseRejection::Depleted { removes_item: true })
        );
    }

    #[test]
    fn consumable_heals_up_to_max_hp() {
        let potion = item("c_1", "Nano-Potion", ItemKind::consumable(Some(50), Some(5)));
        let plan = potion.plan_use(&stats(120, 150)).unwrap();

        assert_eq!(
            plan.effect,
            UseEffect::Consume {
                hp_delta: 30,
                special_effect: SpecialEffect::None
            }
        );
        assert_eq!(
            plan.delta,
            ItemDelta::new().with_stats_hp(30).with_quantity(-1)
        );
    }

    #[test]
    fn healing_at_max_hp_is_refused() {
        let potion = item("c_1", "Nano-Potion", ItemKind::consumable(Some(50), Some(5)));
        assert_eq!(
            potion.plan_use(&stats(150, 150)),
            Err(UseRejection::AtMaxHealth)
        );
    }

    #[test]
    fn empty_consumable_is_depleted_but_kept() {
        let potion = item("c_1", "Nano-Potion", ItemKind::consumable(Some(50), Some(0)));
        assert_eq!(
            potion.plan_use(&stats(10, 150)),
            Err(UseRejection::Depleted {
                removes_item: false
            })
        );
    }

    #[test]
    fn harmful_consumable_works_at_max_hp_and_is_unclamped() {
        let weed = item("c_3", "pope_marjia", ItemKind::consumable(Some(-35), Some(10)))
            .with_special_effect(SpecialEffect::Intoxicating);
        let plan = weed.plan_use(&stats(150, 150)).unwrap();

        assert_eq!(
            plan.effect,
            UseEffect::Consume {
                hp_delta: -35,
                special_effect: SpecialEffect::Intoxicating
            }
        );
        assert_eq!(
            plan.delta,
            ItemDelta::new().with_stats_hp(-35).with_quantity(-1)
        );
    }

    #[test]
    fn bottomless_consumable_does_not_touch_quantity() {
        let elixir = item(
            "c_2",
            "Elisir of the carribean",
            ItemKind::consumable(Some(100), None),
        );
        let plan = elixir.plan_use(&stats(10, 150)).unwrap();
        assert_eq!(plan.delta, ItemDelta::new().with_stats_hp(100));
    }

    #[test]
    fn quest_item_is_inspected_without_mutation() {
        let sword = item("q_1", "Excalibur", ItemKind::quest_item(Some(1)));
        let plan = sword.plan_use(&stats(10, 150)).unwrap();

        assert_eq!(plan.effect, UseEffect::Inspect);
        assert!(plan.delta.is_empty());
    }

    #[test]
    fn apply_delta_skips_absent_counters() {
        let mut stick = item("w_9", "Stick", ItemKind::weapon(None, None));
        stick.apply_delta(&ItemDelta::new().with_durability(-1).with_quantity(-1));
        assert_eq!(stick.kind, ItemKind::weapon(None, None));

        let mut potion = item("c_1", "Nano-Potion", ItemKind::consumable(Some(50), Some(5)));
        potion.apply_delta(&ItemDelta::new().with_quantity(-1).with_durability(-1));
        assert_eq!(potion.kind.quantity(), Some(4));
    }

    #[test]
    fn from_attributes_keeps_only_kind_fields() {
        let attrs = ItemAttributes {
            damage: Some(5),
            heal_amount: Some(20),
            quantity: Some(3),
            durability: Some(9),
            special_effect: SpecialEffect::None,
        };
        let kind = ItemKind::from_attributes("consumable", attrs).unwrap();
        assert_eq!(kind, ItemKind::consumable(Some(20), Some(3)));
    }

    #[test]
    fn from_attributes_rejects_unknown_tag() {
        let result = ItemKind::from_attributes("shield", ItemAttributes::default());
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }

    #[test]
    fn item_serializes_flat_with_type_tag() {
        let repulsor = item("w_1", "Repulsor", ItemKind::weapon(Some(150), Some(3)));
        let json = serde_json::to_value(&repulsor).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "w_1",
                "name": "Repulsor",
                "type": "weapon",
                "damage": 150,
                "durability": 3
            })
        );
    }

    #[test]
    fn item_deserializes_special_effect_and_missing_counters() {
        let json = r#"{"id":"c_3","name":"pope_marjia","type":"consumable","heal_amount":-35,"special_effect":"intoxicating"}"#;
        let parsed: Item = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.kind.special_effect(), SpecialEffect::Intoxicating);
        assert_eq!(parsed.kind.quantity(), None);
        assert_eq!(parsed.kind.heal_amount(), Some(-35));
    }
}
