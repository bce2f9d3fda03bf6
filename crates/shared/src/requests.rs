//! Request bodies accepted by the inventory API

use serde::{Deserialize, Serialize};

use rucksack_domain::{
    DomainError, Item, ItemAttributes, ItemId, ItemKind, ItemName, SpecialEffect,
};

/// Body of `use` and `discard`: `{"itemId": "w_1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemActionRequest {
    #[serde(alias = "item_id")]
    pub item_id: ItemId,
}

/// Body of `add`: an item in its flat wire shape, with every field optional so
/// a missing id/name/type is reported as an invalid item rather than a
/// generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<String>,
    #[serde(default)]
    pub damage: Option<i64>,
    #[serde(default)]
    pub heal_amount: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub durability: Option<i64>,
    #[serde(default)]
    pub special_effect: Option<String>,
}

impl TryFrom<NewItemData> for Item {
    type Error = DomainError;

    /// Minimal shape check: id, name and a known type must be present.
    /// Kind-specific counters are taken as given.
    fn try_from(data: NewItemData) -> Result<Self, Self::Error> {
        let id = ItemId::new(data.id.unwrap_or_default())?;
        let name = ItemName::new(data.name.unwrap_or_default())?;
        let special_effect = data
            .special_effect
            .as_deref()
            .map(str::parse::<SpecialEffect>)
            .transpose()?
            .unwrap_or_default();
        let kind = ItemKind::from_attributes(
            data.kind.as_deref().unwrap_or_default(),
            ItemAttributes {
                damage: data.damage,
                heal_amount: data.heal_amount,
                quantity: data.quantity,
                durability: data.durability,
                special_effect,
            },
        )?;
        Ok(Item::new(id, name, kind))
    }
}
