//! Common builders for players and items used across engine tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{players, items};
//!
//! let player = players::tony();
//! let potion = items::consumable("c_9", Some(20), Some(2));
//! ```

pub mod items {
    use rucksack_domain::{Item, ItemId, ItemKind, ItemName, SpecialEffect};

    pub fn id(value: &str) -> ItemId {
        ItemId::new(value).expect("valid item id")
    }

    fn build(item_id: &str, kind: ItemKind) -> Item {
        Item::new(id(item_id), ItemName::new(item_id).expect("valid name"), kind)
    }

    pub fn weapon(item_id: &str, damage: Option<i64>, durability: Option<i64>) -> Item {
        build(item_id, ItemKind::weapon(damage, durability))
    }

    pub fn consumable(item_id: &str, heal_amount: Option<i64>, quantity: Option<i64>) -> Item {
        build(item_id, ItemKind::consumable(heal_amount, quantity))
    }

    pub fn intoxicating(item_id: &str, heal_amount: i64, quantity: i64) -> Item {
        build(item_id, ItemKind::consumable(Some(heal_amount), Some(quantity)))
            .with_special_effect(SpecialEffect::Intoxicating)
    }

    pub fn throwable(item_id: &str, damage: Option<i64>, quantity: Option<i64>) -> Item {
        build(item_id, ItemKind::throwable(damage, quantity))
    }

    pub fn quest_item(item_id: &str, quantity: Option<i64>) -> Item {
        build(item_id, ItemKind::quest_item(quantity))
    }
}

pub mod players {
    use rucksack_domain::{Item, Player, PlayerId, Stats, Username};

    use crate::use_cases::player::demo_player;

    pub fn id(value: &str) -> PlayerId {
        PlayerId::new(value).expect("valid player id")
    }

    /// The seeded demo player.
    pub fn tony() -> Player {
        demo_player().expect("demo template is valid")
    }

    /// A player with the given hp and inventory.
    pub fn with(hp: i64, max_hp: i64, items: impl IntoIterator<Item = Item>) -> Player {
        Player::new(
            id("Agent_46"),
            Username::new("IronTony").expect("valid username"),
            Stats::new(hp, max_hp, 300),
        )
        .with_inventory(items)
    }
}
