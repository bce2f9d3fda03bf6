//! The demo player every reset restores.

use rucksack_domain::{
    DomainError, Item, ItemId, ItemKind, ItemName, Player, PlayerId, SpecialEffect, Stats,
    Username,
};

/// Id under which the demo player is stored.
pub const DEMO_PLAYER_ID: &str = "Agent_46";

/// Build the demo player: IronTony with a mixed rucksack of weapons,
/// consumables, a grenade and some keys.
pub fn demo_player() -> Result<Player, DomainError> {
    let item = |id: &str, name: &str, kind: ItemKind| -> Result<Item, DomainError> {
        Ok(Item::new(ItemId::new(id)?, ItemName::new(name)?, kind))
    };

    Ok(Player::new(
        PlayerId::new(DEMO_PLAYER_ID)?,
        Username::new("IronTony")?,
        Stats::new(50, 150, 300),
    )
    .with_inventory([
        item("w_1", "Repulsor", ItemKind::weapon(Some(150), Some(3)))?,
        item("c_1", "Nano-Potion", ItemKind::consumable(Some(50), Some(5)))?,
        item("w_2", "Revolver", ItemKind::weapon(Some(70), Some(5)))?,
        item(
            "c_2",
            "Elisir of the carribean",
            ItemKind::consumable(Some(100), None),
        )?,
        item("q_1", "Excalibur", ItemKind::quest_item(Some(1)))?,
        item("q_2", "red_key", ItemKind::quest_item(Some(50)))?,
        item("w_3", "granate", ItemKind::throwable(None, Some(4)))?,
        item("q_3", "green_key", ItemKind::quest_item(Some(7)))?,
        item("c_3", "pope_marjia", ItemKind::consumable(Some(-35), Some(10)))?
            .with_special_effect(SpecialEffect::Intoxicating),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_player_matches_template() {
        let player = demo_player().unwrap();

        assert_eq!(player.id().as_str(), DEMO_PLAYER_ID);
        assert_eq!(player.username().as_str(), "IronTony");
        assert_eq!(*player.stats(), Stats::new(50, 150, 300));

        let ids: Vec<&str> = player.inventory().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["w_1", "c_1", "w_2", "c_2", "q_1", "q_2", "w_3", "q_3", "c_3"]
        );
    }

    #[test]
    fn only_the_herb_is_intoxicating() {
        let player = demo_player().unwrap();

        let intoxicating: Vec<&str> = player
            .inventory()
            .iter()
            .filter(|i| i.kind.special_effect() == SpecialEffect::Intoxicating)
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(intoxicating, vec!["c_3"]);
    }
}
