//! Translate use-case outcomes into response bodies and error replies.
//!
//! All player-facing text lives here.

use rucksack_domain::{Item, Player, SpecialEffect, UseEffect};
use rucksack_shared::{ActionResponse, AddItemResponse, ResetResponse};

use crate::use_cases::inventory::{DiscardItemResult, InventoryError, UseItemResult};
use crate::use_cases::player::PlayerError;

use super::http::ApiError;

const PLAYER_NOT_FOUND: &str = "Spieler nicht gefunden";
const ITEM_NOT_FOUND: &str = "Item nicht im Inventar!";
const OUT_OF_AMMO: &str = "Knapp daneben ist auch vorbei! Munition aufgebraucht";
const BOTTLE_EMPTY: &str = "kein Kuttel für die Katzen! Die Flasche ist leer...";
const STORE_UNAVAILABLE: &str = "Der Rucksack klemmt gerade. Versuch es gleich nochmal.";

// =============================================================================
// Success Bodies
// =============================================================================

pub fn used(result: &UseItemResult) -> ActionResponse {
    let name = &result.item.name;
    match result.effect {
        UseEffect::Attack { damage } => {
            ActionResponse::new("attack", format!("Du schiesst mit {name}! Boom!"))
                .with_damage(damage)
                .with_feedback(format!(
                    "Dein Gegner ist getroffen! Sein Hp sinkt um {damage}"
                ))
        }
        UseEffect::Consume {
            hp_delta,
            special_effect: SpecialEffect::Intoxicating,
        } => ActionResponse::new("get_stoned", "Oh sh**! Here we go, again....Paaff! Paaff!!")
            .with_hp_restored(hp_delta)
            .with_feedback(format!(
                "Schau, dass es nicht zur Gewohnheit wird! Deine Hp sinken um {}",
                hp_delta.saturating_neg().max(0)
            )),
        UseEffect::Consume { hp_delta, .. } => {
            ActionResponse::new("consume", format!("Aaaahhh, erfrischend! :P {name} benutzt!"))
                .with_hp_restored(hp_delta)
        }
        UseEffect::Inspect => ActionResponse::new(
            "inspect and use",
            format!("Du hast {name} aus deinem Rücksack geholt."),
        )
        .with_info(format!("Benutze {name} weise, könnte wichtig sein.")),
    }
}

pub fn discarded(result: &DiscardItemResult) -> ActionResponse {
    let name = &result.item.name;
    ActionResponse::new("entsorgen", format!("{name} wurde entsorgt."))
        .with_info(format!("{name} ist nicht mehr in deinem Rücksack."))
}

pub fn added(item: Item) -> AddItemResponse {
    AddItemResponse {
        message: format!("{} wurde in den Rücksack gepackt.", item.name),
        item,
    }
}

pub fn reset(player: Player) -> ResetResponse {
    ResetResponse {
        message: format!(
            "Spielwelt zurückgesetzt. {} ist bereit.",
            player.username()
        ),
        player,
    }
}

// =============================================================================
// Error Replies
// =============================================================================

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::PlayerNotFound(_) => ApiError::NotFound(PLAYER_NOT_FOUND.into()),
            InventoryError::ItemNotFound { .. } => ApiError::NotFound(ITEM_NOT_FOUND.into()),
            InventoryError::ItemDepleted { removed: true, .. } => {
                ApiError::BadRequest(OUT_OF_AMMO.into())
            }
            InventoryError::ItemDepleted { removed: false, .. } => {
                ApiError::BadRequest(BOTTLE_EMPTY.into())
            }
            InventoryError::AtMaxHealth { item_name } => ApiError::BadRequest(format!(
                "Du bist bereits bei voller Gesundheit! Heb dir {item_name} für später auf."
            )),
            InventoryError::InvalidItem(e) => {
                ApiError::BadRequest(format!("Ungültiges Item: {e}"))
            }
            InventoryError::ConcurrentModification { .. } => ApiError::Conflict(
                "Das Item hat sich gerade verändert. Versuch es nochmal.".into(),
            ),
            InventoryError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Player store failed during inventory operation");
                ApiError::Unavailable(STORE_UNAVAILABLE.into())
            }
        }
    }
}

impl From<PlayerError> for ApiError {
    fn from(err: PlayerError) -> Self {
        match err {
            PlayerError::NotFound(_) => ApiError::NotFound(PLAYER_NOT_FOUND.into()),
            PlayerError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Player store failed during player operation");
                ApiError::Unavailable(STORE_UNAVAILABLE.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::items;

    fn used_with(item: Item, effect: UseEffect) -> ActionResponse {
        used(&UseItemResult { item, effect })
    }

    #[test]
    fn attack_reports_damage_in_feedback() {
        let body = used_with(
            items::weapon("w_2", Some(70), Some(5)),
            UseEffect::Attack { damage: 70 },
        );

        assert_eq!(body.action, "attack");
        assert_eq!(body.damage, Some(70));
        assert_eq!(body.message, "Du schiesst mit w_2! Boom!");
        assert_eq!(
            body.feedback.as_deref(),
            Some("Dein Gegner ist getroffen! Sein Hp sinkt um 70")
        );
    }

    #[test]
    fn intoxicating_consume_reports_hp_loss() {
        let body = used_with(
            items::intoxicating("c_3", -35, 10),
            UseEffect::Consume {
                hp_delta: -35,
                special_effect: SpecialEffect::Intoxicating,
            },
        );

        assert_eq!(body.action, "get_stoned");
        assert_eq!(body.hp_restored, Some(-35));
        assert!(body.feedback.unwrap().ends_with("Deine Hp sinken um 35"));
    }

    #[test]
    fn plain_consume_reports_hp_restored() {
        let body = used_with(
            items::consumable("c_1", Some(50), Some(5)),
            UseEffect::Consume {
                hp_delta: 50,
                special_effect: SpecialEffect::None,
            },
        );

        assert_eq!(body.action, "consume");
        assert_eq!(body.hp_restored, Some(50));
        assert_eq!(body.feedback, None);
    }

    #[test]
    fn inspect_has_info_and_no_numbers() {
        let body = used_with(items::quest_item("q_1", Some(1)), UseEffect::Inspect);

        assert_eq!(body.action, "inspect and use");
        assert_eq!(body.damage, None);
        assert_eq!(body.hp_restored, None);
        assert!(body.info.is_some());
    }

    #[test]
    fn depletion_messages_depend_on_removal() {
        let removed = ApiError::from(InventoryError::ItemDepleted {
            item_id: items::id("w_1"),
            removed: true,
        });
        let kept = ApiError::from(InventoryError::ItemDepleted {
            item_id: items::id("c_1"),
            removed: false,
        });

        assert!(matches!(removed, ApiError::BadRequest(ref m) if m == OUT_OF_AMMO));
        assert!(matches!(kept, ApiError::BadRequest(ref m) if m == BOTTLE_EMPTY));
    }
}
