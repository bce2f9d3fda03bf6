//! Response bodies returned by the inventory API

use serde::{Deserialize, Serialize};

use rucksack_domain::{Item, Player};

/// Result of using or discarding an item.
///
/// `action` names what happened (`"attack"`, `"consume"`, `"get_stoned"`,
/// `"inspect and use"`, `"entsorgen"`); the optional fields depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_restored: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl ActionResponse {
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
            damage: None,
            hp_restored: None,
            info: None,
            feedback: None,
        }
    }

    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_hp_restored(mut self, hp: i64) -> Self {
        self.hp_restored = Some(hp);
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// Result of adding an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub message: String,
    pub item: Item,
}

/// Result of re-seeding the demo player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub message: String,
    pub player: Player,
}

/// Failure body: `{"error": "<reason>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
