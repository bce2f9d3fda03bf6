//! Vital statistics of a player

use serde::{Deserialize, Serialize};

/// Hit points and energy of a player.
///
/// # ADR-008 Tier 4: Simple Data Struct
///
/// Any combination of values is representable. `hp` may sit below zero after a
/// harmful consumable; the only rule is that healing never pushes `hp` past
/// `max_hp`, which [`Stats::healing_delta`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i64,
    pub max_hp: i64,
    pub energy: i64,
}

impl Stats {
    pub fn new(hp: i64, max_hp: i64, energy: i64) -> Self {
        Self { hp, max_hp, energy }
    }

    /// Whether the player is already at (or above) maximum health.
    pub fn is_at_max_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// Hit points that can still be restored before reaching `max_hp`.
    pub fn missing_hp(&self) -> i64 {
        self.max_hp.saturating_sub(self.hp).max(0)
    }

    /// The hp change actually applied for a heal of `amount`.
    ///
    /// Positive amounts are capped at the missing hp; zero and negative amounts
    /// pass through unchanged (no floor).
    pub fn healing_delta(&self, amount: i64) -> i64 {
        if amount > 0 {
            amount.min(self.missing_hp())
        } else {
            amount
        }
    }

    /// Returns a copy with `delta` added to `hp`.
    pub fn with_hp_delta(self, delta: i64) -> Self {
        Self {
            hp: self.hp.saturating_add(delta),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healing_is_capped_at_missing_hp() {
        let stats = Stats::new(120, 150, 300);
        assert_eq!(stats.healing_delta(50), 30);
        assert_eq!(stats.healing_delta(10), 10);
    }

    #[test]
    fn harmful_delta_is_not_clamped() {
        let stats = Stats::new(20, 150, 300);
        assert_eq!(stats.healing_delta(-35), -35);
        assert_eq!(stats.with_hp_delta(-35).hp, -15);
    }

    #[test]
    fn overhealed_player_has_no_missing_hp() {
        let stats = Stats::new(160, 150, 0);
        assert!(stats.is_at_max_health());
        assert_eq!(stats.missing_hp(), 0);
    }
}
