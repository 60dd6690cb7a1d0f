//! Draft session configuration.
//!
//! A session is fully described by its `DraftConfig`: table size, pack
//! size, round count, rotation convention, an optional decision timeout,
//! and the RNG seed. The same config and card list reproduce the same
//! draft.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Direction packs travel during a round.
///
/// `Left` passes each pack from seat `i` to seat `i + 1 (mod N)`,
/// `Right` to seat `i - 1 (mod N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassDirection {
    /// Toward higher seat indices.
    Left,
    /// Toward lower seat indices.
    Right,
}

impl PassDirection {
    /// The other direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PassDirection::Left => PassDirection::Right,
            PassDirection::Right => PassDirection::Left,
        }
    }
}

/// Configuration for a single draft session.
///
/// ## Example
///
/// ```
/// use draftsim::core::DraftConfig;
///
/// let config = DraftConfig::new(8, 15, 3)
///     .with_session_id(7)
///     .with_seed(42);
///
/// assert_eq!(config.cards_per_round(), 120);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Identifier stamped on every observation record of this session.
    pub session_id: u64,

    /// Number of seats at the table (1-255).
    pub num_participants: usize,

    /// Cards per pack, which is also picks per round.
    pub pack_size: usize,

    /// Number of rounds (packs opened per participant).
    pub num_rounds: u32,

    /// Direction packs travel in round 1. Subsequent rounds alternate.
    ///
    /// Draft rulesets disagree on which parity passes left, so the
    /// convention is a parameter rather than a constant.
    pub first_round_direction: PassDirection,

    /// Upper bound on a single strategy decision. Exceeding it is a
    /// contract violation. `None` disables the check.
    pub decision_timeout: Option<Duration>,

    /// Seed for the session RNG (pack shuffles).
    pub seed: u64,
}

impl DraftConfig {
    /// Create a configuration with the given table shape.
    ///
    /// Defaults: `session_id` 0, round 1 passing left, no decision
    /// timeout, seed 0.
    #[must_use]
    pub fn new(num_participants: usize, pack_size: usize, num_rounds: u32) -> Self {
        assert!(
            num_participants >= 1 && num_participants <= 255,
            "participant count must be 1-255"
        );
        assert!(pack_size >= 1, "packs must hold at least one card");

        Self {
            session_id: 0,
            num_participants,
            pack_size,
            num_rounds,
            first_round_direction: PassDirection::Left,
            decision_timeout: None,
            seed: 0,
        }
    }

    /// Set the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, session_id: u64) -> Self {
        self.session_id = session_id;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round-1 pass direction.
    #[must_use]
    pub fn with_first_round_direction(mut self, direction: PassDirection) -> Self {
        self.first_round_direction = direction;
        self
    }

    /// Set the per-decision timeout.
    #[must_use]
    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = Some(timeout);
        self
    }

    /// Cards consumed by one round's allocation.
    #[must_use]
    pub fn cards_per_round(&self) -> usize {
        self.num_participants * self.pack_size
    }

    /// Cards consumed by a full session.
    #[must_use]
    pub fn cards_required(&self) -> usize {
        self.cards_per_round() * self.num_rounds as usize
    }

    /// Pass direction for a 1-based round number.
    ///
    /// Odd rounds use `first_round_direction`, even rounds the opposite,
    /// for every round of the session.
    #[must_use]
    pub fn direction_for_round(&self, round: u32) -> PassDirection {
        if round % 2 == 1 {
            self.first_round_direction
        } else {
            self.first_round_direction.opposite()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = DraftConfig::new(8, 15, 3);

        assert_eq!(config.session_id, 0);
        assert_eq!(config.first_round_direction, PassDirection::Left);
        assert!(config.decision_timeout.is_none());
    }

    #[test]
    fn test_card_counts() {
        let config = DraftConfig::new(4, 15, 3);

        assert_eq!(config.cards_per_round(), 60);
        assert_eq!(config.cards_required(), 180);
    }

    #[test]
    fn test_direction_alternates_every_round() {
        let config = DraftConfig::new(8, 15, 4);

        assert_eq!(config.direction_for_round(1), PassDirection::Left);
        assert_eq!(config.direction_for_round(2), PassDirection::Right);
        assert_eq!(config.direction_for_round(3), PassDirection::Left);
        assert_eq!(config.direction_for_round(4), PassDirection::Right);
    }

    #[test]
    fn test_direction_convention_is_configurable() {
        let config = DraftConfig::new(8, 15, 2)
            .with_first_round_direction(PassDirection::Right);

        assert_eq!(config.direction_for_round(1), PassDirection::Right);
        assert_eq!(config.direction_for_round(2), PassDirection::Left);
    }

    #[test]
    fn test_builder_chain() {
        let config = DraftConfig::new(2, 3, 1)
            .with_session_id(99)
            .with_seed(7)
            .with_decision_timeout(Duration::from_millis(50));

        assert_eq!(config.session_id, 99);
        assert_eq!(config.seed, 7);
        assert_eq!(config.decision_timeout, Some(Duration::from_millis(50)));
    }

    #[test]
    #[should_panic(expected = "participant count")]
    fn test_zero_participants_rejected() {
        let _ = DraftConfig::new(0, 15, 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = DraftConfig::new(8, 15, 3).with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DraftConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.num_participants, 8);
        assert_eq!(deserialized.seed, 42);
        assert_eq!(deserialized.first_round_direction, PassDirection::Left);
    }
}
