//! The per-pick observation event.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::participant::ParticipantId;

/// One committed pick, with the state the participant actually saw.
///
/// Both snapshots are independently owned copies taken before the pick
/// mutated anything: `pack` still contains the chosen card, `pool` does
/// not yet. Later mutation of the live session can never reach a record
/// already emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Session this pick belongs to.
    pub session_id: u64,

    /// Seat that made the pick.
    pub participant: ParticipantId,

    /// 1-based round number.
    pub round_number: u32,

    /// 1-based pick number within the round.
    pub pick_number: u32,

    /// The presented pack, pre-removal.
    pub pack: Vec<Card>,

    /// The seat's drafted pool, pre-append, in pick order.
    pub pool: Vec<Card>,

    /// The card the strategy selected.
    pub chosen: Card,
}

impl PickRecord {
    /// The (participant, round, pick) coordinate of this record.
    ///
    /// Exactly one record exists per coordinate in a completed session.
    #[must_use]
    pub fn coordinate(&self) -> (ParticipantId, u32, u32) {
        (self.participant, self.round_number, self.pick_number)
    }
}
