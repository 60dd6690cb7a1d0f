//! The decision contract and the non-learned reference strategies.
//!
//! Strategies are trait-based so any decision maker plugs into the same
//! seam: random baselines, heuristic scorers, or model-driven pickers
//! living outside this crate.
//!
//! ## Contract
//!
//! The engine always presents a non-empty pack. A conforming strategy
//! returns the identity of some card in that pack; a strategy that cannot
//! compute a preference falls back to any legal member rather than
//! returning `None`. Returning `None`, a card outside the pack, or
//! overrunning the configured decision timeout aborts the session as a
//! contract violation. Shared references in [`PickContext`] make pack and
//! pool mutation impossible by construction.

pub mod random;
pub mod scored;

use im::Vector;

use crate::cards::{Card, CardId};
use crate::core::participant::ParticipantId;
use crate::draft::pack::Pack;

pub use random::RandomStrategy;
pub use scored::ScoredStrategy;

/// Everything a strategy may observe when making one pick.
///
/// The pack is the one currently in front of this seat; the pool is this
/// seat's own drafted cards in pick order. Neither reflects any other
/// participant's in-flight choice for the current turn.
#[derive(Clone, Copy, Debug)]
pub struct PickContext<'a> {
    /// Seat being asked to pick.
    pub participant: ParticipantId,

    /// 1-based round number.
    pub round_number: u32,

    /// 1-based pick number within the round.
    pub pick_number: u32,

    /// The pack presented for this pick. Never empty.
    pub pack: &'a Pack,

    /// This seat's drafted pool so far.
    pub pool: &'a Vector<Card>,
}

/// A pluggable decision policy bound to one seat for a whole session.
pub trait DraftStrategy: Send {
    /// Short label for logs and diagnostics.
    fn name(&self) -> &str;

    /// Choose one card from `ctx.pack`.
    ///
    /// Must return the identity of a card present in the pack at call
    /// time. `None` is treated as a contract violation, not a pass.
    fn pick(&mut self, ctx: &PickContext<'_>) -> Option<CardId>;
}
