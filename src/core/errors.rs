//! Fatal error taxonomy for draft sessions.
//!
//! Every variant aborts the whole session and carries the failure site
//! (round, pick, participant) for diagnosis. Sink persistence failures are
//! deliberately absent: they stay inside the sink and never surface here.

use std::time::Duration;

use thiserror::Error;

use crate::cards::CardId;
use crate::core::participant::ParticipantId;

/// How a strategy broke its contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContractBreach {
    /// The strategy returned no selection for a non-empty pack.
    #[error("strategy returned no selection")]
    NoSelection,

    /// The strategy returned a card that is not in the presented pack.
    #[error("strategy returned {0}, which is not in the presented pack")]
    ForeignCard(CardId),

    /// The strategy exceeded the configured decision timeout.
    #[error("strategy decision took {elapsed:?}, exceeding the {limit:?} timeout")]
    Timeout {
        /// Configured upper bound.
        limit: Duration,
        /// Observed decision time.
        elapsed: Duration,
    },
}

/// A fatal session error. No partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The remaining card pool cannot fill a full round of packs.
    ///
    /// Raised before any pack of the offending round is created: a short
    /// pack changes game balance and must never happen silently.
    #[error("insufficient cards for round {round}: need {needed}, have {available}")]
    InsufficientCards {
        /// 1-based round that could not be allocated.
        round: u32,
        /// Cards the round's allocation requires.
        needed: usize,
        /// Cards actually remaining.
        available: usize,
    },

    /// A decision strategy violated its contract.
    #[error("{reason} ({participant}, round {round}, pick {pick})")]
    StrategyContract {
        /// Seat whose strategy misbehaved.
        participant: ParticipantId,
        /// 1-based round of the violation.
        round: u32,
        /// 1-based pick of the violation.
        pick: u32,
        /// What the strategy did wrong.
        reason: ContractBreach,
    },

    /// A commit-phase removal targeted a card no longer in its pack.
    ///
    /// This cannot happen under correct operation: it means two seats were
    /// handed the same pack or the decision/commit ordering was violated.
    /// It signals an engine bug, not a data problem.
    #[error("commit removal of {card} failed: not in pack ({participant}, round {round}, pick {pick})")]
    DuplicateRemoval {
        /// Seat whose commit failed.
        participant: ParticipantId,
        /// 1-based round of the failure.
        round: u32,
        /// 1-based pick of the failure.
        pick: u32,
        /// Card that was missing from the pack.
        card: CardId,
    },
}
