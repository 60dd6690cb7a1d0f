//! The draft session state machine.
//!
//! Drives `NotStarted -> RoundInProgress -> PickInProgress -> RoundComplete
//! -> ... -> Finished`, or `Aborted` on any fatal error. Each pick turn has
//! three phases:
//!
//! 1. **Decision**: every seat's strategy is consulted against the pack
//!    currently in front of it. Nothing mutates until all decisions are in,
//!    so invocation order cannot leak one seat's choice to another.
//! 2. **Commit**: per seat, pre-removal snapshots are captured, the chosen
//!    card moves from pack to pool, and exactly one observation event is
//!    emitted carrying those snapshots.
//! 3. **Rotation**: packs move to the neighboring seat, direction set by
//!    round parity.
//!
//! Strategy failures and allocation shortfalls abort the whole session.
//! A missing observation sink changes nothing but the absence of records.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, error, trace};

use crate::cards::{Card, CardId, CardPool};
use crate::core::config::{DraftConfig, PassDirection};
use crate::core::errors::{ContractBreach, DraftError};
use crate::core::participant::{ParticipantId, ParticipantMap};
use crate::core::rng::DraftRng;
use crate::strategy::{DraftStrategy, PickContext};
use crate::training::{ObservationSink, PickRecord};

use super::allocator::PackAllocator;
use super::pack::Pack;
use super::participant::Participant;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed, `run` not yet called.
    NotStarted,
    /// A round's packs are live.
    RoundInProgress {
        /// 1-based round number.
        round: u32,
    },
    /// A pick turn is being decided or committed.
    PickInProgress {
        /// 1-based round number.
        round: u32,
        /// 1-based pick number.
        pick: u32,
    },
    /// A round's packs have been picked empty.
    RoundComplete {
        /// 1-based round number.
        round: u32,
    },
    /// All rounds done; terminal.
    Finished,
    /// A fatal error unwound the session; terminal.
    Aborted,
}

/// The result of a completed draft.
#[derive(Clone, Debug)]
pub struct DraftOutcome {
    /// Session identifier from the configuration.
    pub session_id: u64,

    /// Every seat's drafted cards, in pick order.
    pub pools: ParticipantMap<Vec<Card>>,

    /// Cards never dealt (empty when the rounds consume the whole list).
    pub remaining: Vec<Card>,
}

/// A single booster draft from card list to final pools.
///
/// Bindings are fixed at construction: one strategy per seat, zero or one
/// observation sink. The session owns its card list, RNG, and state
/// outright; concurrent sessions share nothing.
///
/// ## Example
///
/// ```
/// use draftsim::{Card, CardId, DraftConfig, DraftSession, DraftStrategy, RandomStrategy};
///
/// let cards: Vec<Card> = (0..6)
///     .map(|i| Card::new(CardId::new(i), format!("card-{i}")))
///     .collect();
/// let strategies: Vec<Box<dyn DraftStrategy>> = vec![
///     Box::new(RandomStrategy::new(1)),
///     Box::new(RandomStrategy::new(2)),
/// ];
///
/// let config = DraftConfig::new(2, 3, 1).with_seed(9);
/// let outcome = DraftSession::new(config, cards, strategies).run().unwrap();
///
/// assert_eq!(outcome.pools[draftsim::ParticipantId::new(0)].len(), 3);
/// assert!(outcome.remaining.is_empty());
/// ```
pub struct DraftSession {
    config: DraftConfig,
    remaining: CardPool,
    participants: ParticipantMap<Participant>,
    strategies: ParticipantMap<Box<dyn DraftStrategy>>,
    sink: Option<Box<dyn ObservationSink>>,
    allocator: PackAllocator,
    rng: DraftRng,
    phase: SessionPhase,
}

impl DraftSession {
    /// Bind a card list and one strategy per seat into a new session.
    ///
    /// Panics if the strategy count does not match the configured seat
    /// count, or if two cards share an identity. Both are caller
    /// programming errors, not runtime conditions.
    #[must_use]
    pub fn new(
        config: DraftConfig,
        cards: Vec<Card>,
        strategies: Vec<Box<dyn DraftStrategy>>,
    ) -> Self {
        assert_eq!(
            strategies.len(),
            config.num_participants,
            "one strategy must be bound per participant"
        );

        let rng = DraftRng::new(config.seed);
        let participants = ParticipantMap::new(config.num_participants, Participant::new);

        Self {
            remaining: CardPool::from_cards(cards),
            participants,
            strategies: ParticipantMap::from_vec(strategies),
            sink: None,
            allocator: PackAllocator::new(),
            rng,
            phase: SessionPhase::NotStarted,
            config,
        }
    }

    /// Bind an observation sink (builder pattern).
    ///
    /// Without one, no events are emitted and the draft is otherwise
    /// unaffected.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn ObservationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Run the draft to completion, consuming the session.
    ///
    /// On a fatal error the whole session unwinds: the error names the
    /// failure site (round, pick, participant) and no partial outcome is
    /// produced.
    pub fn run(mut self) -> Result<DraftOutcome, DraftError> {
        debug!(
            session_id = self.config.session_id,
            participants = self.config.num_participants,
            pack_size = self.config.pack_size,
            rounds = self.config.num_rounds,
            "draft session started"
        );

        for round in 1..=self.config.num_rounds {
            self.phase = SessionPhase::RoundInProgress { round };

            let mut packs = match self.allocator.deal_round(
                &mut self.remaining,
                &mut self.rng,
                self.config.num_participants,
                self.config.pack_size,
                round,
            ) {
                Ok(packs) => packs,
                Err(err) => return Err(self.abort(err)),
            };

            for pick in 1..=self.config.pack_size as u32 {
                self.phase = SessionPhase::PickInProgress { round, pick };

                let choices = match self.collect_decisions(&packs, round, pick) {
                    Ok(choices) => choices,
                    Err(err) => return Err(self.abort(err)),
                };
                if let Err(err) = self.commit_choices(&mut packs, &choices, round, pick) {
                    return Err(self.abort(err));
                }

                rotate_packs(&mut packs, self.config.direction_for_round(round));
            }

            debug_assert!(packs.iter().all(Pack::is_empty), "round left unpicked cards");
            self.phase = SessionPhase::RoundComplete { round };
            debug!(session_id = self.config.session_id, round, "round complete");
        }

        self.phase = SessionPhase::Finished;
        debug!(
            session_id = self.config.session_id,
            remaining = self.remaining.len(),
            "draft session finished"
        );

        let pools =
            ParticipantMap::new(self.config.num_participants, |id| {
                self.participants[id].pool_snapshot()
            });

        Ok(DraftOutcome {
            session_id: self.config.session_id,
            pools,
            remaining: self.remaining.into_cards(),
        })
    }

    /// Decision phase: consult every seat's strategy, mutating nothing.
    ///
    /// Each strategy sees only its own pack and pool, so the loop order
    /// cannot influence any outcome.
    fn collect_decisions(
        &mut self,
        packs: &[Pack],
        round: u32,
        pick: u32,
    ) -> Result<SmallVec<[CardId; 8]>, DraftError> {
        let mut choices = SmallVec::new();

        for id in ParticipantId::all(self.config.num_participants) {
            let pack = &packs[id.index()];
            debug_assert!(!pack.is_empty(), "decision requested on an empty pack");

            let ctx = PickContext {
                participant: id,
                round_number: round,
                pick_number: pick,
                pack,
                pool: self.participants[id].pool(),
            };

            let strategy = &mut self.strategies[id];
            let started = Instant::now();
            let selection = strategy.pick(&ctx);
            let elapsed = started.elapsed();

            if let Some(limit) = self.config.decision_timeout {
                if elapsed > limit {
                    return Err(DraftError::StrategyContract {
                        participant: id,
                        round,
                        pick,
                        reason: ContractBreach::Timeout { limit, elapsed },
                    });
                }
            }

            let chosen = match selection {
                Some(card) => card,
                None => {
                    return Err(DraftError::StrategyContract {
                        participant: id,
                        round,
                        pick,
                        reason: ContractBreach::NoSelection,
                    })
                }
            };
            if !pack.contains(chosen) {
                return Err(DraftError::StrategyContract {
                    participant: id,
                    round,
                    pick,
                    reason: ContractBreach::ForeignCard(chosen),
                });
            }

            trace!(
                participant = id.index(),
                strategy = strategy.name(),
                round,
                pick,
                card = %chosen,
                "decision collected"
            );
            choices.push(chosen);
        }

        Ok(choices)
    }

    /// Commit phase: move each chosen card from pack to pool, emitting
    /// exactly one observation event per seat with pre-removal snapshots.
    fn commit_choices(
        &mut self,
        packs: &mut [Pack],
        choices: &[CardId],
        round: u32,
        pick: u32,
    ) -> Result<(), DraftError> {
        for id in ParticipantId::all(self.config.num_participants) {
            let pack = &mut packs[id.index()];
            let chosen_id = choices[id.index()];

            // Snapshots reflect what the strategy saw: the pack before
            // removal, the pool before the append. Skipped entirely when
            // no sink is bound.
            let snapshots = if self.sink.is_some() {
                Some((pack.snapshot(), self.participants[id].pool_snapshot()))
            } else {
                None
            };

            let chosen = match pack.remove(chosen_id) {
                Some(card) => card,
                None => {
                    return Err(DraftError::DuplicateRemoval {
                        participant: id,
                        round,
                        pick,
                        card: chosen_id,
                    })
                }
            };

            if let Some((pack_snapshot, pool_snapshot)) = snapshots {
                let record = PickRecord {
                    session_id: self.config.session_id,
                    participant: id,
                    round_number: round,
                    pick_number: pick,
                    pack: pack_snapshot,
                    pool: pool_snapshot,
                    chosen: chosen.clone(),
                };
                if let Some(sink) = self.sink.as_mut() {
                    sink.record_pick(&record);
                }
            }

            self.participants[id].add_to_pool(chosen);
        }

        Ok(())
    }

    fn abort(&mut self, err: DraftError) -> DraftError {
        self.phase = SessionPhase::Aborted;
        error!(session_id = self.config.session_id, error = %err, "draft session aborted");
        err
    }
}

/// Move every pack to its holder's neighbor.
///
/// `Left` sends the pack at seat `i` to seat `i + 1 (mod N)`, `Right` the
/// reverse. A single-seat table keeps its pack.
fn rotate_packs(packs: &mut [Pack], direction: PassDirection) {
    if packs.len() < 2 {
        return;
    }
    match direction {
        PassDirection::Left => packs.rotate_right(1),
        PassDirection::Right => packs.rotate_left(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::pack::PackId;

    fn tagged_packs(count: u32) -> Vec<Pack> {
        (0..count)
            .map(|i| {
                Pack::new(
                    PackId::new(i),
                    vec![Card::new(CardId::new(i), format!("tag-{i}"))],
                )
            })
            .collect()
    }

    #[test]
    fn test_rotate_left_moves_to_higher_seat() {
        let mut packs = tagged_packs(4);

        rotate_packs(&mut packs, PassDirection::Left);

        // Seat 0's pack came from seat 3; seat 1 now holds seat 0's pack.
        assert_eq!(packs[0].id(), PackId::new(3));
        assert_eq!(packs[1].id(), PackId::new(0));
        assert_eq!(packs[3].id(), PackId::new(2));
    }

    #[test]
    fn test_rotate_right_moves_to_lower_seat() {
        let mut packs = tagged_packs(4);

        rotate_packs(&mut packs, PassDirection::Right);

        assert_eq!(packs[0].id(), PackId::new(1));
        assert_eq!(packs[3].id(), PackId::new(0));
    }

    #[test]
    fn test_opposite_rotations_cancel() {
        let mut packs = tagged_packs(5);

        rotate_packs(&mut packs, PassDirection::Left);
        rotate_packs(&mut packs, PassDirection::Right);

        for (i, pack) in packs.iter().enumerate() {
            assert_eq!(pack.id(), PackId::new(i as u32));
        }
    }

    #[test]
    fn test_single_seat_rotation_is_identity() {
        let mut packs = tagged_packs(1);
        rotate_packs(&mut packs, PassDirection::Left);
        assert_eq!(packs[0].id(), PackId::new(0));
    }

    #[test]
    fn test_new_session_is_not_started() {
        let cards = vec![
            Card::new(CardId::new(0), "a"),
            Card::new(CardId::new(1), "b"),
        ];
        let strategies: Vec<Box<dyn DraftStrategy>> =
            vec![Box::new(crate::strategy::RandomStrategy::new(0))];

        let session = DraftSession::new(DraftConfig::new(1, 1, 1), cards, strategies);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    #[should_panic(expected = "one strategy must be bound per participant")]
    fn test_strategy_count_mismatch_panics() {
        let _ = DraftSession::new(DraftConfig::new(2, 1, 1), Vec::new(), Vec::new());
    }
}
