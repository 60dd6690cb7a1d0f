//! # draftsim
//!
//! A booster draft simulation engine for generating pick-level training data.
//!
//! A fixed pool of cards is split into sealed packs that circulate among N
//! participants, alternating direction each round; every participant removes
//! exactly one card per turn until the packs are empty. The engine owns the
//! orchestration (pack ownership, rotation, exhaustion bookkeeping, and the
//! per-pick observation contract) and delegates the actual choice to
//! pluggable [`strategy::DraftStrategy`] implementations.
//! ## Design Principles
//!
//! 1. **Engine-Opaque Cards**: A card is an identity plus an attribute bag.
//!    The engine never interprets attributes; strategies may.
//!
//! 2. **Deterministic By Seed**: All randomness flows through a seeded
//!    [`core::DraftRng`]. The same configuration and seed reproduce the
//!    same draft, with or without an observation sink bound.
//!
//! 3. **Snapshots Over Registries**: Observation events carry independently
//!    owned pre-pick snapshots. No global mutable state, no retroactive
//!    record corruption. Packs and pools use `im` persistent structures so
//!    those snapshots are O(1) clones.
//!
//! ## Modules
//!
//! - `core`: participant identity, RNG, configuration, error taxonomy
//! - `cards`: card identity, attributes, the undealt card pool
//! - `draft`: packs, the pack allocator, and the draft session state machine
//! - `strategy`: the decision contract and the non-learned reference bots
//! - `training`: per-pick observation records and persistence sinks

pub mod cards;
pub mod core;
pub mod draft;
pub mod strategy;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    ContractBreach, DraftConfig, DraftError, DraftRng, ParticipantId, ParticipantMap,
    PassDirection,
};

pub use crate::cards::{AttributeKey, AttributeValue, Attributes, Card, CardId, CardPool};

pub use crate::draft::{
    DraftOutcome, DraftSession, Pack, PackAllocator, PackId, Participant, SessionPhase,
};

pub use crate::strategy::{DraftStrategy, PickContext, RandomStrategy, ScoredStrategy};

pub use crate::training::{BinarySink, JsonlSink, MemorySink, ObservationSink, PickRecord};
