//! Core session types: participants, RNG, configuration, errors.
//!
//! This module contains the building blocks that are strategy-agnostic.
//! Strategies and sinks plug in at the seams defined in `strategy` and
//! `training` rather than modifying the core.

pub mod config;
pub mod errors;
pub mod participant;
pub mod rng;

pub use config::{DraftConfig, PassDirection};
pub use errors::{ContractBreach, DraftError};
pub use participant::{ParticipantId, ParticipantMap};
pub use rng::DraftRng;
