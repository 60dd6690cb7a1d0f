//! Draft orchestration: packs, allocation, and the session state machine.
//!
//! ## Key Types
//!
//! - `Pack`: a sealed, mutable card group with identity stable across
//!   rotation
//! - `PackAllocator`: builds one round's packs from the undealt pool
//! - `Participant`: a seat and its append-only drafted pool
//! - `DraftSession`: drives rounds, picks, rotation, and observation

pub mod allocator;
pub mod pack;
pub mod participant;
pub mod session;

pub use allocator::PackAllocator;
pub use pack::{Pack, PackId};
pub use participant::Participant;
pub use session::{DraftOutcome, DraftSession, SessionPhase};
