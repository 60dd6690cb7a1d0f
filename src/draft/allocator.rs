//! Per-round pack allocation.
//!
//! Every round draws from an independently shuffled permutation of
//! whatever remains undealt. Shuffling per round, not once globally,
//! changes which cards co-occur in a pack, so it is part of the engine's
//! observable behavior and not an implementation detail.

use tracing::debug;

use crate::cards::CardPool;
use crate::core::errors::DraftError;
use crate::core::rng::DraftRng;

use super::pack::{Pack, PackId};

/// Builds sealed packs for each round of a session.
///
/// Owns nothing but the pack counter, so `PackId`s stay unique across
/// rounds.
#[derive(Clone, Debug, Default)]
pub struct PackAllocator {
    next_pack_id: u32,
}

impl PackAllocator {
    /// Create an allocator starting at `Pack(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal one pack per participant for the given round.
    ///
    /// Fails with [`DraftError::InsufficientCards`] before touching the
    /// pool if the remainder cannot fill every pack. A short pack changes
    /// game balance and must never be dealt silently.
    pub fn deal_round(
        &mut self,
        remaining: &mut CardPool,
        rng: &mut DraftRng,
        num_participants: usize,
        pack_size: usize,
        round: u32,
    ) -> Result<Vec<Pack>, DraftError> {
        let needed = num_participants * pack_size;
        if remaining.len() < needed {
            return Err(DraftError::InsufficientCards {
                round,
                needed,
                available: remaining.len(),
            });
        }

        // Fresh permutation of the remainder for every round.
        remaining.shuffle(rng);

        let packs: Vec<Pack> = (0..num_participants)
            .map(|_| {
                let id = PackId::new(self.next_pack_id);
                self.next_pack_id += 1;
                Pack::new(id, remaining.deal(pack_size))
            })
            .collect();

        debug!(
            round,
            packs = packs.len(),
            pack_size,
            remaining = remaining.len(),
            "round packs dealt"
        );

        Ok(packs)
    }
}
