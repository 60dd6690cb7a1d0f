//! Uniform random baseline strategy.

use crate::cards::CardId;
use crate::core::rng::DraftRng;

use super::{DraftStrategy, PickContext};

/// Picks uniformly at random from the presented pack.
///
/// The weakest baseline, and the opponent the original training pipeline
/// drafted against to bootstrap pick logs. Owns its RNG so concurrent
/// sessions never contend; seed it (or [`DraftRng::fork`] it from a master
/// stream) for reproducible drafts.
pub struct RandomStrategy {
    rng: DraftRng,
}

impl RandomStrategy {
    /// Create a random strategy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DraftRng::new(seed),
        }
    }

    /// Create a random strategy from an existing stream.
    #[must_use]
    pub fn from_rng(rng: DraftRng) -> Self {
        Self { rng }
    }
}

impl DraftStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn pick(&mut self, ctx: &PickContext<'_>) -> Option<CardId> {
        let index = self.rng.gen_range_usize(0..ctx.pack.len());
        ctx.pack.card_at(index).map(|c| c.id)
    }
}
