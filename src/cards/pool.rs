//! The undealt card pool.
//!
//! Holds whatever portion of the session's card list has not yet been
//! dealt into packs. The allocator reshuffles it at the start of every
//! round and drains contiguous slices off the front.

use rustc_hash::FxHashSet;

use crate::core::rng::DraftRng;

use super::attributes::Attributes;
use super::card::{Card, CardId};

/// The shuffled, undealt remainder of a session's card list.
///
/// Each session owns its pool exclusively; concurrent sessions never share
/// one. Construction enforces unique card identities.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Build a pool from already-constructed cards.
    ///
    /// Panics if two cards share a `CardId`. Duplicate identities would
    /// let one pick remove another seat's card, so they are a caller
    /// programming error, not a runtime condition.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut seen = FxHashSet::default();
        for card in &cards {
            assert!(seen.insert(card.id), "duplicate card id {} in pool", card.id);
        }
        Self { cards }
    }

    /// Build a pool from (name, details) pairs, assigning sequential IDs.
    ///
    /// Convenience for callers holding raw catalog rows. Reprints get
    /// distinct identities automatically.
    #[must_use]
    pub fn from_specs<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = (S, Attributes)>,
        S: Into<String>,
    {
        let cards = specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, details))| {
                let mut card = Card::new(CardId::new(i as u32), name);
                card.details = details;
                card
            })
            .collect();
        Self { cards }
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// View the undealt cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniformly permute the undealt cards.
    pub fn shuffle(&mut self, rng: &mut DraftRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first `count` cards.
    ///
    /// Callers check availability first; draining past the end is a
    /// bookkeeping bug.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        assert!(count <= self.cards.len(), "dealt past end of pool");
        self.cards.drain(..count).collect()
    }

    /// Consume the pool, returning the undealt remainder.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
