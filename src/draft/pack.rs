//! Sealed packs of cards.
//!
//! A pack is the mutable group of cards currently circulating together.
//! Card order inside a pack carries no game meaning, but it is stable so
//! that seeded drafts replay identically. Contents are an `im::Vector`,
//! making the pre-pick snapshots taken every commit O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Identity of a physical pack, stable while it rotates around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackId(pub u32);

impl PackId {
    /// Create a new pack ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pack({})", self.0)
    }
}

/// A sealed group of cards momentarily held by one participant.
///
/// Invariant: a card lives in at most one pack or one drafted pool at a
/// time. The session moves cards out of packs; nothing ever puts one back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pack {
    id: PackId,
    cards: Vector<Card>,
}

impl Pack {
    /// Seal a new pack.
    #[must_use]
    pub fn new(id: PackId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            cards: cards.into_iter().collect(),
        }
    }

    /// This pack's identity.
    #[must_use]
    pub fn id(&self) -> PackId {
        self.id
    }

    /// Number of cards still sealed in.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pack has been picked empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Whether a specific card instance is in this pack.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Get a card by identity.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Get a card by position in the stable order.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove a specific card instance.
    ///
    /// Returns `None` if the card is not present. Absence is reported
    /// rather than panicking because it signals an orchestration bug the
    /// session converts into a typed error.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// An independently owned copy of the current contents.
    ///
    /// Later mutation of the live pack can never reach a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }
}
