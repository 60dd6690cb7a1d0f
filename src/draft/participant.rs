//! A seat at the table and the cards it has drafted.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::participant::ParticipantId;

/// A draft participant: a stable seat plus an append-only pool.
///
/// The pool preserves pick order and only ever grows during a session.
/// Strategies see it through a shared reference; the session appends to it
/// during the commit phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    pool: Vector<Card>,
}

impl Participant {
    /// Create a participant with an empty pool.
    #[must_use]
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            pool: Vector::new(),
        }
    }

    /// This participant's seat.
    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// The drafted pool in pick order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Card> {
        &self.pool
    }

    /// Number of cards drafted so far.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Append a picked card. The pool never shrinks during a session.
    pub fn add_to_pool(&mut self, card: Card) {
        self.pool.push_back(card);
    }

    /// An independently owned copy of the pool in pick order.
    #[must_use]
    pub fn pool_snapshot(&self) -> Vec<Card> {
        self.pool.iter().cloned().collect()
    }
}
