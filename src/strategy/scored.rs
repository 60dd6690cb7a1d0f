//! Color-affinity heuristic strategy.

use crate::cards::{Card, CardId};

use super::{DraftStrategy, PickContext};

/// Attribute key holding a card's color identity as a text list.
pub const COLORS_ATTR: &str = "colors";

/// Attribute key holding a card's converted cost as an integer.
pub const MANA_VALUE_ATTR: &str = "mana_value";

/// Scores each candidate by color affinity with the drafted pool plus a
/// cheapness bonus, and takes the best.
///
/// For a candidate card: synergy is the number of already-drafted cards
/// sharing at least one color with it, quality is `max(0, 8 - mana_value)`.
/// Ties keep the earliest candidate in pack order, and a pack whose cards
/// carry no scorable attributes degrades to the first card, so the
/// strategy always makes a legal selection.
///
/// Reads the [`COLORS_ATTR`] and [`MANA_VALUE_ATTR`] attributes; cards
/// missing them simply score zero for that component.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoredStrategy;

impl ScoredStrategy {
    /// Create a scored strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn shares_color(a: &Card, b: &Card) -> bool {
        let a_colors = a.get_text_list(COLORS_ATTR);
        b.get_text_list(COLORS_ATTR)
            .iter()
            .any(|color| a_colors.contains(color))
    }

    fn score(candidate: &Card, ctx: &PickContext<'_>) -> i64 {
        let synergy = ctx
            .pool
            .iter()
            .filter(|drafted| Self::shares_color(candidate, drafted))
            .count() as i64;
        let quality = (8 - candidate.get_int(MANA_VALUE_ATTR, 8)).max(0);
        synergy + quality
    }
}

impl DraftStrategy for ScoredStrategy {
    fn name(&self) -> &str {
        "scored"
    }

    fn pick(&mut self, ctx: &PickContext<'_>) -> Option<CardId> {
        let mut best: Option<(CardId, i64)> = None;
        for candidate in ctx.pack.iter() {
            let score = Self::score(candidate, ctx);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate.id, score));
            }
        }
        best.map(|(id, _)| id)
    }
}
