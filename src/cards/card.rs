//! Card identity and data.
//!
//! A `Card` is an identity, a display name, and an opaque attribute bag.
//! It is immutable once constructed and owned by exactly one container at
//! a time: the undealt pool, a pack, or a participant's drafted pool.
//! Ownership transfers on pick; cards are never duplicated.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Identity of a card instance, unique within one draft session.
///
/// Names are not identities: a session may contain several cards with the
/// same name, and removal targets the specific instance a participant was
/// shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A drafted item: identity, display name, opaque details.
///
/// The engine never reads `details`; whatever catalog resolved the card
/// list owns its meaning, and strategies may inspect it.
///
/// ## Example
///
/// ```
/// use draftsim::cards::{Card, CardId};
///
/// let bolt = Card::new(CardId::new(1), "Lightning Bolt")
///     .with_attr("mana_value", 1i64)
///     .with_attr("colors", vec!["R".to_string()]);
///
/// assert_eq!(bolt.name, "Lightning Bolt");
/// assert_eq!(bolt.get_int("mana_value", 0), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Instance identity, unique within the session.
    pub id: CardId,

    /// Display name. Not unique: reprints share it.
    pub name: String,

    /// Opaque attribute bag owned by the caller.
    #[serde(default)]
    pub details: Attributes,
}

impl Card {
    /// Create a card with an empty attribute bag.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            details: Attributes::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.details.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Get a text list attribute, empty if absent.
    #[must_use]
    pub fn get_text_list(&self, key: &str) -> &[String] {
        self.get_attr(key)
            .and_then(|v| v.as_text_list())
            .unwrap_or(&[])
    }
}
