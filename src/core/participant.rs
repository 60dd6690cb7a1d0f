//! Participant identification and per-participant data storage.
//!
//! ## ParticipantId
//!
//! Type-safe seat identifier supporting 1-255 participants, assigned at
//! session start and stable for the session's lifetime.
//!
//! ## ParticipantMap
//!
//! Per-participant data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `ParticipantId`. The session uses it
//! for pools, bound strategies, and the final outcome.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier for a draft participant.
///
/// Indices are 0-based: the first seat is `ParticipantId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a draft with `count` participants.
    ///
    /// ```
    /// use draftsim::core::ParticipantId;
    ///
    /// let seats: Vec<_> = ParticipantId::all(8).collect();
    /// assert_eq!(seats.len(), 8);
    /// assert_eq!(seats[0], ParticipantId::new(0));
    /// assert_eq!(seats[7], ParticipantId::new(7));
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = ParticipantId> {
        (0..count as u8).map(ParticipantId)
    }

    /// The seat a pack moves to when passed toward higher indices.
    #[must_use]
    pub fn left_neighbor(self, count: usize) -> ParticipantId {
        ParticipantId(((self.index() + 1) % count) as u8)
    }

    /// The seat a pack moves to when passed toward lower indices.
    #[must_use]
    pub fn right_neighbor(self, count: usize) -> ParticipantId {
        ParticipantId(((self.index() + count - 1) % count) as u8)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// Per-participant data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ## Example
///
/// ```
/// use draftsim::core::{ParticipantId, ParticipantMap};
///
/// let mut picks: ParticipantMap<u32> = ParticipantMap::with_value(4, 0);
///
/// picks[ParticipantId::new(1)] += 1;
/// assert_eq!(picks[ParticipantId::new(1)], 1);
/// assert_eq!(picks[ParticipantId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    data: Vec<T>,
}

impl<T> ParticipantMap<T> {
    /// Create a new map with values from a factory function.
    ///
    /// The factory receives the `ParticipantId` for each seat.
    pub fn new(count: usize, factory: impl Fn(ParticipantId) -> T) -> Self {
        assert!(count > 0, "Must have at least 1 participant");
        assert!(count <= 255, "At most 255 participants supported");

        let data = (0..count as u8).map(|i| factory(ParticipantId(i))).collect();

        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(count, |_| value.clone())
    }

    /// Build a map from a vec with one entry per seat, in seat order.
    ///
    /// Used when entries cannot be produced by a factory, such as moving
    /// boxed strategies into their bindings.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 participant");
        assert!(data.len() <= 255, "At most 255 participants supported");

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, participant: ParticipantId) -> &T {
        &self.data[participant.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, participant: ParticipantId) -> &mut T {
        &mut self.data[participant.index()]
    }

    /// Iterate over (ParticipantId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (ParticipantId(i as u8), v))
    }

    /// Iterate over all seat IDs.
    pub fn participant_ids(&self) -> impl Iterator<Item = ParticipantId> {
        (0..self.data.len() as u8).map(ParticipantId)
    }
}

impl<T> Index<ParticipantId> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, participant: ParticipantId) -> &Self::Output {
        self.get(participant)
    }
}

impl<T> IndexMut<ParticipantId> for ParticipantMap<T> {
    fn index_mut(&mut self, participant: ParticipantId) -> &mut Self::Output {
        self.get_mut(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_basics() {
        let p0 = ParticipantId::new(0);
        let p1 = ParticipantId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Participant 0");
    }

    #[test]
    fn test_participant_id_all() {
        let seats: Vec<_> = ParticipantId::all(3).collect();
        assert_eq!(
            seats,
            vec![
                ParticipantId::new(0),
                ParticipantId::new(1),
                ParticipantId::new(2)
            ]
        );
    }

    #[test]
    fn test_neighbors_wrap() {
        let count = 4;
        assert_eq!(
            ParticipantId::new(3).left_neighbor(count),
            ParticipantId::new(0)
        );
        assert_eq!(
            ParticipantId::new(0).right_neighbor(count),
            ParticipantId::new(3)
        );
        assert_eq!(
            ParticipantId::new(1).left_neighbor(count),
            ParticipantId::new(2)
        );
        assert_eq!(
            ParticipantId::new(2).right_neighbor(count),
            ParticipantId::new(1)
        );
    }

    #[test]
    fn test_map_new_with_factory() {
        let map: ParticipantMap<usize> = ParticipantMap::new(4, |p| p.index() * 10);

        assert_eq!(map[ParticipantId::new(0)], 0);
        assert_eq!(map[ParticipantId::new(3)], 30);
        assert_eq!(map.participant_count(), 4);
    }

    #[test]
    fn test_map_from_vec() {
        let map = ParticipantMap::from_vec(vec!["a", "b", "c"]);

        assert_eq!(map.participant_count(), 3);
        assert_eq!(map[ParticipantId::new(1)], "b");
    }

    #[test]
    fn test_map_mutation() {
        let mut map: ParticipantMap<Vec<u32>> = ParticipantMap::with_value(2, Vec::new());

        map[ParticipantId::new(0)].push(7);
        assert_eq!(map[ParticipantId::new(0)], vec![7]);
        assert!(map[ParticipantId::new(1)].is_empty());
    }

    #[test]
    fn test_map_iter_in_seat_order() {
        let map: ParticipantMap<usize> = ParticipantMap::new(3, |p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (ParticipantId::new(0), &0));
        assert_eq!(pairs[2], (ParticipantId::new(2), &2));
    }

    #[test]
    fn test_map_serialization() {
        let map: ParticipantMap<u32> = ParticipantMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ParticipantMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 participant")]
    fn test_map_zero_participants() {
        let _: ParticipantMap<u32> = ParticipantMap::with_value(0, 0);
    }
}
