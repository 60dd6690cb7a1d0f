//! The observation sink contract and the in-memory implementation.

use std::sync::{Arc, Mutex};

use super::record::PickRecord;

/// Receives one event per committed pick.
///
/// The session calls this exactly once per (participant, pick), in the
/// commit phase, with pre-pick snapshots. Implementations own their
/// failure handling entirely: nothing a sink does (or fails to do) may
/// affect the draft's state or outcome, so the method returns nothing and
/// must not panic on persistence problems.
pub trait ObservationSink: Send {
    /// Record one committed pick.
    fn record_pick(&mut self, record: &PickRecord);
}

/// Collects records in a shared in-memory buffer, in emission order.
///
/// Cloning yields a handle onto the same buffer, so a caller can keep one
/// clone and bind the other to the session, then read the records back
/// after the draft completes. Useful for tests and for in-process
/// consumers that encode records straight into feature tensors without
/// touching disk.
///
/// ```
/// use draftsim::training::MemorySink;
///
/// let sink = MemorySink::new();
/// let handle = sink.clone();
/// // `sink` goes to the session; `handle` reads the records afterwards.
/// assert!(handle.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<PickRecord>>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out the records collected so far, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<PickRecord> {
        self.buffer().clone()
    }

    /// Number of records collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, Vec<PickRecord>> {
        // A poisoning panic cannot leave the Vec half-written; recover it.
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ObservationSink for MemorySink {
    fn record_pick(&mut self, record: &PickRecord) {
        self.buffer().push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::core::participant::ParticipantId;

    fn record(pick: u32) -> PickRecord {
        PickRecord {
            session_id: 1,
            participant: ParticipantId::new(0),
            round_number: 1,
            pick_number: pick,
            pack: vec![Card::new(CardId::new(pick), "p")],
            pool: vec![],
            chosen: Card::new(CardId::new(pick), "p"),
        }
    }

    #[test]
    fn test_collects_in_emission_order() {
        let mut sink = MemorySink::new();

        sink.record_pick(&record(1));
        sink.record_pick(&record(2));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[0].pick_number, 1);
        assert_eq!(sink.records()[1].pick_number, 2);
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let mut sink = MemorySink::new();
        let handle = sink.clone();

        sink.record_pick(&record(1));

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.records()[0].pick_number, 1);
    }
}
