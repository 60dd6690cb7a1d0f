//! Observation contract tests.
//!
//! One record per (participant, pick), pre-removal snapshots, and file
//! sinks that survive a whole session.

use rustc_hash::{FxHashMap, FxHashSet};

use draftsim::training::binary::read_records;
use draftsim::{
    BinarySink, Card, CardId, DraftConfig, DraftSession, DraftStrategy, JsonlSink, MemorySink,
    ParticipantId, PickRecord, RandomStrategy,
};

fn numbered_cards(count: u32) -> Vec<Card> {
    (0..count)
        .map(|i| {
            Card::new(CardId::new(i), format!("card-{i}"))
                .with_attr("mana_value", i64::from(i % 8))
        })
        .collect()
}

fn random_strategies(count: usize) -> Vec<Box<dyn DraftStrategy>> {
    (0..count)
        .map(|i| Box::new(RandomStrategy::new(500 + i as u64)) as Box<dyn DraftStrategy>)
        .collect()
}

fn observed_draft(seats: usize, pack_size: usize, rounds: u32, seed: u64) -> Vec<PickRecord> {
    let cards = numbered_cards((seats * pack_size * rounds as usize) as u32);
    let config = DraftConfig::new(seats, pack_size, rounds)
        .with_session_id(42)
        .with_seed(seed);

    let sink = MemorySink::new();
    DraftSession::new(config, cards, random_strategies(seats))
        .with_sink(Box::new(sink.clone()))
        .run()
        .unwrap();
    sink.records()
}

#[test]
fn exactly_one_record_per_participant_pick() {
    let records = observed_draft(4, 5, 2, 17);

    assert_eq!(records.len(), 4 * 5 * 2);

    let coordinates: FxHashSet<_> = records.iter().map(|r| r.coordinate()).collect();
    assert_eq!(coordinates.len(), records.len(), "duplicate coordinate emitted");

    assert!(records.iter().all(|r| r.session_id == 42));
}

#[test]
fn pack_snapshots_are_pre_removal() {
    let records = observed_draft(4, 5, 2, 23);

    for record in &records {
        // The recorded pack is what the strategy saw, chosen card included.
        assert!(
            record.pack.iter().any(|c| c.id == record.chosen.id),
            "snapshot must include the chosen card"
        );

        // Pack shrinks by one per pick within a round.
        let expected_len = 5 - (record.pick_number as usize - 1);
        assert_eq!(record.pack.len(), expected_len);
    }

    // The final pick of every round sees a single-card pack, so packs end
    // the round empty.
    for record in records.iter().filter(|r| r.pick_number == 5) {
        assert_eq!(record.pack.len(), 1);
        assert_eq!(record.pack[0].id, record.chosen.id);
    }
}

#[test]
fn pool_snapshots_replay_each_seat_history() {
    let seats = 3;
    let records = observed_draft(seats, 4, 2, 31);

    // Group per seat, ordered by (round, pick).
    let mut per_seat: FxHashMap<ParticipantId, Vec<&PickRecord>> = FxHashMap::default();
    for record in &records {
        per_seat.entry(record.participant).or_default().push(record);
    }

    for (seat, mut seat_records) in per_seat {
        seat_records.sort_by_key(|r| (r.round_number, r.pick_number));

        let mut expected_pool: Vec<CardId> = Vec::new();
        for record in seat_records {
            let pool_ids: Vec<CardId> = record.pool.iter().map(|c| c.id).collect();
            assert_eq!(
                pool_ids, expected_pool,
                "{seat}: pool snapshot must be the pre-pick history in pick order"
            );
            expected_pool.push(record.chosen.id);
        }
        assert_eq!(expected_pool.len(), 8);
    }
}

#[test]
fn records_are_independent_copies() {
    let records = observed_draft(2, 3, 1, 37);

    // The first pick's pool snapshot stays empty even though the live
    // pools grew to three cards each by the end of the session.
    let first = records
        .iter()
        .find(|r| r.participant == ParticipantId::new(0) && r.pick_number == 1)
        .unwrap();
    assert!(first.pool.is_empty());
    assert_eq!(first.pack.len(), 3);
}

#[test]
fn jsonl_sink_survives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");

    let cards = numbered_cards(24);
    let config = DraftConfig::new(4, 3, 2).with_session_id(7).with_seed(3);
    let sink = JsonlSink::create(&path).unwrap();

    DraftSession::new(config, cards, random_strategies(4))
        .with_sink(Box::new(sink))
        .run()
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<PickRecord> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(parsed.len(), 4 * 3 * 2);
    assert!(parsed.iter().all(|r| r.session_id == 7));

    let coordinates: FxHashSet<_> = parsed.iter().map(|r| r.coordinate()).collect();
    assert_eq!(coordinates.len(), parsed.len());
}

#[test]
fn binary_sink_survives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.bin");

    let cards = numbered_cards(12);
    let config = DraftConfig::new(2, 3, 2).with_session_id(9).with_seed(3);
    let sink = BinarySink::create(&path).unwrap();

    DraftSession::new(config, cards, random_strategies(2))
        .with_sink(Box::new(sink))
        .run()
        .unwrap();

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 2 * 3 * 2);
    assert!(records.iter().all(|r| r.session_id == 9));

    // Frames preserve the attribute bags end to end.
    for record in &records {
        assert!(record.chosen.get_int("mana_value", -1) >= 0);
    }
}
