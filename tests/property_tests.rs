//! Conservation and no-duplication properties over randomized drafts.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use draftsim::{Card, CardId, DraftConfig, DraftSession, DraftStrategy, RandomStrategy};

fn numbered_cards(count: u32) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(CardId::new(i), format!("card-{i}")))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_card_ends_in_exactly_one_place(
        seats in 2usize..=8,
        pack_size in 1usize..=10,
        rounds in 1u32..=3,
        surplus in 0u32..=9,
        seed in any::<u64>(),
    ) {
        let required = (seats * pack_size * rounds as usize) as u32;
        let cards = numbered_cards(required + surplus);

        let strategies: Vec<Box<dyn DraftStrategy>> = (0..seats)
            .map(|i| {
                Box::new(RandomStrategy::new(seed.wrapping_add(i as u64)))
                    as Box<dyn DraftStrategy>
            })
            .collect();

        let config = DraftConfig::new(seats, pack_size, rounds).with_seed(seed);
        let outcome = DraftSession::new(config, cards, strategies).run().unwrap();

        // Conservation: picks account for exactly the dealt cards.
        let drafted: usize = outcome.pools.iter().map(|(_, pool)| pool.len()).sum();
        prop_assert_eq!(drafted, required as usize);
        prop_assert_eq!(outcome.remaining.len(), surplus as usize);

        // Every seat drafted the same number of cards.
        for (_, pool) in outcome.pools.iter() {
            prop_assert_eq!(pool.len(), pack_size * rounds as usize);
        }

        // No duplication: pools and remainder partition the input list.
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for (_, pool) in outcome.pools.iter() {
            for card in pool {
                prop_assert!(seen.insert(card.id), "{} in two pools", card.id);
            }
        }
        for card in &outcome.remaining {
            prop_assert!(seen.insert(card.id), "{} drafted and undealt", card.id);
        }
        prop_assert_eq!(seen.len() as u32, required + surplus);
    }
}
