//! Property tests for deck shuffling and session invariants.

use proptest::prelude::*;

use snap_engine::cards::{Card, Deck, DECK_SIZE};
use snap_engine::core::{EngineConfig, GameRng, PlayerId};
use snap_engine::error::GameError;
use snap_engine::session::{Outcome, SessionStore};

proptest! {
    /// Property: shuffling any prefix of the deck yields a permutation of it
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), len in 0usize..=DECK_SIZE) {
        let cards: Vec<Card> = Deck::standard().iter().copied().take(len).collect();
        let shuffled = Deck::from_cards(cards.iter().copied()).shuffle(&mut GameRng::new(seed));

        let mut before = cards.clone();
        let mut after: Vec<Card> = shuffled.iter().copied().collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Property: same seed, same shuffle
    #[test]
    fn prop_shuffle_deterministic(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut GameRng::new(seed));
        let b = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }

    /// Property: cards are conserved and turns alternate until the game ends
    #[test]
    fn prop_draws_conserve_cards_and_alternate(
        seed in any::<u64>(),
        starter_is_a in any::<bool>(),
        draws in 0usize..60,
    ) {
        let store = SessionStore::new(EngineConfig::default().with_seed(seed));
        let starter = if starter_is_a { PlayerId::A } else { PlayerId::B };
        let id = store.create("Alice", "Bob", starter).unwrap().id();

        for _ in 0..draws {
            let before = store.get(id).unwrap();
            let current = before.current_player();
            match store.draw(id, current) {
                Ok(drawn) => {
                    let after = store.get(id).unwrap();
                    prop_assert_eq!(drawn.player, current);
                    prop_assert_eq!(after.drawn_cards().len(), before.drawn_cards().len() + 1);
                    match after.outcome() {
                        Outcome::InProgress | Outcome::Draw => {
                            prop_assert_eq!(after.current_player(), current.other());
                        }
                        Outcome::Won(winner) => {
                            prop_assert_eq!(winner, current);
                            prop_assert_eq!(after.current_player(), current);
                        }
                    }
                }
                Err(GameError::GameOver { outcome }) => {
                    prop_assert!(before.is_terminal());
                    prop_assert_eq!(outcome, before.outcome());
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert_eq!(store.get(id).unwrap().total_cards(), DECK_SIZE);
        }
    }

    /// Property: a draw by the waiting player never changes the session
    #[test]
    fn prop_out_of_turn_draw_is_rejected(seed in any::<u64>(), warmup in 0usize..10) {
        let store = SessionStore::new(EngineConfig::default().with_seed(seed));
        let id = store.create("Alice", "Bob", PlayerId::A).unwrap().id();
        for _ in 0..warmup {
            let current = store.current_turn(id).unwrap();
            let _ = store.draw(id, current);
        }

        let before = store.get(id).unwrap();
        prop_assume!(!before.is_terminal());
        let waiting = before.current_player().other();

        let is_not_your_turn = matches!(
            store.draw(id, waiting),
            Err(GameError::NotYourTurn { .. })
        );
        prop_assert!(is_not_your_turn);
        prop_assert_eq!(store.get(id).unwrap(), before);
    }
}
