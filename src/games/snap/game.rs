//! Snap rules implementation.

use crate::cards::Deck;
use crate::core::{GameRng, PlayerId, ResetStarter};
use crate::error::{GameError, Result};
use crate::rules::RulesEngine;
use crate::session::{DrawnCard, Outcome, Session};

/// Rank-matching rules for two players sharing one deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapRules {
    reset_starter: ResetStarter,
}

impl SnapRules {
    #[must_use]
    pub fn new(reset_starter: ResetStarter) -> Self {
        Self { reset_starter }
    }

    /// Turn convention applied by `reset`.
    #[must_use]
    pub fn reset_starter(&self) -> ResetStarter {
        self.reset_starter
    }
}

impl RulesEngine for SnapRules {
    fn create_session(
        &self,
        player_a_name: &str,
        player_b_name: &str,
        starting_player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Session> {
        Ok(Session::builder(player_a_name, player_b_name)
            .starting_player(starting_player)
            .deck(Deck::shuffled(rng))
            .build())
    }

    fn draw(&self, session: &Session, player: PlayerId) -> Result<(Session, DrawnCard)> {
        let outcome = session.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver { outcome });
        }

        let current = session.current_player();
        if player != current {
            return Err(GameError::NotYourTurn { player, current });
        }

        let mut next = session.clone();
        let previous = next.last_drawn().map(|d| d.card);
        let drawn = next.take_top_card(player).ok_or(GameError::DeckExhausted)?;

        if previous.is_some_and(|card| card.matches_rank(&drawn.card)) {
            // Turn stays with the winner.
            next.set_outcome(Outcome::Won(player));
        } else {
            next.set_current_player(player.other());
            if next.deck().is_empty() {
                next.set_outcome(Outcome::Draw);
            }
        }

        Ok((next, drawn))
    }

    fn reset(&self, session: &Session, rng: &mut GameRng) -> Result<Session> {
        let mut next = session.clone();
        let starter = self.reset_starter.resolve(session.starting_player());
        next.restart(Deck::shuffled(rng), starter);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit, DECK_SIZE};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// Deck listed bottom to top; the last card is drawn first.
    fn session_with(deck: &[Card], starter: PlayerId) -> Session {
        Session::builder("Alice", "Bob")
            .starting_player(starter)
            .deck(Deck::from_cards(deck.iter().copied()))
            .build()
    }

    #[test]
    fn test_create_session() {
        let rules = SnapRules::default();
        let mut rng = GameRng::new(42);

        let session = rules
            .create_session("Alice", "Bob", PlayerId::B, &mut rng)
            .unwrap();

        assert_eq!(session.deck().len(), DECK_SIZE);
        assert_ne!(session.deck(), &Deck::standard());
        assert_eq!(session.current_player(), PlayerId::B);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.drawn_cards().is_empty());
    }

    #[test]
    fn test_draw_toggles_turn() {
        let rules = SnapRules::default();
        let session = session_with(
            &[card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)],
            PlayerId::A,
        );

        let (next, drawn) = rules.draw(&session, PlayerId::A).unwrap();

        assert_eq!(drawn, DrawnCard::new(PlayerId::A, card(Suit::Clubs, Rank::Three)));
        assert_eq!(next.current_player(), PlayerId::B);
        assert_eq!(next.outcome(), Outcome::InProgress);
        assert_eq!(next.deck().len(), 1);
        // Input untouched
        assert_eq!(session.deck().len(), 2);
    }

    #[test]
    fn test_first_draw_never_wins() {
        let rules = SnapRules::default();
        let session = session_with(
            &[
                card(Suit::Clubs, Rank::Two),
                card(Suit::Hearts, Rank::Two),
                card(Suit::Spades, Rank::Five),
            ],
            PlayerId::A,
        );

        let (next, _) = rules.draw(&session, PlayerId::A).unwrap();
        assert_eq!(next.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_rank_match_wins() {
        let rules = SnapRules::default();
        let session = session_with(
            &[
                card(Suit::Spades, Rank::Nine),
                card(Suit::Hearts, Rank::King),
                card(Suit::Clubs, Rank::King),
            ],
            PlayerId::B,
        );

        let (s1, _) = rules.draw(&session, PlayerId::B).unwrap();
        let (s2, drawn) = rules.draw(&s1, PlayerId::A).unwrap();

        assert_eq!(drawn.card, card(Suit::Hearts, Rank::King));
        assert_eq!(s2.outcome(), Outcome::Won(PlayerId::A));
        assert_eq!(s2.current_player(), PlayerId::A);
        assert_eq!(
            rules.draw(&s2, PlayerId::A).unwrap_err(),
            GameError::GameOver { outcome: Outcome::Won(PlayerId::A) }
        );
        assert_eq!(
            rules.draw(&s2, PlayerId::B).unwrap_err(),
            GameError::GameOver { outcome: Outcome::Won(PlayerId::A) }
        );
    }

    #[test]
    fn test_win_on_last_card_is_not_a_draw() {
        let rules = SnapRules::default();
        let session = session_with(
            &[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ace)],
            PlayerId::A,
        );

        let (s1, _) = rules.draw(&session, PlayerId::A).unwrap();
        let (s2, _) = rules.draw(&s1, PlayerId::B).unwrap();

        assert!(s2.deck().is_empty());
        assert_eq!(s2.outcome(), Outcome::Won(PlayerId::B));
    }

    #[test]
    fn test_exhausting_deck_is_draw() {
        let rules = SnapRules::default();
        let cards: Vec<Card> = Deck::standard().iter().copied().collect();
        let mut session = session_with(&cards, PlayerId::A);

        for i in 0..DECK_SIZE {
            let player = if i % 2 == 0 { PlayerId::A } else { PlayerId::B };
            let (next, _) = rules.draw(&session, player).unwrap();
            session = next;
        }

        assert!(session.deck().is_empty());
        assert_eq!(session.drawn_cards().len(), DECK_SIZE);
        assert_eq!(session.outcome(), Outcome::Draw);
        assert_eq!(rules.result(&session), crate::rules::GameResult::Draw);
    }

    #[test]
    fn test_not_your_turn() {
        let rules = SnapRules::default();
        let session = session_with(&[card(Suit::Clubs, Rank::Two)], PlayerId::A);

        let err = rules.draw(&session, PlayerId::B).unwrap_err();
        assert_eq!(
            err,
            GameError::NotYourTurn { player: PlayerId::B, current: PlayerId::A }
        );
    }

    #[test]
    fn test_deck_exhausted_on_crafted_session() {
        let rules = SnapRules::default();
        let session = session_with(&[], PlayerId::A);

        assert_eq!(
            rules.draw(&session, PlayerId::A).unwrap_err(),
            GameError::DeckExhausted
        );
    }

    #[test]
    fn test_game_over_checked_before_turn() {
        let rules = SnapRules::default();
        let session = session_with(&[card(Suit::Clubs, Rank::Two)], PlayerId::A);
        let (done, _) = rules.draw(&session, PlayerId::A).unwrap();

        assert_eq!(done.outcome(), Outcome::Draw);
        // B is the current player, but the game is over
        assert!(matches!(
            rules.draw(&done, PlayerId::B),
            Err(GameError::GameOver { outcome: Outcome::Draw })
        ));
    }

    #[test]
    fn test_reset_default_starts_with_a() {
        let rules = SnapRules::default();
        let mut rng = GameRng::new(3);
        let session = rules
            .create_session("Alice", "Bob", PlayerId::B, &mut rng)
            .unwrap();
        let (played, _) = rules.draw(&session, PlayerId::B).unwrap();

        let reset = rules.reset(&played, &mut rng).unwrap();

        assert_eq!(reset.id(), session.id());
        assert_eq!(reset.current_player(), PlayerId::A);
        assert_eq!(reset.deck().len(), DECK_SIZE);
        assert!(reset.drawn_cards().is_empty());
        assert!(reset.player_b().drawn_cards.is_empty());
        assert_eq!(reset.player_a().name, "Alice");
        assert_eq!(reset.player_b().name, "Bob");
    }

    #[test]
    fn test_reset_original_starter() {
        let rules = SnapRules::new(ResetStarter::Original);
        let mut rng = GameRng::new(3);
        let session = rules
            .create_session("Alice", "Bob", PlayerId::B, &mut rng)
            .unwrap();

        let reset = rules.reset(&session, &mut rng).unwrap();
        assert_eq!(reset.current_player(), PlayerId::B);
    }

    #[test]
    fn test_reset_terminal_session() {
        let rules = SnapRules::default();
        let mut rng = GameRng::new(5);
        let session = session_with(
            &[card(Suit::Hearts, Rank::Four), card(Suit::Spades, Rank::Four)],
            PlayerId::A,
        );
        let (s1, _) = rules.draw(&session, PlayerId::A).unwrap();
        let (won, _) = rules.draw(&s1, PlayerId::B).unwrap();
        assert!(rules.is_terminal(&won));

        let reset = rules.reset(&won, &mut rng).unwrap();
        assert!(!rules.is_terminal(&reset));
        assert_eq!(rules.result(&reset).to_string(), "The game is currently in session.");
    }

    #[test]
    fn test_result_names_winner() {
        let rules = SnapRules::default();
        let session = session_with(
            &[card(Suit::Hearts, Rank::Jack), card(Suit::Spades, Rank::Jack)],
            PlayerId::B,
        );
        let (s1, _) = rules.draw(&session, PlayerId::B).unwrap();
        let (s2, _) = rules.draw(&s1, PlayerId::A).unwrap();

        assert_eq!(rules.result(&s2).to_string(), "Winner: Alice");
    }
}
