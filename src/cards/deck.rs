//! The shared draw pile.
//!
//! A `Deck` is an ordered stack: the top card is the end of the sequence and
//! is the next card drawn. Backed by `im::Vector` so sessions holding a deck
//! clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Ordered stack of cards (top = last element).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// The 52-card deck in canonical order: suits outer, ranks inner.
    ///
    /// Deterministic. No two adjacent cards in this order share a rank.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A fresh standard deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        Self::standard().shuffle(rng)
    }

    /// Build a deck from explicit cards, listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Fisher-Yates shuffle driven by `rng`.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index in `[0, i]`.
    #[must_use]
    pub fn shuffle(mut self, rng: &mut GameRng) -> Self {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range_usize(0..i + 1);
            self.cards.swap(i, j);
        }
        self
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// The next card to be drawn, without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
