//! Card system: suits, ranks, cards and the shared deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (suit, rank) value
//! - `Deck`: Ordered stack of cards with a seeded Fisher-Yates shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
