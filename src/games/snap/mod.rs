//! Snap: a two-player rank-matching draw game.
//!
//! - Both players share one shuffled 52-card deck
//! - Players alternate drawing the top card
//! - Drawing a card with the same rank as the previous draw (by either
//!   player) wins immediately
//! - If the deck runs out without a match, the game is a draw

mod game;

pub use game::SnapRules;
