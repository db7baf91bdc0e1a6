//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How a session is dealt and restarted
//! - Whether a draw is legal and how it modifies the session
//! - Win/draw conditions
//!
//! The session store calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
