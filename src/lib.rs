//! # snap-engine
//!
//! Session engine for a two-player rank-matching card game.
//!
//! Each player draws one card per turn from a shared shuffled deck. Drawing a
//! card whose rank matches the previously drawn card (either player's) wins.
//! If the deck runs out first, the game is a draw.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `RulesEngine` implementations take a session value and
//!    return the next one. No I/O, no storage, no ambient randomness.
//!
//! 2. **Per-Session Serialization**: `SessionStore` locks each session
//!    independently. Concurrent moves on one game never interleave; separate
//!    games never contend.
//!
//! 3. **Injected Randomness**: Every shuffle consumes a `GameRng`. A seeded
//!    `EngineConfig` makes whole stores reproducible.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration
//! - `cards`: Cards and the deck
//! - `session`: Session aggregate, store and serializable views
//! - `rules`: RulesEngine trait
//! - `games`: Concrete rules (`SnapRules`)
//! - `service`: String-addressed interface for an API layer

pub mod core;
pub mod error;
pub mod cards;
pub mod session;
pub mod rules;
pub mod games;
pub mod service;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, PlayerId, PlayerPair, ResetStarter};

pub use crate::error::{GameError, Result};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::session::{
    DrawnCard, Outcome, Player, PlayerView, Session, SessionBuilder, SessionId, SessionStore,
    SessionView,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::snap::SnapRules;

pub use crate::service::GameService;
