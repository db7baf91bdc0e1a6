//! Core engine types: players, RNG, configuration.
//!
//! Shared primitives used by the deck, the rules engine and the session store.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{EngineConfig, ResetStarter};
