//! Engine error type.
//!
//! Every failure is reported synchronously to the immediate caller. A failed
//! operation never leaves a session partially modified.

use thiserror::Error;

use crate::core::PlayerId;
use crate::session::Outcome;

/// Errors produced by the rules engine, the session store and the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No session is stored under this id.
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    /// A player tried to draw out of turn.
    #[error("it is not player {player}'s turn (current player is {current})")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    /// The session already reached a terminal outcome.
    #[error("game is over ({outcome})")]
    GameOver { outcome: Outcome },

    /// The deck has no cards left to draw.
    #[error("no more cards in the deck")]
    DeckExhausted,

    /// A malformed argument, such as an unknown player id.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GameError {
    pub(crate) fn not_found(session_id: impl std::fmt::Display) -> Self {
        GameError::NotFound {
            session_id: session_id.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
