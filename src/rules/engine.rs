//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a session is dealt
//! - Whether a draw is legal and what it does to the session
//! - How a session restarts
//! - Win/draw conditions

use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::session::{DrawnCard, Outcome, Session};

/// Result of a game, as reported to players.
///
/// The `Display` form is the human-readable status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The game has not finished yet.
    InSession,
    /// Draw (no winner).
    Draw,
    /// Single winner.
    Winner { player: PlayerId, name: String },
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameResult::InSession)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InSession => f.write_str("The game is currently in session."),
            GameResult::Draw => f.write_str("Draw"),
            GameResult::Winner { name, .. } => write!(f, "Winner: {name}"),
        }
    }
}

/// Rules engine trait.
///
/// Implementations are pure: every method operates only on the values passed
/// in and returns a new session rather than mutating shared state. The
/// session store provides locking and storage around these calls.
///
/// ## Implementation Notes
///
/// - `draw`: on error the input session must be left as it was
/// - `reset`: must be legal in every outcome state
/// - Randomness comes only from the supplied `GameRng`
pub trait RulesEngine: Send + Sync {
    /// Deal a fresh session.
    fn create_session(
        &self,
        player_a_name: &str,
        player_b_name: &str,
        starting_player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Session>;

    /// Apply a draw by `player`, returning the next session and the card drawn.
    fn draw(&self, session: &Session, player: PlayerId) -> Result<(Session, DrawnCard)>;

    /// Restart the session with a new deck, keeping its id and players.
    fn reset(&self, session: &Session, rng: &mut GameRng) -> Result<Session>;

    // === Convenience Methods ===

    /// Project the session's outcome into a player-facing result.
    fn result(&self, session: &Session) -> GameResult {
        match session.outcome() {
            Outcome::InProgress => GameResult::InSession,
            Outcome::Draw => GameResult::Draw,
            Outcome::Won(player) => GameResult::Winner {
                player,
                name: session.player(player).name.clone(),
            },
        }
    }

    /// Check if the game is over.
    fn is_terminal(&self, session: &Session) -> bool {
        session.outcome().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner {
            player: PlayerId::B,
            name: "Bob".into(),
        };
        assert!(!result.is_winner(PlayerId::A));
        assert!(result.is_winner(PlayerId::B));

        assert!(!GameResult::Draw.is_winner(PlayerId::A));
        assert!(!GameResult::InSession.is_winner(PlayerId::A));
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Draw.to_string(), "Draw");
        assert_eq!(
            GameResult::InSession.to_string(),
            "The game is currently in session."
        );
        let won = GameResult::Winner {
            player: PlayerId::A,
            name: "Alice".into(),
        };
        assert_eq!(won.to_string(), "Winner: Alice");
    }

    #[test]
    fn test_game_result_is_finished() {
        assert!(!GameResult::InSession.is_finished());
        assert!(GameResult::Draw.is_finished());
    }
}
