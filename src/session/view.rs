//! Flattened, serializable snapshot of a session for API consumers.

use serde::{Deserialize, Serialize};

use super::state::{DrawnCard, Outcome, Player, Session, SessionId};
use crate::cards::Card;
use crate::core::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub drawn_cards: Vec<Card>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            drawn_cards: player.drawn_cards.iter().copied().collect(),
        }
    }
}

/// Session as exposed to callers. The outcome is split into the `draw` flag
/// and the optional `winner` id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub player_a: PlayerView,
    pub player_b: PlayerView,
    pub current_player_id: PlayerId,
    /// Remaining cards, bottom to top.
    pub deck: Vec<Card>,
    pub draw: bool,
    pub winner: Option<PlayerId>,
    pub drawn_cards: Vec<DrawnCard>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let outcome = session.outcome();
        Self {
            id: session.id(),
            player_a: session.player_a().into(),
            player_b: session.player_b().into(),
            current_player_id: session.current_player(),
            deck: session.deck().iter().copied().collect(),
            draw: outcome == Outcome::Draw,
            winner: outcome.winner(),
            drawn_cards: session.drawn_cards().iter().copied().collect(),
        }
    }
}
