//! Game session: the per-game aggregate.
//!
//! A `Session` owns both players, the remaining deck, whose turn it is, the
//! global history of drawn cards and the outcome. Sessions are values: the
//! rules engine takes one and returns the next, and the store swaps the new
//! value in. All collections are `im` persistent structures, so cloning a
//! session is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::{Card, Deck};
use crate::core::{PlayerId, PlayerPair};
use crate::error::GameError;

/// Opaque session identifier, unique for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for SessionId {
    type Err = GameError;

    /// A malformed id can never name a stored session, so it reports `NotFound`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| GameError::not_found(s))
    }
}

/// Terminal state tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Deck ran out without a rank match.
    Draw,
    /// The player drew a card matching the previous card's rank.
    Won(PlayerId),
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Draw => f.write_str("draw"),
            Outcome::Won(player) => write!(f, "won by {player}"),
        }
    }
}

/// A card together with the player who drew it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawnCard {
    pub player: PlayerId,
    pub card: Card,
}

impl DrawnCard {
    #[must_use]
    pub const fn new(player: PlayerId, card: Card) -> Self {
        Self { player, card }
    }
}

/// One of the two participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Cards this player drew, oldest first.
    pub drawn_cards: Vector<Card>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            drawn_cards: Vector::new(),
        }
    }
}

/// Full state of one game.
///
/// Serializable for inspection only; a session is built through the rules
/// engine or `SessionBuilder`, never decoded from outside input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    players: PlayerPair<Player>,
    current_player: PlayerId,
    starting_player: PlayerId,
    deck: Deck,
    drawn_cards: Vector<DrawnCard>,
    outcome: Outcome,
}

impl Session {
    /// Start building a session with explicit parts.
    pub fn builder(
        player_a_name: impl Into<String>,
        player_b_name: impl Into<String>,
    ) -> SessionBuilder {
        SessionBuilder::new(player_a_name, player_b_name)
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn player_a(&self) -> &Player {
        &self.players[PlayerId::A]
    }

    #[must_use]
    pub fn player_b(&self) -> &Player {
        &self.players[PlayerId::B]
    }

    /// Whose turn it is. After a win this stays on the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The player who took the first turn when the session was created.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Every drawn card across both players, oldest first.
    #[must_use]
    pub fn drawn_cards(&self) -> &Vector<DrawnCard> {
        &self.drawn_cards
    }

    /// The most recent draw, if any.
    #[must_use]
    pub fn last_drawn(&self) -> Option<&DrawnCard> {
        self.drawn_cards.back()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Cards still in the deck plus cards already drawn.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.drawn_cards.len()
    }

    // === Transitions (rules engine only) ===

    /// Pop the top card and record it for `player`.
    pub(crate) fn take_top_card(&mut self, player: PlayerId) -> Option<DrawnCard> {
        let card = self.deck.draw()?;
        let drawn = DrawnCard::new(player, card);
        self.drawn_cards.push_back(drawn);
        self.players[player].drawn_cards.push_back(card);
        Some(drawn)
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Replace the deck and wipe all draw history.
    pub(crate) fn restart(&mut self, deck: Deck, starter: PlayerId) {
        self.deck = deck;
        self.drawn_cards.clear();
        for (_, player) in self.players.iter_mut() {
            player.drawn_cards.clear();
        }
        self.outcome = Outcome::InProgress;
        self.current_player = starter;
    }
}

/// Builder for a `Session` with explicit parts.
///
/// The rules engine uses this with a freshly shuffled deck. Tests and
/// scenario setup can supply a crafted deck instead; such sessions need not
/// hold a full 52 cards.
pub struct SessionBuilder {
    id: Option<SessionId>,
    player_a_name: String,
    player_b_name: String,
    starting_player: PlayerId,
    deck: Deck,
}

impl SessionBuilder {
    pub fn new(player_a_name: impl Into<String>, player_b_name: impl Into<String>) -> Self {
        Self {
            id: None,
            player_a_name: player_a_name.into(),
            player_b_name: player_b_name.into(),
            starting_player: PlayerId::A,
            deck: Deck::standard(),
        }
    }

    /// Use a specific id instead of generating one.
    pub fn id(mut self, id: SessionId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Use `deck` as the draw pile (top card drawn first).
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn build(self) -> Session {
        let (a_name, b_name) = (self.player_a_name, self.player_b_name);
        Session {
            id: self.id.unwrap_or_else(SessionId::generate),
            players: PlayerPair::new(|id| match id {
                PlayerId::A => Player::new(id, a_name.clone()),
                PlayerId::B => Player::new(id, b_name.clone()),
            }),
            current_player: self.starting_player,
            starting_player: self.starting_player,
            deck: self.deck,
            drawn_cards: Vector::new(),
            outcome: Outcome::InProgress,
        }
    }
}
