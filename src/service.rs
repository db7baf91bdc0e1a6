//! String-addressed command/query interface for an API layer.
//!
//! `GameService` is the narrow surface a transport (GraphQL, HTTP, sockets)
//! calls into. It parses wire identifiers, delegates to the `SessionStore`
//! and returns serializable views. It does no I/O of its own.
//!
//! ```
//! use snap_engine::{EngineConfig, GameService, PlayerId};
//!
//! let service = GameService::new(EngineConfig::default().with_seed(7));
//! let session = service.create_session("Alice", "Bob", "A").unwrap();
//! let id = session.id.to_string();
//!
//! service.draw_card(&id, "A").unwrap();
//! assert_eq!(service.get_current_turn(&id).unwrap(), PlayerId::B);
//! ```

use crate::core::{EngineConfig, PlayerId};
use crate::error::Result;
use crate::games::snap::SnapRules;
use crate::rules::RulesEngine;
use crate::session::{DrawnCard, SessionId, SessionStore, SessionView};

/// String-addressed front end over a `SessionStore`.
pub struct GameService<R: RulesEngine = SnapRules> {
    store: SessionStore<R>,
}

impl GameService<SnapRules> {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::from_store(SessionStore::new(config))
    }
}

impl Default for GameService<SnapRules> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RulesEngine> GameService<R> {
    pub fn from_store(store: SessionStore<R>) -> Self {
        Self { store }
    }

    /// The underlying store, for typed access.
    #[must_use]
    pub fn store(&self) -> &SessionStore<R> {
        &self.store
    }

    /// `CreateSession`. `starting_player` must be `"A"` or `"B"`.
    pub fn create_session(
        &self,
        player_a_name: &str,
        player_b_name: &str,
        starting_player: &str,
    ) -> Result<SessionView> {
        let starting_player: PlayerId = starting_player.parse()?;
        let session = self.store.create(player_a_name, player_b_name, starting_player)?;
        Ok(SessionView::from(&session))
    }

    /// `GetSession`.
    pub fn get_session(&self, session_id: &str) -> Result<SessionView> {
        let session = self.store.get(session_id.parse::<SessionId>()?)?;
        Ok(SessionView::from(&session))
    }

    /// `GetCurrentTurn`.
    pub fn get_current_turn(&self, session_id: &str) -> Result<PlayerId> {
        self.store.current_turn(session_id.parse::<SessionId>()?)
    }

    /// `GetResult`: `"Draw"`, `"Winner: <name>"` or
    /// `"The game is currently in session."`.
    pub fn get_result(&self, session_id: &str) -> Result<String> {
        let result = self.store.result(session_id.parse::<SessionId>()?)?;
        Ok(result.to_string())
    }

    /// `DrawCard`. `player_id` must be `"A"` or `"B"`.
    pub fn draw_card(&self, session_id: &str, player_id: &str) -> Result<DrawnCard> {
        let id: SessionId = session_id.parse()?;
        let player: PlayerId = player_id.parse()?;
        self.store.draw(id, player)
    }

    /// `ResetSession`.
    pub fn reset_session(&self, session_id: &str) -> Result<SessionView> {
        let session = self.store.reset(session_id.parse::<SessionId>()?)?;
        Ok(SessionView::from(&session))
    }
}
