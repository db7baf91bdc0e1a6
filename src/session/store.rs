//! Concurrency-safe keyed collection of sessions.
//!
//! ## Locking
//!
//! The session map sits behind a `RwLock`; each entry is an
//! `Arc<Mutex<SessionSlot>>`. Lookups hold the map's read lock only long
//! enough to clone the entry's `Arc`, then take the entry's own mutex. Draws
//! and resets on one session are therefore serialized, while different
//! sessions proceed in parallel.
//!
//! A mutation computes the next session through the rules engine and only
//! then swaps it into the slot, so a rejected move leaves the stored session
//! untouched.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::state::{DrawnCard, Session, SessionId};
use crate::core::{EngineConfig, GameRng, PlayerId};
use crate::error::{GameError, Result};
use crate::games::snap::SnapRules;
use crate::rules::{GameResult, RulesEngine};

/// A stored session and its private RNG stream.
struct SessionSlot {
    session: Session,
    rng: GameRng,
}

type SlotRef = Arc<Mutex<SessionSlot>>;

/// In-memory session store.
///
/// Owned by the caller and shared by reference or `Arc`; there is no global
/// instance. Sessions live until removed explicitly or the store is dropped.
pub struct SessionStore<R: RulesEngine = SnapRules> {
    rules: R,
    /// Master RNG; every session forks its own stream from it.
    rng: Mutex<GameRng>,
    sessions: RwLock<FxHashMap<SessionId, SlotRef>>,
}

impl SessionStore<SnapRules> {
    /// Create a store running the standard rules.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rules = SnapRules::new(config.reset_starter);
        Self::with_rules(rules, config)
    }
}

impl Default for SessionStore<SnapRules> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RulesEngine> SessionStore<R> {
    /// Create a store around a custom rules engine.
    pub fn with_rules(rules: R, config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seed = rng.seed(), "session store initialised");

        let mut sessions = FxHashMap::default();
        sessions.reserve(config.initial_capacity);

        Self {
            rules,
            rng: Mutex::new(rng),
            sessions: RwLock::new(sessions),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Lifecycle ===

    /// Deal a new session and store it.
    pub fn create(
        &self,
        player_a_name: &str,
        player_b_name: &str,
        starting_player: PlayerId,
    ) -> Result<Session> {
        let mut rng = self.rng.lock().fork();
        let session = self
            .rules
            .create_session(player_a_name, player_b_name, starting_player, &mut rng)?;

        debug!(
            session_id = %session.id(),
            player_a = player_a_name,
            player_b = player_b_name,
            starting_player = %starting_player,
            "session created"
        );

        self.store_slot(SessionSlot {
            session: session.clone(),
            rng,
        })?;
        Ok(session)
    }

    /// Adopt an already-built session, such as one with a crafted deck.
    ///
    /// Fails with `InvalidArgument` if the id is already in use; a stored
    /// session is never replaced.
    pub fn insert(&self, session: Session) -> Result<SessionId> {
        let rng = self.rng.lock().fork();
        let id = session.id();
        let deck = session.deck().len();
        self.store_slot(SessionSlot { session, rng })?;
        debug!(session_id = %id, deck, "session inserted");
        Ok(id)
    }

    /// Remove a session, returning its final state.
    pub fn remove(&self, id: SessionId) -> Result<Session> {
        let slot = self
            .sessions
            .write()
            .remove(&id)
            .ok_or_else(|| GameError::not_found(id))?;
        debug!(session_id = %id, "session removed");

        let session = slot.lock().session.clone();
        Ok(session)
    }

    // === Queries ===

    /// Snapshot of a session.
    pub fn get(&self, id: SessionId) -> Result<Session> {
        let slot = self.slot(id)?;
        let session = slot.lock().session.clone();
        Ok(session)
    }

    /// Whose turn it is.
    pub fn current_turn(&self, id: SessionId) -> Result<PlayerId> {
        let slot = self.slot(id)?;
        let current = slot.lock().session.current_player();
        Ok(current)
    }

    /// Player-facing result of a session.
    pub fn result(&self, id: SessionId) -> Result<GameResult> {
        let slot = self.slot(id)?;
        let guard = slot.lock();
        Ok(self.rules.result(&guard.session))
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Ids of all stored sessions, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.read().keys().copied().collect()
    }

    // === Commands ===

    /// Draw the top card for `player`.
    pub fn draw(&self, id: SessionId, player: PlayerId) -> Result<DrawnCard> {
        let slot = self.slot(id)?;
        let mut guard = slot.lock();

        let (next, drawn) = match self.rules.draw(&guard.session, player) {
            Ok(applied) => applied,
            Err(err) => {
                debug!(session_id = %id, player = %player, error = %err, "draw rejected");
                return Err(err);
            }
        };

        debug!(
            session_id = %id,
            player = %player,
            card = %drawn.card,
            remaining = next.deck().len(),
            "card drawn"
        );
        if next.is_terminal() {
            info!(session_id = %id, outcome = %next.outcome(), "game finished");
        }

        guard.session = next;
        Ok(drawn)
    }

    /// Restart a session with a fresh deck.
    pub fn reset(&self, id: SessionId) -> Result<Session> {
        let slot = self.slot(id)?;
        let mut guard = slot.lock();
        let SessionSlot { session, rng } = &mut *guard;

        let next = self.rules.reset(session, rng)?;
        debug!(
            session_id = %id,
            starting_player = %next.current_player(),
            "session reset"
        );

        *session = next.clone();
        Ok(next)
    }

    // === Internals ===

    fn slot(&self, id: SessionId) -> Result<SlotRef> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| GameError::not_found(id))
    }

    fn store_slot(&self, slot: SessionSlot) -> Result<()> {
        let id = slot.session.id();
        match self.sessions.write().entry(id) {
            Entry::Occupied(_) => {
                debug!(session_id = %id, "session id already in use");
                Err(GameError::InvalidArgument(format!(
                    "session id already in use: {id}"
                )))
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(slot)));
                Ok(())
            }
        }
    }
}
