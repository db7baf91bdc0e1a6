//! Engine configuration.
//!
//! `EngineConfig` is handed to the session store at construction. It controls
//! shuffle reproducibility and the post-reset turn convention.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Who takes the first turn after a session is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetStarter {
    /// Player A always starts a reset game.
    #[default]
    PlayerA,
    /// The player who started the session at creation starts again.
    Original,
}

impl ResetStarter {
    /// Resolve the starting player given the session's creation-time starter.
    #[must_use]
    pub fn resolve(self, original: PlayerId) -> PlayerId {
        match self {
            ResetStarter::PlayerA => PlayerId::A,
            ResetStarter::Original => original,
        }
    }
}

/// Session store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Master RNG seed. `None` seeds from OS entropy.
    /// Same seed produces the same sequence of shuffled decks.
    pub seed: Option<u64>,

    /// Turn convention applied by reset.
    pub reset_starter: ResetStarter,

    /// Number of sessions the store pre-allocates room for.
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reset_starter: ResetStarter::PlayerA,
            initial_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom reset convention.
    #[must_use]
    pub fn with_reset_starter(mut self, starter: ResetStarter) -> Self {
        self.reset_starter = starter;
        self
    }

    /// Create a new config with a custom initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
