//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game is strictly two-player. Seats are the fixed identifiers
//! `A` and `B`, chosen by the caller at session creation.
//!
//! ## PlayerPair
//!
//! Per-player storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::GameError;

/// One of the two fixed seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    /// Both seats, in seat order.
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    /// Get the seat index (0 for `A`, 1 for `B`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// The wire form: `"A"` or `"B"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerId::A => "A",
            PlayerId::B => "B",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(PlayerId::A),
            "B" => Ok(PlayerId::B),
            other => Err(GameError::InvalidArgument(format!(
                "unknown player id {other:?}, expected \"A\" or \"B\""
            ))),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use snap_engine::core::{PlayerId, PlayerPair};
///
/// let mut draws: PlayerPair<u32> = PlayerPair::with_value(0);
/// draws[PlayerId::B] += 1;
///
/// assert_eq!(draws[PlayerId::A], 0);
/// assert_eq!(draws[PlayerId::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
