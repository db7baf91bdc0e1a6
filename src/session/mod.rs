//! Game sessions and their store.
//!
//! ## Key Types
//!
//! - `Session`: Per-game aggregate (players, deck, turn, history, outcome)
//! - `SessionStore`: Concurrency-safe keyed collection owning session lifecycle
//! - `SessionView`: Serializable snapshot in the shape API consumers expect

pub mod state;
pub mod store;
pub mod view;

pub use state::{DrawnCard, Outcome, Player, Session, SessionBuilder, SessionId};
pub use store::SessionStore;
pub use view::{PlayerView, SessionView};
