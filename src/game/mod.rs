//! Game Logic Module
//!
//! Everything the session coordinator owns and mutates.
//!
//! ## Module Structure
//!
//! - `map`: tile map parsing, validity, walkability
//! - `player`: roster entries (index id, position, alive flag)
//! - `bomb`: transient bomb entities with fuse timers
//! - `events`: observer queue the host UI drains
//! - `state`: session phase and owned state
//! - `session`: the coordinator driving all of it

pub mod bomb;
pub mod events;
pub mod map;
pub mod player;
pub mod session;
pub mod state;

// Re-export key types
pub use bomb::Bomb;
pub use events::GameEvent;
pub use map::{Map, MapError, Tile};
pub use player::Player;
pub use session::{Command, GameSession, SessionConfig, SessionError};
pub use state::{GameState, SessionPhase};
