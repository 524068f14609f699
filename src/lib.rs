//! # Bomber Arena Session Core
//!
//! Single-threaded session coordinator for a grid-based Bomberman-style
//! game. It owns the tile map, the player roster, and transient bombs, and
//! bridges that state to a host UI layer without ever touching the host's
//! scene graph directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BOMBER ARENA                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Grid primitives                          │
//! │  └── grid.rs     - Tile coordinates, closed direction set   │
//! │                                                             │
//! │  game/           - Session logic                            │
//! │  ├── map.rs      - Map resource parsing and walkability     │
//! │  ├── player.rs   - Roster entries                           │
//! │  ├── bomb.rs     - Fuse-timed transient entities            │
//! │  ├── events.rs   - Observer queue the host drains           │
//! │  ├── state.rs    - Phase machine and owned state            │
//! │  └── session.rs  - The coordinator                          │
//! │                                                             │
//! │  ui/             - Host seam (non-owning)                   │
//! │  └── host.rs     - UiHost trait, handles, headless host     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Guarantee
//!
//! Every operation runs to completion on the caller's thread, in arrival
//! order. There is no scheduler, no async, and no interior mutability:
//! concurrent mutation of player or map state is impossible by
//! construction. The only shared structure is the published `Arc<Map>`,
//! which exists so a replaced map is torn down exactly when the last host
//! snapshot of it drops.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod ui;

// Re-export commonly used types
pub use crate::core::grid::{Direction, GridPos};
pub use game::events::GameEvent;
pub use game::map::{Map, MapError, Tile, DEFAULT_MAP};
pub use game::session::{Command, GameSession, SessionConfig, SessionError};
pub use game::state::SessionPhase;
pub use ui::{HeadlessUi, UiError, UiHost, VisualHandle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
