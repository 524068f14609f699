//! Core grid primitives.
//!
//! Shared by the game logic and the UI seam; nothing here depends on the
//! session lifecycle.

pub mod grid;

// Re-export core types
pub use grid::{Direction, GridPos};
