//! Player Roster Entries
//!
//! One entry per spawn tile, created at session start and kept until
//! session teardown. Identified by roster index.

use serde::{Serialize, Deserialize};

use crate::core::grid::GridPos;

/// State of a single player in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Roster index, assigned in spawn-tile reading order
    pub id: usize,

    /// Current tile
    pub position: GridPos,

    /// Cleared when the player is caught in an explosion
    pub alive: bool,
}

impl Player {
    /// Create a player at its starting position.
    pub fn new(id: usize, position: GridPos) -> Self {
        Self {
            id,
            position,
            alive: true,
        }
    }

    /// Mark the player dead. Idempotent.
    pub fn die(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_alive() {
        let player = Player::new(2, GridPos::new(1, 1));
        assert_eq!(player.id, 2);
        assert!(player.alive);
    }

    #[test]
    fn test_die_is_idempotent() {
        let mut player = Player::new(0, GridPos::new(1, 1));
        player.die();
        player.die();
        assert!(!player.alive);
    }
}
