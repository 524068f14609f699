//! Session Events
//!
//! The explicit observer interface between the game core and the host UI:
//! the session pushes, the host drains via `GameSession::drain_events`.
//! Events are serializable so a host can forward them across a process
//! boundary unchanged.

use serde::{Serialize, Deserialize};

use crate::core::grid::{Direction, GridPos};

/// Everything a host can observe about a running session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new map was published; earlier map snapshots are stale.
    MapLoaded {
        /// Width of the published map
        width: usize,
        /// Height of the published map
        height: usize,
        /// Number of spawn tiles, one player seat each
        player_slots: usize,
    },

    /// A player committed a move.
    PlayerMoved {
        /// Roster index
        player_id: usize,
        /// Direction the move was made in
        direction: Direction,
        /// Tile left behind
        from: GridPos,
        /// Tile now occupied
        to: GridPos,
    },

    /// A bomb was planted and its sprite instantiated.
    BombPlanted {
        /// Player that dropped the bomb
        player_id: usize,
        /// Tile the bomb occupies
        position: GridPos,
    },

    /// A fuse ran out.
    Detonation {
        /// Affected tile
        position: GridPos,
    },

    /// A player was caught in an explosion.
    PlayerDied {
        /// Roster index
        player_id: usize,
        /// Tile the explosion hit
        position: GridPos,
    },

    /// Terminal: raised exactly once per session.
    GameOver {
        /// Last player standing, if any
        survivor: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_survive_json_transport() {
        // Hosts are allowed to ship drained events over a process boundary.
        let event = GameEvent::PlayerMoved {
            player_id: 1,
            direction: Direction::Left,
            from: GridPos::new(2, 1),
            to: GridPos::new(1, 1),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
