//! Session State
//!
//! Owns the map, the player roster, the live bombs, and the pending event
//! queue. Mutation happens only through the coordinator in `session`.

use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::game::bomb::Bomb;
use crate::game::events::GameEvent;
use crate::game::map::Map;
use crate::game::player::Player;

/// Lifecycle of a session.
///
/// `Ended` is terminal; nothing transitions out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Constructed, roster not yet seated
    #[default]
    Uninitialized,
    /// Accepting commands, ticks, and explosions
    Playing,
    /// Game over; all further events are ignored
    Ended,
}

/// Mutable state of one session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current map. Reload swaps the `Arc`; old snapshots drain on drop.
    pub map: Arc<Map>,

    /// Roster, indexed by player id. Filled once at start.
    pub players: Vec<Player>,

    /// Live bombs, in planting order.
    pub bombs: Vec<Bomb>,

    /// Lifecycle phase.
    pub phase: SessionPhase,

    /// Events not yet drained by the host.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state around a validated map.
    pub fn new(map: Arc<Map>) -> Self {
        Self {
            map,
            players: Vec::new(),
            bombs: Vec::new(),
            phase: SessionPhase::Uninitialized,
            events: Vec::new(),
        }
    }

    /// Queue an event for the host.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Player by roster index, bounds-checked.
    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    /// Mutable player by roster index, bounds-checked.
    pub fn player_mut(&mut self, id: usize) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// Number of dead players.
    pub fn dead_count(&self) -> usize {
        self.players.iter().filter(|p| !p.alive).count()
    }

    /// Roster index of the last player standing, if exactly determinable.
    pub fn survivor(&self) -> Option<usize> {
        self.players.iter().find(|p| p.alive).map(|p| p.id)
    }
}
