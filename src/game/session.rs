//! Session Coordinator
//!
//! Wires the map, the player roster, and transient bombs together and
//! drives the `Uninitialized -> Playing -> Ended` lifecycle. All operations
//! run to completion on the caller's thread, in arrival order; there is no
//! interior mutability and nothing blocks.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::grid::{Direction, GridPos};
use crate::game::bomb::Bomb;
use crate::game::events::GameEvent;
use crate::game::map::{Map, MapError};
use crate::game::player::Player;
use crate::game::state::{GameState, SessionPhase};
use crate::ui::{UiError, UiHost, VisualHandle};

/// Session tuning knobs.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Required map width; any other width is an invalid resource
    pub expected_width: usize,
    /// Required map height; any other height is an invalid resource
    pub expected_height: usize,
    /// Ticks between planting a bomb and its detonation
    pub bomb_fuse_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expected_width: 13,
            expected_height: 11,
            bomb_fuse_ticks: 3,
        }
    }
}

/// A host command, decoded from the UI's string token.
///
/// Dispatch on this enum is exhaustive; the string form exists only at the
/// parsing boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the acting player one tile
    Move(Direction),
    /// Plant a bomb on the acting player's tile
    DropBomb,
}

impl Command {
    /// Decode a UI token.
    ///
    /// Unknown tokens yield `None`; the session treats them as a no-op.
    pub fn parse(token: &str) -> Option<Command> {
        match token {
            "up" => Some(Command::Move(Direction::Up)),
            "down" => Some(Command::Move(Direction::Down)),
            "left" => Some(Command::Move(Direction::Left)),
            "right" => Some(Command::Move(Direction::Right)),
            "dropBomb" => Some(Command::DropBomb),
            _ => None,
        }
    }
}

/// The two non-fatal failure kinds a session action can report.
///
/// Either way the triggering action is abandoned and prior state is
/// preserved; nothing propagates further.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The offered map resource was rejected; the current map stays active.
    #[error("invalid map resource: {0}")]
    InvalidMapResource(#[from] MapError),

    /// The host could not supply a required visual; no state was mutated.
    #[error("UI resource unavailable: {0}")]
    UiResourceUnavailable(#[from] UiError),
}

/// The game-session coordinator.
///
/// Owns all game state and the host seam. Constructed around a validated
/// map, started exactly once, and discarded after `Ended` — there are no
/// transitions out of the terminal phase.
pub struct GameSession<H: UiHost> {
    config: SessionConfig,
    state: GameState,
    ui: H,
}

impl<H: UiHost> GameSession<H> {
    /// Create a session around an already-validated map.
    pub fn new(map: Map, config: SessionConfig, ui: H) -> Self {
        let mut state = GameState::new(Arc::new(map));
        state.push_event(map_loaded(&state.map));
        Self { config, state, ui }
    }

    /// Parse a map from text and create a session around it.
    pub fn from_source(source: &str, config: SessionConfig, ui: H) -> Result<Self, SessionError> {
        let map = Map::parse(source, config.expected_width, config.expected_height)?;
        Ok(Self::new(map, config, ui))
    }

    /// Load a map resource from disk and create a session around it.
    pub fn from_map_file(path: &Path, config: SessionConfig, ui: H) -> Result<Self, SessionError> {
        let map = Map::load(path, config.expected_width, config.expected_height)?;
        Ok(Self::new(map, config, ui))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Seat one player per spawn tile and begin accepting events.
    ///
    /// Valid exactly once, from `Uninitialized`; any later call warns and
    /// no-ops.
    pub fn start(&mut self) {
        if self.state.phase != SessionPhase::Uninitialized {
            warn!(phase = ?self.state.phase, "start ignored: session already started");
            return;
        }

        let spawns = self.state.map.starting_positions().to_vec();
        for (id, position) in spawns.iter().enumerate() {
            self.state.players.push(Player::new(id, *position));
        }
        self.state.phase = SessionPhase::Playing;
        info!(players = spawns.len(), "session started");
    }

    /// End the game: terminal, fires at most once.
    fn finish(&mut self) {
        // Entering Ended detaches the session: commands, ticks, and
        // explosions are all ignored from here on.
        self.state.phase = SessionPhase::Ended;

        let survivor = self.state.survivor();
        self.state.push_event(GameEvent::GameOver { survivor });
        self.ui.reveal_end_screen();
        info!(?survivor, "game over");
    }

    // =========================================================================
    // Map publication
    // =========================================================================

    /// Replace the current map with a resource read from disk.
    ///
    /// A rejected resource is discarded; the current map stays active.
    pub fn load_map(&mut self, path: &Path) -> Result<(), SessionError> {
        match Map::load(path, self.config.expected_width, self.config.expected_height) {
            Ok(map) => {
                self.publish_map(map);
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "map reload rejected, keeping current map");
                Err(SessionError::InvalidMapResource(err))
            }
        }
    }

    /// Replace the current map with a resource parsed from text.
    pub fn load_map_source(&mut self, source: &str) -> Result<(), SessionError> {
        match Map::parse(source, self.config.expected_width, self.config.expected_height) {
            Ok(map) => {
                self.publish_map(map);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "map reload rejected, keeping current map");
                Err(SessionError::InvalidMapResource(err))
            }
        }
    }

    fn publish_map(&mut self, map: Map) {
        // Swapping the Arc defers teardown of the old map until the last
        // outstanding snapshot reference drops.
        let map = Arc::new(map);
        self.state.push_event(map_loaded(&map));
        self.state.map = map;
        info!(
            width = self.state.map.width(),
            height = self.state.map.height(),
            "map published"
        );
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Entry point for raw host tokens. Unknown tokens are a silent no-op.
    pub fn handle_command(&mut self, player_id: usize, token: &str) {
        let Some(command) = Command::parse(token) else {
            debug!(player_id, token, "ignoring unknown command token");
            return;
        };

        match command {
            Command::Move(direction) => self.move_player(player_id, direction),
            Command::DropBomb => {
                // Host failure was already logged; the token path has no
                // caller to report it to.
                let _ = self.drop_bomb(player_id);
            }
        }
    }

    /// Move a player one tile, committing only if the destination is
    /// walkable on the current map.
    pub fn move_player(&mut self, player_id: usize, direction: Direction) {
        if self.state.phase != SessionPhase::Playing {
            debug!(player_id, "move ignored outside Playing");
            return;
        }
        let Some(player) = self.state.player(player_id) else {
            warn!(player_id, "move for unknown player id");
            return;
        };
        if !player.alive {
            debug!(player_id, "move ignored for dead player");
            return;
        }

        let from = player.position;
        let to = from.step(direction);
        if !self.state.map.is_walkable(to) {
            debug!(player_id, ?to, "move rejected: destination not walkable");
            return;
        }

        if let Some(player) = self.state.player_mut(player_id) {
            player.position = to;
        }
        self.state.push_event(GameEvent::PlayerMoved {
            player_id,
            direction,
            from,
            to,
        });
    }

    /// Plant a bomb on the player's tile.
    ///
    /// The sprite must come from the host first; if the host cannot supply
    /// one, the drop is abandoned with no state change.
    pub fn drop_bomb(&mut self, player_id: usize) -> Result<(), SessionError> {
        if self.state.phase != SessionPhase::Playing {
            debug!(player_id, "bomb drop ignored outside Playing");
            return Ok(());
        }
        let Some(player) = self.state.player(player_id) else {
            warn!(player_id, "bomb drop for unknown player id");
            return Ok(());
        };
        if !player.alive {
            debug!(player_id, "bomb drop ignored for dead player");
            return Ok(());
        }
        let position = player.position;

        let sprite = match self.ui.create_bomb_sprite(position) {
            Ok(sprite) => sprite,
            Err(err) => {
                warn!(player_id, %err, "bomb drop abandoned: sprite not instantiable");
                return Err(SessionError::UiResourceUnavailable(err));
            }
        };

        self.state
            .bombs
            .push(Bomb::new(position, self.config.bomb_fuse_ticks, sprite));
        self.state.push_event(GameEvent::BombPlanted { player_id, position });
        debug!(player_id, ?position, "bomb planted");
        Ok(())
    }

    // =========================================================================
    // Time and detonation
    // =========================================================================

    /// Burn one tick of every fuse and run the resulting detonations.
    pub fn tick(&mut self) {
        if self.state.phase != SessionPhase::Playing {
            return;
        }

        let mut detonated: Vec<(GridPos, VisualHandle)> = Vec::new();
        self.state.bombs.retain_mut(|bomb| {
            if bomb.burn() {
                detonated.push((bomb.position, bomb.sprite));
                false
            } else {
                true
            }
        });

        for (position, sprite) in detonated {
            self.ui.release_sprite(sprite);
            self.state.push_event(GameEvent::Detonation { position });
            self.on_explosion(position);
        }
    }

    /// Apply an explosion at a tile.
    ///
    /// Public so a host driving its own detonation timers can feed
    /// explosions in directly. Ignored outside `Playing`, which makes the
    /// post-game detachment idempotent.
    pub fn on_explosion(&mut self, position: GridPos) {
        if self.state.phase != SessionPhase::Playing {
            debug!(?position, "explosion ignored outside Playing");
            return;
        }

        let mut died = Vec::new();
        for player in self.state.players.iter_mut() {
            if player.alive && player.position == position {
                player.die();
                died.push(player.id);
            }
        }
        if died.is_empty() {
            return;
        }
        for player_id in &died {
            info!(player_id, ?position, "player killed");
            self.state.push_event(GameEvent::PlayerDied {
                player_id: *player_id,
                position,
            });
        }

        // Terminal condition: all but one dead.
        if self.state.dead_count() == self.state.players.len() - 1 {
            self.finish();
        }
    }

    // =========================================================================
    // Published state
    // =========================================================================

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Snapshot reference to the current map.
    ///
    /// Holding the returned `Arc` keeps that map alive across reloads.
    pub fn map(&self) -> Arc<Map> {
        Arc::clone(&self.state.map)
    }

    /// The player roster, indexed by id.
    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    /// Live bombs, in planting order.
    pub fn bombs(&self) -> &[Bomb] {
        &self.state.bombs
    }

    /// Take all events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.take_events()
    }

    /// The host seam, for hosts that need their side back.
    pub fn ui(&self) -> &H {
        &self.ui
    }
}

fn map_loaded(map: &Map) -> GameEvent {
    GameEvent::MapLoaded {
        width: map.width(),
        height: map.height(),
        player_slots: map.starting_positions().len(),
    }
}
