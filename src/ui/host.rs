//! Host UI Seam
//!
//! The session never touches a scene graph directly. Everything it needs
//! *from* the host comes through the `UiHost` trait; everything the host
//! needs from the session comes through the drained event queue and the
//! published map/roster snapshots.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::grid::GridPos;

/// Opaque id of a sprite owned by the host UI tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Failures the host can report.
///
/// All of them abort the triggering action and leave session state
/// untouched.
#[derive(Debug, Error)]
pub enum UiError {
    /// The visual host (playing-field container) is not available.
    #[error("visual host unavailable")]
    HostUnavailable,

    /// The host could not instantiate the requested sprite.
    #[error("unable to instantiate sprite: {0}")]
    SpriteUnavailable(String),
}

/// Resources the session requests from the host UI.
pub trait UiHost {
    /// Instantiate a bomb sprite at a tile.
    ///
    /// The host keeps ownership of the sprite; the session keeps only the
    /// returned handle and gives it back through
    /// [`UiHost::release_sprite`] on detonation.
    fn create_bomb_sprite(&mut self, position: GridPos) -> Result<VisualHandle, UiError>;

    /// Release a sprite after its bomb detonated.
    fn release_sprite(&mut self, handle: VisualHandle);

    /// Reveal the end screen. Called at most once per session.
    fn reveal_end_screen(&mut self);
}

/// Host with no scene graph: hands out fresh handles and logs.
///
/// Used by the demo binary and by tests that exercise the success path.
#[derive(Debug, Default)]
pub struct HeadlessUi {
    next_handle: u64,
    live_sprites: Vec<VisualHandle>,
    end_screen_revealed: bool,
}

impl HeadlessUi {
    /// Create an empty headless host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sprites handed out and not yet released.
    pub fn live_sprite_count(&self) -> usize {
        self.live_sprites.len()
    }

    /// Whether the end screen has been revealed.
    pub fn end_screen_revealed(&self) -> bool {
        self.end_screen_revealed
    }
}

impl UiHost for HeadlessUi {
    fn create_bomb_sprite(&mut self, position: GridPos) -> Result<VisualHandle, UiError> {
        let handle = VisualHandle(self.next_handle);
        self.next_handle += 1;
        self.live_sprites.push(handle);
        debug!(?position, ?handle, "bomb sprite instantiated");
        Ok(handle)
    }

    fn release_sprite(&mut self, handle: VisualHandle) {
        self.live_sprites.retain(|h| *h != handle);
        debug!(?handle, "sprite released");
    }

    fn reveal_end_screen(&mut self) {
        self.end_screen_revealed = true;
        info!("end screen revealed");
    }
}
