//! Bomb Entities
//!
//! Transient: created on a drop command, removed on detonation. The sprite
//! itself lives in the host UI tree; the bomb keeps only the opaque handle
//! and returns it to the host when the fuse runs out.

use serde::{Serialize, Deserialize};

use crate::core::grid::GridPos;
use crate::ui::VisualHandle;

/// A planted bomb waiting on its fuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    /// Tile the bomb occupies; also the tile its explosion affects
    pub position: GridPos,

    /// Remaining ticks until detonation
    pub fuse_ticks: u32,

    /// Handle of the sprite the host instantiated for this bomb
    pub sprite: VisualHandle,
}

impl Bomb {
    /// Plant a bomb with a full fuse.
    pub fn new(position: GridPos, fuse_ticks: u32, sprite: VisualHandle) -> Self {
        Self {
            position,
            fuse_ticks,
            sprite,
        }
    }

    /// Burn one tick of fuse. Returns `true` when the bomb should detonate.
    pub fn burn(&mut self) -> bool {
        self.fuse_ticks = self.fuse_ticks.saturating_sub(1);
        self.fuse_ticks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_countdown() {
        let mut bomb = Bomb::new(GridPos::new(2, 2), 3, VisualHandle(7));

        assert!(!bomb.burn());
        assert!(!bomb.burn());
        assert!(bomb.burn());
    }

    #[test]
    fn test_burn_does_not_underflow() {
        let mut bomb = Bomb::new(GridPos::new(2, 2), 1, VisualHandle(1));
        assert!(bomb.burn());
        assert!(bomb.burn());
        assert_eq!(bomb.fuse_ticks, 0);
    }
}
