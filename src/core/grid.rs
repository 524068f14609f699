//! Grid Primitives
//!
//! Integer tile coordinates and the closed direction set shared by the map,
//! the entities, and the command layer.

use serde::{Serialize, Deserialize};

/// A position on the tile grid.
///
/// Coordinates are signed so a step off the top or left edge produces an
/// ordinary out-of-bounds position the map can reject, instead of wrapping.
/// `y` grows downward, matching the row order of the map resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridPos {
    /// Create a position from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one tile away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        GridPos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement directions.
///
/// This is a closed set: hosts speak string tokens at the session boundary,
/// and anything that does not decode to one of these variants is rejected
/// there, never here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up (`y - 1`)
    Up,
    /// One row down (`y + 1`)
    Down,
    /// One column left (`x - 1`)
    Left,
    /// One column right (`x + 1`)
    Right,
}

impl Direction {
    /// All directions, in no particular order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit tile delta as `(dx, dy)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
