//! Tile Map
//!
//! Parses the plain-text map resource and answers walkability queries.
//! The session owns the map behind an `Arc`; a reload swaps the whole
//! instance and the previous one is torn down once the last outstanding UI
//! snapshot reference drops.
//!
//! Resource format: one row per line, `#` wall, `.` floor, `S` a floor tile
//! that seats one player at session start. A resource is valid only when it
//! matches the expected dimensions exactly.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::grid::GridPos;

/// Bundled default arena, 13x11 with four spawn tiles.
pub const DEFAULT_MAP: &str = "\
#############
#S...#...#.S#
#.#.#.#.#.#.#
#...#...#...#
#.#.#.#.#.#.#
#...#...#...#
#.#.#.#.#.#.#
#...#...#...#
#.#.#.#.#.#.#
#S.....#...S#
#############";

/// One cell of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Impassable.
    Wall,
    /// Open floor.
    Floor,
    /// Open floor that seats one player at session start.
    Spawn,
}

impl Tile {
    /// Decode one resource character.
    fn from_char(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            'S' => Some(Tile::Spawn),
            _ => None,
        }
    }

    /// Whether a player may stand on this tile.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Why a map resource was rejected.
#[derive(Debug, Error)]
pub enum MapError {
    /// Parsed grid does not match the expected dimensions.
    #[error("map is {found_width}x{found_height}, expected {expected_width}x{expected_height}")]
    WrongSize {
        /// Width of the rejected resource (first row)
        found_width: usize,
        /// Height of the rejected resource
        found_height: usize,
        /// Required width
        expected_width: usize,
        /// Required height
        expected_height: usize,
    },

    /// A character outside the tile alphabet.
    #[error("unknown tile '{tile}' at ({x}, {y})")]
    UnknownTile {
        /// Offending character
        tile: char,
        /// Column of the offending character
        x: usize,
        /// Row of the offending character
        y: usize,
    },

    /// The resource could not be read at all.
    #[error("unreadable map resource: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// A parsed, validated tile map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Map {
    width: usize,
    height: usize,
    /// Row-major, `height * width` entries.
    tiles: Vec<Tile>,
    /// Reading order: top to bottom, left to right.
    spawns: Vec<GridPos>,
}

impl Map {
    /// Parse a map from its text form, validating against the expected size.
    pub fn parse(
        source: &str,
        expected_width: usize,
        expected_height: usize,
    ) -> Result<Map, MapError> {
        let rows: Vec<&str> = source.lines().collect();

        let found_height = rows.len();
        let found_width = rows.first().map_or(0, |r| r.chars().count());
        let wrong_size = found_height != expected_height
            || rows.iter().any(|r| r.chars().count() != expected_width);
        if wrong_size {
            return Err(MapError::WrongSize {
                found_width,
                found_height,
                expected_width,
                expected_height,
            });
        }

        let mut tiles = Vec::with_capacity(expected_width * expected_height);
        let mut spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or(MapError::UnknownTile { tile: c, x, y })?;
                if tile == Tile::Spawn {
                    spawns.push(GridPos::new(x as i32, y as i32));
                }
                tiles.push(tile);
            }
        }

        Ok(Map {
            width: expected_width,
            height: expected_height,
            tiles,
            spawns,
        })
    }

    /// Read and parse a map resource from disk.
    pub fn load(
        path: &Path,
        expected_width: usize,
        expected_height: usize,
    ) -> Result<Map, MapError> {
        let source = fs::read_to_string(path)?;
        Map::parse(&source, expected_width, expected_height)
    }

    /// Map width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `pos`, or `None` when out of bounds.
    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    /// Starting positions in reading order, one per player slot.
    pub fn starting_positions(&self) -> &[GridPos] {
        &self.spawns
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(Tile::is_walkable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#S.S#
#...#
#####";

    #[test]
    fn test_parse_valid_map() {
        let map = Map::parse(SMALL, 5, 4).unwrap();

        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 4);
        assert_eq!(map.tile(GridPos::new(0, 0)), Some(Tile::Wall));
        assert_eq!(map.tile(GridPos::new(2, 2)), Some(Tile::Floor));
        assert_eq!(map.tile(GridPos::new(1, 1)), Some(Tile::Spawn));
    }

    #[test]
    fn test_spawns_in_reading_order() {
        let map = Map::parse(SMALL, 5, 4).unwrap();

        assert_eq!(
            map.starting_positions(),
            &[GridPos::new(1, 1), GridPos::new(3, 1)]
        );
    }

    #[test]
    fn test_wrong_height_rejected() {
        let err = Map::parse(SMALL, 5, 6).unwrap_err();
        assert!(matches!(
            err,
            MapError::WrongSize {
                found_height: 4,
                expected_height: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let source = "###\n##\n###";
        assert!(matches!(
            Map::parse(source, 3, 3),
            Err(MapError::WrongSize { .. })
        ));
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let source = "###\n#?#\n###";
        let err = Map::parse(source, 3, 3).unwrap_err();
        assert!(matches!(
            err,
            MapError::UnknownTile {
                tile: '?',
                x: 1,
                y: 1
            }
        ));
    }

    #[test]
    fn test_walkability() {
        let map = Map::parse(SMALL, 5, 4).unwrap();

        assert!(map.is_walkable(GridPos::new(2, 2)));
        assert!(map.is_walkable(GridPos::new(1, 1))); // spawn tiles are floor
        assert!(!map.is_walkable(GridPos::new(0, 0))); // wall
        assert!(!map.is_walkable(GridPos::new(-1, 2))); // off the left edge
        assert!(!map.is_walkable(GridPos::new(2, 99))); // below the map
    }

    #[test]
    fn test_default_map_is_valid() {
        let map = Map::parse(DEFAULT_MAP, 13, 11).unwrap();
        assert_eq!(map.starting_positions().len(), 4);
    }
}
