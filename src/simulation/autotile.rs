//! Neighbor bitmask encoding for road tile variants
//!
//! The weights are fixed by the tile art: north = 1, west = 2, east = 4,
//! south = 8. They do not follow compass order.

use super::direction::Direction;

pub const NORTH_WEIGHT: u8 = 1;
pub const WEST_WEIGHT: u8 = 2;
pub const EAST_WEIGHT: u8 = 4;
pub const SOUTH_WEIGHT: u8 = 8;

/// Variant of a tile with road on all four sides
pub const FOUR_WAY_VARIANT: u8 = 15;

/// Terminal glyph for each of the 16 variants
const VARIANT_GLYPHS: [char; 16] = [
    '•', '╵', '╴', '┘', '╶', '└', '─', '┴', '╷', '│', '┐', '┤', '┌', '├', '┬', '┼',
];

/// Which of the four edge neighbors of a cell are occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborPresence {
    pub north: bool,
    pub west: bool,
    pub east: bool,
    pub south: bool,
}

impl NeighborPresence {
    pub fn new(north: bool, west: bool, east: bool, south: bool) -> Self {
        Self {
            north,
            west,
            east,
            south,
        }
    }

    /// Build a presence record by asking about each direction
    pub fn from_fn(mut is_occupied: impl FnMut(Direction) -> bool) -> Self {
        Self {
            north: is_occupied(Direction::Up),
            west: is_occupied(Direction::Left),
            east: is_occupied(Direction::Right),
            south: is_occupied(Direction::Down),
        }
    }

    /// Tile variant index in `0..=15`
    pub fn encode(&self) -> u8 {
        let weight = |present: bool, value: u8| if present { value } else { 0 };

        weight(self.north, NORTH_WEIGHT)
            + weight(self.west, WEST_WEIGHT)
            + weight(self.east, EAST_WEIGHT)
            + weight(self.south, SOUTH_WEIGHT)
    }
}

pub fn is_surrounded_by_empty_tiles(variant: u8) -> bool {
    variant == 0
}

/// Box-drawing glyph for a variant, `?` for out-of-range input
pub fn variant_glyph(variant: u8) -> char {
    VARIANT_GLYPHS
        .get(variant as usize)
        .copied()
        .unwrap_or('?')
}
