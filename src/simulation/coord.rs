//! Grid coordinates and stepping rules
//!
//! Coordinates address cells of an unbounded grid. Bounds are the caller's
//! concern; stepping past the edge of `i32` wraps to the opposite edge.

use std::fmt;

use super::direction::Direction;

/// A cell on the grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Shift by a column and row offset, wrapping at the `i32` edges
    fn offset(self, dcol: i32, drow: i32) -> Coord {
        Coord::new(self.col.wrapping_add(dcol), self.row.wrapping_add(drow))
    }

    /// The adjacent cell in the given direction
    pub fn step(self, direction: Direction) -> Coord {
        match direction {
            Direction::Up => self.offset(0, -1),
            Direction::Right => self.offset(1, 0),
            Direction::Down => self.offset(0, 1),
            Direction::Left => self.offset(-1, 0),
        }
    }

    /// Corner neighbors: top-left, top-right, bottom-left, bottom-right
    pub fn diagonal_neighbors(self) -> [Coord; 4] {
        [
            self.offset(-1, -1),
            self.offset(1, -1),
            self.offset(-1, 1),
            self.offset(1, 1),
        ]
    }

    /// Edge neighbors, in the order of `Direction::ALL`
    pub fn parallel_neighbors(self) -> [Coord; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Coord::new(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>4}, {:>4})", self.col, self.row)
    }
}
