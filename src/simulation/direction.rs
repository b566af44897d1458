//! Direction algebra over the four grid directions

use std::fmt;

/// One of the four compass directions on the grid
///
/// `Up` points towards decreasing row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The vertical axis
    pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// The horizontal axis
    pub const HORIZONTAL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// All directions, vertical ones first
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The two axis groupings of an intersection
    pub const ORIENTATIONS: [[Direction; 2]; 2] = [Self::VERTICAL, Self::HORIZONTAL];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Rotate clockwise by one step
    pub fn next(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate counter-clockwise by one step
    pub fn previous(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    /// Directions perpendicular to this one
    pub fn cross(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => Self::HORIZONTAL,
            Direction::Left | Direction::Right => Self::VERTICAL,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Sprite rotation in degrees, counter-clockwise from `Up`
    pub fn rotation_degrees(self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Right => 270,
            Direction::Down => 180,
            Direction::Left => 90,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
