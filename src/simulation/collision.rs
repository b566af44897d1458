//! Axis-aligned bounding box overlap

use super::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The box covering one grid cell of `tile_size` units
    pub fn for_tile(coord: Coord, tile_size: f32) -> Self {
        Self::new(
            coord.col as f32 * tile_size,
            coord.row as f32 * tile_size,
            tile_size,
            tile_size,
        )
    }

    /// Open-interval overlap: boxes sharing only an edge do not collide
    pub fn collides(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
