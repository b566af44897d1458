//! Standalone traffic grid simulation module
//!
//! This module contains the deterministic simulation core: direction
//! algebra, grid stepping, autotiling and traffic light phases, plus the
//! road network and world that drive them. Nothing here renders.

mod audio;
mod autotile;
mod collision;
mod coord;
mod direction;
mod msg;
mod palette;
mod road_network;
mod traffic_light;
mod world;

// Re-export public types for external use
pub use audio::{play_sound, AudioPort, ChannelAudio, LogAudio, Sound};
pub use autotile::{
    is_surrounded_by_empty_tiles, variant_glyph, NeighborPresence, EAST_WEIGHT, FOUR_WAY_VARIANT,
    NORTH_WEIGHT, SOUTH_WEIGHT, WEST_WEIGHT,
};
pub use collision::BoundingBox;
pub use coord::Coord;
pub use direction::Direction;
pub use msg::{DebugLayer, Msg, SimulationState, Tool, Visibility};
pub use palette::{BuildingKind, Color};
pub use road_network::{RoadNetwork, RoadTile};
pub use traffic_light::{
    advance_all, BorderSegment, TrafficLight, TrafficLightKind, TrafficLights, GREEN_DURATION,
    RED_DURATION, YELLOW_DURATION,
};
pub use world::{Lot, SimWorld, MAX_TEST_WORLD_SIZE, TEST_WORLD_SPACING};

/// Signal colors used by the render helpers
pub mod colors {
    pub use super::palette::{GREEN, RED, YELLOW};
}
