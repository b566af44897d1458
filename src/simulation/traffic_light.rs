//! Traffic light phase state machine
//!
//! Lights cycle Green -> Red -> Yellow -> Green. Each phase lasts a fixed
//! number of ticks, counted down by `time_remaining`; the phase changes on
//! the tick after the countdown reaches zero.
//!
//! Lights are plain values. Advancing a light produces a new one, so lights
//! at different intersections can be advanced in any order.

use anyhow::{bail, Result};

use super::direction::Direction;
use super::palette::{self, Color};

/// Ticks spent in the green phase
pub const GREEN_DURATION: u32 = 6;

/// Ticks spent in the red phase
pub const RED_DURATION: u32 = 3;

/// Ticks spent in the yellow phase
pub const YELLOW_DURATION: u32 = 2;

/// The phase of a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficLightKind {
    Red,
    Yellow,
    Green,
}

impl TrafficLightKind {
    /// Countdown value a light starts from when entering this phase
    pub fn duration(self) -> u32 {
        match self {
            TrafficLightKind::Green => GREEN_DURATION,
            TrafficLightKind::Red => RED_DURATION,
            TrafficLightKind::Yellow => YELLOW_DURATION,
        }
    }

    /// The phase that follows this one
    pub fn next(self) -> TrafficLightKind {
        match self {
            TrafficLightKind::Green => TrafficLightKind::Red,
            TrafficLightKind::Red => TrafficLightKind::Yellow,
            TrafficLightKind::Yellow => TrafficLightKind::Green,
        }
    }

    pub fn color(self) -> Color {
        match self {
            TrafficLightKind::Green => palette::GREEN,
            TrafficLightKind::Yellow => palette::YELLOW,
            TrafficLightKind::Red => palette::RED,
        }
    }
}

/// A single signal facing one direction
///
/// Fields are read-only so the countdown can only be reset by a phase
/// change; use `new` and `advance` to get new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficLight {
    kind: TrafficLightKind,
    facing: Direction,
    time_remaining: u32,
}

/// The signals of one intersection
pub type TrafficLights = Vec<TrafficLight>;

/// A straight edge of a tile, in tile-local screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl TrafficLight {
    pub fn new(kind: TrafficLightKind, facing: Direction) -> Self {
        Self {
            kind,
            facing,
            time_remaining: kind.duration(),
        }
    }

    pub fn kind(&self) -> TrafficLightKind {
        self.kind
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Ticks left before the next phase change
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Lights for one controlled axis
    ///
    /// The vertical axis starts green and the horizontal axis starts red, so
    /// the two axes of an intersection are out of phase from construction.
    /// Any other pair yields no lights.
    pub fn from_traffic_direction(directions: &[Direction]) -> TrafficLights {
        match directions {
            [Direction::Up, Direction::Down] => vec![
                TrafficLight::new(TrafficLightKind::Green, Direction::Up),
                TrafficLight::new(TrafficLightKind::Green, Direction::Down),
            ],
            [Direction::Left, Direction::Right] => vec![
                TrafficLight::new(TrafficLightKind::Red, Direction::Left),
                TrafficLight::new(TrafficLightKind::Red, Direction::Right),
            ],
            _ => Vec::new(),
        }
    }

    /// Like `from_traffic_direction`, but rejects unsupported pairs
    pub fn try_from_traffic_direction(directions: &[Direction]) -> Result<TrafficLights> {
        let lights = Self::from_traffic_direction(directions);
        if lights.is_empty() {
            bail!("Unsupported axis configuration: {:?}", directions);
        }
        Ok(lights)
    }

    /// The light one tick later
    pub fn advance(self) -> TrafficLight {
        if self.time_remaining == 0 {
            TrafficLight::new(self.kind.next(), self.facing)
        } else {
            TrafficLight {
                time_remaining: self.time_remaining - 1,
                ..self
            }
        }
    }

    pub fn is_green(&self) -> bool {
        self.kind == TrafficLightKind::Green
    }

    /// The tile edge this light is drawn on, for a square tile of `size`
    pub fn border_segment(&self, size: f32) -> BorderSegment {
        let (from, to) = match self.facing {
            Direction::Up => ((0.0, 0.0), (size, 0.0)),
            Direction::Right => ((size, 0.0), (size, size)),
            Direction::Down => ((0.0, size), (size, size)),
            Direction::Left => ((0.0, 0.0), (0.0, size)),
        };
        BorderSegment { from, to }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

/// Advance every light of an intersection by one tick
pub fn advance_all(lights: &[TrafficLight]) -> TrafficLights {
    lights.iter().map(|light| light.advance()).collect()
}
