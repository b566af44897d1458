//! Traffic Grid Library
//!
//! The deterministic core of a grid-based traffic simulation: direction
//! algebra, grid stepping, road autotiling and traffic light phases.

pub mod simulation;
