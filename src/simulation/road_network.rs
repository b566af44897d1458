//! Road tiles, their autotile variants and intersection signals
//!
//! Every edit is a topology change: the edited cell and its four edge
//! neighbors get their variant recomputed, and four-way tiles gain or lose
//! their traffic lights accordingly.

use anyhow::{bail, Result};
use log::{debug, trace};
use petgraph::algo::{connected_components, has_path_connecting};
use petgraph::graphmap::UnGraphMap;
use std::collections::HashMap;

use super::autotile::{NeighborPresence, FOUR_WAY_VARIANT};
use super::coord::Coord;
use super::direction::Direction;
use super::traffic_light::{self, TrafficLight, TrafficLights};

/// A single road cell
#[derive(Debug, Clone, PartialEq)]
pub struct RoadTile {
    /// Autotile index from the tile's edge neighbors
    pub variant: u8,
    /// Signals, only present on four-way intersections
    pub lights: TrafficLights,
}

/// The set of road cells on the grid
#[derive(Default)]
pub struct RoadNetwork {
    tiles: HashMap<Coord, RoadTile>,

    /// Adjacency between road cells
    graph: UnGraphMap<Coord, ()>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_road(&self, coord: Coord) -> bool {
        self.tiles.contains_key(&coord)
    }

    pub fn get_tile(&self, coord: Coord) -> Option<&RoadTile> {
        self.tiles.get(&coord)
    }

    pub fn road_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &HashMap<Coord, RoadTile> {
        &self.tiles
    }

    /// Place a road on an empty cell
    pub fn add_road(&mut self, coord: Coord) -> Result<()> {
        if self.has_road(coord) {
            bail!("Road already exists at {}", coord);
        }

        self.tiles.insert(
            coord,
            RoadTile {
                variant: 0,
                lights: Vec::new(),
            },
        );
        self.graph.add_node(coord);
        for neighbor in coord.parallel_neighbors() {
            if self.has_road(neighbor) {
                self.graph.add_edge(coord, neighbor, ());
            }
        }

        debug!("Added road at {}", coord);
        self.refresh_around(coord);
        Ok(())
    }

    /// Remove the road on a cell
    pub fn remove_road(&mut self, coord: Coord) -> Result<()> {
        if self.tiles.remove(&coord).is_none() {
            bail!("No road to remove at {}", coord);
        }
        self.graph.remove_node(coord);

        debug!("Removed road at {}", coord);
        self.refresh_around(coord);
        Ok(())
    }

    /// Which edge neighbors of a cell hold a road
    pub fn neighbor_presence(&self, coord: Coord) -> NeighborPresence {
        NeighborPresence::from_fn(|direction| self.has_road(coord.step(direction)))
    }

    /// Recompute variants and signals for a cell and its edge neighbors
    fn refresh_around(&mut self, coord: Coord) {
        let mut affected = vec![coord];
        affected.extend(coord.parallel_neighbors());

        for cell in affected {
            let variant = self.neighbor_presence(cell).encode();
            let Some(tile) = self.tiles.get_mut(&cell) else {
                continue;
            };
            tile.variant = variant;

            let is_four_way = variant == FOUR_WAY_VARIANT;
            if is_four_way && tile.lights.is_empty() {
                tile.lights = Direction::ORIENTATIONS
                    .iter()
                    .flat_map(|axis| TrafficLight::from_traffic_direction(axis))
                    .collect();
                debug!("Intersection formed at {}", cell);
            } else if !is_four_way && !tile.lights.is_empty() {
                tile.lights.clear();
                debug!("Intersection dissolved at {}", cell);
            }
        }
    }

    /// Advance every signal by one tick
    pub fn tick(&mut self) {
        for (coord, tile) in self.tiles.iter_mut() {
            if tile.lights.is_empty() {
                continue;
            }
            tile.lights = traffic_light::advance_all(&tile.lights);
            trace!("Lights at {}: {:?}", coord, tile.lights);
        }
    }

    pub fn variant_at(&self, coord: Coord) -> Option<u8> {
        self.tiles.get(&coord).map(|tile| tile.variant)
    }

    /// Signals at a cell, empty when the cell is not an intersection
    pub fn lights_at(&self, coord: Coord) -> &[TrafficLight] {
        self.tiles
            .get(&coord)
            .map(|tile| tile.lights.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the signal facing `facing` at `coord` is green
    ///
    /// Returns `None` when no signal faces that way.
    pub fn is_green(&self, coord: Coord, facing: Direction) -> Option<bool> {
        self.lights_at(coord)
            .iter()
            .find(|light| light.facing() == facing)
            .map(|light| light.is_green())
    }

    /// Cells carrying traffic lights, sorted by row then column
    pub fn intersections(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self
            .tiles
            .iter()
            .filter(|(_, tile)| !tile.lights.is_empty())
            .map(|(coord, _)| *coord)
            .collect();
        coords.sort_by_key(|coord| (coord.row, coord.col));
        coords
    }

    /// Number of separate road networks on the grid
    pub fn connected_components(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Whether two road cells are joined by road
    pub fn is_connected(&self, from: Coord, to: Coord) -> bool {
        if !self.graph.contains_node(from) || !self.graph.contains_node(to) {
            return false;
        }
        has_path_connecting(&self.graph, from, to, None)
    }

    /// Smallest and largest occupied coordinates
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut coords = self.tiles.keys();
        let first = *coords.next()?;
        let (min, max) = coords.fold((first, first), |(min, max), c| {
            (
                Coord::new(min.col.min(c.col), min.row.min(c.row)),
                Coord::new(max.col.max(c.col), max.row.max(c.row)),
            )
        });
        Some((min, max))
    }
}
