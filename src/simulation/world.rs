//! Main simulation world that ties everything together
//!
//! The world owns the road network and the lots beside it, reacts to
//! messages from the host and queues sounds for the host to play.

use anyhow::{bail, Result};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

use super::audio::Sound;
use super::autotile::variant_glyph;
use super::coord::Coord;
use super::direction::Direction;
use super::msg::{DebugLayer, Msg, SimulationState, Tool, Visibility};
use super::palette::BuildingKind;
use super::road_network::RoadNetwork;
use super::traffic_light::TrafficLightKind;

/// Distance between parallel roads in the test world
pub const TEST_WORLD_SPACING: i32 = 4;

/// Largest number of blocks per side in the test world
pub const MAX_TEST_WORLD_SIZE: i32 = 64;

/// A building placed next to a road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lot {
    pub kind: BuildingKind,
    pub anchor: Coord,
    /// Direction from the lot towards the road it is entered from
    pub entry: Direction,
}

impl Lot {
    /// The road cell this lot is entered from
    pub fn entry_cell(&self) -> Coord {
        self.anchor.step(self.entry)
    }
}

/// The main simulation world
pub struct SimWorld {
    /// Road tiles and intersection signals
    pub road_network: RoadNetwork,

    /// Buildings keyed by the cell they stand on
    pub lots: HashMap<Coord, Lot>,

    /// Ticks advanced so far
    pub ticks: u64,

    pub simulation_state: SimulationState,

    /// State to restore once the window is visible again
    state_before_hidden: Option<SimulationState>,

    pub tool: Tool,

    pub window_size: (u32, u32),

    pub debug_layers: HashSet<DebugLayer>,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,

    /// Sounds waiting for the host
    sounds: Vec<Sound>,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self {
            road_network: RoadNetwork::new(),
            lots: HashMap::new(),
            ticks: 0,
            simulation_state: SimulationState::Running,
            state_before_hidden: None,
            tool: Tool::SmartConstruction,
            window_size: (0, 0),
            debug_layers: HashSet::new(),
            rng,
            sounds: Vec::new(),
        }
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    /// Whether a cell holds a road or a building
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.road_network.has_road(coord) || self.lots.contains_key(&coord)
    }

    /// Build a road on an empty cell
    pub fn add_road(&mut self, coord: Coord) -> Result<()> {
        if self.lots.contains_key(&coord) {
            bail!("Cannot build a road on the lot at {}", coord);
        }
        self.road_network.add_road(coord)?;
        self.sounds.push(Sound::BuildRoadStart);
        self.sounds.push(Sound::BuildRoadEnd);
        Ok(())
    }

    /// Remove a road, along with any lot that is entered through it
    pub fn remove_road(&mut self, coord: Coord) -> Result<()> {
        self.road_network.remove_road(coord)?;

        let orphaned: Vec<Coord> = self
            .lots
            .values()
            .filter(|lot| lot.entry_cell() == coord)
            .map(|lot| lot.anchor)
            .collect();
        for anchor in orphaned {
            self.lots.remove(&anchor);
            debug!("Removed lot at {} after losing its road", anchor);
        }

        self.sounds.push(Sound::DestroyRoad);
        Ok(())
    }

    /// Place a building on an empty cell next to a road
    pub fn add_lot(&mut self, kind: BuildingKind, anchor: Coord, entry: Direction) -> Result<()> {
        if self.is_occupied(anchor) {
            bail!("Cell {} is already occupied", anchor);
        }
        let lot = Lot {
            kind,
            anchor,
            entry,
        };
        if !self.road_network.has_road(lot.entry_cell()) {
            bail!(
                "Lot at {} has no road to the {} at {}",
                anchor,
                entry,
                lot.entry_cell()
            );
        }

        self.lots.insert(anchor, lot);
        self.sounds.push(Sound::BuildLot);
        debug!("Placed {} at {}", kind.name(), anchor);
        Ok(())
    }

    /// Handle one message from the host
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::ResizeWindow { width, height } => {
                self.window_size = (width, height);
            }
            Msg::VisibilityChanged(Visibility::Hidden) => {
                if self.state_before_hidden.is_none() {
                    self.state_before_hidden = Some(self.simulation_state);
                }
                self.simulation_state = SimulationState::Paused;
            }
            Msg::VisibilityChanged(Visibility::Visible) => {
                if let Some(previous) = self.state_before_hidden.take() {
                    self.simulation_state = previous;
                }
            }
            Msg::SetSimulationState(state) => {
                self.simulation_state = state;
            }
            Msg::UpdateTraffic => {
                if self.simulation_state == SimulationState::Running {
                    self.tick();
                }
            }
            Msg::UpdateEnvironment => {
                if self.simulation_state == SimulationState::Running {
                    self.grow_environment();
                }
            }
            Msg::CheckQueues | Msg::CheckCarStatus => {
                trace!("Ignoring {:?}, cars are driven elsewhere", msg);
            }
            Msg::SelectTile(coord) => {
                if let Err(e) = self.apply_tool(coord) {
                    warn!("Tile selection at {} rejected: {:#}", coord, e);
                }
            }
            Msg::SelectTool(tool) => {
                self.tool = tool;
            }
            Msg::ToggleDebug(layer) => {
                if !self.debug_layers.remove(&layer) {
                    self.debug_layers.insert(layer);
                }
            }
        }
    }

    fn apply_tool(&mut self, coord: Coord) -> Result<()> {
        match self.tool {
            Tool::SmartConstruction => {
                if self.road_network.has_road(coord) {
                    return Ok(());
                }
                self.add_road(coord)
            }
            Tool::Bulldozer => self.remove_road(coord),
            Tool::Inspect => Ok(()),
        }
    }

    /// Advance every traffic light by one tick
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.road_network.tick();
        trace!("Tick {}", self.ticks);
    }

    /// Try to place one random building beside the road network
    ///
    /// Returns the cell that was built on, if any.
    pub fn grow_environment(&mut self) -> Option<Coord> {
        let mut candidates: Vec<(Coord, Direction)> = self
            .road_network
            .tiles()
            .keys()
            .flat_map(|road| {
                Direction::ALL
                    .into_iter()
                    .map(move |direction| (road.step(direction), direction.opposite()))
            })
            .filter(|(cell, _)| !self.is_occupied(*cell))
            .collect();
        // HashMap order is not stable, sort so seeded runs repeat
        candidates.sort_by_key(|(cell, entry)| (cell.row, cell.col, *entry));
        candidates.dedup_by_key(|(cell, _)| *cell);

        let (anchor, entry) = *self.choose_random(&candidates)?;
        let kind = *self.choose_random(&BuildingKind::ALL)?;

        match self.add_lot(kind, anchor, entry) {
            Ok(()) => Some(anchor),
            Err(e) => {
                warn!("Failed to grow environment: {:#}", e);
                None
            }
        }
    }

    /// Drain the sounds queued since the last call
    pub fn take_sounds(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.sounds)
    }

    /// Whether a car heading `facing` may enter the intersection at `coord`
    ///
    /// Cells without a signal for that direction are always open.
    pub fn has_right_of_way(&self, coord: Coord, facing: Direction) -> bool {
        self.road_network.is_green(coord, facing).unwrap_or(true)
    }

    /// Create a default test world
    pub fn create_test_world(size: i32) -> Self {
        Self::build_test_world(SimWorld::new(), size)
    }

    /// Create a default test world with a seeded RNG for reproducible simulations
    pub fn create_test_world_with_seed(size: i32, seed: u64) -> Self {
        Self::build_test_world(SimWorld::new_with_seed(seed), size)
    }

    /// Lay a `size` x `size` block grid of roads
    ///
    /// Inner crossings become four-way intersections. `size` is clamped to
    /// `0..=MAX_TEST_WORLD_SIZE`; cells that cannot take a road are skipped.
    pub fn build_test_world(mut world: SimWorld, size: i32) -> Self {
        let extent = size.clamp(0, MAX_TEST_WORLD_SIZE) * TEST_WORLD_SPACING;

        for row in 0..=extent {
            for col in 0..=extent {
                if row % TEST_WORLD_SPACING == 0 || col % TEST_WORLD_SPACING == 0 {
                    let coord = Coord::new(col, row);
                    if let Err(e) = world.add_road(coord) {
                        warn!("Skipping test world road at {}: {:#}", coord, e);
                    }
                }
            }
        }

        // Construction noise is not interesting for a prebuilt world
        world.sounds.clear();
        world
    }

    /// Summary of the world state, one line per entry
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Ticks: {}", self.ticks),
            format!("Roads: {}", self.road_network.road_count()),
            format!("Intersections: {}", self.road_network.intersections().len()),
            format!(
                "Road networks: {}",
                self.road_network.connected_components()
            ),
            format!("Lots: {}", self.lots.len()),
        ];

        for coord in self.road_network.intersections() {
            let phases: Vec<String> = self
                .road_network
                .lights_at(coord)
                .iter()
                .map(|light| {
                    format!(
                        "{}={:?}({})",
                        light.facing(),
                        light.kind(),
                        light.time_remaining()
                    )
                })
                .collect();
            lines.push(format!("  Intersection {}: {}", coord, phases.join(" ")));
        }

        lines
    }

    /// Print the summary through the log
    pub fn log_summary(&self) {
        for line in self.summary() {
            info!("{}", line);
        }
    }

    /// Render the grid as text, one character per cell
    pub fn draw_map(&self) -> String {
        let Some((mut min, mut max)) = self.road_network.bounds() else {
            return String::from("(empty)\n");
        };
        for anchor in self.lots.keys() {
            min = Coord::new(min.col.min(anchor.col), min.row.min(anchor.row));
            max = Coord::new(max.col.max(anchor.col), max.row.max(anchor.row));
        }

        let show_variants = self.debug_layers.contains(&DebugLayer::TileVariants);
        let show_signals = self.debug_layers.contains(&DebugLayer::RoadNetwork);

        let mut map = String::new();
        for row in min.row..=max.row {
            for col in min.col..=max.col {
                let coord = Coord::new(col, row);
                let cell = if let Some(tile) = self.road_network.get_tile(coord) {
                    if show_variants {
                        std::char::from_digit(tile.variant as u32, 16).unwrap_or('?')
                    } else if show_signals && !tile.lights.is_empty() {
                        self.signal_glyph(coord)
                    } else {
                        variant_glyph(tile.variant)
                    }
                } else if let Some(lot) = self.lots.get(&coord) {
                    lot.kind.glyph()
                } else {
                    ' '
                };
                map.push(cell);
            }
            map.push('\n');
        }
        map
    }

    /// Letter for the phase of the vertical signals at an intersection
    fn signal_glyph(&self, coord: Coord) -> char {
        let kind = self
            .road_network
            .lights_at(coord)
            .iter()
            .find(|light| light.facing().is_vertical())
            .map(|light| light.kind());
        match kind {
            Some(TrafficLightKind::Green) => 'G',
            Some(TrafficLightKind::Yellow) => 'Y',
            Some(TrafficLightKind::Red) => 'R',
            None => '+',
        }
    }
}
