//! Messages that drive the simulation world

use super::coord::Coord;

/// Whether the simulation advances on `UpdateTraffic`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// The tool applied when a tile is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    SmartConstruction,
    Bulldozer,
    /// Select tiles without editing them
    Inspect,
}

/// Optional overlays on the terminal map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugLayer {
    /// Show signal state on intersections
    RoadNetwork,
    /// Show variant indices instead of glyphs
    TileVariants,
}

/// Every event the world reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ResizeWindow { width: u32, height: u32 },
    VisibilityChanged(Visibility),
    SetSimulationState(SimulationState),
    /// Advance one simulation tick
    UpdateTraffic,
    UpdateEnvironment,
    CheckQueues,
    CheckCarStatus,
    SelectTile(Coord),
    SelectTool(Tool),
    ToggleDebug(DebugLayer),
}
