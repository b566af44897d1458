//! Road network and world behavior tests

use traffic_grid::simulation::{
    BuildingKind, Coord, DebugLayer, Direction, Msg, RoadNetwork, SimWorld, SimulationState,
    Sound, Tool, TrafficLightKind, Visibility, MAX_TEST_WORLD_SIZE, TEST_WORLD_SPACING,
};

/// A four-way crossing centered on the origin
fn plus_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    network.add_road(Coord::new(0, 0)).unwrap();
    for neighbor in Coord::new(0, 0).parallel_neighbors() {
        network.add_road(neighbor).unwrap();
    }
    network
}

#[test]
fn test_single_road_has_empty_variant() {
    let mut network = RoadNetwork::new();
    network.add_road(Coord::new(2, 3)).unwrap();
    assert_eq!(network.variant_at(Coord::new(2, 3)), Some(0));
    assert_eq!(network.variant_at(Coord::new(0, 0)), None);
}

#[test]
fn test_adding_road_updates_neighbor_variants() {
    let mut network = RoadNetwork::new();
    network.add_road(Coord::new(0, 0)).unwrap();
    network.add_road(Coord::new(1, 0)).unwrap();

    // West tile sees a road to the east, east tile sees one to the west
    assert_eq!(network.variant_at(Coord::new(0, 0)), Some(4));
    assert_eq!(network.variant_at(Coord::new(1, 0)), Some(2));

    network.add_road(Coord::new(0, -1)).unwrap();
    assert_eq!(network.variant_at(Coord::new(0, 0)), Some(5));
    assert_eq!(network.variant_at(Coord::new(0, -1)), Some(8));
}

#[test]
fn test_duplicate_and_missing_edits_fail() {
    let mut network = RoadNetwork::new();
    network.add_road(Coord::new(0, 0)).unwrap();
    assert!(network.add_road(Coord::new(0, 0)).is_err());
    assert!(network.remove_road(Coord::new(5, 5)).is_err());
    assert_eq!(network.road_count(), 1);
}

#[test]
fn test_four_way_gets_lights() {
    let network = plus_network();
    let center = Coord::new(0, 0);

    assert_eq!(network.variant_at(center), Some(15));
    assert_eq!(network.intersections(), vec![center]);

    let lights = network.lights_at(center);
    assert_eq!(lights.len(), 4);
    assert_eq!(lights[0].facing(), Direction::Up);
    assert_eq!(lights[1].facing(), Direction::Down);
    assert_eq!(lights[2].facing(), Direction::Left);
    assert_eq!(lights[3].facing(), Direction::Right);

    assert_eq!(network.is_green(center, Direction::Up), Some(true));
    assert_eq!(network.is_green(center, Direction::Left), Some(false));
    assert_eq!(network.is_green(Coord::new(1, 0), Direction::Up), None);
}

#[test]
fn test_three_way_junction_is_uncontrolled() {
    let mut network = plus_network();
    network.remove_road(Coord::new(0, 1)).unwrap();

    assert_eq!(network.variant_at(Coord::new(0, 0)), Some(7));
    assert!(network.lights_at(Coord::new(0, 0)).is_empty());
    assert!(network.intersections().is_empty());
}

#[test]
fn test_lights_survive_unrelated_edits() {
    let mut network = plus_network();
    let center = Coord::new(0, 0);
    network.tick();
    network.tick();

    network.add_road(Coord::new(2, 0)).unwrap();
    network.add_road(Coord::new(1, 1)).unwrap();

    let lights = network.lights_at(center);
    assert_eq!(lights[0].kind(), TrafficLightKind::Green);
    assert_eq!(lights[0].time_remaining(), 4);
    assert_eq!(lights[2].time_remaining(), 1);
}

#[test]
fn test_rebuilt_intersection_starts_fresh() {
    let mut network = plus_network();
    for _ in 0..5 {
        network.tick();
    }

    network.remove_road(Coord::new(1, 0)).unwrap();
    network.add_road(Coord::new(1, 0)).unwrap();

    let lights = network.lights_at(Coord::new(0, 0));
    assert_eq!(lights[0].time_remaining(), 6);
    assert_eq!(lights[2].time_remaining(), 3);
}

#[test]
fn test_connectivity() {
    let mut network = RoadNetwork::new();
    assert_eq!(network.connected_components(), 0);

    network.add_road(Coord::new(0, 0)).unwrap();
    network.add_road(Coord::new(2, 0)).unwrap();
    assert_eq!(network.connected_components(), 2);
    assert!(!network.is_connected(Coord::new(0, 0), Coord::new(2, 0)));

    network.add_road(Coord::new(1, 0)).unwrap();
    assert_eq!(network.connected_components(), 1);
    assert!(network.is_connected(Coord::new(0, 0), Coord::new(2, 0)));

    network.remove_road(Coord::new(1, 0)).unwrap();
    assert_eq!(network.connected_components(), 2);
    assert!(!network.is_connected(Coord::new(0, 0), Coord::new(9, 9)));
}

#[test]
fn test_test_world_layout() {
    let world = SimWorld::create_test_world(3);
    let network = &world.road_network;

    assert_eq!(network.road_count(), 88);
    assert_eq!(network.connected_components(), 1);
    assert_eq!(
        network.intersections(),
        vec![
            Coord::new(4, 4),
            Coord::new(8, 4),
            Coord::new(4, 8),
            Coord::new(8, 8)
        ]
    );

    assert_eq!(network.variant_at(Coord::new(0, 0)), Some(12));
    assert_eq!(network.variant_at(Coord::new(4, 0)), Some(14));
    assert_eq!(network.variant_at(Coord::new(1, 0)), Some(6));
    assert_eq!(network.variant_at(Coord::new(0, 1)), Some(9));
    assert_eq!(network.variant_at(Coord::new(1, 1)), None);
}

#[test]
fn test_test_world_size_is_clamped() {
    let huge = SimWorld::create_test_world(i32::MAX);
    let edge = MAX_TEST_WORLD_SIZE * TEST_WORLD_SPACING;
    assert_eq!(
        huge.road_network.bounds(),
        Some((Coord::new(0, 0), Coord::new(edge, edge)))
    );

    let negative = SimWorld::create_test_world(-5);
    assert_eq!(negative.road_network.road_count(), 1);
    assert!(negative.road_network.has_road(Coord::new(0, 0)));
}

#[test]
fn test_test_world_skips_blocked_cells() {
    let mut world = SimWorld::new();
    world.add_road(Coord::new(0, 0)).unwrap();
    world
        .add_lot(BuildingKind::ResidentialD, Coord::new(1, 0), Direction::Left)
        .unwrap();

    let world = SimWorld::build_test_world(world, 1);

    // 16 grid cells, one of them taken by the lot
    assert_eq!(world.road_network.road_count(), 15);
    assert!(!world.road_network.has_road(Coord::new(1, 0)));
    assert_eq!(world.lots.len(), 1);
    assert!(world.road_network.has_road(Coord::new(4, 4)));
}

#[test]
fn test_prebuilt_world_has_no_pending_sounds() {
    let mut world = SimWorld::create_test_world(2);
    assert!(world.take_sounds().is_empty());
}

#[test]
fn test_right_of_way_alternates_between_axes() {
    let mut world = SimWorld::create_test_world(2);
    let crossing = Coord::new(4, 4);

    assert!(world.has_right_of_way(crossing, Direction::Up));
    assert!(!world.has_right_of_way(crossing, Direction::Left));

    for _ in 0..7 {
        world.update(Msg::UpdateTraffic);
    }
    assert_eq!(world.ticks, 7);
    assert!(!world.has_right_of_way(crossing, Direction::Down));
    assert!(world.has_right_of_way(crossing, Direction::Right));

    // No signal on a plain road
    assert!(world.has_right_of_way(Coord::new(1, 0), Direction::Left));
}

#[test]
fn test_paused_world_does_not_tick() {
    let mut world = SimWorld::create_test_world(2);
    world.update(Msg::SetSimulationState(SimulationState::Paused));
    world.update(Msg::UpdateTraffic);
    world.update(Msg::UpdateEnvironment);
    assert_eq!(world.ticks, 0);
    assert!(world.lots.is_empty());

    world.update(Msg::SetSimulationState(SimulationState::Running));
    world.update(Msg::UpdateTraffic);
    assert_eq!(world.ticks, 1);
}

#[test]
fn test_visibility_pauses_and_restores() {
    let mut world = SimWorld::new();

    world.update(Msg::VisibilityChanged(Visibility::Hidden));
    assert_eq!(world.simulation_state, SimulationState::Paused);
    world.update(Msg::VisibilityChanged(Visibility::Visible));
    assert_eq!(world.simulation_state, SimulationState::Running);

    world.update(Msg::SetSimulationState(SimulationState::Paused));
    world.update(Msg::VisibilityChanged(Visibility::Hidden));
    world.update(Msg::VisibilityChanged(Visibility::Visible));
    assert_eq!(world.simulation_state, SimulationState::Paused);
}

#[test]
fn test_tile_selection_uses_tool() {
    let mut world = SimWorld::new();
    let cell = Coord::new(3, 3);

    world.update(Msg::SelectTile(cell));
    assert!(world.road_network.has_road(cell));
    assert_eq!(
        world.take_sounds(),
        vec![Sound::BuildRoadStart, Sound::BuildRoadEnd]
    );

    // Building over an existing road is a no-op
    world.update(Msg::SelectTile(cell));
    assert!(world.take_sounds().is_empty());

    world.update(Msg::SelectTool(Tool::Inspect));
    world.update(Msg::SelectTile(Coord::new(4, 3)));
    assert!(!world.road_network.has_road(Coord::new(4, 3)));

    world.update(Msg::SelectTool(Tool::Bulldozer));
    world.update(Msg::SelectTile(cell));
    assert!(!world.road_network.has_road(cell));
    assert_eq!(world.take_sounds(), vec![Sound::DestroyRoad]);

    // Nothing left to bulldoze
    world.update(Msg::SelectTile(cell));
    assert!(world.take_sounds().is_empty());
}

#[test]
fn test_lots_need_a_road() {
    let mut world = SimWorld::new();
    world.add_road(Coord::new(0, 0)).unwrap();
    world.take_sounds();

    assert!(world
        .add_lot(BuildingKind::ResidentialA, Coord::new(0, 1), Direction::Left)
        .is_err());
    assert!(world
        .add_lot(BuildingKind::ResidentialA, Coord::new(0, 0), Direction::Up)
        .is_err());

    world
        .add_lot(BuildingKind::Commercial, Coord::new(0, 1), Direction::Up)
        .unwrap();
    assert_eq!(world.take_sounds(), vec![Sound::BuildLot]);
    assert!(world.is_occupied(Coord::new(0, 1)));

    // Roads cannot be built over lots
    assert!(world.add_road(Coord::new(0, 1)).is_err());
}

#[test]
fn test_removing_road_removes_its_lots() {
    let mut world = SimWorld::new();
    world.add_road(Coord::new(0, 0)).unwrap();
    world.add_road(Coord::new(1, 0)).unwrap();
    world
        .add_lot(BuildingKind::ResidentialB, Coord::new(0, 1), Direction::Up)
        .unwrap();
    world
        .add_lot(BuildingKind::ResidentialC, Coord::new(1, 1), Direction::Up)
        .unwrap();

    world.remove_road(Coord::new(0, 0)).unwrap();
    assert!(!world.lots.contains_key(&Coord::new(0, 1)));
    assert!(world.lots.contains_key(&Coord::new(1, 1)));
}

#[test]
fn test_environment_grows_beside_roads() {
    let mut world = SimWorld::create_test_world_with_seed(2, 42);

    for _ in 0..10 {
        let anchor = world.grow_environment().unwrap();
        let lot = world.lots[&anchor];
        assert!(!world.road_network.has_road(anchor));
        assert!(world.road_network.has_road(lot.entry_cell()));
    }
    assert_eq!(world.lots.len(), 10);
    assert_eq!(world.take_sounds(), vec![Sound::BuildLot; 10]);
}

#[test]
fn test_seeded_worlds_grow_identically() {
    let mut first = SimWorld::create_test_world_with_seed(2, 7);
    let mut second = SimWorld::create_test_world_with_seed(2, 7);

    for _ in 0..5 {
        assert_eq!(first.grow_environment(), second.grow_environment());
    }
    assert_eq!(first.draw_map(), second.draw_map());
}

#[test]
fn test_empty_world_cannot_grow() {
    let mut world = SimWorld::new_with_seed(1);
    assert_eq!(world.grow_environment(), None);
    assert_eq!(world.draw_map(), "(empty)\n");
}

#[test]
fn test_draw_map_glyphs() {
    let mut world = SimWorld::new();
    for col in 0..3 {
        world.add_road(Coord::new(col, 0)).unwrap();
    }
    assert_eq!(world.draw_map(), "╶─╴\n");

    world
        .add_lot(BuildingKind::ResidentialA, Coord::new(1, 1), Direction::Up)
        .unwrap();
    assert_eq!(world.draw_map(), "╶─╴\n a \n");

    world.update(Msg::ToggleDebug(DebugLayer::TileVariants));
    assert_eq!(world.draw_map(), "462\n a \n");
}

#[test]
fn test_debug_layers_toggle() {
    let mut world = SimWorld::create_test_world(2);
    assert!(world.draw_map().contains('┼'));

    world.update(Msg::ToggleDebug(DebugLayer::RoadNetwork));
    assert!(world.debug_layers.contains(&DebugLayer::RoadNetwork));
    let map = world.draw_map();
    assert!(map.contains('G'));
    assert!(!map.contains('┼'));

    world.update(Msg::ToggleDebug(DebugLayer::RoadNetwork));
    assert!(world.debug_layers.is_empty());
}

#[test]
fn test_host_bookkeeping_messages() {
    let mut world = SimWorld::new();
    world.update(Msg::ResizeWindow {
        width: 800,
        height: 600,
    });
    assert_eq!(world.window_size, (800, 600));

    world.update(Msg::CheckQueues);
    world.update(Msg::CheckCarStatus);
    assert_eq!(world.ticks, 0);
}

#[test]
fn test_summary_lists_intersections() {
    let world = SimWorld::create_test_world(2);
    let summary = world.summary();
    assert!(summary.contains(&"Roads: 45".to_string()));
    assert!(summary.contains(&"Intersections: 1".to_string()));
    assert!(summary
        .iter()
        .any(|line| line.contains("up=Green(6)") && line.contains("left=Red(3)")));
}
