use clap::Parser;
use log::info;

use traffic_grid::simulation::{self, LogAudio, Msg, SimWorld};

#[derive(Parser)]
#[command(name = "traffic_grid")]
#[command(about = "Headless grid traffic simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "42")]
    ticks: u32,

    /// Seed for reproducible environment growth
    #[arg(long)]
    seed: Option<u64>,

    /// Number of road blocks along each side of the demo grid
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(i32).range(0..=64))]
    size: i32,

    /// Print the map every N ticks (0 prints only the first and last map)
    #[arg(long, default_value = "0")]
    map_every: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_headless(&cli);
}

/// Run the simulation without any window
fn run_headless(cli: &Cli) {
    info!("Running traffic grid simulation in headless mode...");
    info!("Ticks: {}, Size: {}", cli.ticks, cli.size);

    let mut world = match cli.seed {
        Some(seed) => SimWorld::create_test_world_with_seed(cli.size, seed),
        None => SimWorld::create_test_world(cli.size),
    };
    let mut audio = LogAudio;

    info!("Initial state:");
    world.log_summary();
    println!("{}", world.draw_map());

    for tick in 1..=cli.ticks {
        world.update(Msg::UpdateTraffic);
        world.update(Msg::UpdateEnvironment);
        for sound in world.take_sounds() {
            simulation::play_sound(&mut audio, sound);
        }

        if cli.map_every > 0 && tick % cli.map_every == 0 {
            info!("--- After tick {} ---", tick);
            println!("{}", world.draw_map());
        }
    }

    info!("=== SIMULATION COMPLETE ===");
    world.log_summary();
    println!("{}", world.draw_map());
}
