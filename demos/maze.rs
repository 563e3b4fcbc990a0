//! Scatters random obstacles and routes a runner between opposite corners.
//!
//! Usage:
//!   cargo run --bin gridpath-maze -- --seed 7 --density 0.35
//!   RUST_LOG=debug cargo run --bin gridpath-maze

use clap::Parser;
use gridpath_demos::{DEFAULT_DENSITY, MazeParams, maze_corners, parse_density, scatter_maze};
use gridpath_game::{SearchConfig, SessionConfig};

/// Random maze routing demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Board height in cells
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Fraction of cells turned into obstacles (0.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_DENSITY, value_parser = parse_density)]
    density: f64,

    /// Seed for obstacle placement
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Route around other occupants
    #[arg(long)]
    exclusive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = MazeParams {
        width: args.width,
        height: args.height,
        density: args.density,
        seed: args.seed,
    };
    let search = SearchConfig {
        max_expansions: args.max_expansions,
    };
    let config = SessionConfig::default()
        .with_search(search)
        .with_exclusive_occupancy(args.exclusive);

    let session = scatter_maze(params, config)?;
    let (_, goal) = maze_corners(params);
    let path = session.find_path("runner", goal)?;
    print!("{session}");
    if path.is_empty() {
        println!("no route to {goal}");
    } else {
        println!("route to {goal}: {} steps", path.steps());
        println!("{:?}", path.to_coords());
    }
    Ok(())
}
