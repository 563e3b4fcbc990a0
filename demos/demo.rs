//! Replays the sample scenario: plan a route, move both players, print the
//! board.
//!
//! Run: cargo run --bin gridpath-demo

use gridpath_demos::sample_session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut session = sample_session()?;
    let path = session.find_path("Player1", (7, 8))?;
    println!("Path for Player1: {:?}", path.to_coords());

    session.move_occupant("Player1", (1, 1))?;
    session.move_occupant("Player2", (4, 4))?;
    println!("Player1 at {}", session.position_of("Player1")?);
    println!("Player2 at {}", session.position_of("Player2")?);
    print!("{session}");
    Ok(())
}
