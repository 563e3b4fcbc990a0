//! Scenarios shared by the demo binaries.
//!
//! - [`sample_session`]: the 10 × 10 board with a short wall and two players.
//! - [`scatter_maze`]: a seeded random board for stress runs.

use gridpath_game::{Cell, GameSession, SessionConfig, SessionError};
use log::info;
use rand::{RngExt, SeedableRng};

pub const SAMPLE_WIDTH: i32 = 10;
pub const SAMPLE_HEIGHT: i32 = 10;
pub const SAMPLE_WALL: [(i32, i32); 3] = [(3, 3), (3, 4), (3, 5)];

/// Board with the three-cell wall, `Player1` at `(0, 0)` and `Player2` at
/// `(5, 5)`.
pub fn sample_session() -> Result<GameSession, SessionError> {
    let mut session = GameSession::new(SAMPLE_WIDTH, SAMPLE_HEIGHT)?;
    for c in SAMPLE_WALL {
        session.place_obstacle(c);
    }
    session.add_occupant("Player1", (0, 0))?;
    session.add_occupant("Player2", (5, 5))?;
    Ok(session)
}

/// Settings for [`scatter_maze`].
#[derive(Clone, Copy, Debug)]
pub struct MazeParams {
    pub width: i32,
    pub height: i32,
    /// Fraction of cells turned into obstacles, in `0.0..=1.0`.
    pub density: f64,
    pub seed: u64,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            density: DEFAULT_DENSITY,
            seed: 42,
        }
    }
}

pub const DEFAULT_DENSITY: f64 = 0.3;

/// Random obstacles with a `runner` at the top-left corner. The two opposite
/// corners are always left open.
///
/// Densities outside `0.0..=1.0` are clamped; NaN falls back to
/// [`DEFAULT_DENSITY`].
pub fn scatter_maze(
    params: MazeParams,
    config: SessionConfig,
) -> Result<GameSession, SessionError> {
    let config = SessionConfig {
        width: params.width,
        height: params.height,
        ..config
    };
    let mut session = GameSession::with_config(config)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(params.seed);
    let (start, goal) = maze_corners(params);
    let density = if params.density.is_nan() {
        DEFAULT_DENSITY
    } else {
        params.density.clamp(0.0, 1.0)
    };
    for y in 0..params.height {
        for x in 0..params.width {
            let c = Cell::new(x, y);
            if c != start && c != goal && rng.random_bool(density) {
                session.place_obstacle(c);
            }
        }
    }
    info!(
        "maze {}x{} seed {}: {} obstacles",
        params.width,
        params.height,
        params.seed,
        session.grid().obstacle_count()
    );
    session.add_occupant("runner", start)?;
    Ok(session)
}

/// Command-line parser for an obstacle density: a finite number in
/// `0.0..=1.0`.
pub fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{s:?}: {e}"))?;
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(format!("{s:?}: density must be between 0 and 1"));
    }
    Ok(density)
}

/// Top-left and bottom-right cells of the maze.
pub fn maze_corners(params: MazeParams) -> (Cell, Cell) {
    (Cell::ZERO, Cell::new(params.width - 1, params.height - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_path_goes_around_the_wall() {
        let session = sample_session().unwrap();
        let path = session.find_path("Player1", (7, 8)).unwrap();
        assert_eq!(path.len(), 16);
        assert_eq!(path.start(), Some(Cell::new(0, 0)));
        assert_eq!(path.goal(), Some(Cell::new(7, 8)));
        for c in SAMPLE_WALL {
            assert!(!path.contains(c.into()));
        }
    }

    #[test]
    fn maze_keeps_corners_open_and_is_reproducible() {
        let params = MazeParams {
            density: 1.0,
            ..MazeParams::default()
        };
        let session = scatter_maze(params, SessionConfig::default()).unwrap();
        let cells = (params.width * params.height) as usize;
        assert_eq!(session.grid().obstacle_count(), cells - 2);
        let (_, goal) = maze_corners(params);
        assert!(session.find_path("runner", goal).unwrap().is_empty());

        let a = scatter_maze(MazeParams::default(), SessionConfig::default()).unwrap();
        let b = scatter_maze(MazeParams::default(), SessionConfig::default()).unwrap();
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn nan_density_falls_back_to_default() {
        let nan = MazeParams {
            density: f64::NAN,
            ..MazeParams::default()
        };
        let session = scatter_maze(nan, SessionConfig::default()).unwrap();
        let expected = scatter_maze(MazeParams::default(), SessionConfig::default()).unwrap();
        assert_eq!(session.render(), expected.render());
    }

    #[test]
    fn out_of_range_density_is_clamped() {
        let params = MazeParams {
            density: -3.0,
            ..MazeParams::default()
        };
        let session = scatter_maze(params, SessionConfig::default()).unwrap();
        assert_eq!(session.grid().obstacle_count(), 0);
    }

    #[test]
    fn density_argument_must_be_a_finite_fraction() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("nan").is_err());
        assert!(parse_density("inf").is_err());
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("dense").is_err());
    }
}
