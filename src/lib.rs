//! Perfect-maze generation by randomized backtracking, depth-first solving, and an animated
//! terminal interface on top of both.
//!
//! The algorithmic core is [`Maze`]: it builds a [`Grid`], carves it with a [`Generator`] and
//! solves it with [`solver::solve`]. Drawing is left to an optional [`RenderPort`]; the core works
//! the same with or without one.
//!
//! ```
//! use backtrack_maze::{Geometry, Maze};
//!
//! let mut maze = Maze::headless(Geometry::new(8, 5), Some(42))?;
//! assert!(maze.solve());
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use color_eyre::eyre::{OptionExt as _, Result};

pub mod cell;
pub mod config;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solver;

mod animation;
mod app;
mod events;
mod preset;
mod types;
mod ui;

pub use app::App;
pub use cell::{Cell, Coord, Direction};
pub use config::Config;
pub use generator::Generator;
pub use grid::{CellRect, Geometry, Grid};
pub use maze::Maze;
pub use render::{NoopPort, Paced, Recorder, RenderEvent, RenderPort, TracingPort};

/// Generates and solves a maze without the interactive interface and returns a text report.
///
/// Every render callback is logged at trace level. Refreshes are only paced when a frame delay was
/// given explicitly.
///
/// # Errors
///
/// This function returns an error if the configured geometry is invalid or the generated maze
/// turns out to have no solution.
pub fn run_headless(config: &Config) -> Result<String> {
    let mut maze = Maze::new(config.geometry(), config.seed, headless_port(config))?;
    let path = maze
        .solve_path()
        .ok_or_eyre("generated maze has no path from entrance to exit")?;

    Ok(format!(
        "{}seed: {}\nsolved: {} moves\npath: {}\n",
        render::ascii(maze.grid(), &path),
        maze.seed(),
        path.len() - 1,
        render::describe_path(&path)
    ))
}

/// Builds the render port for a headless run.
const fn headless_port(config: &Config) -> Paced<TracingPort> {
    Paced::new(TracingPort, config.headless_frame_delay())
}
