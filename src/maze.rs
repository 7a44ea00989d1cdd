//! The maze as a whole: a carved grid, the port watching it and the seed that produced it.

use color_eyre::eyre::Result;
use rand::Rng as _;

use crate::{
    cell::Coord,
    generator::Generator,
    grid::{Geometry, Grid},
    render::{NoopPort, RenderPort},
    solver,
};

/// A generated perfect maze, ready to be solved.
///
/// Construction builds the grid, carves it and clears the visited marks; [`Maze::solve`] then
/// works on the same grid. The grid is only ever touched through `&mut self`, so generation and
/// solving can never overlap.
#[derive(Debug)]
pub struct Maze<P = NoopPort> {
    /// The carved grid.
    grid: Grid,
    /// Port notified of every drawing change.
    port: P,
    /// Seed the generator was created with.
    seed: u64,
}

impl Maze<NoopPort> {
    /// Generates a maze without any rendering attached.
    ///
    /// # Errors
    ///
    /// This function returns the errors of [`Geometry::validate`].
    pub fn headless(geometry: Geometry, seed: Option<u64>) -> Result<Self> {
        Self::new(geometry, seed, NoopPort)
    }
}

impl<P: RenderPort> Maze<P> {
    /// Builds a grid for `geometry` and carves a maze into it, reporting to `port`.
    ///
    /// The same seed and geometry always give the same maze. Without a seed one is drawn from the
    /// thread-local generator and logged, so an interesting maze can be reproduced later.
    ///
    /// # Errors
    ///
    /// This function returns the errors of [`Geometry::validate`]; nothing is generated for an
    /// invalid geometry.
    pub fn new(geometry: Geometry, seed: Option<u64>, mut port: P) -> Result<Self> {
        let mut grid = Grid::new(geometry)?;
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!(
            cols = geometry.num_cols,
            rows = geometry.num_rows,
            seed,
            "generating maze"
        );

        Generator::seeded(seed).generate(&mut grid, &mut port);

        Ok(Self { grid, port, seed })
    }

    /// Returns whether the exit can be reached from the entrance.
    ///
    /// Always `true` for a generated maze.
    pub fn solve(&mut self) -> bool {
        self.solve_path().is_some()
    }

    /// Solves the maze and returns the path from the entrance to the exit, both included.
    pub fn solve_path(&mut self) -> Option<Vec<Coord>> {
        solver::solve(&mut self.grid, &mut self.port)
    }

    /// Returns the carved grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the seed the maze was generated from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the attached port.
    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Returns the attached port for mutation.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consumes the maze and returns its port.
    #[must_use]
    pub fn into_port(self) -> P {
        self.port
    }
}
