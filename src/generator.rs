//! Randomized backtracking maze generator.
//!
//! Carving starts in the entrance cell and walks into a random unvisited neighbour, breaking the
//! wall on the way, until it reaches a cell with no unvisited neighbours. It then backs up to the
//! most recent cell that still has some and carves from there again. Every cell is reached exactly
//! once through exactly one broken wall, so the passages form a spanning tree of the grid: a
//! perfect maze.
//!
//! The walk keeps its own stack of cells instead of recursing, so the depth of the maze is not
//! limited by the size of the call stack.

use rand::{
    rngs::StdRng,
    seq::IndexedRandom as _,
    Rng, SeedableRng as _,
};

use crate::{
    cell::{Coord, Direction},
    grid::Grid,
    render::RenderPort,
};

/// Maze carver driven by an explicit source of randomness.
#[derive(Clone, Debug)]
pub struct Generator<R> {
    /// Source used to pick between eligible neighbours.
    rng: R,
}

impl Generator<StdRng> {
    /// Creates a generator whose output depends only on `seed` and the grid dimensions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator that draws from the given random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carves a perfect maze into a freshly built grid.
    ///
    /// The entrance and exit are opened first, then passages are carved from the entrance, and
    /// finally every visited mark is cleared so the solver starts from a clean slate. Each cell is
    /// reported to the port once up front, again whenever one of its walls is broken, and a last time
    /// when the walk backs out of it.
    pub fn generate<P: RenderPort>(&mut self, grid: &mut Grid, port: &mut P) {
        for coord in grid.coords() {
            draw_cell(grid, port, coord);
        }

        grid.open_entrance_and_exit();
        draw_cell(grid, port, grid.entrance());
        draw_cell(grid, port, grid.exit());

        let carved = self.carve(grid, port);
        grid.reset_visited();

        tracing::debug!(
            cols = grid.num_cols(),
            rows = grid.num_rows(),
            carved,
            "maze generated"
        );
    }

    /// Runs the backtracking walk from the entrance and returns the number of walls broken.
    fn carve<P: RenderPort>(&mut self, grid: &mut Grid, port: &mut P) -> usize {
        let entrance = grid.entrance();
        grid.mark_visited(entrance);

        let mut stack = vec![entrance];
        let mut carved = 0;
        let mut candidates = Vec::with_capacity(Direction::ALL.len());

        while let Some(&current) = stack.last() {
            candidates.clear();
            candidates.extend(
                Direction::ALL
                    .into_iter()
                    .filter_map(|direction| grid.neighbor(current, direction))
                    .filter(|neighbor| !grid.is_visited(*neighbor)),
            );

            let Some(&next) = candidates.choose(&mut self.rng) else {
                // Dead end: the cell is finished, draw it once more and back up.
                draw_cell(grid, port, current);
                let _ = stack.pop();
                continue;
            };

            grid.break_wall_between(current, next);
            draw_cell(grid, port, current);
            draw_cell(grid, port, next);

            grid.mark_visited(next);
            stack.push(next);
            carved += 1;
        }

        carved
    }
}

/// Reports one cell to the port and refreshes it.
fn draw_cell<P: RenderPort>(grid: &Grid, port: &mut P, coord: Coord) {
    port.draw_cell(coord, grid.cell(coord), grid.cell_rect(coord));
    port.refresh();
}
