//! Depth-first maze solver.
//!
//! The solver walks from the entrance towards the exit using the cells' visited marks as its own
//! bookkeeping. From each cell it tries the directions in [`Direction::ALL`] order (left, right,
//! up, down) and only steps through open walls into cells it has not seen yet. Once every
//! direction out of a cell has failed, the cell is abandoned for good, so each cell is entered at
//! most once and the work is linear in the size of the grid.
//!
//! As with the generator, the walk keeps an explicit stack of frames instead of recursing.

use crate::{
    cell::{Coord, Direction},
    grid::Grid,
    render::RenderPort,
};

/// A cell on the current path together with the next direction to try from it.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Cell this frame explores.
    coord: Coord,
    /// Index into [`Direction::ALL`] of the next direction to try.
    next: usize,
}

impl Frame {
    /// Creates a frame that has not tried any direction yet.
    const fn new(coord: Coord) -> Self {
        Self { coord, next: 0 }
    }
}

/// Searches for a path from the entrance to the exit.
///
/// Every visited mark is cleared before the search so repeated calls give the same answer. On
/// success the returned path starts at the entrance and ends at the exit; [`None`] means the exit
/// cannot be reached, which is a normal outcome for hand-built grids.
///
/// The port is told about every forward step with `undo` unset and about every step taken back
/// with `undo` set, always as `(cell, neighbour)`.
pub fn solve<P: RenderPort>(grid: &mut Grid, port: &mut P) -> Option<Vec<Coord>> {
    grid.reset_visited();

    let target = grid.exit();
    let entrance = grid.entrance();
    enter(grid, port, entrance);
    if entrance == target {
        tracing::debug!(steps = 0, "maze solved");
        return Some(vec![entrance]);
    }

    let mut stack = vec![Frame::new(entrance)];
    let mut steps = 0_usize;

    while let Some(frame) = stack.last_mut() {
        let current = frame.coord;

        let Some(&direction) = Direction::ALL.get(frame.next) else {
            // Every direction failed; give the cell up and tell the parent its step was undone.
            let _ = stack.pop();
            if let Some(parent) = stack.last() {
                port.draw_move(parent.coord, current, true);
                port.refresh();
            }
            continue;
        };
        frame.next += 1;

        let Some(neighbor) = grid.neighbor(current, direction) else {
            continue;
        };
        if grid.is_visited(neighbor) || !grid.is_wall_open(current, neighbor) {
            continue;
        }

        port.draw_move(current, neighbor, false);
        enter(grid, port, neighbor);
        steps += 1;

        if neighbor == target {
            let mut path: Vec<Coord> = stack.iter().map(|frame| frame.coord).collect();
            path.push(neighbor);
            tracing::debug!(steps, length = path.len(), "maze solved");
            return Some(path);
        }

        stack.push(Frame::new(neighbor));
    }

    tracing::debug!(steps, "maze has no solution");
    None
}

/// Marks a cell as reached by the solver and refreshes the port.
fn enter<P: RenderPort>(grid: &mut Grid, port: &mut P, coord: Coord) {
    port.refresh();
    grid.mark_visited(coord);
}
