//! Render port and the port implementations shipped with the crate.
//!
//! The maze algorithms never draw anything themselves. They report what changed through a
//! [`RenderPort`], and every method of the trait defaults to doing nothing, so a port only has to
//! implement the callbacks it cares about. Nothing a port does can influence the generated maze
//! or the solver's answer.

use std::{fmt::Write as _, thread, time::Duration};

use crate::{
    cell::{Cell, Coord},
    grid::{CellRect, Grid},
};

/// Drawing surface the maze algorithms report to.
pub trait RenderPort {
    /// Called once per cell after the grid is built and again whenever the cell's walls change.
    fn draw_cell(&mut self, coord: Coord, cell: &Cell, rect: CellRect) {
        let _ = (coord, cell, rect);
    }

    /// Called by the solver when it steps from `from` into `to`, and with `undo` set when that
    /// step is taken back.
    fn draw_move(&mut self, from: Coord, to: Coord, undo: bool) {
        let _ = (from, to, undo);
    }

    /// Called after every draw. This is where a port would flush its output or wait between
    /// animation frames.
    fn refresh(&mut self) {}
}

impl<P: RenderPort + ?Sized> RenderPort for &mut P {
    fn draw_cell(&mut self, coord: Coord, cell: &Cell, rect: CellRect) {
        (**self).draw_cell(coord, cell, rect);
    }

    fn draw_move(&mut self, from: Coord, to: Coord, undo: bool) {
        (**self).draw_move(from, to, undo);
    }

    fn refresh(&mut self) {
        (**self).refresh();
    }
}

/// Port that ignores every callback, for headless use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopPort;

impl RenderPort for NoopPort {}

/// A single callback received by a [`Recorder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderEvent {
    /// A [`RenderPort::draw_cell`] call, with a snapshot of the cell at that moment.
    Cell {
        /// Position of the drawn cell.
        coord: Coord,
        /// Wall state at the time of the call.
        cell: Cell,
        /// Drawing rectangle of the cell.
        rect: CellRect,
    },
    /// A [`RenderPort::draw_move`] call.
    Move {
        /// Cell the solver is standing on.
        from: Coord,
        /// Cell being entered, or left again when `undo` is set.
        to: Coord,
        /// Whether the move is being taken back.
        undo: bool,
    },
    /// A [`RenderPort::refresh`] call.
    Refresh,
}

/// Port that keeps every callback in order for later playback or inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Everything received so far, oldest first.
    events: Vec<RenderEvent>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Iterates over the recorded solver moves as `(from, to, undo)` triples.
    pub fn moves(&self) -> impl Iterator<Item = (Coord, Coord, bool)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            RenderEvent::Move { from, to, undo } => Some((from, to, undo)),
            RenderEvent::Cell { .. } | RenderEvent::Refresh => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RenderPort for Recorder {
    fn draw_cell(&mut self, coord: Coord, cell: &Cell, rect: CellRect) {
        self.events.push(RenderEvent::Cell {
            coord,
            cell: *cell,
            rect,
        });
    }

    fn draw_move(&mut self, from: Coord, to: Coord, undo: bool) {
        self.events.push(RenderEvent::Move { from, to, undo });
    }

    fn refresh(&mut self) {
        self.events.push(RenderEvent::Refresh);
    }
}

/// Port that logs every callback through [`tracing`] at trace level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingPort;

impl RenderPort for TracingPort {
    fn draw_cell(&mut self, coord: Coord, cell: &Cell, rect: CellRect) {
        tracing::trace!(
            %coord,
            top = cell.has_top_wall(),
            bottom = cell.has_bottom_wall(),
            left = cell.has_left_wall(),
            right = cell.has_right_wall(),
            x1 = rect.x1,
            y1 = rect.y1,
            "draw cell"
        );
    }

    fn draw_move(&mut self, from: Coord, to: Coord, undo: bool) {
        tracing::trace!(%from, %to, undo, "draw move");
    }
}

/// Port wrapper that waits a fixed delay on every refresh, for watching a run unfold.
///
/// A zero delay turns the wrapper into a plain pass-through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paced<P> {
    /// The wrapped port, which still receives every callback.
    inner: P,
    /// Time to sleep after forwarding each refresh.
    delay: Duration,
}

impl<P: RenderPort> Paced<P> {
    /// Wraps a port so each refresh is followed by `delay`.
    #[must_use]
    pub const fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Returns the time waited after each refresh.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the wrapped port.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: RenderPort> RenderPort for Paced<P> {
    fn draw_cell(&mut self, coord: Coord, cell: &Cell, rect: CellRect) {
        self.inner.draw_cell(coord, cell, rect);
    }

    fn draw_move(&mut self, from: Coord, to: Coord, undo: bool) {
        self.inner.draw_move(from, to, undo);
    }

    fn refresh(&mut self) {
        self.inner.refresh();
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Draws a grid as text, four columns per cell, marking the cells of `path` with `*`.
///
/// Corners are `+`, closed horizontal walls `---` and closed vertical walls `|`. Open walls are
/// left blank, so the entrance shows as a gap in the top edge and the exit as a gap in the
/// bottom edge.
#[must_use]
pub fn ascii(grid: &Grid, path: &[Coord]) -> String {
    let mut out = String::new();

    for row in 0..grid.num_rows() {
        out.push('+');
        for col in 0..grid.num_cols() {
            let cell = grid.cell(Coord::new(col, row));
            out.push_str(if cell.has_top_wall() { "---+" } else { "   +" });
        }
        out.push('\n');

        for col in 0..grid.num_cols() {
            let coord = Coord::new(col, row);
            let cell = grid.cell(coord);
            out.push(if cell.has_left_wall() { '|' } else { ' ' });
            out.push_str(if path.contains(&coord) { " * " } else { "   " });
        }
        let last = grid.cell(Coord::new(grid.num_cols() - 1, row));
        out.push(if last.has_right_wall() { '|' } else { ' ' });
        out.push('\n');
    }

    out.push('+');
    for col in 0..grid.num_cols() {
        let cell = grid.cell(Coord::new(col, grid.num_rows() - 1));
        out.push_str(if cell.has_bottom_wall() { "---+" } else { "   +" });
    }
    out.push('\n');

    out
}

/// Summarises a solved path as `(c, r) -> (c, r) -> ...`.
#[must_use]
pub fn describe_path(path: &[Coord]) -> String {
    let mut out = String::new();

    for (idx, coord) in path.iter().enumerate() {
        if idx > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{coord}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Geometry;

    /// Builds a closed grid of the given size with unit cells.
    fn closed_grid(num_cols: u16, num_rows: u16) -> Grid {
        Grid::new(Geometry::new(num_cols, num_rows)).expect("geometry should be valid")
    }

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = Recorder::new();
        let cell = Cell::new();
        let rect = CellRect {
            x1: 0.,
            y1: 0.,
            x2: 1.,
            y2: 1.,
        };

        recorder.draw_cell(Coord::new(0, 0), &cell, rect);
        recorder.refresh();
        recorder.draw_move(Coord::new(0, 0), Coord::new(1, 0), false);
        recorder.draw_move(Coord::new(0, 0), Coord::new(1, 0), true);

        assert_eq!(recorder.events().len(), 4);
        assert_eq!(
            recorder.events().first(),
            Some(&RenderEvent::Cell {
                coord: Coord::new(0, 0),
                cell,
                rect
            })
        );
        assert_eq!(
            recorder.moves().collect::<Vec<_>>(),
            vec![
                (Coord::new(0, 0), Coord::new(1, 0), false),
                (Coord::new(0, 0), Coord::new(1, 0), true)
            ]
        );

        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    /// Drives a port by value, the way the maze algorithms do.
    fn drive<P: RenderPort>(mut port: P) {
        port.refresh();
        port.draw_move(Coord::new(0, 0), Coord::new(0, 1), false);
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut recorder = Recorder::new();
        drive(&mut recorder);

        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn test_paced_forwards_without_delay() {
        let mut paced = Paced::new(Recorder::new(), Duration::ZERO);
        paced.refresh();
        paced.draw_move(Coord::new(0, 0), Coord::new(0, 1), true);

        assert_eq!(paced.delay(), Duration::ZERO);
        let recorder = paced.into_inner();
        assert_eq!(
            recorder.events(),
            &[
                RenderEvent::Refresh,
                RenderEvent::Move {
                    from: Coord::new(0, 0),
                    to: Coord::new(0, 1),
                    undo: true
                }
            ]
        );
    }

    #[test]
    fn test_noop_and_tracing_ports_accept_everything() {
        let cell = Cell::new();
        let rect = closed_grid(1, 1).cell_rect(Coord::new(0, 0));

        let mut noop = NoopPort;
        noop.draw_cell(Coord::new(0, 0), &cell, rect);
        noop.draw_move(Coord::new(0, 0), Coord::new(0, 1), false);
        noop.refresh();

        let mut tracing_port = TracingPort;
        tracing_port.draw_cell(Coord::new(0, 0), &cell, rect);
        tracing_port.draw_move(Coord::new(0, 0), Coord::new(0, 1), false);
        tracing_port.refresh();
    }

    #[test]
    fn test_ascii_closed_grid() {
        let grid = closed_grid(2, 1);

        assert_eq!(ascii(&grid, &[]), "+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn test_ascii_shows_openings_and_path() {
        let mut grid = closed_grid(2, 2);
        grid.open_entrance_and_exit();
        grid.break_wall_between(Coord::new(0, 0), Coord::new(1, 0));
        grid.break_wall_between(Coord::new(1, 0), Coord::new(1, 1));

        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)];
        let expected = "\
+   +---+
| *   * |
+---+   +
|   | * |
+---+   +
";

        assert_eq!(ascii(&grid, &path), expected);
    }

    #[test]
    fn test_describe_path() {
        assert_eq!(describe_path(&[]), "");
        assert_eq!(
            describe_path(&[Coord::new(0, 0), Coord::new(0, 1)]),
            "(0, 0) -> (0, 1)"
        );
    }
}
