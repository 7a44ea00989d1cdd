//! Cell, coordinate and direction types for the maze grid.
//!
//! A [`Cell`] only knows about its own four walls and whether a traversal has already passed
//! through it. Keeping shared walls consistent between neighbours is the job of the
//! [`Grid`](crate::grid::Grid).

use std::fmt;

/// Position of a cell within the grid.
///
/// Both components are bounded by the grid dimensions, which are themselves `u16`, so every
/// coordinate converts losslessly to an index and to drawing space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index, growing to the right.
    pub col: u16,
    /// Row index, growing downwards.
    pub row: u16,
}

impl Coord {
    /// Builds a coordinate from a column and a row.
    #[must_use]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Returns the coordinate one step away in the given direction, or [`None`] if that step
    /// would leave the non-negative quadrant or overflow.
    ///
    /// The result is not checked against any grid dimensions.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (delta_col, delta_row) = direction.offset();

        Some(Self {
            col: self.col.checked_add_signed(delta_col)?,
            row: self.row.checked_add_signed(delta_row)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.col, self.row)
    }
}

/// One of the four orthogonal directions a cell can be left through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
}

impl Direction {
    /// Every direction, in the order the solver tries them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the `(column, row)` delta of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i16, i16) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Returns the direction leading from `from` to `to`, or [`None`] when the two coordinates
    /// are not orthogonally adjacent.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| from.step(*direction) == Some(to))
    }
}

/// A single square of the maze.
///
/// Every wall starts closed and the cell starts unvisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each wall is an independent flag and the visited mark is unrelated state."
)]
pub struct Cell {
    /// Wall on the upper edge.
    top: bool,
    /// Wall on the lower edge.
    bottom: bool,
    /// Wall on the left edge.
    left: bool,
    /// Wall on the right edge.
    right: bool,
    /// Traversal mark shared by the generator and, after a reset, the solver.
    visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates an unvisited cell with all four walls closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
        }
    }

    /// Returns whether the wall on the given side is closed.
    #[must_use]
    pub const fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        }
    }

    /// Returns whether the top wall is closed.
    #[must_use]
    pub const fn has_top_wall(&self) -> bool {
        self.top
    }

    /// Returns whether the bottom wall is closed.
    #[must_use]
    pub const fn has_bottom_wall(&self) -> bool {
        self.bottom
    }

    /// Returns whether the left wall is closed.
    #[must_use]
    pub const fn has_left_wall(&self) -> bool {
        self.left
    }

    /// Returns whether the right wall is closed.
    #[must_use]
    pub const fn has_right_wall(&self) -> bool {
        self.right
    }

    /// Returns whether a traversal has already passed through this cell.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Opens the wall on the given side of this cell only.
    pub(crate) fn open(&mut self, side: Direction) {
        match side {
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
        }
    }

    /// Sets the traversal mark.
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed_and_unvisited() {
        let cell = Cell::new();

        for side in Direction::ALL {
            assert!(cell.has_wall(side), "new cell should have its {side:?} wall");
        }
        assert!(!cell.is_visited(), "new cell should start unvisited");
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_open_only_touches_one_side() {
        let mut cell = Cell::new();
        cell.open(Direction::Right);

        assert!(!cell.has_right_wall());
        assert!(cell.has_left_wall());
        assert!(cell.has_top_wall());
        assert!(cell.has_bottom_wall());
    }

    #[test]
    fn test_opposite_is_involutive() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_step_and_between() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Right), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Down), Some(Coord::new(0, 1)));

        assert_eq!(
            Direction::between(Coord::new(2, 3), Coord::new(2, 2)),
            Some(Direction::Up)
        );
        assert_eq!(Direction::between(Coord::new(2, 3), Coord::new(3, 4)), None);
        assert_eq!(Direction::between(Coord::new(2, 3), Coord::new(2, 3)), None);
    }

    #[test]
    fn test_step_rejects_overflow() {
        assert_eq!(Coord::new(u16::MAX, 0).step(Direction::Right), None);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
    }
}
