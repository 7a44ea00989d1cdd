//! Grid storage and the structural queries the maze algorithms rely on.
//!
//! The grid owns a column-major matrix of [`Cell`]s together with the [`Geometry`] used to place
//! each cell in drawing space. Coordinates handed to the accessors must be inside the grid; an
//! out-of-bounds coordinate is a bug in the caller and panics instead of being ignored.

use color_eyre::eyre::{ensure, Result};

use crate::cell::{Cell, Coord, Direction};

/// Largest number of cells a grid may hold, about 80 MB of cells.
pub const MAX_CELLS: u32 = 1 << 24;

/// Dimensions and drawing placement of a maze.
///
/// Only `num_rows` and `num_cols` matter to the algorithms. The origin and cell size exist so a
/// render port can be told where each cell lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Horizontal drawing coordinate of the grid's top-left corner.
    pub origin_x: f64,
    /// Vertical drawing coordinate of the grid's top-left corner.
    pub origin_y: f64,
    /// Number of rows.
    pub num_rows: u16,
    /// Number of columns.
    pub num_cols: u16,
    /// Drawing width of a single cell.
    pub cell_width: f64,
    /// Drawing height of a single cell.
    pub cell_height: f64,
}

impl Geometry {
    /// Creates a geometry anchored at the origin with unit-sized cells.
    #[must_use]
    pub const fn new(num_cols: u16, num_rows: u16) -> Self {
        Self {
            origin_x: 0.,
            origin_y: 0.,
            num_rows,
            num_cols,
            cell_width: 1.,
            cell_height: 1.,
        }
    }

    /// Returns a copy of this geometry with a different origin.
    #[must_use]
    pub const fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Returns a copy of this geometry with a different cell size.
    #[must_use]
    pub const fn with_cell_size(mut self, cell_width: f64, cell_height: f64) -> Self {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    /// Checks that the geometry describes a buildable grid.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - Either dimension is zero
    /// - The grid would hold more than [`MAX_CELLS`] cells
    /// - A cell size is not a positive, finite number
    /// - An origin component is not finite
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.num_cols > 0 && self.num_rows > 0,
            "a maze needs at least one row and one column, got {}x{}",
            self.num_cols,
            self.num_rows
        );
        let num_cells = u32::from(self.num_cols) * u32::from(self.num_rows);
        ensure!(
            num_cells <= MAX_CELLS,
            "a {}x{} maze has {num_cells} cells, more than the limit of {MAX_CELLS}",
            self.num_cols,
            self.num_rows
        );
        ensure!(
            self.cell_width.is_finite() && self.cell_width > 0.,
            "cell width must be positive and finite, got {}",
            self.cell_width
        );
        ensure!(
            self.cell_height.is_finite() && self.cell_height > 0.,
            "cell height must be positive and finite, got {}",
            self.cell_height
        );
        ensure!(
            self.origin_x.is_finite() && self.origin_y.is_finite(),
            "origin must be finite, got ({}, {})",
            self.origin_x,
            self.origin_y
        );

        Ok(())
    }
}

/// Axis-aligned drawing rectangle, with `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    /// Left edge.
    pub x1: f64,
    /// Top edge.
    pub y1: f64,
    /// Right edge.
    pub x2: f64,
    /// Bottom edge.
    pub y2: f64,
}

impl CellRect {
    /// Returns the centre point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2., (self.y1 + self.y2) / 2.)
    }
}

/// Fixed-size matrix of cells indexed `[column][row]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Cell storage, one inner vector per column.
    cells: Vec<Vec<Cell>>,
    /// Dimensions and drawing placement, immutable after construction.
    geometry: Geometry,
}

impl Grid {
    /// Builds a grid where every cell has all four walls closed and is unvisited.
    ///
    /// # Errors
    ///
    /// This function returns the errors of [`Geometry::validate`].
    pub fn new(geometry: Geometry) -> Result<Self> {
        geometry.validate()?;

        Ok(Self {
            cells: vec![vec![Cell::new(); geometry.num_rows.into()]; geometry.num_cols.into()],
            geometry,
        })
    }

    /// Returns the geometry the grid was built with.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn num_cols(&self) -> u16 {
        self.geometry.num_cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn num_rows(&self) -> u16 {
        self.geometry.num_rows
    }

    /// Returns the top-left cell, where both traversals start.
    #[must_use]
    pub const fn entrance(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// Returns the bottom-right cell, which the solver is looking for.
    #[must_use]
    pub const fn exit(&self) -> Coord {
        Coord::new(self.geometry.num_cols - 1, self.geometry.num_rows - 1)
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.col < self.geometry.num_cols && coord.row < self.geometry.num_rows
    }

    /// Iterates over every coordinate, column by column.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let num_rows = self.num_rows();

        (0..self.num_cols()).flat_map(move |col| (0..num_rows).map(move |row| Coord::new(col, row)))
    }

    /// Returns the cell at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> &Cell {
        self.cells
            .get(usize::from(coord.col))
            .and_then(|column| column.get(usize::from(coord.row)))
            .unwrap_or_else(|| {
                panic!(
                    "cell {coord} is outside the {}x{} grid",
                    self.geometry.num_cols, self.geometry.num_rows
                )
            })
    }

    /// Returns the cell at the given coordinate for mutation.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let (num_cols, num_rows) = (self.geometry.num_cols, self.geometry.num_rows);

        self.cells
            .get_mut(usize::from(coord.col))
            .and_then(|column| column.get_mut(usize::from(coord.row)))
            .unwrap_or_else(|| panic!("cell {coord} is outside the {num_cols}x{num_rows} grid"))
    }

    /// Returns the in-bounds neighbour in the given direction, if there is one.
    #[must_use]
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord
            .step(direction)
            .filter(|neighbor| self.contains(*neighbor))
    }

    /// Opens the wall shared by two adjacent cells, updating both sides.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid or the cells are not adjacent.
    pub fn break_wall_between(&mut self, from: Coord, to: Coord) {
        let direction = Direction::between(from, to)
            .unwrap_or_else(|| panic!("cells {from} and {to} do not share a wall"));
        assert!(self.contains(to), "cell {to} is outside the grid");

        self.cell_mut(from).open(direction);
        self.cell_mut(to).open(direction.opposite());
    }

    /// Returns whether the wall between two adjacent cells is open.
    ///
    /// The flag is read on the `to` side; with consistent shared walls either side gives the same
    /// answer.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid or the cells are not adjacent.
    #[must_use]
    pub fn is_wall_open(&self, from: Coord, to: Coord) -> bool {
        let direction = Direction::between(from, to)
            .unwrap_or_else(|| panic!("cells {from} and {to} do not share a wall"));
        assert!(self.contains(from), "cell {from} is outside the grid");

        !self.cell(to).has_wall(direction.opposite())
    }

    /// Opens the top wall of the entrance and the bottom wall of the exit.
    pub fn open_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());

        self.cell_mut(entrance).open(Direction::Up);
        self.cell_mut(exit).open(Direction::Down);
    }

    /// Marks a cell as visited.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn mark_visited(&mut self, coord: Coord) {
        self.cell_mut(coord).set_visited(true);
    }

    /// Returns whether a cell has been visited.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[must_use]
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_visited()
    }

    /// Clears the visited mark of every cell.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_visited(false);
        }
    }

    /// Returns the drawing rectangle of a cell.
    #[must_use]
    pub fn cell_rect(&self, coord: Coord) -> CellRect {
        let geometry = &self.geometry;
        let x1 = f64::from(coord.col).mul_add(geometry.cell_width, geometry.origin_x);
        let y1 = f64::from(coord.row).mul_add(geometry.cell_height, geometry.origin_y);

        CellRect {
            x1,
            y1,
            x2: x1 + geometry.cell_width,
            y2: y1 + geometry.cell_height,
        }
    }

    /// Returns the drawing rectangle covering the whole grid.
    #[must_use]
    pub fn bounds(&self) -> CellRect {
        let geometry = &self.geometry;

        CellRect {
            x1: geometry.origin_x,
            y1: geometry.origin_y,
            x2: f64::from(geometry.num_cols).mul_add(geometry.cell_width, geometry.origin_x),
            y2: f64::from(geometry.num_rows).mul_add(geometry.cell_height, geometry.origin_y),
        }
    }
}
