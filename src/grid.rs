use rand::Rng;

use crate::config::GameConfig;

/// A cell on the board, in pixels. Both coordinates are multiples of the grid unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Toroidal board: every edge connects to the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    unit: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, unit: i32) -> Self {
        Board { width, height, unit }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Board::new(config.screen_width, config.screen_height, config.grid_size)
    }

    pub fn cols(&self) -> i32 {
        self.width / self.unit
    }

    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    pub fn capacity(&self) -> usize {
        (self.cols() * self.rows()) as usize
    }

    pub fn centre(&self) -> Cell {
        Cell::new(self.cols() / 2 * self.unit, self.rows() / 2 * self.unit)
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// The cell one grid unit away from `cell` along `(dx, dy)`, wrapped.
    pub fn step(&self, cell: Cell, (dx, dy): (i32, i32)) -> Cell {
        self.wrap(Cell::new(cell.x + dx * self.unit, cell.y + dy * self.unit))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..self.cols()) * self.unit,
            rng.gen_range(0..self.rows()) * self.unit,
        )
    }

    /// Every cell of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols()).map(move |col| Cell::new(col * self.unit, row * self.unit))
        })
    }

    /// Column and row of a cell.
    pub fn grid_coords(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.unit, cell.y / self.unit)
    }
}
