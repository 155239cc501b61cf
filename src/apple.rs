use anyhow::Result;
use log::warn;
use rand::Rng;

use crate::config::Palette;
use crate::draw::{Color, Drawable, Surface};
use crate::grid::{Board, Cell};

// Random draws per board cell before falling back to a scan.
const SAMPLES_PER_CELL: usize = 4;

pub struct Apple {
    board: Board,
    position: Cell,
    color: Color,
    border: Color,
}

impl Apple {
    /// Places the apple on a cell not in `occupied`.
    pub fn new<R: Rng + ?Sized>(board: Board, palette: &Palette, occupied: &[Cell], rng: &mut R) -> Self {
        let mut apple = Apple {
            board,
            position: board.centre(),
            color: palette.apple,
            border: palette.apple_border,
        };
        apple.randomize_position(occupied, rng);
        apple
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a random cell outside `occupied`.
    ///
    /// Samples uniformly a bounded number of times, then takes the first free
    /// cell in row order. Returns `false` and leaves the apple in place when
    /// the whole board is occupied.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, occupied: &[Cell], rng: &mut R) -> bool {
        let attempts = self.board.capacity() * SAMPLES_PER_CELL;

        for _ in 0..attempts {
            let candidate = self.board.random_cell(rng);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }

        warn!("No free cell after {} samples, scanning the board", attempts);

        match self.board.cells().find(|cell| !occupied.contains(cell)) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => {
                warn!("Board is full, apple stays at {:?}", self.position);
                false
            }
        }
    }

    #[cfg(test)]
    pub fn at(board: Board, position: Cell) -> Self {
        let palette = Palette::default();
        Apple { board, position, color: palette.apple, border: palette.apple_border }
    }
}

impl Drawable for Apple {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.fill_cell(self.position, self.color, self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new_apple_avoids_snake() {
        let board = Board::new(640, 480, 20);
        let occupied = [board.centre()];

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let apple = Apple::new(board, &Palette::default(), &occupied, &mut rng);
            assert_ne!(apple.position(), board.centre());
        }
    }

    #[test]
    fn test_randomize_never_lands_on_occupied() {
        let board = Board::new(100, 60, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let occupied: Vec<Cell> = board.cells().filter(|c| c.x < 80).collect();
        let mut apple = Apple::at(board, Cell::new(0, 0));

        for _ in 0..100 {
            assert!(apple.randomize_position(&occupied, &mut rng));
            assert!(!occupied.contains(&apple.position()));
            assert_eq!(apple.position().x, 80);
        }
    }

    #[test]
    fn test_scan_finds_single_free_cell() {
        let board = Board::new(640, 480, 20);
        let free = Cell::new(460, 300);
        let occupied: Vec<Cell> = board.cells().filter(|&c| c != free).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut apple = Apple::at(board, Cell::new(0, 0));

        assert!(apple.randomize_position(&occupied, &mut rng));
        assert_eq!(apple.position(), free);
    }

    #[test]
    fn test_full_board_leaves_apple_in_place() {
        let board = Board::new(40, 40, 20);
        let occupied: Vec<Cell> = board.cells().collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::at(board, Cell::new(20, 20));

        assert!(!apple.randomize_position(&occupied, &mut rng));
        assert_eq!(apple.position(), Cell::new(20, 20));
    }
}
