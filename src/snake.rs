use anyhow::Result;

use crate::config::Palette;
use crate::draw::{Color, Drawable, Surface};
use crate::grid::{Board, Cell};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub struct Snake {
    board: Board,
    positions: Vec<Cell>,
    direction: Direction,
    length: usize,
    last_removed: Option<Cell>,
    color: Color,
    border: Color,
    background: Color,
}

impl Snake {
    pub fn new(board: Board, palette: &Palette) -> Self {
        let mut snake = Snake {
            board,
            positions: vec![],
            direction: Right,
            length: 1,
            last_removed: None,
            color: palette.snake,
            border: palette.snake_border,
            background: palette.background,
        };
        snake.reset();
        snake
    }

    /// Head first.
    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn head_position(&self) -> Cell {
        self.positions[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    /// Returns whether the direction changed. Reversing straight into the body is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        match (&new_direction, &self.direction) {
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right) => false,
            _ => {
                self.direction = new_direction;
                true
            }
        }
    }

    pub fn move_step(&mut self) {
        let new_head = self.board.step(self.head_position(), self.direction.delta());
        self.positions.insert(0, new_head);

        self.last_removed = if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        };
    }

    /// Takes effect on the next move, which keeps the tail instead of dropping it.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        self.length = 1;
        self.positions = vec![self.board.centre()];
        self.direction = Right;
        self.last_removed = None;
    }

    /// Body cells plus the cell vacated by the last move, which is erased when the snake is drawn.
    pub fn occupied(&self) -> Vec<Cell> {
        self.positions.iter().copied().chain(self.last_removed).collect()
    }

    /// True when the head sits on any other body cell.
    pub fn hits_itself(&self) -> bool {
        self.positions[1..].contains(&self.head_position())
    }

    #[cfg(test)]
    pub fn with_body(board: Board, positions: Vec<Cell>, direction: Direction) -> Self {
        let mut snake = Snake::new(board, &Palette::default());
        snake.length = positions.len();
        snake.positions = positions;
        snake.direction = direction;
        snake
    }
}

impl Drawable for Snake {
    /// Only the head and the vacated tail cell change between frames.
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.fill_cell(self.head_position(), self.color, self.border)?;

        if let Some(tail) = self.last_removed {
            surface.clear_cell(tail, self.background)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [Up, Down, Left, Right];

    fn board() -> Board {
        Board::new(640, 480, 20)
    }

    fn snake() -> Snake {
        Snake::new(board(), &Palette::default())
    }

    #[test]
    fn test_new_snake_is_reset() {
        let snake = snake();
        assert_eq!(snake.positions(), &[Cell::new(320, 240)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.last_removed(), None);
    }

    #[test]
    fn test_set_direction_rejects_only_opposite() {
        for &current in ALL.iter() {
            for &wanted in ALL.iter() {
                let mut snake = snake();
                snake.direction = current;

                let changed = snake.set_direction(wanted);

                if wanted == current.opposite() {
                    assert!(!changed);
                    assert_eq!(snake.direction(), current);
                } else {
                    assert!(changed);
                    assert_eq!(snake.direction(), wanted);
                }
            }
        }
    }

    #[test]
    fn test_move_wraps_right_edge() {
        let mut snake = Snake::with_body(board(), vec![Cell::new(620, 0)], Right);
        snake.move_step();
        assert_eq!(snake.head_position(), Cell::new(0, 0));
    }

    #[test]
    fn test_move_wraps_left_and_top() {
        let mut snake = Snake::with_body(board(), vec![Cell::new(0, 0)], Left);
        snake.move_step();
        assert_eq!(snake.head_position(), Cell::new(620, 0));

        snake.set_direction(Up);
        snake.move_step();
        assert_eq!(snake.head_position(), Cell::new(620, 460));
    }

    #[test]
    fn test_move_keeps_length() {
        let mut snake = Snake::with_body(
            board(),
            vec![Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)],
            Right,
        );

        snake.move_step();

        assert_eq!(
            snake.positions(),
            &[Cell::new(120, 100), Cell::new(100, 100), Cell::new(80, 100)]
        );
        assert_eq!(snake.last_removed(), Some(Cell::new(60, 100)));
        assert_eq!(snake.occupied().len(), 4);
        assert!(snake.occupied().contains(&Cell::new(60, 100)));
    }

    #[test]
    fn test_grow_keeps_tail_on_next_moves() {
        let mut snake = snake();
        snake.grow();
        snake.grow();

        snake.move_step();
        assert_eq!(snake.positions().len(), 2);
        assert_eq!(snake.last_removed(), None);

        snake.move_step();
        assert_eq!(snake.positions().len(), 3);
        assert_eq!(snake.last_removed(), None);

        snake.move_step();
        assert_eq!(snake.positions().len(), 3);
        assert_eq!(snake.last_removed(), Some(Cell::new(320, 240)));
    }

    #[test]
    fn test_positions_never_exceed_length() {
        let mut snake = snake();
        let turns = [Up, Left, Down, Down, Right, Up, Right];

        for (i, &dir) in turns.iter().cycle().take(60).enumerate() {
            let before = snake.positions().len();
            if i % 3 == 0 {
                snake.grow();
            }
            snake.set_direction(dir);
            snake.move_step();
            assert_eq!(snake.positions().len(), snake.length().min(before + 1));
        }
    }

    #[test]
    fn test_hits_itself_after_move() {
        let mut snake = Snake::with_body(
            board(),
            vec![
                Cell::new(100, 100),
                Cell::new(120, 100),
                Cell::new(120, 120),
                Cell::new(100, 120),
                Cell::new(80, 120),
            ],
            Down,
        );
        assert!(!snake.hits_itself());

        snake.move_step();
        assert!(snake.hits_itself());

        snake.reset();
        assert_eq!(snake.positions(), &[Cell::new(320, 240)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Right);
    }
}
