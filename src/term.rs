use std::io::{stdout, Stdout, Write};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::debug;

use crate::config::Palette;
use crate::draw::{Color, Surface};
use crate::grid::{Board, Cell};

type TermInt = u16;
type Coords = (TermInt, TermInt);

const TITLE: &str = "Snake";
const CELL_WIDTH: TermInt = 2;
const CELL_CHARS: [char; 2] = ['[', ']'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Draws the board in the terminal, two columns per cell, inside a frame.
pub struct TermSurface {
    board: Board,
    width: TermInt,
    height: TermInt,
    palette: Palette,
    stdout: Stdout,
    screen: Vec<Glyph>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermSurface {
    pub fn new(board: Board, palette: Palette) -> Result<Self> {
        let (width, height) = frame_size(&board);
        let (term_w, term_h) = terminal::size().context("Error reading terminal size")?;

        if term_w < width || term_h < height {
            bail!("Terminal is {}x{}, the board needs at least {}x{}", term_w, term_h, width, height);
        }

        let blank = Glyph { ch: ' ', fg: palette.frame, bg: palette.background };
        let screen = vec![blank; width as usize * height as usize];

        Ok(TermSurface { board, width, height, palette, stdout: stdout(), screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(TITLE))
            .context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        debug!("Terminal ready, frame is {}x{}", self.width, self.height);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    fn draw_borders(&mut self) -> Result<()> {
        let (end_x, end_y) = (self.width - 1, self.height - 1);

        for x in 0..self.width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        let glyph = Glyph { ch, fg: self.palette.frame, bg: self.palette.background };
        self.put(pos, glyph)
    }

    fn put_cell(&mut self, cell: Cell, chars: [char; 2], fg: Color, bg: Color) -> Result<()> {
        let (x, y) = self.to_term(cell);
        for (i, &ch) in chars.iter().enumerate() {
            self.put((x + i as TermInt, y), Glyph { ch, fg, bg })?;
        }
        Ok(())
    }

    fn put(&mut self, pos: Coords, glyph: Glyph) -> Result<()> {
        let idx = self.width as usize * pos.1 as usize + pos.0 as usize;
        self.screen[idx] = glyph;

        // Under a message the buffer is updated but the screen is left alone
        // until the message goes away.
        if self.covered_by_message(pos) {
            return Ok(());
        }

        self.print_glyph(pos, glyph)
    }

    fn print_glyph(&mut self, pos: Coords, glyph: Glyph) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(term_color(glyph.fg)),
            style::SetBackgroundColor(term_color(glyph.bg)),
            style::Print(glyph.ch),
            style::ResetColor
        )
        .context("Error printing to terminal")
    }

    fn to_term(&self, cell: Cell) -> Coords {
        let (col, row) = self.board.grid_coords(cell);
        (1 + col as TermInt * CELL_WIDTH, 1 + row as TermInt)
    }

    fn covered_by_message(&self, pos: Coords) -> bool {
        match &self.current_msg {
            Some(msg) => msg.contains(pos),
            None => false,
        }
    }
}

impl Surface for TermSurface {
    fn fill_cell(&mut self, pos: Cell, fill: Color, border: Color) -> Result<()> {
        self.put_cell(pos, CELL_CHARS, border, fill)
    }

    fn clear_cell(&mut self, pos: Cell, color: Color) -> Result<()> {
        self.put_cell(pos, [' ', ' '], color, color)
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;

        let blank = Glyph { ch: ' ', fg: self.palette.frame, bg: color };
        self.screen = vec![blank; self.width as usize * self.height as usize];

        let cells: Vec<Cell> = self.board.cells().collect();
        for cell in cells {
            self.clear_cell(cell, color)?;
        }

        self.draw_borders()
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.current_msg.is_some() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );
        let (fg, bg) = (self.palette.frame, self.palette.background);
        let glyph = move |ch| Glyph { ch, fg, bg };

        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_glyph((top_left.0 + x_diff, *y), glyph(' '))?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_glyph((top_left.0 + x_diff as TermInt, y), glyph(ch))?;
            }
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.present()
    }

    fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Restore what the message covered from the screen buffer
        for y in msg.top_left.1..msg.top_left.1 + msg.height {
            for x in msg.top_left.0..msg.top_left.0 + msg.width {
                if x >= self.width || y >= self.height {
                    continue;
                }
                let glyph = self.screen[self.width as usize * y as usize + x as usize];
                self.print_glyph((x, y), glyph)?;
            }
        }

        self.present()
    }
}

impl Message {
    fn contains(&self, pos: Coords) -> bool {
        pos.0 >= self.top_left.0 && pos.0 < self.top_left.0 + self.width &&
        pos.1 >= self.top_left.1 && pos.1 < self.top_left.1 + self.height
    }
}

/// Frame size in terminal columns and rows, borders included.
fn frame_size(board: &Board) -> Coords {
    (board.cols() as TermInt * CELL_WIDTH + 2, board.rows() as TermInt + 2)
}

fn term_color(c: Color) -> style::Color {
    style::Color::Rgb { r: c.r, g: c.g, b: c.b }
}
