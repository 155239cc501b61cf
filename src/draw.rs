use anyhow::Result;

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Where the game draws itself. Positions are board cells in pixels.
pub trait Surface {
    fn fill_cell(&mut self, pos: Cell, fill: Color, border: Color) -> Result<()>;

    /// Paint a single cell with the background, no border.
    fn clear_cell(&mut self, pos: Cell, color: Color) -> Result<()>;

    fn clear(&mut self, color: Color) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    fn show_message(&mut self, _lines: &[&str]) -> Result<()> {
        Ok(())
    }

    fn hide_message(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()>;
}
