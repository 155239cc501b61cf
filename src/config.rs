use std::time::Duration;

use crate::draw::Color;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;
pub const SPEED: u32 = 10;

const LOG_FILE: &str = "torus-snake.log";

/// Colours used on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub frame: Color,
    pub apple: Color,
    pub apple_border: Color,
    pub snake: Color,
    pub snake_border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::rgb(0, 0, 0),
            frame: Color::rgb(255, 255, 255),
            apple: Color::rgb(255, 0, 0),
            apple_border: Color::rgb(0, 255, 0),
            snake: Color::rgb(0, 255, 0),
            snake_border: Color::rgb(0, 255, 255),
        }
    }
}

/// Board geometry, tick rate and presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in pixels, a multiple of `grid_size`
    pub screen_width: i32,
    /// Board height in pixels, a multiple of `grid_size`
    pub screen_height: i32,
    /// Side of one cell in pixels
    pub grid_size: i32,
    /// Ticks per second
    pub speed: u32,
    pub palette: Palette,
    pub log_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_size: GRID_SIZE,
            speed: SPEED,
            palette: Palette::default(),
            log_file: LOG_FILE.to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        GameConfig { screen_width, screen_height, ..Default::default() }
    }

    pub fn grid_width(&self) -> i32 {
        self.screen_width / self.grid_size
    }

    pub fn grid_height(&self) -> i32 {
        self.screen_height / self.grid_size
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }
}
