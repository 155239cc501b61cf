pub mod apple;
pub mod clock;
pub mod config;
pub mod context;
pub mod draw;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod term;
