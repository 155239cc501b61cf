use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{Config, LevelFilter, WriteLogger};

use torus_snake::clock::FrameClock;
use torus_snake::config::GameConfig;
use torus_snake::context::GameContext;
use torus_snake::game::GameLoop;
use torus_snake::grid::Board;
use torus_snake::input::TermInput;
use torus_snake::term::TermSurface;

fn main() -> Result<()> {
    let config = GameConfig::default();

    // The terminal is in raw mode while playing, so logs go to a file
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Error creating log file {}", config.log_file))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("Error initializing logger")?;

    info!("Starting torus-snake");

    let mut surface = TermSurface::new(Board::from_config(&config), config.palette)?;
    surface.setup()?;

    let clock = FrameClock::new(config.tick_period());
    let ctx = GameContext::new(clock, TermInput::new(), surface);
    let mut game = GameLoop::new(ctx, config, StdRng::from_entropy());

    // Quitting ends the loop with Ok, errors end it early; restore the terminal either way
    let result = game.run();
    game.into_context().into_surface().restore()?;

    if let Err(e) = &result {
        error!("{:#}", e);
    }

    result
}
