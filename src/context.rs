use std::time::Duration;

use anyhow::Result;

use crate::draw::Surface;
use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Direction),
    TogglePause,
    Quit,
}

/// Fixed-rate frame clock.
pub trait Clock {
    /// Blocks until the next frame boundary and returns the time since the previous tick.
    fn tick(&mut self) -> Duration;
}

pub trait InputSource {
    /// Every event that arrived since the last call, oldest first. Never blocks for long.
    fn drain(&mut self) -> Result<Vec<InputEvent>>;
}

/// The collaborators the game loop talks to, wired up once at startup.
pub struct GameContext<C, I, S> {
    pub clock: C,
    pub input: I,
    pub surface: S,
}

impl<C: Clock, I: InputSource, S: Surface> GameContext<C, I, S> {
    pub fn new(clock: C, input: I, surface: S) -> Self {
        GameContext { clock, input, surface }
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
