use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::context::{Clock, GameContext, InputEvent, InputSource};
use crate::draw::{Drawable, Surface};
use crate::grid::Board;
use crate::snake::Snake;

const PAUSE_MESSAGE: &[&str] = &["Paused", "Esc or P to resume", "Q or CTRL+C to quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Moved,
    AteApple,
    Collided,
    Paused,
    Quit,
}

pub struct GameLoop<C, I, S> {
    ctx: GameContext<C, I, S>,
    config: GameConfig,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
    paused: bool,
}

impl<C: Clock, I: InputSource, S: Surface> GameLoop<C, I, S> {
    pub fn new(ctx: GameContext<C, I, S>, config: GameConfig, mut rng: StdRng) -> Self {
        let board = Board::from_config(&config);
        let snake = Snake::new(board, &config.palette);
        let apple = Apple::new(board, &config.palette, &snake.occupied(), &mut rng);

        GameLoop { ctx, config, snake, apple, rng, paused: false }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn into_context(self) -> GameContext<C, I, S> {
        self.ctx
    }

    /// Runs until the player quits.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "Starting on a {}x{} board at {} ticks/s",
            self.config.grid_width(), self.config.grid_height(), self.config.speed
        );

        self.ctx.surface.clear(self.config.palette.background)?;
        self.snake.draw(&mut self.ctx.surface)?;
        self.ctx.surface.present()?;

        loop {
            if self.step()? == TickResult::Quit {
                info!("Quit with snake length {}", self.snake.length());
                return Ok(());
            }
        }
    }

    /// One tick: wait for the clock, apply input, move, resolve, draw.
    pub fn step(&mut self) -> Result<TickResult> {
        self.ctx.clock.tick();

        for event in self.ctx.input.drain()? {
            match event {
                InputEvent::Quit => return Ok(TickResult::Quit),
                InputEvent::KeyDown(dir) => {
                    self.snake.set_direction(dir);
                }
                InputEvent::TogglePause => self.toggle_pause()?,
            }
        }

        if self.paused {
            return Ok(TickResult::Paused);
        }

        self.snake.move_step();

        let result = if self.snake.head_position() == self.apple.position() {
            self.snake.grow();
            self.apple.randomize_position(&self.snake.occupied(), &mut self.rng);
            debug!("Ate apple, length {}, next apple at {:?}", self.snake.length(), self.apple.position());
            TickResult::AteApple
        } else if self.snake.hits_itself() {
            info!("Snake ran into itself at length {}, resetting", self.snake.length());
            self.snake.reset();
            self.ctx.surface.clear(self.config.palette.background)?;
            TickResult::Collided
        } else {
            TickResult::Moved
        };

        self.apple.draw(&mut self.ctx.surface)?;
        self.snake.draw(&mut self.ctx.surface)?;
        self.ctx.surface.present()?;

        Ok(result)
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.ctx.surface.show_message(PAUSE_MESSAGE)?;
        } else {
            self.ctx.surface.hide_message()?;
        }

        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
        Ok(())
    }

    #[cfg(test)]
    fn with_state(ctx: GameContext<C, I, S>, snake: Snake, apple: Apple, seed: u64) -> Self {
        use rand::SeedableRng;

        GameLoop {
            ctx,
            config: GameConfig::default(),
            snake,
            apple,
            rng: StdRng::seed_from_u64(seed),
            paused: false,
        }
    }
}
