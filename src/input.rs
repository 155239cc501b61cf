use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::context::{InputEvent, InputSource};
use crate::snake::Direction::*;

/// Reads pending key presses from the terminal.
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        TermInput
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TermInput {
    fn drain(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("Error polling terminal events")? {
            if let Event::Key(ev) = read().context("Error reading terminal event")? {
                events.extend(map_key(&ev));
            }
        }

        Ok(events)
    }
}

pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(ev) {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::KeyDown(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(InputEvent::KeyDown(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(InputEvent::KeyDown(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(InputEvent::KeyDown(Right)),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
