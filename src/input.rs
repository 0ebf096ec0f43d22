use log::debug;
use macroquad::prelude::{KeyCode, is_key_pressed, is_quit_requested};

use crate::grid::Direction;
use crate::snake::Snake;

/// One discrete event from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
}

/// Whether the game loop should keep going after a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Non-blocking source of input events.
pub trait InputSource {
    /// Returns every event that arrived since the previous call.
    fn drain(&mut self) -> Vec<InputEvent>;
}

const STEERING_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

/// Maps a key to the direction it steers, if any.
pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Feeds a batch of events to the snake. Stops at the first quit.
pub fn apply_events(events: impl IntoIterator<Item = InputEvent>, snake: &mut Snake) -> Control {
    for event in events {
        match event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::KeyDown(key) => {
                if let Some(direction) = direction_for(key) {
                    if snake.request_direction(direction) {
                        debug!("queued turn {direction:?}");
                    }
                }
            }
        }
    }
    Control::Continue
}

/// Keyboard and window-close events from macroquad.
///
/// Call [`macroquad::prelude::prevent_quit`] at startup so closing the window
/// shows up here as [`InputEvent::Quit`] instead of tearing the window down
/// mid-frame.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        for key in STEERING_KEYS {
            if is_key_pressed(key) {
                events.push(InputEvent::KeyDown(key));
            }
        }
        events
    }
}
