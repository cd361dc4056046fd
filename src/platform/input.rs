//! Keyboard input
//!
//! Terminals report key presses, not key state. `KeyTracker` keeps the frame
//! each key was last seen so held keys can be reconstructed every tick:
//! - Keyboard-enhancement capable terminals send Press/Repeat/Release, and a
//!   key is dropped on release.
//! - Classic terminals only send repeated Press events; a key expires after
//!   `HOLD_WINDOW` frames without one.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Frames a key stays held without a fresh press/repeat event
pub const HOLD_WINDOW: u64 = 8;

/// Game intents a key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Restart,
    Quit,
}

impl Key {
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Key::Quit)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Turns a stream of key events into one `TickInput` per frame
#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Terminal reports releases, so held keys never expire on their own
    release_events: bool,
    frame: u64,
    /// Held key -> frame it was last seen
    held: HashMap<Key, u64>,
    restart: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, event: &KeyEvent) {
        let Some(key) = Key::from_event(event) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press => {
                match key {
                    Key::Restart => self.restart = true,
                    Key::Quit => self.quit = true,
                    _ => {}
                }
                self.held.insert(key, self.frame);
            }
            KeyEventKind::Repeat => {
                self.held.insert(key, self.frame);
            }
            KeyEventKind::Release => {
                self.held.remove(&key);
            }
        }
    }

    /// True if `key` is down: until its release when releases are reported,
    /// otherwise if it was seen within the last `HOLD_WINDOW` frames
    pub fn is_held(&self, key: Key) -> bool {
        self.held
            .get(&key)
            .is_some_and(|&last| self.fresh(last, self.frame))
    }

    fn fresh(&self, last: u64, frame: u64) -> bool {
        self.release_events || frame.saturating_sub(last) <= HOLD_WINDOW
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Intents for this frame; consumes the restart press and starts the
    /// next frame
    pub fn next_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            restart: std::mem::take(&mut self.restart),
        };
        self.frame += 1;
        if !self.release_events {
            let frame = self.frame;
            self.held
                .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);
        }
        input
    }
}
