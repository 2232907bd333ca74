//! Frame-polled key buffer.
//!
//! Keys are recorded into two sets between ticks: keys that were pressed and
//! keys that were released. Movement keys (left, right, down) act on press so
//! they follow keyboard auto-repeat. Everything else acts on release, so a
//! single tap never fires twice. [`InputBuffer::drain`] turns both sets into
//! commands and empties them, which also collapses repeats within a frame.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, Key};
use crate::types::{Command, Movement};

/// Keys that act while held, in drain order.
const PRESS_KEYS: [(Key, Command); 3] = [
    (Key::Left, Command::Move(Movement::Left)),
    (Key::Right, Command::Move(Movement::Right)),
    (Key::Down, Command::Move(Movement::Down)),
];

/// Keys that act once when let go, in drain order.
const RELEASE_KEYS: [(Key, Command); 7] = [
    (Key::Rotate, Command::Move(Movement::RotateCw)),
    (Key::HardDrop, Command::Move(Movement::HardDrop)),
    (Key::NewGame, Command::NewGame),
    (Key::Pause, Command::Pause),
    (Key::Mute, Command::Mute),
    (Key::VolumeUp, Command::VolumeUp),
    (Key::VolumeDown, Command::VolumeDown),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    pressed: u16,
    released: u16,
    /// Whether the terminal reports key releases. When it does not, a press
    /// of a release-bound key counts as a full tap.
    release_events: bool,
}

impl InputBuffer {
    /// Buffer for a terminal that reports press events only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer for a terminal with key release reporting enabled.
    pub fn with_release_events(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn on_key_pressed(&mut self, key: Key) {
        self.pressed |= key.bit();
        if !self.release_events && !is_press_key(key) {
            self.released |= key.bit();
        }
    }

    pub fn on_key_released(&mut self, key: Key) {
        self.released |= key.bit();
    }

    /// Record a raw terminal event; returns the mapped key, if any.
    pub fn on_key_event(&mut self, event: KeyEvent) -> Option<Key> {
        let key = map_key(event)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.on_key_pressed(key),
            KeyEventKind::Release => self.on_key_released(key),
        }
        Some(key)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed == 0 && self.released == 0
    }

    /// Commands for everything recorded since the last drain; clears both sets.
    pub fn drain(&mut self) -> ArrayVec<Command, { Key::COUNT }> {
        let mut out = ArrayVec::new();

        for (key, cmd) in PRESS_KEYS {
            if self.pressed & key.bit() != 0 {
                out.push(cmd);
            }
        }
        for (key, cmd) in RELEASE_KEYS {
            if self.released & key.bit() != 0 {
                out.push(cmd);
            }
        }

        self.pressed = 0;
        self.released = 0;
        out
    }
}

fn is_press_key(key: Key) -> bool {
    PRESS_KEYS.iter().any(|&(k, _)| k == key)
}
