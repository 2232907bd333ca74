//! Key mapping from terminal events to logical game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// Keys the game reacts to, independent of the physical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Rotate,
    HardDrop,
    NewGame,
    Pause,
    Mute,
    VolumeUp,
    VolumeDown,
}

impl Key {
    pub const COUNT: usize = 10;

    pub(crate) fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Map keyboard input to a logical key.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::Down)
        }
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Key::Rotate),

        // Ctrl alone is not reported by most terminals; Enter doubles for it.
        KeyCode::Enter
        | KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Some(Key::HardDrop)
        }
        KeyCode::Char(' ') => Some(Key::NewGame),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Key::Mute),
        KeyCode::PageUp => Some(Key::VolumeUp),
        KeyCode::PageDown => Some(Key::VolumeDown),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
