//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the terminal front
//! end and the event journal alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), rotation state 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default update cadence (~60 FPS) |
//! | `INITIAL_SPEED_MS` | 1000 | Gravity interval at level 0 |
//! | `LOCK_DELAY_MS` | 500 | Time a blocked piece waits before locking |
//! | `ROWS_PER_LEVEL` | 10 | Completed rows needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Movement, ShapeType, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeType::from_str("t").unwrap();
//! assert_eq!(kind, ShapeType::T);
//!
//! let cmd = Command::from_str("rotateCw").unwrap();
//! assert_eq!(cmd, Command::Move(Movement::RotateCw));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of rows as a `usize`, for array sizes.
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns as a `usize`, for array sizes.
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Anchor of a freshly spawned shape (x, y)
pub const SPAWN_POSITION: Pos = (3, 0);

/// Default update cadence in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0
pub const INITIAL_SPEED_MS: u32 = 1000;

/// How long a piece that cannot descend waits before it locks
pub const LOCK_DELAY_MS: u32 = 500;

/// Completed rows needed to advance one level
pub const ROWS_PER_LEVEL: u32 = 10;

/// Gravity intervals by level (milliseconds per row)
///
/// Index 0 = Level 0. Levels past the table use `DROP_INTERVAL_FLOOR_MS`.
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval for every level past the table
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Line clear scoring table
///
/// Base points for clearing N rows at level 0; multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A board coordinate `(column, row)`, origin top-left.
pub type Pos = (i8, i8);

/// The seven shape types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeType {
    /// Every shape type, in catalog order.
    pub const ALL: [ShapeType; 7] = [
        ShapeType::I,
        ShapeType::O,
        ShapeType::T,
        ShapeType::S,
        ShapeType::Z,
        ShapeType::J,
        ShapeType::L,
    ];

    /// Number of shape types.
    pub const COUNT: usize = 7;

    /// Position of this type in [`ShapeType::ALL`].
    pub fn index(self) -> usize {
        match self {
            ShapeType::I => 0,
            ShapeType::O => 1,
            ShapeType::T => 2,
            ShapeType::S => 3,
            ShapeType::Z => 4,
            ShapeType::J => 5,
            ShapeType::L => 6,
        }
    }

    /// Parse shape type from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeType;
    ///
    /// assert_eq!(ShapeType::from_str("I"), Some(ShapeType::I));
    /// assert_eq!(ShapeType::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeType::I),
            "o" => Some(ShapeType::O),
            "t" => Some(ShapeType::T),
            "s" => Some(ShapeType::S),
            "z" => Some(ShapeType::Z),
            "j" => Some(ShapeType::J),
            "l" => Some(ShapeType::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::I => "i",
            ShapeType::O => "o",
            ShapeType::T => "t",
            ShapeType::S => "s",
            ShapeType::Z => "z",
            ShapeType::J => "j",
            ShapeType::L => "l",
        }
    }
}

/// A filled board cell. Carries the type of the shape that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Block {
    pub shape: ShapeType,
}

impl From<ShapeType> for Block {
    fn from(shape: ShapeType) -> Self {
        Self { shape }
    }
}

/// A cell on the game board (`None` = empty)
pub type Cell = Option<Block>;

/// Commands that move the active shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Move one column left
    Left,
    /// Move one column right
    Right,
    /// Move one row down
    Down,
    /// Advance to the next rotation state
    RotateCw,
    /// Drop to the lowest legal row and lock immediately
    HardDrop,
}

/// Every command the engine accepts from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Movement),
    /// Discard the current game and start a fresh one
    NewGame,
    /// Toggle pause
    Pause,
    /// Audio only; the engine ignores it
    Mute,
    /// Audio only; the engine ignores it
    VolumeUp,
    /// Audio only; the engine ignores it
    VolumeDown,
}

impl Command {
    /// Parse a command from its camelCase name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "moveleft" => Some(Command::Move(Movement::Left)),
            "right" | "moveright" => Some(Command::Move(Movement::Right)),
            "down" | "softdrop" => Some(Command::Move(Movement::Down)),
            "rotatecw" => Some(Command::Move(Movement::RotateCw)),
            "harddrop" => Some(Command::Move(Movement::HardDrop)),
            "newgame" => Some(Command::NewGame),
            "pause" => Some(Command::Pause),
            "mute" => Some(Command::Mute),
            "volumeup" => Some(Command::VolumeUp),
            "volumedown" => Some(Command::VolumeDown),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Movement::Left) => "left",
            Command::Move(Movement::Right) => "right",
            Command::Move(Movement::Down) => "down",
            Command::Move(Movement::RotateCw) => "rotateCw",
            Command::Move(Movement::HardDrop) => "hardDrop",
            Command::NewGame => "newGame",
            Command::Pause => "pause",
            Command::Mute => "mute",
            Command::VolumeUp => "volumeUp",
            Command::VolumeDown => "volumeDown",
        }
    }

    /// Commands that bypass the per-tick queue.
    pub fn is_immediate(&self) -> bool {
        matches!(
            self,
            Command::Move(Movement::HardDrop) | Command::NewGame | Command::Pause
        )
    }
}

impl From<Movement> for Command {
    fn from(m: Movement) -> Self {
        Command::Move(m)
    }
}

/// Emitted by the engine each time a shape locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub shape: ShapeType,
    pub rows_cleared: u32,
    pub score_gained: u32,
    pub level: u32,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_type_index_matches_all() {
        for (i, kind) in ShapeType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeType::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn command_names_parse_back() {
        let all = [
            Command::Move(Movement::Left),
            Command::Move(Movement::Right),
            Command::Move(Movement::Down),
            Command::Move(Movement::RotateCw),
            Command::Move(Movement::HardDrop),
            Command::NewGame,
            Command::Pause,
            Command::Mute,
            Command::VolumeUp,
            Command::VolumeDown,
        ];
        for cmd in all {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn immediate_commands() {
        assert!(Command::Move(Movement::HardDrop).is_immediate());
        assert!(Command::NewGame.is_immediate());
        assert!(Command::Pause.is_immediate());
        assert!(!Command::Move(Movement::Left).is_immediate());
        assert!(!Command::Mute.is_immediate());
    }

    #[test]
    fn drop_intervals_never_increase() {
        for pair in DROP_INTERVALS.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(DROP_INTERVAL_FLOOR_MS <= DROP_INTERVALS[DROP_INTERVALS.len() - 1]);
        assert_eq!(DROP_INTERVALS[0], INITIAL_SPEED_MS);
    }
}
