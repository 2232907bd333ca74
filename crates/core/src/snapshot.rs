//! Read-only view of a game, sampled once per frame by renderers and
//! observers. Serializes with serde for the event journal.

use serde::Serialize;

use crate::generator::ShapeStatistics;
use crate::movement::Shape;
use crate::types::{Pos, ShapeType, BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeType,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub cells: [Pos; 4],
}

impl From<Shape> for ActiveSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major, top row first
    pub board: [[Option<ShapeType>; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
    /// Cells the active shape would occupy after a hard drop
    pub ghost: Option<[Pos; 4]>,
    pub next: ShapeType,
    pub statistics: ShapeStatistics,
    pub score: u32,
    pub level: u32,
    pub completed_rows: u32,
    pub speed_ms: u32,
    pub paused: bool,
    pub over: bool,
    pub game_id: u32,
    pub pieces: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            ghost: None,
            next: ShapeType::I,
            statistics: ShapeStatistics::default(),
            score: 0,
            level: 0,
            completed_rows: 0,
            speed_ms: 0,
            paused: false,
            over: false,
            game_id: 0,
            pieces: 0,
        }
    }
}
