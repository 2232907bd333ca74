//! Movement engine - legality of translate, rotate and drop
//!
//! All functions here are pure: they take the board by shared reference and
//! return a candidate [`Shape`] or `None` when the move is blocked. The board
//! is never written; locking is the game state's job.

use crate::board::Board;
use crate::catalog::{self, ShapeCells};
use crate::types::{Movement, Pos, ShapeType, SPAWN_POSITION};

/// The falling shape: type, rotation index and anchor on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeType,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Shape {
    /// A shape of `kind` at the spawn anchor in its spawn orientation
    pub fn spawn(kind: ShapeType) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Relative offsets for the current rotation
    pub fn offsets(&self) -> ShapeCells {
        catalog::cells(self.kind, self.rotation)
    }

    /// Absolute board cells covered by the shape
    pub fn cells(&self) -> [Pos; 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Lowest board row the shape covers
    pub fn bottom(&self) -> i8 {
        self.cells().iter().map(|&(_, y)| y).max().unwrap_or(self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Move the shape by `(dx, dy)` if the target cells are free
pub fn translate(board: &Board, shape: Shape, dx: i8, dy: i8) -> Option<Shape> {
    let candidate = shape.shifted(dx, dy);
    board.can_place(&candidate.cells()).then_some(candidate)
}

/// Turn to the next rotation state around the same anchor.
///
/// There is no wall kick: a blocked rotation is simply rejected.
pub fn rotate_cw(board: &Board, shape: Shape) -> Option<Shape> {
    let candidate = Shape {
        rotation: catalog::next_rotation(shape.kind, shape.rotation),
        ..shape
    };
    board.can_place(&candidate.cells()).then_some(candidate)
}

/// One row down; `None` means the shape cannot descend any further
pub fn soft_drop(board: &Board, shape: Shape) -> Option<Shape> {
    translate(board, shape, 0, 1)
}

/// Whether the shape has room to fall one row
pub fn can_descend(board: &Board, shape: Shape) -> bool {
    soft_drop(board, shape).is_some()
}

/// Where the shape comes to rest when dropped straight down
pub fn drop_target(board: &Board, shape: Shape) -> Shape {
    let mut landed = shape;
    while let Some(next) = soft_drop(board, landed) {
        landed = next;
    }
    landed
}

/// Apply a non-locking movement.
///
/// `HardDrop` returns the landing position; the caller is responsible for
/// locking it.
pub fn apply(board: &Board, shape: Shape, movement: Movement) -> Option<Shape> {
    match movement {
        Movement::Left => translate(board, shape, -1, 0),
        Movement::Right => translate(board, shape, 1, 0),
        Movement::Down => soft_drop(board, shape),
        Movement::RotateCw => rotate_cw(board, shape),
        Movement::HardDrop => Some(drop_target(board, shape)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Block;

    #[test]
    fn test_spawn_cells() {
        let shape = Shape::spawn(ShapeType::I);
        assert_eq!(shape.cells(), [(3, 0), (4, 0), (5, 0), (6, 0)]);
    }

    #[test]
    fn test_translate_blocked_by_wall() {
        let board = Board::new();
        let mut shape = Shape::spawn(ShapeType::O);
        let mut moves = 0;
        while let Some(next) = translate(&board, shape, -1, 0) {
            shape = next;
            moves += 1;
        }
        // O offsets start at column 1, anchor spawns at 3
        assert_eq!(moves, 4);
        assert_eq!(shape.x, -1);
    }

    #[test]
    fn test_translate_does_not_touch_board() {
        let board = Board::new();
        let shape = Shape::spawn(ShapeType::T);
        let _ = translate(&board, shape, 1, 0);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_rotate_rejected_against_wall() {
        let board = Board::new();
        // I horizontal on the floor: vertical state needs rows below
        let shape = Shape {
            kind: ShapeType::I,
            rotation: 0,
            x: 3,
            y: 19,
        };
        assert_eq!(rotate_cw(&board, shape), None);
    }

    #[test]
    fn test_rotate_cycles_back() {
        let board = Board::new();
        let start = Shape {
            y: 5,
            ..Shape::spawn(ShapeType::T)
        };
        let mut shape = start;
        for _ in 0..4 {
            shape = rotate_cw(&board, shape).unwrap();
        }
        assert_eq!(shape, start);
    }

    #[test]
    fn test_drop_target_rests_on_stack() {
        let mut board = Board::new();
        board
            .place(&[(4, 10)], Block::from(ShapeType::L))
            .unwrap();
        let landed = drop_target(&board, Shape::spawn(ShapeType::I));
        assert_eq!(landed.bottom(), 9);
        assert!(!can_descend(&board, landed));
    }

    #[test]
    fn test_apply_dispatch() {
        let board = Board::new();
        let shape = Shape {
            y: 4,
            ..Shape::spawn(ShapeType::J)
        };
        assert_eq!(apply(&board, shape, Movement::Left).map(|s| s.x), Some(2));
        assert_eq!(apply(&board, shape, Movement::Right).map(|s| s.x), Some(4));
        assert_eq!(apply(&board, shape, Movement::Down).map(|s| s.y), Some(5));
        assert_eq!(
            apply(&board, shape, Movement::RotateCw).map(|s| s.rotation),
            Some(1)
        );
        assert_eq!(
            apply(&board, shape, Movement::HardDrop).map(|s| s.bottom()),
            Some(19)
        );
    }
}
