//! Shape catalog - the fixed geometry of every shape type
//!
//! Each shape type owns an ordered list of rotation states. A state is four
//! offsets relative to the shape's anchor, so every type shares the same
//! movement and collision code and only the tables differ.
//!
//! State 0 is the spawn orientation and always has its top row at offset 0.
//! Rotating clockwise advances to the next state and wraps around.

use crate::types::{Pos, ShapeType};

/// Offsets of the four cells of one rotation state
pub type ShapeCells = [Pos; 4];

const I_STATES: [ShapeCells; 2] = [
    // horizontal
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    // vertical
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const O_STATES: [ShapeCells; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const T_STATES: [ShapeCells; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_STATES: [ShapeCells; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_STATES: [ShapeCells; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_STATES: [ShapeCells; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [ShapeCells; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// All rotation states of a shape type, in clockwise order.
pub fn rotations(kind: ShapeType) -> &'static [ShapeCells] {
    match kind {
        ShapeType::I => &I_STATES,
        ShapeType::O => &O_STATES,
        ShapeType::T => &T_STATES,
        ShapeType::S => &S_STATES,
        ShapeType::Z => &Z_STATES,
        ShapeType::J => &J_STATES,
        ShapeType::L => &L_STATES,
    }
}

/// Number of distinct rotation states for a shape type.
pub fn rotation_count(kind: ShapeType) -> u8 {
    rotations(kind).len() as u8
}

/// Offsets for a shape type at a rotation index (wrapped modulo the count).
pub fn cells(kind: ShapeType, rotation: u8) -> ShapeCells {
    let states = rotations(kind);
    states[rotation as usize % states.len()]
}

/// The rotation index reached by one clockwise turn.
pub fn next_rotation(kind: ShapeType, rotation: u8) -> u8 {
    (rotation + 1) % rotation_count(kind)
}
