//! Per-tick command buffer
//!
//! Movement commands received between two ticks are held here and applied in
//! the order they arrived. Repeats of the same movement within one tick
//! collapse into a single entry, so a key reported several times per frame
//! still moves the shape at most once.
//!
//! Immediate commands (hard drop, new game, pause) are not buffered, but the
//! queue remembers which kinds already took effect since the last tick so a
//! second one in the same tick is refused.

use arrayvec::ArrayVec;

use crate::types::{Command, Movement};

/// Queued movements are limited to the distinct non-immediate kinds.
const QUEUE_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    pending: ArrayVec<Movement, QUEUE_CAPACITY>,
    /// Immediate command kinds applied since the last tick, one bit each.
    applied: u8,
}

fn immediate_bit(command: Command) -> Option<u8> {
    match command {
        Command::Move(Movement::HardDrop) => Some(1),
        Command::NewGame => Some(1 << 1),
        Command::Pause => Some(1 << 2),
        _ => None,
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a movement; returns false if it is already pending or is applied
    /// immediately instead (hard drop).
    pub fn push(&mut self, movement: Movement) -> bool {
        if Command::from(movement).is_immediate() || self.pending.contains(&movement) {
            return false;
        }
        self.pending.try_push(movement).is_ok()
    }

    /// Record that an immediate command is about to take effect. Returns
    /// false if the same kind already did so this tick. Queued movements are
    /// always allowed.
    pub fn mark_applied(&mut self, command: Command) -> bool {
        let Some(bit) = immediate_bit(command) else {
            return true;
        };
        if self.applied & bit != 0 {
            return false;
        }
        self.applied |= bit;
        true
    }

    /// Take every pending movement, oldest first, and start a new tick.
    pub fn take(&mut self) -> ArrayVec<Movement, QUEUE_CAPACITY> {
        self.applied = 0;
        std::mem::take(&mut self.pending)
    }

    /// Take every pending movement, oldest first, staying in the same tick.
    pub fn take_pending(&mut self) -> ArrayVec<Movement, QUEUE_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    /// Drop pending movements but keep this tick's immediate marks.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    /// Drop pending movements and start a new tick.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.applied = 0;
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
