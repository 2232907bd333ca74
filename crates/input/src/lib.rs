//! Terminal input module (engine-facing).
//!
//! Translates `crossterm` key events into logical [`Key`]s, buffers them the
//! way a frame-based game polls a keyboard (a "pressed" set and a "released"
//! set), and drains them once per tick into engine [`Command`]s.
//!
//! [`Command`]: crate::types::Command

pub mod buffer;
pub mod map;

pub use blockfall_types as types;

pub use buffer::InputBuffer;
pub use map::{map_key, should_quit, Key};
