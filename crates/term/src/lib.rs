//! Terminal front end for the game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a snapshot into styled cells (pure, testable), and
//! [`TerminalRenderer`] writes those cells to the terminal with crossterm.
//! Board cells are two columns wide to offset the glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{shape_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
