//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the
//! shape catalog, movement legality, gravity and lock timing, line clears and
//! scoring. It has **no dependencies** on terminals, audio or I/O.
//!
//! - **Deterministic**: the same seed produces the same shape sequence
//! - **Owned**: one [`GameState`] holds everything; callers only submit
//!   commands and read snapshots
//! - **Fixed-size**: board, queue and row lists live in arrays, no allocation
//!   per tick
//!
//! # Module Structure
//!
//! - [`catalog`]: rotation-state tables for the seven shape types
//! - [`generator`]: uniform seeded shape draws plus per-type statistics
//! - [`board`]: 10x20 grid with placement checks and row clearing
//! - [`movement`]: translate / rotate / drop legality against the board
//! - [`scoring`]: line-clear points, level and gravity speed
//! - [`commands`]: per-tick movement buffer
//! - [`game_state`]: the tick controller and lock path
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, Movement};
//!
//! let mut game = GameState::new(12345);
//!
//! game.submit(Command::Move(Movement::Right));
//! game.submit(Command::Move(Movement::RotateCw));
//! game.tick(16);
//!
//! game.submit(Command::Move(Movement::HardDrop));
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity moves the shape one row every `speed_ms`
//! (1000ms at level 0); a shape that cannot fall locks after
//! [`LOCK_DELAY_MS`](types::LOCK_DELAY_MS).

pub mod board;
pub mod catalog;
pub mod commands;
pub mod game_state;
pub mod generator;
pub mod movement;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use commands::CommandQueue;
pub use game_state::GameState;
pub use generator::{ShapeGenerator, ShapeStatistics, SimpleRng};
pub use movement::Shape;
pub use scoring::{drop_interval_ms, level_for, line_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
