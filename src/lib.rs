//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, input, term, types}`
//! and owns the pieces that only the runner needs: environment
//! configuration and the event journal.

pub mod config;
pub mod journal;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::RunConfig;
pub use journal::{Journal, JournalRecord};
