//! Scoring module - line-clear points, levels and gravity speed
//!
//! - Clearing more rows at once pays more than clearing them one by one
//!   (40 / 100 / 300 / 1200 at level 0).
//! - Points scale with `level + 1`.
//! - One level per [`ROWS_PER_LEVEL`] completed rows.
//! - Gravity speeds up with level and never drops below the floor interval.

use crate::types::{DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINE_SCORES, ROWS_PER_LEVEL};

/// Points for clearing `rows` rows at `level`
pub fn line_score(rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let base = LINE_SCORES[rows.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level.saturating_add(1))
}

/// Level reached after `completed_rows` rows
pub fn level_for(completed_rows: u32) -> u32 {
    completed_rows / ROWS_PER_LEVEL
}

/// Gravity interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Outcome of scoring one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub completed_rows: u32,
    pub level: u32,
    pub speed_ms: u32,
}

/// Fold a clear of `rows` rows into the running totals.
///
/// Points use the level in force before the clear.
pub fn score_clear(rows: usize, completed_rows: u32, level: u32) -> ScoreResult {
    let points = line_score(rows, level);
    let completed_rows = completed_rows.saturating_add(rows as u32);
    let level = level_for(completed_rows).max(level);
    ScoreResult {
        points,
        completed_rows,
        level,
        speed_ms: drop_interval_ms(level),
    }
}
