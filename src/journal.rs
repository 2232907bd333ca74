//! Gameplay event journal.
//!
//! One JSON object per line, appended to the file named by
//! `BLOCKFALL_LOG_PATH`:
//!
//! ```text
//! {"type":"game_start","game_id":0,"seed":1}
//! {"type":"lock","game_id":0,"pieces":2,"shape":"t","rows_cleared":0,"score_gained":0,"level":0,"game_over":false}
//! ```
//!
//! A failed write is reported once on stderr and turns the journal off; the
//! game keeps running.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::LockEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    GameStart {
        game_id: u32,
        seed: u32,
    },
    Lock {
        game_id: u32,
        /// Shapes spawned so far in this game.
        pieces: u32,
        #[serde(flatten)]
        event: LockEvent,
    },
}

#[derive(Debug, Default)]
pub struct Journal {
    file: Option<File>,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// Journal for an optional path. Open failures are reported and leave the
    /// journal disabled.
    pub fn from_path(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match Self::open(path) {
            Ok(journal) => journal,
            Err(e) => {
                eprintln!("[Journal] {:#}", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn game_start(&mut self, game_id: u32, seed: u32) {
        self.record(&JournalRecord::GameStart { game_id, seed });
    }

    pub fn lock(&mut self, game_id: u32, pieces: u32, event: LockEvent) {
        self.record(&JournalRecord::Lock {
            game_id,
            pieces,
            event,
        });
    }

    pub fn record(&mut self, record: &JournalRecord) {
        if self.file.is_none() {
            return;
        }
        if let Err(e) = self.write_line(record) {
            eprintln!("[Journal] write failed, journal disabled: {:#}", e);
            self.file = None;
        }
    }

    fn write_line(&mut self, record: &JournalRecord) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record).context("encode record")?;
        self.buf.push(b'\n');
        file.write_all(&self.buf).context("append record")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeType;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("blockfall-{}-{}.jsonl", name, std::process::id()))
    }

    #[test]
    fn lock_record_flattens_event() {
        let record = JournalRecord::Lock {
            game_id: 2,
            pieces: 7,
            event: LockEvent {
                shape: ShapeType::I,
                rows_cleared: 1,
                score_gained: 40,
                level: 0,
                game_over: false,
            },
        };
        let v = serde_json::to_value(record).unwrap();
        assert_eq!(v["type"], "lock");
        assert_eq!(v["game_id"], 2);
        assert_eq!(v["pieces"], 7);
        assert_eq!(v["shape"], ShapeType::I.as_str());
        assert_eq!(v["score_gained"], 40);
    }

    #[test]
    fn appends_one_line_per_record() {
        let path = temp_path("append");
        let _ = std::fs::remove_file(&path);

        let mut journal = Journal::open(&path).unwrap();
        assert!(journal.is_enabled());
        journal.game_start(0, 9);
        journal.lock(
            0,
            1,
            LockEvent {
                shape: ShapeType::O,
                rows_cleared: 0,
                score_gained: 0,
                level: 0,
                game_over: false,
            },
        );
        drop(journal);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "game_start");
        assert_eq!(lines[0]["seed"], 9);
        assert_eq!(lines[1]["type"], "lock");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_path_disables() {
        assert!(!Journal::from_path(None).is_enabled());

        let dir = std::env::temp_dir().join("blockfall-no-such-dir").join("x");
        let journal = Journal::from_path(dir.join("j.jsonl").to_str());
        assert!(!journal.is_enabled());
    }

    #[test]
    fn disabled_journal_ignores_records() {
        let mut journal = Journal::disabled();
        journal.game_start(1, 1);
        assert!(!journal.is_enabled());
    }
}
