//! Best-score persistence
//!
//! A single scalar stored as a small JSON document. Reads fall back to "no
//! record" on any problem and writes are best effort: a broken disk must never
//! stop the frame loop.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to read/write best score file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse best score JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = PersistError> = std::result::Result<T, E>;

/// Storage for the best score
pub trait ScoreStore {
    /// Stored best score, 0 when missing or unreadable
    fn load(&self) -> u64;
    /// Store a new best score; failures are swallowed
    fn save(&mut self, best: u64);
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    best_score: u64,
}

/// JSON file store: `{"best_score": N}`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<u64> {
        let json = std::fs::read_to_string(&self.path)?;
        let record: Record = serde_json::from_str(&json)?;
        Ok(record.best_score)
    }

    fn try_save(&self, best: u64) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&Record { best_score: best })?;
        // Write then rename so a crash mid-write leaves the old record intact
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> u64 {
        match self.try_load() {
            Ok(best) => {
                log::info!("Loaded best score {} from {}", best, self.path.display());
                best
            }
            Err(PersistError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No best score yet, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring best score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, best: u64) {
        match self.try_save(best) {
            Ok(()) => log::info!("Best score {} saved", best),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }
    }
}

/// In-memory store. Clones share the same slot, which lets tests simulate a
/// restart by handing a clone to a fresh game.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<u64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents; `None` until the first save
    pub fn stored(&self) -> Option<u64> {
        self.slot.get()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.slot.get().unwrap_or(0)
    }

    fn save(&mut self, best: u64) {
        self.slot.set(Some(best));
    }
}
