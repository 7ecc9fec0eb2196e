//! Best score tracking
//!
//! Loaded once at startup, saved whenever a finished round beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    /// Read the stored record
    pub fn load(store: &impl ScoreStore) -> Self {
        Self {
            value: store.load(),
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.value
    }

    /// Record a finished round's score, saving it if it is a new best.
    /// Returns true on a new record.
    pub fn record(&mut self, score: u64, store: &mut impl ScoreStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New best score: {} (was {})", score, self.value);
        self.value = score;
        store.save(score);
        true
    }
}
