//! Best score record and its storage seam
//!
//! The value is a single non-negative integer persisted as decimal text.
//! Storage is injected through `BestScoreStore` so the game never talks to a
//! concrete backend directly.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Persistence backend for the best score
pub trait BestScoreStore {
    /// Read the stored value; absent or unreadable storage yields 0
    fn load_best(&self) -> u64;
    /// Write a new value
    fn save_best(&mut self, best: u64) -> Result<()>;
}

/// Encode a best score the way it is kept in string storage
pub fn encode_best(best: u64) -> String {
    best.to_string()
}

/// Decode a stored best score; unparseable or negative text reads as 0
pub fn decode_best(raw: &str) -> u64 {
    let raw = raw.trim();
    raw.parse::<u64>()
        .ok()
        // Fractional text is floored
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.floor() as u64)
        })
        .unwrap_or(0)
}

/// In-memory store, also counting writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u64) -> Self {
        Self {
            value: Some(encode_best(best)),
            writes: 0,
        }
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> u64 {
        self.value.as_deref().map(decode_best).unwrap_or(0)
    }

    fn save_best(&mut self, best: u64) -> Result<()> {
        self.value = Some(encode_best(best));
        self.writes += 1;
        Ok(())
    }
}

/// Monotonic best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Load from a store
    pub fn load(store: &impl BestScoreStore) -> Self {
        let value = store.load_best();
        log::info!("Best score loaded: {}", value);
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Check if a score would beat the record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.value
    }

    /// Offer a final score. Returns true when it became the new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.value = score;
        true
    }
}
