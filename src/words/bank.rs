//! Word catalog the rounds draw from.
//!
//! The default catalog is embedded at build time; a replacement can be loaded
//! from a JSON file with the same shape (an array of entries).

use rand::seq::IndexedRandom;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::models::VocabEntry;

/// Embedded default catalog
static DEFAULT_WORDS: &str = include_str!("../../data/words.json");

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("Word catalog is empty")]
    Empty,

    #[error("Word entry {index} has an empty {field}")]
    InvalidEntry { index: usize, field: &'static str },

    #[error("Failed to read word catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse word catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, non-empty catalog of vocabulary entries
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Arc<[VocabEntry]>,
}

impl WordBank {
    /// Builds a catalog, rejecting an empty list or entries with blank fields.
    /// Fields are stored trimmed.
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self, WordBankError> {
        if entries.is_empty() {
            return Err(WordBankError::Empty);
        }

        let entries: Vec<VocabEntry> = entries.into_iter().map(VocabEntry::trimmed).collect();

        for (index, entry) in entries.iter().enumerate() {
            if let Some(field) = entry.missing_field() {
                return Err(WordBankError::InvalidEntry { index, field });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::from_json(DEFAULT_WORDS)
    }

    pub fn from_json(json: &str) -> Result<Self, WordBankError> {
        let entries: Vec<VocabEntry> = serde_json::from_str(json)?;
        debug!(entry_count = entries.len(), "Parsed word catalog");
        Self::new(entries)
    }

    pub fn from_file(path: &Path) -> Result<Self, WordBankError> {
        info!(path = %path.display(), "Loading word catalog from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Uniform random pick, with replacement
    pub fn pick_random(&self) -> VocabEntry {
        // Non-empty by construction
        self.entries
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| self.entries[0].clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }
}
