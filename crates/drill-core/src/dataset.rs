//! Vocabulary datasets: JSON parsing and id-based merging.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::entry::VocabularyEntry;

const SAMPLE_JSON: &str = include_str!("sample_n5.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `{ "cards": [...] }`, the shape the drill app exports.
#[derive(Deserialize)]
struct CardsFile {
    cards: Vec<VocabularyEntry>,
}

/// Parse dataset JSON: either a bare array of cards or `{ "cards": [...] }`.
pub fn parse_dataset(json: &str) -> Result<Vec<VocabularyEntry>, DatasetError> {
    let cards = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<VocabularyEntry>>(json)?
    } else {
        serde_json::from_str::<CardsFile>(json)?.cards
    };
    debug!(count = cards.len(), "parsed dataset");
    Ok(cards)
}

/// An ordered collection of entries with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<VocabularyEntry>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let mut dataset = Self::new();
        dataset.merge(parse_dataset(json)?);
        Ok(dataset)
    }

    /// The built-in five-card N5 sample.
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_JSON).expect("embedded sample dataset must be valid")
    }

    /// Append `incoming`, skipping cards whose id is already present.
    /// Cards without an id are always added. Returns how many were added.
    pub fn merge(&mut self, incoming: Vec<VocabularyEntry>) -> usize {
        let mut seen: HashSet<String> = self.entries.iter().filter_map(|e| e.id.clone()).collect();
        let before = self.entries.len();
        for entry in incoming {
            if let Some(id) = &entry.id {
                if !seen.insert(id.clone()) {
                    warn!(id = %id, "skipping card with duplicate id");
                    continue;
                }
            }
            self.entries.push(entry);
        }
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a card by id, falling back to the first card with that prompt.
    pub fn find(&self, key: &str) -> Option<&VocabularyEntry> {
        self.entries
            .iter()
            .find(|e| e.id.as_deref() == Some(key))
            .or_else(|| self.entries.iter().find(|e| e.prompt == key))
    }
}
