//! Vocabulary entries as handed to the matchers.

use serde::Deserialize;

/// Reading fields, determined by the kind of entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A single kanji. `onyomi` is usually katakana, `kunyomi` hiragana.
    Character {
        onyomi: Vec<String>,
        kunyomi: Vec<String>,
    },
    /// A word with its own fixed readings.
    Compound { readings: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct VocabularyEntry {
    pub id: Option<String>,
    pub prompt: String,
    pub kind: EntryKind,
    pub meanings: Vec<String>,
    pub alt_meanings: Vec<String>,
    pub level: Option<String>,
}

impl VocabularyEntry {
    pub fn character(
        prompt: impl Into<String>,
        onyomi: &[&str],
        kunyomi: &[&str],
        meanings: &[&str],
    ) -> Self {
        Self::new(
            prompt.into(),
            EntryKind::Character {
                onyomi: to_owned(onyomi),
                kunyomi: to_owned(kunyomi),
            },
            meanings,
        )
    }

    pub fn compound(prompt: impl Into<String>, readings: &[&str], meanings: &[&str]) -> Self {
        Self::new(
            prompt.into(),
            EntryKind::Compound {
                readings: to_owned(readings),
            },
            meanings,
        )
    }

    fn new(prompt: String, kind: EntryKind, meanings: &[&str]) -> Self {
        Self {
            id: None,
            prompt,
            kind,
            meanings: to_owned(meanings),
            alt_meanings: Vec::new(),
            level: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_alt_meanings(mut self, alt: &[&str]) -> Self {
        self.alt_meanings = to_owned(alt);
        self
    }

    pub fn is_character(&self) -> bool {
        matches!(self.kind, EntryKind::Character { .. })
    }

    /// Primary meanings followed by alternates.
    pub fn all_meanings(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .chain(self.alt_meanings.iter())
            .map(String::as_str)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Kanji,
    Word,
}

/// Card as it appears in dataset JSON. Reading arrays that do not belong
/// to the card's `type` are ignored; absent and `null` arrays are empty.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<RawKind>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    onyomi_kana: Option<Vec<String>>,
    #[serde(default)]
    kunyomi_kana: Option<Vec<String>>,
    #[serde(default)]
    reading: Option<Vec<String>>,
    #[serde(default)]
    meanings: Option<Vec<String>>,
    #[serde(default)]
    alt_meanings: Option<Vec<String>>,
    #[serde(default)]
    level: Option<String>,
}

impl TryFrom<RawEntry> for VocabularyEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let label = raw.id.as_deref().unwrap_or("<no id>").to_string();
        let kind = match raw.kind {
            Some(RawKind::Kanji) => EntryKind::Character {
                onyomi: raw.onyomi_kana.unwrap_or_default(),
                kunyomi: raw.kunyomi_kana.unwrap_or_default(),
            },
            Some(RawKind::Word) => EntryKind::Compound {
                readings: raw.reading.unwrap_or_default(),
            },
            None => return Err(format!("card {label}: missing \"type\"")),
        };
        let prompt = match raw.prompt {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(format!("card {label}: missing \"prompt\"")),
        };
        Ok(Self {
            id: raw.id,
            prompt,
            kind,
            meanings: raw.meanings.unwrap_or_default(),
            alt_meanings: raw.alt_meanings.unwrap_or_default(),
            level: raw.level,
        })
    }
}
