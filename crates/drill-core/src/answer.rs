//! Canonical answer sets and the reveal text built from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::VocabularyEntry;
use crate::meaning::{canonical_meanings, is_correct_meaning, normalize_meaning};
use crate::reading::{canonical_readings, is_correct_reading, normalize_reading};
use crate::settings::DisplaySettings;

/// Which half of a card the learner is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    Reading,
    Meaning,
}

impl AnswerMode {
    pub fn prompt_hint(self) -> &'static str {
        match self {
            Self::Reading => "Type the reading (かな / romaji)",
            Self::Meaning => "Type the meaning (English)",
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reading => "reading",
            Self::Meaning => "meaning",
        })
    }
}

impl FromStr for AnswerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(Self::Reading),
            "meaning" => Ok(Self::Meaning),
            other => Err(format!(
                "unknown answer mode {other:?}, expected reading or meaning"
            )),
        }
    }
}

/// Check `input` against `entry` in the given mode.
pub fn check(mode: AnswerMode, input: &str, entry: &VocabularyEntry) -> bool {
    match mode {
        AnswerMode::Reading => is_correct_reading(input, entry),
        AnswerMode::Meaning => is_correct_meaning(input, entry),
    }
}

/// Normalized readings and meanings of one entry, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAnswers {
    pub readings: Vec<String>,
    pub meanings: Vec<String>,
}

impl CanonicalAnswers {
    pub fn of(entry: &VocabularyEntry) -> Self {
        Self {
            readings: canonical_readings(entry),
            meanings: canonical_meanings(entry),
        }
    }

    pub fn accepts(&self, mode: AnswerMode, input: &str) -> bool {
        let (normalized, set) = match mode {
            AnswerMode::Reading => (normalize_reading(input), &self.readings),
            AnswerMode::Meaning => (normalize_meaning(input), &self.meanings),
        };
        !normalized.is_empty() && set.contains(&normalized)
    }

    pub fn reveal(&self, display: &DisplaySettings) -> Reveal {
        Reveal {
            readings: self.readings.join(&display.reading_separator),
            meanings: self.meanings.join(&display.meaning_separator),
        }
    }
}

/// Display strings for "show me the answer".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub readings: String,
    pub meanings: String,
}

impl Reveal {
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty() && self.meanings.is_empty()
    }
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if !self.readings.is_empty() {
            parts.push(format!("Reading: {}", self.readings));
        }
        if !self.meanings.is_empty() {
            parts.push(format!("Meaning: {}", self.meanings));
        }
        f.write_str(&parts.join(" \u{00B7} "))
    }
}
