use serde::{Deserialize, Serialize};

use drill_core::{AnswerMode, VocabularyEntry};

/// Running totals across checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub correct: u32,
    pub total: u32,
    pub streak: u32,
}

impl Stats {
    pub(crate) fn record(&mut self, correct: bool) {
        self.total = self.total.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }
    }

    /// Percentage of correct checks, rounded. 0 before the first check.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The queue is empty.
    NoCard,
    /// Blank input; not counted.
    Empty,
    Correct,
    Incorrect,
    /// The card was already answered correctly; not counted again.
    AlreadyCorrect,
}

impl CheckOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoCard => "No cards loaded",
            Self::Empty => "Type an answer",
            Self::Correct | Self::AlreadyCorrect => "Correct!",
            Self::Incorrect => "Try again",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::AlreadyCorrect)
    }
}

/// The card currently shown and what is being asked about it.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub entry: &'a VocabularyEntry,
    pub expected: AnswerMode,
}

impl Card<'_> {
    pub fn prompt(&self) -> &str {
        &self.entry.prompt
    }

    pub fn hint(&self) -> &'static str {
        self.expected.prompt_hint()
    }
}
