//! Stateful drill session: queue, current card, expected answer kind, and stats.
//!
//! `DrillSession` owns a [`Dataset`] and walks a shuffled queue of card
//! indices. Each shown card asks for either its reading or its meaning;
//! answers go through [`drill_core::check`] and update running [`Stats`].

mod store;
mod types;

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, debug_span};

use drill_core::settings::{settings, ContentFilter, DisplaySettings, DrillMode, MixedSettings};
use drill_core::{check, AnswerMode, CanonicalAnswers, Dataset, Reveal, VocabularyEntry};

pub use store::{Preferences, StoreError, PREFERENCES_FILE, STATS_FILE};
pub use types::{Card, CheckOutcome, Stats};

/// Position after `pos` in a ring of `len` slots; wraps to 0.
pub(crate) fn cyclic_next(pos: Option<usize>, len: usize) -> usize {
    match pos {
        Some(p) if p + 1 < len => p + 1,
        _ => 0,
    }
}

pub struct DrillSession {
    dataset: Dataset,
    /// Indices into `dataset`, filtered by content and shuffled.
    queue: Vec<usize>,
    /// Index into `queue` of the card being shown.
    position: Option<usize>,
    expected: AnswerMode,
    answered: bool,

    preferences: Preferences,
    stats: Stats,

    mixed: MixedSettings,
    display: DisplaySettings,
    rng: StdRng,
}

impl DrillSession {
    /// Session seeded from the OS. Shows the first card immediately.
    pub fn new(dataset: Dataset, preferences: Preferences, stats: Stats) -> Self {
        Self::with_rng(dataset, preferences, stats, StdRng::from_os_rng())
    }

    /// Deterministic session for replay and tests.
    pub fn with_seed(dataset: Dataset, preferences: Preferences, stats: Stats, seed: u64) -> Self {
        Self::with_rng(dataset, preferences, stats, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: Dataset, preferences: Preferences, stats: Stats, rng: StdRng) -> Self {
        let s = settings();
        let mut session = Self {
            dataset,
            queue: Vec::new(),
            position: None,
            expected: AnswerMode::Reading,
            answered: false,
            preferences,
            stats,
            mixed: s.mixed,
            display: s.display.clone(),
            rng,
        };
        session.rebuild_queue();
        session.advance();
        session
    }

    // --- Accessors ---

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn current(&self) -> Option<Card<'_>> {
        let idx = *self.queue.get(self.position?)?;
        Some(Card {
            entry: &self.dataset.entries()[idx],
            expected: self.expected,
        })
    }

    fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.current().map(|c| c.entry)
    }

    // --- Queue ---

    fn rebuild_queue(&mut self) {
        let content = self.preferences.content;
        self.queue = self
            .dataset
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| match content {
                ContentFilter::Both => true,
                ContentFilter::Kanji => e.is_character(),
                ContentFilter::Word => !e.is_character(),
            })
            .map(|(i, _)| i)
            .collect();
        self.queue.shuffle(&mut self.rng);
        self.position = None;
        debug!(len = self.queue.len(), %content, "rebuilt queue");
    }

    fn pick_expected(&mut self) {
        let Some(is_character) = self.current_entry().map(|e| e.is_character()) else {
            return;
        };
        self.expected = match self.preferences.mode {
            DrillMode::Reading => AnswerMode::Reading,
            DrillMode::Meaning => AnswerMode::Meaning,
            DrillMode::Mixed => {
                let p = if is_character {
                    self.mixed.kanji_reading_ratio
                } else {
                    self.mixed.word_reading_ratio
                };
                if self.rng.random_bool(p) {
                    AnswerMode::Reading
                } else {
                    AnswerMode::Meaning
                }
            }
        };
        self.answered = false;
    }

    fn advance(&mut self) {
        if self.queue.is_empty() {
            self.position = None;
            return;
        }
        self.position = Some(cyclic_next(self.position, self.queue.len()));
        self.pick_expected();
    }

    /// Move to the next card, wrapping at the end of the queue.
    pub fn next_card(&mut self) -> Option<Card<'_>> {
        self.advance();
        self.current()
    }

    /// Reshuffle the queue and start from its first card.
    pub fn shuffle(&mut self) {
        self.rebuild_queue();
        self.advance();
    }

    // --- Answers ---

    pub fn check(&mut self, input: &str) -> CheckOutcome {
        let _span = debug_span!("check", input).entered();
        let Some(entry) = self.current_entry() else {
            return CheckOutcome::NoCard;
        };
        if input.trim().is_empty() {
            return CheckOutcome::Empty;
        }
        if self.answered {
            return CheckOutcome::AlreadyCorrect;
        }
        let correct = check(self.expected, input, entry);
        self.stats.record(correct);
        self.answered = correct;
        debug!(correct, mode = %self.expected, streak = self.stats.streak, "checked");
        if correct {
            CheckOutcome::Correct
        } else {
            CheckOutcome::Incorrect
        }
    }

    /// Accepted answers for the current card. Does not touch stats.
    pub fn reveal(&self) -> Option<Reveal> {
        self.current_entry()
            .map(|e| CanonicalAnswers::of(e).reveal(&self.display))
    }

    // --- Preferences ---

    /// Change mode and re-pick what the current card asks for.
    pub fn set_mode(&mut self, mode: DrillMode) {
        self.preferences.mode = mode;
        self.pick_expected();
    }

    /// Change content filter; rebuilds the queue.
    pub fn set_content(&mut self, content: ContentFilter) {
        self.preferences.content = content;
        self.shuffle();
    }

    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Merge more cards into the dataset and restart the queue.
    /// Returns how many cards were added.
    pub fn load(&mut self, entries: Vec<VocabularyEntry>) -> usize {
        let added = self.dataset.merge(entries);
        self.shuffle();
        added
    }
}
