//! Answer checking for a kanji/vocabulary drill.
//!
//! Given a learner's typed answer and a [`VocabularyEntry`], decide whether
//! it is one of the entry's readings (kana or romaji, any script or width)
//! or one of its English glosses. Every function here is pure and
//! deterministic, so checks may run from any thread without coordination.

pub mod answer;
pub mod dataset;
pub mod entry;
pub mod meaning;
pub mod reading;
pub mod romaji;
pub mod settings;
pub mod unicode;


pub use answer::{check, AnswerMode, CanonicalAnswers, Reveal};
pub use dataset::{parse_dataset, Dataset, DatasetError};
pub use entry::{EntryKind, VocabularyEntry};
pub use meaning::{canonical_meanings, is_correct_meaning, normalize_meaning};
pub use reading::{canonical_readings, is_correct_reading, normalize_reading};
pub use romaji::transliterate;
pub use unicode::fold_to_hiragana;
