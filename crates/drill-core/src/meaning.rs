//! English gloss normalization and matching.

use unicode_normalization::UnicodeNormalization;

use crate::entry::VocabularyEntry;
use crate::reading::dedup_non_empty;

/// Words ignored when comparing glosses ("to eat" == "eat").
pub const STOPWORDS: &[&str] = &["the", "to", "a", "an"];

/// Combining Diacritical Marks block, split off by NFKD.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Normalize a gloss: case and diacritics folded, punctuation turned into
/// spaces, stopwords removed, whitespace collapsed.
///
/// Words are runs of `[a-z0-9]`; a hyphen separates words but is kept.
pub fn normalize_meaning(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let cleaned: String = lowered
        .nfkd()
        .filter(|&c| !is_diacritic(c))
        .map(|c| {
            if is_word_char(c) || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let stripped = strip_stopwords(&cleaned);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Blank out every whole word in [`STOPWORDS`], leaving separators in place.
fn strip_stopwords(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word = String::new();
    for c in s.chars() {
        if is_word_char(c) {
            word.push(c);
            continue;
        }
        flush_word(&mut out, &mut word);
        out.push(c);
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if STOPWORDS.contains(&word.as_str()) {
        out.push(' ');
    } else {
        out.push_str(word);
    }
    word.clear();
}

/// Every accepted gloss of `entry`, normalized, primary meanings first.
pub fn canonical_meanings(entry: &VocabularyEntry) -> Vec<String> {
    dedup_non_empty(entry.all_meanings().map(normalize_meaning).collect())
}

pub fn is_correct_meaning(input: &str, entry: &VocabularyEntry) -> bool {
    let answer = normalize_meaning(input);
    !answer.is_empty() && canonical_meanings(entry).contains(&answer)
}
