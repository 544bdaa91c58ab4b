//! Romaji-to-hiragana transliteration for typed readings.
//!
//! A fixed sequence of pre-passes (long "o", doubled consonants, moraic
//! nasal) rewrites the input, then a longest-match scan over a byte trie
//! turns the remaining romaji into kana. Anything the table does not cover
//! is left in the output as-is.

mod config;
mod transliterate;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use transliterate::{transliterate, transliterate_with};
pub use trie::RomajiTrie;

/// Returns the embedded default romaji table.
pub fn default_toml() -> &'static str {
    config::DEFAULT_TOML
}
