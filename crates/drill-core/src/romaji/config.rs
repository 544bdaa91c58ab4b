use std::collections::BTreeMap;

use serde::Deserialize;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("romaji key {key:?} {reason}")]
    InvalidKey { key: String, reason: &'static str },
    #[error("romaji key {0:?} maps to an empty string")]
    EmptyValue(String),
    #[error("romaji trie already initialized")]
    AlreadyInitialized,
}

/// Why a key could never be reached by the scanner, if it couldn't.
fn unreachable_reason(key: &str) -> Option<&'static str> {
    let bytes = key.as_bytes();
    if bytes.is_empty() {
        return Some("is empty");
    }
    if !bytes.iter().all(|&b| b.is_ascii_lowercase() || b == b'-') {
        return Some("must use only a-z and '-' (input is lowercased before lookup)");
    }
    if let [first, second, ..] = bytes {
        if first == second && !b"aeioun-".contains(first) {
            return Some("starts with a doubled consonant, which becomes っ before lookup");
        }
    }
    if key.starts_with("ny") {
        return Some("starts with \"ny\", which becomes ん before lookup");
    }
    None
}

/// Parse a `[mappings]` table into a sorted `BTreeMap<romaji, kana>`.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let TableFile { mappings } =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;
    if mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }
    if let Some((key, reason)) = mappings
        .keys()
        .find_map(|k| unreachable_reason(k).map(|r| (k, r)))
    {
        return Err(RomajiConfigError::InvalidKey {
            key: key.clone(),
            reason,
        });
    }
    if let Some((key, _)) = mappings.iter().find(|(_, kana)| kana.trim().is_empty()) {
        return Err(RomajiConfigError::EmptyValue(key.clone()));
    }
    Ok(mappings)
}
