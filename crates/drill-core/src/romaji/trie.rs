use std::sync::OnceLock;

use lexime_trie::DoubleArray;

use super::config::{parse_romaji_toml, RomajiConfigError, DEFAULT_TOML};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Double-array trie over the romaji table keys; `values[id]` is the kana.
pub struct RomajiTrie {
    da: DoubleArray<u8>,
    values: Vec<String>,
}

impl RomajiTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// The process-wide table: the custom one if registered, else the embedded default.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML.get().map_or(DEFAULT_TOML, String::as_str);
            Self::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        // BTreeMap iteration is sorted, which the double-array build requires
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);
        let values = map.into_values().collect();
        Ok(RomajiTrie { da, values })
    }

    /// Number of romaji keys in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact lookup of a single romaji key.
    pub fn get(&self, romaji: &str) -> Option<&str> {
        match self.longest_match(romaji.as_bytes()) {
            Some((len, kana)) if len == romaji.len() => Some(kana),
            _ => None,
        }
    }

    /// Longest key that is a prefix of `input`.
    ///
    /// Returns the matched length in bytes and its kana.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, &str)> {
        self.da
            .common_prefix_search(input)
            .last()
            .map(|m| (m.len, self.values[m.value_id as usize].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_exact() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.get("a"), Some("あ"));
    }

    #[test]
    fn test_prefix_only_has_no_kana() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.get("k"), None);
        assert_eq!(trie.get("sh"), None);
    }

    #[test]
    fn test_youon_sha() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.get("sha"), Some("しゃ"));
    }

    #[test]
    fn test_longest_match_prefers_longer_key() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.longest_match(b"shashin"), Some((3, "しゃ")));
        assert_eq!(trie.longest_match(b"kyou"), Some((3, "きょ")));
        assert_eq!(trie.longest_match(b"tsuki"), Some((3, "つ")));
        assert_eq!(trie.longest_match(b"kaze"), Some((2, "か")));
    }

    #[test]
    fn test_longest_match_falls_back_to_shorter_key() {
        // "c" is only a prefix, so nothing is consumed.
        let trie = RomajiTrie::global();
        assert_eq!(trie.longest_match(b"cka"), None);
        // "shy" is not a key; the walk stops and nothing shorter matches either.
        assert_eq!(trie.longest_match(b"shy"), None);
        // "o" matches even though "ou" is not a key.
        assert_eq!(trie.longest_match(b"ou"), Some((1, "お")));
    }

    #[test]
    fn test_longest_match_empty_and_unknown() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.longest_match(b""), None);
        assert_eq!(trie.longest_match(b"xyz"), None);
        assert_eq!(trie.longest_match("ん".as_bytes()), None);
    }

    #[test]
    fn test_from_custom_toml() {
        let trie = RomajiTrie::from_toml("[mappings]\nka = \"カ\"\nkya = \"キャ\"\n").unwrap();
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.longest_match(b"kyaku"), Some((3, "キャ")));
        assert_eq!(trie.get("a"), None);
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let trie = RomajiTrie::global();
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        assert_eq!(trie.len(), map.len());
        for (romaji, kana) in &map {
            assert_eq!(
                trie.get(romaji),
                Some(kana.as_str()),
                "mapping mismatch for romaji={romaji}"
            );
        }
    }
}
