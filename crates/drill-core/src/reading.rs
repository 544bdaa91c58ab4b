//! Reading normalization and matching.

use unicode_normalization::UnicodeNormalization;

use crate::entry::{EntryKind, VocabularyEntry};
use crate::romaji::transliterate;
use crate::unicode::{fold_to_hiragana, is_latin, is_reading_char};

/// Normalize a typed or stored reading to bare hiragana/kanji.
///
/// NFKC (full-width Latin becomes ASCII, half-width katakana becomes
/// full-width), katakana → hiragana, romaji → hiragana when any Latin letter
/// is present, then everything outside hiragana, kanji and ー is dropped.
pub fn normalize_reading(input: &str) -> String {
    let composed: String = input.nfkc().collect();
    let mut s = fold_to_hiragana(&composed);
    if s.chars().any(is_latin) {
        s = transliterate(&s);
    }
    s.retain(is_reading_char);
    s
}

/// Every accepted reading of `entry`, normalized, in dataset order.
///
/// Empty results are dropped and repeats keep their first position.
pub fn canonical_readings(entry: &VocabularyEntry) -> Vec<String> {
    let normalized: Vec<String> = match &entry.kind {
        EntryKind::Character { onyomi, kunyomi } => onyomi
            .iter()
            .map(|r| normalize_reading(&fold_to_hiragana(r)))
            .chain(kunyomi.iter().map(|r| normalize_reading(r)))
            .collect(),
        EntryKind::Compound { readings } => {
            readings.iter().map(|r| normalize_reading(r)).collect()
        }
    };
    dedup_non_empty(normalized)
}

pub fn is_correct_reading(input: &str, entry: &VocabularyEntry) -> bool {
    let answer = normalize_reading(input);
    !answer.is_empty() && canonical_readings(entry).contains(&answer)
}

pub(crate) fn dedup_non_empty(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> VocabularyEntry {
        VocabularyEntry::character("日", &["ニチ", "ジツ"], &["ひ", "び", "か"], &["sun", "day"])
    }

    fn japan() -> VocabularyEntry {
        VocabularyEntry::compound("日本", &["にほん", "にっぽん"], &["japan"])
    }

    #[test]
    fn normalize_kana_and_romaji() {
        assert_eq!(normalize_reading("ニチ"), "にち");
        assert_eq!(normalize_reading("nichi"), "にち");
        assert_eq!(normalize_reading(" にほん "), "にほん");
        assert_eq!(normalize_reading("ラーメン"), "らーめん");
    }

    #[test]
    fn normalize_width_variants() {
        // Full-width Latin and half-width katakana are folded by NFKC.
        assert_eq!(normalize_reading("ｎｉｈｏｎ"), "にほん");
        assert_eq!(normalize_reading("ﾆﾎﾝ"), "にほん");
    }

    #[test]
    fn normalize_drops_foreign_characters() {
        assert_eq!(normalize_reading("にほん！"), "にほん");
        assert_eq!(normalize_reading("日本🎌"), "日本");
        assert_eq!(normalize_reading("xyz"), "");
        assert_eq!(normalize_reading(""), "");
        assert_eq!(normalize_reading("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["nichi", "ニチ", "kitte", "ｎｉｈｏｎ", "日本 go", "xyz", "らーめん"] {
            let once = normalize_reading(s);
            assert_eq!(normalize_reading(&once), once, "input {s}");
        }
    }

    #[test]
    fn canonical_readings_of_character() {
        assert_eq!(canonical_readings(&sun()), ["にち", "じつ", "ひ", "び", "か"]);
    }

    #[test]
    fn canonical_readings_drop_empty_and_repeats() {
        let e = VocabularyEntry::character("生", &["セイ", "", "!"], &["せい", "い"], &[]);
        assert_eq!(canonical_readings(&e), ["せい", "い"]);
    }

    #[test]
    fn character_readings_match_in_any_script() {
        let e = sun();
        assert!(is_correct_reading("nichi", &e));
        assert!(is_correct_reading("NICHI", &e));
        assert!(is_correct_reading("ニチ", &e));
        assert!(is_correct_reading("にち", &e));
        assert!(is_correct_reading("jitsu", &e));
        assert!(is_correct_reading("hi", &e));
        assert!(is_correct_reading("ヒ", &e));
        assert!(!is_correct_reading("xyz", &e));
        assert!(!is_correct_reading("nichii", &e));
    }

    #[test]
    fn compound_readings() {
        let e = japan();
        assert!(is_correct_reading("nihon", &e));
        assert!(is_correct_reading("NIHON", &e));
        assert!(is_correct_reading("nippon", &e));
        assert!(is_correct_reading("にっぽん", &e));
        assert!(is_correct_reading("ニホン", &e));
        assert!(!is_correct_reading("nihonn go", &e));
    }

    #[test]
    fn empty_answers_never_match() {
        let e = japan();
        assert!(!is_correct_reading("", &e));
        assert!(!is_correct_reading("  ", &e));
        assert!(!is_correct_reading("!!", &e));
    }

    #[test]
    fn entry_without_readings_rejects_everything() {
        let e = VocabularyEntry::compound("空", &[], &[]);
        assert!(canonical_readings(&e).is_empty());
        assert!(!is_correct_reading("sora", &e));
        assert!(!is_correct_reading("", &e));
    }

    #[test]
    fn compound_gakusei() {
        let e = VocabularyEntry::compound("学生", &["がくせい"], &["student"]);
        assert!(is_correct_reading("gakusei", &e));
        assert!(is_correct_reading("ガクセイ", &e));
    }
}
