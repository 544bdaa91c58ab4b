use tracing::trace;

use super::trie::RomajiTrie;

/// Private-use stand-in for a lengthened "o" until the final pass.
const LONG_O: char = '\u{E000}';
const LONG_O_MARKED: &str = "o\u{E000}";
const LONG_O_KANA: &str = "う";

const SOKUON: char = 'っ';
const HATSUON: char = 'ん';

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// ASCII consonants that double into っ. The nasal is handled separately.
fn is_geminating(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c) && c != 'n'
}

/// Transliterate romaji (any case) to hiragana with the global table.
///
/// Never fails: Latin letters that match no mora are kept in the output, so
/// callers should read leftover ASCII as "no confident transliteration".
pub fn transliterate(input: &str) -> String {
    transliterate_with(RomajiTrie::global(), input)
}

/// Same as [`transliterate`] with an explicit table.
pub fn transliterate_with(trie: &RomajiTrie, input: &str) -> String {
    let folded = input.trim().to_lowercase();
    let marked = mark_long_o(&folded);
    let geminated = fold_gemination(&marked);
    let nasal = resolve_nasals(&geminated);
    let kana = substitute_morae(trie, &nasal);
    let out: String = kana
        .replace(LONG_O, LONG_O_KANA)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    trace!(input, output = %out, "transliterate");
    out
}

/// `ou` and then `oo` become `o` + placeholder, so "kyou" ends in う and the
/// second letter is never read as a vowel mora of its own.
fn mark_long_o(s: &str) -> String {
    s.replace("ou", LONG_O_MARKED).replace("oo", LONG_O_MARKED)
}

/// `kk` → `っk` for every consonant except `n`, and `tch` → `っch`.
fn fold_gemination(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_geminating(c) && chars.get(i + 1) == Some(&c) {
            out.push(SOKUON);
            out.push(c);
            i += 2;
        } else if c == 't' && chars.get(i + 1) == Some(&'c') && chars.get(i + 2) == Some(&'h') {
            // Hepburn writes っち as "tchi"
            out.push(SOKUON);
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Decide every `n` up front: either it stays as the onset of the next mora
/// (only when a vowel follows) or it becomes ん right here.
fn resolve_nasals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != 'n' {
            out.push(c);
            i += 1;
            continue;
        }
        match chars.get(i + 1).copied() {
            None => {
                out.push(HATSUON);
                i += 1;
            }
            Some('\'') => {
                out.push(HATSUON);
                i += 2;
            }
            Some('n') => {
                out.push(HATSUON);
                // "nna" keeps the second n as the onset of な.
                let onset_follows = chars.get(i + 2).is_some_and(|&c| is_vowel(c));
                i += if onset_follows { 1 } else { 2 };
            }
            // Eager: "konya" is こんや, never こにゃ.
            Some('y') => {
                out.push(HATSUON);
                i += 1;
            }
            Some(next) if is_vowel(next) => {
                out.push(c);
                i += 1;
            }
            Some(_) => {
                out.push(HATSUON);
                i += 1;
            }
        }
    }
    out
}

/// Left-to-right scan consuming the longest table key at each position.
fn substitute_morae(trie: &RomajiTrie, s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() * 3);
    let mut i = 0;
    while i < bytes.len() {
        // Keys are ASCII, so a match always ends on a char boundary.
        if let Some((len, kana)) = trie.longest_match(&bytes[i..]) {
            out.push_str(kana);
            i += len;
            continue;
        }
        let Some(ch) = s[i..].chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word() {
        assert_eq!(transliterate("gakusei"), "がくせい");
        assert_eq!(transliterate("tsukue"), "つくえ");
        assert_eq!(transliterate("sakana"), "さかな");
    }

    #[test]
    fn test_youon_with_long_o() {
        assert_eq!(transliterate("kyou"), "きょう");
        assert_eq!(transliterate("toukyou"), "とうきょう");
        assert_eq!(transliterate("benkyou"), "べんきょう");
    }

    #[test]
    fn test_oo_is_marked_long() {
        // The placeholder always restores to う, so "oo" reads as おう.
        assert_eq!(transliterate("ookii"), "おうきい");
        assert_eq!(transliterate("too"), "とう");
    }

    #[test]
    fn test_gemination() {
        let kitte = transliterate("kitte");
        let kite = transliterate("kite");
        assert_eq!(kitte, "きって");
        assert_eq!(kite, "きて");
        assert_ne!(kitte, kite);
        assert_eq!(transliterate("chotto"), "ちょっと");
        assert_eq!(transliterate("kippu"), "きっぷ");
        assert_eq!(transliterate("nippon"), "にっぽん");
        assert_eq!(transliterate("macchi"), "まっち");
        assert_eq!(transliterate("matcha"), "まっちゃ");
        assert_eq!(transliterate("kotchi"), "こっち");
    }

    #[test]
    fn test_gemination_odd_run() {
        assert_eq!(fold_gemination("kkk"), "っkk");
        assert_eq!(fold_gemination("nn"), "nn");
        assert_eq!(fold_gemination("aa"), "aa");
    }

    #[test]
    fn test_nasal_onset_before_vowel() {
        assert_eq!(transliterate("nihon"), "にほん");
        assert_eq!(transliterate("nichi"), "にち");
        assert_eq!(transliterate("onna"), "おんな");
    }

    #[test]
    fn test_nasal_before_consonant_and_at_end() {
        assert_eq!(transliterate("shinbun"), "しんぶん");
        assert_eq!(transliterate("kanji"), "かんじ");
        assert_eq!(transliterate("hon"), "ほん");
        assert_eq!(transliterate("sensei"), "せんせい");
    }

    #[test]
    fn test_double_n() {
        assert_eq!(transliterate("konnichiwa"), "こんにちわ");
        assert_eq!(transliterate("honn"), "ほん");
        assert_eq!(transliterate("kannji"), "かんじ");
    }

    #[test]
    fn test_nasal_apostrophe() {
        assert_eq!(transliterate("kin'en"), "きんえん");
        assert_eq!(transliterate("kon'ya"), "こんや");
    }

    #[test]
    fn test_nasal_before_y_is_eager() {
        assert_eq!(transliterate("konya"), "こんや");
    }

    #[test]
    fn test_hyphen_is_long_vowel_mark() {
        assert_eq!(transliterate("ra-men"), "らーめん");
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(transliterate("  NIHON "), "にほん");
        assert_eq!(transliterate("hon ya"), "ほんや");
        assert_eq!(transliterate("Ga Ku Sei"), "がくせい");
    }

    #[test]
    fn test_unmapped_latin_is_kept() {
        assert_eq!(transliterate("xyz"), "xyz");
        assert_eq!(transliterate("kaq"), "かq");
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_kana_passes_through() {
        assert_eq!(transliterate("にほn"), "にほん");
        assert_eq!(transliterate("がくsei"), "がくせい");
    }

    #[test]
    fn test_custom_table() {
        let trie = RomajiTrie::from_toml("[mappings]\nka = \"カ\"\nna = \"ナ\"\n").unwrap();
        assert_eq!(transliterate_with(&trie, "kanna"), "カんナ");
        assert_eq!(transliterate_with(&trie, "ki"), "ki");
    }
}
