//! Character-level Unicode classification and script folding for Japanese text.

/// One row of the script fold table: every codepoint in `first..=last`
/// moves down by `offset`.
#[derive(Debug, Clone, Copy)]
pub struct ScriptFold {
    pub first: char,
    pub last: char,
    pub offset: u32,
}

/// Katakana ァ..ヶ (86 codepoints) onto hiragana ぁ..ゖ.
///
/// ー, ヷ..ヺ and the iteration marks sit outside the range and are left alone.
pub const SCRIPT_FOLDS: &[ScriptFold] = &[ScriptFold {
    first: '\u{30A1}',
    last: '\u{30F6}',
    offset: 0x60,
}];

/// The prolonged sound mark, kept in readings in both scripts.
pub const PROLONGED_SOUND_MARK: char = 'ー';

fn fold_char(c: char, folds: &[ScriptFold]) -> char {
    folds
        .iter()
        .find(|f| (f.first..=f.last).contains(&c))
        .and_then(|f| char::from_u32(c as u32 - f.offset))
        .unwrap_or(c)
}

/// Fold katakana to hiragana. Everything else passes through unchanged.
pub fn fold_to_hiragana(s: &str) -> String {
    fold_with(s, SCRIPT_FOLDS)
}

/// Apply an arbitrary fold table.
pub fn fold_with(s: &str, folds: &[ScriptFold]) -> String {
    s.chars().map(|c| fold_char(c, folds)).collect()
}

/// Hiragana letters and iteration marks, excluding the combining voicing
/// marks (U+3099..U+309C) which are not Hiragana script.
pub fn is_hiragana_letter(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309F}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2FA1F}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || matches!(c, '々' | '〇' | '〻')
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters that survive reading normalization.
pub fn is_reading_char(c: char) -> bool {
    is_hiragana_letter(c) || is_kanji(c) || c == PROLONGED_SOUND_MARK
}
