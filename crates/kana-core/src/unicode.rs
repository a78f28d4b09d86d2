//! Character-level Unicode helpers for kana text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// True when `s` is non-empty and every char is hiragana or the long-vowel
/// mark ー. Typed readings with leftover Latin letters fail this.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// Convert a hiragana string to katakana.
///
/// Only letters and iteration marks have a katakana twin at +0x60; the
/// combining sound marks (U+3099..U+309C) are shared, so they pass through
/// with everything else (ー, ASCII, kanji).
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}' => {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}
