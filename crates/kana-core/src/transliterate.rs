//! Buffer-level transliteration into the primary (hiragana) and secondary
//! (katakana) scripts.
//!
//! Pure and total: every key sequence has a rendering. ASCII runs go through
//! the romaji converter with a forced flush, anything else (kana keypad
//! input, symbols) is copied through.

use crate::romaji::convert_romaji;
use crate::unicode::hiragana_to_katakana;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    pub primary: String,
    pub secondary: String,
}

impl Transliteration {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

/// Render a key buffer in both scripts.
pub fn transliterate(keys: &[char]) -> Transliteration {
    let primary = primary_form(keys);
    let secondary = secondary_form(&primary);
    Transliteration { primary, secondary }
}

/// Render a key buffer in the primary script only.
pub fn primary_form(keys: &[char]) -> String {
    let mut composed = String::new();
    let mut pending = String::new();
    for &key in keys {
        if key.is_ascii() {
            pending.push(key);
        } else {
            composed = convert_romaji(&composed, &pending, true).composed_kana;
            pending.clear();
            composed.push(key);
        }
    }
    // A final pass with an empty pending still collapses "kあ" → "か".
    convert_romaji(&composed, &pending, true).composed_kana
}

/// The secondary script is a fixed mapping of the primary form.
pub fn secondary_form(primary: &str) -> String {
    hiragana_to_katakana(primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_buffer() {
        let t = transliterate(&[]);
        assert!(t.is_empty());
        assert!(t.secondary.is_empty());
    }

    #[test]
    fn test_single_consonant_echoed() {
        let t = transliterate(&keys("k"));
        assert_eq!(t.primary, "k");
        assert_eq!(t.secondary, "k");
    }

    #[test]
    fn test_ka() {
        let t = transliterate(&keys("ka"));
        assert_eq!(t.primary, "か");
        assert_eq!(t.secondary, "カ");
    }

    #[test]
    fn test_trailing_n_flushed() {
        let t = transliterate(&keys("kan"));
        assert_eq!(t.primary, "かん");
        assert_eq!(t.secondary, "カン");
    }

    #[test]
    fn test_kana_words() {
        assert_eq!(transliterate(&keys("kana")).primary, "かな");
        assert_eq!(transliterate(&keys("nihongo")).primary, "にほんご");
        assert_eq!(transliterate(&keys("toukyou")).secondary, "トウキョウ");
        assert_eq!(transliterate(&keys("ra-menn")).primary, "らーめん");
    }

    #[test]
    fn test_sokuon_pending_consonant() {
        assert_eq!(transliterate(&keys("kk")).primary, "っk");
        assert_eq!(transliterate(&keys("kitte")).primary, "きって");
    }

    #[test]
    fn test_kana_keys_pass_through() {
        let t = transliterate(&keys("かな"));
        assert_eq!(t.primary, "かな");
        assert_eq!(t.secondary, "カナ");
    }

    #[test]
    fn test_mixed_latin_and_kana_keys() {
        assert_eq!(transliterate(&keys("kあ")).primary, "か");
        assert_eq!(transliterate(&keys("あka")).primary, "あか");
    }

    #[test]
    fn test_unmapped_input_passthrough() {
        assert_eq!(transliterate(&keys("123")).primary, "123");
        assert_eq!(transliterate(&keys("é")).primary, "é");
    }

    #[test]
    fn test_secondary_derivable_from_primary() {
        for input in ["kyou", "shinbun", "x", "qwrt", "ぱn"] {
            let t = transliterate(&keys(input));
            assert_eq!(t.secondary, secondary_form(&t.primary), "input={input}");
        }
    }

    #[test]
    fn test_empty_iff_buffer_empty() {
        for input in ["a", "k", "n", "-", "'", "xtsu"] {
            let t = transliterate(&keys(input));
            assert!(!t.primary.is_empty(), "input={input}");
            assert!(!t.secondary.is_empty(), "input={input}");
        }
    }
}
