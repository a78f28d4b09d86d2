//! All-or-nothing append policy for committed text.
//!
//! An addition that would push the text past `max_length` is dropped in
//! full; it is never cut down to fit. Lengths count Unicode scalar values.

/// Length of `text` as the host measures it.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether appending `addition` keeps `committed` within `max_length`.
pub fn fits(committed: &str, addition: &str, max_length: Option<usize>) -> bool {
    match max_length {
        None => true,
        Some(max) => text_len(committed) + text_len(addition) <= max,
    }
}

/// Compute the committed text after appending `addition`.
pub fn apply(committed: &str, addition: &str, max_length: Option<usize>) -> String {
    if fits(committed, addition, max_length) {
        format!("{committed}{addition}")
    } else {
        committed.to_string()
    }
}

/// Drop the last character of `committed`, if any.
pub fn delete_last(committed: &str) -> String {
    let mut text = committed.to_string();
    text.pop();
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_always_appends() {
        assert_eq!(apply("abc", "de", None), "abcde");
    }

    #[test]
    fn test_within_limit_appends() {
        assert_eq!(apply("abc", "d", Some(4)), "abcd");
        assert_eq!(apply("", "日本", Some(2)), "日本");
    }

    #[test]
    fn test_overflow_drops_whole_addition() {
        assert_eq!(apply("abc", "de", Some(4)), "abc");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(apply("日本", "語", Some(3)), "日本語");
        assert_eq!(apply("日本", "語だ", Some(3)), "日本");
    }

    #[test]
    fn test_zero_limit() {
        assert_eq!(apply("", "a", Some(0)), "");
        assert_eq!(apply("", "", Some(0)), "");
    }

    #[test]
    fn test_delete_last() {
        assert_eq!(delete_last("hi"), "h");
        assert_eq!(delete_last("日本"), "日");
        assert_eq!(delete_last(""), "");
    }
}
