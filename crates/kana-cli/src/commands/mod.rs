pub mod config_ops;
pub mod lookup_ops;
pub mod simulate_ops;
pub mod transliterate_ops;

use unicode_width::UnicodeWidthStr;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Right-pad `s` with spaces to `width` terminal columns (kana are two wide).
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
