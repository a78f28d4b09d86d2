//! Romaji-to-kana conversion.
//!
//! A sorted lookup table maps ASCII key sequences to hiragana and answers
//! prefix queries, so the converter can decide whether to wait for more
//! keys or emit what it has. Handles sokuon (っ), hatsuon (ん) and yōon (きゃ).

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{convert_romaji, RomajiConvertResult};
pub use trie::{RomajiTrie, TrieLookupResult};

/// Returns the embedded default romaji table.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
