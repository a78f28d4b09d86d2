use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Deserialize;

/// On-disk shape: a single `[mappings]` table of `romaji = "kana"` pairs.
#[derive(Deserialize)]
struct MappingFile {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be non-empty ASCII: {0:?}")]
    NonAsciiKey(String),
    #[error("empty kana for key: {0}")]
    EmptyValue(String),
    #[error("keys {0:?} and {1:?} collide once lowercased")]
    DuplicateKey(String, String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse a mapping table into `romaji → kana`, keys lowercased.
///
/// Keys are what the user types (letters, `'`, punctuation); the session
/// lowercases every key before conversion, so `KA` and `ka` are the same key.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let file: MappingFile =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;
    if file.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut table: BTreeMap<String, (String, String)> = BTreeMap::new();
    for (raw_key, kana) in file.mappings {
        if raw_key.is_empty() || !raw_key.is_ascii() {
            return Err(RomajiConfigError::NonAsciiKey(raw_key));
        }
        if kana.is_empty() {
            return Err(RomajiConfigError::EmptyValue(raw_key));
        }
        match table.entry(raw_key.to_ascii_lowercase()) {
            Entry::Occupied(e) => {
                return Err(RomajiConfigError::DuplicateKey(e.get().0.clone(), raw_key));
            }
            Entry::Vacant(e) => {
                e.insert((raw_key, kana));
            }
        }
    }

    Ok(table
        .into_iter()
        .map(|(key, (_, kana))| (key, kana))
        .collect())
}
