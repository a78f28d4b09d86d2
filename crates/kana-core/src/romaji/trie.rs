use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};
use tracing::debug;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

/// Double-array trie over the romaji keys; value ids index `kana`.
pub struct RomajiTrie {
    da: DoubleArray<u8>,
    kana: Vec<String>,
}

impl RomajiTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            // Both sources are validated: the default by build.rs, custom by init_custom.
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            let trie = RomajiTrie::from_map(map);
            debug!(entries = trie.len(), custom = custom.is_some(), "romaji table built");
            trie
        })
    }

    /// Build from a `romaji → kana` map. Sorted keys give ids in map order.
    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);
        let kana = map.values().cloned().collect();
        Self { da, kana }
    }

    pub fn len(&self) -> usize {
        self.kana.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kana.is_empty()
    }

    pub fn lookup(&self, romaji: &str) -> TrieLookupResult {
        let hit = self.da.probe(romaji.as_bytes());
        let kana = hit.value.map(|id| self.kana[id as usize].clone());
        match (kana, hit.has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(kana), false) => TrieLookupResult::Exact(kana),
            (Some(kana), true) => TrieLookupResult::ExactAndPrefix(kana),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_exact() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("a"), TrieLookupResult::Exact("あ".into()));
    }

    #[test]
    fn test_prefix_k() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("k"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_symbol_hyphen() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("-"), TrieLookupResult::Exact("ー".into()));
    }

    #[test]
    fn test_youon_sha() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("sha"), TrieLookupResult::Exact("しゃ".into()));
    }

    #[test]
    fn test_n_prefix_only() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("n"), TrieLookupResult::Prefix);
        assert_eq!(trie.lookup("nn"), TrieLookupResult::Exact("ん".into()));
    }

    #[test]
    fn test_exact_and_prefix() {
        let trie = RomajiTrie::from_map(BTreeMap::from([
            ("t".to_string(), "T".to_string()),
            ("ta".to_string(), "た".to_string()),
        ]));
        assert_eq!(trie.lookup("t"), TrieLookupResult::ExactAndPrefix("T".into()));
        assert_eq!(trie.lookup("ta"), TrieLookupResult::Exact("た".into()));
        assert_eq!(trie.lookup("tb"), TrieLookupResult::None);
    }

    #[test]
    fn test_punctuation() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("."), TrieLookupResult::Exact("。".into()));
        assert_eq!(trie.lookup(","), TrieLookupResult::Exact("、".into()));
        assert_eq!(trie.lookup("?"), TrieLookupResult::Exact("？".into()));
    }

    #[test]
    fn test_none_for_unknown() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("xyz"), TrieLookupResult::None);
        assert_eq!(trie.lookup("1"), TrieLookupResult::None);
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let trie = RomajiTrie::global();
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        assert_eq!(trie.len(), map.len());
        for (romaji, kana) in &map {
            match trie.lookup(romaji) {
                TrieLookupResult::Exact(ref k) | TrieLookupResult::ExactAndPrefix(ref k) => {
                    assert_eq!(k, kana, "mapping mismatch for romaji={romaji}");
                }
                other => panic!("expected Exact/ExactAndPrefix for {romaji}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_ascii_input_is_none() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.lookup("か"), TrieLookupResult::None);
        assert_eq!(trie.lookup("kか"), TrieLookupResult::None);
    }

    #[test]
    fn test_from_map_ids_follow_key_order() {
        let trie = RomajiTrie::from_map(BTreeMap::from([
            ("kya".to_string(), "きゃ".to_string()),
            ("ka".to_string(), "か".to_string()),
            ("a".to_string(), "あ".to_string()),
        ]));
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.lookup("a"), TrieLookupResult::Exact("あ".into()));
        assert_eq!(trie.lookup("ka"), TrieLookupResult::Exact("か".into()));
        assert_eq!(trie.lookup("ky"), TrieLookupResult::Prefix);
        assert_eq!(trie.lookup("kya"), TrieLookupResult::Exact("きゃ".into()));
    }
}
