use std::fs;

use super::die;

pub fn romaji_export() {
    print!("{}", kana_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(kana_core::romaji::parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", kana_core::settings::DEFAULT_SETTINGS_TOML);
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kana_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: composition.lookup_threshold={}, composition.max_candidates={}, gateway.endpoint={}",
        s.composition.lookup_threshold, s.composition.max_candidates, s.gateway.endpoint
    );
}
