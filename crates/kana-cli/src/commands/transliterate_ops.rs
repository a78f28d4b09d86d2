use kana_core::transliterate::transliterate;

pub fn transliterate_cmd(keys: &str) {
    let keys: Vec<char> = keys.chars().flat_map(char::to_lowercase).collect();
    let forms = transliterate(&keys);
    println!("hiragana: {}", forms.primary);
    println!("katakana: {}", forms.secondary);
}
