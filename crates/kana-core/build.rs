use toml::Table;

fn main() {
    check_settings(include_str!("src/default_settings.toml"));
    check_romaji(include_str!("src/romaji/default_romaji.toml"));
}

fn parse(path: &str, content: &str) -> Table {
    content
        .parse::<Table>()
        .unwrap_or_else(|e| panic!("{path}: not a TOML table: {e}"))
}

fn section<'a>(path: &str, doc: &'a Table, name: &str) -> &'a Table {
    doc.get(name)
        .and_then(|v| v.as_table())
        .unwrap_or_else(|| panic!("{path}: missing [{name}] table"))
}

fn check_settings(content: &str) {
    let path = "src/default_settings.toml";
    let doc = parse(path, content);
    section(path, &doc, "composition");
    section(path, &doc, "gateway");
}

fn check_romaji(content: &str) {
    let path = "src/romaji/default_romaji.toml";
    let doc = parse(path, content);
    let mappings = section(path, &doc, "mappings");
    if mappings.is_empty() {
        panic!("{path}: [mappings] is empty");
    }
    for (key, kana) in mappings {
        match kana.as_str() {
            Some(s) if !s.is_empty() && !key.is_empty() && key.is_ascii() => {}
            _ => panic!("{path}: bad mapping {key:?} = {kana}"),
        }
    }
}
