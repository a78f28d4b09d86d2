use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::candidates::{dedup_and_cap, Candidate};
use kana_core::settings::settings;
use kana_core::unicode::is_kana_reading;
use kana_engine::{CandidateGateway, JishoGateway};

use super::{die, pad};

#[derive(Serialize)]
struct LookupReport<'a> {
    reading: &'a str,
    candidates: &'a [Candidate],
}

pub fn lookup_cmd(reading: &str, endpoint: Option<&str>, json: bool) {
    let mut config = settings().gateway.clone();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint.to_string();
    }
    if !is_kana_reading(reading) {
        eprintln!("Warning: {reading:?} is not a hiragana reading");
    }
    let gateway = JishoGateway::new(&config);
    let raw = die!(gateway.fetch_candidates(reading), "Error: {}");
    let candidates = dedup_and_cap(raw, settings().composition.max_candidates);

    if json {
        let report = LookupReport {
            reading,
            candidates: &candidates,
        };
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }

    if candidates.is_empty() {
        println!("No candidates for {reading}.");
        return;
    }
    print!("{}", format_table(&candidates));
}

/// One line per candidate with surface and reading columns aligned.
fn format_table(candidates: &[Candidate]) -> String {
    let surface_w = column_width(candidates.iter().map(|c| c.surface.as_str()));
    let reading_w = column_width(candidates.iter().map(|c| c.reading.as_str()));
    let mut out = String::new();
    for (i, c) in candidates.iter().enumerate() {
        let line = format!(
            "{:>2}. {}  {}  {}",
            i + 1,
            pad(&c.surface, surface_w),
            pad(&c.reading, reading_w),
            c.gloss
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}
