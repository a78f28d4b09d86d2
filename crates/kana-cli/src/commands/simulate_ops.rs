use std::path::Path;
use std::sync::Arc;

use kana_core::settings::settings;
use kana_engine::{CandidateGateway, ComposeSession, JishoGateway, StaticGateway};
use kana_session::{HostField, InputSession, KeyEvent, ScriptForm, TextField};

use super::{die, pad};
use crate::script::parse_script;

pub struct SimulateOptions<'a> {
    pub value: &'a str,
    pub max_length: Option<usize>,
    pub dict: Option<&'a str>,
    pub timeout_ms: Option<u64>,
}

pub fn simulate_cmd(script: &str, opts: &SimulateOptions) {
    let events = die!(parse_script(script), "Error: {}");

    let gateway: Arc<dyn CandidateGateway> = match opts.dict {
        Some(path) => Arc::new(die!(
            StaticGateway::load(Path::new(path)),
            "Error loading {path}: {}"
        )),
        None => Arc::new(JishoGateway::from_settings()),
    };
    let mut config = settings().composition.clone();
    if let Some(ms) = opts.timeout_ms {
        config.lookup_timeout_ms = ms;
    }
    let wait = config.lookup_timeout();

    let host = TextField::new(opts.value, opts.max_length);
    let mut compose = die!(
        ComposeSession::with_config(host, gateway, config),
        "Error starting lookup worker: {}"
    );

    println!("{}| {}", pad("(start)", 10), describe_state(compose.session()));
    for event in events {
        let label = event_label(&event);
        let resp = compose.handle_key(event);
        if resp.lookup.is_some() {
            compose.wait_for_lookup(wait);
        }
        let mut line = format!("{}| {}", pad(&label, 10), describe_state(compose.session()));
        if !resp.consumed {
            line.push_str("  (ignored)");
        }
        if resp.close_surface {
            line.push_str("  (close)");
        }
        println!("{line}");
    }
}

fn event_label(event: &KeyEvent) -> String {
    match event {
        KeyEvent::Key(ch) => ch.to_string(),
        KeyEvent::Delete => ":bs".to_string(),
        KeyEvent::Space => ":space".to_string(),
        KeyEvent::Commit => ":commit".to_string(),
        KeyEvent::Clear => ":clear".to_string(),
        KeyEvent::SelectForm(ScriptForm::Primary) => ":primary".to_string(),
        KeyEvent::SelectForm(ScriptForm::Secondary) => ":secondary".to_string(),
        KeyEvent::SelectCandidate(i) => format!(":cand={i}"),
    }
}

/// One-line summary of the session: value, composition, candidates.
fn describe_state<H: HostField>(session: &InputSession<H>) -> String {
    let mut out = format!("value={:?}", session.committed_text());
    if !session.is_composing() {
        return out;
    }

    out.push_str(&format!(
        " composing={} ({})",
        session.primary_form(),
        session.secondary_form()
    ));
    if session.is_loading() {
        out.push_str(" [loading]");
    }
    if !session.candidates().is_empty() {
        let list: Vec<String> = session
            .candidates()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{i}:{}", c.surface))
            .collect();
        out.push_str(&format!(" candidates=[{}]", list.join(" ")));
    }
    if let Some(selection) = session.selection() {
        out.push_str(&format!(" selected={selection}"));
    }
    out
}
