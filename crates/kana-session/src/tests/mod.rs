
use std::collections::HashSet;

use kana_core::candidates::{Candidate, MAX_CANDIDATES};
use kana_core::settings::CompositionSettings;

use super::{HostField, InputSession, KeyResponse, LookupRequest, TextField};

pub(super) fn make_session(value: &str, max_length: Option<usize>) -> InputSession<TextField> {
    InputSession::with_config(
        TextField::new(value, max_length),
        CompositionSettings::default(),
    )
}

// Helper: simulate typing a string one key at a time
pub(super) fn type_keys(session: &mut InputSession<TextField>, s: &str) -> Vec<KeyResponse> {
    s.chars().map(|ch| session.append_key(ch)).collect()
}

pub(super) fn lookups(responses: &[KeyResponse]) -> Vec<LookupRequest> {
    responses.iter().filter_map(|r| r.lookup.clone()).collect()
}

pub(super) fn cand(surface: &str, reading: &str) -> Candidate {
    Candidate::new(surface, reading, "")
}

/// Structural invariants of the composition state.
pub(super) fn assert_invariants(session: &InputSession<TextField>) {
    let buffer_empty = session.buffer().is_empty();
    assert_eq!(buffer_empty, session.primary_form().is_empty());
    assert_eq!(buffer_empty, session.secondary_form().is_empty());
    assert_eq!(session.is_composing(), !buffer_empty);

    let candidates = session.candidates();
    assert!(candidates.len() <= MAX_CANDIDATES);
    let surfaces: HashSet<&str> = candidates.iter().map(|c| c.surface.as_str()).collect();
    assert_eq!(surfaces.len(), candidates.len(), "duplicate surfaces");

    if let Some(selection) = session.selection() {
        assert!(
            selection == session.primary_form()
                || selection == session.secondary_form()
                || surfaces.contains(selection),
            "selection {selection:?} names no form or candidate",
        );
    }

    if session.is_loading() {
        assert!(session.is_composing());
    }

    if let Some(max) = session.host().max_length() {
        assert!(session.committed_text().chars().count() <= max);
    }
    assert_eq!(session.committed_text(), session.host().as_str());
}
