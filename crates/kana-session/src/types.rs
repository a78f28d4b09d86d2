use kana_core::candidates::Candidate;
use kana_core::transliterate::Transliteration;

/// Which phonetic rendering of the buffer a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptForm {
    /// Hiragana.
    Primary,
    /// Katakana.
    Secondary,
}

/// A discrete input event from the composition surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Key(char),
    Delete,
    Space,
    Commit,
    Clear,
    SelectForm(ScriptForm),
    SelectCandidate(usize),
}

pub(crate) enum SessionState {
    Idle,
    Composing(Composition),
}

/// Live composition. Exists only while the buffer is non-empty.
pub(crate) struct Composition {
    pub(crate) buffer: Vec<char>,
    pub(crate) forms: Transliteration,
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) selection: Option<String>,
    /// Reading sent with the most recent lookup of this composition.
    pub(crate) last_lookup: Option<String>,
    /// Sequence number of the lookup whose result is still awaited.
    pub(crate) pending_lookup: Option<u64>,
}

impl Composition {
    pub(crate) fn new() -> Self {
        Self {
            buffer: Vec::new(),
            forms: Transliteration::default(),
            candidates: Vec::new(),
            selection: None,
            last_lookup: None,
            pending_lookup: None,
        }
    }

    /// The raw keys as typed.
    pub(crate) fn raw_text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Text a commit would append: selection, then primary form, then raw keys.
    pub(crate) fn final_text(&self) -> String {
        if let Some(selection) = self.selection.as_deref().filter(|s| !s.is_empty()) {
            return selection.to_string();
        }
        if !self.forms.primary.is_empty() {
            return self.forms.primary.clone();
        }
        self.raw_text()
    }

    pub(crate) fn is_valid_selection(&self, value: &str) -> bool {
        value == self.forms.primary
            || value == self.forms.secondary
            || self.candidates.iter().any(|c| c.surface == value)
    }

    /// Drop a selection that no longer names a form or candidate.
    pub(crate) fn prune_selection(&mut self) {
        let keep = self
            .selection
            .as_deref()
            .map_or(true, |s| self.is_valid_selection(s));
        if !keep {
            self.selection = None;
        }
    }
}

/// A dictionary lookup the caller must run and report back with
/// `receive_candidates(seq, ..)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub reading: String,
    pub seq: u64,
}

/// Response from every session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// False when the operation was a no-op (e.g. selecting while idle).
    pub consumed: bool,
    /// New host value, already delivered through `HostField::on_value_change`.
    pub value_changed: Option<String>,
    pub lookup: Option<LookupRequest>,
    /// Commit while idle: the surface should close.
    pub close_surface: bool,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            value_changed: None,
            lookup: None,
            close_surface: false,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}
