//! Composition state machine for a kana input surface.
//!
//! `InputSession` owns the pending phonetic keys, their hiragana/katakana
//! renderings and the dictionary candidates for them, and writes committed
//! text into a [`HostField`]. Dictionary lookups are not performed here:
//! operations hand back a [`LookupRequest`] and the caller reports the
//! outcome with [`InputSession::receive_candidates`].

pub(crate) mod types;

mod candidate_gen;
mod commit;
mod composing;
mod host;
mod key_handlers;
mod surface;

#[cfg(test)]
mod tests;

use kana_core::candidates::Candidate;
use kana_core::settings::{settings, CompositionSettings};

pub use host::{HostField, TextField};
pub use surface::{InputSurface, NativeField, PlatformCapability};
pub use types::{KeyEvent, KeyResponse, LookupRequest, ScriptForm};

use types::{Composition, SessionState};

/// Stateful composition session for one input widget.
pub struct InputSession<H: HostField> {
    host: H,
    /// Mirror of the host value.
    committed: String,
    state: SessionState,
    config: CompositionSettings,
    /// Last lookup sequence number issued; never reused within a session.
    lookup_seq: u64,
}

impl<H: HostField> InputSession<H> {
    /// Create a session configured from the global settings.
    pub fn new(host: H) -> Self {
        Self::with_config(host, settings().composition.clone())
    }

    pub fn with_config(host: H, config: CompositionSettings) -> Self {
        let committed = host.value();
        Self {
            host,
            committed,
            state: SessionState::Idle,
            config,
            lookup_seq: 0,
        }
    }

    pub fn config(&self) -> &CompositionSettings {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Re-read the committed text after the host changed it on its own.
    pub fn sync_from_host(&mut self) {
        self.committed = self.host.value();
    }

    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    /// True while a lookup for the current primary form is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_lookup().is_some()
    }

    pub fn pending_lookup(&self) -> Option<u64> {
        self.composition().and_then(|c| c.pending_lookup)
    }

    pub fn buffer(&self) -> &[char] {
        match self.composition() {
            Some(c) => &c.buffer,
            None => &[],
        }
    }

    pub fn primary_form(&self) -> &str {
        self.composition().map_or("", |c| c.forms.primary.as_str())
    }

    pub fn secondary_form(&self) -> &str {
        self.composition().map_or("", |c| c.forms.secondary.as_str())
    }

    pub fn candidates(&self) -> &[Candidate] {
        match self.composition() {
            Some(c) => &c.candidates,
            None => &[],
        }
    }

    pub fn selection(&self) -> Option<&str> {
        self.composition().and_then(|c| c.selection.as_deref())
    }

    /// Text shown after the committed value while composing: the selection,
    /// else the primary form, else the raw keys.
    pub fn composing_text(&self) -> String {
        self.composition()
            .map(Composition::final_text)
            .unwrap_or_default()
    }

    fn composition(&self) -> Option<&Composition> {
        match &self.state {
            SessionState::Composing(c) => Some(c),
            SessionState::Idle => None,
        }
    }

    /// Mutable reference to the composing state. Panics if Idle.
    fn comp(&mut self) -> &mut Composition {
        match &mut self.state {
            SessionState::Composing(ref mut c) => c,
            SessionState::Idle => unreachable!("comp() called in Idle state"),
        }
    }
}
