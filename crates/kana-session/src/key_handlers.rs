use tracing::debug_span;

use kana_core::commit_policy::delete_last;

use super::types::{KeyEvent, KeyResponse, ScriptForm, SessionState};
use super::{Candidate, HostField, InputSession};

impl<H: HostField> InputSession<H> {
    /// Process one event from the composition surface.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Key(key) => self.append_key(key),
            KeyEvent::Delete => self.delete_key(),
            KeyEvent::Space => self.space(),
            KeyEvent::Commit => self.commit(),
            KeyEvent::Clear => self.clear(),
            KeyEvent::SelectForm(form) => self.select_form(form),
            KeyEvent::SelectCandidate(index) => self.select_candidate_at(index),
        }
    }

    /// Delete one step backwards.
    ///
    /// While composing, an active selection is cleared first; the next delete
    /// removes the last key. When idle the last committed character goes.
    pub fn delete_key(&mut self) -> KeyResponse {
        match &mut self.state {
            SessionState::Composing(c) => {
                if c.selection.take().is_some() {
                    return KeyResponse::consumed();
                }
                c.buffer.pop();
                self.refresh_forms()
            }
            SessionState::Idle => {
                if self.committed.is_empty() {
                    return KeyResponse::consumed();
                }
                let new_value = delete_last(&self.committed);
                self.write_host(new_value)
            }
        }
    }

    pub fn select_form(&mut self, form: ScriptForm) -> KeyResponse {
        let SessionState::Composing(c) = &mut self.state else {
            return KeyResponse::not_consumed();
        };
        let value = match form {
            ScriptForm::Primary => c.forms.primary.clone(),
            ScriptForm::Secondary => c.forms.secondary.clone(),
        };
        c.selection = Some(value);
        KeyResponse::consumed()
    }

    /// Select a candidate by its position in [`InputSession::candidates`].
    pub fn select_candidate_at(&mut self, index: usize) -> KeyResponse {
        let SessionState::Composing(c) = &mut self.state else {
            return KeyResponse::not_consumed();
        };
        let Some(surface) = c.candidates.get(index).map(|cand| cand.surface.clone()) else {
            return KeyResponse::not_consumed();
        };
        c.selection = Some(surface);
        KeyResponse::consumed()
    }

    /// Select a candidate by surface form. Unknown candidates are ignored.
    pub fn select_candidate(&mut self, candidate: &Candidate) -> KeyResponse {
        let position = self
            .candidates()
            .iter()
            .position(|c| c.surface == candidate.surface);
        match position {
            Some(index) => self.select_candidate_at(index),
            None => KeyResponse::not_consumed(),
        }
    }
}
