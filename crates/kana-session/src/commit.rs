use tracing::debug;

use kana_core::commit_policy;

use super::types::{KeyResponse, SessionState};
use super::{HostField, InputSession};

impl<H: HostField> InputSession<H> {
    /// Commit the composition into the host value and return to idle.
    /// When idle, asks the surface to close instead.
    pub fn commit(&mut self) -> KeyResponse {
        let SessionState::Composing(c) = &self.state else {
            let mut resp = KeyResponse::consumed();
            resp.close_surface = true;
            return resp;
        };

        let addition = c.final_text();
        self.reset_state();
        self.append_committed(&addition)
    }

    /// Commit (if composing), then append a literal space.
    pub fn space(&mut self) -> KeyResponse {
        let mut resp = if self.is_composing() {
            self.commit()
        } else {
            KeyResponse::consumed()
        };
        if let Some(value) = self.append_committed(" ").value_changed {
            resp.value_changed = Some(value);
        }
        resp
    }

    /// Drop the composition without touching the committed text.
    pub fn clear(&mut self) -> KeyResponse {
        self.reset_state();
        KeyResponse::consumed()
    }

    /// Append under the all-or-nothing length policy.
    fn append_committed(&mut self, addition: &str) -> KeyResponse {
        let max_length = self.host.max_length();
        let new_value = commit_policy::apply(&self.committed, addition, max_length);
        if new_value == self.committed {
            if !addition.is_empty() {
                debug!(%addition, ?max_length, "addition dropped: exceeds max length");
            }
            return KeyResponse::consumed();
        }
        self.write_host(new_value)
    }

    pub(super) fn write_host(&mut self, new_value: String) -> KeyResponse {
        self.host.on_value_change(&new_value);
        self.committed = new_value.clone();
        let mut resp = KeyResponse::consumed();
        resp.value_changed = Some(new_value);
        resp
    }

    pub(super) fn reset_state(&mut self) {
        self.state = SessionState::Idle;
    }
}
