use tracing::debug;

use kana_core::commit_policy::text_len;
use kana_core::transliterate::transliterate;

use super::types::{Composition, KeyResponse, LookupRequest, SessionState};
use super::{HostField, InputSession};

impl<H: HostField> InputSession<H> {
    /// Append one phonetic key, starting a composition when idle.
    pub fn append_key(&mut self, key: char) -> KeyResponse {
        if key.is_control() {
            return KeyResponse::not_consumed();
        }

        if !self.is_composing() {
            self.state = SessionState::Composing(Composition::new());
        }

        let c = self.comp();
        c.buffer.extend(key.to_lowercase());
        c.selection = None;
        self.refresh_forms()
    }

    /// Re-render the buffer after a mutation. An emptied buffer ends the
    /// composition.
    pub(super) fn refresh_forms(&mut self) -> KeyResponse {
        if self.comp().buffer.is_empty() {
            self.reset_state();
            return KeyResponse::consumed();
        }

        let c = self.comp();
        c.forms = transliterate(&c.buffer);

        let mut resp = KeyResponse::consumed();
        resp.lookup = self.maybe_request_lookup();
        resp
    }

    /// Issue a lookup when the primary form is long enough and differs from
    /// the last reading sent. A request still in flight stays outstanding
    /// until its result arrives or the composition ends.
    fn maybe_request_lookup(&mut self) -> Option<LookupRequest> {
        let threshold = self.config.lookup_threshold;
        let seq = self.lookup_seq + 1;

        let c = self.comp();
        let reading = c.forms.primary.clone();
        let changed = c.last_lookup.as_deref() != Some(reading.as_str());

        if changed && text_len(&reading) >= threshold {
            c.last_lookup = Some(reading.clone());
            c.pending_lookup = Some(seq);
            self.lookup_seq = seq;
            debug!(seq, %reading, "lookup requested");
            return Some(LookupRequest { reading, seq });
        }
        None
    }
}
