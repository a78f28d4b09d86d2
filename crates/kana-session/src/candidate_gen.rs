use std::fmt::Display;

use tracing::{debug, warn};

use kana_core::candidates::{dedup_and_cap, Candidate};

use super::types::{KeyResponse, SessionState};
use super::{HostField, InputSession};

impl<H: HostField> InputSession<H> {
    /// Apply the outcome of lookup `seq`.
    ///
    /// Only the lookup still awaited by the current composition is applied;
    /// anything else is stale and returns `None`. Failures of any kind leave
    /// an empty candidate list.
    pub fn receive_candidates<E: Display>(
        &mut self,
        seq: u64,
        result: Result<Vec<Candidate>, E>,
    ) -> Option<KeyResponse> {
        let max = self.config.max_candidates;
        let SessionState::Composing(c) = &mut self.state else {
            debug!(seq, "lookup result after composition ended");
            return None;
        };
        if c.pending_lookup != Some(seq) {
            debug!(seq, pending = ?c.pending_lookup, "stale lookup result");
            return None;
        }

        c.pending_lookup = None;
        c.candidates = match result {
            Ok(candidates) => dedup_and_cap(candidates, max),
            Err(e) => {
                warn!(seq, error = %e, "candidate lookup failed");
                Vec::new()
            }
        };
        c.prune_selection();
        debug!(seq, count = c.candidates.len(), "candidates received");
        Some(KeyResponse::consumed())
    }
}
