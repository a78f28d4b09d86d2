//! Single-threaded driver joining an [`InputSession`] to a [`LookupWorker`].

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, debug_span};

use kana_core::candidates::Candidate;
use kana_core::settings::{settings, CompositionSettings};
use kana_session::{HostField, InputSession, KeyEvent, KeyResponse};

use crate::async_worker::{LookupResult, LookupWorker};
use crate::gateway::{CandidateGateway, GatewayError};

/// An [`InputSession`] whose lookups run on a background gateway worker.
///
/// Results are applied only from [`poll`](Self::poll) and
/// [`wait_for_lookup`](Self::wait_for_lookup), so all session state changes
/// happen on the caller's thread. A lookup unanswered after
/// `lookup_timeout_ms` is failed with [`GatewayError::Timeout`].
pub struct ComposeSession<H: HostField> {
    session: InputSession<H>,
    worker: LookupWorker,
    /// Outstanding lookup and when it was submitted.
    issued: Option<(u64, Instant)>,
    lookup_timeout: Duration,
}

impl<H: HostField> ComposeSession<H> {
    pub fn new(host: H, gateway: Arc<dyn CandidateGateway>) -> io::Result<Self> {
        Self::with_config(host, gateway, settings().composition.clone())
    }

    pub fn with_config(
        host: H,
        gateway: Arc<dyn CandidateGateway>,
        config: CompositionSettings,
    ) -> io::Result<Self> {
        let lookup_timeout = config.lookup_timeout();
        Ok(Self {
            session: InputSession::with_config(host, config),
            worker: LookupWorker::spawn(gateway)?,
            issued: None,
            lookup_timeout,
        })
    }

    pub fn session(&self) -> &InputSession<H> {
        &self.session
    }

    pub fn into_host(self) -> H {
        self.session.into_host()
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let resp = self.session.handle_key(event);
        self.dispatch(&resp);
        resp
    }

    pub fn select_candidate(&mut self, candidate: &Candidate) -> KeyResponse {
        self.session.select_candidate(candidate)
    }

    fn dispatch(&mut self, resp: &KeyResponse) {
        if let Some(request) = &resp.lookup {
            self.issued = Some((request.seq, Instant::now()));
            self.worker.submit(request.clone());
        }
    }

    /// Apply every finished lookup without blocking. Returns the response of
    /// the last one that changed the session.
    pub fn poll(&mut self) -> Option<KeyResponse> {
        let mut applied = None;
        while let Some(result) = self.worker.try_recv() {
            if let Some(resp) = self.apply(result) {
                applied = Some(resp);
            }
        }
        self.expire().or(applied)
    }

    /// Block until the outstanding lookup is answered or expires, or until
    /// `timeout` passes. Returns `None` when nothing was applied.
    pub fn wait_for_lookup(&mut self, timeout: Duration) -> Option<KeyResponse> {
        let deadline = Instant::now() + timeout;
        while let Some(seq) = self.session.pending_lookup() {
            let until = self.expiry(seq).map_or(deadline, |e| e.min(deadline));
            let now = Instant::now();
            if now >= until {
                break;
            }
            match self.worker.recv_timeout(until - now) {
                Ok(result) => {
                    if let Some(resp) = self.apply(result) {
                        return Some(resp);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.expire()
    }

    fn apply(&mut self, result: LookupResult) -> Option<KeyResponse> {
        let _span = debug_span!("apply_lookup", seq = result.seq, reading = %result.reading).entered();
        let resp = self.session.receive_candidates(result.seq, result.outcome)?;
        self.issued = None;
        Some(resp)
    }

    fn expiry(&self, seq: u64) -> Option<Instant> {
        self.issued
            .filter(|(issued_seq, _)| *issued_seq == seq)
            .map(|(_, at)| at + self.lookup_timeout)
    }

    /// Fail the outstanding lookup once it has been waiting too long.
    fn expire(&mut self) -> Option<KeyResponse> {
        let seq = self.session.pending_lookup()?;
        let expiry = self.expiry(seq)?;
        if Instant::now() < expiry {
            return None;
        }
        debug!(seq, "lookup expired");
        self.issued = None;
        self.session
            .receive_candidates(seq, Err::<Vec<Candidate>, _>(GatewayError::Timeout))
    }
}
