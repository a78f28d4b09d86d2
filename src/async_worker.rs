use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracing::debug;

use kana_core::candidates::Candidate;
use kana_session::LookupRequest;

use crate::gateway::{CandidateGateway, GatewayError};

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

pub struct LookupResult {
    pub seq: u64,
    pub reading: String,
    pub outcome: Result<Vec<Candidate>, GatewayError>,
}

// ---------------------------------------------------------------------------
// LookupWorker
// ---------------------------------------------------------------------------

/// Background thread running gateway lookups one at a time.
///
/// When several requests queue up while a fetch is running, only the newest
/// is fetched next; the session would discard the others anyway.
pub struct LookupWorker {
    work_tx: mpsc::Sender<LookupRequest>,
    result_rx: mpsc::Receiver<LookupResult>,
}

impl LookupWorker {
    pub fn spawn(gateway: Arc<dyn CandidateGateway>) -> io::Result<Self> {
        let (work_tx, work_rx) = mpsc::channel::<LookupRequest>();
        let (result_tx, result_rx) = mpsc::channel::<LookupResult>();
        thread::Builder::new()
            .name("kana-lookup".into())
            .spawn(move || lookup_worker(work_rx, result_tx, gateway))?;
        Ok(Self { work_tx, result_rx })
    }

    pub fn submit(&self, request: LookupRequest) {
        // Only fails once the worker thread has exited.
        let _ = self.work_tx.send(request);
    }

    pub fn try_recv(&self) -> Option<LookupResult> {
        self.result_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<LookupResult, mpsc::RecvTimeoutError> {
        self.result_rx.recv_timeout(timeout)
    }
}

fn lookup_worker(
    rx: mpsc::Receiver<LookupRequest>,
    tx: mpsc::Sender<LookupResult>,
    gateway: Arc<dyn CandidateGateway>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple requests queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            debug!(skipped = latest.seq, seq = newer.seq, "lookup skipped");
            latest = newer;
        }

        let outcome = gateway.fetch_candidates(&latest.reading);
        let result = LookupResult {
            seq: latest.seq,
            reading: latest.reading,
            outcome,
        };
        if tx.send(result).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::gateway::StaticGateway;

    fn request(reading: &str, seq: u64) -> LookupRequest {
        LookupRequest {
            reading: reading.to_string(),
            seq,
        }
    }

    /// Gateway that reports each call and blocks until released.
    struct GatedGateway {
        started: Mutex<mpsc::Sender<String>>,
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl CandidateGateway for GatedGateway {
        fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError> {
            if let Ok(started) = self.started.lock() {
                let _ = started.send(reading.to_string());
            }
            if let Ok(gate) = self.gate.lock() {
                let _ = gate.recv();
            }
            Ok(vec![Candidate::new(reading, reading, "")])
        }
    }

    #[test]
    fn test_result_carries_seq_and_reading() {
        let mut gateway = StaticGateway::new();
        gateway.insert("にち", vec![Candidate::new("日", "にち", "day")]);
        let worker = LookupWorker::spawn(Arc::new(gateway)).unwrap();

        worker.submit(request("にち", 7));
        let result = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.seq, 7);
        assert_eq!(result.reading, "にち");
        assert_eq!(result.outcome.unwrap()[0].surface, "日");
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn test_errors_are_delivered() {
        let worker = LookupWorker::spawn(Arc::new(StaticGateway::new())).unwrap();
        worker.submit(request("", 1));
        let result = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(result.outcome, Err(GatewayError::Empty)));
    }

    #[test]
    fn test_queued_requests_drain_to_latest() {
        let (started_tx, started_rx) = mpsc::channel();
        let (gate_tx, gate_rx) = mpsc::channel();
        let gateway = GatedGateway {
            started: Mutex::new(started_tx),
            gate: Mutex::new(gate_rx),
        };
        let worker = LookupWorker::spawn(Arc::new(gateway)).unwrap();

        worker.submit(request("か", 1));
        let first = started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, "か");

        // Both queue behind the running fetch; only the newer survives.
        worker.submit(request("かん", 2));
        worker.submit(request("かな", 3));
        gate_tx.send(()).unwrap();
        gate_tx.send(()).unwrap();

        let a = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        let b = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!((a.seq, b.seq), (1, 3));
        assert_eq!(b.reading, "かな");
        assert_eq!(
            started_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            "かな"
        );
        assert!(started_rx.try_recv().is_err());
    }
}
