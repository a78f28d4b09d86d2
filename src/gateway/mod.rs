//! Dictionary back ends that turn a kana reading into candidates.

mod jisho;

use std::collections::HashMap;
use std::path::Path;
use std::{fs, io};

use kana_core::candidates::Candidate;

pub use jisho::JishoGateway;

/// A dictionary service queried with a hiragana reading.
///
/// Calls block; the engine runs them on a worker thread.
pub trait CandidateGateway: Send + Sync {
    fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("lookup timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("empty reading")]
    Empty,
}

impl<G: CandidateGateway + ?Sized> CandidateGateway for std::sync::Arc<G> {
    fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError> {
        (**self).fetch_candidates(reading)
    }
}

impl<G: CandidateGateway + ?Sized> CandidateGateway for Box<G> {
    fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError> {
        (**self).fetch_candidates(reading)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed reading → candidates table. Unknown readings yield no candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    entries: HashMap<String, Vec<Candidate>>,
}

impl StaticGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reading: impl Into<String>, candidates: Vec<Candidate>) {
        self.entries.insert(reading.into(), candidates);
    }

    /// Parse `{"reading": [{"surface": .., "reading": .., "gloss": ..}, ..]}`.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CandidateGateway for StaticGateway {
    fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError> {
        if reading.is_empty() {
            return Err(GatewayError::Empty);
        }
        Ok(self.entries.get(reading).cloned().unwrap_or_default())
    }
}
