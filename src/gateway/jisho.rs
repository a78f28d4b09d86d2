use serde::Deserialize;
use tracing::{debug, debug_span};

use kana_core::candidates::Candidate;
use kana_core::settings::{settings, GatewaySettings};

use super::{CandidateGateway, GatewayError};

/// Word search against a jisho.org-compatible JSON endpoint.
pub struct JishoGateway {
    agent: ureq::Agent,
    endpoint: String,
    max_response_bytes: u64,
}

impl JishoGateway {
    /// Gateway configured from the global `[gateway]` settings.
    pub fn from_settings() -> Self {
        Self::new(&settings().gateway)
    }

    pub fn new(config: &GatewaySettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .into();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
            max_response_bytes: config.max_response_bytes,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CandidateGateway for JishoGateway {
    fn fetch_candidates(&self, reading: &str) -> Result<Vec<Candidate>, GatewayError> {
        let _span = debug_span!("jisho_fetch", %reading).entered();
        if reading.is_empty() {
            return Err(GatewayError::Empty);
        }

        let body = self
            .agent
            .get(&self.endpoint)
            .query("keyword", reading)
            .call()
            .map_err(http_err)?
            .into_body()
            .with_config()
            .limit(self.max_response_bytes)
            .read_to_string()
            .map_err(http_err)?;
        debug!(bytes = body.len(), "response received");

        parse_words_response(&body)
    }
}

fn http_err(e: ureq::Error) -> GatewayError {
    match e {
        ureq::Error::Timeout(_) => GatewayError::Timeout,
        other => GatewayError::Http(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Response format
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WordsResponse {
    #[serde(default)]
    data: Vec<WordEntry>,
}

#[derive(Deserialize)]
struct WordEntry {
    #[serde(default)]
    japanese: Vec<JapaneseForm>,
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Deserialize)]
struct JapaneseForm {
    word: Option<String>,
    reading: Option<String>,
}

#[derive(Deserialize)]
struct Sense {
    #[serde(default)]
    english_definitions: Vec<String>,
}

/// Flatten a words-search body into candidates, one per written form, in
/// response order. Duplicates are left for the consumer to remove.
pub(crate) fn parse_words_response(body: &str) -> Result<Vec<Candidate>, GatewayError> {
    let response: WordsResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;

    let mut out = Vec::new();
    for entry in response.data {
        let gloss = entry
            .senses
            .iter()
            .map(|s| s.english_definitions.join(", "))
            .collect::<Vec<_>>()
            .join("; ");
        for form in entry.japanese {
            let reading = form.reading.unwrap_or_default();
            let surface = form.word.unwrap_or_else(|| reading.clone());
            out.push(Candidate::new(surface, reading, gloss.as_str()));
        }
    }
    Ok(out)
}
