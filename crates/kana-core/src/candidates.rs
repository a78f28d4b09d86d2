//! Dictionary candidates and the list policy applied to every lookup result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Upper bound on candidates shown for one reading.
pub const MAX_CANDIDATES: usize = 10;

/// A logographic word suggestion for a phonetic reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub surface: String,
    pub reading: String,
    #[serde(default)]
    pub gloss: String,
}

impl Candidate {
    pub fn new(
        surface: impl Into<String>,
        reading: impl Into<String>,
        gloss: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            gloss: gloss.into(),
        }
    }
}

/// Keep the first candidate per surface form, in response order, and stop
/// at `max` entries. Empty surfaces are dropped. `max` is clamped to
/// [`MAX_CANDIDATES`].
pub fn dedup_and_cap(
    candidates: impl IntoIterator<Item = Candidate>,
    max: usize,
) -> Vec<Candidate> {
    let max = max.min(MAX_CANDIDATES);
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| !c.surface.is_empty())
        .filter(|c| seen.insert(c.surface.clone()))
        .take(max)
        .collect()
}
