//! Similarity scores as reported by the retrieval backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// A similarity score, kept exactly as it appeared in the log
///
/// Display layers multiply the value by 100 and round it, so the original
/// text is preserved rather than a lossy re-rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityScore(String);

impl SimilarityScore {
    /// Wrap the raw score text
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// The score text as logged
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the score as a float, if it is numeric
    pub fn value(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Score as a rounded percentage (`0.873` becomes `87`)
    pub fn percent(&self) -> Option<u32> {
        self.value()
            .filter(|v| *v >= 0.0)
            .map(|v| (v * 100.0).round() as u32)
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SimilarityScore {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
