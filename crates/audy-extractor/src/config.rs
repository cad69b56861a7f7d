//! Configuration for the Extractor

use crate::error::{ExtractorError, Result};
use audy_domain::DEFAULT_TITLE_CHARS;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Content characters used for a viral post title
    pub title_max_chars: usize,

    /// Web URLs containing any of these (case-insensitive) are not citations
    ///
    /// Raw news-aggregator API fetches show up in the logs next to the real
    /// articles they returned.
    pub blocked_url_substrings: Vec<String>,

    /// Lines starting with one of these phrases end a multi-line record
    pub sentinels: Vec<String>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.title_max_chars == 0 {
            return Err(ExtractorError::Config(
                "title_max_chars must be greater than 0".to_string(),
            ));
        }
        if self.blocked_url_substrings.iter().any(|s| s.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "blocked_url_substrings cannot contain empty entries".to_string(),
            ));
        }
        if self.sentinels.iter().any(|s| s.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "sentinels cannot contain empty entries".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a web URL is excluded from citations
    pub fn is_blocked_url(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.blocked_url_substrings
            .iter()
            .any(|needle| url.contains(&needle.to_lowercase()))
    }

    /// Whether a line is a "processing complete" style sentinel
    pub fn is_sentinel(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.sentinels.iter().any(|s| line.starts_with(s.as_str()))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_CHARS,
            blocked_url_substrings: vec!["newsapi".to_string()],
            sentinels: [
                "Calling tool",
                "Processing complete",
                "Viral post creation complete",
                "Information gathering complete",
                "Content generation completed",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
