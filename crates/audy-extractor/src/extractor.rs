//! Core Extractor implementation - the source aggregator

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::normalize::{corpus_from_json, normalize};
use crate::pdf::extract_pdf_sources;
use crate::viral::extract_viral_post_sources;
use crate::web::extract_web_sources;
use audy_domain::{Lane, LogCorpus, SourceBundle};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// The Extractor turns a generation log into a bundle of cited sources
///
/// Holds only configuration; every call builds its own deduplication state,
/// so one extractor can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SourceExtractor {
    config: ExtractorConfig,
}

impl SourceExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create an Extractor after validating its configuration
    pub fn try_new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Extract every source cited in `corpus`
    ///
    /// An empty corpus yields an empty bundle. Lanes are independent: a lane
    /// that fails contributes nothing, and the others are unaffected.
    pub fn extract(&self, corpus: &LogCorpus) -> SourceBundle {
        let text = normalize(corpus);
        self.extract_text(&text)
    }

    /// Extract sources from an already normalized log blob
    pub fn extract_text(&self, text: &str) -> SourceBundle {
        if text.trim().is_empty() {
            return SourceBundle::default();
        }

        let bundle = SourceBundle {
            pdfs: run_lane(Lane::Pdf, || extract_pdf_sources(text, &self.config)),
            web_articles: run_lane(Lane::Web, || extract_web_sources(text, &self.config)),
            viral_posts: run_lane(Lane::ViralPost, || {
                extract_viral_post_sources(text, &self.config)
            }),
        };

        debug!(
            "Extracted {} sources ({} pdf, {} web, {} viral) from {} bytes of log",
            bundle.total_source_count(),
            bundle.pdfs.len(),
            bundle.web_articles.len(),
            bundle.viral_posts.len(),
            text.len()
        );

        bundle
    }

    /// Extract sources from a JSON log value (`null`, string, or string array)
    pub fn extract_json(&self, value: &Value) -> Result<SourceBundle> {
        let corpus = corpus_from_json(value)?;
        Ok(self.extract(&corpus))
    }
}

/// Run one lane, isolating the others from its failure
fn run_lane<T>(lane: Lane, scan: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match panic::catch_unwind(AssertUnwindSafe(scan)) {
        Ok(found) => found,
        Err(_) => {
            warn!("Lane '{}' failed while scanning; its sources are dropped", lane);
            Vec::new()
        }
    }
}

/// Extract sources with the default configuration
///
/// # Examples
///
/// ```
/// use audy_extractor::extract_sources_from_logs;
///
/// let bundle = extract_sources_from_logs(
///     "Segment 1:\n  File: report.pdf\n  Similarity: 0.87\n  Document URL: https://x/report.pdf\n",
/// );
/// assert_eq!(bundle.pdfs[0].filename, "report.pdf");
/// assert_eq!(bundle.total_source_count(), 1);
/// ```
pub fn extract_sources_from_logs(corpus: impl Into<LogCorpus>) -> SourceBundle {
    SourceExtractor::default().extract(&corpus.into())
}

/// Extract sources from a JSON log value with the default configuration
pub fn extract_sources_from_json(value: &Value) -> Result<SourceBundle> {
    SourceExtractor::default().extract_json(value)
}
