//! Audy Extractor
//!
//! Rebuilds the sources behind a generated post from its generation log.
//!
//! # Overview
//!
//! While generating content, the backend narrates its work into a log:
//! documents it searched, web and news articles it read, and viral posts it
//! used as style references. The Extractor scans that transcript and returns
//! structured, deduplicated citation records for a "Sources" panel.
//!
//! # Architecture
//!
//! ```text
//! LogCorpus → normalize → { PDF lane, Web lane, Viral post lane } → SourceBundle
//! ```
//!
//! # Key Features
//!
//! - **Format drift**: every lane knows several historical record layouts
//! - **Deduplication**: first mention wins, keyed per lane
//! - **Total**: unrecognized text yields fewer sources, never an error
//! - **Isolation**: lanes share no state and cannot suppress each other
//!
//! # Example Usage
//!
//! ```
//! use audy_extractor::{SourceExtractor, ExtractorConfig};
//! use audy_domain::LogCorpus;
//!
//! let extractor = SourceExtractor::new(ExtractorConfig::default());
//! let corpus = LogCorpus::from(vec![
//!     "Post Content: Great insight here",
//!     "Similarity Score: 0.92",
//! ]);
//!
//! let bundle = extractor.extract(&corpus);
//!
//! assert!(bundle.has_any_sources());
//! assert_eq!(bundle.viral_posts[0].title, "Great insight here");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod layout;
mod normalize;
mod pdf;
mod scan;
mod viral;
mod web;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::{ExtractorError, Result};
pub use extractor::{extract_sources_from_json, extract_sources_from_logs, SourceExtractor};
pub use layout::{union_layouts, Layout, Located};
pub use normalize::{corpus_from_json, corpus_from_json_str, normalize};
pub use pdf::{extract_pdf_sources, BulletedLayout, SegmentLayout, TitledLayout};
pub use viral::{extract_viral_post_sources, ExampleLayout, PostContentLayout, ViralExampleLayout};
pub use web::{extract_web_sources, ArticleLayout, ResultLayout, WebTitledLayout};
