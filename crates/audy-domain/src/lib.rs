//! Audy Domain Layer
//!
//! This crate holds the data model for log-derived source extraction. It
//! defines the records that the extractor rebuilds from generation logs and
//! that display layers render in a "Sources" panel.
//!
//! ## Key Concepts
//!
//! - **Log corpus**: the transcript of one generation, as lines or one blob
//! - **Source record**: a citation of a PDF, a web article, or a viral post
//! - **Lane**: one of the three parallel extraction paths
//! - **Bundle**: the deduplicated result of all three lanes for one corpus
//!
//! ## Architecture
//!
//! - Pure data and small derived queries only
//! - Parsing lives in `audy-extractor`
//! - Rendering lives in `audy-cli`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod corpus;
pub mod lane;
pub mod score;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use bundle::SourceBundle;
pub use corpus::LogCorpus;
pub use lane::Lane;
pub use score::SimilarityScore;
pub use source::{derive_title, PdfSource, ViralPostSource, WebSource, DEFAULT_TITLE_CHARS};
pub use traits::Identified;
