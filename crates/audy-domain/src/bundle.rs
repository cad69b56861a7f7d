//! Source bundle - the aggregated result of one extraction

use crate::{Lane, PdfSource, ViralPostSource, WebSource};
use serde::{Deserialize, Serialize};

/// All sources recovered from one log corpus
///
/// Each list is deduplicated and ordered by first appearance in the corpus.
/// Bundles are built fresh per extraction and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBundle {
    /// PDF documents
    pub pdfs: Vec<PdfSource>,

    /// Web and news articles
    pub web_articles: Vec<WebSource>,

    /// Reference viral posts
    pub viral_posts: Vec<ViralPostSource>,
}

impl SourceBundle {
    /// True iff at least one lane found a source
    pub fn has_any_sources(&self) -> bool {
        !self.pdfs.is_empty() || !self.web_articles.is_empty() || !self.viral_posts.is_empty()
    }

    /// Sum of the three list lengths
    pub fn total_source_count(&self) -> usize {
        self.pdfs.len() + self.web_articles.len() + self.viral_posts.len()
    }

    /// Number of sources in one lane
    pub fn count(&self, lane: Lane) -> usize {
        match lane {
            Lane::Pdf => self.pdfs.len(),
            Lane::Web => self.web_articles.len(),
            Lane::ViralPost => self.viral_posts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle() {
        let bundle = SourceBundle::default();
        assert!(!bundle.has_any_sources());
        assert_eq!(bundle.total_source_count(), 0);
    }

    #[test]
    fn test_counts() {
        let bundle = SourceBundle {
            pdfs: vec![PdfSource::new("a.pdf"), PdfSource::new("b.pdf")],
            web_articles: vec![],
            viral_posts: vec![ViralPostSource::new("post")],
        };
        assert!(bundle.has_any_sources());
        assert_eq!(bundle.total_source_count(), 3);
        assert_eq!(bundle.count(Lane::Pdf), 2);
        assert_eq!(bundle.count(Lane::Web), 0);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(SourceBundle::default()).unwrap();
        assert!(json["pdfs"].is_array());
        assert!(json["webArticles"].is_array());
        assert!(json["viralPosts"].is_array());
    }
}
