//! Source records - structured citations rebuilt from generation logs

use crate::{Identified, Lane, SimilarityScore};
use serde::{Deserialize, Serialize};

/// Number of content characters used for a viral post title
pub const DEFAULT_TITLE_CHARS: usize = 100;

/// Marker appended to truncated titles
pub const ELLIPSIS: &str = "...";

/// A PDF document from the tenant library that generation consulted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSource {
    /// File name as announced in the log (identity key)
    pub filename: String,

    /// Signed access URL, absent when the log had none
    pub url: Option<String>,

    /// Snippet of the consulted segment, whitespace collapsed
    pub content: Option<String>,

    /// Retrieval similarity of the segment
    pub similarity_score: Option<f64>,
}

impl PdfSource {
    /// Create a PDF source with only a filename
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: None,
            content: None,
            similarity_score: None,
        }
    }

    /// Attach an access URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach a similarity score
    pub fn with_similarity(mut self, score: f64) -> Self {
        self.similarity_score = Some(score);
        self
    }
}

impl Identified for PdfSource {
    const LANE: Lane = Lane::Pdf;

    fn identity(&self) -> &str {
        &self.filename
    }
}

/// An external web or news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSource {
    /// Article title
    pub title: String,

    /// Absolute article URL (identity key)
    pub url: String,

    /// Snippet, newlines collapsed
    pub content: Option<String>,

    /// Publishing outlet, when the log names one
    pub publisher: Option<String>,
}

impl WebSource {
    /// Create a web source from a title and URL
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: None,
            publisher: None,
        }
    }
}

impl Identified for WebSource {
    const LANE: Lane = Lane::Web;

    fn identity(&self) -> &str {
        &self.url
    }
}

/// A reference post the generator used as a style or performance example
///
/// Posts carry no stable external identifier, so the exact content is the
/// identity key. The title is derived from the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralPostSource {
    /// Leading characters of the content, with `...` when truncated
    pub title: String,

    /// Post body (identity key)
    pub content: String,

    /// Similarity as logged
    pub similarity_score: Option<SimilarityScore>,

    /// Audience the post was written for
    pub target_audience: Option<String>,

    /// Description of attached media
    pub media_description: Option<String>,

    /// Where the post was scraped from
    pub origin: Option<String>,

    /// View count as logged
    pub views: Option<String>,

    /// Reaction count as logged
    pub reactions: Option<String>,

    /// Interaction count
    pub interactions: Option<u64>,
}

impl ViralPostSource {
    /// Create a viral post source, deriving the title from the content
    ///
    /// # Examples
    ///
    /// ```
    /// use audy_domain::ViralPostSource;
    ///
    /// let post = ViralPostSource::new("Great insight here");
    /// assert_eq!(post.title, "Great insight here");
    /// ```
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            title: derive_title(&content, DEFAULT_TITLE_CHARS),
            content,
            similarity_score: None,
            target_audience: None,
            media_description: None,
            origin: None,
            views: None,
            reactions: None,
            interactions: None,
        }
    }

    /// Re-derive the title with a different character limit
    pub fn with_title_limit(mut self, max_chars: usize) -> Self {
        self.title = derive_title(&self.content, max_chars);
        self
    }

    /// Attach a similarity score
    pub fn with_similarity(mut self, score: SimilarityScore) -> Self {
        self.similarity_score = Some(score);
        self
    }
}

impl Identified for ViralPostSource {
    const LANE: Lane = Lane::ViralPost;

    fn identity(&self) -> &str {
        &self.content
    }
}

/// First `max_chars` characters of `content`, with `...` appended when cut
pub fn derive_title(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_not_truncated() {
        assert_eq!(derive_title("Great insight here", 100), "Great insight here");
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let content = "a".repeat(100);
        assert_eq!(derive_title(&content, 100), content);
    }

    #[test]
    fn test_long_title_truncated() {
        let content = "b".repeat(150);
        let title = derive_title(&content, 100);
        assert_eq!(title.len(), 103);
        assert!(title.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let content = "é".repeat(120);
        let title = derive_title(&content, 100);
        assert_eq!(title.chars().count(), 103);
    }

    #[test]
    fn test_identity_keys() {
        let pdf = PdfSource::new("report.pdf").with_url("https://x/report.pdf");
        let web = WebSource::new("Title", "https://example.com/a");
        let post = ViralPostSource::new("Body");

        assert_eq!(pdf.identity(), "report.pdf");
        assert_eq!(web.identity(), "https://example.com/a");
        assert_eq!(post.identity(), "Body");
        assert_eq!(<PdfSource as Identified>::LANE, Lane::Pdf);
    }

    #[test]
    fn test_camel_case_serialization() {
        let post = ViralPostSource::new("Body").with_similarity(SimilarityScore::new("0.92"));
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["similarityScore"], "0.92");
        assert!(json["targetAudience"].is_null());
    }
}
