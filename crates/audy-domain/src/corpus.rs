//! Log corpus - the sole input of source extraction

use std::borrow::Cow;

/// A generation log transcript
///
/// Upstream services hand the transcript over either as an ordered list of
/// lines or as one multi-line string. Both are read-only for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogCorpus {
    /// Ordered log lines, joined with `\n` before scanning
    Lines(Vec<String>),

    /// A single, already concatenated transcript
    Text(String),
}

impl LogCorpus {
    /// Join the corpus into one searchable string
    ///
    /// A text corpus is returned borrowed and unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use audy_domain::LogCorpus;
    ///
    /// let corpus = LogCorpus::from(vec!["Segment 1:", "  File: a.pdf"]);
    /// assert_eq!(corpus.joined(), "Segment 1:\n  File: a.pdf");
    /// ```
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            LogCorpus::Lines(lines) => Cow::Owned(lines.join("\n")),
            LogCorpus::Text(text) => Cow::Borrowed(text.as_str()),
        }
    }

    /// True when the corpus holds no text at all
    pub fn is_empty(&self) -> bool {
        match self {
            LogCorpus::Lines(lines) => lines.iter().all(|l| l.is_empty()),
            LogCorpus::Text(text) => text.is_empty(),
        }
    }
}

impl Default for LogCorpus {
    fn default() -> Self {
        LogCorpus::Text(String::new())
    }
}

impl From<&str> for LogCorpus {
    fn from(text: &str) -> Self {
        LogCorpus::Text(text.to_string())
    }
}

impl From<String> for LogCorpus {
    fn from(text: String) -> Self {
        LogCorpus::Text(text)
    }
}

impl From<Vec<String>> for LogCorpus {
    fn from(lines: Vec<String>) -> Self {
        LogCorpus::Lines(lines)
    }
}

impl From<Vec<&str>> for LogCorpus {
    fn from(lines: Vec<&str>) -> Self {
        LogCorpus::Lines(lines.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for LogCorpus {
    fn from(lines: &[&str]) -> Self {
        LogCorpus::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<T: Into<LogCorpus>> From<Option<T>> for LogCorpus {
    fn from(corpus: Option<T>) -> Self {
        corpus.map(Into::into).unwrap_or_default()
    }
}
