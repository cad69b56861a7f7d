//! PDF lane - documents from the tenant library
//!
//! Three layouts have been logged by the document-search tool over time:
//!
//! ```text
//! Segment 1:                      Document Title: Q3 Report
//!   File: report.pdf              Document Content: Revenue grew
//!   Similarity: 0.873             across all regions...
//!   Document URL: https://...     Document URL: None
//!   Content: Revenue grew...
//!
//! Source PDF: report.pdf
//! Document Access URLs (valid for 1 hour):
//! • report.pdf: https://...
//! ```

use crate::config::ExtractorConfig;
use crate::layout::{union_layouts, Layout, Located};
use crate::scan::{absolute_url, blocks, block_end, clean_value, field, pattern, snippet, spanning_field};
use audy_domain::PdfSource;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*(?:Document )?Segment \d+:[ \t]*$"));
static FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*File(?:name)?:[ \t]*(.*)$"));
static SIMILARITY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Similarity(?: Score)?:[ \t]*(.*)$"));
static DOCUMENT_URL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Document U(?:RL|rl):[ \t]*(.*)$"));
static CONTENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Content:[ \t]*(.*)$"));
static SEGMENT_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^[ \t]*(?:File(?:name)?|Similarity(?: Score)?|Document U(?:RL|rl)|Url Error|Content):")
});

static DOCUMENT_TITLE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Document Title:[ \t]*(.*)$"));
static DOCUMENT_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Document Content:[ \t]*(.*)$"));
static TITLED_LABELS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[ \t]*(?:Document U(?:RL|rl)|Similarity(?: Score)?):"));

static SOURCE_PDF: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Source PDF:[ \t]*(.*)$"));
static ACCESS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?m)^[ \t]*Document Access URLs(?:[ \t]*\([^)\n]*\))?[ \t]*:[ \t]*$")
});
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[ \t]*[•*\-][ \t]*([^:\n]+?)[ \t]*:[ \t]*(https?://\S+)"));

/// `Segment N:` records with `File:`, `Similarity:` and `Document URL:` lines
pub struct SegmentLayout;

impl Layout for SegmentLayout {
    type Record = PdfSource;

    fn name(&self) -> &'static str {
        "segment"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<PdfSource>> {
        blocks(text, &SEGMENT, config)
            .into_iter()
            .filter_map(|block| {
                let Some(filename) = field(block.body, &FILE).and_then(clean_value) else {
                    trace!(offset = block.offset, "Segment without a file name skipped");
                    return None;
                };
                let mut source = PdfSource::new(filename);
                source.url = field(block.body, &DOCUMENT_URL).and_then(absolute_url);
                source.similarity_score = field(block.body, &SIMILARITY).and_then(parse_score);
                source.content = spanning_field(block.body, &CONTENT, &SEGMENT_LABELS, true)
                    .and_then(snippet);
                Some(Located::new(block.offset, source))
            })
            .collect()
    }
}

/// `Document Title:` records whose content runs until a `Document URL:` line
pub struct TitledLayout;

impl Layout for TitledLayout {
    type Record = PdfSource;

    fn name(&self) -> &'static str {
        "titled"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<PdfSource>> {
        blocks(text, &DOCUMENT_TITLE, config)
            .into_iter()
            .filter_map(|block| {
                let title = block.head.get(1).and_then(|m| clean_value(m.as_str()))?;
                // The URL line terminates the record; without it this is not a citation.
                let Some(url) = field(block.body, &DOCUMENT_URL) else {
                    trace!(offset = block.offset, title, "Document title without URL line skipped");
                    return None;
                };
                let mut source = PdfSource::new(title);
                source.url = absolute_url(url);
                source.similarity_score = field(block.body, &SIMILARITY).and_then(parse_score);
                source.content =
                    spanning_field(block.body, &DOCUMENT_CONTENT, &TITLED_LABELS, false)
                        .and_then(snippet);
                Some(Located::new(block.offset, source))
            })
            .collect()
    }
}

/// `Source PDF:` names joined with a `Document Access URLs` bullet section
pub struct BulletedLayout;

impl Layout for BulletedLayout {
    type Record = PdfSource;

    fn name(&self) -> &'static str {
        "bulleted"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<PdfSource>> {
        // Pass 1: the URL map, first URL per file name wins
        let mut urls: HashMap<&str, (usize, &str)> = HashMap::new();
        let mut url_order: Vec<&str> = Vec::new();
        for section in ACCESS_SECTION.find_iter(text) {
            let body_start = text[section.end()..]
                .find('\n')
                .map(|nl| section.end() + nl + 1)
                .unwrap_or(text.len());
            let mut pos = body_start;
            for line in text[body_start..block_end(text, body_start, config)].split_inclusive('\n') {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with("Source PDFs used:") {
                    break;
                }
                if let Some(caps) = BULLET.captures(line) {
                    if let (Some(name), Some(url)) = (caps.get(1), caps.get(2)) {
                        let name = name.as_str().trim();
                        if !urls.contains_key(name) {
                            url_order.push(name);
                            urls.insert(name, (pos, url.as_str()));
                        }
                    }
                }
                pos += line.len();
            }
        }

        // Pass 2: announced names, merged with the map
        let mut found = Vec::new();
        let mut named: Vec<&str> = Vec::new();
        for caps in SOURCE_PDF.captures_iter(text) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(name) = clean_value(value.as_str()) else {
                continue;
            };
            let mut source = PdfSource::new(name);
            source.url = urls.get(name).map(|(_, url)| url.to_string());
            named.push(name);
            found.push(Located::new(whole.start(), source));
        }

        // URLs for files never announced by name are still citations
        for name in url_order {
            if named.contains(&name) {
                continue;
            }
            if let Some((offset, url)) = urls.get(name) {
                found.push(Located::new(*offset, PdfSource::new(name).with_url(*url)));
            }
        }

        found
    }
}

/// Extract PDF sources from a normalized corpus
///
/// Layouts run in the order segment, titled, bulleted; a file name claimed by
/// several layouts keeps the earliest layout's record.
pub fn extract_pdf_sources(text: &str, config: &ExtractorConfig) -> Vec<PdfSource> {
    let sources = union_layouts(text, config, &[&SegmentLayout, &TitledLayout, &BulletedLayout]);
    debug!(count = sources.len(), "PDF sources extracted");
    sources
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
