//! Web lane - externally fetched articles
//!
//! Layouts: `Result N:` / `Web Result N:` blocks from the web search tool,
//! `Web Title:` / `Web Content:` / `WebURL:` records, and `Article N:` blocks
//! from the news search tool.

use crate::config::ExtractorConfig;
use crate::layout::{union_layouts, Layout, Located};
use crate::scan::{absolute_url, blocks, clean_value, field, pattern, snippet, spanning_field, Block};
use audy_domain::WebSource;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static RESULT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*(?:Web )?Result \d+:[ \t]*$"));
static ARTICLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Article \d+:[ \t]*$"));
static TITLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Title:[ \t]*(.*)$"));
static URL: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*U(?:RL|rl):[ \t]*(.*)$"));
static CONTENT: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Content:[ \t]*(.*)$"));
static SOURCE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Source:[ \t]*(.*)$"));
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Description:[ \t]*(.*)$"));
static RESULT_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^[ \t]*(?:Title|U(?:RL|rl)|Content|Source|Description|Published(?: At)?):")
});

static WEB_TITLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Web Title:[ \t]*(.*)$"));
static WEB_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Web Content:[ \t]*(.*)$"));
static WEB_URL: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Web ?URL:[ \t]*(.*)$"));
static WEB_LABELS: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[ \t]*Web ?URL:"));

/// `Result N:` and `Web Result N:` blocks with `Title:` and `URL:` lines
pub struct ResultLayout;

impl Layout for ResultLayout {
    type Record = WebSource;

    fn name(&self) -> &'static str {
        "result"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<WebSource>> {
        blocks(text, &RESULT, config)
            .into_iter()
            .filter_map(|block| {
                let mut source = citation(&block, field(block.body, &TITLE), field(block.body, &URL), config)?;
                source.content =
                    spanning_field(block.body, &CONTENT, &RESULT_LABELS, true).and_then(snippet);
                Some(Located::new(block.offset, source))
            })
            .collect()
    }
}

/// `Web Title:` records with optional multi-line `Web Content:` and a `WebURL:` line
pub struct WebTitledLayout;

impl Layout for WebTitledLayout {
    type Record = WebSource;

    fn name(&self) -> &'static str {
        "web-titled"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<WebSource>> {
        blocks(text, &WEB_TITLE, config)
            .into_iter()
            .filter_map(|block| {
                let title = block.head.get(1).map(|m| m.as_str().trim());
                let mut source = citation(&block, title, field(block.body, &WEB_URL), config)?;
                source.content =
                    spanning_field(block.body, &WEB_CONTENT, &WEB_LABELS, false).and_then(snippet);
                Some(Located::new(block.offset, source))
            })
            .collect()
    }
}

/// `Article N:` news blocks with `Title:`, `Source:` and `URL:` lines
pub struct ArticleLayout;

impl Layout for ArticleLayout {
    type Record = WebSource;

    fn name(&self) -> &'static str {
        "article"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<WebSource>> {
        blocks(text, &ARTICLE, config)
            .into_iter()
            .filter_map(|block| {
                let mut source = citation(&block, field(block.body, &TITLE), field(block.body, &URL), config)?;
                source.publisher = field(block.body, &SOURCE)
                    .and_then(clean_value)
                    .map(String::from);
                source.content = spanning_field(block.body, &DESCRIPTION, &RESULT_LABELS, true)
                    .and_then(snippet)
                    .or_else(|| {
                        spanning_field(block.body, &CONTENT, &RESULT_LABELS, true).and_then(snippet)
                    });
                Some(Located::new(block.offset, source))
            })
            .collect()
    }
}

/// Validate the title and URL of a block into a bare citation
fn citation(
    block: &Block<'_>,
    title: Option<&str>,
    url: Option<&str>,
    config: &ExtractorConfig,
) -> Option<WebSource> {
    let title = title.and_then(clean_value)?;
    let Some(url) = url.and_then(absolute_url) else {
        trace!(offset = block.offset, title, "Web record without an absolute URL skipped");
        return None;
    };
    if config.is_blocked_url(&url) {
        trace!(offset = block.offset, url = %url, "Blocked aggregator URL skipped");
        return None;
    }
    Some(WebSource::new(title, url))
}

/// Extract web article sources from a normalized corpus
pub fn extract_web_sources(text: &str, config: &ExtractorConfig) -> Vec<WebSource> {
    let sources = union_layouts(text, config, &[&ResultLayout, &WebTitledLayout, &ArticleLayout]);
    debug!(count = sources.len(), "Web sources extracted");
    sources
}
