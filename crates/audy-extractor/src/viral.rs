//! Viral post lane - reference posts used as style examples
//!
//! Post content often spans several lines. It runs until the next label line
//! of its block, which itself ends at the next record introducer, a sentinel
//! line such as `Calling tool ...`, or the end of the corpus.

use crate::config::ExtractorConfig;
use crate::layout::{union_layouts, Layout, Located};
use crate::scan::{blocks, clean_value, field, pattern, span, spanning_field, Block};
use audy_domain::{SimilarityScore, ViralPostSource};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static EXAMPLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Example \d+:[ \t]*$"));
static POST_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Post Content:[ \t]*(.*)$"));
static VIRAL_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Viral Post Example \d+:[ \t]*$"));

static SIMILARITY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Similarity(?: Score)?:[ \t]*(.*)$"));
static INTERACTIONS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Interactions:[ \t]*(.*)$"));
static CONTENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*(?:Page )?Content:[ \t]*(.*)$"));
static TARGET_AUDIENCE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Target Audience:[ \t]*(.*)$"));
static MEDIA_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^[ \t]*Media Description:[ \t]*(.*)$"));
static ENGAGEMENT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"(?m)^[ \t]*Source:[ \t]*([^,\n]*)",
        r"(?:,[ \t]*Views:[ \t]*([^,\n]*))?",
        r"(?:,[ \t]*Reactions:[ \t]*([^,\n]*))?",
    ))
});
static VIEWS: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Views:[ \t]*(.*)$"));
static REACTIONS: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Reactions:[ \t]*(.*)$"));
static VIRAL_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"^[ \t]*(?:Similarity(?: Score)?|Interactions|Target Audience|Media Description",
        r"|Content Url|Source|Views|Reactions|(?:Page )?Content):",
    ))
});

/// `Example N:` blocks from the truncated post-search log
pub struct ExampleLayout;

impl Layout for ExampleLayout {
    type Record = ViralPostSource;

    fn name(&self) -> &'static str {
        "example"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<ViralPostSource>> {
        blocks(text, &EXAMPLE, config)
            .into_iter()
            .filter_map(|block| {
                let content = spanning_field(block.body, &CONTENT, &VIRAL_LABELS, false)?;
                let mut post = scored_post(&block, strip_content_labels(content), config)?;
                post.interactions = field(block.body, &INTERACTIONS).and_then(parse_count);
                Some(Located::new(block.offset, post))
            })
            .collect()
    }
}

/// `Post Content:` records followed by a `Similarity Score:` line
pub struct PostContentLayout;

impl Layout for PostContentLayout {
    type Record = ViralPostSource;

    fn name(&self) -> &'static str {
        "post-content"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<ViralPostSource>> {
        blocks(text, &POST_CONTENT, config)
            .into_iter()
            .filter_map(|block| {
                // Content starts on the introducer line itself
                let start = block.head.get(1)?.start();
                let content = span(&text[..block.end], start, &VIRAL_LABELS, false);
                let post = scored_post(&block, content, config)?;
                Some(Located::new(block.offset, post))
            })
            .collect()
    }
}

/// `Viral Post Example N:` blocks from the retriever and blog-post tools
pub struct ViralExampleLayout;

impl Layout for ViralExampleLayout {
    type Record = ViralPostSource;

    fn name(&self) -> &'static str {
        "viral-example"
    }

    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<ViralPostSource>> {
        blocks(text, &VIRAL_EXAMPLE, config)
            .into_iter()
            .filter_map(|block| {
                let engagement = ENGAGEMENT.captures(block.body);
                let group = |idx: usize| {
                    engagement
                        .as_ref()
                        .and_then(|caps| caps.get(idx))
                        .and_then(|m| clean_value(m.as_str()))
                };
                let origin = group(1);
                let views = group(2).or_else(|| field(block.body, &VIEWS).and_then(clean_value));
                let reactions =
                    group(3).or_else(|| field(block.body, &REACTIONS).and_then(clean_value));

                let content = spanning_field(block.body, &CONTENT, &VIRAL_LABELS, false)
                    .and_then(clean_value)
                    .or(origin)?;

                let mut post = base_post(&block, content, config)?;
                post.similarity_score = score(&block);
                post.origin = origin.map(String::from);
                post.views = views.map(String::from);
                post.reactions = reactions.map(String::from);
                Some(Located::new(block.offset, post))
            })
            .collect()
    }
}

/// Post with the block's metadata; `None` when the content is empty
fn base_post(block: &Block<'_>, content: &str, config: &ExtractorConfig) -> Option<ViralPostSource> {
    let Some(content) = clean_value(content) else {
        trace!(offset = block.offset, "Viral post without content skipped");
        return None;
    };
    let mut post = ViralPostSource::new(content).with_title_limit(config.title_max_chars);
    post.target_audience = field(block.body, &TARGET_AUDIENCE)
        .and_then(clean_value)
        .map(String::from);
    post.media_description = field(block.body, &MEDIA_DESCRIPTION)
        .and_then(clean_value)
        .map(String::from);
    Some(post)
}

/// Like [`base_post`], but the block must carry a similarity score
fn scored_post(block: &Block<'_>, content: &str, config: &ExtractorConfig) -> Option<ViralPostSource> {
    let Some(similarity) = score(block) else {
        trace!(offset = block.offset, "Viral post without similarity skipped");
        return None;
    };
    Some(base_post(block, content, config)?.with_similarity(similarity))
}

fn score(block: &Block<'_>) -> Option<SimilarityScore> {
    field(block.body, &SIMILARITY)
        .and_then(clean_value)
        .map(SimilarityScore::new)
}

/// Drop the doubled `Content:` prefix some tool versions logged
fn strip_content_labels(content: &str) -> &str {
    let mut content = content.trim_start();
    while let Some(rest) = content.strip_prefix("Content:") {
        content = rest.trim_start();
    }
    content
}

fn parse_count(raw: &str) -> Option<u64> {
    raw.replace(',', "").trim().parse().ok()
}

/// Extract viral post sources from a normalized corpus
pub fn extract_viral_post_sources(text: &str, config: &ExtractorConfig) -> Vec<ViralPostSource> {
    let sources = union_layouts(
        text,
        config,
        &[&ExampleLayout, &PostContentLayout, &ViralExampleLayout],
    );
    debug!(count = sources.len(), "Viral post sources extracted");
    sources
}
