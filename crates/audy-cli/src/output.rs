//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use audy_domain::{derive_title, Lane, SourceBundle};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters of content shown in a table cell.
const PREVIEW_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extracted bundle.
    pub fn format_bundle(&self, bundle: &SourceBundle) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(bundle)?),
            OutputFormat::Table => Ok(self.format_bundle_table(bundle)),
            OutputFormat::Quiet => Ok(format_bundle_quiet(bundle)),
        }
    }

    /// Format per-lane counts.
    pub fn format_counts(&self, bundle: &SourceBundle) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut counts = serde_json::Map::new();
                for lane in Lane::ALL {
                    counts.insert(lane.as_str().to_string(), bundle.count(lane).into());
                }
                counts.insert("total".to_string(), bundle.total_source_count().into());
                counts.insert("hasAnySources".to_string(), bundle.has_any_sources().into());
                Ok(serde_json::to_string_pretty(&counts)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Lane", "Sources"]);
                for lane in Lane::ALL {
                    builder.push_record([lane.heading().to_string(), bundle.count(lane).to_string()]);
                }
                builder.push_record(["Total".to_string(), bundle.total_source_count().to_string()]);
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(bundle.total_source_count().to_string()),
        }
    }

    fn format_bundle_table(&self, bundle: &SourceBundle) -> String {
        if !bundle.has_any_sources() {
            return self.colorize("No sources found.", "yellow");
        }

        let mut sections = Vec::new();

        if !bundle.pdfs.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["File", "Similarity", "URL", "Content"]);
            for pdf in &bundle.pdfs {
                let similarity = pdf
                    .similarity_score
                    .map(|v| format!("{}%", (v * 100.0).round()))
                    .unwrap_or_default();
                builder.push_record([
                    pdf.filename.clone(),
                    similarity,
                    pdf.url.clone().unwrap_or_else(|| "-".to_string()),
                    preview(pdf.content.as_deref()),
                ]);
            }
            sections.push(self.section(Lane::Pdf, bundle, builder));
        }

        if !bundle.web_articles.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Title", "Publisher", "URL", "Content"]);
            for article in &bundle.web_articles {
                builder.push_record([
                    article.title.clone(),
                    article.publisher.clone().unwrap_or_default(),
                    article.url.clone(),
                    preview(article.content.as_deref()),
                ]);
            }
            sections.push(self.section(Lane::Web, bundle, builder));
        }

        if !bundle.viral_posts.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Title", "Similarity", "Engagement", "Audience"]);
            for post in &bundle.viral_posts {
                let similarity = post
                    .similarity_score
                    .as_ref()
                    .map(|s| match s.percent() {
                        Some(pct) => format!("{}%", pct),
                        None => s.to_string(),
                    })
                    .unwrap_or_default();
                builder.push_record([
                    preview(Some(&post.title)),
                    similarity,
                    engagement(post),
                    post.target_audience.clone().unwrap_or_default(),
                ]);
            }
            sections.push(self.section(Lane::ViralPost, bundle, builder));
        }

        sections.join("\n\n")
    }

    fn section(&self, lane: Lane, bundle: &SourceBundle, builder: Builder) -> String {
        let badge = format!("{} ({})", lane.heading(), bundle.count(lane));
        format!("{}\n{}", self.colorize(&badge, "cyan"), styled(builder))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One line per source: the URL when known, else the file name or title.
fn format_bundle_quiet(bundle: &SourceBundle) -> String {
    let pdfs = bundle
        .pdfs
        .iter()
        .map(|pdf| pdf.url.as_deref().unwrap_or(&pdf.filename));
    let web = bundle.web_articles.iter().map(|a| a.url.as_str());
    let viral = bundle.viral_posts.iter().map(|p| p.title.as_str());
    pdfs.chain(web).chain(viral).collect::<Vec<_>>().join("\n")
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn preview(text: Option<&str>) -> String {
    let flat = text
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    derive_title(&flat, PREVIEW_CHARS)
}

fn engagement(post: &audy_domain::ViralPostSource) -> String {
    let mut parts = Vec::new();
    if let Some(n) = post.interactions {
        parts.push(format!("{} interactions", n));
    }
    if let Some(views) = &post.views {
        parts.push(format!("{} views", views));
    }
    if let Some(reactions) = &post.reactions {
        parts.push(format!("{} reactions", reactions));
    }
    parts.join(", ")
}
