//! Record block scanning shared by all lanes
//!
//! A record starts at a line-anchored introducer label and runs until the
//! next introducer of any lane, a `---` separator, a sentinel line, or the end
//! of the corpus. Field lookups then happen inside that block only.

use crate::config::ExtractorConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Compile a pattern known to be valid at build time
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid built-in pattern {re:?}: {e}"))
}

/// Introducer lines of every record layout, across all lanes
///
/// Numbered headers and the access-URL section header stand alone on their
/// line; the other labels carry their value after the colon.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"(?m)^[ \t]*(?:",
        r"(?:(?:Document )?Segment|(?:Web )?Result|Article|(?:Viral Post )?Example) \d+:[ \t]*$",
        r"|Document Access URLs(?:[ \t]*\([^)\n]*\))?[ \t]*:[ \t]*$",
        r"|Document Title:",
        r"|Source PDF:",
        r"|Web Title:",
        r"|Post Content:",
        r")",
    ))
});

/// Values the backend prints when a field is missing
const PLACEHOLDERS: &[&str] = &["none", "null", "n/a", "unknown", "not available"];

/// One record block
#[derive(Debug)]
pub(crate) struct Block<'a> {
    /// Byte offset of the introducer in the corpus
    pub offset: usize,
    /// Captures of the introducer pattern
    pub head: Captures<'a>,
    /// Lines following the introducer line, up to the block end
    pub body: &'a str,
    /// Byte offset where the block ends in the corpus
    pub end: usize,
}

/// Split `text` into the blocks opened by `introducer`
pub(crate) fn blocks<'a>(
    text: &'a str,
    introducer: &Regex,
    config: &ExtractorConfig,
) -> Vec<Block<'a>> {
    introducer
        .captures_iter(text)
        .filter_map(|head| {
            let whole = head.get(0)?;
            let body_start = next_line(text, whole.end());
            let body_end = block_end(text, body_start, config);
            Some(Block {
                offset: whole.start(),
                body: &text[body_start..body_end],
                end: body_end,
                head,
            })
        })
        .collect()
}

/// Byte offset where the block starting at `from` ends
pub(crate) fn block_end(text: &str, from: usize, config: &ExtractorConfig) -> usize {
    let mut pos = from;
    for line in text[from..].split_inclusive('\n') {
        if is_terminator(line, config) {
            return pos;
        }
        pos += line.len();
    }
    pos
}

fn is_terminator(line: &str, config: &ExtractorConfig) -> bool {
    BOUNDARY.is_match(line) || line.trim() == "---" || config.is_sentinel(line)
}

/// Offset of the first byte after the line containing `pos`
fn next_line(text: &str, pos: usize) -> usize {
    text[pos..]
        .find('\n')
        .map(|nl| pos + nl + 1)
        .unwrap_or(text.len())
}

/// Trimmed first capture group of `label` within `body`
pub(crate) fn field<'a>(body: &'a str, label: &Regex) -> Option<&'a str> {
    label
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Text from `start` that continues over following lines until a `stops` line
///
/// The first line is always taken whole. With `stop_at_blank`, an empty line
/// also ends the value.
pub(crate) fn span<'a>(body: &'a str, start: usize, stops: &Regex, stop_at_blank: bool) -> &'a str {
    let first_end = next_line(body, start);
    let mut end = first_end;
    for line in body[first_end..].split_inclusive('\n') {
        if stops.is_match(line) || (stop_at_blank && line.trim().is_empty()) {
            break;
        }
        end += line.len();
    }
    body[start..end].trim()
}

/// Multi-line value introduced by `label`, ending at a `stops` line
pub(crate) fn spanning_field<'a>(
    body: &'a str,
    label: &Regex,
    stops: &Regex,
    stop_at_blank: bool,
) -> Option<&'a str> {
    let start = label.captures(body)?.get(1)?.start();
    Some(span(body, start, stops, stop_at_blank))
}

/// Drop backend placeholders such as `None`, `N/A` or `No URL available`
pub(crate) fn clean_value(raw: &str) -> Option<&str> {
    let value = raw.trim();
    let lower = value.to_ascii_lowercase();
    let lower = lower.trim_end_matches('.');
    let placeholder = PLACEHOLDERS.contains(&lower)
        || (lower.starts_with("no ") && lower.ends_with(" available"));
    if value.is_empty() || placeholder {
        None
    } else {
        Some(value)
    }
}

/// First token of `raw` when it is an absolute http(s) URL
pub(crate) fn absolute_url(raw: &str) -> Option<String> {
    let token = clean_value(raw)?.split_whitespace().next()?;
    let lower = token.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;
    if rest.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Collapse runs of whitespace, newlines included, into single spaces
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleaned, whitespace-collapsed snippet
pub(crate) fn snippet(raw: &str) -> Option<String> {
    clean_value(raw)
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    static INTRO: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Result \d+:[ \t]*$"));
    static TITLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^[ \t]*Title:[ \t]*(.*)$"));
    static STOPS: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[ \t]*(?:Title|URL):"));

    #[test]
    fn test_blocks_end_at_next_introducer() {
        let text = "Result 1:\n  Title: A\nResult 2:\n  Title: B\n";
        let found = blocks(text, &INTRO, &ExtractorConfig::default());
        assert_eq!(found.len(), 2);
        assert_eq!(field(found[0].body, &TITLE), Some("A"));
        assert_eq!(field(found[1].body, &TITLE), Some("B"));
        assert_eq!(found[1].offset, text.find("Result 2").unwrap());
    }

    #[test]
    fn test_blocks_end_at_other_lane_introducer() {
        let text = "Result 1:\n  Title: A\nExample 1:\n  Title: not mine\n";
        let found = blocks(text, &INTRO, &ExtractorConfig::default());
        assert_eq!(found[0].body, "  Title: A\n");
    }

    #[test]
    fn test_blocks_end_at_separator_and_sentinel() {
        let config = ExtractorConfig::default();
        let text = "Result 1:\n  Title: A\n---\n  Title: B\n";
        assert_eq!(blocks(text, &INTRO, &config)[0].body, "  Title: A\n");

        let text = "Result 1:\n  Title: A\nCalling tool 'x'\n  Title: B\n";
        assert_eq!(blocks(text, &INTRO, &config)[0].body, "  Title: A\n");
    }

    #[test]
    fn test_narrative_mentions_do_not_end_blocks() {
        let text = "Result 1:\n  Title: A\nResult 3: skipped\nDocument Access URLs are generated on demand\n  URL: x\n";
        let found = blocks(text, &INTRO, &ExtractorConfig::default());
        assert_eq!(found.len(), 1);
        assert!(found[0].body.ends_with("  URL: x\n"));
    }

    #[test]
    fn test_introducer_at_end_of_text() {
        let found = blocks("Result 1:", &INTRO, &ExtractorConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "");
    }

    #[test]
    fn test_span_stops_at_label_and_blank() {
        let body = "Content: one\ntwo\n\nthree\nURL: x\n";
        let start = body.find("one").unwrap();
        assert_eq!(span(body, start, &STOPS, false), "one\ntwo\n\nthree");
        assert_eq!(span(body, start, &STOPS, true), "one\ntwo");
    }

    #[test]
    fn test_clean_value_placeholders() {
        assert_eq!(clean_value(" None "), None);
        assert_eq!(clean_value("N/A"), None);
        assert_eq!(clean_value("Not available"), None);
        assert_eq!(clean_value("No content available."), None);
        assert_eq!(clean_value("No target audience available"), None);
        assert_eq!(clean_value("Nobody available"), Some("Nobody available"));
        assert_eq!(clean_value(" report.pdf "), Some("report.pdf"));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://x/report.pdf"), Some("https://x/report.pdf".to_string()));
        assert_eq!(absolute_url("https://x/a.pdf (expires in 1h)"), Some("https://x/a.pdf".to_string()));
        assert_eq!(absolute_url("None"), None);
        assert_eq!(absolute_url("ftp://x/a"), None);
        assert_eq!(absolute_url("https://"), None);
        assert_eq!(absolute_url("/relative/path"), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n  b\t\tc \n"), "a b c");
    }
}
