//! Log corpus normalization
//!
//! Turns whatever the generation service handed over into the single text
//! blob every lane scans.

use crate::error::{ExtractorError, Result};
use audy_domain::LogCorpus;
use serde_json::Value;
use std::borrow::Cow;

/// Join a corpus into one searchable string
///
/// Lines are joined with `\n` and `\r\n` line endings become `\n`; a text
/// corpus without carriage returns is returned unchanged.
pub fn normalize(corpus: &LogCorpus) -> Cow<'_, str> {
    let joined = corpus.joined();
    if joined.contains("\r\n") {
        Cow::Owned(joined.replace("\r\n", "\n"))
    } else {
        joined
    }
}

/// Build a corpus from a JSON value
///
/// `null` becomes the empty corpus, a string a text corpus, and an array of
/// strings a line corpus. Anything else is a usage error and is reported
/// rather than coerced.
pub fn corpus_from_json(value: &Value) -> Result<LogCorpus> {
    match value {
        Value::Null => Ok(LogCorpus::default()),
        Value::String(text) => Ok(LogCorpus::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::String(line) => Ok(line.clone()),
                other => Err(ExtractorError::InvalidInput(format!(
                    "log line {} is {}, expected a string",
                    idx,
                    json_kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(LogCorpus::Lines),
        other => Err(ExtractorError::InvalidInput(format!(
            "log corpus is {}, expected a string or an array of strings",
            json_kind(other)
        ))),
    }
}

/// Parse a JSON document and build a corpus from it
pub fn corpus_from_json_str(json: &str) -> Result<LogCorpus> {
    let value: Value = serde_json::from_str(json)?;
    corpus_from_json(&value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
