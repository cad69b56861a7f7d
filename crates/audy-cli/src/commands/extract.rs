//! Extract command implementation.

use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::Formatter;
use audy_domain::{LogCorpus, SourceBundle};
use audy_extractor::{corpus_from_json_str, SourceExtractor};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: InputArgs, extractor: &SourceExtractor, formatter: &Formatter) -> Result<()> {
    let bundle = load_bundle(&args, extractor)?;
    println!("{}", formatter.format_bundle(&bundle)?);
    Ok(())
}

/// Read the input named by `args` and extract its sources.
pub fn load_bundle(args: &InputArgs, extractor: &SourceExtractor) -> Result<SourceBundle> {
    let corpus = read_corpus(args)?;
    let bundle = extractor.extract(&corpus);
    info!(
        "Found {} source(s) in {}",
        bundle.total_source_count(),
        input_name(args)
    );
    Ok(bundle)
}

/// Read the log corpus from a file or stdin.
pub fn read_corpus(args: &InputArgs) -> Result<LogCorpus> {
    let raw = match args.path() {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if args.json_input {
        Ok(corpus_from_json_str(&raw)?)
    } else {
        Ok(LogCorpus::Text(raw))
    }
}

fn input_name(args: &InputArgs) -> String {
    args.path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn args_for(path: &Path, json_input: bool) -> InputArgs {
        InputArgs {
            file: Some(path.to_path_buf()),
            json_input,
        }
    }

    #[test]
    fn test_text_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "Post Content: Great insight here\nSimilarity Score: 0.92\n").unwrap();

        let bundle = load_bundle(&args_for(file.path(), false), &SourceExtractor::default()).unwrap();
        assert_eq!(bundle.viral_posts.len(), 1);
        assert_eq!(bundle.viral_posts[0].title, "Great insight here");
    }

    #[test]
    fn test_json_lines_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"["Result 1:", "  Title: T", "  URL: https://example.com/t"]"#,
        )
        .unwrap();

        let bundle = load_bundle(&args_for(file.path(), true), &SourceExtractor::default()).unwrap();
        assert_eq!(bundle.web_articles.len(), 1);
    }

    #[test]
    fn test_json_null_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "null").unwrap();

        let bundle = load_bundle(&args_for(file.path(), true), &SourceExtractor::default()).unwrap();
        assert!(!bundle.has_any_sources());
    }

    #[test]
    fn test_json_object_rejected() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"logs": []}"#).unwrap();

        let result = read_corpus(&args_for(file.path(), true));
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_corpus(&args_for(Path::new("/nonexistent/audy/run.log"), false));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
