//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{extract_sources_from_json, extract_sources_from_logs, ExtractorConfig, SourceExtractor};
    use audy_domain::{Lane, LogCorpus, SimilarityScore, SourceBundle};
    use proptest::prelude::*;
    use serde_json::json;

    const MIXED_LOG: &str = "\
Calling tool 'search_documents' with args: {\"query\": \"asset based lending\"}
Found 2 document segments

Segment 1:
  File: abl-guide.pdf
  Similarity: 0.873
  Document URL: https://files.example.com/abl-guide.pdf
  Content: Asset based lending uses receivables...

Segment 2:
  File: rates.pdf
  Similarity: 0.612
  Document URL: None

Calling tool 'web_search' with args: {\"query\": \"lending trends\"}
Found 2 web results

Result 1:
  Title: Lending trends 2024
  URL: https://news.example.com/trends
  Content: Rates are easing.

Result 2:
  Title: Raw API dump
  URL: https://newsapi.org/v2/everything?q=lending

Calling tool 'search_viral_posts' with args: {}
Found 1 viral post examples

Example 1:
  Similarity: 0.91
  Interactions: 2,310
  Content: Content: Cash flow is king.

Nobody talks about this.

Viral post creation complete.
";

    #[test]
    fn test_scenario_segment_pdf() {
        let bundle = extract_sources_from_logs(
            "Segment 1:\n  File: report.pdf\n  Similarity: 0.87\n  Document URL: https://x/report.pdf\n",
        );

        assert_eq!(bundle.pdfs.len(), 1);
        assert_eq!(bundle.pdfs[0].filename, "report.pdf");
        assert_eq!(bundle.pdfs[0].url.as_deref(), Some("https://x/report.pdf"));
        assert!(bundle.web_articles.is_empty());
        assert!(bundle.viral_posts.is_empty());
    }

    #[test]
    fn test_scenario_duplicate_web_url() {
        let bundle = extract_sources_from_logs(vec![
            "Result 1:",
            "  Title: One",
            "  URL: https://example.com/a",
            "Result 2:",
            "  Title: Two",
            "  URL: https://example.com/a",
        ]);

        assert_eq!(bundle.web_articles.len(), 1);
        assert_eq!(bundle.web_articles[0].title, "One");
    }

    #[test]
    fn test_scenario_post_content() {
        let bundle = extract_sources_from_logs("Post Content: Great insight here\nSimilarity Score: 0.92");

        assert_eq!(bundle.viral_posts.len(), 1);
        let post = &bundle.viral_posts[0];
        assert_eq!(post.content, "Great insight here");
        assert_eq!(post.title, "Great insight here");
        assert_eq!(post.similarity_score, Some(SimilarityScore::new("0.92")));
    }

    #[test]
    fn test_scenario_empty_array() {
        let bundle = extract_sources_from_json(&json!([])).unwrap();

        assert_eq!(bundle, SourceBundle::default());
        assert!(!bundle.has_any_sources());
        assert_eq!(bundle.total_source_count(), 0);

        let wire = serde_json::to_value(&bundle).unwrap();
        assert_eq!(wire, json!({"pdfs": [], "webArticles": [], "viralPosts": []}));
    }

    #[test]
    fn test_absent_forms_are_equivalent() {
        let from_null = extract_sources_from_json(&json!(null)).unwrap();
        let from_empty_array = extract_sources_from_json(&json!([])).unwrap();
        let from_empty_string = extract_sources_from_json(&json!("")).unwrap();
        let from_none = extract_sources_from_logs(None::<String>);

        assert_eq!(from_null, SourceBundle::default());
        assert_eq!(from_null, from_empty_array);
        assert_eq!(from_null, from_empty_string);
        assert_eq!(from_null, from_none);
    }

    #[test]
    fn test_invalid_json_shape_is_reported() {
        assert!(extract_sources_from_json(&json!({"logs": "Segment 1:"})).is_err());
        assert!(extract_sources_from_json(&json!(7)).is_err());
    }

    #[test]
    fn test_mixed_log() {
        let bundle = extract_sources_from_logs(MIXED_LOG);

        let names: Vec<_> = bundle.pdfs.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["abl-guide.pdf", "rates.pdf"]);
        assert_eq!(bundle.pdfs[0].similarity_score, Some(0.873));
        assert_eq!(bundle.pdfs[1].url, None);

        // The aggregator API fetch is not a citation
        assert_eq!(bundle.web_articles.len(), 1);
        assert_eq!(bundle.web_articles[0].content.as_deref(), Some("Rates are easing."));

        assert_eq!(bundle.viral_posts.len(), 1);
        let post = &bundle.viral_posts[0];
        assert_eq!(post.content, "Cash flow is king.\n\nNobody talks about this.");
        assert_eq!(post.interactions, Some(2310));

        assert_eq!(bundle.total_source_count(), 4);
    }

    #[test]
    fn test_lines_and_text_agree() {
        let lines: Vec<&str> = MIXED_LOG.lines().collect();
        assert_eq!(extract_sources_from_logs(lines), extract_sources_from_logs(MIXED_LOG));
    }

    #[test]
    fn test_unrecognized_log_yields_nothing() {
        let bundle = extract_sources_from_logs(vec![
            "Generating post...",
            "Title: dangling title with no record",
            "URL: https://example.com/orphan",
        ]);
        assert!(!bundle.has_any_sources());
    }

    #[test]
    fn test_custom_title_limit() {
        let extractor = SourceExtractor::new(ExtractorConfig {
            title_max_chars: 5,
            ..Default::default()
        });
        let bundle = extractor.extract(&LogCorpus::from("Post Content: Hello world\nSimilarity Score: 0.5"));
        assert_eq!(bundle.viral_posts[0].title, "Hello...");
        assert_eq!(bundle.viral_posts[0].content, "Hello world");
    }

    #[test]
    fn test_custom_blocklist_replaces_default() {
        let extractor = SourceExtractor::new(ExtractorConfig {
            blocked_url_substrings: vec!["example.com".to_string()],
            ..Default::default()
        });
        let bundle = extractor.extract(&LogCorpus::from(MIXED_LOG));

        // `newsapi` is no longer blocked once the list is replaced
        assert_eq!(bundle.web_articles.len(), 1);
        assert_eq!(bundle.web_articles[0].url, "https://newsapi.org/v2/everything?q=lending");
        assert_eq!(bundle.count(Lane::Pdf), 2);
    }

    #[test]
    fn test_crlf_log() {
        let bundle = extract_sources_from_logs(
            "Segment 1:\r\n  File: report.pdf\r\n  Similarity: 0.87\r\n  Document URL: https://x/report.pdf\r\n\r\nResult 1:\r\n  Title: T\r\n  URL: https://example.com/t\r\n",
        );

        assert_eq!(bundle.pdfs.len(), 1);
        assert_eq!(bundle.pdfs[0].url.as_deref(), Some("https://x/report.pdf"));
        assert_eq!(bundle.web_articles.len(), 1);
        assert_eq!(bundle.web_articles[0].title, "T");
    }

    proptest! {
        #[test]
        fn prop_extraction_is_deterministic(lines in prop::collection::vec("[ -~]{0,40}", 0..20)) {
            let first = extract_sources_from_logs(lines.clone());
            let second = extract_sources_from_logs(lines);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_count_identity(lines in prop::collection::vec(
            prop_oneof![
                Just("Segment 1:".to_string()),
                Just("  File: a.pdf".to_string()),
                Just("Result 1:".to_string()),
                Just("  Title: T".to_string()),
                Just("  URL: https://example.com/x".to_string()),
                Just("Post Content: hello".to_string()),
                Just("Similarity Score: 0.5".to_string()),
                "[ -~]{0,30}",
            ],
            0..30,
        )) {
            let bundle = extract_sources_from_logs(lines);
            let sum: usize = Lane::ALL.iter().map(|lane| bundle.count(*lane)).sum();
            prop_assert_eq!(bundle.total_source_count(), sum);
            prop_assert_eq!(bundle.has_any_sources(), sum > 0);
        }
    }
}
