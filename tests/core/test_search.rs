// Integration tests for search over on-disk corpora

use crate::common::{create_test_services, field_values, TestCorpus};
use uxlex::core::types::{SearchRequest, StackSearchRequest};
use uxlex::{Domain, UxlexError};

fn request(query: &str, domain: Option<&str>, max_results: Option<usize>) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        domain: domain.map(str::to_string),
        max_results,
    }
}

#[test]
fn test_search_style_by_synonym() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("glass", Some("style"), Some(3)))
        .expect("Search failed");

    assert_eq!(response.domain, "style");
    assert_eq!(response.file, "styles.csv");
    assert_eq!(response.stack, None);
    assert_eq!(
        field_values(&response.results, "Style Category")[0],
        "Glassmorphism"
    );
    assert_eq!(response.count, response.results.len());
}

#[test]
fn test_search_corrects_typos() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("minimalsm", Some("style"), Some(1)))
        .expect("Search failed");

    assert_eq!(
        field_values(&response.results, "Style Category"),
        vec!["Minimalism"]
    );
}

#[test]
fn test_search_without_fuzzy_misses_typos() {
    let corpus = TestCorpus::design();
    let mut config = crate::common::test_config(corpus.path());
    config.search.use_fuzzy = false;
    let services = uxlex::Services::new(config);

    let response = services
        .search
        .search(request("minimalsm", Some("style"), None))
        .expect("Search failed");

    assert!(response.results.is_empty());
}

#[test]
fn test_search_routes_color_queries() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("hex palette", None, None))
        .expect("Search failed");

    assert_eq!(response.domain, "color");
    assert_eq!(response.file, "colors.csv");
    assert_eq!(
        field_values(&response.results, "Product Type"),
        vec!["Fintech"]
    );
}

#[test]
fn test_search_routes_product_queries() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("saas subscription", None, None))
        .expect("Search failed");

    assert_eq!(response.domain, "product");
    assert_eq!(
        field_values(&response.results, "Product Type")[0],
        "SaaS (General)"
    );
}

#[test]
fn test_search_projects_output_fields_in_order() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("fintech", Some("color"), None))
        .expect("Search failed");

    let record = &response.results[0];
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "Product Type",
            "Primary (Hex)",
            "Secondary (Hex)",
            "CTA (Hex)",
            "Background (Hex)",
            "Text (Hex)",
            "Notes",
        ]
    );
    // Columns outside the output list are dropped
    assert!(!record.contains_key("No"));
}

#[test]
fn test_search_omits_missing_output_fields() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("glassmorphism", Some("style"), Some(1)))
        .expect("Search failed");

    let record = &response.results[0];
    assert_eq!(record["Style Category"], "Glassmorphism");
    // styles.csv fixture has no Performance column
    assert!(!record.contains_key("Performance"));
}

#[test]
fn test_search_respects_max_results() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    // "trust" appears in two color rows
    let all = services
        .search
        .search(request("trust", Some("color"), Some(10)))
        .expect("Search failed");
    assert_eq!(all.count, 2);

    let one = services
        .search
        .search(request("trust", Some("color"), Some(1)))
        .expect("Search failed");
    assert_eq!(one.count, 1);
    assert_eq!(one.results[0], all.results[0]);
}

#[test]
fn test_search_rejects_zero_max_results() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let err = services
        .search
        .search(request("glass", Some("style"), Some(0)))
        .unwrap_err();
    assert!(matches!(err, UxlexError::InvalidQuery(_)));
    assert!(err.is_bad_request());
}

#[test]
fn test_search_rejects_overlong_query() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let query = "a".repeat(services.config.search.max_query_length + 1);
    let err = services
        .search
        .search(request(&query, Some("style"), None))
        .unwrap_err();
    assert!(matches!(err, UxlexError::InvalidQuery(_)));
}

#[test]
fn test_search_empty_query_is_not_an_error() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("  ", Some("style"), None))
        .expect("Search failed");
    assert_eq!(response.count, 0);
    assert!(response.results.is_empty());
}

#[test]
fn test_search_no_matches_is_empty() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("zzzzqqqq", Some("style"), None))
        .expect("Search failed");
    assert!(response.results.is_empty());
}

#[test]
fn test_search_unknown_domain() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let err = services
        .search
        .search(request("glass", Some("wallpaper"), None))
        .unwrap_err();
    assert!(matches!(err, UxlexError::UnknownDomain(_)));
    assert!(err.to_string().contains("style"));
    assert!(services.search.cache().is_empty());
}

#[test]
fn test_search_missing_corpus_is_not_found() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let err = services
        .search
        .search(request("line chart", Some("chart"), None))
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("charts.csv"));
    assert!(!services.search.cache().contains("charts.csv"));
    assert!(services.search.cache().is_empty());
}

#[test]
fn test_search_empty_corpus_yields_nothing() {
    let corpus = TestCorpus::empty();
    corpus.write("styles.csv", crate::common::fixtures::STYLE_HEADERS, &[]);
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search(request("glass", Some("style"), None))
        .expect("Search failed");
    assert!(response.results.is_empty());
    assert!(services.search.cache().contains("styles.csv"));
}

#[test]
fn test_search_multilingual_query() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    // Thai for "healthcare"
    let response = services
        .search
        .search(request("สุขภาพ", Some("color"), None))
        .expect("Search failed");
    assert_eq!(
        field_values(&response.results, "Product Type")[0],
        "Healthcare"
    );
}

#[test]
fn test_search_stack() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search_stack(StackSearchRequest {
            query: "memoize expensive".to_string(),
            stack: "react".to_string(),
            max_results: Some(2),
        })
        .expect("Stack search failed");

    assert_eq!(response.domain, "stack");
    assert_eq!(response.stack.as_deref(), Some("react"));
    assert_eq!(response.file, "stacks/react.csv");
    assert_eq!(
        field_values(&response.results, "Guideline")[0],
        "Memoize expensive computations"
    );
    assert_eq!(
        response.results[0]["Docs URL"],
        "https://react.dev/reference/react/useMemo"
    );
}

#[test]
fn test_search_stack_unknown() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let err = services
        .search
        .search_stack(StackSearchRequest {
            query: "state".to_string(),
            stack: "cobol".to_string(),
            max_results: None,
        })
        .unwrap_err();
    assert!(matches!(err, UxlexError::UnknownStack(_)));
    assert!(err.to_string().contains("react"));
}

#[test]
fn test_search_stack_missing_corpus() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let err = services
        .search
        .search_stack(StackSearchRequest {
            query: "state".to_string(),
            stack: "vue".to_string(),
            max_results: None,
        })
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_search_domain_direct() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let response = services
        .search
        .search_domain("brutalism raw", Domain::Style, Some(1))
        .expect("Search failed");
    assert_eq!(
        field_values(&response.results, "Style Category"),
        vec!["Brutalism"]
    );
}

#[test]
fn test_search_is_deterministic() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let first = services
        .search
        .search(request("soft blur trust", Some("style"), Some(4)))
        .expect("Search failed");
    let second = services
        .search
        .search(request("soft blur trust", Some("style"), Some(4)))
        .expect("Search failed");
    assert_eq!(first.results, second.results);
}
