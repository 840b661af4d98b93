// Integration tests for index caching over CSV sources

use crate::common::fixtures::{STYLE_HEADERS, STYLE_ROWS};
use crate::common::{create_test_services, field_values, TestCorpus};
use std::sync::Arc;
use uxlex::core::types::SearchRequest;

fn style_request(query: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        domain: Some("style".to_string()),
        max_results: Some(5),
    }
}

#[test]
fn test_unchanged_source_reuses_index() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    services.search.search(style_request("glass")).unwrap();
    let first = services.search.cache().get("styles.csv").unwrap();

    services.search.search(style_request("brutalism")).unwrap();
    let second = services.search.cache().get("styles.csv").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(services.search.cache().len(), 1);
}

#[test]
fn test_changed_source_rebuilds_index() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    let before = services.search.search(style_request("aurora")).unwrap();
    assert!(before.results.is_empty());
    let old_entry = services.search.cache().get("styles.csv").unwrap();

    let mut rows: Vec<&[&str]> = STYLE_ROWS.to_vec();
    rows.push(&[
        "5",
        "Aurora UI",
        "General",
        "aurora gradients northern lights",
        "#7C3AED, #06B6D4",
        "creative landing pages",
        "Medium",
        "flowing aurora gradients",
    ]);
    corpus.write("styles.csv", STYLE_HEADERS, &rows);
    corpus.touch_later("styles.csv", 10);

    let after = services.search.search(style_request("aurora")).unwrap();
    assert_eq!(
        field_values(&after.results, "Style Category"),
        vec!["Aurora UI"]
    );

    let new_entry = services.search.cache().get("styles.csv").unwrap();
    assert!(!Arc::ptr_eq(&old_entry, &new_entry));
    assert_eq!(new_entry.rows.len(), 5);
    assert_eq!(old_entry.rows.len(), 4);
}

#[test]
fn test_corpora_cached_independently() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    services.search.search(style_request("glass")).unwrap();
    services
        .search
        .search(SearchRequest {
            query: "fintech".to_string(),
            domain: Some("color".to_string()),
            max_results: None,
        })
        .unwrap();

    let cache = services.search.cache();
    assert!(cache.contains("styles.csv"));
    assert!(cache.contains("colors.csv"));
    assert!(!cache.contains("products.csv"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_removed_source_reports_not_found() {
    let corpus = TestCorpus::design();
    let services = create_test_services(corpus.path());

    services.search.search(style_request("glass")).unwrap();
    std::fs::remove_file(corpus.path().join("styles.csv")).unwrap();

    let err = services.search.search(style_request("glass")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_concurrent_searches_share_one_index() {
    let corpus = TestCorpus::design();
    let services = Arc::new(create_test_services(corpus.path()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let services = Arc::clone(&services);
            std::thread::spawn(move || {
                let query = if i % 2 == 0 { "glass" } else { "brutalism" };
                services.search.search(style_request(query)).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let response = handle.join().unwrap();
        assert!(!response.results.is_empty());
    }

    let entry = services.search.cache().get("styles.csv").unwrap();
    assert_eq!(entry.rows.len(), STYLE_ROWS.len());
    assert_eq!(services.search.cache().len(), 1);
}
