//! Ranking, match modes and result limits.

use polydoc::{Combine, SearchOptions};

use crate::common::{build, yardl_site};

#[test]
fn test_scores_are_sorted_descending() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    let results = index.search_default("packages install").unwrap();

    assert!(results.len() > 1);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "{:?}", pair);
    }
    assert!(results.iter().all(|r| r.score > 0.0));
}

#[test]
fn test_combined_terms_rank_section_page_first() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    let results = index.search_default("python packages").unwrap();
    assert_eq!(results[0].id, "/yardl/python/packages#packages");
}

#[test]
fn test_and_requires_every_term() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    let hooks = index.hooks().unwrap();
    let options = SearchOptions {
        combine: Combine::And,
        ..index.config.search
    };

    let results = index.search("python install", &hooks, &options);
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["/yardl/python/packages#install"]);
}

#[test]
fn test_prefix_and_fuzzy_matching() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);

    let prefix = index.search_default("toolbo").unwrap();
    assert_eq!(prefix[0].id, "/yardl/matlab/packages#packages");

    let fuzzy = index.search_default("toolboxs").unwrap();
    assert_eq!(fuzzy[0].id, "/yardl/matlab/packages#packages");

    let hooks = index.hooks().unwrap();
    let strict = SearchOptions {
        fuzzy: 0.0,
        prefix: false,
        ..index.config.search
    };
    assert!(index.search("toolbo", &hooks, &strict).is_empty());
}

#[test]
fn test_exact_beats_prefix() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    let results = index.search_default("install").unwrap();

    let top = &results[0];
    assert!(top.id.ends_with("#install"), "{}", top.id);
    assert!(top.terms.contains(&"install".to_string()));
}

#[test]
fn test_limit_truncates() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    let hooks = index.hooks().unwrap();
    let options = SearchOptions {
        limit: 2,
        ..index.config.search
    };
    assert_eq!(index.search("packages", &hooks, &options).len(), 2);
}

#[test]
fn test_empty_and_unknown_queries() {
    let site = yardl_site("augment");
    let (_out, _path, index) = build(&site);
    assert!(index.search_default("").unwrap().is_empty());
    assert!(index.search_default("  ...  ").unwrap().is_empty());
    assert!(index.search_default("zyxwvut").unwrap().is_empty());
}
