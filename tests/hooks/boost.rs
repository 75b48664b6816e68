//! Placeholder boost filter tests.

use polydoc::hooks::{boost_document, is_placeholder, NEUTRAL_WEIGHT, SUPPRESS_WEIGHT};
use polydoc::{Disambiguation, IndexHooks, StoredFields};
use serde_json::{json, Value};

use crate::common::sample_sections;

fn stored(value: Value) -> StoredFields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_bare_label_is_suppressed() {
    let sections = sample_sections();
    let fields = stored(json!({ "title": "Matlab", "titles": [] }));
    assert!(is_placeholder(&fields, &sections));
    assert_eq!(
        boost_document("/base/matlab/#matlab", "matlab", &fields, &sections),
        SUPPRESS_WEIGHT
    );
}

#[test]
fn test_label_with_ancestors_is_kept() {
    let sections = sample_sections();
    let fields = stored(json!({ "title": "Matlab", "titles": ["Matlab"] }));
    assert_eq!(
        boost_document("/base/matlab/x#matlab", "matlab", &fields, &sections),
        NEUTRAL_WEIGHT
    );
}

#[test]
fn test_ordinary_root_heading_is_kept() {
    let sections = sample_sections();
    let fields = stored(json!({ "title": "Packages", "titles": [] }));
    assert_eq!(
        boost_document("/base/python/packages#packages", "packages", &fields, &sections),
        NEUTRAL_WEIGHT
    );
}

#[test]
fn test_label_comparison_is_exact() {
    let sections = sample_sections();
    for title in ["matlab", "MATLAB", " Matlab", "Matlab "] {
        let fields = stored(json!({ "title": title, "titles": [] }));
        assert_eq!(
            boost_document("/base/matlab/#x", "matlab", &fields, &sections),
            NEUTRAL_WEIGHT,
            "{title:?}"
        );
    }
}

#[test]
fn test_malformed_fields_fail_open() {
    let sections = sample_sections();
    let cases = [
        json!({}),
        json!({ "title": "Python" }),
        json!({ "titles": [] }),
        json!({ "title": "Python", "titles": null }),
        json!({ "title": "Python", "titles": "" }),
        json!({ "title": "Python", "titles": {} }),
        json!({ "title": 7, "titles": [] }),
        json!({ "title": ["Python"], "titles": [] }),
    ];
    for case in cases {
        let fields = stored(case.clone());
        assert_eq!(
            boost_document("/base/python/#python", "python", &fields, &sections),
            NEUTRAL_WEIGHT,
            "{case}"
        );
    }
}

#[test]
fn test_weight_ignores_id_and_term() {
    let sections = sample_sections();
    let fields = stored(json!({ "title": "C++", "titles": [] }));
    for (id, term) in [("", ""), ("/base/cpp/#c", "c"), ("/anything", "zzz")] {
        assert_eq!(boost_document(id, term, &fields, &sections), SUPPRESS_WEIGHT);
    }
}

#[test]
fn test_hooks_weight_per_strategy() {
    let fields = stored(json!({ "title": "Python", "titles": [] }));
    for strategy in [Disambiguation::Augment, Disambiguation::Inject] {
        let hooks = IndexHooks::for_strategy(strategy, sample_sections());
        assert_eq!(hooks.weight("/base/python/#python", "python", &fields), 0.0);
    }
    let none = IndexHooks::for_strategy(Disambiguation::None, sample_sections());
    assert_eq!(none.weight("/base/python/#python", "python", &fields), 1.0);
}
