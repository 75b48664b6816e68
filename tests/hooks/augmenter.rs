//! Title augmentation tests.

use polydoc::hooks::{augment_titles, extract_field};
use polydoc::{Disambiguation, FieldValue, IndexField, IndexHooks};

use crate::common::{make_record_with_text, sample_sections};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_label_is_prepended() {
    let sections = sample_sections();
    let titles = augment_titles(
        "/base/python/packages#install",
        &strings(&["Packages"]),
        &sections,
    );
    assert_eq!(titles, strings(&["Python", "Packages"]));
}

#[test]
fn test_empty_titles_become_label() {
    let sections = sample_sections();
    let titles = augment_titles("/base/matlab/packages#packages", &[], &sections);
    assert_eq!(titles, strings(&["Matlab"]));
}

#[test]
fn test_unsectioned_ids_pass_through() {
    let sections = sample_sections();
    let original = strings(&["Guide"]);
    for id in ["/base/#intro", "/base/guide#setup", "/elsewhere/python/x#y"] {
        assert_eq!(augment_titles(id, &original, &sections), original, "{id}");
    }
}

#[test]
fn test_prefix_must_match_whole_segment() {
    let sections = sample_sections();
    let titles = augment_titles("/base/pythonic/tips#intro", &strings(&["Tips"]), &sections);
    assert_eq!(titles, strings(&["Tips"]));
}

#[test]
fn test_only_titles_field_changes() {
    let sections = sample_sections();
    let record = make_record_with_text(
        "/base/cpp/packages#install",
        "Install",
        &["Packages"],
        "Run cmake.",
    );
    assert_eq!(
        extract_field(&record, IndexField::Title, &sections),
        FieldValue::Text("Install".into())
    );
    assert_eq!(
        extract_field(&record, IndexField::Text, &sections),
        FieldValue::Text("Run cmake.".into())
    );
    assert_eq!(
        extract_field(&record, IndexField::Titles, &sections),
        FieldValue::List(strings(&["C++", "Packages"]))
    );
}

#[test]
fn test_hooks_extract_by_strategy() {
    let record = make_record_with_text("/base/python/packages#install", "Install", &["Packages"], "");
    let augment = IndexHooks::for_strategy(Disambiguation::Augment, sample_sections());
    let inject = IndexHooks::for_strategy(Disambiguation::Inject, sample_sections());

    assert_eq!(
        augment.extract(&record, IndexField::Titles),
        FieldValue::List(strings(&["Python", "Packages"]))
    );
    assert_eq!(
        inject.extract(&record, IndexField::Titles),
        FieldValue::List(strings(&["Packages"]))
    );
}
