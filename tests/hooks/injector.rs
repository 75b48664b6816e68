//! Heading injection tests.

use std::borrow::Cow;

use polydoc::hooks::inject_heading;
use polydoc::markdown::split_sections;
use polydoc::{Disambiguation, IndexHooks};

use crate::common::sample_sections;

#[test]
fn test_injects_label_and_demotes_headings() {
    let sections = sample_sections();
    let out = inject_heading("# Packages\n## Install\n", "/base/cpp/packages", &sections);
    assert_eq!(out, "# C++\n## Packages\n### Install\n");
}

#[test]
fn test_text_before_first_heading_stays_above_label() {
    let sections = sample_sections();
    let out = inject_heading("Intro line.\n# Packages\n", "/base/python/packages", &sections);
    assert_eq!(out, "Intro line.\n# Python\n## Packages\n");
}

#[test]
fn test_unsectioned_path_is_untouched() {
    let sections = sample_sections();
    let text = "# Overview\n## Details\n";
    for path in ["/base/", "/base/guide/overview", "/other/python/packages"] {
        let out = inject_heading(text, path, &sections);
        assert!(matches!(out, Cow::Borrowed(_)), "{path} should not be rewritten");
        assert_eq!(out, text);
    }
}

#[test]
fn test_page_without_headings_is_untouched() {
    let sections = sample_sections();
    let text = "Plain paragraph.\nAnother line.\n";
    assert_eq!(inject_heading(text, "/base/matlab/intro", &sections), text);
}

#[test]
fn test_fenced_code_is_copied_verbatim() {
    let sections = sample_sections();
    let text = "# Build\n```cpp\n#include <yardl/yardl.h>\n```\n## Run\n~~~\n# not a heading\n~~~\n";
    let out = inject_heading(text, "/base/cpp/build", &sections);
    assert_eq!(
        out,
        "# C++\n## Build\n```cpp\n#include <yardl/yardl.h>\n```\n### Run\n~~~\n# not a heading\n~~~\n"
    );
}

#[test]
fn test_heading_only_inside_fence_is_not_a_heading() {
    let sections = sample_sections();
    let text = "```\n# comment\n```\n";
    assert_eq!(inject_heading(text, "/base/python/x", &sections), text);
}

#[test]
fn test_injected_records_carry_label_in_titles() {
    let hooks = IndexHooks::for_strategy(Disambiguation::Inject, sample_sections());
    let body = hooks.process("/base/python/packages", "# Packages\nIntro.\n## Install\nSteps.\n");
    let records = split_sections("/base/python/packages", &body, None);

    let titles: Vec<(&str, Vec<&str>)> = records
        .iter()
        .map(|r| (r.title.as_str(), r.titles.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        titles,
        vec![
            ("Python", vec![]),
            ("Packages", vec!["Python"]),
            ("Install", vec!["Python", "Packages"]),
        ]
    );
}
