// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for heading injection.
//!
//! Arbitrary page text must never panic the injector, and whatever it returns
//! must still split into records that all sit under the section label.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polydoc::hooks::inject_heading;
use polydoc::markdown::split_sections;
use polydoc::testing::sample_sections;

#[derive(Debug, Arbitrary)]
struct PageInput {
    /// 0..3 picks a section, anything else is an unsectioned path.
    section: u8,
    text: String,
}

fuzz_target!(|input: PageInput| {
    let sections = sample_sections();
    let (path, label) = match input.section % 4 {
        0 => ("/base/python/page", Some("Python")),
        1 => ("/base/cpp/page", Some("C++")),
        2 => ("/base/matlab/page", Some("Matlab")),
        _ => ("/base/guide/page", None),
    };

    let out = inject_heading(&input.text, path, &sections);
    let Some(label) = label else {
        assert_eq!(out, input.text.as_str());
        return;
    };
    if out == input.text.as_str() {
        return;
    }

    // One more line than before: the injected heading
    assert_eq!(
        out.matches('\n').count(),
        input.text.matches('\n').count() + 1
    );
    assert!(out.lines().any(|l| l == format!("# {}", label)));
    let _ = split_sections(path, &out, None);
});
