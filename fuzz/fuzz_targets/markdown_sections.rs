// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for frontmatter and section splitting.
//!
//! Every record id must start with the page path, and no two records on a
//! page may share an id.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polydoc::markdown::{split_frontmatter, split_sections};
use std::collections::HashSet;

fuzz_target!(|text: &str| {
    let path = "/base/python/page";
    let (frontmatter, body) = split_frontmatter(text);
    let records = split_sections(path, body, frontmatter.title.as_deref());

    let mut seen = HashSet::new();
    for record in &records {
        assert!(record.id.starts_with(path));
        assert!(seen.insert(record.id.as_str()), "duplicate id {}", record.id);
    }
});
