// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::sections::{LanguageSection, SectionMap};
use crate::types::SearchRecord;

/// The three language sections the sample site documents.
pub fn sample_section_list() -> Vec<LanguageSection> {
    vec![
        LanguageSection::new("python", "Python"),
        LanguageSection::new("cpp", "C++"),
        LanguageSection::new("matlab", "Matlab"),
    ]
}

/// Sample site config: base `/base/`, default search options.
pub fn sample_config() -> SiteConfig {
    SiteConfig {
        base: "/base/".to_string(),
        sections: sample_section_list(),
        disambiguation: Default::default(),
        search: Default::default(),
        exclude: Vec::new(),
    }
}

pub fn sample_sections() -> Arc<SectionMap> {
    Arc::new(
        SectionMap::new("/base/", sample_section_list()).expect("sample sections are valid"),
    )
}

/// Record with empty body text.
pub fn make_record(id: &str, title: &str, titles: &[&str]) -> SearchRecord {
    SearchRecord {
        id: id.to_string(),
        title: title.to_string(),
        titles: titles.iter().map(|t| t.to_string()).collect(),
        text: String::new(),
    }
}

/// Record with body text.
pub fn make_record_with_text(id: &str, title: &str, titles: &[&str], text: &str) -> SearchRecord {
    SearchRecord {
        text: text.to_string(),
        ..make_record(id, title, titles)
    }
}
