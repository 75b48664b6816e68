// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Language label prepended to the `titles` field at extraction time.
//!
//! This replaces heading injection: the page's own heading hierarchy stays
//! intact and the label only appears in extracted metadata. The original root
//! title is still there, one position later, so `Python > Packages > Install`
//! reads as a breadcrumb.

use crate::sections::SectionMap;
use crate::types::{FieldValue, IndexField, SearchRecord};

/// `[label] + titles` for records under a language section, `titles` otherwise.
pub fn augment_titles(id: &str, titles: &[String], sections: &SectionMap) -> Vec<String> {
    match sections.resolve(id) {
        Some(section) => std::iter::once(section.label.clone())
            .chain(titles.iter().cloned())
            .collect(),
        None => titles.to_vec(),
    }
}

/// Field extractor: augments `titles`, passes every other field through.
pub fn extract_field(record: &SearchRecord, field: IndexField, sections: &SectionMap) -> FieldValue {
    match field {
        IndexField::Titles => FieldValue::List(augment_titles(&record.id, &record.titles, sections)),
        other => record.field(other),
    }
}
