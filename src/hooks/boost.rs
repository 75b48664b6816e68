// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time weight that hides synthetic language placeholders.
//!
//! Injected headings (and some upstream splitters) leave behind records whose
//! title is just `Python` with nothing above it. On their own they are
//! useless hits, so their weight is zero. Anything that does not look exactly
//! like that keeps weight one, including records with malformed stored fields.

use serde_json::Value;

use crate::sections::SectionMap;
use crate::types::StoredFields;

/// Weight for a record with no effect on its score.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Weight that removes a record's contribution entirely.
pub const SUPPRESS_WEIGHT: f64 = 0.0;

/// Multiplier for one (record, term) contribution.
///
/// `0` when stored `titles` is an empty array and stored `title` is exactly a
/// section label; `1` in every other case.
pub fn boost_document(_id: &str, _term: &str, stored: &StoredFields, sections: &SectionMap) -> f64 {
    if is_placeholder(stored, sections) {
        SUPPRESS_WEIGHT
    } else {
        NEUTRAL_WEIGHT
    }
}

/// Does this record look like a bare synthetic language heading?
pub fn is_placeholder(stored: &StoredFields, sections: &SectionMap) -> bool {
    let titles_empty = matches!(stored.get("titles"), Some(Value::Array(items)) if items.is_empty());
    titles_empty
        && stored
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|title| sections.is_label(title))
}
