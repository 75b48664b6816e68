// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A page is split into records, one per heading. Each record has three
//! searchable fields and two of them are stored for display:
//!
//! | Field    | Indexed | Stored | Example                          |
//! |----------|---------|--------|----------------------------------|
//! | `title`  | yes     | yes    | `"Install"`                      |
//! | `titles` | yes     | yes    | `["Python", "Packages"]`         |
//! | `text`   | yes     | no     | `"Run pip install ..."`          |
//!
//! Stored fields are kept as loose JSON on purpose: a query-time hook has to
//! cope with records written by other tools, or with fields that are missing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One searchable unit: the content under a single heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Page path plus optional `#anchor`, e.g. `/yardl/python/packages#install`.
    pub id: String,
    /// The heading this record sits under.
    pub title: String,
    /// Enclosing headings, root first. Empty for top-level headings.
    pub titles: Vec<String>,
    /// Plain text of the section body.
    pub text: String,
}

impl SearchRecord {
    /// The record's own value for a field, before any hook runs.
    pub fn field(&self, field: IndexField) -> FieldValue {
        match field {
            IndexField::Title => FieldValue::Text(self.title.clone()),
            IndexField::Titles => FieldValue::List(self.titles.clone()),
            IndexField::Text => FieldValue::Text(self.text.clone()),
        }
    }

    /// Page path without the anchor.
    pub fn page(&self) -> &str {
        self.id.split_once('#').map_or(self.id.as_str(), |(page, _)| page)
    }
}

/// Fields the index knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexField {
    Title,
    Titles,
    Text,
}

impl IndexField {
    pub const ALL: [IndexField; 3] = [IndexField::Title, IndexField::Titles, IndexField::Text];

    /// Fields persisted alongside the postings.
    pub const STORED: [IndexField; 2] = [IndexField::Title, IndexField::Titles];

    pub fn name(self) -> &'static str {
        match self {
            IndexField::Title => "title",
            IndexField::Titles => "titles",
            IndexField::Text => "text",
        }
    }
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An extracted field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Flatten to a single string for tokenizing.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(" "),
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        match self {
            FieldValue::Text(text) => serde_json::Value::String(text),
            FieldValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::String).collect())
            }
        }
    }
}

/// Stored fields of a record as the query-time hook sees them.
pub type StoredFields = serde_json::Map<String, serde_json::Value>;

/// A ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    /// Stored `title`, empty if the stored value is missing or not a string.
    pub title: String,
    /// Stored `titles`, breadcrumb order.
    pub titles: Vec<String>,
    /// Indexed terms that matched, sorted.
    pub terms: Vec<String>,
    /// Fields in which any term matched.
    pub matched_fields: Vec<IndexField>,
}

impl SearchResult {
    /// `Python > Packages > Install` style breadcrumb.
    pub fn breadcrumb(&self) -> String {
        self.titles
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.title.as_str()))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
