// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The flat document index: postings plus stored fields.
//!
//! One index holds every language section. Nothing in the structure knows
//! about sections; attribution lives entirely in what the hooks wrote into
//! `titles` and in the boost applied at query time.
//!
//! # Layout
//!
//! ```text
//! DocumentIndex
//! ├── version          format version, checked on load
//! ├── config           SiteConfig used at build time (rebuilds the hooks)
//! ├── records[i]       id, stored {title, titles}, per-field token counts
//! ├── terms            term → [(record i, field, tf)], vocabulary sorted
//! └── totals           per-field token totals for BM25 averages
//! ```
//!
//! # Invariants
//!
//! - Every posting's `record` indexes into `records`.
//! - Each posting list is sorted by (record, field) and non-empty.
//! - Record ids are unique.

mod builder;

pub use builder::IndexBuilder;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::hooks::{is_placeholder, IndexHooks};
use crate::types::{IndexField, StoredFields};

/// Current on-disk format version.
pub const INDEX_VERSION: u32 = 1;

/// Token counts per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLengths {
    pub title: u32,
    pub titles: u32,
    pub text: u32,
}

impl FieldLengths {
    pub fn get(&self, field: IndexField) -> u32 {
        match field {
            IndexField::Title => self.title,
            IndexField::Titles => self.titles,
            IndexField::Text => self.text,
        }
    }

    pub(crate) fn add(&mut self, field: IndexField, n: u32) {
        let slot = match field {
            IndexField::Title => &mut self.title,
            IndexField::Titles => &mut self.titles,
            IndexField::Text => &mut self.text,
        };
        *slot = slot.saturating_add(n);
    }
}

/// A record as persisted: id, stored fields, field lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub stored: StoredFields,
    pub lengths: FieldLengths,
}

/// One occurrence summary of a term in a record's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub record: u32,
    pub field: IndexField,
    pub tf: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentIndex {
    pub version: u32,
    pub config: SiteConfig,
    pub records: Vec<StoredRecord>,
    pub terms: BTreeMap<String, Vec<Posting>>,
    pub totals: FieldLengths,
}

/// Per-section record counts for `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    /// Section label, or `None` for records outside every section.
    pub label: Option<String>,
    pub records: usize,
    pub pages: usize,
}

impl DocumentIndex {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Mean token count of a field across records.
    pub fn average_length(&self, field: IndexField) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            f64::from(self.totals.get(field)) / self.records.len() as f64
        }
    }

    /// Rebuild the hooks this index was built with.
    pub fn hooks(&self) -> Result<IndexHooks> {
        let sections = Arc::new(self.config.section_map()?);
        Ok(IndexHooks::for_strategy(self.config.disambiguation, sections))
    }

    /// Records that the boost filter will always suppress.
    pub fn placeholder_count(&self) -> Result<usize> {
        let sections = self.config.section_map()?;
        Ok(self
            .records
            .iter()
            .filter(|r| is_placeholder(&r.stored, &sections))
            .count())
    }

    /// Record and page counts grouped by language section, config order,
    /// unsectioned last.
    pub fn section_summary(&self) -> Result<Vec<SectionSummary>> {
        let sections = self.config.section_map()?;
        let mut buckets: BTreeMap<Option<usize>, (usize, std::collections::BTreeSet<&str>)> =
            BTreeMap::new();
        for record in &self.records {
            let slot = sections
                .resolve(&record.id)
                .and_then(|s| sections.sections().iter().position(|x| x == s));
            let page = record.id.split_once('#').map_or(record.id.as_str(), |(p, _)| p);
            let entry = buckets.entry(slot).or_default();
            entry.0 += 1;
            entry.1.insert(page);
        }

        let mut summary: Vec<SectionSummary> = sections
            .sections()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (records, pages) = buckets
                    .get(&Some(i))
                    .map_or((0, 0), |(r, p)| (*r, p.len()));
                SectionSummary {
                    label: Some(s.label.clone()),
                    records,
                    pages,
                }
            })
            .collect();
        if let Some((records, pages)) = buckets.get(&None) {
            summary.push(SectionSummary {
                label: None,
                records: *records,
                pages: pages.len(),
            });
        }
        Ok(summary)
    }

    /// Serialize to the JSON file format.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::json("index", e))
    }

    /// Parse an index, rejecting other format versions.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let index: DocumentIndex =
            serde_json::from_slice(bytes).map_err(|e| Error::json("index", e))?;
        if index.version != INDEX_VERSION {
            return Err(Error::Version {
                found: index.version,
                expected: INDEX_VERSION,
            });
        }
        Ok(index)
    }
}

/// Read an index file written by `run_build`.
pub fn load_index(path: &Path) -> Result<DocumentIndex> {
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    DocumentIndex::from_slice(&bytes)
}
