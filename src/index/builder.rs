// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental index construction through the `extract_field` hook.
//!
//! Every field of every record goes through the hook exactly once, and the
//! same extracted value is both tokenized and stored. That is what lets the
//! augmented `titles` show up in the breadcrumb as well as match queries.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::SiteConfig;
use crate::hooks::IndexHooks;
use crate::types::{IndexField, SearchRecord, StoredFields};
use crate::utils::tokenize;

use super::{DocumentIndex, FieldLengths, Posting, StoredRecord, INDEX_VERSION};

pub struct IndexBuilder<'h> {
    config: SiteConfig,
    hooks: &'h IndexHooks,
    records: Vec<StoredRecord>,
    terms: BTreeMap<String, Vec<Posting>>,
    totals: FieldLengths,
    seen: HashSet<String>,
}

impl<'h> IndexBuilder<'h> {
    pub fn new(config: SiteConfig, hooks: &'h IndexHooks) -> Self {
        IndexBuilder {
            config,
            hooks,
            records: Vec::new(),
            terms: BTreeMap::new(),
            totals: FieldLengths::default(),
            seen: HashSet::new(),
        }
    }

    /// Index one record. Returns `false` (and skips it) for a duplicate id.
    pub fn add(&mut self, record: &SearchRecord) -> bool {
        if !self.seen.insert(record.id.clone()) {
            tracing::warn!(id = %record.id, "duplicate record id; skipping");
            return false;
        }

        let slot = self.records.len() as u32;
        let mut stored = StoredFields::new();
        let mut lengths = FieldLengths::default();

        for field in IndexField::ALL {
            let value = self.hooks.extract(record, field);
            let tokens = tokenize(&value.to_text());
            let len = tokens.len() as u32;
            lengths.add(field, len);
            self.totals.add(field, len);

            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *counts.entry(token).or_insert(0) += 1;
            }
            for (term, tf) in counts {
                self.terms.entry(term).or_default().push(Posting {
                    record: slot,
                    field,
                    tf,
                });
            }

            if IndexField::STORED.contains(&field) {
                stored.insert(field.name().to_string(), value.into_json());
            }
        }

        self.records.push(StoredRecord {
            id: record.id.clone(),
            stored,
            lengths,
        });
        true
    }

    /// Index records in order; returns how many were added.
    pub fn extend<'r>(&mut self, records: impl IntoIterator<Item = &'r SearchRecord>) -> usize {
        records.into_iter().filter(|r| self.add(r)).count()
    }

    pub fn build(self) -> DocumentIndex {
        // Postings are appended in record order and field order, which keeps
        // every list sorted by (record, field) without a final sort.
        DocumentIndex {
            version: INDEX_VERSION,
            config: self.config,
            records: self.records,
            terms: self.terms,
            totals: self.totals,
        }
    }
}
