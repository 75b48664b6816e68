// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation against a [`DocumentIndex`].
//!
//! ```text
//! "pyth packages"
//!   │ tokenize
//!   ▼
//! [pyth, packages] ──expand──▶ indexed terms (exact / prefix / fuzzy)
//!   │                              │ BM25+ × field boost × match weight
//!   ▼                              ▼
//! per query term: record → contribution
//!   │ × boost_document(id, term, stored)   weight 0 drops the contribution
//!   ▼
//! combine (OR: union, AND: intersection) ──▶ sort ──▶ truncate
//! ```
//!
//! The hook runs once per (query term, record), never per posting.

mod terms;

pub use terms::{expand, fuzzy_budget};

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::config::{Combine, FieldBoosts, SearchOptions};
use crate::hooks::IndexHooks;
use crate::index::DocumentIndex;
use crate::scoring::ranking::compare_results;
use crate::scoring::{bm25, idf, match_weight};
use crate::types::{IndexField, SearchResult};
use crate::utils::tokenize;

/// Accumulated contribution of one query term to one record.
#[derive(Debug, Default, Clone)]
struct Hit {
    score: f64,
    terms: BTreeSet<String>,
    fields: BTreeSet<IndexField>,
}

impl Hit {
    fn merge(&mut self, other: Hit) {
        self.score += other.score;
        self.terms.extend(other.terms);
        self.fields.extend(other.fields);
    }
}

fn field_boost(boosts: &FieldBoosts, field: IndexField) -> f64 {
    match field {
        IndexField::Title => boosts.title,
        IndexField::Titles => boosts.titles,
        IndexField::Text => boosts.text,
    }
}

impl DocumentIndex {
    /// Search with this index's own config and hooks.
    pub fn search_default(&self, query: &str) -> crate::Result<Vec<SearchResult>> {
        let hooks = self.hooks()?;
        Ok(self.search(query, &hooks, &self.config.search))
    }

    /// Ranked results for `query`, at most `options.limit` of them.
    pub fn search(&self, query: &str, hooks: &IndexHooks, options: &SearchOptions) -> Vec<SearchResult> {
        let mut query_terms = tokenize(query);
        let mut seen = BTreeSet::new();
        query_terms.retain(|t| seen.insert(t.clone()));
        if query_terms.is_empty() || self.is_empty() {
            return Vec::new();
        }

        let mut combined: Option<HashMap<u32, Hit>> = None;
        for query_term in &query_terms {
            let hits = self.term_hits(query_term, hooks, options);
            combined = Some(match (combined, options.combine) {
                (None, _) => hits,
                (Some(mut acc), Combine::Or) => {
                    for (record, hit) in hits {
                        acc.entry(record).or_default().merge(hit);
                    }
                    acc
                }
                (Some(mut acc), Combine::And) => {
                    let mut hits = hits;
                    acc.retain(|record, _| hits.contains_key(record));
                    for (record, hit) in acc.iter_mut() {
                        if let Some(other) = hits.remove(record) {
                            hit.merge(other);
                        }
                    }
                    acc
                }
            });
        }

        let mut results: Vec<SearchResult> = combined
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, hit)| hit.score > 0.0)
            .map(|(record, hit)| self.to_result(record, hit))
            .collect();
        results.sort_by(compare_results);
        results.truncate(options.limit);

        tracing::debug!(query, results = results.len(), "search complete");
        results
    }

    /// Weighted contributions of a single query term, keyed by record.
    fn term_hits(&self, query_term: &str, hooks: &IndexHooks, options: &SearchOptions) -> HashMap<u32, Hit> {
        let total = self.records.len();
        let query_len = query_term.chars().count();
        let mut hits: HashMap<u32, Hit> = HashMap::new();

        for (term, kind) in expand(query_term, &self.terms, options) {
            let Some(postings) = self.terms.get(term) else { continue };
            let weight = match_weight(kind, query_len, term.chars().count());
            let matching: BTreeSet<u32> = postings.iter().map(|p| p.record).collect();
            let term_idf = idf(total, matching.len());

            for posting in postings {
                let Some(record) = self.records.get(posting.record as usize) else { continue };
                let boost = field_boost(&options.boost, posting.field);
                let score = bm25(
                    posting.tf,
                    term_idf,
                    record.lengths.get(posting.field),
                    self.average_length(posting.field),
                ) * boost
                    * weight;

                let hit = hits.entry(posting.record).or_default();
                hit.score += score;
                hit.terms.insert(term.to_string());
                hit.fields.insert(posting.field);
            }
        }

        hits.retain(|record, hit| {
            let Some(stored) = self.records.get(*record as usize) else { return false };
            let w = hooks.weight(&stored.id, query_term, &stored.stored);
            if w == 0.0 {
                tracing::trace!(id = %stored.id, term = query_term, "contribution suppressed");
                return false;
            }
            hit.score *= w;
            true
        });
        hits
    }

    fn to_result(&self, record: u32, hit: Hit) -> SearchResult {
        let stored = &self.records[record as usize];
        let title = stored
            .stored
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let titles = match stored.stored.get("titles") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        SearchResult {
            id: stored.id.clone(),
            score: hit.score,
            title,
            titles,
            terms: hit.terms.into_iter().collect(),
            matched_fields: hit.fields.into_iter().collect(),
        }
    }
}
