// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query term expansion: exact, prefix, fuzzy.
//!
//! Each indexed term is reported once, under its best match kind. Prefix
//! candidates come from a range scan of the sorted vocabulary; fuzzy
//! candidates are everything else within the edit budget.

use std::collections::BTreeMap;

use crate::config::SearchOptions;
use crate::fuzzy::levenshtein_bounded;
use crate::index::Posting;
use crate::scoring::MatchKind;

/// Edit budget for a query term: `round(fuzzy * len)`.
pub fn fuzzy_budget(fuzzy: f64, query_len: usize) -> usize {
    if fuzzy <= 0.0 {
        0
    } else {
        (fuzzy * query_len as f64).round() as usize
    }
}

/// Indexed terms reachable from `query`, with how they were reached.
pub fn expand<'a>(
    query: &str,
    vocabulary: &'a BTreeMap<String, Vec<Posting>>,
    options: &SearchOptions,
) -> Vec<(&'a str, MatchKind)> {
    let mut out: Vec<(&'a str, MatchKind)> = Vec::new();

    if let Some((term, _)) = vocabulary.get_key_value(query) {
        out.push((term.as_str(), MatchKind::Exact));
    }

    if options.prefix {
        out.extend(
            vocabulary
                .range::<str, _>((std::ops::Bound::Excluded(query), std::ops::Bound::Unbounded))
                .take_while(|(term, _)| term.starts_with(query))
                .map(|(term, _)| (term.as_str(), MatchKind::Prefix)),
        );
    }

    let budget = fuzzy_budget(options.fuzzy, query.chars().count());
    if budget > 0 {
        for term in vocabulary.keys() {
            if out.iter().any(|(t, _)| *t == term.as_str()) {
                continue;
            }
            if let Some(distance) = levenshtein_bounded(query, term, budget) {
                out.push((term.as_str(), MatchKind::Fuzzy { distance }));
            }
        }
    }

    out
}
