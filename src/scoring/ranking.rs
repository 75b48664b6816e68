// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Title** - alphabetical tiebreaker for determinism
/// 3. **Id** - final tiebreaker when everything else is equal
///
/// Identically titled pages under different language sections tie on the
/// first two keys, so the id keeps their order stable across rebuilds.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)),
    }
}
