// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! BM25+ per field, multiplied by a field boost, multiplied by a match-kind
//! weight. Exact matches count fully; prefix and fuzzy matches are discounted
//! by how much of the indexed term the query actually covers.
//!
//! # Constants
//!
//! | Name            | Value | Role                                           |
//! |-----------------|-------|------------------------------------------------|
//! | `BM25_K1`       | 1.2   | Term frequency saturation                      |
//! | `BM25_B`        | 0.7   | Field length normalization strength            |
//! | `BM25_DELTA`    | 0.5   | Floor so long fields never score zero          |
//! | `PREFIX_WEIGHT` | 0.375 | Prefix hits rank below exact hits              |
//! | `FUZZY_WEIGHT`  | 0.45  | Fuzzy hits rank below exact hits               |

/// Term frequency saturation.
pub const BM25_K1: f64 = 1.2;

/// Field length normalization.
pub const BM25_B: f64 = 0.7;

/// BM25+ lower bound on a matching term's contribution.
pub const BM25_DELTA: f64 = 0.5;

/// Weight of a prefix match, before length scaling.
pub const PREFIX_WEIGHT: f64 = 0.375;

/// Weight of a fuzzy match, before distance scaling.
pub const FUZZY_WEIGHT: f64 = 0.45;

/// How a query term reached an indexed term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Prefix,
    Fuzzy { distance: usize },
}

/// Weight of a match, in `(0, 1]`.
///
/// Prefix: `PREFIX_WEIGHT * |query| / |term|`.
/// Fuzzy: `FUZZY_WEIGHT * |query| / (|query| + distance)`.
pub fn match_weight(kind: MatchKind, query_len: usize, term_len: usize) -> f64 {
    match kind {
        MatchKind::Exact => 1.0,
        MatchKind::Prefix => PREFIX_WEIGHT * query_len as f64 / term_len.max(1) as f64,
        MatchKind::Fuzzy { distance } => {
            FUZZY_WEIGHT * query_len as f64 / (query_len + distance).max(1) as f64
        }
    }
}

/// Inverse document frequency, smoothed so it never goes negative.
pub fn idf(total_docs: usize, matching_docs: usize) -> f64 {
    let n = total_docs as f64;
    let df = matching_docs as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// BM25+ score of one term in one field.
pub fn bm25(term_freq: u32, idf: f64, field_len: u32, avg_field_len: f64) -> f64 {
    let tf = f64::from(term_freq);
    let len_ratio = if avg_field_len > 0.0 {
        f64::from(field_len) / avg_field_len
    } else {
        1.0
    };
    idf * (BM25_DELTA + tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * len_ratio)))
}
