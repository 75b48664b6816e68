// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field relevance (BM25+) and match quality come from here. The language
//! disambiguation weight is applied on top by the searcher through the
//! `boost_document` hook, never baked into these functions.

mod core;
pub mod ranking;

pub use self::core::*;
