// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section-aware search indexing for multi-language documentation sites.
//!
//! A docs site that documents the same API in several languages ends up with
//! near-identical pages (`/python/packages`, `/cpp/packages`). Plain full-text
//! search returns them as indistinguishable hits. This crate builds a search
//! index whose results carry the language section they came from, and hides
//! the synthetic records that exist only to carry a section label.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  markdown.rs │────▶│   index/     │────▶│   search/    │
//! │ (frontmatter,│     │ (builder,    │     │ (BM25+, OR / │
//! │  sections)   │     │  postings)   │     │  AND, ranks) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                    ▲                    ▲
//!        │ process_content    │ extract_field      │ boost_document
//! ┌─────────────────────────────────────────────────────────┐
//! │                        hooks/                           │
//! │  injector.rs      augmenter.rs        boost.rs          │
//! │  (# C++ heading)  (titles += label)   (weight 0 / 1)    │
//! └─────────────────────────────────────────────────────────┘
//!                           │
//!                    sections.rs (path prefix → label)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use polydoc::build::run_build;
//! use polydoc::index::load_index;
//!
//! let summary = run_build("docs".as_ref(), "dist".as_ref())?;
//! let index = load_index(&summary.index_path)?;
//! for hit in index.search_default("packages")? {
//!     println!("{}  {}", hit.breadcrumb(), hit.id);
//! }
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod hooks;
pub mod index;
pub mod logging;
pub mod markdown;
pub mod scoring;
pub mod search;
pub mod sections;
pub mod testing;
pub mod types;
pub mod utils;

// Re-exports for public API
pub use build::{run_build, BuildSummary};
pub use config::{Combine, Disambiguation, FieldBoosts, SearchOptions, SiteConfig};
pub use error::{Error, Result};
pub use fuzzy::{levenshtein_bounded, levenshtein_within};
pub use hooks::{augment_titles, boost_document, extract_field, inject_heading, IndexHooks};
pub use index::{load_index, DocumentIndex, IndexBuilder};
pub use sections::{LanguageSection, SectionMap};
pub use types::{FieldValue, IndexField, SearchRecord, SearchResult, StoredFields};
pub use utils::{normalize, tokenize};
