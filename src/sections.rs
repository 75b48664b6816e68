// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Language sections: which documentation subtree a path belongs to.
//!
//! A section is a path-prefix segment (`python`, `cpp`) with a display label
//! (`Python`, `C++`). The registry is configuration, not derived from the
//! docs tree, and it is the only place labels live. Both indexing hooks and
//! the query-time filter read it.
//!
//! ```text
//! /yardl/python/packages#install
//! └─base─┘└seg─┘
//!          │
//!          ▼
//!   LanguageSection { prefix: "python", label: "Python" }
//! ```
//!
//! # Invariants
//!
//! - Prefixes are non-empty, slash-free and unique, so at most one section
//!   matches a path.
//! - Matching is on the whole first segment: `/base/pythonic` is not Python.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One documentation subtree dedicated to a language binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSection {
    /// Path segment directly under the base, e.g. `cpp`.
    pub prefix: String,
    /// Display label used as a breadcrumb, e.g. `C++`.
    pub label: String,
}

impl LanguageSection {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        LanguageSection {
            prefix: prefix.into(),
            label: label.into(),
        }
    }
}

/// Validated registry of language sections under a site base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    base: String,
    sections: Vec<LanguageSection>,
}

impl SectionMap {
    /// Build a registry, rejecting prefixes that could match ambiguously.
    pub fn new(base: &str, sections: Vec<LanguageSection>) -> Result<Self> {
        for (i, section) in sections.iter().enumerate() {
            if section.prefix.is_empty() {
                return Err(Error::Config("section prefix must not be empty".into()));
            }
            if section.prefix.contains(['/', '#']) {
                return Err(Error::Config(format!(
                    "section prefix '{}' must be a single path segment",
                    section.prefix
                )));
            }
            if section.label.trim().is_empty() {
                return Err(Error::Config(format!(
                    "section '{}' has an empty label",
                    section.prefix
                )));
            }
            if sections[..i].iter().any(|s| s.prefix == section.prefix) {
                return Err(Error::Config(format!(
                    "duplicate section prefix '{}'",
                    section.prefix
                )));
            }
        }

        Ok(SectionMap {
            base: normalize_base(base),
            sections,
        })
    }

    /// Base path with leading and trailing slash, e.g. `/yardl/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn sections(&self) -> &[LanguageSection] {
        &self.sections
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }

    /// Which section owns this path (or record id), if any.
    ///
    /// Paths outside the base, root-level pages and unknown segments all
    /// resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&LanguageSection> {
        let segment = first_segment(path.strip_prefix(self.base.as_str())?);
        self.sections.iter().find(|s| s.prefix == segment)
    }

    /// Exact comparison against the configured labels.
    pub fn is_label(&self, text: &str) -> bool {
        self.sections.iter().any(|s| s.label == text)
    }
}

fn first_segment(rest: &str) -> &str {
    let end = rest.find(['/', '#']).unwrap_or(rest.len());
    &rest[..end]
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
