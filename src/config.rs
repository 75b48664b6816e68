// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration: `polydoc.json`.
//!
//! Everything except `sections` has a default, so the smallest useful config
//! is just the section list. The config is also embedded in every index file
//! so a query rebuilds exactly the hooks the index was built with.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::sections::{LanguageSection, SectionMap};

/// Name of the config file expected at the root of the docs tree.
pub const CONFIG_FILE: &str = "polydoc.json";

/// Which indexing hook attributes records to their language section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disambiguation {
    /// Prepend the section label to each record's `titles` field.
    #[default]
    Augment,
    /// Rewrite page text with a synthetic top-level heading before splitting.
    Inject,
    /// No disambiguation; pages index as written.
    None,
}

/// How multiple query terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// A record matching any term is a hit; scores add up.
    #[default]
    Or,
    /// A record must match every term.
    And,
}

/// Per-field score multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub title: f64,
    pub text: f64,
    pub titles: f64,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        FieldBoosts {
            title: 4.0,
            text: 2.0,
            titles: 1.0,
        }
    }
}

/// Query-time matching options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Fuzzy edit budget as a fraction of query term length. `0` disables.
    pub fuzzy: f64,
    /// Match indexed terms that start with the query term.
    pub prefix: bool,
    pub combine: Combine,
    pub boost: FieldBoosts,
    /// Result cap used when the caller does not pass one.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fuzzy: 0.2,
            prefix: true,
            combine: Combine::Or,
            boost: FieldBoosts::default(),
            limit: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base")]
    pub base: String,
    pub sections: Vec<LanguageSection>,
    #[serde(default)]
    pub disambiguation: Disambiguation,
    #[serde(default)]
    pub search: SearchOptions,
    /// Path prefixes (relative to the docs root) that are never indexed.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_base() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| Error::json(CONFIG_FILE, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `polydoc.json` from a docs root.
    pub fn load(input_dir: &Path) -> Result<Self> {
        let path = input_dir.join(CONFIG_FILE);
        let content = fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
        let config = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            sections = config.sections.len(),
            disambiguation = ?config.disambiguation,
            "loaded site config"
        );
        Ok(config)
    }

    /// The validated section registry for this site.
    pub fn section_map(&self) -> Result<SectionMap> {
        SectionMap::new(&self.base, self.sections.clone())
    }

    fn validate(&self) -> Result<()> {
        self.section_map()?;
        if !(0.0..=1.0).contains(&self.search.fuzzy) {
            return Err(Error::Config(format!(
                "search.fuzzy must be within 0..=1, got {}",
                self.search.fuzzy
            )));
        }
        let b = self.search.boost;
        if [b.title, b.text, b.titles].iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(Error::Config("field boosts must be non-negative".into()));
        }
        Ok(())
    }
}
