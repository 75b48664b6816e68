// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `polydoc index`: docs tree in, one JSON index out.
//!
//! 1. Read `polydoc.json`
//! 2. Discover `*.md` pages
//! 3. Load and split pages in parallel (`process_content` runs here)
//! 4. Build the index (`extract_field` runs here)
//! 5. Write `index-<crc32>.json`

pub mod document;
pub mod parallel;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::hooks::IndexHooks;
use crate::index::IndexBuilder;

pub use document::*;
pub use parallel::*;

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub index_path: PathBuf,
    pub pages: usize,
    /// Pages that opted out with `search: false`.
    pub skipped: usize,
    pub records: usize,
    pub terms: usize,
    /// Records the boost filter will always hide.
    pub placeholders: usize,
    pub bytes: usize,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Index filename for serialized bytes: `index-<crc32>.json`.
pub fn index_filename(bytes: &[u8]) -> String {
    format!("index-{:08x}.json", crc32fast::hash(bytes))
}

pub fn run_build(input_dir: &Path, output_dir: &Path) -> Result<BuildSummary> {
    // 1. Config
    let config = SiteConfig::load(input_dir)?;
    let sections = Arc::new(config.section_map()?);
    let hooks = IndexHooks::for_strategy(config.disambiguation, Arc::clone(&sections));

    // 2. Pages
    let pages = discover_pages(input_dir, sections.base(), &config.exclude)?;
    if pages.is_empty() {
        tracing::warn!(input = %input_dir.display(), "no markdown pages found");
    }

    // 3. Load + split
    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();
    #[cfg(feature = "parallel")]
    let load_pb = {
        let pb = multi.add(ProgressBar::new(pages.len() as u64));
        pb.set_style(create_progress_style());
        pb.set_prefix("Loading");
        pb.set_message("pages...");
        pb
    };

    let loaded = load_pages_with_progress(
        &pages,
        &hooks,
        #[cfg(feature = "parallel")]
        &load_pb,
    )?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} pages", loaded.pages));

    // 4. Index
    let mut builder = IndexBuilder::new(config, &hooks);
    let records = builder.extend(&loaded.records);
    let index = builder.build();
    let placeholders = index.placeholder_count()?;

    // 5. Write
    fs::create_dir_all(output_dir).map_err(|e| Error::write(output_dir, e))?;
    let bytes = index.to_json_bytes()?;
    let index_path = output_dir.join(index_filename(&bytes));
    fs::write(&index_path, &bytes).map_err(|e| Error::write(&index_path, e))?;

    let summary = BuildSummary {
        index_path,
        pages: loaded.pages,
        skipped: loaded.skipped,
        records,
        terms: index.term_count(),
        placeholders,
        bytes: bytes.len(),
    };
    tracing::info!(
        pages = summary.pages,
        records = summary.records,
        terms = summary.terms,
        placeholders = summary.placeholders,
        path = %summary.index_path.display(),
        "index written"
    );
    Ok(summary)
}
