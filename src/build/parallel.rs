// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel page loading.
//!
//! Reading and splitting pages is embarrassingly parallel: the hooks are pure
//! and shared by reference, so Rayon can fan out over files. The index itself
//! is built afterwards on one thread, over records sorted by id, so the output
//! file is byte-identical no matter how the pages were scheduled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::Result;
use crate::hooks::IndexHooks;
use crate::types::SearchRecord;

use super::{load_page, SourcePage};

/// Records from every page, plus how many pages opted out.
#[derive(Debug, Default)]
pub struct LoadedPages {
    pub records: Vec<SearchRecord>,
    pub pages: usize,
    pub skipped: usize,
}

fn collect(results: Vec<Option<Vec<SearchRecord>>>) -> LoadedPages {
    let mut loaded = LoadedPages::default();
    for result in results {
        match result {
            Some(records) => {
                loaded.pages += 1;
                loaded.records.extend(records);
            }
            None => loaded.skipped += 1,
        }
    }
    loaded.records.sort_by(|a, b| a.id.cmp(&b.id));
    loaded
}

/// Load pages sequentially.
pub fn load_pages(pages: &[SourcePage], hooks: &IndexHooks) -> Result<LoadedPages> {
    let results = pages
        .iter()
        .map(|page| load_page(page, hooks))
        .collect::<Result<Vec<_>>>()?;
    Ok(collect(results))
}

/// Load pages in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_pages_with_progress(
    pages: &[SourcePage],
    hooks: &IndexHooks,
    progress: &ProgressBar,
) -> Result<LoadedPages> {
    let counter = AtomicUsize::new(0);
    let total = pages.len();

    let results = pages
        .par_iter()
        .map(|page| {
            let result = load_page(page, hooks)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(result)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(collect(results))
}

/// Non-parallel fallback (no progress bar).
#[cfg(not(feature = "parallel"))]
pub fn load_pages_with_progress(pages: &[SourcePage], hooks: &IndexHooks) -> Result<LoadedPages> {
    load_pages(pages, hooks)
}
