// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source pages: where they live on disk and which URL path they index under.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::hooks::IndexHooks;
use crate::markdown::{first_heading, split_frontmatter, split_sections};
use crate::types::SearchRecord;

/// A Markdown file found under the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    /// Absolute or input-relative location on disk.
    pub file: PathBuf,
    /// Site path the page is served at, e.g. `/yardl/python/packages`.
    pub path: String,
}

/// Site path for a file relative to the docs root.
///
/// `python/packages.md` → `<base>python/packages`;
/// `python/index.md` → `<base>python/`; `index.md` → `<base>`.
pub fn page_path(base: &str, relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let mut path = base.to_string();
    let Some(last) = segments.pop() else {
        return path;
    };
    let stem = last.strip_suffix(".md").unwrap_or(&last);

    for segment in &segments {
        path.push_str(segment);
        path.push('/');
    }
    if stem != "index" {
        path.push_str(stem);
    }
    path
}

fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || name == "node_modules"
}

/// All `*.md` pages under `input_dir`, in file-name order.
///
/// Dot-directories, `node_modules` and `exclude` prefixes (relative to the
/// docs root) are skipped.
pub fn discover_pages(input_dir: &Path, base: &str, exclude: &[String]) -> Result<Vec<SourcePage>> {
    let mut pages = Vec::new();
    let walker = WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_skipped_dir(&entry.file_name().to_string_lossy())
        });

    for entry in walker {
        let entry = entry.map_err(|e| Error::Walk {
            path: input_dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() || entry.path().extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(input_dir) else {
            continue;
        };
        if exclude.iter().any(|prefix| relative.starts_with(prefix)) {
            tracing::debug!(file = %relative.display(), "excluded by config");
            continue;
        }
        pages.push(SourcePage {
            file: entry.path().to_path_buf(),
            path: page_path(base, relative),
        });
    }

    Ok(pages)
}

/// Read a page and split it into records.
///
/// `Ok(None)` for pages that opt out with `search: false`. The
/// `process_content` hook sees the body with frontmatter already removed.
pub fn load_page(page: &SourcePage, hooks: &IndexHooks) -> Result<Option<Vec<SearchRecord>>> {
    let raw = fs::read_to_string(&page.file).map_err(|e| Error::read(&page.file, e))?;
    let (frontmatter, body) = split_frontmatter(&raw);
    if !frontmatter.search {
        tracing::debug!(path = %page.path, "page opted out of search");
        return Ok(None);
    }

    // Title the preface from the page as written: a process hook may put
    // its own heading first
    let page_title = frontmatter.title.or_else(|| first_heading(body));
    let content = hooks.process(&page.path, body);
    let records = split_sections(&page.path, &content, page_title.as_deref());
    tracing::debug!(path = %page.path, records = records.len(), "split page");
    Ok(Some(records))
}
