//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use polydoc::build::run_build;
use polydoc::index::{load_index, DocumentIndex};
use tempfile::TempDir;

// Re-export canonical test utilities from polydoc::testing
pub use polydoc::testing::{
    make_record, make_record_with_text, sample_config, sample_section_list, sample_sections,
};
use polydoc::SectionMap;

/// Checked-in docs tree used by the build tests.
pub const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

// ============================================================================
// DOCS TREES
// ============================================================================

/// A docs root in a temp directory.
pub struct DocsTree {
    dir: TempDir,
}

impl DocsTree {
    /// Empty tree with no config file.
    pub fn empty() -> Self {
        DocsTree {
            dir: TempDir::new().expect("create temp docs dir"),
        }
    }

    /// Tree with the given `polydoc.json`.
    pub fn with_config(config: &str) -> Self {
        let tree = Self::empty();
        tree.file("polydoc.json", config);
        tree
    }

    /// Write a file relative to the docs root, creating parents.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(&path, content).expect("write fixture file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// `polydoc.json` for a site at `/yardl/` with python, cpp and matlab sections.
pub fn yardl_config(strategy: &str) -> String {
    format!(
        r#"{{
  "base": "/yardl/",
  "disambiguation": "{strategy}",
  "sections": [
    {{ "prefix": "python", "label": "Python" }},
    {{ "prefix": "cpp", "label": "C++" }},
    {{ "prefix": "matlab", "label": "Matlab" }}
  ],
  "exclude": ["drafts"]
}}"#
    )
}

/// The sample sections mounted at `/yardl/`, matching [`yardl_config`].
pub fn yardl_sections() -> Arc<SectionMap> {
    Arc::new(SectionMap::new("/yardl/", sample_section_list()).expect("valid sections"))
}

/// A small three-language site where every section has a `Packages` page.
pub fn yardl_site(strategy: &str) -> DocsTree {
    let tree = DocsTree::with_config(&yardl_config(strategy));
    tree.file(
        "index.md",
        "---\ntitle: Home\n---\nWelcome to yardl, a schema language.\n\n## Getting started\nPick a language below.\n",
    )
    .file(
        "python/packages.md",
        "# Packages\nPython packages are built with pip.\n## Install\nRun pip install in the project.\n",
    )
    .file(
        "cpp/packages.md",
        "# Packages\nC++ packages are built with CMake.\n## Install\nRun cmake to install.\n\n```cpp\n#include <yardl/yardl.h>\n```\n",
    )
    .file(
        "matlab/packages.md",
        "# Packages\nMatlab packages are toolboxes.\n",
    )
    .file(
        "python/internal.md",
        "---\nsearch: false\n---\n# Internal\nSecret maintainer notes.\n",
    )
    .file("drafts/wip.md", "# Packages\nUnfinished draft.\n")
    .file("node_modules/pkg/readme.md", "# Packages\nVendored readme.\n");
    tree
}

/// Build `tree` into a fresh output dir and load the index back.
pub fn build(tree: &DocsTree) -> (TempDir, PathBuf, DocumentIndex) {
    let out = TempDir::new().expect("create temp output dir");
    let summary = run_build(tree.path(), out.path()).expect("build should succeed");
    let index = load_index(&summary.index_path).expect("index should load");
    (out, summary.index_path, index)
}

/// Ids of all indexed records.
pub fn record_ids(index: &DocumentIndex) -> Vec<&str> {
    index.records.iter().map(|r| r.id.as_str()).collect()
}
