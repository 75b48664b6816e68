// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the polydoc command-line interface.
//!
//! Three subcommands: `index` to build an index from a docs tree, `inspect`
//! to summarize an index per language section, and `search` to query one.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "polydoc",
    about = "Section-aware search index builder for multi-language docs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a directory of Markdown pages
    Index {
        /// Docs root containing polydoc.json and *.md pages
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the index file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Summarize an index file
    Inspect {
        /// Path to index-*.json
        file: PathBuf,
    },

    /// Search an index file and display results
    Search {
        /// Path to index-*.json
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the index's search.limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
