// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;

use polydoc::build::run_build;
use polydoc::index::load_index;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    polydoc::logging::init(tracing::Level::INFO);

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Index { input, output } => run_index(&input, &output),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => run_search(&file, &query, limit, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_index(input: &Path, output: &Path) -> polydoc::Result<()> {
    let summary = run_build(input, output)?;
    display::print_build_summary(&summary);
    Ok(())
}

fn run_inspect(file: &Path) -> polydoc::Result<()> {
    let index = load_index(file)?;
    let sections = index.section_summary()?;
    let placeholders = index.placeholder_count()?;
    display::print_inspect(&index, &sections, placeholders);
    Ok(())
}

fn run_search(file: &Path, query: &str, limit: Option<usize>, json: bool) -> polydoc::Result<()> {
    let index = load_index(file)?;
    let hooks = index.hooks()?;
    let mut options = index.config.search;
    if let Some(limit) = limit {
        options.limit = limit;
    }

    let results = index.search(query, &hooks, &options);
    if json {
        let out = serde_json::to_string_pretty(&results)
            .map_err(|e| polydoc::Error::json("results", e))?;
        println!("{}", out);
    } else {
        display::print_results(query, &results);
    }
    Ok(())
}
