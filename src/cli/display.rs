// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the polydoc CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and plain output when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `POLYDOC_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use polydoc::build::BuildSummary;
use polydoc::index::{DocumentIndex, SectionSummary};
use polydoc::SearchResult;

// Box drawing width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("POLYDOC_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(MAGENTA);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Language label badge; records outside every section show as `[root]`.
pub fn section_badge(label: Option<&str>) -> String {
    match label {
        Some(label) => themed(MAGENTA, &[BOLD], &format!("[{}]", label)),
        None => themed(GRAY, &[], "[root]"),
    }
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.2}", score);
    let color = if score >= 20.0 {
        GREEN
    } else if score >= 5.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_build_summary(summary: &BuildSummary) {
    section_top("BUILD");
    row(&format!(" Index       {}", summary.index_path.display()));
    row(&format!(" Pages       {} ({} opted out)", summary.pages, summary.skipped));
    row(&format!(" Records     {}", summary.records));
    row(&format!(" Terms       {}", summary.terms));
    row(&format!(" Placeholders {}", summary.placeholders));
    row(&format!(" Size        {}", format_size(summary.bytes)));
    section_bot();
}

pub fn print_inspect(index: &DocumentIndex, sections: &[SectionSummary], placeholders: usize) {
    section_top("INDEX");
    row(&format!(" Version      {}", index.version));
    row(&format!(" Base         {}", index.config.base));
    row(&format!(" Strategy     {:?}", index.config.disambiguation));
    row(&format!(" Records      {}", index.len()));
    row(&format!(" Terms        {}", index.term_count()));
    let hidden = if placeholders == 0 {
        themed(GREEN, &[], "0")
    } else {
        themed(YELLOW, &[], &placeholders.to_string())
    };
    row(&format!(" Placeholders {} (suppressed at query time)", hidden));

    section_mid("SECTIONS");
    for section in sections {
        row(&format!(
            " {} {:>6} records {:>5} pages",
            pad_right(&section_badge(section.label.as_deref()), 12),
            section.records,
            section.pages
        ));
    }
    section_bot();
}

pub fn print_results(query: &str, results: &[SearchResult]) {
    section_top(&format!("SEARCH \"{}\"", query));
    if results.is_empty() {
        row(&format!(" {}", themed(RED, &[], "no results")));
    }
    for (rank, result) in results.iter().enumerate() {
        row(&format!(
            " {:>2}. {} {}",
            rank + 1,
            score_value(result.score),
            themed(CYAN, &[BOLD], &result.breadcrumb())
        ));
        row(&format!("          {}", themed(GRAY, &[], &result.id)));
    }
    section_bot();
}
