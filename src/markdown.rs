// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown pages to search records, one record per heading.
//!
//! ```text
//! # Packages              → { id: page#packages, title: Packages, titles: [] }
//! Intro text.
//! ## Install              → { id: page#install,  title: Install,  titles: [Packages] }
//! ### From source         → { id: page#from-source, titles: [Packages, Install] }
//! ```
//!
//! `titles` holds the enclosing headings only, root first. Text before the
//! first heading becomes a record addressed by the bare page path.
//!
//! Parsing goes through pulldown-cmark, so `#` lines inside code blocks are
//! code, `{#custom-id}` sets the anchor, and inline markup collapses to text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::collections::{HashMap, HashSet};

use crate::types::SearchRecord;
use crate::utils::collapse_whitespace;

/// The handful of frontmatter keys the indexer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
    /// `search: false` keeps a page out of the index.
    pub search: bool,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Frontmatter {
            title: None,
            search: true,
        }
    }
}

/// Split a leading `---` block off the page.
///
/// Only top-level `title:` and `search:` scalars are read; anything else in
/// the block is ignored. A block that never closes is treated as body text.
pub fn split_frontmatter(markdown: &str) -> (Frontmatter, &str) {
    let mut frontmatter = Frontmatter::default();
    let Some(rest) = markdown
        .strip_prefix("---\n")
        .or_else(|| markdown.strip_prefix("---\r\n"))
    else {
        return (frontmatter, markdown);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        let trimmed = line.trim_end();
        if trimmed == "---" {
            return (frontmatter, &rest[offset..]);
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_matches(['"', '\'']);
        match key {
            "title" if !value.is_empty() => frontmatter.title = Some(value.to_string()),
            "search" => frontmatter.search = value != "false",
            _ => {}
        }
    }

    (Frontmatter::default(), markdown)
}

/// GitHub-style anchor slug: lowercase, punctuation dropped, spaces to `-`.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect()
}

/// Hands out unique anchors within one page: `install`, `install-1`, ...
///
/// A generated suffix never collides with a heading that literally reads
/// `install-1`; the counter skips taken anchors.
#[derive(Default)]
struct Slugger {
    next: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl Slugger {
    fn unique(&mut self, base: String) -> String {
        let n = self.next.entry(base.clone()).or_insert(0);
        loop {
            let slug = if *n == 0 {
                base.clone()
            } else {
                format!("{}-{}", base, n)
            };
            *n += 1;
            if self.taken.insert(slug.clone()) {
                return slug;
            }
        }
    }
}

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

struct OpenHeading {
    level: u8,
    custom_id: Option<String>,
    text: String,
}

fn parser_options() -> Options {
    Options::ENABLE_HEADING_ATTRIBUTES | Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Text of the first heading in a body, as `split_sections` would title it.
///
/// Used to title a page's preface before any hook rewrites the body.
pub fn first_heading(body: &str) -> Option<String> {
    let mut heading: Option<String> = None;
    for event in Parser::new_ext(body, parser_options()) {
        match event {
            Event::Start(Tag::Heading { .. }) => heading = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(h) = heading.as_mut() {
                    h.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(h) = heading.as_mut() {
                    h.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                return heading.map(|h| collapse_whitespace(&h));
            }
            _ => {}
        }
    }
    None
}

/// Split a page body (frontmatter already removed) into records.
///
/// `page_title` titles the preface record when the page has text before its
/// first heading; the first heading's text is used when it is `None`.
pub fn split_sections(path: &str, body: &str, page_title: Option<&str>) -> Vec<SearchRecord> {
    let options = parser_options();

    let mut records: Vec<SearchRecord> = Vec::new();
    let mut ancestors: Vec<(u8, String)> = Vec::new();
    let mut slugger = Slugger::default();
    let mut preface = String::new();
    let mut first_heading: Option<String> = None;
    let mut open: Option<OpenHeading> = None;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                open = Some(OpenHeading {
                    level: level_number(level),
                    custom_id: id.map(|id| id.to_string()),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some(heading) = open.take() else { continue };
                let title = collapse_whitespace(&heading.text);

                while ancestors.last().is_some_and(|(lvl, _)| *lvl >= heading.level) {
                    ancestors.pop();
                }
                let titles = ancestors.iter().map(|(_, t)| t.clone()).collect();
                let anchor = slugger.unique(heading.custom_id.unwrap_or_else(|| slugify(&title)));

                first_heading.get_or_insert_with(|| title.clone());
                ancestors.push((heading.level, title.clone()));
                records.push(SearchRecord {
                    id: format!("{}#{}", path, anchor),
                    title,
                    titles,
                    text: String::new(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                let sink = match (&mut open, records.last_mut()) {
                    (Some(heading), _) => &mut heading.text,
                    (None, Some(record)) => &mut record.text,
                    (None, None) => &mut preface,
                };
                sink.push_str(&text);
            }
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(
                TagEnd::Paragraph
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell
                | TagEnd::TableRow
                | TagEnd::TableHead,
            ) => {
                let sink = match (&mut open, records.last_mut()) {
                    (Some(heading), _) => &mut heading.text,
                    (None, Some(record)) => &mut record.text,
                    (None, None) => &mut preface,
                };
                sink.push(' ');
            }
            _ => {}
        }
    }

    for record in &mut records {
        record.text = collapse_whitespace(&record.text);
    }

    let preface = collapse_whitespace(&preface);
    if !preface.is_empty() {
        let title = page_title
            .map(str::to_string)
            .or(first_heading)
            .unwrap_or_else(|| page_stem(path).to_string());
        records.insert(
            0,
            SearchRecord {
                id: path.to_string(),
                title,
                titles: Vec::new(),
                text: preface,
            },
        );
    }

    records
}

/// Last non-empty path segment, used as a title of last resort.
fn page_stem(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path)
}
