// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synthetic language heading, injected into page text before indexing.
//!
//! ```text
//! /base/cpp/packages                     indexed as
//! ┌──────────────────┐                   ┌──────────────────┐
//! │ # Packages       │                   │ # C++            │
//! │ ## Install       │        ──▶        │ ## Packages      │
//! └──────────────────┘                   │ ### Install      │
//!                                        └──────────────────┘
//! ```
//!
//! The section splitter then sees the label as the root heading, so every
//! record on the page carries it in `titles`. Only the indexed text changes;
//! the rendered page never sees this.
//!
//! A heading line is any line starting with `#` outside fenced code. The same
//! test finds the insertion point and drives demotion, so the injected heading
//! is always the only level-1 line. Fenced code is copied verbatim: C++ pages
//! are full of `#include`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::sections::SectionMap;

/// Any line that starts with `#`.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#").expect("static regex"));

/// Insert `# <label>` above the first heading and demote every heading.
///
/// Returns the input untouched when the path has no section or the text has
/// no heading line.
pub fn inject_heading<'a>(text: &'a str, path: &str, sections: &SectionMap) -> Cow<'a, str> {
    let Some(section) = sections.resolve(path) else {
        return Cow::Borrowed(text);
    };

    let chunks = split_fenced(text);
    let Some((first_chunk, first_at)) = chunks
        .iter()
        .enumerate()
        .filter(|(_, chunk)| !chunk.fenced)
        .find_map(|(i, chunk)| HEADING_LINE.find(chunk.text).map(|m| (i, m.start())))
    else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + section.label.len() + 16);
    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.fenced {
            out.push_str(chunk.text);
            continue;
        }
        let rest = if i == first_chunk {
            let (before, rest) = chunk.text.split_at(first_at);
            out.push_str(before);
            out.push_str("# ");
            out.push_str(&section.label);
            out.push('\n');
            rest
        } else {
            chunk.text
        };
        out.push_str(&HEADING_LINE.replace_all(rest, "##"));
    }

    tracing::trace!(path, label = %section.label, "injected language heading");
    Cow::Owned(out)
}

/// A run of whole lines, either inside a code fence or outside all fences.
struct Chunk<'a> {
    text: &'a str,
    fenced: bool,
}

/// Partition text into alternating prose and fenced-code chunks.
///
/// Fence lines themselves belong to the fenced chunk. An unclosed fence runs
/// to the end of the text, as CommonMark does.
fn split_fenced(text: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut fence: Option<(char, usize)> = None;
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match fence {
            None => {
                if let Some((ch, len, info)) = fence_marker(line) {
                    // Backtick fences cannot carry backticks in their info string
                    if ch == '`' && info.contains('`') {
                        continue;
                    }
                    if line_start > start {
                        chunks.push(Chunk {
                            text: &text[start..line_start],
                            fenced: false,
                        });
                    }
                    start = line_start;
                    fence = Some((ch, len));
                }
            }
            Some((ch, len)) => {
                // A closing fence is a bare run: no info string after it
                let closes = fence_marker(line)
                    .is_some_and(|(c, n, rest)| c == ch && n >= len && rest.trim().is_empty());
                if closes {
                    chunks.push(Chunk {
                        text: &text[start..offset],
                        fenced: true,
                    });
                    start = offset;
                    fence = None;
                }
            }
        }
    }

    if start < text.len() {
        chunks.push(Chunk {
            text: &text[start..],
            fenced: fence.is_some(),
        });
    }
    chunks
}

/// ```` ``` ```` or `~~~` (three or more) after at most three spaces.
///
/// Returns the fence character, the run length and the rest of the line.
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then(|| (ch, len, &trimmed[len..]))
}
