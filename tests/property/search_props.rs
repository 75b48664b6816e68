//! Search-level properties over randomly generated indexes.

use polydoc::index::IndexBuilder;
use polydoc::markdown::{first_heading, split_sections};
use polydoc::{tokenize, Disambiguation, IndexHooks, SearchRecord};
use proptest::prelude::*;

use crate::common::{make_record_with_text, sample_config, sample_sections};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").unwrap()
}

/// Records spread over the three sections plus the site root, with one
/// bare-label placeholder per section.
fn records_strategy() -> impl Strategy<Value = Vec<SearchRecord>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["python/", "cpp/", "matlab/", ""]),
            word_strategy(),
            prop::collection::vec(word_strategy(), 0..3),
            prop::collection::vec(word_strategy(), 0..8),
        ),
        1..12,
    )
    .prop_map(|rows| {
        let mut records: Vec<SearchRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (section, title, titles, text))| {
                let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
                make_record_with_text(
                    &format!("/base/{}p{}#{}", section, i, title),
                    &title,
                    &titles,
                    &text.join(" "),
                )
            })
            .collect();
        for (prefix, label) in [("python", "Python"), ("cpp", "C++"), ("matlab", "Matlab")] {
            records.push(make_record_with_text(
                &format!("/base/{}/#{}", prefix, prefix),
                label,
                &[],
                "python cpp matlab",
            ));
        }
        records
    })
}

const VOCAB: &[&str] = &["alpha", "beta", "gamma", "delta", "python", "setup", "stream"];

fn vocab_words(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VOCAB), len)
}

/// A markdown page: optional intro prose, then headings with prose under them.
fn page_strategy() -> impl Strategy<Value = String> {
    (
        vocab_words(0..4),
        prop::collection::vec((1usize..=4, vocab_words(1..3), vocab_words(0..5)), 0..5),
    )
        .prop_map(|(intro, sections)| {
            let mut page = String::new();
            if !intro.is_empty() {
                page.push_str(&intro.join(" "));
                page.push_str("\n\n");
            }
            for (level, heading, body) in sections {
                page.push_str(&format!("{} {}\n", "#".repeat(level), heading.join(" ")));
                if !body.is_empty() {
                    page.push_str(&format!("{}\n\n", body.join(" ")));
                }
            }
            page
        })
}

/// Records for `pages` the way the build step makes them under injection.
fn inject_and_split(pages: &[(&str, String)], hooks: &IndexHooks) -> Vec<SearchRecord> {
    pages
        .iter()
        .enumerate()
        .flat_map(|(i, (section, page))| {
            let path = format!("/base/{}p{}", section, i);
            let page_title = first_heading(page);
            let content = hooks.process(&path, page);
            split_sections(&path, &content, page_title.as_deref())
        })
        .collect()
}

fn is_label_only(record: &SearchRecord) -> bool {
    record.titles.is_empty() && ["Python", "C++", "Matlab"].contains(&record.title.as_str())
}

fn mentions(record: &SearchRecord, word: &str) -> bool {
    let titles = record.titles.join(" ");
    [record.title.as_str(), titles.as_str(), record.text.as_str()]
        .iter()
        .any(|field| tokenize(field).iter().any(|t| t.as_str() == word))
}

proptest! {
    /// No query ever returns a record the boost filter suppresses.
    #[test]
    fn prop_placeholders_never_surface(
        records in records_strategy(),
        query in prop::collection::vec(
            prop_oneof![word_strategy(), Just("python".to_string()), Just("matlab".to_string())],
            1..3,
        ),
    ) {
        let hooks = IndexHooks::for_strategy(Disambiguation::Inject, sample_sections());
        let mut builder = IndexBuilder::new(sample_config(), &hooks);
        builder.extend(&records);
        let index = builder.build();

        let results = index.search(&query.join(" "), &hooks, &index.config.search);
        for result in &results {
            prop_assert!(
                !(result.titles.is_empty() && ["Python", "C++", "Matlab"].contains(&result.title.as_str())),
                "placeholder {} surfaced", result.id
            );
        }
    }

    /// Results are sorted, positive, and within the limit.
    #[test]
    fn prop_results_sorted_and_bounded(records in records_strategy(), query in word_strategy()) {
        let hooks = IndexHooks::for_strategy(Disambiguation::Augment, sample_sections());
        let mut builder = IndexBuilder::new(sample_config(), &hooks);
        builder.extend(&records);
        let index = builder.build();

        let results = index.search(&query, &hooks, &index.config.search);
        prop_assert!(results.len() <= index.config.search.limit);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        prop_assert!(results.iter().all(|r| r.score > 0.0));
    }

    /// Injected pages lose no text: every real record holding the query word
    /// is found.
    #[test]
    fn prop_injected_pages_stay_searchable(
        pages in prop::collection::vec(
            (prop::sample::select(vec!["python/", "cpp/", "matlab/", ""]), page_strategy()),
            1..6,
        ),
        word in prop::sample::select(VOCAB),
    ) {
        let hooks = IndexHooks::for_strategy(Disambiguation::Inject, sample_sections());
        let records = inject_and_split(&pages, &hooks);
        let mut builder = IndexBuilder::new(sample_config(), &hooks);
        builder.extend(&records);
        let index = builder.build();

        let mut options = index.config.search;
        options.limit = usize::MAX;
        let results = index.search(word, &hooks, &options);
        for record in records.iter().filter(|r| !is_label_only(r) && mentions(r, word)) {
            prop_assert!(
                results.iter().any(|r| r.id == record.id),
                "{} holds {:?} but was not returned", record.id, word
            );
        }
    }
}
