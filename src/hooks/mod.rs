// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extension points into index building and scoring.
//!
//! Three hooks, each an optional closure. The index calls them; it does not
//! know what they do.
//!
//! | Hook               | When                 | Disambiguation use        |
//! |--------------------|----------------------|---------------------------|
//! | `process_content`  | before page split    | heading injection         |
//! | `extract_field`    | per record, per field| `titles` augmentation     |
//! | `boost_document`   | per (term, record)   | placeholder suppression   |
//!
//! Injection and augmentation solve the same problem and never run together.
//! All hooks are pure functions of their inputs, so they can be called in any
//! order, repeatedly, from any thread.

mod augmenter;
mod boost;
mod injector;

pub use augmenter::{augment_titles, extract_field};
pub use boost::{boost_document, is_placeholder, NEUTRAL_WEIGHT, SUPPRESS_WEIGHT};
pub use injector::inject_heading;

use std::fmt;
use std::sync::Arc;

use crate::config::Disambiguation;
use crate::sections::SectionMap;
use crate::types::{FieldValue, IndexField, SearchRecord, StoredFields};

/// `(path, raw markdown) -> text to index`
pub type ProcessContentFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// `(record, field) -> value to index and store`
pub type ExtractFieldFn = dyn Fn(&SearchRecord, IndexField) -> FieldValue + Send + Sync;

/// `(record id, query term, stored fields) -> score multiplier`
pub type BoostDocumentFn = dyn Fn(&str, &str, &StoredFields) -> f64 + Send + Sync;

/// Hook set handed to the builder and the searcher.
#[derive(Default)]
pub struct IndexHooks {
    pub process_content: Option<Box<ProcessContentFn>>,
    pub extract_field: Option<Box<ExtractFieldFn>>,
    pub boost_document: Option<Box<BoostDocumentFn>>,
}

impl IndexHooks {
    /// No hooks: pages index as written, every weight is one.
    pub fn none() -> Self {
        Self::default()
    }

    /// Wire the hooks for a disambiguation strategy.
    ///
    /// The boost filter is on for both strategies; with augmentation it rarely
    /// fires, but pages whose own top heading is a bare label still exist.
    pub fn for_strategy(strategy: Disambiguation, sections: Arc<SectionMap>) -> Self {
        let mut hooks = IndexHooks::none();
        match strategy {
            Disambiguation::None => return hooks,
            Disambiguation::Inject => {
                let map = Arc::clone(&sections);
                hooks.process_content = Some(Box::new(move |path: &str, raw: &str| {
                    inject_heading(raw, path, &map).into_owned()
                }));
            }
            Disambiguation::Augment => {
                let map = Arc::clone(&sections);
                hooks.extract_field = Some(Box::new(move |record: &SearchRecord, field: IndexField| {
                    extract_field(record, field, &map)
                }));
            }
        }
        hooks.boost_document = Some(Box::new(move |id: &str, term: &str, stored: &StoredFields| {
            boost_document(id, term, stored, &sections)
        }));
        hooks
    }

    pub fn process(&self, path: &str, raw: &str) -> String {
        match &self.process_content {
            Some(hook) => hook(path, raw),
            None => raw.to_string(),
        }
    }

    pub fn extract(&self, record: &SearchRecord, field: IndexField) -> FieldValue {
        match &self.extract_field {
            Some(hook) => hook(record, field),
            None => record.field(field),
        }
    }

    /// Weight for one contribution. Negative or NaN hook output counts as zero.
    pub fn weight(&self, id: &str, term: &str, stored: &StoredFields) -> f64 {
        match &self.boost_document {
            Some(hook) => {
                let weight = hook(id, term, stored);
                if weight.is_nan() {
                    SUPPRESS_WEIGHT
                } else {
                    weight.max(SUPPRESS_WEIGHT)
                }
            }
            None => NEUTRAL_WEIGHT,
        }
    }
}

impl fmt::Debug for IndexHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexHooks")
            .field("process_content", &self.process_content.is_some())
            .field("extract_field", &self.extract_field.is_some())
            .field("boost_document", &self.boost_document.is_some())
            .finish()
    }
}
