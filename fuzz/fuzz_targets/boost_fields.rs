// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the placeholder boost filter.
//!
//! Stored fields come from an index file on disk and may be anything. The
//! filter must never panic and must only ever answer 0 or 1.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polydoc::hooks::boost_document;
use polydoc::testing::sample_sections;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Object(stored)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let sections = sample_sections();
    let weight = boost_document("/base/python/page#x", "term", &stored, &sections);
    assert!(weight == 0.0 || weight == 1.0);
});
