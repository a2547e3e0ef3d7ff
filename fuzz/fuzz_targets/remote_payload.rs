// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for remote index parsing.
//!
//! Any body either parses to entries or fails with an error. No panics, and
//! every parsed entry has a non-blank title.

#![no_main]

use allo_search::parse_payload;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &[u8]| {
    let body = String::from_utf8_lossy(body);
    if let Ok(entries) = parse_payload(&body) {
        for entry in &entries {
            assert!(!entry.title().trim().is_empty());
        }
    }
});
