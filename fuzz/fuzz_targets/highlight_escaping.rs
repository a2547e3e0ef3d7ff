// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight markup.
//!
//! Arbitrary Unicode titles and queries: the match range must sit on char
//! boundaries, and the markup minus the `<mark>` tags must equal the escaped
//! title with no raw angle brackets left.

#![no_main]

use allo_search::escape_html;
use allo_search::render::{find_match, highlight_html};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (title, query) = input;

    let matched = find_match(&title, &query);
    if let Some(range) = &matched {
        assert!(title.get(range.clone()).is_some(), "range off char boundary");
    }

    let html = highlight_html(&title, matched);
    let plain = html.replace("<mark>", "").replace("</mark>", "");
    assert_eq!(plain, escape_html(&title));
    assert!(!plain.contains('<') && !plain.contains('>'));
});
