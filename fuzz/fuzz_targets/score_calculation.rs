// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores are deterministic, zero for blank queries, and ranking never
//! returns a non-match, an unsorted list, or more than eight rows.

#![no_main]

use allo_search::{rank, score, Entry, EntryType, MAX_SUGGESTIONS};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Candidate {
    title: String,
    keywords: Vec<String>,
    kind: u8,
}

#[derive(Arbitrary, Debug)]
struct Input {
    candidates: Vec<Candidate>,
    query: String,
    limit: u8,
}

fn entry_type(kind: u8) -> EntryType {
    match kind % 5 {
        0 => EntryType::Category,
        1 => EntryType::Subcategory,
        2 => EntryType::Product,
        3 => EntryType::Service,
        _ => EntryType::Other(String::new()),
    }
}

fuzz_target!(|input: Input| {
    let entries: Vec<Entry> = input
        .candidates
        .into_iter()
        .filter_map(|c| Entry::new(c.title, "/x", entry_type(c.kind), c.keywords))
        .collect();

    for entry in &entries {
        let first = score(entry, &input.query);
        assert_eq!(first, score(entry, &input.query), "score must be deterministic");
        if input.query.trim().is_empty() {
            assert_eq!(first, 0, "blank query matched {:?}", entry.title());
        }
    }

    let ranked = rank(&entries, &input.query, input.limit as usize);
    assert!(ranked.len() <= MAX_SUGGESTIONS);
    assert!(ranked.len() <= input.limit as usize);
    for r in &ranked {
        assert!(r.score > 0);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order");
    }
});
