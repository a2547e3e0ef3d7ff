// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion ranking.
//!
//! Scores are small additive integers. A title match is worth far more than
//! anything else, keywords nudge, the entry type breaks near-ties, and a tiny
//! approximate-match bonus rescues queries with one stray character.
//!
//! # Rules (additive)
//!
//! | Rule        | Condition                                   | Points |
//! |-------------|---------------------------------------------|--------|
//! | Title       | exact / prefix / substring                  | 100 / 65 / 40 |
//! | Keywords    | exact (stop) / prefix (stop) / substring (each) | 35 / 22 / 10 |
//! | Type        | Category / Subcategory / Product / Service  | 16 / 14 / 12 / 10 |
//! | Approximate | title lacks query, ≤1 skipped title char    | 8 |
//!
//! The type boost only applies to entries that matched through one of the
//! textual rules. Otherwise every typed entry would score at least 10 for any
//! query and nothing would ever be filtered out.

use crate::types::{Entry, EntryType};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Query equals the title.
pub const TITLE_EXACT_SCORE: u32 = 100;

/// Title starts with the query.
pub const TITLE_PREFIX_SCORE: u32 = 65;

/// Title contains the query somewhere else.
pub const TITLE_SUBSTRING_SCORE: u32 = 40;

/// A keyword equals the query (ends the keyword scan).
pub const KEYWORD_EXACT_SCORE: u32 = 35;

/// A keyword starts with the query (ends the keyword scan).
pub const KEYWORD_PREFIX_SCORE: u32 = 22;

/// Each keyword that merely contains the query.
pub const KEYWORD_SUBSTRING_SCORE: u32 = 10;

/// Title is within one skipped character of containing the query in order.
pub const APPROXIMATE_BONUS: u32 = 8;

/// Most title characters the approximate alignment may skip.
pub const MAX_APPROXIMATE_MISSES: usize = 1;

/// Ranking boost by entry type.
pub fn type_boost(entry_type: &EntryType) -> u32 {
    match entry_type {
        EntryType::Category => 16,
        EntryType::Subcategory => 14,
        EntryType::Product => 12,
        EntryType::Service => 10,
        EntryType::Other(_) => 0,
    }
}

/// Lowercase one character at a time.
///
/// Unlike `str::to_lowercase` this ignores context (a word-final `Σ` folds to
/// `σ`, never `ς`), so [`find_match`](crate::render::find_match) can map every
/// folded character back to the title character it came from.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Relevance of `entry` for `query`. Zero means "not a match".
///
/// The query is trimmed and case-folded here, so callers can pass the raw
/// input value.
pub fn score(entry: &Entry, query: &str) -> u32 {
    let query = fold_case(query.trim());
    if query.is_empty() {
        return 0;
    }
    score_normalized(entry, &query)
}

/// [`score`] for a query that is already trimmed, case-folded and non-empty.
///
/// The ranker normalizes once per query instead of once per entry.
pub(crate) fn score_normalized(entry: &Entry, query: &str) -> u32 {
    let title = fold_case(entry.title());

    let title_points = title_score(&title, query);
    let keyword_points = keyword_score(entry.keywords(), query);
    let approximate_points = if title.contains(query) {
        0
    } else if approximate_match(query, &title) {
        APPROXIMATE_BONUS
    } else {
        0
    };

    let textual = title_points + keyword_points + approximate_points;
    if textual == 0 {
        return 0;
    }
    textual + type_boost(entry.entry_type())
}

fn title_score(title: &str, query: &str) -> u32 {
    if title == query {
        TITLE_EXACT_SCORE
    } else if title.starts_with(query) {
        TITLE_PREFIX_SCORE
    } else if title.contains(query) {
        TITLE_SUBSTRING_SCORE
    } else {
        0
    }
}

/// Keywords are scanned in order. An exact or prefix hit adds its points and
/// ends the scan; substring hits accumulate until then.
fn keyword_score(keywords: &[String], query: &str) -> u32 {
    let mut points = 0;
    for keyword in keywords {
        let keyword = fold_case(keyword);
        if keyword == query {
            points += KEYWORD_EXACT_SCORE;
            break;
        }
        if keyword.starts_with(query) {
            points += KEYWORD_PREFIX_SCORE;
            break;
        }
        if keyword.contains(query) {
            points += KEYWORD_SUBSTRING_SCORE;
        }
    }
    points
}

/// Greedy single-pass alignment of `query` against `title`.
///
/// Both pointers advance on a match; on a mismatch only the title pointer
/// moves and a miss is counted. Succeeds when the whole query is consumed
/// with at most [`MAX_APPROXIMATE_MISSES`] misses. Only extra or substituted
/// characters in the title are forgiven, never in the query.
///
/// ```ignore
/// assert!(approximate_match("telecm", "telecom"));  // 'o' skipped
/// assert!(!approximate_match("telecom", "telecm")); // query is longer
/// ```
pub fn approximate_match(query: &str, title: &str) -> bool {
    let query: Vec<char> = query.chars().collect();
    let title: Vec<char> = title.chars().collect();

    let (mut i, mut j, mut misses) = (0, 0, 0);
    while i < query.len() && j < title.len() && misses <= MAX_APPROXIMATE_MISSES {
        if query[i] == title[j] {
            i += 1;
        } else {
            misses += 1;
        }
        j += 1;
    }
    i == query.len() && misses <= MAX_APPROXIMATE_MISSES
}
