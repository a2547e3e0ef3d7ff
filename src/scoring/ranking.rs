// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score everything, drop non-matches, sort, truncate.
//!
//! Ordering is by score, descending. Ties keep the order the candidates came
//! in (remote before local, then extraction order), which makes the output a
//! pure function of the candidate sequence and the query.

use super::core::{fold_case, score_normalized};
use crate::config::MAX_SUGGESTIONS;
use crate::types::Entry;
use std::cmp::Ordering;

/// An entry that matched, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub entry: &'a Entry,
    pub score: u32,
}

/// Compare two ranked results: higher score first.
///
/// Equal scores compare `Equal`, so a stable sort keeps their incoming order.
pub fn compare_ranked(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Rank `candidates` for `query`, keeping at most `limit` results.
///
/// `limit` is capped at [`MAX_SUGGESTIONS`]. An empty (after trimming) query
/// ranks nothing.
pub fn rank<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let query = fold_case(query.trim());
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Ranked<'a>> = candidates
        .into_iter()
        .filter_map(|entry| {
            let score = score_normalized(entry, &query);
            (score > 0).then_some(Ranked { entry, score })
        })
        .collect();

    // slice::sort_by is stable
    ranked.sort_by(compare_ranked);
    ranked.truncate(limit.min(MAX_SUGGESTIONS));
    ranked
}
