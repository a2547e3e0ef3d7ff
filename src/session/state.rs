// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the suggestion list currently looks like.

use crate::render::SuggestionRow;

/// Query, shown rows, keyboard selection and visibility.
///
/// # Invariants
///
/// - `open` ⇔ `results` is non-empty
/// - `active`, when set, indexes into `results`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    raw_query: String,
    results: Vec<SuggestionRow>,
    active: Option<usize>,
    open: bool,
}

impl QueryState {
    /// The input's value as last typed, untrimmed.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Rows on display, best first. Empty when closed.
    pub fn results(&self) -> &[SuggestionRow] {
        &self.results
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Selection as the DOM-facing index: -1 for none.
    pub fn active_index(&self) -> isize {
        self.active.map_or(-1, |i| i as isize)
    }

    pub fn active_row(&self) -> Option<&SuggestionRow> {
        self.active.and_then(|i| self.results.get(i))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn set_query(&mut self, raw: &str) {
        self.raw_query.clear();
        self.raw_query.push_str(raw);
    }

    /// Show `rows` with nothing selected. Empty rows close instead.
    pub(crate) fn open_with(&mut self, rows: Vec<SuggestionRow>) {
        self.open = !rows.is_empty();
        self.results = rows;
        self.active = None;
    }

    /// Back to closed with no rows. Returns whether it was open.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.results.clear();
        self.active = None;
        was_open
    }

    /// Move the selection by `delta`, clamped to `[-1, len - 1]`.
    /// Returns whether the selection changed.
    pub(crate) fn move_active(&mut self, delta: isize) -> bool {
        let last = self.results.len() as isize - 1;
        let target = (self.active_index() + delta).clamp(-1, last.max(-1));
        let next = usize::try_from(target).ok();
        let changed = next != self.active;
        self.active = next;
        changed
    }
}
