// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion rendering: ranked entries in, display rows out.
//!
//! Rows are plain data. What happens to them (DOM list items, terminal lines,
//! a recording in a test) is up to the [`RenderSink`] the session was built
//! with. The HTML helpers on [`SuggestionRow`] produce the exact markup the
//! browser adapter puts inside each `<li>`.

mod highlight;

pub use highlight::{escape_html, find_match, highlight_html};

use crate::scoring::Ranked;
use crate::types::EntryType;
use serde::Serialize;
use std::ops::Range;

/// One line of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    /// 0-based position in the list
    pub rank: usize,
    /// Navigation target
    pub url: String,
    /// Unescaped title
    pub title: String,
    /// Byte range of the highlighted occurrence within `title`
    #[serde(skip)]
    pub matched: Option<Range<usize>>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub score: u32,
}

impl SuggestionRow {
    /// Escaped title with the occurrence in `<mark>`.
    pub fn title_html(&self) -> String {
        highlight_html(&self.title, self.matched.clone())
    }

    /// Escaped type label.
    pub fn type_label_html(&self) -> String {
        escape_html(self.entry_type.label()).into_owned()
    }

    /// Inner markup of the row element.
    pub fn inner_html(&self) -> String {
        format!(
            r#"<span class="sugg-title">{}</span><span class="sugg-type">{}</span>"#,
            self.title_html(),
            self.type_label_html()
        )
    }

    /// DOM id of the row element.
    pub fn element_id(&self) -> String {
        format!("sugg-{}", self.rank)
    }
}

/// Turn ranked entries into rows. `query` is the trimmed input as typed,
/// not lower-cased.
pub fn render_rows(ranked: &[Ranked<'_>], query: &str) -> Vec<SuggestionRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(rank, r)| SuggestionRow {
            rank,
            url: r.entry.url().to_string(),
            title: r.entry.title().to_string(),
            matched: find_match(r.entry.title(), query),
            entry_type: r.entry.entry_type().clone(),
            score: r.score,
        })
        .collect()
}

/// Where rows go.
///
/// The session calls these in response to its own state changes and owns the
/// surface's contents and visibility exclusively.
pub trait RenderSink {
    /// Replace the list with `rows` (never empty) and make it visible:
    /// `aria-expanded="true"` on the input, `aria-selected="false"` on rows.
    fn show(&mut self, rows: &[SuggestionRow]);

    /// Collapse the list: hidden, `aria-expanded="false"`.
    fn hide(&mut self);

    /// Reflect the keyboard selection: `aria-selected` on every row, active
    /// row scrolled into view.
    fn select(&mut self, active: Option<usize>);
}
