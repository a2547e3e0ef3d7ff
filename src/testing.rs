// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::render::{RenderSink, SuggestionRow};
use crate::session::Navigator;
use crate::types::{Entry, EntryType};

/// Create an entry with a url derived from its title and no keywords.
///
/// `"Steam Keys"` gets `/steam-keys`.
pub fn make_entry(title: &str, entry_type: EntryType) -> Entry {
    make_entry_with_keywords(title, entry_type, &[])
}

/// Create an entry with keywords.
pub fn make_entry_with_keywords(title: &str, entry_type: EntryType, keywords: &[&str]) -> Entry {
    Entry::new(
        title,
        format!("/{}", slug(title)),
        entry_type,
        keywords.iter().map(|k| k.to_string()).collect(),
    )
    .expect("test entries need a non-blank title")
}

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// One call the session made on its sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Show(Vec<SuggestionRow>),
    Hide,
    Select(Option<usize>),
}

/// Sink that records every call and mirrors the visible surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
    /// Rows currently shown (empty when hidden)
    pub rows: Vec<SuggestionRow>,
    /// Mirror of the input's `aria-expanded`
    pub expanded: bool,
    /// Mirror of each row's `aria-selected`
    pub selected: Vec<bool>,
}

impl RenderSink for RecordingSink {
    fn show(&mut self, rows: &[SuggestionRow]) {
        self.events.push(SinkEvent::Show(rows.to_vec()));
        self.rows = rows.to_vec();
        self.expanded = true;
        self.selected = vec![false; rows.len()];
    }

    fn hide(&mut self) {
        self.events.push(SinkEvent::Hide);
        self.rows.clear();
        self.expanded = false;
        self.selected.clear();
    }

    fn select(&mut self, active: Option<usize>) {
        self.events.push(SinkEvent::Select(active));
        for (i, selected) in self.selected.iter_mut().enumerate() {
            *selected = Some(i) == active;
        }
    }
}

/// Navigator that remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}
