// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interaction controller: one search session per page load.
//!
//! [`SearchSession`] owns everything that used to be loose page-level state:
//! local entries, the remote loader, the query state, pending timers, and the
//! two collaborators it writes to (a [`RenderSink`] and a [`Navigator`]).
//! Hosts feed it events; it updates the list and asks for navigation.
//!
//! # State machine
//!
//! ```text
//!             input (debounced) → results
//!   Closed ─────────────────────────────────▶ Open(None)
//!     ▲                                          │ ArrowDown / ArrowUp
//!     │ Escape, outside click, blur (+grace),    ▼
//!     │ navigation, no results               Open(Some(i))
//!     └──────────────────────────────────────────┘
//! ```
//!
//! Closing for any reason also cancels a pending debounced search, so a
//! search scheduled before the close never reopens the list afterwards.
//!
//! # Time
//!
//! Handlers that start timers take `now`. Nothing fires until the host calls
//! [`SearchSession::advance`]; [`SearchSession::next_deadline`] says when that
//! is worth doing.

pub mod schedule;
mod state;

pub use schedule::{Millis, Scheduler, TaskId};
pub use state::QueryState;

use crate::config::SearchConfig;
use crate::index::{merged, scan, FetchOutcome, PageSource, RemoteIndex, RemoteRequest};
use crate::render::{render_rows, RenderSink, SuggestionRow};
use crate::scoring::rank;
use crate::types::{is_navigable, Entry};

/// Performs a full-page navigation.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Navigator that only remembers the last requested url.
///
/// Hosts that keep the session behind a `RefCell` use it to leave the page
/// after the borrow is released: the event handler finishes, then the host
/// [`take`](Self::take)s the url and navigates itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingNavigation {
    url: Option<String>,
}

impl PendingNavigation {
    pub fn take(&mut self) -> Option<String> {
        self.url.take()
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Whether the host should let the browser's default action run.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Allow,
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Search,
    CloseAfterBlur,
}

/// Predictive search state for one page.
pub struct SearchSession<R, N> {
    config: SearchConfig,
    local: Vec<Entry>,
    remote: RemoteIndex,
    state: QueryState,
    scheduler: Scheduler<Task>,
    pending_search: Option<TaskId>,
    pending_blur: Option<TaskId>,
    sink: R,
    navigator: N,
}

impl<R: RenderSink, N: Navigator> SearchSession<R, N> {
    /// Session over already-scanned local entries.
    pub fn new(config: SearchConfig, local: Vec<Entry>, sink: R, navigator: N) -> Self {
        let remote = RemoteIndex::new(config.remote_index_url.clone());
        Self {
            config,
            local,
            remote,
            state: QueryState::default(),
            scheduler: Scheduler::new(),
            pending_search: None,
            pending_blur: None,
            sink,
            navigator,
        }
    }

    /// Scan `page` and build a session over what it shows.
    pub fn from_page<P: PageSource + ?Sized>(
        config: SearchConfig,
        page: &P,
        sink: R,
        navigator: N,
    ) -> Self {
        Self::new(config, scan(page), sink, navigator)
    }

    // =========================================================================
    // REMOTE INDEX
    // =========================================================================

    /// The one remote fetch to issue, handed out on the first call only.
    pub fn take_remote_request(&mut self) -> Option<RemoteRequest> {
        self.remote.take_request()
    }

    /// Report the remote fetch result. Failures leave the remote list empty.
    pub fn settle_remote(&mut self, outcome: FetchOutcome) -> bool {
        self.remote.settle(outcome)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn active(&self) -> Option<usize> {
        self.state.active()
    }

    pub fn results(&self) -> &[SuggestionRow] {
        self.state.results()
    }

    pub fn local_entries(&self) -> &[Entry] {
        &self.local
    }

    pub fn remote_entries(&self) -> &[Entry] {
        self.remote.entries()
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// When [`advance`](Self::advance) next has something to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    /// Whether a debounced search is waiting to run.
    pub fn has_pending_search(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Rank the current index (remote then local) for `query` and render rows.
    ///
    /// Pure: touches neither the state nor the sink.
    pub fn suggest(&self, query: &str) -> Vec<SuggestionRow> {
        let query = query.trim();
        let ranked = rank(
            merged(self.remote.entries(), &self.local),
            query,
            self.config.limit,
        );
        render_rows(&ranked, query)
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// The input's value changed. Restarts the debounce window.
    pub fn on_input(&mut self, value: &str, now: Millis) {
        self.state.set_query(value);
        self.cancel_pending_search();
        let id = self
            .scheduler
            .schedule(now + self.config.debounce_ms, Task::Search);
        self.pending_search = Some(id);
    }

    /// Fire every task due at `now`.
    pub fn advance(&mut self, now: Millis) {
        for (id, task) in self.scheduler.take_due(now) {
            match task {
                // A close earlier in this batch may have superseded the task
                Task::Search if self.pending_search == Some(id) => {
                    self.pending_search = None;
                    self.run_search();
                }
                Task::CloseAfterBlur if self.pending_blur == Some(id) => {
                    self.pending_blur = None;
                    log::trace!("closing after blur");
                    self.close();
                }
                _ => {}
            }
        }
    }

    /// A key went down in the input.
    pub fn on_key(&mut self, key: Key) -> DefaultAction {
        match key {
            Key::ArrowDown | Key::ArrowUp if self.state.is_open() => {
                let delta = if key == Key::ArrowDown { 1 } else { -1 };
                if self.state.move_active(delta) {
                    self.sink.select(self.state.active());
                }
                DefaultAction::Suppress
            }
            Key::Enter if self.state.is_open() => {
                match self.state.active_row().map(|row| row.url.clone()) {
                    Some(url) => {
                        self.navigate(&url);
                        DefaultAction::Suppress
                    }
                    None => DefaultAction::Allow,
                }
            }
            Key::Escape => {
                self.close();
                DefaultAction::Allow
            }
            _ => DefaultAction::Allow,
        }
    }

    /// Mouse press on row `rank`. Navigates right away, before the input's
    /// blur can close the list.
    pub fn on_row_press(&mut self, rank: usize) -> DefaultAction {
        if let Some(url) = self.state.results().get(rank).map(|row| row.url.clone()) {
            self.navigate(&url);
        }
        DefaultAction::Suppress
    }

    /// The input regained focus; a pending blur-close is dropped.
    pub fn on_focus(&mut self) {
        if let Some(id) = self.pending_blur.take() {
            self.scheduler.cancel(id);
        }
    }

    /// The input lost focus. The list closes after the grace delay.
    pub fn on_blur(&mut self, now: Millis) {
        if let Some(id) = self.pending_blur.take() {
            self.scheduler.cancel(id);
        }
        let id = self
            .scheduler
            .schedule(now + self.config.blur_grace_ms, Task::CloseAfterBlur);
        self.pending_blur = Some(id);
    }

    /// A click landed outside the search form.
    pub fn on_outside_click(&mut self) {
        if self.state.is_open() {
            self.close();
        }
    }

    /// The search form was submitted. The browser's own submission is always
    /// suppressed; the session navigates instead when it can.
    pub fn on_submit(&mut self) -> DefaultAction {
        // A cleared field submits nothing, even with a stale selection shown
        let query = self.state.raw_query().trim().to_string();
        if query.is_empty() {
            return DefaultAction::Suppress;
        }

        if let Some(url) = self.state.active_row().map(|row| row.url.clone()) {
            self.navigate(&url);
            return DefaultAction::Suppress;
        }

        match self.suggest(&query).into_iter().next() {
            Some(top) => {
                self.navigate(&top.url);
            }
            None => log::trace!("submit with no suggestions for {:?}", query),
        }
        DefaultAction::Suppress
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn run_search(&mut self) {
        let query = self.state.raw_query().trim().to_string();
        if query.is_empty() {
            self.close();
            return;
        }

        let rows = self.suggest(&query);
        if rows.is_empty() {
            log::trace!("no suggestions for {:?}", query);
            self.close();
            return;
        }

        log::trace!("{} suggestions for {:?}", rows.len(), query);
        self.state.open_with(rows);
        self.sink.show(self.state.results());
    }

    /// Navigate to `url` unless it is a sentinel. Returns whether it did.
    fn navigate(&mut self, url: &str) -> bool {
        if !is_navigable(url) {
            log::trace!("ignoring navigation to {:?}", url);
            return false;
        }
        self.navigator.navigate(url);
        self.close();
        true
    }

    fn close(&mut self) {
        self.cancel_pending_search();
        if let Some(id) = self.pending_blur.take() {
            self.scheduler.cancel(id);
        }
        self.state.close();
        self.sink.hide();
    }

    fn cancel_pending_search(&mut self) {
        if let Some(id) = self.pending_search.take() {
            self.scheduler.cancel(id);
        }
    }
}
