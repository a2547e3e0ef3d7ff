// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Remote index loader.
//!
//! One fetch, issued once, whose failure nobody ever sees. The loader does not
//! perform I/O itself: the host (browser adapter, CLI, test) asks for the
//! request with [`RemoteIndex::take_request`], does the fetch however it can,
//! and reports back with [`RemoteIndex::settle`]. Until then, and forever if
//! the fetch fails or hangs, the remote list is empty and search runs on local
//! entries alone.
//!
//! # States
//!
//! ```text
//! Idle ──take_request──▶ Pending ──settle(ok)──▶ Loaded(entries)
//!                           └──────settle(err)──▶ Unavailable
//! ```

use crate::error::{Error, Result};
use crate::types::{Entry, RemoteRecord};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The request the host should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub url: String,
}

/// What came back from the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered (any status).
    Response { status: u16, body: String },
    /// No response at all.
    NetworkError(String),
}

impl FetchOutcome {
    /// Treat a local file as the remote resource: readable means `200`,
    /// unreadable means the request failed.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(body) => FetchOutcome::Response { status: 200, body },
            Err(e) => FetchOutcome::NetworkError(format!("{}: {}", path.display(), e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Pending,
    Loaded(Vec<Entry>),
    Unavailable,
}

/// Remote half of the search index.
#[derive(Debug, Clone)]
pub struct RemoteIndex {
    url: Option<String>,
    state: State,
}

impl RemoteIndex {
    /// Loader for `url`; `None` means there is no remote index at all.
    pub fn new(url: Option<String>) -> Self {
        let state = if url.is_some() {
            State::Idle
        } else {
            State::Unavailable
        };
        Self { url, state }
    }

    /// Hand out the fetch request. Returns `Some` exactly once.
    pub fn take_request(&mut self) -> Option<RemoteRequest> {
        if self.state != State::Idle {
            return None;
        }
        let url = self.url.clone()?;
        self.state = State::Pending;
        Some(RemoteRequest { url })
    }

    /// Record the fetch result. Only the first settlement counts; returns
    /// whether this one was accepted.
    pub fn settle(&mut self, outcome: FetchOutcome) -> bool {
        if matches!(self.state, State::Loaded(_) | State::Unavailable) {
            return false;
        }
        self.state = match decode_outcome(outcome) {
            Ok(entries) => {
                log::debug!("remote index loaded with {} entries", entries.len());
                State::Loaded(entries)
            }
            Err(e) => {
                log::debug!("remote index unavailable: {}", e);
                State::Unavailable
            }
        };
        true
    }

    /// Remote entries, empty unless the fetch succeeded.
    pub fn entries(&self) -> &[Entry] {
        match &self.state {
            State::Loaded(entries) => entries,
            _ => &[],
        }
    }

    /// Whether a fetch has been handed out and not yet settled.
    pub fn is_pending(&self) -> bool {
        self.state == State::Pending
    }
}

/// Turn a fetch outcome into entries or the reason there are none.
pub fn decode_outcome(outcome: FetchOutcome) -> Result<Vec<Entry>> {
    match outcome {
        FetchOutcome::NetworkError(reason) => Err(Error::RemoteNetwork(reason)),
        FetchOutcome::Response { status, body } => {
            if !(200..300).contains(&status) {
                return Err(Error::RemoteStatus(status));
            }
            parse_payload(&body)
        }
    }
}

/// Parse the remote index body: a JSON array of
/// `{title, url, type, keywords?}` records.
///
/// Records that are not objects or lack a title are skipped one by one; the
/// payload as a whole is rejected only when it is not JSON or not an array.
pub fn parse_payload(body: &str) -> Result<Vec<Entry>> {
    let value: Value = serde_json::from_str(body).map_err(Error::RemoteJson)?;
    let Value::Array(items) = value else {
        return Err(Error::RemoteNotArray);
    };

    let total = items.len();
    let entries: Vec<Entry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RemoteRecord>(item).ok())
        .filter_map(RemoteRecord::into_entry)
        .collect();

    if entries.len() < total {
        log::debug!(
            "skipped {} malformed remote index records",
            total - entries.len()
        );
    }
    Ok(entries)
}
