// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session configuration.
//!
//! Every field has a default, so `{}` is a valid config and callers only spell
//! out what they want to change. The browser adapter receives this as a JS
//! object, the CLI reads it from a JSON file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hard ceiling on the number of rows in the suggestion list.
pub const MAX_SUGGESTIONS: usize = 8;

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 110;

/// Delay between the input losing focus and the list closing.
///
/// Long enough for a mouse press on a row to navigate first.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 120;

/// Well-known location of the optional supplementary index.
pub const DEFAULT_REMOTE_INDEX_URL: &str = "/search-index.json";

/// Tunables for a [`SearchSession`](crate::SearchSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum number of suggestions (1..=8, default: 8)
    pub limit: usize,
    /// Debounce window for input changes in milliseconds (default: 110)
    pub debounce_ms: u64,
    /// Grace delay before closing on blur in milliseconds (default: 120)
    pub blur_grace_ms: u64,
    /// Remote index location; `null` disables the fetch
    pub remote_index_url: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: MAX_SUGGESTIONS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            remote_index_url: Some(DEFAULT_REMOTE_INDEX_URL.to_string()),
        }
    }
}

impl SearchConfig {
    /// Decode and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json).map_err(Error::ConfigJson)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, decode and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Reject values the session cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 || self.limit > MAX_SUGGESTIONS {
            return Err(Error::Config(format!(
                "limit must be between 1 and {}, got {}",
                MAX_SUGGESTIONS, self.limit
            )));
        }
        if let Some(url) = &self.remote_index_url {
            if url.trim().is_empty() {
                return Err(Error::Config(
                    "remoteIndexUrl must not be empty (use null to disable)".to_string(),
                ));
            }
        }
        Ok(())
    }
}
