// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing in here ever reaches a shopper: the session turns remote-index
//! failures into "no remote entries" and a debug log line. The variants exist
//! so the loader and config code can use `?` and so the CLI can say what went
//! wrong.

use thiserror::Error;

/// Everything that can go wrong inside the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Remote index answered with a non-2xx status.
    #[error("remote index responded with status {0}")]
    RemoteStatus(u16),

    /// Remote index request never produced a response.
    #[error("remote index request failed: {0}")]
    RemoteNetwork(String),

    /// Remote index body is not JSON.
    #[error("remote index is not valid JSON: {0}")]
    RemoteJson(#[source] serde_json::Error),

    /// Remote index body is JSON but not an array.
    #[error("remote index payload is not an array")]
    RemoteNotArray,

    /// Config file or object could not be decoded.
    #[error("invalid config JSON: {0}")]
    ConfigJson(#[source] serde_json::Error),

    /// Config decoded but holds an unusable value.
    #[error("invalid config: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
