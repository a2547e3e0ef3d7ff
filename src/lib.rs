// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Predictive search for the Allo Recharge storefront.
//!
//! Builds a candidate set from what the page already renders (category tiles,
//! menu links, product and service cards), optionally merges in a static
//! remote index, scores every candidate against the live query and drives a
//! keyboard- and mouse-navigable suggestion list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐
//! │ index::scan  │  │ index::remote│
//! │ (PageSource) │  │ (one fetch)  │
//! └──────┬───────┘  └──────┬───────┘
//!        │  local          │ remote
//!        ▼                 ▼
//! ┌─────────────────────────────────┐     ┌─────────────┐
//! │ index::merged (remote ++ local) │────▶│  scoring    │
//! └─────────────────────────────────┘     │ (score,rank)│
//!                                         └──────┬──────┘
//!                                                ▼
//! ┌─────────────────────────────────┐     ┌─────────────┐
//! │ session (SearchSession)         │◀────│  render     │
//! │ debounce, keys, blur, submit    │────▶│ (RenderSink)│
//! └──────────────┬──────────────────┘     └─────────────┘
//!                ▼
//!           Navigator
//! ```
//!
//! The core has no UI dependency. The `wasm` feature adds the browser
//! adapter that binds a session to the real DOM.
//!
//! # Usage
//!
//! ```ignore
//! use allo_search::{PageSnapshot, SearchConfig, SearchSession};
//!
//! let page: PageSnapshot = serde_json::from_str(snapshot_json)?;
//! let mut session = SearchSession::from_page(SearchConfig::default(), &page, sink, navigator);
//!
//! session.on_input("steam", now);
//! session.advance(now + 110); // debounce elapsed, list opens
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod render;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{SearchConfig, MAX_SUGGESTIONS};
pub use error::{Error, Result};
pub use index::{
    decode_outcome, merged, parse_payload, scan, CategoryTile, FetchOutcome, ListingCard,
    MenuLink, PageSnapshot, PageSource, RemoteIndex, RemoteRequest,
};
pub use render::{escape_html, render_rows, RenderSink, SuggestionRow};
pub use scoring::{rank, score, type_boost, Ranked};
pub use session::{
    DefaultAction, Key, Millis, Navigator, PendingNavigation, QueryState, SearchSession,
};
pub use types::{is_navigable, Entry, EntryType, RemoteRecord, NO_TARGET};
