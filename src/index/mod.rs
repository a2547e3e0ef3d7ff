// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where candidates come from: the page itself and an optional remote file.
//!
//! There is no persisted index structure. Every query walks remote entries
//! followed by local entries; with at most a few hundred entries on a
//! storefront page this is cheaper than keeping anything in sync, and it means
//! a remote index that arrives late is picked up by the very next query.

pub mod remote;
pub mod scan;

pub use remote::{decode_outcome, parse_payload, FetchOutcome, RemoteIndex, RemoteRequest};
pub use scan::{scan, CategoryTile, ListingCard, MenuLink, PageSnapshot, PageSource};

use crate::types::Entry;

/// Candidate set for one query: remote entries first, then local ones.
///
/// Remote-first means an external index wins ties in ranking, since the
/// ranker's sort is stable.
pub fn merged<'a>(
    remote: &'a [Entry],
    local: &'a [Entry],
) -> impl Iterator<Item = &'a Entry> + Clone {
    remote.iter().chain(local.iter())
}
