// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the allo-search command-line interface.
//!
//! Two subcommands, both working from a JSON snapshot of a storefront page:
//! `scan` lists the entries the page yields, `search` runs one query through
//! the same scoring and ranking the browser uses.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "allo-search",
    about = "Predictive storefront search: scan pages and rank suggestions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the entries a page snapshot yields
    Scan {
        /// Page snapshot (categoryTiles, menuLinks, listingCards)
        #[arg(short, long)]
        page: PathBuf,

        /// Print entries as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank suggestions for a query
    Search {
        /// Page snapshot (categoryTiles, menuLinks, listingCards)
        #[arg(short, long)]
        page: PathBuf,

        /// Remote index file, read in place of the fetched `/search-index.json`
        ///
        /// An unreadable or malformed file is treated like a failed fetch:
        /// the search falls back to the page's own entries.
        #[arg(short, long)]
        remote: Option<PathBuf>,

        /// Search configuration (JSON, camelCase keys)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print each row's inner HTML as the browser would render it
        #[arg(long)]
        html: bool,

        /// Search query
        query: String,
    },
}
