// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use allo_search::{
    decode_outcome, merged, rank, render_rows, scan, Entry, FetchOutcome, PageSnapshot,
    SearchConfig, SuggestionRow,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

mod cli;
use cli::display::{
    pad_right, row, score_value, section_bot, section_top, themed, title_with_match, truncate,
    type_badge, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan { page, json } => run_scan(&page, json),
        Commands::Search {
            page,
            remote,
            config,
            html,
            query,
        } => run_search(&page, remote.as_deref(), config.as_deref(), html, &query),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_page(path: &Path) -> Result<PageSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page snapshot {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid page snapshot {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

/// Remote entries from a file; any failure leaves the list empty.
fn load_remote(path: Option<&Path>) -> Vec<Entry> {
    let Some(path) = path else {
        return Vec::new();
    };
    match decode_outcome(FetchOutcome::from_file(path)) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("remote index unavailable, using page entries only: {}", e);
            Vec::new()
        }
    }
}

// ============================================================================
// SCAN
// ============================================================================

fn run_scan(page_path: &Path, json: bool) -> Result<()> {
    let page = load_page(page_path)?;
    let entries = scan(&page);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    section_top(&format!("{} entries", entries.len()));
    for entry in &entries {
        let badge = pad_right(&type_badge(entry.entry_type()), 14);
        let title = pad_right(&truncate(entry.title(), 30), 31);
        let url = themed(GRAY, &[], &truncate(entry.url(), 25));
        row(&format!(" {}{}{}", badge, title, url));
    }
    section_bot();
    Ok(())
}

// ============================================================================
// SEARCH
// ============================================================================

fn run_search(
    page_path: &Path,
    remote_path: Option<&Path>,
    config_path: Option<&Path>,
    html: bool,
    query: &str,
) -> Result<()> {
    let query = query.trim();
    let rows = search_rows(page_path, remote_path, config_path, query)?;

    if rows.is_empty() {
        println!("No suggestions for {:?}", query);
        return Ok(());
    }

    if html {
        for suggestion in &rows {
            println!("{}", html_line(suggestion));
        }
        return Ok(());
    }

    section_top(&format!("{} suggestions for {:?}", rows.len(), query));
    for suggestion in &rows {
        let title = title_with_match(&suggestion.title, suggestion.matched.clone());
        let title = pad_right(&truncate_styled(&suggestion.title, title, 28), 29);
        row(&format!(
            " {} {}{}{}",
            score_value(suggestion.score),
            title,
            pad_right(&type_badge(&suggestion.entry_type), 14),
            themed(GRAY, &[], &truncate(&suggestion.url, 22)),
        ));
    }
    section_bot();
    Ok(())
}

/// Load everything a search needs and rank `query` against it.
fn search_rows(
    page_path: &Path,
    remote_path: Option<&Path>,
    config_path: Option<&Path>,
    query: &str,
) -> Result<Vec<SuggestionRow>> {
    let config = load_config(config_path)?;
    let page = load_page(page_path)?;
    let local = scan(&page);
    let remote = load_remote(remote_path);
    log::debug!("{} remote + {} local candidates", remote.len(), local.len());

    let query = query.trim();
    let ranked = rank(merged(&remote, &local), query, config.limit);
    Ok(render_rows(&ranked, query))
}

fn html_line(suggestion: &SuggestionRow) -> String {
    format!("{}\t{}", suggestion.url, suggestion.inner_html())
}

/// Long titles lose their highlight rather than risk cutting an escape apart.
fn truncate_styled(plain: &str, styled: String, max: usize) -> String {
    if plain.chars().count() <= max {
        styled
    } else {
        truncate(plain, max)
    }
}
