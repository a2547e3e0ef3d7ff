// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content scanner: turn what the page already shows into entries.
//!
//! The scanner never touches a DOM directly. It reads three element classes
//! through [`PageSource`], so the same extraction rules run against the live
//! page (browser adapter), a JSON snapshot (CLI) or a hand-built fixture
//! (tests). Missing pieces are skipped, never reported.

use crate::types::{Entry, EntryType, NO_TARGET};
use serde::{Deserialize, Serialize};

/// Keyword every category tile carries besides its own title.
const TILE_KEYWORD: &str = "category";

/// A homepage category tile: a link wrapping a title element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryTile {
    /// Text of the tile's title sub-element, if it has one
    pub title: Option<String>,
    /// The tile's link target
    pub href: Option<String>,
}

/// A link inside the categories flyout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuLink {
    pub text: String,
    pub href: Option<String>,
    /// 0 for top-level categories, 1+ when nested in a sub-submenu
    pub depth: usize,
}

/// A product or service listing card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingCard {
    pub title: String,
    /// Target of the card's action link
    pub action_href: Option<String>,
    /// Card is marked as a service rather than a product
    pub service: bool,
}

/// Read-only view of the rendered page.
pub trait PageSource {
    fn category_tiles(&self) -> Vec<CategoryTile>;
    fn menu_links(&self) -> Vec<MenuLink>;
    fn listing_cards(&self) -> Vec<ListingCard>;
}

/// Plain-data page description.
///
/// ```json
/// {
///   "categoryTiles": [{"title": "Telecom", "href": "/c/telecom"}],
///   "menuLinks": [{"text": "Steam Games", "href": "/c/steam-games", "depth": 1}],
///   "listingCards": [{"title": "Netflix 1 Month", "actionHref": "/p/netflix", "service": false}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSnapshot {
    pub category_tiles: Vec<CategoryTile>,
    pub menu_links: Vec<MenuLink>,
    pub listing_cards: Vec<ListingCard>,
}

impl PageSource for PageSnapshot {
    fn category_tiles(&self) -> Vec<CategoryTile> {
        self.category_tiles.clone()
    }

    fn menu_links(&self) -> Vec<MenuLink> {
        self.menu_links.clone()
    }

    fn listing_cards(&self) -> Vec<ListingCard> {
        self.listing_cards.clone()
    }
}

/// Extract entries from a page: tiles, then menu links, then cards, each in
/// document order.
pub fn scan<P: PageSource + ?Sized>(page: &P) -> Vec<Entry> {
    let mut entries = Vec::new();

    for tile in page.category_tiles() {
        let Some(title) = tile.title.as_deref().map(str::trim) else {
            continue;
        };
        let keywords = vec![title.to_string(), TILE_KEYWORD.to_string()];
        entries.extend(Entry::new(
            title,
            link_target(tile.href.as_deref()),
            EntryType::Category,
            keywords,
        ));
    }

    for link in page.menu_links() {
        let title = link.text.trim();
        let entry_type = if link.depth > 0 {
            EntryType::Subcategory
        } else {
            EntryType::Category
        };
        entries.extend(Entry::new(
            title,
            link_target(link.href.as_deref()),
            entry_type,
            vec![title.to_string()],
        ));
    }

    for card in page.listing_cards() {
        let title = card.title.trim();
        let entry_type = if card.service {
            EntryType::Service
        } else {
            EntryType::Product
        };
        entries.extend(Entry::new(
            title,
            link_target(card.action_href.as_deref()),
            entry_type,
            vec![title.to_string()],
        ));
    }

    log::debug!("scanned {} local entries", entries.len());
    entries
}

fn link_target(href: Option<&str>) -> &str {
    match href {
        Some(href) if !href.is_empty() => href,
        _ => NO_TARGET,
    }
}
