// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searchable unit and its type tag.
//!
//! An [`Entry`] is what every part of the pipeline passes around: the scanner
//! produces them, the remote loader decodes them, the scorer ranks them and the
//! renderer turns them into rows. Entries are immutable once built, so the
//! fields are private and only readable through accessors.
//!
//! # Invariants
//!
//! - **Entry**: `title.trim()` is non-empty. [`Entry::new`] refuses blank titles,
//!   so anything that made it into an index has something to display and match.
//! - **EntryType**: closed set of four variants plus [`EntryType::Other`], which
//!   keeps the unrecognized label for display and carries zero ranking boost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Url value meaning "informational, not actionable".
pub const NO_TARGET: &str = "#";

/// What kind of thing an entry points at.
///
/// Drives the type boost in scoring and the label shown next to each
/// suggestion. Unknown labels from the remote index land in `Other` rather
/// than being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryType {
    Category,
    Subcategory,
    Product,
    Service,
    Other(String),
}

impl EntryType {
    /// Parse a type label. Matching is exact, like the site's markup and the
    /// remote index format use it.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Category" => EntryType::Category,
            "Subcategory" => EntryType::Subcategory,
            "Product" => EntryType::Product,
            "Service" => EntryType::Service,
            other => EntryType::Other(other.to_string()),
        }
    }

    /// Display label for the suggestion row.
    pub fn label(&self) -> &str {
        match self {
            EntryType::Category => "Category",
            EntryType::Subcategory => "Subcategory",
            EntryType::Product => "Product",
            EntryType::Service => "Service",
            EntryType::Other(label) => label,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EntryType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(EntryType::from_label(&label))
    }
}

/// One searchable unit: a category, subcategory, product or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    title: String,
    url: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
    keywords: Vec<String>,
}

impl Entry {
    /// Build an entry. Returns `None` when the title is blank.
    ///
    /// An empty url is normalized to [`NO_TARGET`] so "not navigable" has a
    /// single spelling everywhere downstream.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        entry_type: EntryType,
        keywords: Vec<String>,
    ) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        let url = url.into();
        let url = if url.is_empty() {
            NO_TARGET.to_string()
        } else {
            url
        };
        Some(Entry {
            title,
            url,
            entry_type,
            keywords,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn entry_type(&self) -> &EntryType {
        &self.entry_type
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether selecting this entry should navigate anywhere.
    pub fn is_navigable(&self) -> bool {
        is_navigable(&self.url)
    }
}

/// Empty and `"#"` urls never trigger navigation.
pub fn is_navigable(url: &str) -> bool {
    !url.is_empty() && url != NO_TARGET
}

/// Wire shape of one record in the remote index:
/// `{title, url, type, keywords?}`.
///
/// Everything is optional at this layer so one sloppy record can be skipped
/// without rejecting its neighbours.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// Absent and `null` both mean no keywords
    pub keywords: Option<Vec<String>>,
}

impl RemoteRecord {
    /// Convert into an entry, or `None` when the record has no usable title.
    pub fn into_entry(self) -> Option<Entry> {
        let entry_type = self
            .entry_type
            .as_deref()
            .map(EntryType::from_label)
            .unwrap_or_else(|| EntryType::Other(String::new()));
        Entry::new(
            self.title?,
            self.url.unwrap_or_default(),
            entry_type,
            self.keywords.unwrap_or_default(),
        )
    }
}
