// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting and HTML escaping.

use crate::scoring::fold_case;
use std::borrow::Cow;
use std::ops::Range;

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Byte range of the first case-insensitive occurrence of `query` in `title`.
///
/// Both sides are folded with [`fold_case`], the same folding scoring uses.
/// Each folded character remembers the title character it came from, so the
/// range always lands on `title`'s own char boundaries even when folding
/// changes the length (`İ` folds to two characters). An empty query matches
/// nothing.
pub fn find_match(title: &str, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return None;
    }
    let haystack: Vec<(char, Range<usize>)> = title
        .char_indices()
        .flat_map(|(offset, c)| {
            let span = offset..offset + c.len_utf8();
            c.to_lowercase().map(move |lower| (lower, span.clone()))
        })
        .collect();
    if needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).find_map(|window| {
        let matches = window.iter().zip(&needle).all(|((t, _), q)| t == q);
        match (window.first(), window.last()) {
            (Some((_, first)), Some((_, last))) if matches => Some(first.start..last.end),
            _ => None,
        }
    })
}

/// Escaped title with the matched span wrapped in `<mark>`.
pub fn highlight_html(title: &str, matched: Option<Range<usize>>) -> String {
    match matched {
        Some(range) => format!(
            "{}<mark>{}</mark>{}",
            escape_html(&title[..range.start]),
            escape_html(&title[range.clone()]),
            escape_html(&title[range.end..])
        ),
        None => escape_html(title).into_owned(),
    }
}
