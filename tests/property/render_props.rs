//! Rendering property tests: highlighting never corrupts or unescapes titles.

use allo_search::render::{find_match, highlight_html};
use allo_search::scoring::{fold_case, TITLE_SUBSTRING_SCORE};
use allo_search::{escape_html, score, Entry, EntryType};
use proptest::prelude::*;

fn unmark(html: &str) -> String {
    html.replace("<mark>", "").replace("</mark>", "")
}

/// Titles full of characters that need escaping.
fn hostile_title_strategy() -> impl Strategy<Value = String> {
    r#"[A-Za-z0-9 <>&"'/=]{1,24}"#
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: removing the highlight tags gives back the escaped title.
    #[test]
    fn prop_highlight_round_trip(
        title in hostile_title_strategy(),
        start in any::<prop::sample::Index>(),
        len in 0usize..6,
    ) {
        let chars: Vec<char> = title.chars().collect();
        let from = start.index(chars.len());
        let to = (from + len).min(chars.len());
        let query: String = chars[from..to].iter().collect();

        let html = highlight_html(&title, find_match(&title, &query));
        prop_assert_eq!(unmark(&html), escape_html(&title).into_owned());
    }

    /// Property: a query taken from the title is always found, on valid
    /// boundaries, with matching text.
    #[test]
    fn prop_substring_is_found(
        title in "[A-Za-z0-9 ]{1,24}",
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let chars: Vec<char> = title.chars().collect();
        let from = start.index(chars.len());
        let to = (from + len).min(chars.len());
        let query: String = chars[from..to].iter().collect();

        let range = find_match(&title, &query.to_uppercase());
        prop_assert!(range.is_some());
        let found = &title[range.unwrap()];
        prop_assert_eq!(found.to_lowercase(), query.to_lowercase());
    }

    /// Property: script tags in titles never survive as markup.
    #[test]
    fn prop_script_is_escaped(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}", query in "[a-z<>]{0,4}") {
        let title = format!("{}<script>alert('x')</script>{}", prefix, suffix);
        let html = unmark(&highlight_html(&title, find_match(&title, &query)));
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
        prop_assert!(html.contains("&lt;script&gt;"));
    }

    /// Property: whatever scoring treats as a title hit, highlighting finds,
    /// including characters whose lowercase form is longer or context-bound.
    #[test]
    fn prop_highlight_agrees_with_scoring(
        title in "[A-Za-zİΣσÉé ]{1,16}",
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let chars: Vec<char> = title.chars().collect();
        let from = start.index(chars.len());
        let to = (from + len).min(chars.len());
        let query: String = chars[from..to].iter().collect();
        prop_assume!(!query.trim().is_empty() && !title.trim().is_empty());

        let entry = Entry::new(title.clone(), "/x", EntryType::Other(String::new()), Vec::new())
            .expect("title is not blank");
        prop_assert!(score(&entry, query.trim()) >= TITLE_SUBSTRING_SCORE);

        let range = find_match(&title, query.trim());
        prop_assert!(range.is_some());
        let found = fold_case(&title[range.unwrap()]);
        prop_assert!(found.contains(&fold_case(query.trim())));
    }
}
