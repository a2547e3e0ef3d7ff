//! Ranking order, ties and truncation.

use super::common::{make_entry, make_entry_with_keywords};
use allo_search::{rank, score, EntryType, MAX_SUGGESTIONS};

#[test]
fn test_results_capped_at_eight() {
    let entries: Vec<_> = (0..20)
        .map(|i| make_entry(&format!("Item {}", i), EntryType::Product))
        .collect();
    assert_eq!(rank(&entries, "item", 8).len(), MAX_SUGGESTIONS);
    // a larger limit is still capped
    assert_eq!(rank(&entries, "item", 50).len(), MAX_SUGGESTIONS);
    assert_eq!(rank(&entries, "item", 3).len(), 3);
}

#[test]
fn test_exact_beats_prefix_beats_substring() {
    let entries = vec![
        make_entry("Top Steam", EntryType::Product),
        make_entry("Steam Deck", EntryType::Product),
        make_entry("Steam", EntryType::Product),
    ];
    let titles: Vec<_> = rank(&entries, "steam", 8)
        .iter()
        .map(|r| r.entry.title())
        .collect();
    assert_eq!(titles, vec!["Steam", "Steam Deck", "Top Steam"]);
}

#[test]
fn test_type_boost_breaks_title_ties() {
    let entries = vec![
        make_entry("Steam", EntryType::Service),
        make_entry("Steam", EntryType::Product),
        make_entry("Steam", EntryType::Subcategory),
        make_entry("Steam", EntryType::Category),
    ];
    let types: Vec<_> = rank(&entries, "steam", 8)
        .iter()
        .map(|r| r.entry.entry_type().clone())
        .collect();
    assert_eq!(
        types,
        vec![
            EntryType::Category,
            EntryType::Subcategory,
            EntryType::Product,
            EntryType::Service,
        ]
    );
}

#[test]
fn test_equal_scores_keep_input_order() {
    let entries = vec![
        make_entry("Steam Alpha", EntryType::Product),
        make_entry("Steam Beta", EntryType::Product),
        make_entry("Steam Gamma", EntryType::Product),
    ];
    let ranked = rank(&entries, "steam", 8);
    assert!(ranked.iter().all(|r| r.score == ranked[0].score));
    let titles: Vec<_> = ranked.iter().map(|r| r.entry.title()).collect();
    assert_eq!(titles, vec!["Steam Alpha", "Steam Beta", "Steam Gamma"]);
}

#[test]
fn test_keyword_substrings_accumulate_until_prefix() {
    let gift = |keywords: &[&str]| make_entry_with_keywords("Gift", EntryType::Product, keywords);

    // two substring hits
    assert_eq!(score(&gift(&["xsteam", "ysteam"]), "steam"), 10 + 10 + 12);
    // substring, then a prefix hit ends the scan
    assert_eq!(
        score(&gift(&["xsteam", "steamy", "zsteam"]), "steam"),
        10 + 22 + 12
    );
    // exact hit first: nothing after it counts
    assert_eq!(score(&gift(&["steam", "xsteam"]), "steam"), 35 + 12);
}

#[test]
fn test_other_type_has_no_boost() {
    let entry = make_entry("Steam", EntryType::Other("Bundle".to_string()));
    assert_eq!(score(&entry, "steam"), 100);
}

#[test]
fn test_unmatched_entries_are_dropped() {
    let entries = vec![
        make_entry("Netflix", EntryType::Product),
        make_entry("Steam", EntryType::Product),
    ];
    let ranked = rank(&entries, "steam", 8);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].entry.title(), "Steam");
}
