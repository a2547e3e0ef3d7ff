//! Scoring and ranking property tests.
//!
//! - Empty queries never match
//! - Result lists are bounded, sorted and deterministic
//! - Title tiers dominate: exact > prefix for the same entry type
//! - Matching ignores case

use allo_search::{rank, score, Entry, EntryType, MAX_SUGGESTIONS};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![
        Just(EntryType::Category),
        Just(EntryType::Subcategory),
        Just(EntryType::Product),
        Just(EntryType::Service),
        "[A-Za-z]{0,8}".prop_map(EntryType::Other),
    ]
}

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,19}"
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        title_strategy(),
        entry_type_strategy(),
        prop::collection::vec("[a-z]{1,8}", 0..4),
    )
        .prop_map(|(title, entry_type, keywords)| {
            Entry::new(title, "/x", entry_type, keywords).expect("title is never blank")
        })
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..40)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: blank queries score zero for every entry.
    #[test]
    fn prop_blank_query_scores_zero(entry in entry_strategy(), spaces in " {0,4}") {
        prop_assert_eq!(score(&entry, &spaces), 0);
    }

    /// Property: never more than the limit, never more than eight.
    #[test]
    fn prop_results_bounded(
        corpus in corpus_strategy(),
        query in query_strategy(),
        limit in 1usize..20,
    ) {
        let ranked = rank(&corpus, &query, limit);
        prop_assert!(ranked.len() <= MAX_SUGGESTIONS);
        prop_assert!(ranked.len() <= limit);
    }

    /// Property: results are matches, sorted by descending score, and agree
    /// with `score` on each entry.
    #[test]
    fn prop_results_sorted_and_consistent(corpus in corpus_strategy(), query in query_strategy()) {
        let ranked = rank(&corpus, &query, MAX_SUGGESTIONS);
        for r in &ranked {
            prop_assert!(r.score > 0);
            prop_assert_eq!(r.score, score(r.entry, &query));
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: ranking the same input twice gives the same output.
    #[test]
    fn prop_ranking_deterministic(corpus in corpus_strategy(), query in query_strategy()) {
        let first = rank(&corpus, &query, MAX_SUGGESTIONS);
        let second = rank(&corpus, &query, MAX_SUGGESTIONS);
        prop_assert_eq!(first, second);
    }

    /// Property: an exact title outscores a title that merely starts with the
    /// query, all else equal.
    #[test]
    fn prop_exact_beats_prefix(
        stem in "[a-z]{2,10}",
        suffix in "[a-z]{1,5}",
        entry_type in entry_type_strategy(),
    ) {
        let exact = Entry::new(stem.clone(), "/a", entry_type.clone(), vec![]).unwrap();
        let prefix = Entry::new(format!("{}{}", stem, suffix), "/b", entry_type, vec![]).unwrap();
        prop_assert!(score(&exact, &stem) > score(&prefix, &stem));
    }

    /// Property: query case does not matter.
    #[test]
    fn prop_case_insensitive(entry in entry_strategy(), query in "[a-z]{1,6}") {
        prop_assert_eq!(score(&entry, &query), score(&entry, &query.to_uppercase()));
    }

    /// Property: dropping one character from a title still matches it.
    #[test]
    fn prop_one_missing_char_still_matches(title in "[a-z]{3,12}", cut in any::<prop::sample::Index>()) {
        let idx = cut.index(title.len());
        let mut query = title.clone();
        query.remove(idx);
        let entry = Entry::new(title, "/t", EntryType::Product, vec![]).unwrap();
        prop_assert!(score(&entry, &query) > 0);
    }
}
