//! Property-based tests using proptest.
//!
//! These tests verify that invariants hold for randomly generated inputs.

use fuzzycompare::*;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a small alphabet, so overlaps are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,12}").unwrap()
}

fn non_empty_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,12}").unwrap()
}

/// Mixed-script words, including characters outside the BMP.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "naïve".to_string(),
        "résumé".to_string(),
        "日本語".to_string(),
        "\u{1F600}smile".to_string(),
        "hello".to_string(),
        "Hello".to_string(),
    ])
}

type Metric = fn(&str, &str) -> f64;

fn similarity_metrics() -> Vec<(&'static str, Metric)> {
    vec![
        ("edit", edit_similarity as Metric),
        ("hamming", hamming_similarity as Metric),
        ("jaccard", jaccard_index as Metric),
        ("jaro", jaro_similarity as Metric),
        ("jaro_winkler", jaro_winkler_similarity as Metric),
        ("levenshtein", levenshtein_similarity as Metric),
        ("lcs", lcs_similarity as Metric),
        ("lcsubstring", lcsubstring_similarity as Metric),
        ("overlap", overlap_coefficient as Metric),
        ("ratcliff_obershelp", ratcliff_obershelp_similarity as Metric),
        ("sorensen_dice", sorensen_dice_coefficient as Metric),
    ]
}

fn distance_metrics() -> Vec<(&'static str, Metric)> {
    vec![
        ("edit", edit_distance as Metric),
        ("hamming", hamming_distance as Metric),
        ("levenshtein", levenshtein_distance as Metric),
    ]
}

// ============================================================================
// TRIVIAL CASES
// ============================================================================

#[test]
fn empty_pair_is_identical() {
    for (name, metric) in similarity_metrics() {
        assert_eq!(metric("", ""), 1.0, "{name}");
    }
    for (name, metric) in distance_metrics() {
        assert_eq!(metric("", ""), 0.0, "{name}");
    }
}

proptest! {
    #[test]
    fn prop_self_similarity_is_one(s in word_strategy()) {
        for (name, metric) in similarity_metrics() {
            prop_assert_eq!(metric(&s, &s), 1.0, "{}", name);
        }
    }

    #[test]
    fn prop_empty_side_scores_zero(s in non_empty_word_strategy()) {
        for (name, metric) in similarity_metrics() {
            prop_assert_eq!(metric(&s, ""), 0.0, "{}", name);
            prop_assert_eq!(metric("", &s), 0.0, "{}", name);
        }
    }

    #[test]
    fn prop_empty_side_distance_is_length(s in non_empty_word_strategy()) {
        for (name, metric) in distance_metrics() {
            prop_assert_eq!(metric(&s, ""), s.len() as f64, "{}", name);
            prop_assert_eq!(metric("", &s), s.len() as f64, "{}", name);
        }
    }

    // ========================================================================
    // RANGES
    // ========================================================================

    #[test]
    fn prop_similarities_in_unit_range(a in word_strategy(), b in word_strategy()) {
        for (name, metric) in similarity_metrics() {
            let score = metric(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score), "{}({:?}, {:?}) = {}", name, a, b, score);
        }
    }

    #[test]
    fn prop_unicode_similarities_in_unit_range(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        for (name, metric) in similarity_metrics() {
            let score = metric(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score), "{}({:?}, {:?}) = {}", name, a, b, score);
        }
    }

    #[test]
    fn prop_distances_non_negative_and_bounded(a in word_strategy(), b in word_strategy()) {
        let longer = a.len().max(b.len()) as f64;
        for (name, metric) in distance_metrics() {
            let d = metric(&a, &b);
            prop_assert!(d >= 0.0, "{}", name);
            prop_assert!(d <= longer, "{}", name);
        }
    }

    // ========================================================================
    // RELATIONSHIPS
    // ========================================================================

    #[test]
    fn prop_dice_jaccard_identity(a in non_empty_word_strategy(), b in non_empty_word_strategy()) {
        let j = jaccard_index(&a, &b);
        let d = sorensen_dice_coefficient(&a, &b);
        prop_assert!((d - 2.0 * j / (j + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn prop_hamming_zero_on_length_mismatch(a in non_empty_word_strategy(), b in non_empty_word_strategy()) {
        prop_assume!(a.len() != b.len());
        prop_assert_eq!(hamming_similarity(&a, &b), 0.0);
        prop_assert_eq!(hamming_distance(&a, &b), a.len().max(b.len()) as f64);
    }

    #[test]
    fn prop_levenshtein_never_exceeds_edit_distance(a in word_strategy(), b in word_strategy()) {
        prop_assert!(levenshtein_distance(&a, &b) <= edit_distance(&a, &b));
    }

    #[test]
    fn prop_levenshtein_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn prop_lcs_is_subsequence_of_both(a in word_strategy(), b in word_strategy()) {
        let lcs = longest_common_subsequence(&a, &b);
        prop_assert!(is_subsequence(&lcs, &a));
        prop_assert!(is_subsequence(&lcs, &b));
    }

    #[test]
    fn prop_substring_is_contained_in_both(a in word_strategy(), b in word_strategy()) {
        let common = longest_common_substring(&a, &b);
        prop_assert!(a.contains(&common));
        prop_assert!(b.contains(&common));
    }

    #[test]
    fn prop_aggregate_is_mean_of_breakdown(a in word_strategy(), b in word_strategy()) {
        let options = ComparisonOptions::all();
        let breakdown = similarity_breakdown(&a, &b, &options).unwrap();
        let mean = breakdown.iter().map(|(_, s)| s).sum::<f64>() / breakdown.len() as f64;
        let score = similarity_score(&a, &b, &options).unwrap();
        prop_assert!((score - mean).abs() < 1e-12);
    }

    #[test]
    fn prop_best_match_is_maximal_and_first(
        source in word_strategy(),
        targets in prop::collection::vec(word_strategy(), 1..8),
    ) {
        let options = ComparisonOptions::default();
        let results = matches(&source, Some(targets.as_slice()), &options).unwrap().unwrap();
        let best = best_match(&source, Some(targets.as_slice()), &options).unwrap().unwrap();

        let max = results.iter().map(|r| r.similarity).fold(f64::MIN, f64::max);
        let first_max = results.iter().position(|r| r.similarity == max).unwrap();
        prop_assert_eq!(best.index, first_max);
        prop_assert_eq!(best.similarity, max);
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|c| chars.any(|h| h == c))
}
