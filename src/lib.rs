//! fuzzycompare - String similarity scoring and matching
//!
//! Normalized similarity and distance scores between two strings, computed
//! by a family of independent algorithms, plus a layer that averages any
//! selection of them and picks the best match from a candidate list.
//!
//! # Features
//! - Edit based: Levenshtein, Hamming, composite edit distance
//! - Set based: Jaccard, Sørensen–Dice, Overlap
//! - Alignment based: Jaro, Jaro-Winkler, LCS, longest common substring,
//!   Ratcliff-Obershelp
//! - Aggregation over a [`ComparisonOptions`] selection
//! - Parallel candidate scoring for large lists
//!
//! Strings are compared as UTF-16 code units. Every similarity is in
//! `[0.0, 1.0]`; empty-vs-empty and equal inputs score 1, empty-vs-non-empty
//! scores 0.
//!
//! ```
//! use fuzzycompare::{best_match, levenshtein_distance, Algorithm, ComparisonOptions};
//!
//! assert_eq!(levenshtein_distance("beauties", "beautiful"), 3.0);
//!
//! let candidates = ["banana", "beautiful", "beast"];
//! let options = ComparisonOptions::default() | Algorithm::RatcliffObershelp;
//! let best = best_match("beauties", Some(&candidates[..]), &options).unwrap().unwrap();
//! assert_eq!(best.target, "beautiful");
//! ```

pub mod algorithms;
pub mod error;
pub mod matcher;
pub mod options;
pub mod score;

pub use algorithms::{
    edit_distance, edit_similarity, hamming_distance, hamming_similarity, jaccard_index,
    jaro_distance, jaro_similarity, jaro_winkler_distance, jaro_winkler_similarity,
    jaro_winkler_similarity_with, lcs_similarity, lcsubstring_similarity, levenshtein_distance,
    levenshtein_similarity, longest_common_subsequence, longest_common_substring,
    overlap_coefficient, ratcliff_obershelp_similarity, sorensen_dice_coefficient, Distance,
    Similarity,
};
pub use error::{Result, SimilarityError};
pub use matcher::{best_match, matches, MatchResult, PARALLEL_THRESHOLD};
pub use options::{Algorithm, ComparisonOptions};
pub use score::{
    approximately_equals, similarity_breakdown, similarity_score, DEFAULT_THRESHOLD,
    MIN_THRESHOLD,
};
