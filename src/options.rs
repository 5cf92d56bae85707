//! Comparison options
//!
//! `ComparisonOptions` selects which algorithms the aggregator runs and
//! whether inputs are upper-cased first. Selections combine with `|`:
//!
//! ```
//! use fuzzycompare::{Algorithm, ComparisonOptions};
//!
//! let options = Algorithm::Jaro | Algorithm::Levenshtein;
//! assert!(options.contains(Algorithm::Jaro));
//!
//! let parsed: ComparisonOptions = "jaro, levenshtein".parse().unwrap();
//! assert_eq!(parsed, options);
//! ```

use crate::algorithms::{
    hamming_similarity_units, jaccard_index_units, jaro_similarity_units,
    jaro_winkler_similarity_units, lcs_similarity_units, lcsubstring_similarity_units,
    levenshtein_similarity_units, overlap_coefficient_units, ratcliff_obershelp_similarity_units,
    sorensen_dice_coefficient_units, Similarity,
};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// A selectable comparison algorithm.
///
/// Declaration order is the order in which the aggregator evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Hamming,
    Jaccard,
    Jaro,
    JaroWinkler,
    Levenshtein,
    LongestCommonSubsequence,
    LongestCommonSubstring,
    Overlap,
    RatcliffObershelp,
    SorensenDice,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Hamming,
        Algorithm::Jaccard,
        Algorithm::Jaro,
        Algorithm::JaroWinkler,
        Algorithm::Levenshtein,
        Algorithm::LongestCommonSubsequence,
        Algorithm::LongestCommonSubstring,
        Algorithm::Overlap,
        Algorithm::RatcliffObershelp,
        Algorithm::SorensenDice,
    ];

    /// Canonical snake_case name, as used by serde and `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Hamming => "hamming",
            Algorithm::Jaccard => "jaccard",
            Algorithm::Jaro => "jaro",
            Algorithm::JaroWinkler => "jaro_winkler",
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::LongestCommonSubsequence => "longest_common_subsequence",
            Algorithm::LongestCommonSubstring => "longest_common_substring",
            Algorithm::Overlap => "overlap",
            Algorithm::RatcliffObershelp => "ratcliff_obershelp",
            Algorithm::SorensenDice => "sorensen_dice",
        }
    }

    /// Score two code-unit sequences with this algorithm.
    #[must_use]
    pub fn score_units(self, a: &[u16], b: &[u16]) -> f64 {
        match self {
            Algorithm::Hamming => hamming_similarity_units(a, b),
            Algorithm::Jaccard => jaccard_index_units(a, b),
            Algorithm::Jaro => jaro_similarity_units(a, b),
            Algorithm::JaroWinkler => jaro_winkler_similarity_units(a, b),
            Algorithm::Levenshtein => levenshtein_similarity_units(a, b),
            Algorithm::LongestCommonSubsequence => lcs_similarity_units(a, b),
            Algorithm::LongestCommonSubstring => lcsubstring_similarity_units(a, b),
            Algorithm::Overlap => overlap_coefficient_units(a, b),
            Algorithm::RatcliffObershelp => ratcliff_obershelp_similarity_units(a, b),
            Algorithm::SorensenDice => sorensen_dice_coefficient_units(a, b),
        }
    }
}

impl Similarity for Algorithm {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        self.score_units(a, b)
    }

    fn name(&self) -> &'static str {
        Algorithm::name(*self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Algorithm::name(*self))
    }
}

impl FromStr for Algorithm {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "hamming" => Ok(Algorithm::Hamming),
            "jaccard" => Ok(Algorithm::Jaccard),
            "jaro" => Ok(Algorithm::Jaro),
            "jaro_winkler" | "jarowinkler" | "jw" => Ok(Algorithm::JaroWinkler),
            "levenshtein" | "lev" => Ok(Algorithm::Levenshtein),
            "longest_common_subsequence" | "lcs" => Ok(Algorithm::LongestCommonSubsequence),
            "longest_common_substring" | "lcsubstring" | "lcstr" => {
                Ok(Algorithm::LongestCommonSubstring)
            }
            "overlap" => Ok(Algorithm::Overlap),
            "ratcliff_obershelp" | "ratcliff" | "ro" => Ok(Algorithm::RatcliffObershelp),
            "sorensen_dice" | "sorensen" | "dice" => Ok(Algorithm::SorensenDice),
            _ => Err(SimilarityError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

impl BitOr for Algorithm {
    type Output = ComparisonOptions;

    fn bitor(self, rhs: Algorithm) -> ComparisonOptions {
        ComparisonOptions::new().with(self).with(rhs)
    }
}

/// Algorithm selection plus case policy for the aggregator.
///
/// `Default` is Jaro-Winkler and Levenshtein, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOptions {
    algorithms: BTreeSet<Algorithm>,
    #[serde(default)]
    case_insensitive: bool,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Algorithm::JaroWinkler | Algorithm::Levenshtein
    }
}

impl ComparisonOptions {
    /// Empty selection. Must be extended before it is passed to the aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithms: BTreeSet::new(),
            case_insensitive: false,
        }
    }

    /// Every algorithm, case-sensitive.
    #[must_use]
    pub fn all() -> Self {
        Self {
            algorithms: Algorithm::ALL.into_iter().collect(),
            case_insensitive: false,
        }
    }

    #[must_use]
    pub fn with(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.insert(algorithm);
        self
    }

    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn insert(&mut self, algorithm: Algorithm) -> bool {
        self.algorithms.insert(algorithm)
    }

    pub fn remove(&mut self, algorithm: Algorithm) -> bool {
        self.algorithms.remove(&algorithm)
    }

    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.algorithms.contains(&algorithm)
    }

    /// True when no algorithm is selected. The case flag does not count.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Selected algorithms in evaluation order.
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.algorithms.iter().copied()
    }

    /// Fail with `NoAlgorithmSelected` if nothing is selected.
    pub fn ensure_selected(&self) -> Result<()> {
        if self.is_empty() {
            Err(SimilarityError::NoAlgorithmSelected)
        } else {
            Ok(())
        }
    }
}

impl From<Algorithm> for ComparisonOptions {
    fn from(algorithm: Algorithm) -> Self {
        ComparisonOptions::new().with(algorithm)
    }
}

impl BitOr for ComparisonOptions {
    type Output = ComparisonOptions;

    fn bitor(mut self, rhs: ComparisonOptions) -> ComparisonOptions {
        self.algorithms.extend(rhs.algorithms);
        self.case_insensitive |= rhs.case_insensitive;
        self
    }
}

impl BitOr<Algorithm> for ComparisonOptions {
    type Output = ComparisonOptions;

    fn bitor(self, rhs: Algorithm) -> ComparisonOptions {
        self.with(rhs)
    }
}

impl fmt::Display for ComparisonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.algorithms().map(Algorithm::name).collect();
        if self.case_insensitive {
            names.push("case_insensitive");
        }
        f.write_str(&names.join(","))
    }
}

/// Parse a list of algorithm names separated by commas, `|`, `+` or
/// whitespace. `default` and `all` expand to the presets, and
/// `case_insensitive` (or `ignore_case`) sets the case flag.
impl FromStr for ComparisonOptions {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        let mut options = ComparisonOptions::new();
        for token in s
            .split(|c: char| c == ',' || c == '|' || c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            match token.to_lowercase().replace('-', "_").as_str() {
                "default" => options = options | ComparisonOptions::default(),
                "all" => options = options | ComparisonOptions::all(),
                "case_insensitive" | "ignore_case" => options.case_insensitive = true,
                _ => {
                    options.insert(token.parse()?);
                }
            }
        }
        Ok(options)
    }
}
