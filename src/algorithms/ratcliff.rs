//! Ratcliff-Obershelp similarity
//!
//! Repeatedly takes the longest common substring of what remains of both
//! strings, removes every occurrence of it from both, and sums the lengths
//! taken. The score is `2 * total / (len(a) + len(b))`.
//!
//! Runs as a loop over two shrinking buffers; each round removes at least
//! one unit from each side, so there are at most `min(len(a), len(b))` rounds.

use super::lcs::longest_common_substring_units;
use super::normalize::{code_units, CodeUnits};
use super::trivial::resolve_similarity;
use super::Similarity;

/// Ratcliff-Obershelp similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatcliffObershelp;

impl RatcliffObershelp {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for RatcliffObershelp {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        ratcliff_obershelp_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "ratcliff_obershelp"
    }
}

#[must_use]
pub fn ratcliff_obershelp_similarity(a: &str, b: &str) -> f64 {
    ratcliff_obershelp_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn ratcliff_obershelp_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }

    let mut left = CodeUnits::from_slice(a);
    let mut right = CodeUnits::from_slice(b);
    let mut matched = 0usize;

    loop {
        let common = longest_common_substring_units(&left, &right);
        if common.is_empty() {
            break;
        }
        matched += common.len();
        left = remove_all(&left, &common);
        right = remove_all(&right, &common);
    }

    (2 * matched) as f64 / (a.len() + b.len()) as f64
}

/// Remove every non-overlapping occurrence of `needle`, scanning left to right.
fn remove_all(haystack: &[u16], needle: &[u16]) -> CodeUnits {
    let mut out = CodeUnits::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}
