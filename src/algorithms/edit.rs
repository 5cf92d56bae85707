//! Composite edit distance
//!
//! Positional mismatches over the common-length prefix plus the absolute
//! length difference. Unlike Levenshtein this never searches for an optimal
//! alignment, so it is linear-time and only rewards edits that keep prefixes
//! in place (`"abc"` vs `"abcd"` is 1, `"abc"` vs `"xabc"` is 4).

use super::hamming::mismatches;
use super::normalize::code_units;
use super::trivial::{resolve_distance, resolve_similarity};
use super::{normalize_by_longer, Distance, Similarity};

/// Composite edit distance calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edit;

impl Edit {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Edit {
    fn distance_units(&self, a: &[u16], b: &[u16]) -> f64 {
        edit_distance_units(a, b)
    }
}

impl Similarity for Edit {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        edit_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "edit"
    }
}

#[must_use]
pub fn edit_distance(a: &str, b: &str) -> f64 {
    edit_distance_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn edit_distance_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(d) = resolve_distance(a, b) {
        return d;
    }
    // zip stops at the shorter side
    (mismatches(a, b) + a.len().abs_diff(b.len())) as f64
}

/// `1 - edit_distance / max(len(a), len(b))`
#[must_use]
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    edit_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn edit_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    normalize_by_longer(edit_distance_units(a, b), a.len(), b.len())
}
