//! Hamming distance implementation
//!
//! Counts positions where code units differ.
//!
//! # Important: Length Mismatch Behavior
//!
//! Hamming distance is mathematically undefined for strings of different
//! lengths. This module does not fail on them; it treats them as maximally
//! dissimilar instead:
//!
//! - **`hamming_distance`** returns `max(len(a), len(b))` for unequal lengths.
//! - **`hamming_similarity`** returns `0.0` for unequal lengths, whatever the
//!   content (`"abc"` vs `"abcd"` scores zero).
//!
//! This is a deliberate policy, not a defect. Use Levenshtein or the
//! composite edit distance when strings of different lengths should still be
//! comparable.
//!
//! # Complexity
//! - Time: O(n) where n is the string length
//! - Space: O(1) beyond the encoded inputs

use super::trivial::{resolve_distance, resolve_similarity};
use super::{Distance, Similarity};
use super::normalize::code_units;

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Hamming {
    fn distance_units(&self, a: &[u16], b: &[u16]) -> f64 {
        hamming_distance_units(a, b)
    }
}

/// **Note**: Unequal-length strings return `0.0` (no similarity).
impl Similarity for Hamming {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        hamming_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Calculate Hamming distance between two strings.
/// Returns `max(len(a), len(b))` if the strings have different lengths.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> f64 {
    hamming_distance_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn hamming_distance_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(d) = resolve_distance(a, b) {
        return d;
    }
    if a.len() != b.len() {
        return a.len().max(b.len()) as f64;
    }
    mismatches(a, b) as f64
}

/// Normalized Hamming similarity (0.0 to 1.0).
/// Returns `0.0` for strings of different lengths.
#[must_use]
pub fn hamming_similarity(a: &str, b: &str) -> f64 {
    hamming_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn hamming_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    if a.len() != b.len() {
        return 0.0;
    }
    1.0 - hamming_distance_units(a, b) / a.len() as f64
}

/// Position-wise mismatch count over the common prefix of `a` and `b`.
#[inline]
pub(crate) fn mismatches(a: &[u16], b: &[u16]) -> usize {
    a.iter().zip(b.iter()).filter(|(ac, bc)| ac != bc).count()
}
