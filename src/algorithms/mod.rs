//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility.
//!
//! Strings are compared as sequences of UTF-16 code units. Every `&str`
//! function has a `*_units` counterpart that takes code-unit slices directly,
//! which is what the aggregator uses to avoid re-encoding per algorithm.

pub mod edit;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod normalize;
pub mod ratcliff;
pub mod set;
pub mod trivial;

pub use edit::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use ratcliff::*;
pub use set::*;

use normalize::code_units;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    /// Similarity over UTF-16 code units.
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64;

    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity_units(&code_units(a), &code_units(b))
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for distance algorithms.
///
/// Distances are non-negative and, unlike similarities, not normalized.
pub trait Distance: Send + Sync {
    fn distance_units(&self, a: &[u16], b: &[u16]) -> f64;

    fn distance(&self, a: &str, b: &str) -> f64 {
        self.distance_units(&code_units(a), &code_units(b))
    }
}

/// `1 - distance / max_len`, the normalization shared by Edit and Levenshtein.
#[inline]
pub(crate) fn normalize_by_longer(distance: f64, a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        1.0
    } else {
        1.0 - distance / max_len as f64
    }
}
