//! Set-based similarity coefficients
//!
//! Jaccard, Sørensen–Dice and Overlap all compare the *sets* of code units in
//! each string and differ only in how the intersection size is normalized.
//! Repeated characters count once: `"beauties"` has seven distinct units.
//!
//! Because all three share the same intersection and set sizes,
//! `dice = 2 * jaccard / (jaccard + 1)` holds exactly for every input.

use super::normalize::code_units;
use super::trivial::resolve_similarity;
use super::Similarity;
use ahash::AHashSet;

/// Intersection and set sizes for two code-unit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SetSizes {
    shared: usize,
    a_len: usize,
    b_len: usize,
}

fn set_sizes(a: &[u16], b: &[u16]) -> SetSizes {
    let a_set: AHashSet<u16> = a.iter().copied().collect();
    let b_set: AHashSet<u16> = b.iter().copied().collect();
    SetSizes {
        shared: a_set.intersection(&b_set).count(),
        a_len: a_set.len(),
        b_len: b_set.len(),
    }
}

// ============================================================================
// Calculators
// ============================================================================

/// Jaccard index calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard;

impl Similarity for Jaccard {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        jaccard_index_units(a, b)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Sørensen–Dice coefficient calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SorensenDice;

impl Similarity for SorensenDice {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        sorensen_dice_coefficient_units(a, b)
    }

    fn name(&self) -> &'static str {
        "sorensen_dice"
    }
}

/// Overlap (Szymkiewicz–Simpson) coefficient calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlap;

impl Similarity for Overlap {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        overlap_coefficient_units(a, b)
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Jaccard index: `|A ∩ B| / |A ∪ B|`
#[must_use]
pub fn jaccard_index(a: &str, b: &str) -> f64 {
    jaccard_index_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn jaccard_index_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    let o = set_sizes(a, b);
    o.shared as f64 / (o.a_len + o.b_len - o.shared) as f64
}

/// Sørensen–Dice coefficient: `2|A ∩ B| / (|A| + |B|)`
#[must_use]
pub fn sorensen_dice_coefficient(a: &str, b: &str) -> f64 {
    sorensen_dice_coefficient_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn sorensen_dice_coefficient_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    let o = set_sizes(a, b);
    (2 * o.shared) as f64 / (o.a_len + o.b_len) as f64
}

/// Overlap coefficient: `|A ∩ B| / min(|A|, |B|)`
#[must_use]
pub fn overlap_coefficient(a: &str, b: &str) -> f64 {
    overlap_coefficient_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn overlap_coefficient_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    let o = set_sizes(a, b);
    o.shared as f64 / o.a_len.min(o.b_len) as f64
}
