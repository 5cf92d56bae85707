//! Levenshtein distance implementation
//!
//! Unit-cost insertion, deletion and substitution over UTF-16 code units.
//!
//! Optimized with:
//! - Myers bit-parallel algorithm for patterns up to 64 code units
//! - Single-row DP fallback for longer patterns
//!
//! Both paths compute the classic recurrence
//! `d[i][j] = min(d[i-1][j] + 1, d[i][j-1] + 1, d[i-1][j-1] + cost)`
//! with `d[i][0] = i` and `d[0][j] = j`.

use super::normalize::code_units;
use super::trivial::{resolve_distance, resolve_similarity};
use super::{normalize_by_longer, Distance, Similarity};
use ahash::AHashMap;
use smallvec::SmallVec;

/// Maximum pattern length for Myers bit-parallel algorithm (64 bits per block)
const MYERS_BLOCK_SIZE: usize = 64;

// ============================================================================
// Myers Bit-Parallel Algorithm
// ============================================================================

/// Myers bit-parallel Levenshtein distance for patterns up to 64 code units.
///
/// Runs in O(n) word operations when the pattern fits in a single 64-bit word.
///
/// Based on: Myers, G. (1999). "A fast bit-vector algorithm for approximate string matching"
#[inline]
fn myers_64(pattern: &[u16], text: &[u16]) -> usize {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    if m > MYERS_BLOCK_SIZE {
        return dp_distance(pattern, text);
    }

    // Peq[c] has bit i set if pattern[i] == c
    let mut peq: AHashMap<u16, u64> = AHashMap::with_capacity(m.min(26));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut score = m;

    let mask = 1u64 << (m - 1);

    for &tc in text {
        let eq = peq.get(&tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if (hp & mask) != 0 {
            score += 1;
        } else if (hn & mask) != 0 {
            score -= 1;
        }

        // First row is 0,1,2,... so the shifted-in horizontal delta is +1
        let hp_shifted = (hp << 1) | 1;
        let hn_shifted = hn << 1;

        vp = hn_shifted | !(xv | hp_shifted);
        vn = hp_shifted & xv;
    }

    score
}

/// Single-row DP distance (fallback for long patterns)
#[inline]
fn dp_distance(a: &[u16], b: &[u16]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Shorter sequence on the column axis
    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = usize::from(sc != target[j]);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Levenshtein {
    fn distance_units(&self, a: &[u16], b: &[u16]) -> f64 {
        levenshtein_distance_units(a, b)
    }
}

impl Similarity for Levenshtein {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        levenshtein_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Calculate the Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use fuzzycompare::levenshtein_distance;
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3.0);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> f64 {
    levenshtein_distance_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn levenshtein_distance_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(d) = resolve_distance(a, b) {
        return d;
    }
    if a.len() <= MYERS_BLOCK_SIZE {
        myers_64(a, b) as f64
    } else if b.len() <= MYERS_BLOCK_SIZE {
        // Distance is symmetric; put the short side in the bit vector
        myers_64(b, a) as f64
    } else {
        dp_distance(a, b) as f64
    }
}

/// Normalized Levenshtein similarity: `1 - distance / max(len(a), len(b))`.
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    levenshtein_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn levenshtein_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    normalize_by_longer(levenshtein_distance_units(a, b), a.len(), b.len())
}
