//! Longest Common Subsequence (LCS) and Longest Common Substring
//!
//! The subsequence need not be contiguous; the substring must be.
//!
//! # Complexity
//! - Time: O(m*n) for every function here
//! - Space: O(n) for lengths and for `longest_common_substring` (rolling rows),
//!   O(m*n) for `longest_common_subsequence`, which needs the full table to
//!   backtrack

use super::normalize::{code_units, from_code_units, CodeUnits};
use super::trivial::resolve_similarity;
use super::Similarity;

/// LCS-based similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Lcs {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        lcs_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Longest-common-substring similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LcSubstring;

impl LcSubstring {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for LcSubstring {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        lcsubstring_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "lcsubstring"
    }
}

// ============================================================================
// Subsequence
// ============================================================================

/// Calculate the length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length_units(a: &[u16], b: &[u16]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return 0;
    }

    // Space-optimized: only keep current and previous row
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = 0;
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
            } else {
                curr[j] = prev[j].max(curr[j - 1]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Get one Longest Common Subsequence of `a` and `b`.
///
/// When both directions keep the maximal length, the backtrack steps back in
/// `b` first, so later units of `a` are preferred: `("ab", "ba")` yields `"b"`.
#[must_use]
pub fn longest_common_subsequence(a: &str, b: &str) -> String {
    from_code_units(&longest_common_subsequence_units(&code_units(a), &code_units(b)))
}

#[must_use]
pub fn longest_common_subsequence_units(a: &[u16], b: &[u16]) -> CodeUnits {
    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return CodeUnits::new();
    }

    // Full DP table needed for backtracking
    let mut dp: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Iterative backtrack from (m, n)
    let mut lcs = CodeUnits::with_capacity(dp[m][n]);
    let mut i = m;
    let mut j = n;

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            lcs.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs
}

/// LCS similarity: `len(LCS) / min(len(a), len(b))`
#[must_use]
pub fn lcs_similarity(a: &str, b: &str) -> f64 {
    lcs_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn lcs_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    lcs_length_units(a, b) as f64 / a.len().min(b.len()) as f64
}

// ============================================================================
// Substring
// ============================================================================

/// Length of the longest common (contiguous) substring.
#[must_use]
pub fn longest_common_substring_length_units(a: &[u16], b: &[u16]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return 0;
    }

    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];
    let mut max_len = 0;

    for i in 1..=m {
        curr[0] = 0;
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
                max_len = max_len.max(curr[j]);
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    max_len
}

/// Get the longest common substring.
///
/// The table is scanned row-major over `a`, then `b`; only a strictly longer
/// run replaces the tracked one, so the earliest maximal run wins ties. A new
/// maximum whose run begins where the tracked run begins extends it by the
/// current unit instead of re-copying it.
#[must_use]
pub fn longest_common_substring(a: &str, b: &str) -> String {
    from_code_units(&longest_common_substring_units(&code_units(a), &code_units(b)))
}

#[must_use]
pub fn longest_common_substring_units(a: &[u16], b: &[u16]) -> CodeUnits {
    let n = b.len();
    let mut tracked = CodeUnits::new();

    if a.is_empty() || n == 0 {
        return tracked;
    }

    let mut prev: Vec<usize> = vec![0; n];
    let mut curr: Vec<usize> = vec![0; n];
    let mut max_len = 0;
    let mut tracked_begin = 0;

    for (i, &ac) in a.iter().enumerate() {
        for j in 0..n {
            if ac != b[j] {
                curr[j] = 0;
                continue;
            }
            curr[j] = if j == 0 { 1 } else { prev[j - 1] + 1 };

            if curr[j] > max_len {
                max_len = curr[j];
                let begin = i + 1 - curr[j];
                if begin == tracked_begin {
                    tracked.push(ac);
                } else {
                    tracked_begin = begin;
                    tracked.clear();
                    tracked.extend_from_slice(&a[begin..=i]);
                }
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    tracked
}

/// Substring similarity: `len(longest common substring) / min(len(a), len(b))`
#[must_use]
pub fn lcsubstring_similarity(a: &str, b: &str) -> f64 {
    lcsubstring_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn lcsubstring_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    longest_common_substring_length_units(a, b) as f64 / a.len().min(b.len()) as f64
}
