//! Trivial-case resolution shared by every algorithm.
//!
//! Each metric asks the resolver first and only runs its own logic when the
//! resolver has no opinion, i.e. both inputs are non-empty and not equal.

/// Resolve a similarity without running an algorithm.
///
/// - both empty: `1.0`
/// - exactly one empty: `0.0`
/// - equal: `1.0`
/// - otherwise `None`
#[inline]
#[must_use]
pub fn resolve_similarity(a: &[u16], b: &[u16]) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) if a == b => Some(1.0),
        (false, false) => None,
    }
}

/// Resolve a distance without running an algorithm.
///
/// - both empty: `0.0`
/// - exactly one empty: the length of the other
/// - otherwise `None`
#[inline]
#[must_use]
pub fn resolve_distance(a: &[u16], b: &[u16]) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(0.0),
        (true, false) => Some(b.len() as f64),
        (false, true) => Some(a.len() as f64),
        (false, false) => None,
    }
}
