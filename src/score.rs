//! Multi-algorithm aggregation
//!
//! Runs every algorithm selected in a [`ComparisonOptions`] and averages the
//! results into one score.

use crate::algorithms::normalize::prepare_pair;
use crate::error::Result;
use crate::options::{Algorithm, ComparisonOptions};

/// Threshold used by callers that have no better value for
/// [`approximately_equals`].
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Thresholds are clamped to `[MIN_THRESHOLD, 1.0]`.
pub const MIN_THRESHOLD: f64 = 0.01;

/// Per-algorithm scores, in evaluation order.
///
/// # Errors
/// `NoAlgorithmSelected` if `options` selects no algorithm.
pub fn similarity_breakdown(
    source: &str,
    target: &str,
    options: &ComparisonOptions,
) -> Result<Vec<(Algorithm, f64)>> {
    options.ensure_selected()?;
    let (a, b) = prepare_pair(source, target, options.is_case_insensitive());
    Ok(options
        .algorithms()
        .map(|algorithm| (algorithm, algorithm.score_units(&a, &b)))
        .collect())
}

/// Arithmetic mean of the selected algorithms' similarities.
///
/// # Example
/// ```
/// use fuzzycompare::{similarity_score, ComparisonOptions};
///
/// let score = similarity_score("beauties", "beautiful", &ComparisonOptions::default()).unwrap();
/// assert!((score - 0.775).abs() < 1e-3);
/// ```
///
/// # Errors
/// `NoAlgorithmSelected` if `options` selects no algorithm.
pub fn similarity_score(source: &str, target: &str, options: &ComparisonOptions) -> Result<f64> {
    options.ensure_selected()?;
    let (a, b) = prepare_pair(source, target, options.is_case_insensitive());
    let score = mean_score_units(&a, &b, options);
    tracing::trace!(algorithms = options.len(), score, "similarity score");
    Ok(score)
}

/// Whether the aggregate score reaches `threshold`.
///
/// `threshold` is clamped to `[0.01, 1.0]`; see [`DEFAULT_THRESHOLD`].
///
/// # Errors
/// `NoAlgorithmSelected` if `options` selects no algorithm.
pub fn approximately_equals(
    source: &str,
    target: &str,
    options: &ComparisonOptions,
    threshold: f64,
) -> Result<bool> {
    let threshold = clamp_threshold(threshold);
    Ok(similarity_score(source, target, options)? >= threshold)
}

fn clamp_threshold(threshold: f64) -> f64 {
    if !(MIN_THRESHOLD..=1.0).contains(&threshold) {
        tracing::warn!(threshold, min = MIN_THRESHOLD, max = 1.0, "threshold out of range, clamping");
    }
    if threshold.is_nan() {
        MIN_THRESHOLD
    } else {
        threshold.clamp(MIN_THRESHOLD, 1.0)
    }
}

/// Mean over already prepared code units. `options` must be non-empty.
pub(crate) fn mean_score_units(a: &[u16], b: &[u16], options: &ComparisonOptions) -> f64 {
    let total: f64 = options.algorithms().map(|algorithm| algorithm.score_units(a, b)).sum();
    total / options.len() as f64
}
