//! Matching a source string against candidate lists

use crate::algorithms::normalize::{prepare, CodeUnits};
use crate::error::Result;
use crate::options::ComparisonOptions;
use crate::score::mean_score_units;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimum number of candidates for parallel scoring.
///
/// Below this, thread pool coordination costs more than the comparisons.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Result of comparing the source against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the candidate in the input list
    pub index: usize,
    /// Aggregate similarity (0.0-1.0)
    pub similarity: f64,
    pub source: String,
    pub target: String,
}

/// Score `source` against every candidate, preserving input order.
///
/// Returns `Ok(None)` when `targets` is absent or empty; there is nothing to
/// compare, which is distinct from "no good match".
///
/// # Errors
/// `NoAlgorithmSelected` if `options` selects no algorithm and there is at
/// least one candidate.
pub fn matches<T>(
    source: &str,
    targets: Option<&[T]>,
    options: &ComparisonOptions,
) -> Result<Option<Vec<MatchResult>>>
where
    T: AsRef<str> + Sync,
{
    let Some(targets) = targets.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    options.ensure_selected()?;

    let case_insensitive = options.is_case_insensitive();
    let source_units = prepare(source, case_insensitive);
    let parallel = targets.len() >= PARALLEL_THRESHOLD;
    tracing::debug!(candidates = targets.len(), parallel, "scoring candidates");

    let score = |(index, target): (usize, &T)| {
        let target = target.as_ref();
        let target_units: CodeUnits = prepare(target, case_insensitive);
        MatchResult {
            index,
            similarity: mean_score_units(&source_units, &target_units, options),
            source: source.to_string(),
            target: target.to_string(),
        }
    };

    // Indexed collect keeps input order on both paths
    let results: Vec<MatchResult> = if parallel {
        targets.par_iter().enumerate().map(score).collect()
    } else {
        targets.iter().enumerate().map(score).collect()
    };

    Ok(Some(results))
}

/// The candidate with the highest similarity.
///
/// Ties go to the earliest candidate. Returns `Ok(None)` under the same
/// conditions as [`matches`].
///
/// # Errors
/// `NoAlgorithmSelected` if `options` selects no algorithm and there is at
/// least one candidate.
pub fn best_match<T>(
    source: &str,
    targets: Option<&[T]>,
    options: &ComparisonOptions,
) -> Result<Option<MatchResult>>
where
    T: AsRef<str> + Sync,
{
    let Some(results) = matches(source, targets, options)? else {
        return Ok(None);
    };
    // Sequential left fold: replace only on a strictly higher score
    Ok(results
        .into_iter()
        .reduce(|best, next| if next.similarity > best.similarity { next } else { best }))
}
