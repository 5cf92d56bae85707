//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.

use super::normalize::code_units;
use super::trivial::resolve_similarity;
use super::Similarity;
use smallvec::SmallVec;

/// Jaro scores at or below this value get no prefix boost.
pub const BOOST_THRESHOLD: f64 = 0.7;

/// Upper bound on the prefix scale; keeps Jaro-Winkler within `[0, 1]`.
pub const MAX_PREFIX_SCALE: f64 = 0.25;

/// Default prefix scale.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Default number of leading units considered for the prefix boost.
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        jaro_similarity_units(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_SCALE,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
///
/// # Parameters
/// - `prefix_weight`: How much to boost prefix matches (0.0-0.25, typically 0.1)
/// - `max_prefix_length`: Maximum prefix length to consider (at most 4)
#[derive(Debug, Clone, PartialEq)]
pub struct JaroWinkler {
    pub prefix_weight: f64,
    pub max_prefix_length: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self {
            prefix_weight: clamp_prefix_scale(config.prefix_weight),
            max_prefix_length: clamp_prefix_length(config.max_prefix_length),
        }
    }

    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            prefix_weight: self.prefix_weight,
            max_prefix_length: self.max_prefix_length,
        }
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        self.prefix_weight = clamp_prefix_scale(weight);
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = clamp_prefix_length(length);
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity_units(&self, a: &[u16], b: &[u16]) -> f64 {
        jaro_winkler_params(a, b, self.prefix_weight, self.max_prefix_length)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    jaro_similarity_units(&code_units(a), &code_units(b))
}

#[must_use]
pub fn jaro_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    if let Some(s) = resolve_similarity(a, b) {
        return s;
    }
    jaro_standard(a, b)
}

/// Calculate Jaro-Winkler similarity with the default prefix scale (0.1).
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_with(a, b, DEFAULT_PREFIX_SCALE)
}

/// Calculate Jaro-Winkler similarity with a custom prefix scale.
///
/// The scale is clamped to `[0.0, 0.25]` so the result stays in `[0.0, 1.0]`.
#[must_use]
pub fn jaro_winkler_similarity_with(a: &str, b: &str, prefix_scale: f64) -> f64 {
    jaro_winkler_similarity_units_with(&code_units(a), &code_units(b), prefix_scale)
}

#[must_use]
pub fn jaro_winkler_similarity_units(a: &[u16], b: &[u16]) -> f64 {
    jaro_winkler_params(a, b, DEFAULT_PREFIX_SCALE, DEFAULT_MAX_PREFIX_LENGTH)
}

#[must_use]
pub fn jaro_winkler_similarity_units_with(a: &[u16], b: &[u16], prefix_scale: f64) -> f64 {
    jaro_winkler_params(a, b, clamp_prefix_scale(prefix_scale), DEFAULT_MAX_PREFIX_LENGTH)
}

/// Distance version (1.0 - similarity)
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

#[must_use]
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}

// ============================================================================
// Internals
// ============================================================================

fn clamp_prefix_scale(prefix_scale: f64) -> f64 {
    if !(0.0..=MAX_PREFIX_SCALE).contains(&prefix_scale) {
        tracing::warn!(
            prefix_scale,
            max = MAX_PREFIX_SCALE,
            "prefix scale out of range, clamping"
        );
    }
    // NaN clamps to NaN; treat it as "no boost"
    if prefix_scale.is_nan() {
        0.0
    } else {
        prefix_scale.clamp(0.0, MAX_PREFIX_SCALE)
    }
}

// prefix_scale * prefix_len must not exceed 1 or the boost overshoots.
fn clamp_prefix_length(length: usize) -> usize {
    if length > DEFAULT_MAX_PREFIX_LENGTH {
        tracing::warn!(
            length,
            max = DEFAULT_MAX_PREFIX_LENGTH,
            "prefix length out of range, clamping"
        );
    }
    length.min(DEFAULT_MAX_PREFIX_LENGTH)
}

/// Jaro-Winkler with an already-clamped prefix scale and length.
fn jaro_winkler_params(a: &[u16], b: &[u16], prefix_scale: f64, max_prefix_len: usize) -> f64 {
    let jaro_sim = jaro_similarity_units(a, b);

    if jaro_sim <= BOOST_THRESHOLD || jaro_sim >= 1.0 {
        return jaro_sim;
    }

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(max_prefix_len)
        .take_while(|(ac, bc)| ac == bc)
        .count();

    jaro_sim + (prefix_len as f64 * prefix_scale * (1.0 - jaro_sim))
}

/// Windowed matching plus transposition count over non-empty inputs.
fn jaro_standard(a: &[u16], b: &[u16]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    // Match window
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matches[j] || a[i] != b[j] {
                continue;
            }
            a_matches[i] = true;
            b_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order
    let a_matched = a.iter().zip(&a_matches).filter(|(_, &m)| m).map(|(c, _)| c);
    let b_matched = b.iter().zip(&b_matches).filter(|(_, &m)| m).map(|(c, _)| c);
    let half_transpositions = a_matched.zip(b_matched).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = half_transpositions as f64 / 2.0;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "abc"), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
        assert_eq!(jaro_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_jaro_examples() {
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro_similarity("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro_similarity("DIXON", "DICKSONX"), 0.767));
        assert!(approx_eq(jaro_similarity("beauties", "beautiful"), 0.8056));
    }

    #[test]
    fn test_jaro_winkler_examples() {
        assert!(approx_eq(jaro_winkler_similarity("MARTHA", "MARHTA"), 0.961));
        assert!(approx_eq(jaro_winkler_similarity("DWAYNE", "DUANE"), 0.84));
        assert!(approx_eq(jaro_winkler_similarity("DIXON", "DICKSONX"), 0.813));
        assert!(approx_eq(jaro_winkler_similarity("beauties", "beautiful"), 0.8833));
    }

    #[test]
    fn test_jaro_winkler_boost() {
        let jaro = jaro_similarity("MARTHA", "MARHTA");
        let jaro_winkler = jaro_winkler_similarity("MARTHA", "MARHTA");
        assert!(jaro_winkler > jaro);
    }

    #[test]
    fn test_jaro_winkler_no_boost_below_threshold() {
        // "abcxyz" / "abcpqrstu" shares a prefix but Jaro stays under 0.7
        let jaro = jaro_similarity("abcxyz", "abcpqrstu");
        assert!(jaro <= BOOST_THRESHOLD);
        assert_eq!(jaro_winkler_similarity("abcxyz", "abcpqrstu"), jaro);
    }

    #[test]
    fn test_prefix_scale_is_clamped() {
        let clamped = jaro_winkler_similarity_with("MARTHA", "MARHTA", 0.9);
        let max = jaro_winkler_similarity_with("MARTHA", "MARHTA", MAX_PREFIX_SCALE);
        assert_eq!(clamped, max);
        assert!(clamped <= 1.0);

        let negative = jaro_winkler_similarity_with("MARTHA", "MARHTA", -1.0);
        assert_eq!(negative, jaro_similarity("MARTHA", "MARHTA"));
    }

    #[test]
    fn test_jaro_winkler_struct() {
        let jw = JaroWinkler::new().with_prefix_weight(0.2);
        assert_eq!(jw.prefix_weight, 0.2);
        assert!(jw.similarity("MARTHA", "MARHTA") > jaro_winkler_similarity("MARTHA", "MARHTA"));
        assert_eq!(JaroWinkler::default().config(), JaroWinklerConfig::default());
    }

    #[test]
    fn test_jaro_winkler_prefix_length_capped() {
        let jw = JaroWinkler::new().with_prefix_weight(0.25).with_max_prefix_length(10);
        assert_eq!(jw.max_prefix_length, DEFAULT_MAX_PREFIX_LENGTH);
        let s = jw.similarity("abcdefgh", "abcdefgx");
        assert!(s <= 1.0, "got {s}");

        let from_config = JaroWinkler::from_config(JaroWinklerConfig {
            prefix_weight: 0.25,
            max_prefix_length: 10,
        });
        assert_eq!(from_config, jw);
        assert!(from_config.similarity("abcdefgh", "abcdefgx") <= 1.0);
    }

    #[test]
    fn test_jaro_winkler_config_serde() {
        let config = JaroWinklerConfig {
            prefix_weight: 0.2,
            max_prefix_length: 3,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"prefix_weight":0.2,"max_prefix_length":3}"#);
        let back: JaroWinklerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(JaroWinkler::from_config(back).config(), config);
    }

    #[test]
    fn test_distances() {
        assert!(approx_eq(jaro_distance("MARTHA", "MARHTA"), 0.056));
        assert_eq!(jaro_winkler_distance("same", "same"), 0.0);
    }
}
