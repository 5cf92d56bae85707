//! String preprocessing utilities
//!
//! Converts strings to the UTF-16 code units every algorithm operates on,
//! optionally applying the uppercase transform used for case-insensitive
//! comparison.

use smallvec::SmallVec;

/// Code-unit buffer. Inline for typical short strings, heap beyond 64 units.
pub type CodeUnits = SmallVec<[u16; 64]>;

/// Encode a string as UTF-16 code units.
#[inline]
#[must_use]
pub fn code_units(s: &str) -> CodeUnits {
    s.encode_utf16().collect()
}

/// Encode a string, upper-casing it first when `case_insensitive` is set.
///
/// Upper-casing is a simple per-character mapping. A character whose
/// uppercase form expands (`ß` to `SS`) or changes its code-unit width is
/// kept as is, so the encoded length never changes.
#[must_use]
pub fn prepare(s: &str, case_insensitive: bool) -> CodeUnits {
    if !case_insensitive {
        return code_units(s);
    }
    let mut units = CodeUnits::with_capacity(s.len());
    let mut buf = [0u16; 2];
    for c in s.chars() {
        units.extend_from_slice(simple_uppercase(c).encode_utf16(&mut buf));
    }
    units
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.len_utf16() == c.len_utf16() => u,
        _ => c,
    }
}

/// Encode both strings with the same case policy.
#[must_use]
pub fn prepare_pair(a: &str, b: &str, case_insensitive: bool) -> (CodeUnits, CodeUnits) {
    (prepare(a, case_insensitive), prepare(b, case_insensitive))
}

/// Decode code units back into a `String`.
///
/// Results that split a surrogate pair decode to U+FFFD.
#[must_use]
pub fn from_code_units(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
