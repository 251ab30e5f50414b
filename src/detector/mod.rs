//! Detector module - Token pattern matching over arbitrary text
//!
//! Scans a text blob for GitHub token shapes and returns a deduplicated
//! candidate set. Matching is pure: no I/O, no network, and it never fails -
//! malformed input simply yields no matches.

pub mod patterns;

use std::collections::BTreeSet;

pub use patterns::{TokenPattern, TOKEN_PATTERNS};

/// Find all GitHub token candidates in `text`.
///
/// Returns every distinct matching substring, deduplicated. A `BTreeSet`
/// keeps iteration order lexicographic, so identical input always produces
/// identical output across runs and processes.
///
/// Matches must be maximal: a token shape embedded inside a longer
/// alphanumeric run is not a leak candidate (e.g. a 37-character run that
/// happens to contain a valid 36-character body). The regexes cannot express
/// this without lookaround, so each raw hit is checked against its
/// surrounding bytes.
pub fn find_tokens(text: &str) -> BTreeSet<String> {
    let mut candidates = BTreeSet::new();

    for pattern in TOKEN_PATTERNS.iter() {
        for m in pattern.regex.find_iter(text) {
            if is_anchored(text, m.start(), m.end()) {
                candidates.insert(m.as_str().to_string());
            }
        }
    }

    candidates
}

/// A match is anchored when the characters immediately around it are not
/// alphanumeric (or the match touches the start/end of the text).
fn is_anchored(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();

    if start > 0 && bytes[start - 1].is_ascii_alphanumeric() {
        return false;
    }
    if end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
        return false;
    }

    true
}
