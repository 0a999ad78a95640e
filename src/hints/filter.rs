//! Subsequence filtering of candidate names
//!
//! The filter is the fuzzy kind: query characters must appear in the
//! candidate name in order but not necessarily contiguously, so `"bgc"`
//! matches `"bg-color"`. It is neither a prefix nor a substring test.

use tracing::trace;

use super::extract::Declaration;

/// Returns true when every character of `query` occurs in `name` in
/// order, not necessarily contiguously. Comparison is case-insensitive.
pub fn is_subsequence(query: &str, name: &str) -> bool {
    let name: Vec<char> = name.to_lowercase().chars().collect();
    let mut from = 0;
    for ch in query.to_lowercase().chars() {
        match name[from..].iter().position(|&c| c == ch) {
            Some(offset) => from += offset + 1,
            None => return false,
        }
    }
    true
}

/// Keeps the declarations whose name contains the typed text as a
/// subsequence.
///
/// The typed text begins with the sigil by construction and the sigil
/// cannot occur inside a name, so one leading sigil is stripped before
/// matching.
pub fn filter_candidates(
    typed_since_start: &str,
    sigil: char,
    candidates: Vec<Declaration>,
) -> Vec<Declaration> {
    let query = typed_since_start
        .strip_prefix(sigil)
        .unwrap_or(typed_since_start);
    let kept: Vec<Declaration> = candidates
        .into_iter()
        .filter(|declaration| is_subsequence(query, &declaration.name))
        .collect();
    trace!("query {:?} kept {} candidate(s)", query, kept.len());
    kept
}
