//! Token resolution.
//!
//! Picks the token of one child out of a repeating pattern.

use rows_core::SizeToken;

/// Resolve the token for the child at `index` from a repeating pattern.
///
/// An arrangement of N tokens repeats every N children. Returns `None` for an
/// empty pattern. A token at a valid index is returned verbatim, even if it
/// is the empty "inherit" token.
pub fn resolve_token<T>(index: usize, tokens: &[T]) -> Option<&T> {
    if tokens.is_empty() {
        return None;
    }

    // Index is already available.
    if let Some(token) = tokens.get(index) {
        return Some(token);
    }

    // A single token applies to every child.
    if tokens.len() == 1 {
        return tokens.first();
    }

    tokens.get(index % tokens.len())
}

/// [`resolve_token`] with a fallback for empty patterns.
pub fn resolve_token_or<'a>(
    index: usize,
    tokens: &'a [SizeToken],
    fallback: &'a SizeToken,
) -> &'a SizeToken {
    resolve_token(index, tokens).unwrap_or(fallback)
}
