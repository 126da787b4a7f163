//! Per-breakpoint resolution with cross-breakpoint fallback.

use rows_core::{ArrangementSet, ResolvedArrangement, SizeToken};
use tracing::trace;

use crate::tokens::resolve_token_or;

/// Resolve the size token of the child at `index` for every breakpoint.
///
/// Breakpoints are visited in the set's priority order. Empty results are
/// then filled by [`apply_fallback`], so the returned mapping has no empty
/// entries unless no breakpoint resolved to anything.
pub fn resolve_arrangement(index: usize, arrangements: &ArrangementSet) -> ResolvedArrangement {
    let empty = SizeToken::empty();

    let mut resolved: ResolvedArrangement = arrangements
        .iter()
        .map(|(breakpoint, arrangement)| {
            let token = resolve_token_or(index, arrangement.tokens(), &empty);
            (breakpoint.clone(), token.clone())
        })
        .collect();

    apply_fallback(&mut resolved);

    trace!(index, breakpoints = resolved.len(), "resolved arrangement");
    resolved
}

/// Resolve every child of a container with `count` children.
pub fn resolve_children(count: usize, arrangements: &ArrangementSet) -> Vec<ResolvedArrangement> {
    (0..count)
        .map(|index| resolve_arrangement(index, arrangements))
        .collect()
}

/// Replace each empty entry with the nearest earlier non-empty entry.
///
/// The order is circular: an empty leading breakpoint inherits from the last
/// breakpoint that has a value. If every entry is empty nothing changes.
pub fn apply_fallback(resolved: &mut ResolvedArrangement) {
    let mut slots: Vec<&mut SizeToken> = resolved.values_mut().collect();
    let len = slots.len();

    let Some(start) = slots.iter().position(|token| !token.is_empty()) else {
        return;
    };

    let mut inherited: SizeToken = (*slots[start]).clone();
    for offset in 1..len {
        let slot = &mut *slots[(start + offset) % len];
        if slot.is_empty() {
            *slot = inherited.clone();
        } else {
            inherited = slot.clone();
        }
    }
}
