//! Arrangements and resolved arrangements.

use crate::types::{Breakpoint, SizeToken};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// The ordered size tokens an author set for one breakpoint of one container.
///
/// An empty arrangement means "no override at this breakpoint".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Arrangement {
    tokens: SmallVec<[SizeToken; 4]>,
}

impl Arrangement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn push(&mut self, token: impl Into<SizeToken>) {
        self.tokens.push(token.into());
    }

    /// The tokens in authored order.
    pub fn tokens(&self) -> &[SizeToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T: Into<SizeToken>> FromIterator<T> for Arrangement {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Arrangements of one container, keyed by breakpoint in priority order
/// (widest first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArrangementSet {
    arrangements: IndexMap<Breakpoint, Arrangement>,
}

impl ArrangementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the arrangement for a breakpoint.
    ///
    /// A new breakpoint is appended to the end of the priority order; a
    /// replaced one keeps its position.
    pub fn insert(&mut self, breakpoint: impl Into<Breakpoint>, arrangement: Arrangement) {
        self.arrangements.insert(breakpoint.into(), arrangement);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, breakpoint: impl Into<Breakpoint>, arrangement: Arrangement) -> Self {
        self.insert(breakpoint, arrangement);
        self
    }

    /// Get the arrangement for a breakpoint.
    pub fn get(&self, breakpoint: &str) -> Option<&Arrangement> {
        self.arrangements.get(breakpoint)
    }

    /// Tokens for a breakpoint; unknown breakpoints have none.
    pub fn tokens(&self, breakpoint: &str) -> &[SizeToken] {
        self.get(breakpoint).map(Arrangement::tokens).unwrap_or(&[])
    }

    /// Iterate over breakpoints in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&Breakpoint, &Arrangement)> {
        self.arrangements.iter()
    }

    /// Breakpoint names in priority order.
    pub fn breakpoints(&self) -> impl Iterator<Item = &Breakpoint> {
        self.arrangements.keys()
    }

    /// Reorder to the given breakpoint order.
    ///
    /// Breakpoints in `order` that have no arrangement get an empty one;
    /// breakpoints not named in `order` are dropped.
    pub fn ordered_by(&self, order: &[Breakpoint]) -> ArrangementSet {
        let arrangements = order
            .iter()
            .map(|bp| (bp.clone(), self.get(bp.as_str()).cloned().unwrap_or_default()))
            .collect();
        ArrangementSet { arrangements }
    }

    pub fn len(&self) -> usize {
        self.arrangements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }
}

impl<B: Into<Breakpoint>> FromIterator<(B, Arrangement)> for ArrangementSet {
    fn from_iter<I: IntoIterator<Item = (B, Arrangement)>>(iter: I) -> Self {
        Self {
            arrangements: iter.into_iter().map(|(bp, a)| (bp.into(), a)).collect(),
        }
    }
}

/// The effective size token of one child at every breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResolvedArrangement {
    tokens: IndexMap<Breakpoint, SizeToken>,
}

impl ResolvedArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, breakpoint: Breakpoint, token: SizeToken) {
        self.tokens.insert(breakpoint, token);
    }

    /// Get the resolved token for a breakpoint.
    pub fn get(&self, breakpoint: &str) -> Option<&SizeToken> {
        self.tokens.get(breakpoint)
    }

    /// Iterate in breakpoint priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&Breakpoint, &SizeToken)> {
        self.tokens.iter()
    }

    /// Mutable access to the tokens in priority order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut SizeToken> {
        self.tokens.values_mut()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<(Breakpoint, SizeToken)> for ResolvedArrangement {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, SizeToken)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
