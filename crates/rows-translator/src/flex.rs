//! Flex shorthand values.

use std::fmt;

use rows_core::{KeywordRole, Vocabulary};
use rows_parser::{classify, TokenKind};

/// The basis part of a flex shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexBasis {
    /// No basis written; the shorthand is the grow factor alone.
    Omitted,
    /// `0`
    Zero,
    /// `0%`
    ZeroPercent,
    /// `auto`
    Content,
    /// `var(--flex-basis)`, computed from the separate size custom property.
    Variable,
}

impl FlexBasis {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexBasis::Omitted => "",
            FlexBasis::Zero => "0",
            FlexBasis::ZeroPercent => "0%",
            FlexBasis::Content => "auto",
            FlexBasis::Variable => "var(--flex-basis)",
        }
    }
}

/// A CSS `flex` shorthand: grow, shrink, basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexShorthand {
    pub grow: u8,
    pub shrink: u8,
    pub basis: FlexBasis,
}

impl FlexShorthand {
    /// `1`: equal share of the free space.
    pub const EQUAL: Self = Self { grow: 1, shrink: 1, basis: FlexBasis::Omitted };
    /// `0 1 var(--flex-basis)`: sized by the size custom property.
    pub const BASIS: Self = Self { grow: 0, shrink: 1, basis: FlexBasis::Variable };
    /// `0 1 auto`: shrink to content.
    pub const FIT: Self = Self { grow: 0, shrink: 1, basis: FlexBasis::Content };
    /// `1 0 0`: grow to fill.
    pub const FILL: Self = Self { grow: 1, shrink: 0, basis: FlexBasis::Zero };
    /// `0 1 0%`
    pub const ZERO_BASIS: Self = Self { grow: 0, shrink: 1, basis: FlexBasis::ZeroPercent };

    /// The shorthand for a keyword role.
    pub fn for_role(role: KeywordRole) -> Self {
        match role {
            KeywordRole::Equal => Self::EQUAL,
            KeywordRole::Basis => Self::BASIS,
            KeywordRole::Fit => Self::FIT,
            KeywordRole::Fill => Self::FILL,
            KeywordRole::ZeroBasis => Self::ZERO_BASIS,
        }
    }

    /// Whether the element size depends on the size custom property.
    pub fn uses_basis_variable(&self) -> bool {
        self.basis == FlexBasis::Variable
    }
}

impl Default for FlexShorthand {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl fmt::Display for FlexShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.basis {
            FlexBasis::Omitted => write!(f, "{}", self.grow),
            basis => write!(f, "{} {} {}", self.grow, self.shrink, basis.as_css()),
        }
    }
}

/// Translate a size token into a flex shorthand.
///
/// Empty tokens share the free space equally. Keywords follow their role in
/// `vocabulary`. Every other token, malformed ones included, defers its
/// basis to `var(--flex-basis)`.
pub fn token_to_flex(token: &str, vocabulary: &Vocabulary) -> FlexShorthand {
    match classify(token, vocabulary) {
        TokenKind::Empty => FlexShorthand::EQUAL,
        TokenKind::Keyword(role) => FlexShorthand::for_role(role),
        TokenKind::Fraction { .. }
        | TokenKind::LargeFraction { .. }
        | TokenKind::Percentage { .. }
        | TokenKind::Malformed => FlexShorthand::BASIS,
    }
}
