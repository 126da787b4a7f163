//! Error types for the rows crates.
//!
//! Resolution and translation never fail: malformed tokens degrade to the
//! default sizing. Errors only come from validating author input and from
//! invalid configuration.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum RowsError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while validating an author-entered size token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Size token is empty")]
    Empty,

    #[error("Unknown keyword: {value}")]
    UnknownKeyword { value: String },

    #[error("Invalid fraction: {value}")]
    InvalidFraction { value: String },

    #[error("Fraction has a zero denominator: {value}")]
    ZeroDenominator { value: String },

    #[error("Fraction numerator is larger than its denominator: {value}")]
    ImproperFraction { value: String },

    #[error("Invalid percentage: {value}")]
    InvalidPercentage { value: String },

    #[error("Percentage must be greater than 0 and at most 100: {value}")]
    PercentageOutOfRange { value: String },

    #[error("Invalid token at position {position} of arrangement: {source}")]
    InArrangement {
        position: usize,
        #[source]
        source: Box<TokenError>,
    },
}

/// Errors in style options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("At least one breakpoint is required")]
    NoBreakpoints,

    #[error("Duplicate breakpoint: {name}")]
    DuplicateBreakpoint { name: String },

    #[error("Invalid breakpoint name '{name}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidBreakpoint { name: String },
}
