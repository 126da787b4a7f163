//! Size token classification.

use rows_core::{KeywordRole, Vocabulary};

use crate::lexer::{full_fraction, full_percentage};

/// The recognized shape of a size token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// The empty "inherit" token.
    Empty,
    /// A keyword of the vocabulary in use.
    Keyword(KeywordRole),
    /// `numerator/denominator`. The denominator may be zero here; callers
    /// decide what that means.
    Fraction { numerator: u64, denominator: u64 },
    /// A fraction whose digits do not fit in `u64`, with approximate parts.
    /// The denominator is zero only when its digits are all zeros.
    LargeFraction { numerator: f64, denominator: f64 },
    /// A percentage. `explicit` is false for a bare number such as `50`.
    Percentage { value: f64, explicit: bool },
    /// Anything else.
    Malformed,
}

/// Classify a token.
///
/// Shapes are tried in priority order: empty, keyword, fraction, percentage.
/// Nothing is trimmed; `" 50%"` is malformed.
pub fn classify(token: &str, vocabulary: &Vocabulary) -> TokenKind {
    if token.is_empty() {
        return TokenKind::Empty;
    }

    if let Some(role) = vocabulary.role(token) {
        return TokenKind::Keyword(role);
    }

    if let Some((numerator, denominator)) = full_fraction(token) {
        return match (numerator.parse::<u64>(), denominator.parse::<u64>()) {
            (Ok(numerator), Ok(denominator)) => TokenKind::Fraction { numerator, denominator },
            _ => TokenKind::LargeFraction {
                numerator: approximate(numerator),
                denominator: approximate(denominator),
            },
        };
    }

    if let Some((value, explicit)) = full_percentage(token) {
        if value.is_finite() {
            return TokenKind::Percentage { value, explicit };
        }
    }

    TokenKind::Malformed
}

fn approximate(digits: &str) -> f64 {
    digits.parse::<f64>().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_shapes() {
        let vocab = Vocabulary::rows();
        assert_eq!(classify("", &vocab), TokenKind::Empty);
        assert_eq!(classify("fill", &vocab), TokenKind::Keyword(KeywordRole::Fill));
        assert_eq!(
            classify("2/3", &vocab),
            TokenKind::Fraction { numerator: 2, denominator: 3 }
        );
        assert_eq!(
            classify("33.33%", &vocab),
            TokenKind::Percentage { value: 33.33, explicit: true }
        );
        assert_eq!(
            classify("50", &vocab),
            TokenKind::Percentage { value: 50.0, explicit: false }
        );
        assert_eq!(classify("wide", &vocab), TokenKind::Malformed);
    }

    #[test]
    fn test_keyword_depends_on_vocabulary() {
        assert_eq!(classify("full", &Vocabulary::empty()), TokenKind::Malformed);
        assert_eq!(
            classify("full", &Vocabulary::columns()),
            TokenKind::Keyword(KeywordRole::Basis)
        );
    }

    #[test]
    fn test_zero_is_not_empty() {
        assert_eq!(
            classify("0", &Vocabulary::rows()),
            TokenKind::Percentage { value: 0.0, explicit: false }
        );
    }

    #[test]
    fn test_whitespace_is_malformed() {
        let vocab = Vocabulary::rows();
        assert_eq!(classify(" ", &vocab), TokenKind::Malformed);
        assert_eq!(classify(" 50%", &vocab), TokenKind::Malformed);
        assert_eq!(classify("fill ", &vocab), TokenKind::Malformed);
    }

    #[test]
    fn test_zero_denominator_is_still_a_fraction() {
        assert_eq!(
            classify("1/0", &Vocabulary::rows()),
            TokenKind::Fraction { numerator: 1, denominator: 0 }
        );
    }

    #[test]
    fn test_long_digits_are_still_a_fraction() {
        let vocab = Vocabulary::rows();
        assert_eq!(
            classify("18446744073709551616/3", &vocab),
            TokenKind::LargeFraction {
                numerator: 18446744073709551616.0,
                denominator: 3.0
            }
        );
        assert_eq!(
            classify("18446744073709551615/3", &vocab),
            TokenKind::Fraction { numerator: u64::MAX, denominator: 3 }
        );
        assert!(matches!(
            classify("99999999999999999999999/0", &vocab),
            TokenKind::LargeFraction { denominator, .. } if denominator == 0.0
        ));
    }
}
