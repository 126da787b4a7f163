//! Validation of author-entered size tokens.

use rows_core::{Arrangement, SizeToken, TokenError, Vocabulary};

use crate::classify::{classify, TokenKind};

/// What to do with fractions whose numerator exceeds the denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractionPolicy {
    /// Reject `3/2` and the like.
    #[default]
    RejectImproper,
    /// Accept any fraction with a non-zero denominator.
    AllowImproper,
}

/// Validate a single token typed by an author.
///
/// Surrounding whitespace is trimmed and the trimmed token is returned.
/// Accepts keywords of `vocabulary`, fractions with a non-zero denominator,
/// and percentages in `(0, 100]` with or without the `%` sign.
pub fn validate_token(
    input: &str,
    vocabulary: &Vocabulary,
    policy: FractionPolicy,
) -> Result<SizeToken, TokenError> {
    let token = input.trim();

    match classify(token, vocabulary) {
        TokenKind::Empty => Err(TokenError::Empty),
        TokenKind::Keyword(_) => Ok(SizeToken::from(token)),
        TokenKind::Fraction { numerator, denominator } => {
            if denominator == 0 {
                return Err(TokenError::ZeroDenominator { value: token.to_string() });
            }
            if policy == FractionPolicy::RejectImproper && numerator > denominator {
                return Err(TokenError::ImproperFraction { value: token.to_string() });
            }
            Ok(SizeToken::from(token))
        }
        TokenKind::LargeFraction { numerator, denominator } => {
            if denominator == 0.0 {
                return Err(TokenError::ZeroDenominator { value: token.to_string() });
            }
            if policy == FractionPolicy::RejectImproper && numerator > denominator {
                return Err(TokenError::ImproperFraction { value: token.to_string() });
            }
            Ok(SizeToken::from(token))
        }
        TokenKind::Percentage { value, .. } => {
            if value > 0.0 && value <= 100.0 {
                Ok(SizeToken::from(token))
            } else {
                Err(TokenError::PercentageOutOfRange { value: token.to_string() })
            }
        }
        TokenKind::Malformed => Err(malformed(token)),
    }
}

/// Pick the most helpful error for a token that matched no shape.
fn malformed(token: &str) -> TokenError {
    let value = token.to_string();
    if token.contains('/') {
        TokenError::InvalidFraction { value }
    } else if token.chars().all(|c| c.is_alphabetic() || c == '-') {
        TokenError::UnknownKeyword { value }
    } else {
        TokenError::InvalidPercentage { value }
    }
}

/// Parse and validate a list of tokens separated by commas or whitespace
/// (`"1/3, 2/3"`).
pub fn parse_arrangement(
    input: &str,
    vocabulary: &Vocabulary,
    policy: FractionPolicy,
) -> Result<Arrangement, TokenError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(position, part)| {
            validate_token(part, vocabulary, policy).map_err(|err| TokenError::InArrangement {
                position,
                source: Box::new(err),
            })
        })
        .collect()
}
