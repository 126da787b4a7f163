//! Normalized size fractions.

use std::fmt;

use rows_core::Vocabulary;
use rows_parser::{classify, TokenKind};
use tracing::{debug, trace};

/// A size fraction as written into the size custom property.
///
/// Authored fractions keep their original text (`"2/4"` stays `"2/4"`);
/// fractions computed from percentages are reduced.
///
/// Authored digits too long for `u64` are kept as written; such fractions
/// have no integer parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    text: String,
    parts: Option<(u64, u64)>,
}

impl Fraction {
    /// Build a fraction from its parts, written as `numerator/denominator`.
    ///
    /// Returns `None` for a zero denominator.
    pub fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            text: format!("{numerator}/{denominator}"),
            parts: Some((numerator, denominator)),
        })
    }

    /// Reduce `numerator/denominator` by their greatest common divisor.
    pub fn reduced(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let divisor = gcd(numerator, denominator);
        Self::new(numerator / divisor, denominator / divisor)
    }

    /// Convert a percentage to hundredths and reduce.
    ///
    /// The percentage is rounded to the nearest whole number first, so
    /// `33.33` becomes `33/100`. Negative and non-finite values have no
    /// fraction.
    pub fn from_percentage(percentage: f64) -> Option<Self> {
        let rounded = percentage.round();
        if !rounded.is_finite() || rounded < 0.0 || rounded > u64::MAX as f64 {
            return None;
        }
        Self::reduced(rounded as u64, 100)
    }

    /// The numerator, or `None` when it does not fit in `u64`.
    pub fn numerator(&self) -> Option<u64> {
        self.parts.map(|(numerator, _)| numerator)
    }

    /// The denominator, or `None` when it does not fit in `u64`.
    pub fn denominator(&self) -> Option<u64> {
        self.parts.map(|(_, denominator)| denominator)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The fraction as a number. Approximate for long digit runs.
    pub fn value(&self) -> f64 {
        match self.parts {
            Some((numerator, denominator)) => numerator as f64 / denominator as f64,
            None => self
                .text
                .split_once('/')
                .and_then(|(n, d)| Some(n.parse::<f64>().ok()? / d.parse::<f64>().ok()?))
                .unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Translate a size token into its fraction of the container.
///
/// Returns `None` for empty tokens, keywords of `vocabulary`, fractions with a
/// zero denominator, and anything that does not parse; the caller then uses
/// `1`. Fractions are returned unchanged; percentages are rounded to whole
/// hundredths and reduced.
pub fn token_to_fraction(token: &str, vocabulary: &Vocabulary) -> Option<Fraction> {
    match classify(token, vocabulary) {
        TokenKind::Empty | TokenKind::Keyword(_) => None,
        TokenKind::Fraction { numerator, denominator } => {
            if denominator == 0 {
                debug!(token, "fraction has a zero denominator");
                return None;
            }
            Some(Fraction {
                text: token.to_string(),
                parts: Some((numerator, denominator)),
            })
        }
        TokenKind::LargeFraction { denominator, .. } => {
            if denominator == 0.0 {
                debug!(token, "fraction has a zero denominator");
                return None;
            }
            trace!(token, "fraction digits exceed u64, kept verbatim");
            Some(Fraction {
                text: token.to_string(),
                parts: None,
            })
        }
        TokenKind::Percentage { value, .. } => Fraction::from_percentage(value),
        TokenKind::Malformed => {
            debug!(token, "size token is not a keyword, fraction, or percentage");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fraction(token: &str) -> Option<String> {
        token_to_fraction(token, &Vocabulary::rows()).map(|f| f.to_string())
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(50, 100), 50);
        assert_eq!(gcd(33, 100), 1);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 100), 100);
    }

    #[test]
    fn test_percentages_reduce() {
        assert_eq!(fraction("50%").as_deref(), Some("1/2"));
        assert_eq!(fraction("25%").as_deref(), Some("1/4"));
        assert_eq!(fraction("33%").as_deref(), Some("33/100"));
        assert_eq!(fraction("75%").as_deref(), Some("3/4"));
        assert_eq!(fraction("100%").as_deref(), Some("1/1"));
    }

    #[test]
    fn test_decimal_percentage_rounds() {
        assert_eq!(fraction("33.33%").as_deref(), Some("33/100"));
        assert_eq!(fraction("66.66%").as_deref(), Some("67/100"));
        assert_eq!(fraction("12.5%").as_deref(), Some("13/100"));
    }

    #[test]
    fn test_bare_number_is_percentage() {
        assert_eq!(fraction("20").as_deref(), Some("1/5"));
    }

    #[test]
    fn test_zero_and_large_percentages() {
        assert_eq!(fraction("0%").as_deref(), Some("0/1"));
        assert_eq!(fraction("150%").as_deref(), Some("3/2"));
    }

    #[test]
    fn test_fraction_unchanged() {
        assert_eq!(fraction("1/3").as_deref(), Some("1/3"));
        assert_eq!(fraction("2/4").as_deref(), Some("2/4"));
        assert_eq!(fraction("3/2").as_deref(), Some("3/2"));
    }

    #[test]
    fn test_long_fraction_unchanged() {
        let f = token_to_fraction("18446744073709551616/3", &Vocabulary::rows()).unwrap();
        assert_eq!(f.as_str(), "18446744073709551616/3");
        assert_eq!(f.numerator(), None);
        assert!((f.value() - 18446744073709551616.0 / 3.0).abs() < 1.0);

        assert_eq!(
            fraction("1/99999999999999999999999").as_deref(),
            Some("1/99999999999999999999999")
        );
        assert_eq!(fraction("99999999999999999999999/0"), None);
    }

    #[test]
    fn test_no_fraction() {
        assert_eq!(fraction(""), None);
        assert_eq!(fraction("fill"), None);
        assert_eq!(fraction("fit"), None);
        assert_eq!(fraction("auto"), None);
        assert_eq!(fraction("full"), None);
    }

    #[test]
    fn test_malformed_has_no_fraction() {
        assert_eq!(fraction("abc%"), None);
        assert_eq!(fraction("%"), None);
        assert_eq!(fraction("1/0"), None);
        assert_eq!(fraction("-5%"), None);
        assert_eq!(fraction("50 %"), None);
    }

    #[test]
    fn test_full_depends_on_vocabulary() {
        assert_eq!(token_to_fraction("full", &Vocabulary::columns()), None);
        assert_eq!(token_to_fraction("full", &Vocabulary::empty()), None);
    }

    #[test]
    fn test_fraction_parts() {
        let f = token_to_fraction("2/3", &Vocabulary::rows()).unwrap();
        assert_eq!(f.numerator(), Some(2));
        assert_eq!(f.denominator(), Some(3));
        assert!((f.value() - 2.0 / 3.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn reduced_fraction_is_idempotent(numerator in 0u64..1_000, denominator in 1u64..1_000) {
            let reduced = Fraction::reduced(numerator, denominator).unwrap();
            let again = token_to_fraction(reduced.as_str(), &Vocabulary::rows()).unwrap();
            prop_assert_eq!(again, reduced);
        }

        #[test]
        fn never_panics(token in "\\PC{0,12}") {
            let _ = token_to_fraction(&token, &Vocabulary::rows());
        }

        #[test]
        fn whole_percentages_are_lowest_terms(percentage in 1u64..=100) {
            let f = token_to_fraction(&format!("{percentage}%"), &Vocabulary::rows()).unwrap();
            let (numerator, denominator) = (f.numerator().unwrap(), f.denominator().unwrap());
            prop_assert_eq!(gcd(numerator, denominator), 1);
            prop_assert_eq!(numerator * 100, percentage * denominator);
        }
    }
}
