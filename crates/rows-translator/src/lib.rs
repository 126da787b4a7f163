//! Translation of size tokens into CSS values.
//!
//! Each resolved token becomes two values: a `flex` shorthand and, for
//! fractions and percentages, a fraction written to the size custom property.
//! Translation never fails; malformed tokens fall back to the defaults.

pub mod alignment;
pub mod cache;
pub mod flex;
pub mod fraction;

pub use alignment::{token_to_css_alignment_keyword, FlexAlignment};
pub use cache::TranslationCache;
pub use flex::{token_to_flex, FlexBasis, FlexShorthand};
pub use fraction::{gcd, token_to_fraction, Fraction};

use rows_core::Vocabulary;

/// The CSS values for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub flex: FlexShorthand,
    pub fraction: Option<Fraction>,
}

impl Translation {
    /// The size custom property value: the fraction, or `1` without one.
    pub fn size_value(&self) -> String {
        match &self.fraction {
            Some(fraction) => fraction.to_string(),
            None => "1".to_string(),
        }
    }
}

/// Translates tokens against a fixed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    vocabulary: Vocabulary,
}

impl Translator {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Translator for the column editor, where `auto` has a zero basis.
    pub fn columns() -> Self {
        Self::new(Vocabulary::columns())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn flex(&self, token: &str) -> FlexShorthand {
        token_to_flex(token, &self.vocabulary)
    }

    pub fn fraction(&self, token: &str) -> Option<Fraction> {
        token_to_fraction(token, &self.vocabulary)
    }

    /// Both values for `token`.
    pub fn translate(&self, token: &str) -> Translation {
        Translation {
            flex: self.flex(token),
            fraction: self.fraction(token),
        }
    }

    /// Translate through a cache. A cache filled by a translator with another
    /// vocabulary is reset first.
    pub fn translate_cached(&self, token: &str, cache: &mut TranslationCache) -> Translation {
        cache.get_or_translate(token, self)
    }
}
