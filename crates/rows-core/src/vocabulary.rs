//! Keyword vocabularies.
//!
//! Call sites differ in which words are keywords and in what `auto` means.
//! Each call site picks a [`Vocabulary`], a table from keyword to
//! [`KeywordRole`], and hands it to the translator.

use indexmap::IndexMap;

/// What a keyword means for flex sizing.
///
/// No keyword carries a fraction; the size custom property of a keyword
/// always falls back to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KeywordRole {
    /// Same as an empty token: `flex: 1`.
    Equal,
    /// Sized like any other token: `flex: 0 1 var(--flex-basis)`.
    Basis,
    /// Shrink to content: `flex: 0 1 auto`.
    Fit,
    /// Grow to fill: `flex: 1 0 0`.
    Fill,
    /// Shrinkable with a zero basis: `flex: 0 1 0%`.
    ZeroBasis,
}

/// A keyword table for one call site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vocabulary {
    keywords: IndexMap<String, KeywordRole>,
}

impl Vocabulary {
    /// A vocabulary with no keywords.
    pub fn empty() -> Self {
        Self {
            keywords: IndexMap::new(),
        }
    }

    /// The rows vocabulary used when rendering.
    ///
    /// `auto`, `equal` and `full` are sized through the basis custom property.
    pub fn rows() -> Self {
        Self::empty()
            .with_keyword("auto", KeywordRole::Basis)
            .with_keyword("equal", KeywordRole::Basis)
            .with_keyword("fit", KeywordRole::Fit)
            .with_keyword("fill", KeywordRole::Fill)
            .with_keyword("full", KeywordRole::Basis)
    }

    /// The column editor vocabulary, where `auto` means a zero basis.
    pub fn columns() -> Self {
        Self::empty()
            .with_keyword("auto", KeywordRole::ZeroBasis)
            .with_keyword("equal", KeywordRole::Basis)
            .with_keyword("fit", KeywordRole::Fit)
            .with_keyword("fill", KeywordRole::Fill)
            .with_keyword("full", KeywordRole::Basis)
    }

    /// Add or override a keyword.
    pub fn with_keyword(mut self, keyword: &str, role: KeywordRole) -> Self {
        self.insert(keyword, role);
        self
    }

    /// Add or override a keyword in place.
    pub fn insert(&mut self, keyword: &str, role: KeywordRole) {
        self.keywords.insert(keyword.to_string(), role);
    }

    /// Look up a keyword. Matching is exact and case-sensitive.
    pub fn role(&self, keyword: &str) -> Option<KeywordRole> {
        self.keywords.get(keyword).copied()
    }

    /// Check if a word is a keyword in this vocabulary.
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, KeywordRole)> {
        self.keywords.iter().map(|(k, r)| (k.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_vocabulary() {
        let vocab = Vocabulary::rows();
        assert_eq!(vocab.role("auto"), Some(KeywordRole::Basis));
        assert_eq!(vocab.role("fit"), Some(KeywordRole::Fit));
        assert_eq!(vocab.role("fill"), Some(KeywordRole::Fill));
        assert_eq!(vocab.role("full"), Some(KeywordRole::Basis));
        assert_eq!(vocab.role("1/3"), None);
    }

    #[test]
    fn test_columns_vocabulary_auto() {
        assert_eq!(Vocabulary::columns().role("auto"), Some(KeywordRole::ZeroBasis));
    }

    #[test]
    fn test_keyword_override() {
        let vocab = Vocabulary::rows().with_keyword("auto", KeywordRole::Equal);
        assert_eq!(vocab.role("auto"), Some(KeywordRole::Equal));
        assert_eq!(vocab.len(), Vocabulary::rows().len());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!Vocabulary::rows().contains("Fill"));
    }
}
