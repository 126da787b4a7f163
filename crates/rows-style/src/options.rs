//! Options for style composition.

use std::collections::HashSet;

use rows_core::{Breakpoint, ConfigError, Vocabulary};
use rows_translator::cache::DEFAULT_CAPACITY;

/// Which custom property carries the size fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SizeProperty {
    /// `--size-{breakpoint}`
    #[default]
    Size,
    /// `--columns-{breakpoint}`
    Columns,
}

impl SizeProperty {
    pub fn prefix(self) -> &'static str {
        match self {
            SizeProperty::Size => "--size-",
            SizeProperty::Columns => "--columns-",
        }
    }

    /// The property name for a breakpoint.
    pub fn name(self, breakpoint: &Breakpoint) -> String {
        format!("{}{}", self.prefix(), breakpoint)
    }
}

/// Options for style composition.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Breakpoints, widest first
    pub breakpoints: Vec<Breakpoint>,
    /// Custom property naming for the size fraction
    pub size_property: SizeProperty,
    /// Keywords understood by the translator
    pub vocabulary: Vocabulary,
    /// Distinct tokens remembered by a styler; zero disables caching
    pub cache_capacity: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoint::defaults(),
            size_property: SizeProperty::Size,
            vocabulary: Vocabulary::rows(),
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoints<I, B>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Breakpoint>,
    {
        self.breakpoints = breakpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size_property(mut self, size_property: SizeProperty) -> Self {
        self.size_property = size_property;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Check the breakpoint list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoints.is_empty() {
            return Err(ConfigError::NoBreakpoints);
        }

        let mut seen = HashSet::new();
        for breakpoint in &self.breakpoints {
            if !breakpoint.is_valid_ident() {
                return Err(ConfigError::InvalidBreakpoint {
                    name: breakpoint.to_string(),
                });
            }
            if !seen.insert(breakpoint.as_str()) {
                return Err(ConfigError::DuplicateBreakpoint {
                    name: breakpoint.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StyleOptions::default();
        let names: Vec<_> = options.breakpoints.iter().map(|b| b.as_str()).collect();
        assert_eq!(names, ["xl", "lg", "md", "sm"]);
        assert_eq!(options.size_property, SizeProperty::Size);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_property_names() {
        let lg = Breakpoint::new("lg");
        assert_eq!(SizeProperty::Size.name(&lg), "--size-lg");
        assert_eq!(SizeProperty::Columns.name(&lg), "--columns-lg");
    }

    #[test]
    fn test_no_breakpoints() {
        let options = StyleOptions::new().with_breakpoints(Vec::<Breakpoint>::new());
        assert_eq!(options.validate(), Err(ConfigError::NoBreakpoints));
    }

    #[test]
    fn test_duplicate_breakpoint() {
        let options = StyleOptions::new().with_breakpoints(["lg", "md", "lg"]);
        assert_eq!(
            options.validate(),
            Err(ConfigError::DuplicateBreakpoint { name: "lg".into() })
        );
    }

    #[test]
    fn test_invalid_breakpoint() {
        let options = StyleOptions::new().with_breakpoints(["lg", "md;x"]);
        assert_eq!(
            options.validate(),
            Err(ConfigError::InvalidBreakpoint { name: "md;x".into() })
        );
    }
}
