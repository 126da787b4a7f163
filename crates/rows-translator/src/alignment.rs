//! Alignment keywords.
//!
//! The editor stores alignment as positional words (`top`, `left`, ...);
//! styles need the flexbox keyword for the axis in question.

use std::fmt;

/// A flexbox alignment keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexAlignment {
    /// `flex-start`
    Start,
    /// `center`
    Center,
    /// `flex-end`
    End,
    /// `space-between`
    SpaceBetween,
    /// `initial`, for anything unrecognized
    #[default]
    Initial,
}

impl FlexAlignment {
    /// Map a positional word to its flexbox keyword.
    ///
    /// Matching is exact; `"Top"` and `" top"` map to [`FlexAlignment::Initial`].
    pub fn from_position(position: &str) -> Self {
        match position {
            "top" | "left" => FlexAlignment::Start,
            "middle" | "center" => FlexAlignment::Center,
            "bottom" | "right" => FlexAlignment::End,
            "space-between" => FlexAlignment::SpaceBetween,
            _ => FlexAlignment::Initial,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FlexAlignment::Start => "flex-start",
            FlexAlignment::Center => "center",
            FlexAlignment::End => "flex-end",
            FlexAlignment::SpaceBetween => "space-between",
            FlexAlignment::Initial => "initial",
        }
    }

    pub fn is_initial(self) -> bool {
        self == FlexAlignment::Initial
    }
}

impl fmt::Display for FlexAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Map an optional positional word to a CSS alignment keyword.
///
/// A missing word yields `initial`.
pub fn token_to_css_alignment_keyword(position: Option<&str>) -> &'static str {
    position
        .map(FlexAlignment::from_position)
        .unwrap_or_default()
        .as_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_words() {
        assert_eq!(token_to_css_alignment_keyword(Some("top")), "flex-start");
        assert_eq!(token_to_css_alignment_keyword(Some("left")), "flex-start");
    }

    #[test]
    fn test_center_words() {
        assert_eq!(token_to_css_alignment_keyword(Some("middle")), "center");
        assert_eq!(token_to_css_alignment_keyword(Some("center")), "center");
    }

    #[test]
    fn test_end_words() {
        assert_eq!(token_to_css_alignment_keyword(Some("bottom")), "flex-end");
        assert_eq!(token_to_css_alignment_keyword(Some("right")), "flex-end");
    }

    #[test]
    fn test_space_between_passes_through() {
        assert_eq!(
            token_to_css_alignment_keyword(Some("space-between")),
            "space-between"
        );
    }

    #[test]
    fn test_unknown_is_initial() {
        assert_eq!(token_to_css_alignment_keyword(Some("stretch")), "initial");
        assert_eq!(token_to_css_alignment_keyword(Some("")), "initial");
        assert_eq!(token_to_css_alignment_keyword(Some("Top")), "initial");
        assert_eq!(token_to_css_alignment_keyword(None), "initial");
    }

    #[test]
    fn test_is_initial() {
        assert!(FlexAlignment::from_position("nowhere").is_initial());
        assert!(!FlexAlignment::from_position("top").is_initial());
        assert_eq!(FlexAlignment::End.to_string(), "flex-end");
    }
}
