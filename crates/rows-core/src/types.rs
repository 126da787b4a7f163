//! Core value types.

use std::borrow::Borrow;
use std::fmt;

/// A size token as authored for one child at one breakpoint.
///
/// Tokens are kept verbatim. Classification (keyword, fraction, percentage)
/// happens at translation time, never at resolution time, so a malformed
/// token still flows through resolution unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SizeToken(pub String);

impl SizeToken {
    /// The empty token, meaning "inherit from the previous breakpoint".
    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this token is the empty "inherit" marker.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SizeToken {
    fn from(s: &str) -> Self {
        SizeToken(s.to_string())
    }
}

impl From<String> for SizeToken {
    fn from(s: String) -> Self {
        SizeToken(s)
    }
}

impl AsRef<str> for SizeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named responsive breakpoint (e.g. `lg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Breakpoint(pub String);

impl Breakpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name can be embedded in a custom property name
    /// (`--flex-{name}`) without escaping.
    pub fn is_valid_ident(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// The default breakpoint order, widest first.
    pub fn defaults() -> Vec<Breakpoint> {
        ["xl", "lg", "md", "sm"].into_iter().map(Breakpoint::from).collect()
    }
}

impl From<&str> for Breakpoint {
    fn from(s: &str) -> Self {
        Breakpoint(s.to_string())
    }
}

impl From<String> for Breakpoint {
    fn from(s: String) -> Self {
        Breakpoint(s)
    }
}

impl Borrow<str> for Breakpoint {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token() {
        assert!(SizeToken::empty().is_empty());
        assert!(SizeToken::default().is_empty());
        assert!(!SizeToken::from("0").is_empty());
    }

    #[test]
    fn test_breakpoint_ident() {
        assert!(Breakpoint::from("lg").is_valid_ident());
        assert!(Breakpoint::from("wide-2").is_valid_ident());
        assert!(!Breakpoint::from("").is_valid_ident());
        assert!(!Breakpoint::from("l g").is_valid_ident());
        assert!(!Breakpoint::from("lg;").is_valid_ident());
    }

    #[test]
    fn test_default_breakpoints() {
        let names: Vec<_> = Breakpoint::defaults().iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["xl", "lg", "md", "sm"]);
    }
}
