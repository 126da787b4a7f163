//! Ordered inline style declarations.

use std::fmt;

/// One `name:value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
}

impl CustomProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Declarations in emission order.
///
/// Renders as `name:value;name:value` with no trailing separator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDeclarations {
    declarations: Vec<CustomProperty>,
}

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(CustomProperty::new(name, value));
    }

    /// The value of the first declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomProperty> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append to an existing inline style attribute.
    ///
    /// The existing style is split on `;`, trimmed, and stripped of empty
    /// entries; existing declarations come first. An empty result means the
    /// element needs no style attribute.
    pub fn merge_into(&self, existing: &str) -> String {
        existing
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .chain(self.declarations.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{declaration}")?;
        }
        Ok(())
    }
}

impl Extend<CustomProperty> for StyleDeclarations {
    fn extend<I: IntoIterator<Item = CustomProperty>>(&mut self, iter: I) {
        self.declarations.extend(iter);
    }
}

impl FromIterator<CustomProperty> for StyleDeclarations {
    fn from_iter<I: IntoIterator<Item = CustomProperty>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleDeclarations {
    type Item = &'a CustomProperty;
    type IntoIter = std::slice::Iter<'a, CustomProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
