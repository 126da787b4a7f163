//! Block gap conversion.

use indexmap::IndexMap;

/// A block gap as stored by the editor.
///
/// Either one value for both axes, or a map of sides (`top`, `bottom`,
/// `left`, `right`) to values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum BlockGap {
    Uniform(String),
    Sides(IndexMap<String, String>),
}

/// Row and column gap values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gaps {
    pub row: String,
    pub column: String,
}

impl Default for Gaps {
    fn default() -> Self {
        Self {
            row: "initial".to_string(),
            column: "initial".to_string(),
        }
    }
}

impl BlockGap {
    /// Convert to row and column gaps.
    ///
    /// `top`/`bottom` set the row gap and `left`/`right` the column gap, in
    /// map order, so the last side wins. Other keys are ignored. A uniform
    /// value sets both unless it converts to an empty string or `0`.
    pub fn to_gaps(&self) -> Gaps {
        let mut gaps = Gaps::default();
        match self {
            BlockGap::Uniform(value) => {
                let value = gap_value(value);
                if !value.is_empty() && value != "0" {
                    gaps.column = value.clone();
                    gaps.row = value;
                }
            }
            BlockGap::Sides(sides) => {
                for (side, value) in sides {
                    match side.as_str() {
                        "top" | "bottom" => gaps.row = gap_value(value),
                        "left" | "right" => gaps.column = gap_value(value),
                        _ => {}
                    }
                }
            }
        }
        gaps
    }
}

/// Convert a stored gap value to CSS.
///
/// Preset references look like `var:preset|spacing|30` and become
/// `var(--wp--preset--spacing--30)`. Anything with fewer than two segments
/// before the last one is returned as its last segment.
pub fn gap_value(value: &str) -> String {
    let mut segments: Vec<&str> = value.split('|').collect();
    let last = segments.pop().unwrap_or_default();

    if segments.len() > 1 {
        format!("var(--wp--preset--spacing--{last})")
    } else {
        last.to_string()
    }
}
