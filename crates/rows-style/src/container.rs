//! Container and column styles.

use rows_translator::token_to_css_alignment_keyword;
use tracing::trace;

use crate::gap::BlockGap;
use crate::properties::StyleDeclarations;

/// Alignment and spacing attributes of a rows container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerAttributes {
    #[cfg_attr(feature = "serde", serde(default))]
    pub align_items: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub justify_content: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub block_gap: Option<BlockGap>,
}

impl ContainerAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_align_items(mut self, position: impl Into<String>) -> Self {
        self.align_items = Some(position.into());
        self
    }

    pub fn with_justify_content(mut self, position: impl Into<String>) -> Self {
        self.justify_content = Some(position.into());
        self
    }

    pub fn with_block_gap(mut self, gap: BlockGap) -> Self {
        self.block_gap = Some(gap);
        self
    }
}

/// Compose the container's custom properties.
///
/// Only attributes that are set produce declarations. A block gap always
/// produces both `--row-gap` and `--column-gap`.
pub fn container_style(attributes: &ContainerAttributes) -> StyleDeclarations {
    let mut style = StyleDeclarations::new();

    if attributes.align_items.is_some() {
        style.push(
            "--align-items",
            token_to_css_alignment_keyword(attributes.align_items.as_deref()),
        );
    }

    if attributes.justify_content.is_some() {
        style.push(
            "--justify-content",
            token_to_css_alignment_keyword(attributes.justify_content.as_deref()),
        );
    }

    if let Some(gap) = &attributes.block_gap {
        let gaps = gap.to_gaps();
        trace!(row = %gaps.row, column = %gaps.column, "block gap");
        style.push("--row-gap", gaps.row);
        style.push("--column-gap", gaps.column);
    }

    style
}

/// Compose a column's custom properties.
///
/// Columns lay out their content vertically, so vertical alignment becomes
/// `--justify-content`.
pub fn column_style(align_items: Option<&str>) -> StyleDeclarations {
    let mut style = StyleDeclarations::new();
    if align_items.is_some() {
        style.push("--justify-content", token_to_css_alignment_keyword(align_items));
    }
    style
}
