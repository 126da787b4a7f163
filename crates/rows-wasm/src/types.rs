//! JavaScript-facing option types.

use indexmap::IndexMap;
use rows_core::{KeywordRole, Vocabulary};
use rows_parser::FractionPolicy;
use rows_style::{SizeProperty, StyleOptions};
use serde::{Deserialize, Serialize};

/// Keyword preset for a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VocabularyPreset {
    #[default]
    Rows,
    Columns,
}

/// Engine options from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptionsJs {
    /// Breakpoint names, widest first.
    #[serde(default)]
    pub breakpoints: Option<Vec<String>>,
    /// `"size"` or `"columns"`.
    #[serde(default)]
    pub size_property: Option<SizeProperty>,
    #[serde(default)]
    pub vocabulary: Option<VocabularyPreset>,
    /// Keyword overrides applied on top of the preset.
    #[serde(default)]
    pub keywords: Option<IndexMap<String, KeywordRole>>,
    #[serde(default)]
    pub cache_capacity: Option<usize>,
    /// Accept fractions larger than one when validating.
    #[serde(default)]
    pub allow_improper_fractions: Option<bool>,
}

impl EngineOptionsJs {
    pub fn fraction_policy(&self) -> FractionPolicy {
        if self.allow_improper_fractions.unwrap_or(false) {
            FractionPolicy::AllowImproper
        } else {
            FractionPolicy::RejectImproper
        }
    }

    pub fn into_core(self) -> StyleOptions {
        let mut vocabulary = match self.vocabulary.unwrap_or_default() {
            VocabularyPreset::Rows => Vocabulary::rows(),
            VocabularyPreset::Columns => Vocabulary::columns(),
        };
        for (keyword, role) in self.keywords.unwrap_or_default() {
            vocabulary.insert(&keyword, role);
        }

        let mut opts = StyleOptions::default().with_vocabulary(vocabulary);
        if let Some(breakpoints) = self.breakpoints {
            opts = opts.with_breakpoints(breakpoints);
        }
        if let Some(size_property) = self.size_property {
            opts = opts.with_size_property(size_property);
        }
        if let Some(capacity) = self.cache_capacity {
            opts = opts.with_cache_capacity(capacity);
        }
        opts
    }
}
