//! Per-child size and flex custom properties.

use rows_core::{ArrangementSet, ConfigError, ResolvedArrangement};
use rows_resolver::{resolve_arrangement, resolve_children};
use rows_translator::{token_to_flex, token_to_fraction, Translation, TranslationCache, Translator};
use tracing::debug;

use crate::options::{SizeProperty, StyleOptions};
use crate::properties::StyleDeclarations;

/// Compose the custom properties of the child at `index`.
///
/// Breakpoints follow `options`; breakpoints missing from `arrangements`
/// resolve as empty. All size properties come first, then all flex
/// properties.
pub fn child_style(
    index: usize,
    arrangements: &ArrangementSet,
    options: &StyleOptions,
) -> StyleDeclarations {
    let ordered = arrangements.ordered_by(&options.breakpoints);
    let resolved = resolve_arrangement(index, &ordered);

    declarations(&resolved, options.size_property, |token| Translation {
        flex: token_to_flex(token, &options.vocabulary),
        fraction: token_to_fraction(token, &options.vocabulary),
    })
}

fn declarations<F>(
    resolved: &ResolvedArrangement,
    size_property: SizeProperty,
    mut translate: F,
) -> StyleDeclarations
where
    F: FnMut(&str) -> Translation,
{
    let translations: Vec<_> = resolved
        .iter()
        .map(|(breakpoint, token)| (breakpoint, translate(token.as_str())))
        .collect();

    let mut style = StyleDeclarations::new();
    for (breakpoint, translation) in &translations {
        style.push(size_property.name(breakpoint), translation.size_value());
    }
    for (breakpoint, translation) in &translations {
        style.push(format!("--flex-{breakpoint}"), translation.flex.to_string());
    }
    style
}

/// Composes child styles with a shared translation cache.
#[derive(Debug, Clone)]
pub struct ChildStyler {
    options: StyleOptions,
    translator: Translator,
    cache: TranslationCache,
}

impl ChildStyler {
    /// Create a styler after validating `options`.
    pub fn new(options: StyleOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            translator: Translator::new(options.vocabulary.clone()),
            cache: TranslationCache::with_capacity(options.cache_capacity),
            options,
        })
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Style of the child at `index`.
    pub fn style(&mut self, index: usize, arrangements: &ArrangementSet) -> StyleDeclarations {
        let ordered = arrangements.ordered_by(&self.options.breakpoints);
        let resolved = resolve_arrangement(index, &ordered);
        self.compose(&resolved)
    }

    /// Styles of the first `count` children.
    pub fn style_children(
        &mut self,
        count: usize,
        arrangements: &ArrangementSet,
    ) -> Vec<StyleDeclarations> {
        let ordered = arrangements.ordered_by(&self.options.breakpoints);
        let styles: Vec<_> = resolve_children(count, &ordered)
            .iter()
            .map(|resolved| self.compose(resolved))
            .collect();

        debug!(
            count,
            breakpoints = self.options.breakpoints.len(),
            cached = self.cache.len(),
            "styled children"
        );
        styles
    }

    fn compose(&mut self, resolved: &ResolvedArrangement) -> StyleDeclarations {
        let Self {
            options,
            translator,
            cache,
        } = self;
        declarations(resolved, options.size_property, |token| {
            translator.translate_cached(token, cache)
        })
    }
}
