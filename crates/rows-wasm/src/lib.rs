//! WebAssembly bindings for the rows arrangement engine.
//!
//! The block editor calls these to preview the styles the server renders.
//!
//! ## Example
//!
//! ```js
//! import { RowsEngine } from 'rows-engine';
//!
//! const engine = new RowsEngine({ breakpoints: ['lg', 'md', 'sm'] });
//! const arrangements = { lg: ['1/3', '2/3'], md: [], sm: ['fill'] };
//!
//! engine.childStyle(1, arrangements);
//! // "--size-lg:2/3;--size-md:2/3;--size-sm:1;--flex-lg:0 1 var(--flex-basis);..."
//! ```

use rows_core::ArrangementSet;
use rows_parser::{parse_arrangement, validate_token, FractionPolicy};
use rows_resolver::resolve_arrangement;
use rows_style::{column_style, container_style, ChildStyler, ContainerAttributes};
use rows_translator::token_to_css_alignment_keyword;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The rows engine interface for JavaScript.
#[wasm_bindgen]
pub struct RowsEngine {
    styler: ChildStyler,
    fraction_policy: FractionPolicy,
}

#[wasm_bindgen]
impl RowsEngine {
    /// Create an engine. `options` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<RowsEngine, JsError> {
        let opts = parse_options(options)?;
        let fraction_policy = opts.fraction_policy();
        let styler = ChildStyler::new(opts.into_core())
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;

        Ok(Self {
            styler,
            fraction_policy,
        })
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the engine options. The translation cache is reset.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsError> {
        *self = Self::new(options)?;
        Ok(())
    }

    /// Resolve the tokens of the child at `index`, keyed by breakpoint.
    #[wasm_bindgen]
    pub fn resolve(&self, index: usize, arrangements: JsValue) -> Result<JsValue, JsError> {
        let set = parse_arrangements(arrangements)?;
        let ordered = set.ordered_by(&self.styler.options().breakpoints);
        to_js(&resolve_arrangement(index, &ordered))
    }

    /// Inline style of the child at `index`, merged into `existing` if given.
    #[wasm_bindgen(js_name = childStyle)]
    pub fn child_style(
        &mut self,
        index: usize,
        arrangements: JsValue,
        existing: Option<String>,
    ) -> Result<String, JsError> {
        let set = parse_arrangements(arrangements)?;
        let style = self.styler.style(index, &set);
        Ok(style.merge_into(existing.as_deref().unwrap_or_default()))
    }

    /// Inline styles of the first `count` children.
    #[wasm_bindgen(js_name = styleChildren)]
    pub fn style_children(
        &mut self,
        count: usize,
        arrangements: JsValue,
    ) -> Result<Vec<String>, JsError> {
        let set = parse_arrangements(arrangements)?;
        Ok(self
            .styler
            .style_children(count, &set)
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Inline style of a rows container.
    #[wasm_bindgen(js_name = containerStyle)]
    pub fn container_style(&self, attributes: JsValue) -> Result<String, JsError> {
        let attrs: ContainerAttributes = serde_wasm_bindgen::from_value(attributes)
            .map_err(|e| JsError::new(&format!("Invalid container attributes: {}", e)))?;
        Ok(container_style(&attrs).to_string())
    }

    /// Inline style of a column.
    #[wasm_bindgen(js_name = columnStyle)]
    pub fn column_style(&self, align_items: Option<String>) -> String {
        column_style(align_items.as_deref()).to_string()
    }

    /// The flex shorthand of a token.
    #[wasm_bindgen(js_name = tokenToFlex)]
    pub fn token_to_flex(&self, token: &str) -> String {
        rows_translator::token_to_flex(token, &self.styler.options().vocabulary).to_string()
    }

    /// The fraction of a token, or `undefined`.
    #[wasm_bindgen(js_name = tokenToFraction)]
    pub fn token_to_fraction(&self, token: &str) -> Option<String> {
        rows_translator::token_to_fraction(token, &self.styler.options().vocabulary)
            .map(|f| f.to_string())
    }

    /// The CSS alignment keyword for a positional word.
    #[wasm_bindgen(js_name = alignmentKeyword)]
    pub fn alignment_keyword(&self, position: Option<String>) -> String {
        token_to_css_alignment_keyword(position.as_deref()).to_string()
    }

    /// Validate an author-entered token, returning it trimmed.
    #[wasm_bindgen(js_name = validateToken)]
    pub fn validate_token(&self, token: &str) -> Result<String, JsError> {
        validate_token(token, &self.styler.options().vocabulary, self.fraction_policy)
            .map(|t| t.to_string())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Validate a comma or space separated list of tokens.
    #[wasm_bindgen(js_name = parseArrangement)]
    pub fn parse_arrangement(&self, input: &str) -> Result<Vec<String>, JsError> {
        let arrangement =
            parse_arrangement(input, &self.styler.options().vocabulary, self.fraction_policy)
                .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(arrangement.tokens().iter().map(ToString::to_string).collect())
    }
}

fn parse_options(options: JsValue) -> Result<EngineOptionsJs, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(EngineOptionsJs::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn parse_arrangements(arrangements: JsValue) -> Result<ArrangementSet, JsError> {
    serde_wasm_bindgen::from_value(arrangements)
        .map_err(|e| JsError::new(&format!("Invalid arrangements: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
