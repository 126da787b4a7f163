//! Browser tests for the bindings.

#![cfg(target_arch = "wasm32")]

use rows_wasm::RowsEngine;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js(value: serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn arrangements() -> JsValue {
    js(json!({ "lg": ["1/3", "2/3"], "md": [], "sm": ["fill"] }))
}

fn engine() -> RowsEngine {
    RowsEngine::new(js(json!({ "breakpoints": ["lg", "md", "sm"] }))).unwrap()
}

#[wasm_bindgen_test]
fn test_default_engine() {
    let engine = RowsEngine::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(engine.token_to_flex("fit"), "0 1 auto");
    assert_eq!(engine.token_to_fraction("50%").as_deref(), Some("1/2"));
    assert_eq!(engine.token_to_fraction("fill"), None);
}

#[wasm_bindgen_test]
fn test_child_style() {
    let mut engine = engine();
    let style = engine.child_style(1, arrangements(), None).unwrap();
    assert!(style.starts_with("--size-lg:2/3;--size-md:2/3;--size-sm:1;"));

    let merged = engine
        .child_style(1, arrangements(), Some("color:red".into()))
        .unwrap();
    assert!(merged.starts_with("color:red;--size-lg:2/3"));
}

#[wasm_bindgen_test]
fn test_style_children() {
    let styles = engine().style_children(3, arrangements()).unwrap();
    assert_eq!(styles.len(), 3);
    assert_eq!(styles[0], styles[2]);
}

#[wasm_bindgen_test]
fn test_container_and_column() {
    let engine = engine();
    let style = engine
        .container_style(js(json!({ "alignItems": "bottom", "blockGap": "var:preset|spacing|10" })))
        .unwrap();
    assert_eq!(
        style,
        "--align-items:flex-end;--row-gap:var(--wp--preset--spacing--10);--column-gap:var(--wp--preset--spacing--10)"
    );
    assert_eq!(engine.column_style(Some("top".into())), "--justify-content:flex-start");
    assert_eq!(engine.alignment_keyword(None), "initial");
}

#[wasm_bindgen_test]
fn test_validate_token() {
    let engine = engine();
    assert_eq!(engine.validate_token(" 1/3 ").unwrap(), "1/3");
    assert!(engine.validate_token("3/2").is_err());
}

#[wasm_bindgen_test]
fn test_invalid_options() {
    assert!(RowsEngine::new(js(json!({ "breakpoints": [] }))).is_err());
}
