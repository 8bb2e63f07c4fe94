//! WASM-facing API for browser integration.
//!
//! `WasmOracle` owns its own chosen creature type, so each page or worker
//! renders against its own context.

use wasm_bindgen::prelude::*;

use crate::action::Action;
use crate::chosen_type::ChosenType;
use crate::parser::{OracleParser, ParseOptions};
use crate::render::action_lines;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct WasmOracle {
    parser: OracleParser,
    chosen: ChosenType,
}

#[wasm_bindgen]
impl WasmOracle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as `new`, with a custom input bound in bytes.
    #[wasm_bindgen(js_name = withMaxInputLen)]
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            parser: OracleParser::new(ParseOptions { max_input_len }),
            chosen: ChosenType::default(),
        }
    }

    /// Clauses, expanded clauses, ability-only clauses and innate tokens.
    #[wasm_bindgen(js_name = detectAll)]
    pub fn detect_all(&self, text: &str) -> Result<JsValue, JsValue> {
        let detected = self
            .parser
            .detect_all(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&detected)
            .map_err(|e| JsValue::from_str(&format!("detectAll encode failed: {e}")))
    }

    #[wasm_bindgen(js_name = inferActions)]
    pub fn infer_actions(&self, effect: &str) -> Result<JsValue, JsValue> {
        let actions = self
            .parser
            .infer_actions(effect)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&actions)
            .map_err(|e| JsValue::from_str(&format!("inferActions encode failed: {e}")))
    }

    /// Renders actions previously returned by `inferActions`.
    #[wasm_bindgen(js_name = actionLines)]
    pub fn action_lines(&self, actions: JsValue) -> Result<Vec<String>, JsValue> {
        let actions: Vec<Action> = serde_wasm_bindgen::from_value(actions)
            .map_err(|e| JsValue::from_str(&format!("actionLines decode failed: {e}")))?;
        Ok(action_lines(&actions, &self.chosen))
    }

    /// Pass `null` or an empty string to clear.
    #[wasm_bindgen(js_name = setChosenType)]
    pub fn set_chosen_type(&mut self, value: Option<String>) {
        self.chosen.set(value);
    }

    #[wasm_bindgen(js_name = chosenType)]
    pub fn chosen_type(&self) -> Option<String> {
        self.chosen.get().map(str::to_string)
    }

    #[wasm_bindgen(js_name = withChosenType)]
    pub fn with_chosen_type(&self, template: &str) -> String {
        self.chosen.with_chosen_type(template)
    }
}
