use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::api::{generate_valid_words, respond};
use crate::config::MAX_INPUT_LENGTH;
use crate::logging::init_logger;

#[wasm_bindgen(start)]
pub fn start() {
    init_logger(false);
}

/// WebAssembly entry point: every embedded-dictionary word spelled from `input`.
///
/// Resolves to `{ words: [...] }`; rejects with `{ error, code, status }`, where
/// `status` is 400 for bad input and 500 for internal failures.
#[wasm_bindgen]
pub fn generate_words(input: &str) -> Result<JsValue, JsValue> {
    match respond(generate_valid_words(input)) {
        Ok(words) => to_value(&words)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
        Err(error) => Err(to_value(&error)
            .unwrap_or_else(|e| JsValue::from_str(&format!("Serialization error: {e}")))),
    }
}

/// Longest input the generator accepts, for client-side hints.
#[wasm_bindgen]
pub fn max_input_length() -> usize {
    MAX_INPUT_LENGTH
}
