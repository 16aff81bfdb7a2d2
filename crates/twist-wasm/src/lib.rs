//! WASM bindings for the twist generator.
//!
//! Exposes `generate()` to JavaScript via wasm-bindgen.
//! Takes the options as a plain JS object and returns CSS text,
//! or throws on a malformed options object.

use wasm_bindgen::prelude::*;

use twist_config::Options;

/// Generate CSS utility classes from a twist options object.
///
/// Accepts the same shape as the original plugin options
/// (`{ properties, durations, timingFunctions, delays, willChange,
/// variants, transitionPrefix, willChangePrefix }`).
/// Throws a JS error if the options object does not deserialize.
#[wasm_bindgen]
pub fn generate(options: JsValue) -> Result<String, JsError> {
    let options: Options =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(twist_css::render(&options))
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
