use std::borrow::Cow;

use wasm_bindgen::prelude::*;
use web_sys::Blob;

mod blob;
mod options;

pub use blob::{blob_from_bytes, read_blob};
pub use options::fix_options_from_js;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ===== Duration fix WASM Bindings =====

/// Set the Segment duration of a MediaRecorder WebM blob.
///
/// Resolves with a new blob of the same type when the file was fixed, or with
/// the original blob when it already had a duration or could not be parsed.
/// `callback`, when given, is called with the same blob before resolving.
#[wasm_bindgen(js_name = fixWebmDuration)]
pub async fn fix_webm_duration(
    blob: Blob,
    duration: f64,
    callback: Option<js_sys::Function>,
    options: JsValue,
) -> Result<Blob, JsValue> {
    let bytes = read_blob(&blob).await?;

    let result = match ebml::fix_bytes(&bytes, duration, fix_options_from_js(&options)) {
        Cow::Borrowed(_) => blob,
        Cow::Owned(fixed) => blob_from_bytes(&fixed, &blob.type_())?,
    };

    if let Some(callback) = callback {
        callback.call1(&JsValue::NULL, &result)?;
    }

    Ok(result)
}

/// Byte-level variant of `fixWebmDuration` for callers that already hold
/// the recording in memory.
#[wasm_bindgen(js_name = fixWebmBytes)]
pub fn fix_webm_bytes(bytes: &[u8], duration: f64, options: JsValue) -> Vec<u8> {
    ebml::fix_bytes(bytes, duration, fix_options_from_js(&options)).into_owned()
}

/// Current Segment duration in milliseconds, or `undefined`.
#[wasm_bindgen(js_name = readWebmDuration)]
pub fn read_webm_duration(bytes: &[u8]) -> Option<f64> {
    ebml::probe_duration_ms(bytes)
}

/// JSON outline of the element tree, for debugging recorder output.
#[wasm_bindgen(js_name = describeWebm)]
pub fn describe_webm(bytes: &[u8]) -> Result<String, JsValue> {
    ebml::describe(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}
