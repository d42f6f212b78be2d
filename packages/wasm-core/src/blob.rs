//! Moving bytes in and out of `Blob`s.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag};

/// Read the whole blob into memory.
pub async fn read_blob(blob: &Blob) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(blob.array_buffer()).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Wrap `bytes` in a new blob of the given MIME type.
pub fn blob_from_bytes(bytes: &[u8], mime_type: &str) -> Result<Blob, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
