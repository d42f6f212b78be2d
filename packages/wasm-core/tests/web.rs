//! Browser tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use webm_duration_wasm::{
    blob_from_bytes, fix_webm_bytes, fix_webm_duration, read_blob, read_webm_duration,
};

wasm_bindgen_test_configure!(run_in_browser);

// EBML header, then Segment { Info { TimecodeScale 1ms } } with no Duration
const NO_DURATION: &[u8] = &[
    0x1a, 0x45, 0xdf, 0xa3, 0x87, 0x42, 0x82, 0x84, b'w', b'e', b'b', b'm', 0x18, 0x53, 0x80,
    0x67, 0x8c, 0x15, 0x49, 0xa9, 0x66, 0x87, 0x2a, 0xd7, 0xb1, 0x83, 0x0f, 0x42, 0x40,
];

fn silent() -> JsValue {
    let options = Object::new();
    Reflect::set(&options, &"logger".into(), &JsValue::FALSE).unwrap();
    options.into()
}

#[wasm_bindgen_test]
async fn test_fixes_blob_and_keeps_type() {
    let input = blob_from_bytes(NO_DURATION, "audio/webm;codecs=opus").unwrap();
    let output = fix_webm_duration(input, 5000.0, None, silent()).await.unwrap();

    assert_eq!(output.type_(), "audio/webm;codecs=opus");
    let bytes = read_blob(&output).await.unwrap();
    assert_eq!(read_webm_duration(&bytes), Some(5000.0));
}

#[wasm_bindgen_test]
async fn test_unfixable_blob_returned_as_is() {
    let input = blob_from_bytes(&[0x00, 0x01, 0x02], "audio/webm").unwrap();
    let output = fix_webm_duration(input.clone(), 5000.0, None, silent())
        .await
        .unwrap();

    assert!(Object::is(&input, &output));
}

#[wasm_bindgen_test]
async fn test_callback_and_logger_are_called() {
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = messages.clone();
    let logger = Closure::<dyn FnMut(String)>::new(move |msg: String| sink.borrow_mut().push(msg));
    let options = Object::new();
    Reflect::set(&options, &"logger".into(), logger.as_ref()).unwrap();

    let received = Array::new();
    let callback = Function::new_with_args("blob", "this.push(blob)").bind(&received);

    let input = blob_from_bytes(NO_DURATION, "audio/webm").unwrap();
    let output = fix_webm_duration(input, 1500.0, Some(callback), options.into())
        .await
        .unwrap();

    assert_eq!(received.length(), 1);
    assert!(Object::is(&received.get(0), &output));
    assert_eq!(
        *messages.borrow(),
        vec!["[webm-duration] Duration section is missing. Applying 1500 ms."]
    );
}

#[wasm_bindgen_test]
fn test_fix_bytes_binding() {
    let fixed = fix_webm_bytes(NO_DURATION, 5000.0, silent());
    assert_eq!(read_webm_duration(&fixed), Some(5000.0));
    assert_eq!(read_webm_duration(NO_DURATION), None);
}
