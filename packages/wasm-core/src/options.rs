//! Options object accepted from JavaScript.

use ebml::{FixOptions, Logger};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Build fix options from `{ logger?: false | (message: string) => void }`.
///
/// `logger: false` silences diagnostics, a function receives each message,
/// and anything else logs to the browser console.
pub fn fix_options_from_js(options: &JsValue) -> FixOptions<'static> {
    let logger = if options.is_object() {
        Reflect::get(options, &JsValue::from_str("logger")).unwrap_or(JsValue::UNDEFINED)
    } else {
        JsValue::UNDEFINED
    };

    FixOptions {
        logger: logger_from_js(logger),
    }
}

fn logger_from_js(value: JsValue) -> Logger<'static> {
    if value.as_bool() == Some(false) {
        return Logger::Silent;
    }

    match value.dyn_into::<Function>() {
        Ok(f) => Logger::callback(move |message| {
            // A throwing logger must not abort the fix
            let _ = f.call1(&JsValue::NULL, &JsValue::from_str(message));
        }),
        Err(_) => Logger::callback(|message| web_sys::console::log_1(&message.into())),
    }
}
