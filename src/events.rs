//! One-way notifications to the frontend: boot progress and open-file
//! changes. A window-level callback is preferred when the page registered
//! one; otherwise a DOM `CustomEvent` is dispatched on the window. Only
//! usable on the wasm target.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};

use crate::boot::BootStage;
use crate::session::OpenFile;

pub fn emit_boot_progress(stage: BootStage, progress: u8, status_line: Option<&str>) {
    emit(
        "term-boot",
        &serde_json::json!({
            "stage": stage,
            "progress": progress,
            "statusLine": status_line,
        }),
    );
}

pub fn emit_open_file(open: Option<&OpenFile>) {
    let detail = match open {
        Some(open) => serde_json::json!({ "name": open.name, "content": open.content }),
        None => serde_json::json!(null),
    };
    emit("term-open-file", &detail);
}

fn emit(event_type: &str, detail: &serde_json::Value) {
    let Some(win) = window() else {
        web_sys::console::warn_1(&"[guestterm] no window object, dropping event".into());
        return;
    };
    let payload = serde_wasm_bindgen::to_value(detail).unwrap_or(JsValue::NULL);

    // callback first, DOM event as fallback
    if let Ok(cb) = js_sys::Reflect::get(win.as_ref(), &"__termCallback".into()) {
        if cb.is_function() {
            let cb: js_sys::Function = cb.unchecked_into();
            match cb.call2(&JsValue::NULL, &event_type.into(), &payload) {
                Ok(_) => return,
                Err(e) => {
                    web_sys::console::error_3(
                        &"[guestterm] callback failed for".into(),
                        &event_type.into(),
                        &e,
                    );
                }
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&payload);
    match CustomEvent::new_with_event_init_dict(event_type, &init) {
        Ok(event) => {
            let _ = win.dispatch_event(&event);
        }
        Err(e) => {
            web_sys::console::error_2(&"[guestterm] could not build event".into(), &e);
        }
    }
}
