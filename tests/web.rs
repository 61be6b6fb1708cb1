//! Browser smoke tests for the JS boundary.

#![cfg(target_arch = "wasm32")]

use guestterm::Terminal;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn state_snapshot_round_trips() {
    let term = Terminal::new();
    let state = term.state();
    let cwd = js_sys::Reflect::get(&state, &"cwd".into()).unwrap();
    assert_eq!(cwd.as_string().as_deref(), Some("~"));
}

#[wasm_bindgen_test]
fn load_content_tree_reports_count() {
    let term = Terminal::new();
    let result = term.load_content_tree(r##"[{"path":"a/x.md","content":"# x"}]"##);
    let loaded = js_sys::Reflect::get(&result, &"loaded".into()).unwrap();
    assert_eq!(loaded.as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn tree_snapshot_has_root() {
    let term = Terminal::new();
    let tree = term.tree();
    let path = js_sys::Reflect::get(&tree, &"path".into()).unwrap();
    assert_eq!(path.as_string().as_deref(), Some("~"));
}
