//! Smoke tests for the wasm-bindgen surface.
//! Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use othello_ai::Board;
use othello_ai::bindings::choose_move_seeded;
use wasm_bindgen_test::*;

fn field(value: &wasm_bindgen::JsValue, name: &str) -> wasm_bindgen::JsValue {
    js_sys::Reflect::get(value, &name.into()).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe_answers() {
    assert!(othello_ai::wasm_ready());
}

#[wasm_bindgen_test]
fn chooses_the_scripted_opening_move() {
    let board = Board::new().to_array();

    let decision = choose_move_seeded(&board, 1, 0).unwrap();
    let position = field(&decision, "position");

    assert_eq!(field(&position, "row").as_f64(), Some(2.0));
    assert_eq!(field(&position, "col").as_f64(), Some(3.0));
    assert_eq!(field(&decision, "timed_out").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn blocked_side_reports_no_position() {
    let mut cells = [1u8; 64];
    cells[0] = 0;

    let decision = choose_move_seeded(&cells, 1, 0).unwrap();
    let position = field(&decision, "position");

    assert!(position.is_null() || position.is_undefined());
}

#[wasm_bindgen_test]
fn malformed_input_is_rejected() {
    assert!(choose_move_seeded(&[0u8; 10], 1, 0).is_err());
    assert!(choose_move_seeded(&Board::new().to_array(), 9, 0).is_err());
}
