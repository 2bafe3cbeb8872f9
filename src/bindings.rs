use wasm_bindgen::prelude::*;

use crate::ai::selector::MoveSelector;
use crate::board::{Board, Player};

/// Chooses a move for `player` on `board`.
///
/// - `board`: 64 bytes in row-major order, 0=empty, 1=black, 2=white.
/// - `player`: 1=black, 2=white.
///
/// Returns the serialized [`Decision`](crate::types::Decision); its
/// `position` field is absent when the side to move has no legal move.
/// Malformed input is a JS error.
#[wasm_bindgen]
pub fn choose_move_js(board: &[u8], player: u8) -> Result<JsValue, JsValue> {
    decide(board, player, MoveSelector::new())
}

/// Same as [`choose_move_js`] with a fixed RNG seed, so replays of the same
/// position pick the same fallback move.
#[wasm_bindgen]
pub fn choose_move_seeded(board: &[u8], player: u8, seed: u64) -> Result<JsValue, JsValue> {
    decide(board, player, MoveSelector::with_seed(seed))
}

fn decide(board: &[u8], player: u8, mut selector: MoveSelector) -> Result<JsValue, JsValue> {
    let board = Board::from_array(board).map_err(|e| JsValue::from_str(&e))?;
    let player = parse_player(player).map_err(|e| JsValue::from_str(&e))?;

    let decision = selector.decide(&board, player);
    serde_wasm_bindgen::to_value(&decision).map_err(JsValue::from)
}

fn parse_player(player: u8) -> Result<Player, String> {
    match player {
        1 => Ok(Player::Black),
        2 => Ok(Player::White),
        other => Err(format!("invalid player value: {other} (expected 1 or 2)")),
    }
}
