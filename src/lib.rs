use wasm_bindgen::prelude::*;

pub mod ai;
pub mod bindings;
pub mod board;
pub mod types;

pub use ai::selector::MoveSelector;
pub use board::{Board, Cell, Player};
pub use types::{Decision, Position};

/// Chooses the next move for `player` on `board`, or `None` when the side to
/// move has no legal move (a pass, not an error).
pub fn choose_move(board: &Board, player: Player) -> Option<Position> {
    MoveSelector::new().choose_move(board, player)
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
