use serde::Serialize;
use std::fmt;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of one move decision, returned from the WASM API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Contract:
    /// - `Some` holds a legal move for the side to move.
    /// - `None` means the side to move must pass (never an error).
    pub position: Option<Position>,
    /// Contract:
    /// - `true` when the endgame search ran out of time and `position` is
    ///   the best move completed before the cutoff.
    /// - `false` for every decision that ran to completion.
    pub timed_out: bool,
}
