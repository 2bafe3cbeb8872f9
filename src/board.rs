use crate::types::Position;
use serde::Serialize;

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value this side's discs occupy.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Reversi board state: an 8x8 grid of tri-state cells with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(3, 3, Cell::White);
        board.set(3, 4, Cell::Black);
        board.set(4, 3, Cell::Black);
        board.set(4, 4, Cell::White);
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIZE + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * BOARD_SIZE + col] = cell;
    }

    /// Returns whether placing at `pos` is legal for `player`: the square is
    /// empty and at least one direction sandwiches a run of opponent discs.
    pub fn is_legal(&self, player: Player, pos: Position) -> bool {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= BOARD_SIZE || col >= BOARD_SIZE || self.get(row, col) != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.sandwiches(player, row, col, dr, dc))
    }

    /// All legal moves for `player`, in row-major order (row ascending, then
    /// column ascending). Callers rely on this order for tie-breaking.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Position::new(row, col);
                if self.is_legal(player, pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    pub fn has_legal_moves(&self, player: Player) -> bool {
        (0..BOARD_SIZE as u8).any(|row| {
            (0..BOARD_SIZE as u8).any(|col| self.is_legal(player, Position::new(row, col)))
        })
    }

    /// Places one disc for `player` and flips every sandwiched run.
    /// Returns the resulting board; `self` is untouched.
    /// Caller contract: `pos` must be legal for `player`.
    pub fn apply(&self, player: Player, pos: Position) -> Board {
        debug_assert!(
            self.is_legal(player, pos),
            "apply() requires a legal move, got {pos}"
        );

        let (row, col) = (pos.row as usize, pos.col as usize);
        let mut next = *self;
        next.set(row, col, player.cell());

        for (dr, dc) in DIRECTIONS {
            if !self.sandwiches(player, row, col, dr, dc) {
                continue;
            }
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            while next.get(r as usize, c as usize) == player.opponent().cell() {
                next.set(r as usize, c as usize, player.cell());
                r += dr;
                c += dc;
            }
        }

        next
    }

    pub fn count(&self, player: Player) -> u8 {
        self.cells.iter().filter(|&&c| c == player.cell()).count() as u8
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (u8, u8) {
        (self.count(Player::Black), self.count(Player::White))
    }

    pub fn occupied_count(&self) -> u8 {
        let (black_count, white_count) = self.counts();
        black_count + white_count
    }

    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.occupied_count()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (cell, slot) in self.cells.iter().zip(out.iter_mut()) {
            *slot = match cell {
                Cell::Empty => 0,
                Cell::Black => 1,
                Cell::White => 2,
            };
        }
        out
    }

    /// Parses the `[u8; 64]` encoding produced by [`Board::to_array`].
    pub fn from_array(data: &[u8]) -> Result<Board, String> {
        if data.len() != NUM_SQUARES {
            return Err(format!(
                "board must have exactly {NUM_SQUARES} cells, got {}",
                data.len()
            ));
        }

        let mut board = Board::empty();
        for (index, &value) in data.iter().enumerate() {
            board.cells[index] = match value {
                0 => Cell::Empty,
                1 => Cell::Black,
                2 => Cell::White,
                other => {
                    return Err(format!(
                        "invalid cell value {other} at index {index} (expected 0, 1 or 2)"
                    ));
                }
            };
        }
        Ok(board)
    }

    /// True when the scan from `(row, col)` along `(dr, dc)` crosses at least
    /// one opponent disc and ends on one of `player`'s own discs.
    fn sandwiches(&self, player: Player, row: usize, col: usize, dr: i32, dc: i32) -> bool {
        let opponent = player.opponent().cell();
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        let mut found_opponent = false;

        while in_bounds(r, c) && self.get(r as usize, c as usize) == opponent {
            r += dr;
            c += dc;
            found_opponent = true;
        }

        found_opponent && in_bounds(r, c) && self.get(r as usize, c as usize) == player.cell()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
