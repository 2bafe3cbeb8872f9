use crate::board::{Board, Player};
use once_cell::sync::Lazy;

const BOARD_SIZE: usize = 8;
const QUADRANT_SIZE: usize = BOARD_SIZE / 2;

/// Upper-left quadrant of the positional weight table. Corners are strongly
/// positive, corner-adjacent squares negative to discourage corner feeding.
const WEIGHT_QUADRANT: [[i32; QUADRANT_SIZE]; QUADRANT_SIZE] = [
    [20, -3, 11, 8],
    [-3, -7, -4, 1],
    [11, -4, 2, 2],
    [8, 1, 2, -3],
];

/// Full 8x8 table, mirrored from the quadrant so it is symmetric under the
/// board's rotations and reflections by construction.
static WEIGHTS: Lazy<[i32; BOARD_SIZE * BOARD_SIZE]> = Lazy::new(|| {
    let mut table = [0i32; BOARD_SIZE * BOARD_SIZE];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let qr = row.min(BOARD_SIZE - 1 - row);
            let qc = col.min(BOARD_SIZE - 1 - col);
            table[row * BOARD_SIZE + col] = WEIGHT_QUADRANT[qr][qc];
        }
    }
    table
});

/// Leaf scoring strategy. A decision pipeline selects exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The mover's raw disc count. Used by the one-ply greedy heuristic.
    PieceCount,
    /// Weighted disc differential over the static table. Zero-sum:
    /// `score(b, p) == -score(b, p.opponent())`.
    Positional,
}

impl Evaluation {
    pub fn score(self, board: &Board, player: Player) -> i32 {
        match self {
            Evaluation::PieceCount => board.count(player) as i32,
            Evaluation::Positional => positional_score(board, player),
        }
    }
}

fn positional_score(board: &Board, player: Player) -> i32 {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let mut total = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let weight = WEIGHTS[row * BOARD_SIZE + col];
            let cell = board.get(row, col);
            if cell == own {
                total += weight;
            } else if cell == opponent {
                total -= weight;
            }
        }
    }

    total
}
