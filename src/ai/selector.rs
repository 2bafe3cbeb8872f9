use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use web_time::Duration;

use crate::ai::eval::Evaluation;
use crate::ai::search::{Searcher, DEFAULT_DEPTH};
use crate::board::{Board, Player};
use crate::types::{Decision, Position};

/// Disc count at or above which the selector runs the full search.
const ENDGAME_DISCS: u8 = 54;
/// Disc count below which the scripted opening applies
/// (4 starting discs plus up to 3 scripted moves per side).
const OPENING_DISCS: u8 = 10;
const DEFAULT_BUDGET_SECS: u64 = 3;

/// Fixed opening script. Not opening theory; each entry is legality-checked
/// against the live board before being returned.
const OPENING_BOOK: [(u8, u8); 3] = [(2, 3), (2, 2), (3, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Opening,
    Midgame,
    Endgame,
}

/// Top-level move policy: scripted opening, greedy midgame, searched endgame,
/// with a uniform random fallback over the legal moves.
pub struct MoveSelector {
    rng: StdRng,
    search_depth: u8,
    budget: Duration,
    timed_out: bool,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Selector with a reproducible fallback, for replays and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            search_depth: DEFAULT_DEPTH,
            budget: Duration::from_secs(DEFAULT_BUDGET_SECS),
            timed_out: false,
        }
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth;
    }

    pub fn set_budget(&mut self, budget: Duration) {
        self.budget = budget;
    }

    /// Chooses the next move for `player`, or `None` when there is no legal
    /// move (the caller must treat that as a pass, not an error).
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        self.decide(board, player).position
    }

    /// Like [`choose_move`](Self::choose_move), but also reports whether the
    /// endgame search hit its time budget.
    pub fn decide(&mut self, board: &Board, player: Player) -> Decision {
        self.timed_out = false;

        let position = match phase(board) {
            Phase::Opening => {
                // An exhausted or illegal script falls through to the greedy
                // midgame heuristic.
                opening_move(board, player).or_else(|| greedy_move(board, player))
            }
            Phase::Midgame => greedy_move(board, player),
            Phase::Endgame => self.search_move(board, player),
        };
        let position = position.or_else(|| self.random_move(board, player));

        Decision {
            position,
            timed_out: self.timed_out,
        }
    }

    fn search_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let mut searcher =
            Searcher::with_budget(Evaluation::Positional, self.search_depth, self.budget);
        let best = searcher.search(board, player);
        self.timed_out = searcher.timed_out();
        best
    }

    fn random_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        board.legal_moves(player).choose(&mut self.rng).copied()
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn phase(board: &Board) -> Phase {
    let occupied = board.occupied_count();
    if occupied >= ENDGAME_DISCS {
        Phase::Endgame
    } else if occupied < OPENING_DISCS {
        Phase::Opening
    } else {
        Phase::Midgame
    }
}

/// Next scripted move, indexed by how many moves this side has completed
/// (derived from the disc count under strict alternation).
fn opening_move(board: &Board, player: Player) -> Option<Position> {
    let own_plies = (board.occupied_count().saturating_sub(4) / 2) as usize;
    let (row, col) = *OPENING_BOOK.get(own_plies)?;
    let pos = Position::new(row, col);
    if board.is_legal(player, pos) {
        Some(pos)
    } else {
        None
    }
}

/// One-ply greedy: the move that maximizes the mover's own resulting disc
/// count. Strict `>` keeps the first row-major move on ties.
fn greedy_move(board: &Board, player: Player) -> Option<Position> {
    let mut best = None;
    let mut best_count = -1;

    for mv in board.legal_moves(player) {
        let next = board.apply(player, mv);
        let count = Evaluation::PieceCount.score(&next, player);
        if count > best_count {
            best_count = count;
            best = Some(mv);
        }
    }

    best
}
