use web_time::{Duration, Instant};

use crate::ai::eval::Evaluation;
use crate::board::{Board, Player};
use crate::types::Position;

const DEFAULT_BUDGET_SECS: u64 = 3;
pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStatus {
    Complete(i32),
    TimedOut,
}

/// Depth-bounded minimax with alpha-beta pruning and a wall-clock budget.
///
/// The budget is checked on every node entry, so an overrun unwinds the
/// recursion and the root keeps the best move completed before the cutoff
/// instead of discarding the whole computation.
pub struct Searcher {
    evaluation: Evaluation,
    max_depth: u8,
    budget: Duration,
    start_time: Instant,
    timed_out: bool,
}

impl Searcher {
    pub fn new(evaluation: Evaluation, max_depth: u8) -> Self {
        Self::with_budget(
            evaluation,
            max_depth,
            Duration::from_secs(DEFAULT_BUDGET_SECS),
        )
    }

    pub fn with_budget(evaluation: Evaluation, max_depth: u8, budget: Duration) -> Self {
        Self {
            evaluation,
            max_depth,
            budget,
            start_time: Instant::now(),
            timed_out: false,
        }
    }

    /// Searches the best move for `player`.
    /// Returns `None` when `player` has no legal move.
    pub fn search(&mut self, board: &Board, player: Player) -> Option<Position> {
        self.start_time = Instant::now();
        self.timed_out = false;

        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        if moves.len() == 1 {
            return Some(moves[0]);
        }

        let mut best_move = moves[0];
        let mut best_value = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for mv in moves {
            let child = board.apply(player, mv);
            let depth = self.max_depth.saturating_sub(1);
            match self.minimax(&child, player.opponent(), depth, alpha, beta, false) {
                SearchStatus::TimedOut => break,
                SearchStatus::Complete(value) => {
                    // Strict `>` keeps the first row-major move on ties.
                    if value > best_value {
                        best_value = value;
                        best_move = mv;
                    }
                    alpha = alpha.max(value);
                }
            }
        }

        Some(best_move)
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Leaf nodes are scored for the side to move at that node; with the
    /// zero-sum positional evaluation the min/max roles stay consistent.
    fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchStatus {
        if self.start_time.elapsed() >= self.budget {
            self.timed_out = true;
            return SearchStatus::TimedOut;
        }

        let moves = board.legal_moves(player);
        if depth == 0 || moves.is_empty() {
            return SearchStatus::Complete(self.evaluation.score(board, player));
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let child = board.apply(player, mv);
                match self.minimax(&child, player.opponent(), depth - 1, alpha, beta, false) {
                    SearchStatus::TimedOut => return SearchStatus::TimedOut,
                    SearchStatus::Complete(value) => {
                        best = best.max(value);
                        alpha = alpha.max(value);
                        if beta <= alpha {
                            break;
                        }
                    }
                }
            }
            SearchStatus::Complete(best)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let child = board.apply(player, mv);
                match self.minimax(&child, player.opponent(), depth - 1, alpha, beta, true) {
                    SearchStatus::TimedOut => return SearchStatus::TimedOut,
                    SearchStatus::Complete(value) => {
                        best = best.min(value);
                        beta = beta.min(value);
                        if beta <= alpha {
                            break;
                        }
                    }
                }
            }
            SearchStatus::Complete(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Minimax without pruning, as a semantic reference for the pruned search.
    fn plain_minimax(
        evaluation: Evaluation,
        board: &Board,
        player: Player,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        let moves = board.legal_moves(player);
        if depth == 0 || moves.is_empty() {
            return evaluation.score(board, player);
        }

        let values = moves.into_iter().map(|mv| {
            let child = board.apply(player, mv);
            plain_minimax(evaluation, &child, player.opponent(), depth - 1, !maximizing)
        });

        if maximizing {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    fn random_board(seed: u64, plies: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = Player::Black;
        for _ in 0..plies {
            if let Some(&mv) = board.legal_moves(player).choose(&mut rng) {
                board = board.apply(player, mv);
            }
            player = player.opponent();
        }
        board
    }

    #[test]
    fn alpha_beta_value_equals_plain_minimax() {
        for seed in 0..10u64 {
            let board = random_board(seed + 50, 14);
            let mut searcher = Searcher::new(Evaluation::Positional, 3);
            searcher.start_time = Instant::now();

            let pruned = searcher.minimax(&board, Player::Black, 3, i32::MIN, i32::MAX, true);
            let plain = plain_minimax(Evaluation::Positional, &board, Player::Black, 3, true);

            assert_eq!(pruned, SearchStatus::Complete(plain));
        }
    }

    #[test]
    fn pruned_search_matches_plain_minimax_value() {
        for seed in 0..10u64 {
            let board = random_board(seed, 20);
            let mut searcher = Searcher::new(Evaluation::Positional, 3);

            // Recompute the root loop the way search() does, but without
            // pruning, and compare the winning move.
            let mut best_move = None;
            let mut best_value = i32::MIN;
            for mv in board.legal_moves(Player::Black) {
                let child = board.apply(Player::Black, mv);
                let value =
                    plain_minimax(Evaluation::Positional, &child, Player::White, 2, false);
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
            }

            assert_eq!(searcher.search(&board, Player::Black), best_move);
            assert!(!searcher.timed_out());
        }
    }

    #[test]
    fn search_returns_single_legal_move_immediately() {
        // Whole board white except a0 empty and b0 black: white's only
        // legal move is the empty corner.
        let mut cells = [2u8; 64];
        cells[0] = 0;
        cells[1] = 1;
        let board = Board::from_array(&cells).unwrap();

        let mut searcher = Searcher::new(Evaluation::Positional, DEFAULT_DEPTH);

        assert_eq!(
            searcher.search(&board, Player::White),
            Some(Position::new(0, 0))
        );
        assert!(!searcher.timed_out());
    }

    #[test]
    fn search_without_legal_moves_returns_none() {
        let mut cells = [1u8; 64];
        cells[0] = 0;
        let board = Board::from_array(&cells).unwrap();

        let mut searcher = Searcher::new(Evaluation::Positional, DEFAULT_DEPTH);

        assert_eq!(searcher.search(&board, Player::Black), None);
    }

    #[test]
    fn expired_budget_still_yields_a_legal_move() {
        let board = Board::new();
        let mut searcher =
            Searcher::with_budget(Evaluation::Positional, DEFAULT_DEPTH, Duration::ZERO);

        let mv = searcher.search(&board, Player::Black).unwrap();

        assert!(board.is_legal(Player::Black, mv));
        assert!(searcher.timed_out());
    }

    #[test]
    fn symmetric_root_ties_break_to_first_row_major_move() {
        let mut searcher = Searcher::new(Evaluation::Positional, 2);

        // The four opening moves are rotationally equivalent, so all score
        // the same and the first row-major one must win.
        assert_eq!(
            searcher.search(&Board::new(), Player::Black),
            Some(Position::new(2, 3))
        );
    }
}
