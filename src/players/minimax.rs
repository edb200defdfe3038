//! Exhaustive minimax search

use std::collections::HashMap;

use crate::{
    Error, Result,
    board::{Board, GameResult, Mark, Move},
    players::Strategy,
};

/// Plays perfectly by searching the full game tree
///
/// Terminal positions score +1 for a win by the searching mark, -1 for a
/// loss, and 0 for a draw; interior plies alternate between maximizing and
/// minimizing. Ties between equally scored root moves are broken by taking
/// the first in row-major order, so move choice is fully deterministic.
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }

        let mut memo = HashMap::new();
        let mut best: Option<(Move, i32)> = None;

        for mv in board.legal_moves() {
            let child = board.apply(mv, mark)?;
            let value = score(&child, mark, &mut memo);
            // Strict comparison keeps the earliest move among equal scores
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((mv, value)),
            }
        }

        best.map(|(mv, _)| mv).ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Score a position from the perspective of the mark that invoked the search
///
/// Positions are memoized by board value; the 3x3 tree is small enough that
/// this is an optimization only, with no effect on the chosen move.
fn score(board: &Board, root: Mark, memo: &mut HashMap<Board, i32>) -> i32 {
    if let Some(&value) = memo.get(board) {
        return value;
    }

    let value = match board.evaluate() {
        GameResult::Win(winner) if winner == root => 1,
        GameResult::Win(_) => -1,
        GameResult::Draw => 0,
        GameResult::InProgress => {
            let maximizing = board.to_move == root;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for mv in board.legal_moves() {
                let child = board
                    .apply(mv, board.to_move)
                    .expect("legal move generation should not fail");
                let value = score(&child, root, memo);
                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
            best
        }
    };

    memo.insert(*board, value);
    value
}
