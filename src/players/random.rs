//! Uniformly random move selection

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    board::{Board, Mark, Move},
    players::Strategy,
};

/// Picks uniformly among the legal moves
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create with a deterministic seed for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<Move> {
        // Being asked to move on a finished game is a sequencing bug in the
        // caller, not a recoverable condition.
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }

        let moves = board.legal_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "random"
    }
}
