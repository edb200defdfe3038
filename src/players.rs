//! Move-selection strategies
//!
//! Every player is a [`Strategy`]: given the current board and the mark it
//! controls, it proposes one move. Strategies never mutate the board and hold
//! no state across turns beyond their own random number generator.

pub mod human;
pub mod minimax;
pub mod random;

use std::fmt;

use clap::ValueEnum;

pub use human::HumanStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::{
    Result,
    board::{Board, Mark, Move},
};

/// A move-selection strategy for one mark
pub trait Strategy {
    /// Select a move for `mark` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is terminal (no legal moves), or if the
    /// strategy's input source fails.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Move>;

    /// Short name for reporting
    fn name(&self) -> &str;
}

/// Selectable strategy kinds for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Human,
    Random,
    Minimax,
}

impl StrategyKind {
    /// Construct the strategy, seeding random play when a seed is given
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Human => Box::new(HumanStrategy::from_stdin()),
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Human => write!(f, "human"),
            StrategyKind::Random => write!(f, "random"),
            StrategyKind::Minimax => write!(f, "minimax"),
        }
    }
}
