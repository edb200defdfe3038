//! A single game: move history plus the derived result

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    board::{Board, GameResult, Move},
};

/// A game in progress or finished
///
/// The referee owns the game and mutates it one move at a time. The result is
/// recomputed from the board on demand rather than stored, and terminal
/// states are absorbing: `play` rejects further moves once the game is over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with an empty board and X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Current classification of the position
    pub fn result(&self) -> GameResult {
        self.board.evaluate()
    }

    /// Play a move for the mark whose turn it is
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` if the game already has a result, or the
    /// underlying illegal-move error if the target cell is unusable.
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        if self.result() != GameResult::InProgress {
            return Err(Error::GameOver);
        }

        self.board = self.board.apply(mv, self.board.to_move)?;
        self.moves.push(mv);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
