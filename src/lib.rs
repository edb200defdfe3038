//! Tic-tac-toe engine and console game
//!
//! The crate provides a 3x3 board with full rule enforcement, three
//! move-selection strategies (human console input, uniform random, and
//! exhaustive minimax), and a referee that drives games between any two
//! strategies. The `tictactoe` binary exposes interactive play and batch
//! simulation on top of the library.

pub mod board;
pub mod cli;
pub mod console;
pub mod error;
pub mod game;
pub mod lines;
pub mod players;
pub mod referee;

pub use board::{Board, Cell, GameResult, Mark, Move};
pub use error::{Error, Result};
pub use game::Game;
pub use players::{Strategy, StrategyKind};
pub use referee::{MatchStats, Referee};
