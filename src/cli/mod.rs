//! Command-line interface for the tic-tac-toe console game

pub mod commands;
pub mod output;
