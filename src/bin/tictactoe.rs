//! Console tic-tac-toe with selectable strategies per mark

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with human, random, and minimax players", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the console
    Play(tictactoe::cli::commands::play::PlayArgs),

    /// Run automated games and report statistics
    Simulate(tictactoe::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe::cli::commands::play::execute(args),
        Commands::Simulate(args) => tictactoe::cli::commands::simulate::execute(args),
    }
}
