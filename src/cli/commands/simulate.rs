//! Simulate command - strategy-vs-strategy batches with aggregate statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Mark,
    cli::output,
    players::StrategyKind,
    referee::{MatchStats, Referee},
};

#[derive(Parser, Debug)]
#[command(about = "Run automated games and report statistics")]
pub struct SimulateArgs {
    /// Strategy controlling X
    #[arg(short = 'X', long = "player-x", value_enum)]
    pub player_x: StrategyKind,

    /// Strategy controlling O
    #[arg(short = 'O', long = "player-o", value_enum)]
    pub player_o: StrategyKind,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export statistics to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    if args.player_x == StrategyKind::Human || args.player_o == StrategyKind::Human {
        return Err(anyhow::anyhow!(
            "simulate requires automated strategies; use `play` for human games"
        ));
    }

    let mut x = args.player_x.build(args.seed);
    let mut o = args.player_o.build(args.seed.map(|s| s.wrapping_add(1)));

    output::print_section("Simulation");
    output::print_kv("X strategy", &args.player_x.to_string());
    output::print_kv("O strategy", &args.player_o.to_string());
    output::print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let mut referee = Referee::new(x.as_mut(), o.as_mut());
    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;

    for _ in 0..args.games {
        let game = referee.play_game()?;
        match game.board().winner() {
            Some(Mark::X) => x_wins += 1,
            Some(Mark::O) => o_wins += 1,
            None => draws += 1,
        }
    }

    let stats = MatchStats::new(args.games, x_wins, o_wins, draws);

    output::print_section("Results");
    output::print_kv("X wins", &output::format_share(stats.x_wins, stats.x_win_rate));
    output::print_kv("O wins", &output::format_share(stats.o_wins, stats.o_win_rate));
    output::print_kv("Draws", &output::format_share(stats.draws, stats.draw_rate));

    if let Some(path) = &args.export {
        stats.save(path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
