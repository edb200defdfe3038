//! Play command - interactive game in the console

use anyhow::Result;
use clap::Parser;

use crate::{console, game::Game, players::StrategyKind, referee::Referee};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the console")]
pub struct PlayArgs {
    /// Strategy controlling X (X moves first)
    #[arg(short = 'X', long = "player-x", value_enum, default_value_t = StrategyKind::Human)]
    pub player_x: StrategyKind,

    /// Strategy controlling O
    #[arg(short = 'O', long = "player-o", value_enum, default_value_t = StrategyKind::Minimax)]
    pub player_o: StrategyKind,

    /// Random seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut x = args.player_x.build(args.seed);
    let mut o = args.player_o.build(args.seed.map(|s| s.wrapping_add(1)));

    console::clear_screen();
    print!("{}", console::render(&Game::new()));

    let mut referee = Referee::new(x.as_mut(), o.as_mut());
    referee.play_game_with(|game| {
        console::clear_screen();
        print!("{}", console::render(game));
    })?;

    Ok(())
}
