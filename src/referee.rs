//! Turn alternation between two strategies

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{GameResult, Mark},
    game::Game,
    players::Strategy,
};

/// Runs games between a fixed (X, O) strategy assignment
///
/// Each turn the referee asks the acting mark's strategy for a move and
/// applies it. Strategies must only propose legal moves; an illegal move
/// surfacing here is an internal consistency failure and propagates as a
/// fatal error rather than being retried.
pub struct Referee<'a> {
    x: &'a mut dyn Strategy,
    o: &'a mut dyn Strategy,
}

impl<'a> Referee<'a> {
    pub fn new(x: &'a mut dyn Strategy, o: &'a mut dyn Strategy) -> Self {
        Self { x, o }
    }

    /// Play one game to completion
    pub fn play_game(&mut self) -> Result<Game> {
        self.play_game_with(|_| {})
    }

    /// Play one game, invoking the callback after every applied move
    ///
    /// The console front-end uses the callback to redraw the board between
    /// turns.
    pub fn play_game_with(&mut self, mut on_turn: impl FnMut(&Game)) -> Result<Game> {
        let mut game = Game::new();

        while game.result() == GameResult::InProgress {
            let mark = game.board().to_move;
            let strategy: &mut dyn Strategy = match mark {
                Mark::X => &mut *self.x,
                Mark::O => &mut *self.o,
            };

            let mv = strategy.choose_move(game.board(), mark)?;
            game.play(mv)?;
            on_turn(&game);
        }

        Ok(game)
    }
}

/// Aggregate tallies over a batch of games
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl MatchStats {
    pub fn new(total_games: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save tallies to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
