//! Series play - multiple games between two players

use rayon::prelude::*;
use sternhalma_core::{Side, StrategyError};

use crate::config::{PlayerConfig, SeriesConfig};
use crate::game_runner::{play_game, GameOutcome, GameResult};

/// Aggregated result of a series of games
#[derive(Clone, Debug)]
pub struct SeriesResult {
    /// Wins for the player holding white
    pub white_wins: u32,
    /// Wins for the player holding black
    pub black_wins: u32,
    /// Games that reached the move cap
    pub draws: u32,
    /// Fewest moves per side in any game of the series
    pub shortest_game: usize,
    /// Total games played
    pub games_played: u32,
    /// Individual game outcomes
    pub outcomes: Vec<GameOutcome>,
}

impl SeriesResult {
    pub fn empty(move_cap: usize) -> Self {
        Self {
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            shortest_game: move_cap,
            games_played: 0,
            outcomes: Vec::new(),
        }
    }

    /// Combine two series results
    pub fn combine(&self, other: &SeriesResult) -> SeriesResult {
        let mut outcomes = self.outcomes.clone();
        outcomes.extend(other.outcomes.iter().cloned());

        SeriesResult {
            white_wins: self.white_wins + other.white_wins,
            black_wins: self.black_wins + other.black_wins,
            draws: self.draws + other.draws,
            shortest_game: self.shortest_game.min(other.shortest_game),
            games_played: self.games_played + other.games_played,
            outcomes,
        }
    }

    pub fn white_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.white_wins as f32 / self.games_played as f32
        }
    }

    pub fn black_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.black_wins as f32 / self.games_played as f32
        }
    }

    /// Series score for white: win = 1, draw = 0.5
    pub fn score_for_white(&self) -> f32 {
        self.white_wins as f32 + 0.5 * self.draws as f32
    }

    /// Series score for black: win = 1, draw = 0.5
    pub fn score_for_black(&self) -> f32 {
        self.black_wins as f32 + 0.5 * self.draws as f32
    }
}

/// Play a series of games, `white` holding white throughout.
///
/// Each game gets fresh strategies seeded from the config's base seed, so
/// a series is reproducible seed-for-seed regardless of execution order.
pub fn play_series(
    white: &PlayerConfig,
    black: &PlayerConfig,
    config: &SeriesConfig,
) -> Result<SeriesResult, StrategyError> {
    let outcomes: Vec<GameOutcome> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(|index| run_one_game(white, black, config, index))
            .collect::<Result<_, _>>()?
    } else {
        (0..config.games)
            .map(|index| run_one_game(white, black, config, index))
            .collect::<Result<_, _>>()?
    };

    Ok(aggregate(outcomes, config.move_cap))
}

fn run_one_game(
    white: &PlayerConfig,
    black: &PlayerConfig,
    config: &SeriesConfig,
    game_index: usize,
) -> Result<GameOutcome, StrategyError> {
    let seed = config.seed.wrapping_add(game_index as u64);
    let mut white = white.build(Side::White, seed)?;
    let mut black = black.build(Side::Black, seed.wrapping_add(1))?;
    play_game(white.as_mut(), black.as_mut(), config.board_size, config.move_cap)
}

fn aggregate(outcomes: Vec<GameOutcome>, move_cap: usize) -> SeriesResult {
    let mut result = SeriesResult::empty(move_cap);
    for outcome in outcomes {
        match outcome.result {
            GameResult::WhiteWins => result.white_wins += 1,
            GameResult::BlackWins => result.black_wins += 1,
            GameResult::Drawn => result.draws += 1,
        }
        result.shortest_game = result.shortest_game.min(outcome.moves_per_side);
        result.games_played += 1;
        result.outcomes.push(outcome);
    }
    result
}
