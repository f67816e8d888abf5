//! Round-robin tournaments with standings

use sternhalma_core::StrategyError;

use crate::config::{PlayerConfig, SeriesConfig};
use crate::series::{play_series, SeriesResult};

/// Home-and-away result for one pair of players
#[derive(Clone, Debug)]
pub struct PairingResult {
    pub player_a: String,
    pub player_b: String,
    /// Wins for player A across both series
    pub a_wins: u32,
    /// Wins for player B across both series
    pub b_wins: u32,
    pub draws: u32,
    /// Fewest moves per side in any game of the pairing
    pub shortest_game: usize,
}

/// One row of the final table
#[derive(Clone, Debug)]
pub struct Standing {
    pub name: String,
    /// Win = 1, draw = 0.5
    pub score: f32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Full tournament result
#[derive(Clone, Debug)]
pub struct TournamentResult {
    pub pairings: Vec<PairingResult>,
    /// Sorted by score, best first
    pub standings: Vec<Standing>,
}

/// Play every unordered pair of players home and away: one series with
/// the first player as white, a return series with colors swapped.
pub fn run_round_robin(
    players: &[PlayerConfig],
    config: &SeriesConfig,
) -> Result<TournamentResult, StrategyError> {
    let mut pairings = Vec::new();
    let mut standings: Vec<Standing> = players
        .iter()
        .map(|p| Standing {
            name: p.name(),
            score: 0.0,
            wins: 0,
            losses: 0,
            draws: 0,
        })
        .collect();

    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            let home = play_series(&players[i], &players[j], config)?;
            let away = play_series(&players[j], &players[i], config)?;

            let pairing = pair_result(&players[i], &players[j], &home, &away);
            record_standing(&mut standings[i], pairing.a_wins, pairing.b_wins, pairing.draws);
            record_standing(&mut standings[j], pairing.b_wins, pairing.a_wins, pairing.draws);
            pairings.push(pairing);
        }
    }

    standings.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(TournamentResult {
        pairings,
        standings,
    })
}

fn pair_result(
    a: &PlayerConfig,
    b: &PlayerConfig,
    home: &SeriesResult,
    away: &SeriesResult,
) -> PairingResult {
    PairingResult {
        player_a: a.name(),
        player_b: b.name(),
        a_wins: home.white_wins + away.black_wins,
        b_wins: home.black_wins + away.white_wins,
        draws: home.draws + away.draws,
        shortest_game: home.shortest_game.min(away.shortest_game),
    }
}

fn record_standing(standing: &mut Standing, wins: u32, losses: u32, draws: u32) {
    standing.wins += wins;
    standing.losses += losses;
    standing.draws += draws;
    standing.score += wins as f32 + 0.5 * draws as f32;
}
