//! Round-robin command - all-pairs tournament with standings

use anyhow::{ensure, Result};
use clap::Args;

use sternhalma_tournament::{run_round_robin, PlayerConfig, SeriesConfig};

use crate::players;

#[derive(Args)]
pub struct TournamentArgs {
    /// Comma-separated roster of strategies
    #[arg(long, default_value = "random,greedy,minimax,alphabeta")]
    pub players: String,

    /// Search depth for minimax and alpha-beta
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Games per series (each pair plays home and away)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: i8,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Moves per side before a game is drawn
    #[arg(long, default_value = "100")]
    pub move_cap: usize,

    /// Shuffle move lists for variety
    #[arg(long)]
    pub randomize: bool,
}

pub fn run(args: TournamentArgs) -> Result<()> {
    let roster: Vec<PlayerConfig> = args
        .players
        .split(',')
        .map(|spec| players::parse_config(spec.trim(), args.depth, args.randomize))
        .collect::<Result<_>>()?;
    ensure!(roster.len() >= 2, "a tournament needs at least two players");

    let config = SeriesConfig {
        games: args.games,
        board_size: args.size,
        move_cap: args.move_cap,
        seed: args.seed,
        parallel: true,
    };

    tracing::info!(
        "round robin: {} players, {} games per series",
        roster.len(),
        args.games
    );

    let result = run_round_robin(&roster, &config)?;

    for pairing in &result.pairings {
        println!(
            "{} - {}: {} / {} / {} (shortest {} moves)",
            pairing.player_a,
            pairing.player_b,
            pairing.a_wins,
            pairing.b_wins,
            pairing.draws,
            pairing.shortest_game
        );
    }

    println!();
    println!("Standings:");
    for (rank, standing) in result.standings.iter().enumerate() {
        println!(
            "{:>2}. {:<14} {:>5.1}  ({}W {}L {}D)",
            rank + 1,
            standing.name,
            standing.score,
            standing.wins,
            standing.losses,
            standing.draws
        );
    }

    Ok(())
}
