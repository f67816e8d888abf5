//! Series command - many games between two strategies

use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use serde::Serialize;

use sternhalma_tournament::{play_series, SeriesConfig, SeriesResult};

use crate::players;

#[derive(Args)]
pub struct SeriesArgs {
    /// White strategy
    #[arg(long, default_value = "random")]
    pub white: String,

    /// Black strategy
    #[arg(long, default_value = "greedy")]
    pub black: String,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Search depth for minimax and alpha-beta
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: i8,

    /// Random seed (each game derives its own)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Moves per side before a game is drawn
    #[arg(long, default_value = "100")]
    pub move_cap: usize,

    /// Shuffle move lists for variety
    #[arg(long)]
    pub randomize: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SeriesSummary {
    white: String,
    black: String,
    games: u32,
    white_wins: u32,
    black_wins: u32,
    draws: u32,
    shortest_game: usize,
}

pub fn run(args: SeriesArgs) -> Result<()> {
    let white = players::parse_config(&args.white, args.depth, args.randomize)?;
    let black = players::parse_config(&args.black, args.depth, args.randomize)?;

    tracing::info!(
        "starting series: {} vs {} ({} games, seed {})",
        white.name(),
        black.name(),
        args.games,
        args.seed
    );

    // One game at a time so the bar ticks; per-game seeds match what a
    // single play_series call would derive
    let progress = ProgressBar::new(args.games as u64);
    let mut result = SeriesResult::empty(args.move_cap);
    for game in 0..args.games {
        let config = SeriesConfig {
            games: 1,
            board_size: args.size,
            move_cap: args.move_cap,
            seed: args.seed.wrapping_add(game as u64),
            parallel: false,
        };
        result = result.combine(&play_series(&white, &black, &config)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let summary = SeriesSummary {
        white: white.name(),
        black: black.name(),
        games: result.games_played,
        white_wins: result.white_wins,
        black_wins: result.black_wins,
        draws: result.draws,
        shortest_game: result.shortest_game,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} (W) vs {} (B): {} games",
            summary.white, summary.black, summary.games
        );
        println!("  white wins:    {}", summary.white_wins);
        println!("  black wins:    {}", summary.black_wins);
        println!("  draws:         {}", summary.draws);
        println!("  shortest game: {} moves", summary.shortest_game);
    }

    Ok(())
}
