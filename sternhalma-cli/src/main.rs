//! Sternhalma CLI - Command-line interface
//!
//! Commands:
//! - play: play a single rendered game (engine or human players)
//! - series: play many games between two strategies
//! - round-robin: all-pairs tournament with standings

use clap::{Parser, Subcommand};

mod human;
mod play_cmd;
mod players;
mod series_cmd;
mod tournament_cmd;

#[derive(Parser)]
#[command(name = "sternhalma")]
#[command(about = "Hexagonal peg-jumping game engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two strategies
    Series(series_cmd::SeriesArgs),
    /// Run a round-robin tournament
    RoundRobin(tournament_cmd::TournamentArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Series(args) => series_cmd::run(args),
        Commands::RoundRobin(args) => tournament_cmd::run(args),
    }
}
