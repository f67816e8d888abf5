//! Sternhalma Tournament - Series and round-robin play
//!
//! This crate drives complete games between configured strategies:
//! - Single game execution with a move cap
//! - Series play (many games between two players), sequential or parallel
//! - Round-robin tournaments with standings

mod config;
mod game_runner;
mod round_robin;
mod series;

pub use config::{PlayerConfig, SeriesConfig, StrategyKind};
pub use game_runner::{play_game, GameOutcome, GameResult};
pub use round_robin::{run_round_robin, PairingResult, Standing, TournamentResult};
pub use series::{play_series, SeriesResult};
