//! Play command - a single rendered game

use anyhow::{Context, Result};
use clap::Args;

use sternhalma_core::{Board, Move, Side, Strategy};

use crate::human::HumanInput;
use crate::players;

#[derive(Args)]
pub struct PlayArgs {
    /// White strategy: random, greedy, minimax, alphabeta or human
    #[arg(long, default_value = "greedy")]
    pub white: String,

    /// Black strategy: random, greedy, minimax, alphabeta or human
    #[arg(long, default_value = "alphabeta")]
    pub black: String,

    /// Search depth for minimax and alpha-beta
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: i8,

    /// Shuffle move lists for variety
    #[arg(long)]
    pub randomize: bool,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Moves per side before the game is drawn
    #[arg(long, default_value = "100")]
    pub move_cap: usize,
}

/// A seat at the board: an engine strategy or a human at the keyboard
enum Player {
    Engine(Box<dyn Strategy>),
    Human(HumanInput),
}

impl Player {
    fn build(spec: &str, side: Side, args: &PlayArgs, seed: u64) -> Result<Self> {
        if spec.eq_ignore_ascii_case("human") {
            return Ok(Player::Human(HumanInput::new(side)));
        }
        let config = players::parse_config(spec, args.depth, args.randomize)?;
        Ok(Player::Engine(config.build(side, seed)?))
    }

    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        match self {
            Player::Engine(strategy) => Ok(strategy.choose_move(board)?),
            Player::Human(input) => input.choose_move(board),
        }
    }

    fn name(&self) -> String {
        match self {
            Player::Engine(strategy) => strategy.name(),
            Player::Human(_) => "Human".to_string(),
        }
    }
}

pub fn run(args: PlayArgs) -> Result<()> {
    let mut white = Player::build(&args.white, Side::White, &args, args.seed)?;
    let mut black = Player::build(&args.black, Side::Black, &args, args.seed.wrapping_add(1))?;

    println!("{} (W) - {} (B)", white.name(), black.name());
    let mut board = Board::start(args.size);
    println!("{}", board);

    for round in 1..=args.move_cap {
        let mv = white.choose_move(&board)?;
        tracing::info!("round {}: white {}", round, mv);
        board = board.apply_move(&mv).context("applying white move")?;
        println!("{}", board);
        if board.has_won(Side::White) {
            println!("White won after {} moves", round);
            return Ok(());
        }

        let mv = black.choose_move(&board)?;
        tracing::info!("round {}: black {}", round, mv);
        board = board.apply_move(&mv).context("applying black move")?;
        println!("{}", board);
        if board.has_won(Side::Black) {
            println!("Black won after {} moves", round);
            return Ok(());
        }
    }

    println!("Draw after {} moves per side", args.move_cap);
    Ok(())
}
