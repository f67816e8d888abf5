//! Configuration types for series and tournament play

use sternhalma_core::{
    AlphaBeta, GreedyStrategy, Minimax, RandomStrategy, Side, Strategy, StrategyError,
    DEFAULT_DEPTH,
};

/// Which strategy a player uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Greedy,
    Minimax,
    AlphaBeta,
}

/// A player: strategy kind plus its configuration. Side and seed are
/// supplied at build time so one config can play both colors.
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub kind: StrategyKind,
    /// Search depth (minimax and alpha-beta only)
    pub depth: u32,
    /// Pre-shuffle move lists for variety (greedy and minimax only)
    pub randomize: bool,
}

impl PlayerConfig {
    pub fn random() -> Self {
        Self {
            kind: StrategyKind::Random,
            depth: DEFAULT_DEPTH,
            randomize: false,
        }
    }

    pub fn greedy() -> Self {
        Self {
            kind: StrategyKind::Greedy,
            depth: DEFAULT_DEPTH,
            randomize: false,
        }
    }

    pub fn minimax(depth: u32) -> Self {
        Self {
            kind: StrategyKind::Minimax,
            depth,
            randomize: false,
        }
    }

    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            kind: StrategyKind::AlphaBeta,
            depth,
            randomize: false,
        }
    }

    pub fn with_randomize(mut self) -> Self {
        self.randomize = true;
        self
    }

    /// Display name, matching the strategy's own
    pub fn name(&self) -> String {
        match self.kind {
            StrategyKind::Random => "Random".to_string(),
            StrategyKind::Greedy => "Greedy".to_string(),
            StrategyKind::Minimax => format!("Minimax({})", self.depth),
            StrategyKind::AlphaBeta => format!("AlphaBeta({})", self.depth),
        }
    }

    /// Build a fresh strategy for the given side and seed
    pub fn build(&self, side: Side, seed: u64) -> Result<Box<dyn Strategy>, StrategyError> {
        Ok(match self.kind {
            StrategyKind::Random => Box::new(RandomStrategy::with_seed(side, seed)),
            StrategyKind::Greedy => Box::new(GreedyStrategy::with_options(
                side,
                self.randomize,
                seed,
            )),
            StrategyKind::Minimax => Box::new(Minimax::with_options(
                side,
                self.depth,
                self.randomize,
                seed,
            )?),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::new(side, self.depth)?),
        })
    }
}

/// Configuration for a series of games
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,
    /// Board side length
    pub board_size: i8,
    /// Moves per side before a game is declared drawn
    pub move_cap: usize,
    /// Base random seed; each game derives its own from it
    pub seed: u64,
    /// Run games in parallel
    pub parallel: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            board_size: 7,
            move_cap: 100,
            seed: 42,
            parallel: false,
        }
    }
}

impl SeriesConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board_size(mut self, board_size: i8) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_move_cap(mut self, move_cap: usize) -> Self {
        self.move_cap = move_cap;
        self
    }

    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_config_names() {
        assert_eq!(PlayerConfig::random().name(), "Random");
        assert_eq!(PlayerConfig::greedy().name(), "Greedy");
        assert_eq!(PlayerConfig::minimax(3).name(), "Minimax(3)");
        assert_eq!(PlayerConfig::alpha_beta(2).name(), "AlphaBeta(2)");
    }

    #[test]
    fn test_build_matches_strategy_name() {
        let config = PlayerConfig::alpha_beta(2);
        let strategy = config.build(Side::White, 42).unwrap();
        assert_eq!(strategy.name(), config.name());
        assert_eq!(strategy.side(), Side::White);
    }

    #[test]
    fn test_build_rejects_zero_depth() {
        let config = PlayerConfig::minimax(0);
        assert!(config.build(Side::White, 42).is_err());
    }

    #[test]
    fn test_series_config_defaults() {
        let config = SeriesConfig::default();
        assert_eq!(config.games, 10);
        assert_eq!(config.board_size, 7);
        assert_eq!(config.move_cap, 100);
        assert!(!config.parallel);
    }

    #[test]
    fn test_series_config_builders() {
        let config = SeriesConfig::new(4).with_seed(7).with_board_size(5).parallel();
        assert_eq!(config.games, 4);
        assert_eq!(config.seed, 7);
        assert_eq!(config.board_size, 5);
        assert!(config.parallel);
    }
}
