//! Player specification parsing

use anyhow::{bail, Result};
use sternhalma_tournament::PlayerConfig;

/// Parse a strategy name into a player configuration
pub fn parse_config(spec: &str, depth: u32, randomize: bool) -> Result<PlayerConfig> {
    let config = match spec.to_ascii_lowercase().as_str() {
        "random" => PlayerConfig::random(),
        "greedy" => PlayerConfig::greedy(),
        "minimax" => PlayerConfig::minimax(depth),
        "alphabeta" | "alpha-beta" => PlayerConfig::alpha_beta(depth),
        other => bail!(
            "unknown strategy '{other}' (expected random, greedy, minimax or alphabeta)"
        ),
    };
    Ok(if randomize {
        config.with_randomize()
    } else {
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sternhalma_tournament::StrategyKind;

    #[test]
    fn test_parse_known_strategies() {
        assert_eq!(
            parse_config("random", 2, false).unwrap().kind,
            StrategyKind::Random
        );
        assert_eq!(
            parse_config("Greedy", 2, true).unwrap().kind,
            StrategyKind::Greedy
        );
        assert_eq!(
            parse_config("alpha-beta", 3, false).unwrap().depth,
            3
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_config("mcts", 2, false).is_err());
    }
}
