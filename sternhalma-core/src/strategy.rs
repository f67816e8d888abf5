//! Move-choosing strategies
//!
//! All strategies expose the same capability: pick a move for their side
//! on a given board. Random and Greedy look one ply ahead at most;
//! Minimax and AlphaBeta run a fixed-depth adversarial search over the
//! shared distance heuristic.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Move, Side};
use crate::error::StrategyError;
use crate::eval::{advance_cost, heuristic_value};

/// Default search depth for minimax and alpha-beta
pub const DEFAULT_DEPTH: u32 = 2;

const DEFAULT_SEED: u64 = 42;

/// A move-choosing policy for one side.
///
/// The side is settable after construction so players can swap colors
/// between games of a series.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError>;
    fn set_side(&mut self, side: Side);
    fn side(&self) -> Side;
    fn name(&self) -> String;
}

// ============================================================================
// RANDOM
// ============================================================================

/// Uniform choice among non-retreating moves
pub struct RandomStrategy {
    side: Side,
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new(side: Side) -> Self {
        Self::with_seed(side, DEFAULT_SEED)
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        // Restrict to forward or lateral moves
        let moves: Vec<Move> = board
            .generate_all_moves(self.side)
            .into_iter()
            .filter(|mv| match self.side {
                Side::White => mv.direction() >= 0,
                Side::Black => mv.direction() <= 0,
            })
            .collect();
        moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or(StrategyError::NoLegalMoves)
    }

    fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> String {
        "Random".to_string()
    }
}

// ============================================================================
// GREEDY
// ============================================================================

/// Minimizes the mover's total piece distance to its target corner,
/// looking one move ahead. Ties break by enumeration order, optionally
/// pre-shuffled for variety.
pub struct GreedyStrategy {
    side: Side,
    randomize: bool,
    rng: ChaCha8Rng,
}

impl GreedyStrategy {
    pub fn new(side: Side) -> Self {
        Self::with_options(side, false, DEFAULT_SEED)
    }

    pub fn with_options(side: Side, randomize: bool, seed: u64) -> Self {
        Self {
            side,
            randomize,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for GreedyStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        let mut moves = board.generate_all_moves(self.side);
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMoves);
        }
        if self.randomize {
            moves.shuffle(&mut self.rng);
        }

        let mut best_index = 0;
        let mut best_cost = f32::INFINITY;
        for (index, mv) in moves.iter().enumerate() {
            let cost = advance_cost(&board.apply_move(mv)?, self.side);
            if cost < best_cost {
                best_cost = cost;
                best_index = index;
            }
        }
        Ok(moves.swap_remove(best_index))
    }

    fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> String {
        "Greedy".to_string()
    }
}

// ============================================================================
// MINIMAX
// ============================================================================

/// Full fixed-depth game-tree search.
///
/// Plies alternate sides starting from the strategy's own side; leaves
/// evaluate with [`heuristic_value`] from that side's perspective.
pub struct Minimax {
    side: Side,
    depth: u32,
    randomize: bool,
    rng: ChaCha8Rng,
}

impl Minimax {
    pub fn new(side: Side, depth: u32) -> Result<Self, StrategyError> {
        Self::with_options(side, depth, false, DEFAULT_SEED)
    }

    pub fn with_options(
        side: Side,
        depth: u32,
        randomize: bool,
        seed: u64,
    ) -> Result<Self, StrategyError> {
        if depth == 0 {
            return Err(StrategyError::InvalidDepth(depth));
        }
        Ok(Self {
            side,
            depth,
            randomize,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
    ) -> Result<(Option<Move>, f32), StrategyError> {
        if depth == 0 || board.has_won(Side::White) || board.has_won(Side::Black) {
            return Ok((None, heuristic_value(board, self.side)));
        }

        let mover = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let mut moves = board.generate_all_moves(mover);
        if self.randomize {
            moves.shuffle(&mut self.rng);
        }

        if maximizing {
            let mut best: (Option<Move>, f32) = (None, f32::NEG_INFINITY);
            for mv in moves {
                let child = board.apply_move(&mv)?;
                let (_, value) = self.search(&child, depth - 1, false)?;
                if value > best.1 {
                    best = (Some(mv), value);
                }
            }
            Ok(best)
        } else {
            let mut best: (Option<Move>, f32) = (None, f32::INFINITY);
            for mv in moves {
                let child = board.apply_move(&mv)?;
                let (_, value) = self.search(&child, depth - 1, true)?;
                if value < best.1 {
                    best = (Some(mv), value);
                }
            }
            Ok(best)
        }
    }
}

impl Strategy for Minimax {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        let depth = self.depth;
        let (mv, _) = self.search(board, depth, true)?;
        mv.ok_or(StrategyError::NoLegalMoves)
    }

    fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> String {
        format!("Minimax({})", self.depth)
    }
}

// ============================================================================
// ALPHA-BETA
// ============================================================================

/// Minimax with alpha-beta bounds: siblings stop being explored once the
/// maximizer's guarantee meets the minimizer's. Chooses a move of the same
/// value as [`Minimax`] over the same tree.
pub struct AlphaBeta {
    side: Side,
    depth: u32,
}

impl AlphaBeta {
    pub fn new(side: Side, depth: u32) -> Result<Self, StrategyError> {
        if depth == 0 {
            return Err(StrategyError::InvalidDepth(depth));
        }
        Ok(Self { side, depth })
    }

    fn search(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: f32,
        mut beta: f32,
        maximizing: bool,
    ) -> Result<(Option<Move>, f32), StrategyError> {
        if depth == 0 || board.has_won(Side::White) || board.has_won(Side::Black) {
            return Ok((None, heuristic_value(board, self.side)));
        }

        if maximizing {
            let mut best: (Option<Move>, f32) = (None, f32::NEG_INFINITY);
            for mv in board.generate_all_moves(self.side) {
                let child = board.apply_move(&mv)?;
                let (_, value) = self.search(&child, depth - 1, alpha, beta, false)?;
                if value > best.1 {
                    best = (Some(mv), value);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best: (Option<Move>, f32) = (None, f32::INFINITY);
            for mv in board.generate_all_moves(self.side.opponent()) {
                let child = board.apply_move(&mv)?;
                let (_, value) = self.search(&child, depth - 1, alpha, beta, true)?;
                if value < best.1 {
                    best = (Some(mv), value);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        }
    }
}

impl Strategy for AlphaBeta {
    fn choose_move(&mut self, board: &Board) -> Result<Move, StrategyError> {
        let (mv, _) = self.search(board, self.depth, f32::NEG_INFINITY, f32::INFINITY, true)?;
        mv.ok_or(StrategyError::NoLegalMoves)
    }

    fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> String {
        format!("AlphaBeta({})", self.depth)
    }
}

// ============================================================================
// TESTS
// ============================================================================
