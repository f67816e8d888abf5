//! Sternhalma Core - Game engine and AI
//!
//! This crate provides the core game logic for a triangular-board
//! Chinese chequers variant:
//! - Board geometry (hex grid with axial coordinates)
//! - Immutable board state with step and chained-jump move generation
//! - Distance-based position evaluation
//! - Move-choosing strategies (random, greedy, minimax, alpha-beta)

pub mod board;
pub mod error;
pub mod eval;
pub mod hex;
pub mod strategy;

// Re-exports for convenient access
pub use board::{Board, Move, Side};
pub use error::{BoardError, StrategyError};
pub use eval::{advance_cost, heuristic_value, target_corner};
pub use hex::{Hex, DIRECTIONS};
pub use strategy::{AlphaBeta, GreedyStrategy, Minimax, RandomStrategy, Strategy, DEFAULT_DEPTH};
