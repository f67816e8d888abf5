//! Error types

use thiserror::Error;

use crate::board::Side;
use crate::hex::Hex;

/// Errors from board construction and move application.
///
/// `DestinationOccupied` and `NoPieceAt` indicate a logic defect in the
/// caller (move generators never produce such moves); callers propagate
/// them rather than recovering.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("destination {0} is already occupied")]
    DestinationOccupied(Hex),
    #[error("no piece at {0}")]
    NoPieceAt(Hex),
    #[error("white and black pieces overlap")]
    OverlappingPieces,
    #[error("{0:?} piece count does not match its goal")]
    PieceGoalMismatch(Side),
    #[error("piece at {0} is off the board")]
    OffBoard(Hex),
}

/// Errors from strategy configuration and move selection.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),
    #[error(transparent)]
    Board(#[from] BoardError),
}
