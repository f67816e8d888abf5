//! Position evaluation

use crate::board::{Board, Side};
use crate::hex::Hex;

/// The corner a side is racing toward: the far corner for white, the
/// origin for black.
pub fn target_corner(board: &Board, side: Side) -> Hex {
    match side {
        Side::White => Hex::new(board.size() - 1, board.size() - 1),
        Side::Black => Hex::new(0, 0),
    }
}

/// Sum of a side's piece distances to its target corner. Lower is better.
pub fn advance_cost(board: &Board, side: Side) -> f32 {
    let target = target_corner(board, side);
    board.pieces(side).map(|p| p.distance_to(target)).sum()
}

/// Positional value from `side`'s perspective: how far black still has to
/// go minus how far white still has to go. Higher is better for `side`.
pub fn heuristic_value(board: &Board, side: Side) -> f32 {
    let value = advance_cost(board, Side::Black) - advance_cost(board, Side::White);
    match side {
        Side::White => value,
        Side::Black => -value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_start_position_is_balanced() {
        let board = Board::start(7);
        assert!(heuristic_value(&board, Side::White).abs() < 1e-4);
        assert!(heuristic_value(&board, Side::Black).abs() < 1e-4);
    }

    #[test]
    fn test_perspectives_are_opposite() {
        let board = Board::start(7)
            .apply_move(&Move::step(Hex::new(0, 2), Hex::new(0, 3)))
            .unwrap();
        let white = heuristic_value(&board, Side::White);
        let black = heuristic_value(&board, Side::Black);
        assert!((white + black).abs() < 1e-4);
    }

    #[test]
    fn test_advancing_reduces_cost() {
        let board = Board::start(7);
        let before = advance_cost(&board, Side::White);
        let moved = board
            .apply_move(&Move::step(Hex::new(0, 2), Hex::new(0, 3)))
            .unwrap();
        assert!(advance_cost(&moved, Side::White) < before);
    }

    #[test]
    fn test_target_corners() {
        let board = Board::start(7);
        assert_eq!(target_corner(&board, Side::White), Hex::new(6, 6));
        assert_eq!(target_corner(&board, Side::Black), Hex::new(0, 0));
    }
}
