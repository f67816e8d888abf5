//! Board state and move generation

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::hex::Hex;

/// Rendering glyphs for the staggered text grid
pub const EMPTY_GLYPH: char = '\u{00B7}';
pub const WHITE_GLYPH: char = '\u{25CB}';
pub const BLACK_GLYPH: char = '\u{25CF}';

/// Player side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// A move from one cell to another.
///
/// `jump_path` holds the intermediate landing cells of a multi-jump
/// (including the start) and is carried for display only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Move {
    pub start: Hex,
    pub end: Hex,
    pub jump_path: Option<Vec<Hex>>,
}

impl Move {
    pub fn step(start: Hex, end: Hex) -> Self {
        Self {
            start,
            end,
            jump_path: None,
        }
    }

    pub fn jump(start: Hex, end: Hex, path: Vec<Hex>) -> Self {
        Self {
            start,
            end,
            jump_path: Some(path),
        }
    }

    /// Sign indicates the direction of the move on the board: positive
    /// advances toward the far corner, negative retreats, zero is lateral.
    pub fn direction(&self) -> i32 {
        (self.end.q as i32 + self.end.r as i32) - (self.start.q as i32 + self.start.r as i32)
    }
}

// Two moves are the same move iff start and end match; the jump path
// is not part of move identity.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start, self.end)
    }
}

/// An immutable snapshot of both piece sets.
///
/// Applying a move produces a new `Board`; existing snapshots are never
/// mutated, so search-tree branches cannot corrupt each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: i8,
    white: FxHashSet<Hex>,
    black: FxHashSet<Hex>,
    white_goal: FxHashSet<Hex>,
    black_goal: FxHashSet<Hex>,
}

impl Board {
    /// Starting board of the given side length: each side occupies a
    /// corner triangle of side `size / 2` and must reach the opponent's.
    pub fn start(size: i8) -> Self {
        let rows = size / 2;
        let white: FxHashSet<Hex> = (0..rows)
            .flat_map(|q| (0..rows).map(move |r| Hex::new(q, r)))
            .filter(|h| h.q + h.r < rows)
            .collect();
        let black: FxHashSet<Hex> = white
            .iter()
            .map(|h| Hex::new(size - 1 - h.q, size - 1 - h.r))
            .collect();
        let white_goal = black.clone();
        let black_goal = white.clone();
        Self {
            size,
            white,
            black,
            white_goal,
            black_goal,
        }
    }

    /// Board from explicit piece and goal sets, validating the invariants:
    /// disjoint piece sets, piece count matching goal count per side, and
    /// every cell within `0 <= q, r < size`.
    pub fn new(
        white: impl IntoIterator<Item = Hex>,
        black: impl IntoIterator<Item = Hex>,
        size: i8,
        white_goal: impl IntoIterator<Item = Hex>,
        black_goal: impl IntoIterator<Item = Hex>,
    ) -> Result<Self, BoardError> {
        let board = Self {
            size,
            white: white.into_iter().collect(),
            black: black.into_iter().collect(),
            white_goal: white_goal.into_iter().collect(),
            black_goal: black_goal.into_iter().collect(),
        };

        if let Some(&h) = board
            .white
            .iter()
            .chain(&board.black)
            .chain(&board.white_goal)
            .chain(&board.black_goal)
            .find(|h| !board.on_board(**h))
        {
            return Err(BoardError::OffBoard(h));
        }
        if board.white.intersection(&board.black).next().is_some() {
            return Err(BoardError::OverlappingPieces);
        }
        if board.white.len() != board.white_goal.len() {
            return Err(BoardError::PieceGoalMismatch(Side::White));
        }
        if board.black.len() != board.black_goal.len() {
            return Err(BoardError::PieceGoalMismatch(Side::Black));
        }

        Ok(board)
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    /// Check if the given cell lies on the board
    pub fn on_board(&self, hex: Hex) -> bool {
        0 <= hex.q && hex.q < self.size && 0 <= hex.r && hex.r < self.size
    }

    /// Check if either side has a piece at the given cell
    pub fn occupied(&self, hex: Hex) -> bool {
        self.white.contains(&hex) || self.black.contains(&hex)
    }

    /// Which side owns the piece at the given cell, if any
    pub fn side_at(&self, hex: Hex) -> Option<Side> {
        if self.white.contains(&hex) {
            Some(Side::White)
        } else if self.black.contains(&hex) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// Iterate a side's pieces (cross-piece order is unspecified)
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Hex> + '_ {
        self.piece_set(side).iter().copied()
    }

    /// Iterate a side's goal cells
    pub fn goal_cells(&self, side: Side) -> impl Iterator<Item = Hex> + '_ {
        match side {
            Side::White => self.white_goal.iter().copied(),
            Side::Black => self.black_goal.iter().copied(),
        }
    }

    /// A side has won iff its piece set equals its goal set exactly
    pub fn has_won(&self, side: Side) -> bool {
        match side {
            Side::White => self.white == self.white_goal,
            Side::Black => self.black == self.black_goal,
        }
    }

    fn piece_set(&self, side: Side) -> &FxHashSet<Hex> {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply the given move, returning the resulting board.
    ///
    /// Errors indicate a logic defect upstream: generated moves always
    /// land on an empty cell and start from an owned piece.
    pub fn apply_move(&self, mv: &Move) -> Result<Board, BoardError> {
        if self.occupied(mv.end) {
            return Err(BoardError::DestinationOccupied(mv.end));
        }
        let mut next = self.clone();
        if next.white.remove(&mv.start) {
            next.white.insert(mv.end);
        } else if next.black.remove(&mv.start) {
            next.black.insert(mv.end);
        } else {
            return Err(BoardError::NoPieceAt(mv.start));
        }
        Ok(next)
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// All legal moves for the piece at the given cell: single steps in
    /// direction order, then one jump move per distinct jump terminal.
    pub fn generate_moves(&self, piece: Hex) -> Vec<Move> {
        let mut moves = Vec::new();
        for (neighbor, _) in piece.neighbor_jump_pairs() {
            if self.on_board(neighbor) && !self.occupied(neighbor) {
                moves.push(Move::step(piece, neighbor));
            }
        }
        self.collect_jump_moves(piece, &mut moves);
        moves
    }

    /// All legal moves for a side
    pub fn generate_all_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces(side) {
            moves.extend(self.generate_moves(piece));
        }
        moves
    }

    /// All boards one move away for a side
    pub fn generate_boards(&self, side: Side) -> Result<Vec<Board>, BoardError> {
        self.generate_all_moves(side)
            .iter()
            .map(|mv| self.apply_move(mv))
            .collect()
    }

    /// Cells reachable from `from` by a single jump over an occupied
    /// neighbor onto an empty on-board cell
    fn single_jumps(&self, from: Hex) -> impl Iterator<Item = Hex> + '_ {
        from.neighbor_jump_pairs()
            .into_iter()
            .filter_map(move |(neighbor, target)| {
                (self.occupied(neighbor) && self.on_board(target) && !self.occupied(target))
                    .then_some(target)
            })
    }

    /// Breadth-first expansion of jump chains from `piece`. The moving
    /// piece stays at its start for occupancy purposes and no cell is
    /// revisited within one chain. One move is kept per distinct terminal,
    /// in first-discovery order, with the last path found as its display
    /// path (any valid path will do).
    fn collect_jump_moves(&self, piece: Hex, moves: &mut Vec<Move>) {
        let mut paths: Vec<Vec<Hex>> = Vec::new();
        let mut frontier: Vec<Vec<Hex>> = self
            .single_jumps(piece)
            .map(|jump| vec![piece, jump])
            .collect();

        while !frontier.is_empty() {
            paths.extend(frontier.iter().cloned());
            let mut extended = Vec::new();
            for path in &frontier {
                let last = path[path.len() - 1];
                for next in self.single_jumps(last) {
                    if !path.contains(&next) {
                        let mut longer = path.clone();
                        longer.push(next);
                        extended.push(longer);
                    }
                }
            }
            frontier = extended;
        }

        let mut terminals: Vec<Hex> = Vec::new();
        let mut path_by_terminal: FxHashMap<Hex, Vec<Hex>> = FxHashMap::default();
        for path in paths {
            let end = path[path.len() - 1];
            if path_by_terminal.insert(end, path).is_none() {
                terminals.push(end);
            }
        }
        for end in terminals {
            if let Some(path) = path_by_terminal.remove(&end) {
                moves.push(Move::jump(piece, end, path));
            }
        }
    }
}

impl fmt::Display for Board {
    /// Staggered text grid: row `r` is indented `r` spaces, one glyph and
    /// a trailing space per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for _ in 0..r {
                write!(f, " ")?;
            }
            for q in 0..self.size {
                let glyph = match self.side_at(Hex::new(q, r)) {
                    Some(Side::White) => WHITE_GLYPH,
                    Some(Side::Black) => BLACK_GLYPH,
                    None => EMPTY_GLYPH,
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(moves: &[Move]) -> Vec<Hex> {
        moves.iter().map(|m| m.end).collect()
    }

    #[test]
    fn test_on_board() {
        let board = Board::start(7);
        assert!(board.on_board(Hex::new(0, 0)));
        assert!(board.on_board(Hex::new(0, 1)));
        assert!(board.on_board(Hex::new(6, 6)));
        assert!(!board.on_board(Hex::new(-1, 0)));
        assert!(!board.on_board(Hex::new(7, 0)));
        assert!(!board.on_board(Hex::new(100, 10)));
    }

    #[test]
    fn test_occupied() {
        let board = Board::start(7);
        assert!(board.occupied(Hex::new(0, 0)));
        assert!(board.occupied(Hex::new(1, 0)));
        assert!(board.occupied(Hex::new(6, 6)));
        assert!(board.occupied(Hex::new(6, 5)));
        assert!(!board.occupied(Hex::new(0, 4)));
        assert!(!board.occupied(Hex::new(4, 0)));
        assert!(!board.occupied(Hex::new(-1, 0)));
    }

    #[test]
    fn test_side_at() {
        let board = Board::start(7);
        assert_eq!(board.side_at(Hex::new(0, 0)), Some(Side::White));
        assert_eq!(board.side_at(Hex::new(6, 6)), Some(Side::Black));
        assert_eq!(board.side_at(Hex::new(3, 3)), None);
    }

    #[test]
    fn test_corner_piece_is_boxed_in() {
        let board = Board::start(7);
        assert!(board.generate_moves(Hex::new(0, 0)).is_empty());
    }

    #[test]
    fn test_leading_edge_piece_steps() {
        let board = Board::start(7);
        let moves = board.generate_moves(Hex::new(0, 2));
        assert_eq!(ends(&moves), vec![Hex::new(0, 3), Hex::new(1, 2)]);
    }

    #[test]
    fn test_second_diagonal_piece_jumps() {
        let board = Board::start(7);
        let moves = board.generate_moves(Hex::new(0, 1));
        assert_eq!(ends(&moves), vec![Hex::new(0, 3), Hex::new(2, 1)]);
        for mv in &moves {
            assert!(mv.jump_path.is_some());
        }
    }

    #[test]
    fn test_branching_double_jumps() {
        let board = Board::start(7)
            .apply_move(&Move::step(Hex::new(2, 0), Hex::new(3, 0)))
            .unwrap()
            .apply_move(&Move::step(Hex::new(1, 1), Hex::new(2, 1)))
            .unwrap();
        let moves = board.generate_moves(Hex::new(0, 0));
        assert_eq!(
            ends(&moves),
            vec![Hex::new(2, 0), Hex::new(2, 2), Hex::new(4, 0)]
        );
    }

    #[test]
    fn test_start_board_has_ten_white_moves() {
        let board = Board::start(7);
        assert_eq!(board.generate_all_moves(Side::White).len(), 10);
        assert_eq!(board.generate_boards(Side::White).unwrap().len(), 10);
    }

    #[test]
    fn test_generated_moves_always_apply() {
        let board = Board::start(7);
        for side in [Side::White, Side::Black] {
            for mv in board.generate_all_moves(side) {
                assert!(board.apply_move(&mv).is_ok(), "{} failed to apply", mv);
            }
        }
    }

    #[test]
    fn test_apply_move_round_trip() {
        let board = Board::start(7);
        let mv = Move::step(Hex::new(0, 2), Hex::new(0, 3));
        let moved = board.apply_move(&mv).unwrap();
        assert!(!moved.occupied(mv.start));
        assert!(moved.occupied(mv.end));
        let back = moved.apply_move(&Move::step(mv.end, mv.start)).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_apply_move_rejects_occupied_end() {
        let board = Board::start(7);
        let mv = Move::step(Hex::new(0, 0), Hex::new(0, 1));
        assert_eq!(
            board.apply_move(&mv),
            Err(BoardError::DestinationOccupied(Hex::new(0, 1)))
        );
    }

    #[test]
    fn test_apply_move_rejects_missing_piece() {
        let board = Board::start(7);
        let mv = Move::step(Hex::new(3, 3), Hex::new(3, 4));
        assert_eq!(
            board.apply_move(&mv),
            Err(BoardError::NoPieceAt(Hex::new(3, 3)))
        );
    }

    #[test]
    fn test_winning_positions() {
        let board = Board::start(7);
        assert!(!board.has_won(Side::White));
        assert!(!board.has_won(Side::Black));

        // Swapping the piece sets onto each other's goals wins for both
        let swapped = Board::new(
            board.pieces(Side::Black),
            board.pieces(Side::White),
            board.size(),
            board.goal_cells(Side::White),
            board.goal_cells(Side::Black),
        )
        .unwrap();
        assert!(swapped.has_won(Side::White));
        assert!(swapped.has_won(Side::Black));
    }

    #[test]
    fn test_new_validates_invariants() {
        assert_eq!(
            Board::new(
                [Hex::new(0, 0)],
                [Hex::new(0, 0)],
                7,
                [Hex::new(6, 6)],
                [Hex::new(1, 1)],
            ),
            Err(BoardError::OverlappingPieces)
        );
        assert_eq!(
            Board::new(
                [Hex::new(0, 0), Hex::new(0, 1)],
                [Hex::new(6, 6)],
                7,
                [Hex::new(5, 5)],
                [Hex::new(1, 1)],
            ),
            Err(BoardError::PieceGoalMismatch(Side::White))
        );
        assert_eq!(
            Board::new(
                [Hex::new(7, 0)],
                [Hex::new(6, 6)],
                7,
                [Hex::new(5, 5)],
                [Hex::new(1, 1)],
            ),
            Err(BoardError::OffBoard(Hex::new(7, 0)))
        );
    }

    #[test]
    fn test_move_identity_ignores_jump_path() {
        let a = Move::step(Hex::new(0, 1), Hex::new(0, 3));
        let b = Move::jump(
            Hex::new(0, 1),
            Hex::new(0, 3),
            vec![Hex::new(0, 1), Hex::new(0, 3)],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_move_direction() {
        assert!(Move::step(Hex::new(0, 2), Hex::new(0, 3)).direction() > 0);
        assert!(Move::step(Hex::new(0, 3), Hex::new(0, 2)).direction() < 0);
        assert_eq!(Move::step(Hex::new(1, 2), Hex::new(2, 1)).direction(), 0);
    }

    #[test]
    fn test_render_start_board() {
        let expected = "\
\u{25CB} \u{25CB} \u{25CB} \u{B7} \u{B7} \u{B7} \u{B7} \n \u{25CB} \u{25CB} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \n  \u{25CB} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \n   \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \n    \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{25CF} \n     \u{B7} \u{B7} \u{B7} \u{B7} \u{B7} \u{25CF} \u{25CF} \n      \u{B7} \u{B7} \u{B7} \u{B7} \u{25CF} \u{25CF} \u{25CF} \n";
        assert_eq!(Board::start(7).to_string(), expected);
    }
}
