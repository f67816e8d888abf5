//! Game runner - executes single games

use sternhalma_core::{Board, Move, Side, Strategy, StrategyError};

/// Final result of a single game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// Move cap reached without a winner
    Drawn,
}

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    pub result: GameResult,
    /// Full moves (one per side) played when the game ended
    pub moves_per_side: usize,
    /// Every move in play order
    pub history: Vec<Move>,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            GameResult::WhiteWins => Some(Side::White),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Drawn => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Drawn
    }
}

/// Play one game from the starting position: white moves, then black,
/// until a side occupies its goal exactly or the move cap is reached.
pub fn play_game(
    white: &mut dyn Strategy,
    black: &mut dyn Strategy,
    board_size: i8,
    move_cap: usize,
) -> Result<GameOutcome, StrategyError> {
    let mut board = Board::start(board_size);
    let mut history = Vec::new();

    for round in 1..=move_cap {
        let mv = white.choose_move(&board)?;
        board = board.apply_move(&mv)?;
        history.push(mv);
        if board.has_won(Side::White) {
            return Ok(GameOutcome {
                result: GameResult::WhiteWins,
                moves_per_side: round,
                history,
            });
        }

        let mv = black.choose_move(&board)?;
        board = board.apply_move(&mv)?;
        history.push(mv);
        if board.has_won(Side::Black) {
            return Ok(GameOutcome {
                result: GameResult::BlackWins,
                moves_per_side: round,
                history,
            });
        }
    }

    Ok(GameOutcome {
        result: GameResult::Drawn,
        moves_per_side: move_cap,
        history,
    })
}
