//! Human player reading moves from stdin
//!
//! Moves are typed as four integers, `start-q start-r end-q end-r`, and
//! validated against the legal move list (move identity ignores jump
//! paths, so a jump can be entered by its endpoints alone).

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use sternhalma_core::{Board, Hex, Move, Side};

pub struct HumanInput {
    side: Side,
}

impl HumanInput {
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    pub fn choose_move(&self, board: &Board) -> Result<Move> {
        let legal = board.generate_all_moves(self.side);
        if legal.is_empty() {
            bail!("no legal moves for {:?}", self.side);
        }

        let stdin = io::stdin();
        loop {
            print!("{:?} move (start-q start-r end-q end-r)> ", self.side);
            io::stdout().flush().context("flushing prompt")?;

            let mut line = String::new();
            let bytes = stdin
                .lock()
                .read_line(&mut line)
                .context("reading move from stdin")?;
            if bytes == 0 {
                bail!("input closed before a move was entered");
            }

            match parse_move(line.trim()) {
                Some(mv) if legal.contains(&mv) => return Ok(mv),
                Some(mv) => println!("{} is not a legal move", mv),
                None => println!("expected four integers: start-q start-r end-q end-r"),
            }
        }
    }
}

fn parse_move(line: &str) -> Option<Move> {
    let parts: Vec<i8> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    if parts.len() != 4 {
        return None;
    }
    Some(Move::step(
        Hex::new(parts[0], parts[1]),
        Hex::new(parts[2], parts[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let mv = parse_move("0 2 0 3").unwrap();
        assert_eq!(mv.start, Hex::new(0, 2));
        assert_eq!(mv.end, Hex::new(0, 3));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert!(parse_move("").is_none());
        assert!(parse_move("0 2 0").is_none());
        assert!(parse_move("0 2 0 3 5").is_none());
        assert!(parse_move("a b c d").is_none());
    }

    #[test]
    fn test_parsed_move_matches_jump_by_endpoints() {
        let board = Board::start(7);
        let legal = board.generate_all_moves(Side::White);
        // (0,1)->(0,3) is a jump; endpoints are enough to identify it
        let typed = parse_move("0 1 0 3").unwrap();
        assert!(legal.contains(&typed));
    }
}
