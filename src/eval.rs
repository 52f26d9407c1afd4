//! Heuristic scoring of a position
//!
//! The score is a sum of a positional term (tiles nearer the centre column
//! are worth more) and a pattern term over every window of four cells along
//! the four line directions. The constants below fix the playing strength of
//! the computer opponent.

use crate::{board::*, rules, HEIGHT, LINE_LENGTH, WIDTH};

/// Per-column weight of an owned tile, peaking at the centre
pub const COLUMN_WEIGHTS: [i32; WIDTH] = [3, 4, 5, 7, 5, 4, 3];

pub const FOUR_OWN: i32 = 1_000_000;
pub const THREE_OWN: i32 = 100;
pub const TWO_OWN: i32 = 10;
pub const THREE_OPPONENT: i32 = -80;
pub const TWO_OPPONENT: i32 = -5;

/// Scores one window by its composition of own, opponent and empty cells
pub fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    match (own, opponent, empty) {
        (4, _, _) => FOUR_OWN,
        (3, _, 1) => THREE_OWN,
        (2, _, 2) => TWO_OWN,
        (_, 3, 1) => THREE_OPPONENT,
        (_, 2, 2) => TWO_OPPONENT,
        _ => 0,
    }
}

fn positional(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for y in 0..HEIGHT {
        for (x, weight) in COLUMN_WEIGHTS.iter().enumerate() {
            if board.cell(x, y) == Cell::Occupied(player) {
                score += weight;
            }
        }
    }
    score
}

fn windows(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            for &direction in rules::DIRECTIONS.iter() {
                let cells = match rules::line(x, y, direction) {
                    Some(cells) => cells,
                    None => continue,
                };

                let (mut own, mut opponent) = (0, 0);
                for &(cx, cy) in cells.iter() {
                    match board.cell(cx, cy).owner() {
                        Some(owner) if owner == player => own += 1,
                        Some(_) => opponent += 1,
                        None => {}
                    }
                }
                score += score_window(own, opponent, LINE_LENGTH - own - opponent);
            }
        }
    }
    score
}

/// Scores `board` from the point of view of `player`, higher is better
pub fn evaluate(board: &Board, player: Player) -> i32 {
    positional(board, player) + windows(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::One), 0);
        assert_eq!(evaluate(&board, Player::Two), 0);
    }

    #[test]
    fn window_table() {
        assert_eq!(score_window(4, 0, 0), 1_000_000);
        assert_eq!(score_window(3, 0, 1), 100);
        assert_eq!(score_window(2, 0, 2), 10);
        assert_eq!(score_window(0, 3, 1), -80);
        assert_eq!(score_window(0, 2, 2), -5);
        assert_eq!(score_window(3, 1, 0), 0);
        assert_eq!(score_window(2, 1, 1), 0);
        assert_eq!(score_window(1, 0, 3), 0);
        assert_eq!(score_window(0, 4, 0), 0);
    }

    #[test]
    fn single_centre_tile() -> Result<(), GameError> {
        let board: Board = format!("{}0001000", "0".repeat(35)).parse()?;
        // 7 positional, the tile sits in windows that all hold a single piece
        assert_eq!(evaluate(&board, Player::One), 7);
        assert_eq!(evaluate(&board, Player::Two), 0);
        Ok(())
    }

    #[test]
    fn pair_on_the_bottom_row() -> Result<(), GameError> {
        let board: Board = format!("{}1100000", "0".repeat(35)).parse()?;
        // 3 + 4 positional, only the window starting at column 0 holds the pair
        assert_eq!(evaluate(&board, Player::One), 7 + 10);
        assert_eq!(evaluate(&board, Player::Two), -5);
        Ok(())
    }

    #[test]
    fn open_three_is_a_threat_to_the_opponent() -> Result<(), GameError> {
        let board: Board = format!("{}0111000", "0".repeat(35)).parse()?;
        // windows [0..4) and [1..5) each hold three plus one gap,
        // [2..6) holds two plus two gaps
        assert_eq!(evaluate(&board, Player::One), 4 + 5 + 7 + 2 * 100 + 10);
        assert_eq!(evaluate(&board, Player::Two), 2 * -80 - 5);
        Ok(())
    }
}
