//! Column drops under gravity

use crate::{board::*, error::GameError, HEIGHT, WIDTH};

fn check_column(column: usize) -> Result<(), GameError> {
    if column >= WIDTH {
        return Err(GameError::InvalidColumn(column));
    }
    Ok(())
}

/// Returns the row a tile dropped in `column` would land on, or `None` if
/// the column is full
pub fn lowest_empty_row(board: &Board, column: usize) -> Result<Option<usize>, GameError> {
    check_column(column)?;
    Ok((0..HEIGHT).rev().find(|&row| board.cell(column, row).is_empty()))
}

/// A column is playable while its top cell is empty
pub fn playable(board: &Board, column: usize) -> bool {
    column < WIDTH && board.cell(column, 0).is_empty()
}

/// The playable columns in ascending order
pub fn legal_moves(board: &Board) -> impl Iterator<Item = usize> + '_ {
    (0..WIDTH).filter(move |&column| playable(board, column))
}

/// Drops a tile for `player` into `column`, returning the resulting board
///
/// The input is never modified. A full column yields `ColumnFull` and the
/// caller still holds the untouched original.
pub fn apply_move(board: &Board, column: usize, player: Player) -> Result<Board, GameError> {
    let row = lowest_empty_row(board, column)?.ok_or(GameError::ColumnFull(column))?;

    let mut next = *board;
    next.set(column, row, Cell::Occupied(player))?;
    Ok(next)
}
