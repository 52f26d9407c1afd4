//! Errors raised by the game core

use crate::WIDTH;

/// Everything that can go wrong when touching the board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A column index outside `0..WIDTH`
    #[error("Invalid move, column {0} out of range. Columns must be below {}", WIDTH)]
    InvalidColumn(usize),

    /// The column has no empty row left. Recoverable, nothing was changed.
    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    /// A cell access outside the grid
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },

    /// A flat board encoding that could not be decoded
    #[error("invalid board encoding: {0}")]
    StateFormat(String),

    /// A move was attempted after the game ended
    #[error("the game is already over")]
    GameOver,
}
