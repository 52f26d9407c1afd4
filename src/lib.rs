//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited negamax search with alpha-beta pruning
//! and a pattern-based evaluation to choose a move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, search::Searcher, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::decode(&Board::initial_encoding())?;
//! let best_move = Searcher::new().select_move(&board, Player::One);
//!
//! assert_eq!(best_move, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod moves;

pub mod rules;

pub mod eval;

pub mod search;

pub mod game;


pub use board::{Board, Cell, Player};
pub use error::GameError;
pub use game::{Game, GameState, Seats};
pub use search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a winning line
pub const LINE_LENGTH: usize = 4;

/// The fixed depth of the computer's search, in plies
pub const SEARCH_DEPTH: usize = 5;

// a line of four must fit on the board both ways
const_assert!(LINE_LENGTH <= WIDTH && LINE_LENGTH <= HEIGHT);
// the flat encoding must have a slot for every tile
const_assert_eq!(board::ENCODED_LEN, WIDTH * HEIGHT);
