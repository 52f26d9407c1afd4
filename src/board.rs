use crate::{error::GameError, HEIGHT, WIDTH};

use std::fmt;
use std::str::FromStr;

/// The length of a flat board encoding
pub const ENCODED_LEN: usize = WIDTH * HEIGHT;

/// One of the two players. Player one (id 0) moves first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player's id, 0 or 1
    pub fn id(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn from_id(id: usize) -> Option<Self> {
        match id {
            0 => Some(Player::One),
            1 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id() + 1)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match *self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied(Player::One) => '1',
            Cell::Occupied(Player::Two) => '2',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Occupied(Player::One)),
            '2' => Some(Cell::Occupied(Player::Two)),
            _ => None,
        }
    }
}

/// A fixed 7x6 grid of cells
///
/// Row 0 is the top of the board and column 0 the leftmost. Cells are stored
/// row-major from the top row, the same order as the flat encoding, so a
/// `Board` is `Copy` and every search branch can own its own independent copy.
///
/// # Flat encoding
/// `WIDTH * HEIGHT` characters from the alphabet `'0'` (empty), `'1'`
/// (player one) and `'2'` (player two). Any other length or character is
/// rejected by [`Board::decode`], as is a piece floating above an empty cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; ENCODED_LEN],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; ENCODED_LEN],
        }
    }

    /// The canonical encoding of the empty board
    pub fn initial_encoding() -> String {
        "0".repeat(ENCODED_LEN)
    }

    fn index(x: usize, y: usize) -> Result<usize, GameError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(y * WIDTH + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        Ok(self.cells[Self::index(x, y)?])
    }

    /// Overwrites a single cell
    ///
    /// Only the session uses this when committing a validated drop, search
    /// always works on fresh copies through [`crate::moves::apply_move`].
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GameError> {
        self.cells[Self::index(x, y)?] = cell;
        Ok(())
    }

    /// Unchecked read for the hot loops, callers keep `x` and `y` in range
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * WIDTH + x]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; ENCODED_LEN];
    }

    /// Counts the tiles owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    pub fn encode(&self) -> String {
        self.cells.iter().map(|cell| cell.to_char()).collect()
    }

    pub fn decode(s: &str) -> Result<Self, GameError> {
        let len = s.chars().count();
        if len != ENCODED_LEN {
            return Err(GameError::StateFormat(format!(
                "expected {} cells, found {}",
                ENCODED_LEN, len
            )));
        }

        let mut board = Self::new();
        for (idx, c) in s.chars().enumerate() {
            board.cells[idx] = Cell::from_char(c).ok_or_else(|| {
                GameError::StateFormat(format!("unexpected character '{}' at index {}", c, idx))
            })?;
        }

        // pieces obey gravity, nothing may rest on an empty cell
        for x in 0..WIDTH {
            for y in 1..HEIGHT {
                if board.cell(x, y).is_empty() && !board.cell(x, y - 1).is_empty() {
                    return Err(GameError::StateFormat(format!(
                        "floating piece in column {} above row {}",
                        x, y
                    )));
                }
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            let row: String = (0..WIDTH)
                .map(|x| match self.cell(x, y) {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => 'X',
                    Cell::Occupied(Player::Two) => 'O',
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
