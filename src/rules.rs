//! Four-in-a-row and draw detection

use crate::{board::*, HEIGHT, LINE_LENGTH, WIDTH};

/// The four line directions as (dx, dy): horizontal, vertical,
/// diagonal-down and diagonal-up. Each line on the board is covered by
/// exactly one of them.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

fn inside(x: isize, y: isize) -> bool {
    x >= 0 && x < WIDTH as isize && y >= 0 && y < HEIGHT as isize
}

/// The coordinates of the line of `LINE_LENGTH` cells starting at (x, y)
/// along `direction`, or `None` if it leaves the board
pub fn line(x: usize, y: usize, direction: (isize, isize)) -> Option<[(usize, usize); LINE_LENGTH]> {
    let (dx, dy) = direction;
    let mut cells = [(0, 0); LINE_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        let (cx, cy) = (x as isize + dx * i as isize, y as isize + dy * i as isize);
        if !inside(cx, cy) {
            return None;
        }
        *cell = (cx as usize, cy as usize);
    }
    Some(cells)
}

fn line_owner(board: &Board, x: usize, y: usize, direction: (isize, isize)) -> Option<Player> {
    let owner = board.cell(x, y).owner()?;
    let cells = line(x, y, direction)?;
    if cells
        .iter()
        .all(|&(cx, cy)| board.cell(cx, cy) == Cell::Occupied(owner))
    {
        Some(owner)
    } else {
        None
    }
}

/// Returns the owner of the first complete line found
///
/// Cells are scanned top-to-bottom, left-to-right and each cell probes the
/// directions in [`DIRECTIONS`] order, so if several lines exist the first
/// one in that order decides.
pub fn check_winner(board: &Board) -> Option<Player> {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            for &direction in DIRECTIONS.iter() {
                if let Some(winner) = line_owner(board, x, y, direction) {
                    return Some(winner);
                }
            }
        }
    }
    None
}

/// Whether `player` owns any complete line
pub fn has_won(board: &Board, player: Player) -> bool {
    (0..HEIGHT).any(|y| {
        (0..WIDTH).any(|x| {
            DIRECTIONS
                .iter()
                .any(|&direction| line_owner(board, x, y, direction) == Some(player))
        })
    })
}

/// A full board with no winner
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
