//! A depth-limited agent to choose the computer's move

use crate::{board::*, eval::evaluate, moves::apply_move, rules, SEARCH_DEPTH, WIDTH};

use log::{debug, trace};

/// A bound larger than any evaluation. Its negation is still representable.
pub const INFINITY: i32 = i32::MAX;

/// An agent to choose moves in Connect 4 positions
///
/// # Notes
/// This agent runs a fixed-depth negamax search with alpha-beta pruning and
/// scores the horizon with [`evaluate`]. Every hypothetical move is played on
/// a fresh copy of the board, the position passed in is never modified.
///
/// # Position Scoring
/// Scores are always from the point of view of the player to move, so the
/// score of a position for one player is the negation of its score for the
/// other. A complete line is worth about a million, far above any positional
/// or pattern bonus.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    node_budget: Option<usize>,
    last_scores: Vec<(usize, i32)>,
}

impl Searcher {
    /// Creates a new `Searcher` with no node budget
    pub fn new() -> Self {
        Self {
            node_count: 0,
            node_budget: None,
            last_scores: Vec::with_capacity(WIDTH),
        }
    }

    /// Limits each move selection to roughly `budget` nodes
    ///
    /// Once the budget is spent no further top-level columns are examined
    /// and the best column so far is chosen. The first playable column is
    /// always scored in full.
    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// The (column, score) pairs examined by the last [`Searcher::select_move`]
    pub fn last_scores(&self) -> &[(usize, i32)] {
        &self.last_scores
    }

    /// Performs game tree search
    ///
    /// Returns the score of `board` for `player`, who is to move. At depth
    /// zero, or when no column is playable, this is exactly
    /// `evaluate(board, player)`.
    pub fn negamax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        player: Player,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 {
            return evaluate(board, player);
        }

        let mut best: Option<i32> = None;
        for column in 0..WIDTH {
            // full columns are skipped
            let child = match apply_move(board, column, player) {
                Ok(child) => child,
                Err(_) => continue,
            };

            // the search window is flipped for the other player
            let score = -self.negamax(&child, depth - 1, -beta, -alpha, player.opponent());
            best = Some(best.map_or(score, |best| best.max(score)));
            if score > alpha {
                alpha = score;
            }
            // the opponent will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        best.unwrap_or_else(|| evaluate(board, player))
    }

    /// Chooses a column for `player` to play on `board`
    ///
    /// Columns are tried in ascending order. A column that completes a line
    /// for `player` is chosen at once, otherwise each column is scored by a
    /// full-window search and the highest score wins, the lowest column
    /// among equals. Returns `None` when every column is full.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let start_count = self.node_count;
        self.last_scores.clear();

        let mut best_move = None;
        let mut best_score = -INFINITY;
        for column in 0..WIDTH {
            let child = match apply_move(board, column, player) {
                Ok(child) => child,
                Err(_) => continue,
            };

            if rules::has_won(&child, player) {
                debug!("{} wins immediately in column {}", player, column);
                return Some(column);
            }

            let score = -self.negamax(
                &child,
                SEARCH_DEPTH - 1,
                -INFINITY,
                INFINITY,
                player.opponent(),
            );
            debug!("{}: column {} scores {}", player, column, score);
            self.last_scores.push((column, score));

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(column);
            }

            if let Some(budget) = self.node_budget {
                if self.node_count - start_count >= budget {
                    debug!("node budget of {} spent after column {}", budget, column);
                    break;
                }
            }
        }

        trace!(
            "searched {} nodes for {}",
            self.node_count - start_count,
            player
        );
        best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn depth_zero_is_the_evaluation() -> Result<(), GameError> {
        let board: Board = format!("{}{}{}", "0".repeat(28), "0002000", "0121100").parse()?;
        let mut searcher = Searcher::new();
        for &player in [Player::One, Player::Two].iter() {
            assert_eq!(
                searcher.negamax(&board, 0, -INFINITY, INFINITY, player),
                evaluate(&board, player)
            );
            assert_eq!(searcher.negamax(&board, 0, -7, 3, player), evaluate(&board, player));
        }
        Ok(())
    }

    #[test]
    fn depth_one_takes_the_best_reply() -> Result<(), GameError> {
        let board: Board = format!("{}{}", "0".repeat(35), "0012000").parse()?;
        let mut searcher = Searcher::new();

        let expected = (0..WIDTH)
            .map(|column| -evaluate(&apply_move(&board, column, Player::One).unwrap(), Player::Two))
            .max()
            .unwrap();
        assert_eq!(
            searcher.negamax(&board, 1, -INFINITY, INFINITY, Player::One),
            expected
        );
        Ok(())
    }

    #[test]
    fn full_board_falls_back_to_evaluation() -> Result<(), GameError> {
        let board: Board = format!(
            "{}{}{}{}{}{}",
            "1122112", "2211221", "1122112", "2211221", "1122112", "2211221"
        )
        .parse()?;
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.negamax(&board, 3, -INFINITY, INFINITY, Player::One),
            evaluate(&board, Player::One)
        );
        assert_eq!(searcher.select_move(&board, Player::One), None);
        Ok(())
    }

    #[test]
    fn nodes_are_counted() {
        let mut searcher = Searcher::new();
        searcher.negamax(&Board::new(), 1, -INFINITY, INFINITY, Player::One);
        // the root plus one child per column
        assert_eq!(searcher.node_count, 1 + WIDTH);
    }

    #[test]
    fn budget_stops_after_the_first_column() {
        let mut searcher = Searcher::new().with_node_budget(1);
        let best = searcher.select_move(&Board::new(), Player::One);
        assert_eq!(best, Some(0));
        assert_eq!(searcher.last_scores().len(), 1);
    }

    #[test]
    fn unlimited_search_scores_every_column() {
        let mut searcher = Searcher::new();
        searcher.select_move(&Board::new(), Player::Two);
        let columns: Vec<usize> = searcher.last_scores().iter().map(|&(c, _)| c).collect();
        assert_eq!(columns, (0..WIDTH).collect::<Vec<_>>());
    }
}
