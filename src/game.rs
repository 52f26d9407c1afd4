//! A single game session between two seats

use crate::{
    board::*,
    error::GameError,
    moves::{apply_move, lowest_empty_row},
    rules,
    search::Searcher,
};

use log::{debug, info};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// Which players the computer controls
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Seats {
    pub player_one_computer: bool,
    pub player_two_computer: bool,
}

impl Seats {
    pub fn humans() -> Self {
        Self {
            player_one_computer: false,
            player_two_computer: false,
        }
    }

    pub fn is_computer(&self, player: Player) -> bool {
        match player {
            Player::One => self.player_one_computer,
            Player::Two => self.player_two_computer,
        }
    }
}

impl Default for Seats {
    /// A human moving first against the computer
    fn default() -> Self {
        Self {
            player_one_computer: false,
            player_two_computer: true,
        }
    }
}

/// The live game: the one board, whose turn it is and who is playing
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    seats: Seats,
    state: GameState,
    num_moves: usize,
    searcher: Searcher,
}

impl Game {
    /// Starts a game on the empty board with player one to move
    pub fn new(seats: Seats) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            seats,
            state: GameState::Playing,
            num_moves: 0,
            searcher: Searcher::new(),
        }
    }

    /// Resumes a game from a flat board encoding
    ///
    /// Player one always moves first, so the player to move follows from the
    /// tile counts.
    pub fn from_encoded(encoded: &str, seats: Seats) -> Result<Self, GameError> {
        let board = Board::decode(encoded)?;
        let (ones, twos) = (board.count(Player::One), board.count(Player::Two));
        let current_player = if ones == twos {
            Player::One
        } else if ones == twos + 1 {
            Player::Two
        } else {
            return Err(GameError::StateFormat(format!(
                "unreachable tile counts: {} for player 1, {} for player 2",
                ones, twos
            )));
        };

        let mut game = Self {
            board,
            current_player,
            seats,
            state: GameState::Playing,
            num_moves: ones + twos,
            searcher: Searcher::new(),
        };
        game.update_state();
        Ok(game)
    }

    /// Uses a preconfigured `Searcher` for the computer's moves
    pub fn with_searcher(mut self, searcher: Searcher) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn encoded(&self) -> String {
        self.board.encode()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn seats(&self) -> Seats {
        self.seats
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    pub fn move_count(&self) -> usize {
        self.num_moves
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state == GameState::Playing && self.seats.is_computer(self.current_player)
    }

    pub fn check_for_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    pub fn check_for_draw(&self) -> bool {
        rules::check_draw(&self.board)
    }

    fn update_state(&mut self) {
        self.state = if let Some(winner) = self.check_for_winner() {
            GameState::Won(winner)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
    }

    /// Drops a tile for the current player and ends the turn
    fn commit(&mut self, column: usize) -> Result<GameState, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }

        let row = lowest_empty_row(&self.board, column)?.ok_or(GameError::ColumnFull(column))?;
        self.board
            .set(column, row, Cell::Occupied(self.current_player))?;
        self.num_moves += 1;
        debug!(
            "{} plays column {} (row {}), board {}",
            self.current_player, column, row, self.board
        );

        self.update_state();
        match self.state {
            GameState::Won(winner) => info!("{} wins after {} moves", winner, self.num_moves),
            GameState::Draw => info!("game drawn after {} moves", self.num_moves),
            GameState::Playing => {}
        }
        self.current_player = self.current_player.opponent();
        Ok(self.state)
    }

    /// Attempts to drop a tile in `column` for the current player
    ///
    /// A full column is rejected with `ColumnFull` and leaves the game as it
    /// was, so the caller may simply try another column.
    pub fn play_human(&mut self, column: usize) -> Result<GameState, GameError> {
        self.commit(column)
    }

    /// Plays the searched move if the current player is computer-controlled
    ///
    /// Returns the chosen column, or `None` if it was not the computer's turn.
    pub fn play_computer(&mut self) -> Result<Option<usize>, GameError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }

        let column = match self.searcher.select_move(&self.board, self.current_player) {
            Some(column) => column,
            None => return Ok(None),
        };
        self.commit(column)?;
        Ok(Some(column))
    }

    /// Previews the board a drop would produce without playing it
    pub fn preview(&self, column: usize) -> Result<Board, GameError> {
        apply_move(&self.board, column, self.current_player)
    }

    /// Clears the board at the end of a session
    pub fn stop(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.state = GameState::Playing;
        self.num_moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};

    #[test]
    fn new_game_is_empty() {
        let game = Game::new(Seats::default());
        assert_eq!(game.encoded(), Board::initial_encoding());
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.state(), GameState::Playing);
        assert!(!game.is_computer_turn());
    }

    #[test]
    fn human_moves_alternate() -> Result<(), GameError> {
        let mut game = Game::new(Seats::humans());
        game.play_human(3)?;
        game.play_human(3)?;
        assert_eq!(game.board().get(3, HEIGHT - 1)?, Cell::Occupied(Player::One));
        assert_eq!(game.board().get(3, HEIGHT - 2)?, Cell::Occupied(Player::Two));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.move_count(), 2);
        Ok(())
    }

    #[test]
    fn full_column_keeps_the_turn() -> Result<(), GameError> {
        let mut game = Game::new(Seats::humans());
        for _ in 0..HEIGHT {
            game.play_human(0)?;
        }
        let before = game.encoded();

        assert_eq!(game.play_human(0), Err(GameError::ColumnFull(0)));
        assert_eq!(game.encoded(), before);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.play_human(WIDTH), Err(GameError::InvalidColumn(WIDTH)));
        Ok(())
    }

    #[test]
    fn win_ends_the_game() -> Result<(), GameError> {
        let mut game = Game::new(Seats::humans());
        for &column in [0, 0, 1, 1, 2, 2].iter() {
            assert_eq!(game.play_human(column)?, GameState::Playing);
        }
        assert_eq!(game.play_human(3)?, GameState::Won(Player::One));
        assert_eq!(game.check_for_winner(), Some(Player::One));
        assert!(!game.check_for_draw());
        assert_eq!(game.play_human(4), Err(GameError::GameOver));
        Ok(())
    }

    #[test]
    fn computer_only_moves_on_its_turn() -> Result<(), GameError> {
        let mut game = Game::new(Seats::default());
        assert_eq!(game.play_computer()?, None);
        assert_eq!(game.encoded(), Board::initial_encoding());

        game.play_human(0)?;
        assert!(game.is_computer_turn());
        let column = game.play_computer()?;
        assert!(column.is_some());
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.board().count(Player::Two), 1);
        Ok(())
    }

    #[test]
    fn resume_from_encoding() -> Result<(), GameError> {
        let encoded = format!("{}{}", "0".repeat(35), "0012000");
        let game = Game::from_encoded(&encoded, Seats::humans())?;
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.move_count(), 2);

        let encoded = format!("{}{}", "0".repeat(35), "0011000");
        assert!(matches!(
            Game::from_encoded(&encoded, Seats::humans()),
            Err(GameError::StateFormat(_))
        ));
        Ok(())
    }

    #[test]
    fn resume_finished_game() -> Result<(), GameError> {
        let encoded = format!("{}{}{}", "0".repeat(28), "0222000", "1111000");
        let game = Game::from_encoded(&encoded, Seats::default())?;
        assert_eq!(game.state(), GameState::Won(Player::One));
        assert!(!game.is_computer_turn());
        Ok(())
    }

    #[test]
    fn preview_does_not_play() -> Result<(), GameError> {
        let game = Game::new(Seats::humans());
        let preview = game.preview(6)?;
        assert_eq!(preview.get(6, HEIGHT - 1)?, Cell::Occupied(Player::One));
        assert_eq!(game.encoded(), Board::initial_encoding());
        Ok(())
    }

    #[test]
    fn stop_clears_the_board() -> Result<(), GameError> {
        let mut game = Game::new(Seats::humans());
        game.play_human(2)?;
        game.stop();
        assert_eq!(game.encoded(), Board::initial_encoding());
        assert_eq!(game.current_player(), Player::One);
        Ok(())
    }
}
