use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::*;

mod terminal;

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose AI control of each player
    let seats = Seats {
        player_one_computer: ask_yes_no(&stdin, "Is player 1 AI controlled?")?,
        player_two_computer: ask_yes_no(&stdin, "Is player 2 AI controlled?")?,
    };

    // an optional starting position in the flat encoding
    let mut game = match std::env::args().nth(1) {
        Some(encoded) => Game::from_encoded(encoded.trim(), seats)?,
        None => Game::new(seats),
    };

    // game loop
    loop {
        terminal::display(game.board())?;

        match game.state() {
            GameState::Playing => {
                // AI player
                if game.is_computer_turn() {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    // slow down play if both players are AI
                    if seats.player_one_computer && seats.player_two_computer {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    if let Some(column) = game.play_computer()? {
                        println!("AI plays: {}", column + 1);
                    }
                    log::debug!("{} nodes searched so far", game.searcher().node_count);

                // human player
                } else {
                    print!("{}, move input > ", game.current_player());
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    let column = match input_str.trim().parse::<usize>() {
                        Ok(column @ 1..=WIDTH) => column - 1,
                        _ => {
                            println!(
                                "Invalid number: {}. Columns must be between 1 and {}",
                                input_str.trim(),
                                WIDTH
                            );
                            continue;
                        }
                    };

                    if let Err(err) = game.play_human(column) {
                        match err {
                            GameError::ColumnFull(_) => {
                                println!("Invalid move, column {} full", column + 1)
                            }
                            _ => println!("{}", err),
                        }
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            GameState::Won(winner) => {
                println!("{} wins!", winner);
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    game.stop();
    Ok(())
}
