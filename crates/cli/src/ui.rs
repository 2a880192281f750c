//! Console game loop.
//!
//! Runs setup, then drives a [`Game`] turn by turn: render, ask the player
//! to move for a command, report rejected moves and retry. After a game the
//! player can press ENTER to start over.

use anyhow::Result;
use othello_core::{Command, Game, Turn};
use tracing::debug;

use crate::input::LineInput;
use crate::{render, setup};

/// Options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    /// Accept every setup default without asking.
    pub quick: bool,
    /// Mark the legal cells of the player to move.
    pub hints: bool,
    /// Clear the terminal before each frame.
    pub clear: bool,
}

/// Main UI loop: one iteration per game session.
pub fn ui_loop(settings: &Settings, input: &mut impl LineInput) -> Result<()> {
    loop {
        if settings.clear {
            render::clear_screen()?;
        }

        let (first, second) = setup::players(input, settings.quick)?;
        let (rows, cols) = setup::board_size(input, settings.rows, settings.cols, settings.quick)?;
        let mut game = Game::new(rows, cols, first, second);

        play(&mut game, input, settings)?;
        print!("{}", render::game_over(&game));

        match input.read_line(" Press enter to play again: ")? {
            Some(line) if line.is_empty() => debug!("starting a new game"),
            _ => break,
        }
    }

    println!();
    Ok(())
}

/// Plays one game until nobody can move or a player quits.
///
/// Closed input is treated as `quit`.
pub fn play(game: &mut Game, input: &mut impl LineInput, settings: &Settings) -> Result<()> {
    loop {
        if settings.clear {
            render::clear_screen()?;
        }
        print!("{}", render::scoreboard(game));

        let hints = match game.current() {
            Some(seat) if settings.hints => game.legal_moves(seat),
            _ => Vec::new(),
        };
        print!("{}", render::board(game.board(), &hints));

        let seat = match game.begin_turn() {
            Turn::Over => return Ok(()),
            Turn::Skipped(_) => continue,
            Turn::Move(seat) => seat,
        };

        print!("{}", render::instructions());
        if let Some(skipped) = game.skipped() {
            println!("{}", render::skip_notice(game.player(skipped)));
        }

        let mut prompt = render::turn_prompt(game.player(seat));
        loop {
            let command = match input.read_line(&prompt)? {
                Some(line) => Command::parse(&line),
                None => Command::Quit,
            };
            match game.submit(command) {
                Ok(result) => {
                    debug!(?seat, ?result, "turn finished");
                    break;
                }
                Err(e) => prompt = render::retry_prompt(e),
            }
        }

        if game.is_over() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use othello_core::{Color, EndReason, Outcome, Phase, Player, Seat};

    use super::*;
    use crate::input::testing::Scripted;

    fn settings() -> Settings {
        Settings {
            rows: Some(4),
            cols: Some(4),
            quick: true,
            hints: true,
            clear: false,
        }
    }

    fn game() -> Game {
        Game::new(
            4,
            4,
            Player::new("Ada", 'X', Color::Green).unwrap(),
            Player::new("Bob", 'O', Color::Red).unwrap(),
        )
    }

    #[test]
    fn test_play_until_quit() {
        colored::control::set_override(false);
        let mut g = game();
        let mut input = Scripted::new(["zz", "bb", "a b", "pass", "Q U I T"]);
        play(&mut g, &mut input, &settings()).unwrap();

        assert_eq!(g.phase(), Phase::Ended(EndReason::Quit));
        assert_eq!(g.players().0.score(), 4);
        assert_eq!(g.players().1.score(), 1);
        assert_eq!(
            input.prompts,
            [
                " Ada (X)'s turn: ",
                " That cell is not on game board. Please try again: ",
                " That cell is already taken. Please try again: ",
                " Bob (O)'s turn: ",
                " Ada (X)'s turn: ",
            ]
        );
    }

    #[test]
    fn test_closed_input_quits() {
        let mut g = game();
        let mut input = Scripted::default();
        play(&mut g, &mut input, &settings()).unwrap();
        assert_eq!(g.phase(), Phase::Ended(EndReason::Quit));
    }

    #[test]
    fn test_play_to_the_end() {
        colored::control::set_override(false);
        let mut g = game();
        let mut lines = Vec::new();
        // Play the first legal move each turn on a scratch copy to build a script.
        let mut scratch = g.clone();
        loop {
            match scratch.begin_turn() {
                Turn::Over => break,
                Turn::Skipped(_) => {}
                Turn::Move(seat) => {
                    let at = scratch.legal_moves(seat)[0].to_string();
                    scratch.submit(Command::Place(at.clone())).unwrap();
                    lines.push(at);
                }
            }
        }

        let mut input = Scripted::new(lines);
        play(&mut g, &mut input, &settings()).unwrap();
        assert_eq!(g.phase(), Phase::Ended(EndReason::NoMovesLeft));
        assert_eq!(g.outcome(), scratch.outcome());
        assert!(!g.can_move(Seat::First) && !g.can_move(Seat::Second));
    }

    #[test]
    fn test_ui_loop_play_again() {
        colored::control::set_override(false);
        let mut input = Scripted::new(["quit", "", "quit", "no"]);
        ui_loop(&settings(), &mut input).unwrap();
        let again = input
            .prompts
            .iter()
            .filter(|p| p.as_str() == " Press enter to play again: ")
            .count();
        assert_eq!(again, 2);
    }

    #[test]
    fn test_game_over_text_after_quit() {
        colored::control::set_override(false);
        let mut g = game();
        let mut input = Scripted::new(["ab", "quit"]);
        play(&mut g, &mut input, &settings()).unwrap();
        assert_eq!(
            g.outcome(),
            Outcome::Win {
                winner: Seat::First,
                margin: 3
            }
        );
        assert!(render::game_over(&g).contains(" Ada won by 3 points."));
    }
}
