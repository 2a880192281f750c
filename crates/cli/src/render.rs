//! Console rendering of the board, scores and messages.
//!
//! Every function returns the text to print rather than printing it, so the
//! output can be checked in tests. Styling goes through [`paint`]: a
//! `ColoredString` always resets the terminal style after its text, so no
//! color state leaks into the next write.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use othello_core::coord::index_to_letter;
use othello_core::{Board, Color, Coord, Game, Outcome, Player};

/// Applies a disc color to `text`.
pub fn paint(text: &str, color: Color) -> ColoredString {
    let color = match color {
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::Red => colored::Color::Red,
        Color::Blue => colored::Color::Blue,
        Color::White => colored::Color::White,
    };
    text.color(color)
}

/// Clears the terminal and moves the cursor to the top-left corner.
pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    stdout.flush()
}

pub fn welcome() -> String {
    "\n Welcome to Othello!\n\n Start by customizing your game.\n\n".to_string()
}

/// Section header with an underline of matching width.
pub fn heading(title: &str) -> String {
    format!(" {title}\n {}\n", "-".repeat(title.chars().count()))
}

/// Numbered color choices; the last option is picked with ENTER.
pub fn color_menu(options: &[Color]) -> String {
    let mut menu = String::from(" Colour number ( ");
    if let Some((last, numbered)) = options.split_last() {
        for (i, &color) in numbered.iter().enumerate() {
            let label = format!("[{}]{color} ", i + 1);
            menu.push_str(&paint(&label, color).to_string());
        }
        let label = format!("[ENTER]{last} ): ");
        menu.push_str(&paint(&label, *last).to_string());
    }
    menu
}

pub fn scoreboard(game: &Game) -> String {
    let (first, second) = game.players();
    let mut out = String::from("\n");
    out.push_str(&heading("SCOREBOARD"));
    for player in [first, second] {
        let line = format!(" {} ({}): {}", player.name(), player.symbol(), player.score());
        out.push_str(&format!("{}\n", paint(&line, player.color())));
    }
    out.push('\n');
    out
}

/// Draws the grid with row and column letters.
///
/// Cells listed in `hints` are marked with a dot when empty.
pub fn board(board: &Board, hints: &[Coord]) -> String {
    let (rows, cols) = (board.rows(), board.cols());
    let letter = |i: usize| index_to_letter(i).unwrap_or(' ');
    let mut out = String::from("  ");

    for c in 0..cols {
        out.push_str(&format!("   {}", letter(c)));
    }
    out.push('\n');

    for r in 0..rows {
        if r == 0 {
            out.push_str("   ┌───");
            out.push_str(&"┬───".repeat(cols - 1));
            out.push_str("┐\n");
        } else {
            out.push_str("   ├───");
            for c in 1..cols {
                let marked = (r == 2 || r == rows - 2) && (c == 2 || c == cols - 2);
                out.push_str(if marked { "╬───" } else { "┼───" });
            }
            out.push_str("┤\n");
        }

        out.push_str(&format!(" {}", letter(r)));
        for (c, disc) in board.row(r).iter().enumerate() {
            out.push_str(" │");
            let cell = if disc.is_empty() && hints.contains(&Coord::new(r, c)) {
                " ·".dimmed().to_string()
            } else {
                paint(&format!(" {}", disc.symbol()), disc.color()).to_string()
            };
            out.push_str(&cell);
        }
        out.push_str(" │\n");
    }

    out.push_str("   └───");
    out.push_str(&"┴───".repeat(cols - 1));
    out.push_str("┘\n");
    out
}

pub fn instructions() -> &'static str {
    concat!(
        "\n Instructions:\n",
        " - Enter row + column to place a piece (eg. 'ab').\n",
        " - Enter 'pass' to pass your turn.\n",
        " - Enter 'quit' to end game.\n\n",
    )
}

pub fn skip_notice(player: &Player) -> String {
    format!(
        "{}'s turn was skipped because they had no possible moves.",
        paint(&format!(" {}", player.name()), player.color())
    )
}

pub fn turn_prompt(player: &Player) -> String {
    let who = format!(" {} ({})", player.name(), player.symbol());
    format!("{}'s turn: ", paint(&who, player.color()))
}

pub fn retry_prompt(reason: impl std::fmt::Display) -> String {
    format!(" {reason} Please try again: ")
}

pub fn game_over(game: &Game) -> String {
    let (first, second) = game.players();
    let mut out = String::from("\n GAME OVER.\n\n");
    match game.outcome() {
        Outcome::Tie { score } => out.push_str(&format!(
            "{} and {} tied with {score} points. Good game!\n",
            paint(&format!(" {}", first.name()), first.color()),
            paint(second.name(), second.color()),
        )),
        Outcome::Win { winner, margin } => {
            let winner = game.player(winner);
            out.push_str(&format!(
                "{} won by {margin} points. Congratulations!\n",
                paint(&format!(" {}", winner.name()), winner.color()),
            ));
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn game(rows: usize, cols: usize) -> Game {
        Game::new(
            rows,
            cols,
            Player::new("Ada", 'X', Color::Green).unwrap(),
            Player::new("Bob", 'O', Color::Red).unwrap(),
        )
    }

    #[test]
    fn test_board_4x4() {
        plain();
        let g = game(4, 4);
        let expected = concat!(
            "     a   b   c   d\n",
            "   ┌───┬───┬───┬───┐\n",
            " a │   │   │   │   │\n",
            "   ├───┼───┼───┼───┤\n",
            " b │   │ O │ X │   │\n",
            "   ├───┼───╬───┼───┤\n",
            " c │   │ X │ O │   │\n",
            "   ├───┼───┼───┼───┤\n",
            " d │   │   │   │   │\n",
            "   └───┴───┴───┴───┘\n",
        );
        assert_eq!(board(g.board(), &[]), expected);
    }

    #[test]
    fn test_board_marked_crosses() {
        plain();
        let g = game(8, 8);
        let text = board(g.board(), &[]);
        assert_eq!(text.matches('╬').count(), 4);
        assert!(text.starts_with("     a   b   c   d   e   f   g   h\n"));
        assert!(text.contains(" h │"));
    }

    #[test]
    fn test_board_hints() {
        plain();
        let g = game(4, 4);
        let hints = g.legal_moves(othello_core::Seat::First);
        let text = board(g.board(), &hints);
        assert_eq!(text.matches('·').count(), hints.len());
        assert_eq!(hints.len(), 4);
    }

    #[test]
    fn test_scoreboard() {
        plain();
        let text = scoreboard(&game(8, 8));
        assert!(text.contains(" SCOREBOARD\n ----------\n"));
        assert!(text.contains(" Ada (X): 2\n"));
        assert!(text.contains(" Bob (O): 2\n"));
    }

    #[test]
    fn test_color_menu() {
        plain();
        let menu = color_menu(&Color::PALETTE);
        assert_eq!(
            menu,
            " Colour number ( [1]Green [2]Yellow [3]Magenta [4]Cyan [5]Red [ENTER]Blue ): "
        );
    }

    #[test]
    fn test_game_over_tie() {
        plain();
        let text = game_over(&game(8, 8));
        assert!(text.contains(" Ada and Bob tied with 2 points. Good game!"));
    }

    #[test]
    fn test_game_over_win() {
        plain();
        let mut g = game(8, 8);
        g.submit(othello_core::Command::parse("cd")).unwrap();
        let text = game_over(&g);
        assert!(text.contains(" Ada won by 3 points. Congratulations!"));
    }

    #[test]
    fn test_prompts() {
        plain();
        let p = Player::new("Ada", 'X', Color::Green).unwrap();
        assert_eq!(turn_prompt(&p), " Ada (X)'s turn: ");
        assert_eq!(
            skip_notice(&p),
            " Ada's turn was skipped because they had no possible moves."
        );
        assert_eq!(
            retry_prompt(&othello_core::MoveError::Occupied),
            " That cell is already taken. Please try again: "
        );
    }
}
