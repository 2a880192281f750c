//! Interactive game setup: player identities and board size.
//!
//! Each answer is validated by a pure `parse_*` function. A refused answer
//! is reported and asked again, so setup errors never reach the engine.

use anyhow::{Context, Result};
use othello_core::board::{DEFAULT_SIZE, is_valid_dimension};
use othello_core::{Color, Player, SetupError};
use tracing::debug;

use crate::input::LineInput;
use crate::render;

const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];
const DEFAULT_SYMBOLS: [char; 2] = ['X', 'O'];

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates a player name. An empty answer selects `default`.
pub fn parse_name(input: &str, default: &str, first: Option<&Player>) -> Result<String, SetupError> {
    let name = match input.trim() {
        "" => default,
        name => name,
    };

    if first.is_some_and(|p| p.name() == name) {
        return Err(SetupError::DuplicateName {
            other: DEFAULT_NAMES[0].to_string(),
        });
    }
    Ok(name.to_string())
}

/// Validates a one-character symbol. Whitespace is removed first and an
/// empty answer selects `default`.
pub fn parse_symbol(input: &str, default: char, first: Option<&Player>) -> Result<char, SetupError> {
    let stripped = strip_whitespace(input);
    let mut chars = stripped.chars();
    let symbol = match (chars.next(), chars.next()) {
        (None, _) => default,
        (Some(c), None) => c,
        (Some(_), Some(_)) => return Err(SetupError::SymbolLength),
    };

    if first.is_some_and(|p| p.symbol() == symbol) {
        return Err(SetupError::DuplicateSymbol {
            other: DEFAULT_NAMES[0].to_string(),
        });
    }
    Ok(symbol)
}

/// Picks a color from `options` by its 1-based number. An empty answer picks
/// the last option, which is never numbered.
pub fn parse_color(input: &str, options: &[Color]) -> Result<Color, SetupError> {
    let stripped = strip_whitespace(input);
    if stripped.is_empty() {
        return options.last().copied().ok_or(SetupError::ColorOption);
    }

    let n: usize = stripped.parse().map_err(|_| SetupError::NotANumber)?;
    if n == 0 || n >= options.len() {
        return Err(SetupError::ColorOption);
    }
    Ok(options[n - 1])
}

/// Validates a row or column count. An empty answer selects the default.
pub fn parse_dimension(input: &str) -> Result<usize, SetupError> {
    let stripped = strip_whitespace(input);
    if stripped.is_empty() {
        return Ok(DEFAULT_SIZE);
    }

    let n: usize = stripped.parse().map_err(|_| SetupError::NotANumber)?;
    if !is_valid_dimension(n) {
        return Err(SetupError::BoardSize);
    }
    Ok(n)
}

/// `clap` value parser for `--rows` and `--cols`.
pub fn dimension_arg(input: &str) -> Result<usize, String> {
    parse_dimension(input).map_err(|e| e.to_string())
}

/// Repeats `prompt` until `parse` accepts the answer.
fn ask<T>(
    input: &mut impl LineInput,
    prompt: &str,
    mut parse: impl FnMut(&str) -> Result<T, SetupError>,
) -> Result<T> {
    let mut prompt = prompt.to_string();
    loop {
        let line = input
            .read_line(&prompt)?
            .context("input closed during setup")?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(%e, "setup answer refused");
                prompt = render::retry_prompt(e);
            }
        }
    }
}

/// Asks for one player's identity. `first` is the already configured
/// player when asking for the second one.
fn ask_player(input: &mut impl LineInput, first: Option<&Player>) -> Result<Player> {
    let seat = usize::from(first.is_some());
    let default_name = DEFAULT_NAMES[seat];
    let default_symbol = DEFAULT_SYMBOLS[seat];

    print!("{}", render::heading(&default_name.to_uppercase()));

    let name = ask(
        input,
        &format!(" Name (press enter for default, '{default_name}'): "),
        |line| parse_name(line, default_name, first),
    )?;

    let symbol = ask(
        input,
        &format!(" ONE-CHARACTER symbol (press enter for default, '{default_symbol}'): "),
        |line| parse_symbol(line, default_symbol, first),
    )?;

    let options = available_colors(first);
    let color = ask(input, &render::color_menu(&options), |line| {
        parse_color(line, &options)
    })?;

    Ok(Player::new(name, symbol, color)?)
}

/// Palette minus the color already taken by `first`.
fn available_colors(first: Option<&Player>) -> Vec<Color> {
    Color::PALETTE
        .into_iter()
        .filter(|&c| first.is_none_or(|p| p.color() != c))
        .collect()
}

/// Collects both players, or builds the defaults when `quick` is set.
pub fn players(input: &mut impl LineInput, quick: bool) -> Result<(Player, Player)> {
    if quick {
        let first = Player::new(DEFAULT_NAMES[0], DEFAULT_SYMBOLS[0], Color::Blue)?;
        let second = Player::new(DEFAULT_NAMES[1], DEFAULT_SYMBOLS[1], Color::Red)?;
        return Ok((first, second));
    }

    print!("{}", render::welcome());
    let first = ask_player(input, None)?;
    println!();
    let second = ask_player(input, Some(&first))?;
    debug!(first = first.name(), second = second.name(), "players ready");
    Ok((first, second))
}

/// Collects the board size. Dimensions given on the command line are not
/// asked again.
pub fn board_size(
    input: &mut impl LineInput,
    rows: Option<usize>,
    cols: Option<usize>,
    quick: bool,
) -> Result<(usize, usize)> {
    let default = quick.then_some(DEFAULT_SIZE);
    let (rows, cols) = (rows.or(default), cols.or(default));
    if let (Some(rows), Some(cols)) = (rows, cols) {
        return Ok((rows, cols));
    }

    println!();
    print!("{}", render::heading("BOARD SIZE"));

    let mut dimension = |preset: Option<usize>, what: &str| match preset {
        Some(n) => Ok(n),
        None => ask(
            &mut *input,
            &format!(
                " Choose desired number of {what} (must be even and between 4 & 26, inclusive). Press enter for default, {DEFAULT_SIZE}: "
            ),
            parse_dimension,
        ),
    };

    let rows = dimension(rows, "rows")?;
    let cols = dimension(cols, "columns")?;
    Ok((rows, cols))
}
