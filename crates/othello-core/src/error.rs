//! Error types for move evaluation and game setup.
//!
//! Both enums are ordinary values: a rejected move or a bad setup answer is
//! reported to the player and retried, never treated as fatal.

use derive_more::{Display, Error};

use crate::disc::Color;

/// Reason a move was rejected.
///
/// Every rejection leaves the board and both scores untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinate did not contain exactly two characters.
    #[display("Command must be 2 characters long.")]
    BadLength,
    /// The coordinate does not name a cell of this board.
    #[display("That cell is not on game board.")]
    OffBoard,
    /// The target cell already holds a disc.
    #[display("That cell is already taken.")]
    Occupied,
    /// No direction brackets an opponent disc.
    #[display("No discs were flipped.")]
    NoCaptures,
    /// The game has ended and accepts no further commands.
    #[display("The game is already over.")]
    GameOver,
}

/// Reason a setup answer (player identity or board size) was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    #[display("Symbol must be one character long.")]
    SymbolLength,
    #[display("Symbol cannot be blank.")]
    BlankSymbol,
    #[display("Please choose a different name from {other}.")]
    DuplicateName { other: String },
    #[display("Please choose a different symbol from {other}.")]
    DuplicateSymbol { other: String },
    #[display("{color} is reserved for empty cells.")]
    ReservedColor { color: Color },
    #[display("Selection must be a number.")]
    NotANumber,
    #[display("Not a valid colour option.")]
    ColorOption,
    #[display("Must be even and between 4 & 26, inclusive.")]
    BoardSize,
}
