//! Board engine and turn controller for console Othello.
//!
//! The crate holds no terminal state: it exposes the grid, the players and
//! the result of every move so that a front end can render them however it
//! likes.

pub mod board;
pub mod coord;
pub mod disc;
pub mod error;
pub mod game;
pub mod player;

pub use board::{Board, MoveMode, MoveOutcome, Placement};
pub use coord::Coord;
pub use disc::{Color, Disc};
pub use error::{MoveError, SetupError};
pub use game::{Command, EndReason, Game, Outcome, Phase, Seat, Turn, TurnResult};
pub use player::Player;
