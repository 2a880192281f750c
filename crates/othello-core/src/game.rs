//! Turn controller for a two-player game.
//!
//! `Game` owns the board and both players and drives the turn order: it asks
//! the board whether the current player can move, feeds it commands until one
//! is accepted, skips players without legal moves and detects the end of the
//! game. It performs no I/O; the front end reads commands and renders state.

use std::cmp::Ordering;

use tracing::{debug, info, instrument};

use crate::board::{Board, MoveMode, MoveOutcome, Placement};
use crate::coord::Coord;
use crate::error::MoveError;
use crate::player::Player;

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// A command entered by the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a disc at the given textual coordinate.
    Place(String),
    /// Give up this turn.
    Pass,
    /// End the game.
    Quit,
}

impl Command {
    /// Interprets a raw input line.
    ///
    /// The line is lowercased and stripped of all whitespace, so `" Pa ss"`
    /// is a pass. Anything that is not a keyword is taken as a coordinate and
    /// validated later by the board.
    pub fn parse(line: &str) -> Command {
        let cleaned: String = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match cleaned.as_str() {
            "pass" => Command::Pass,
            "quit" => Command::Quit,
            _ => Command::Place(cleaned),
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Neither player had a legal move.
    NoMovesLeft,
    /// A player entered `quit`.
    Quit,
}

/// State of the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Seat),
    Ended(EndReason),
}

/// What the front end should do at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Ask this seat for a command.
    Move(Seat),
    /// This seat had no legal move; the turn passed to the other seat.
    Skipped(Seat),
    /// The game is over.
    Over,
}

/// Result of an accepted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Placed(Placement),
    Passed,
    Quit,
}

/// Final result of a game, by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Seat, margin: u32 },
    Tie { score: u32 },
}

/// A game session: board, both players and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    first: Player,
    second: Player,
    phase: Phase,
    /// Seat whose last turn was skipped, shown to players once.
    skipped: Option<Seat>,
}

impl Game {
    /// Starts a new game on a `rows` x `cols` board.
    ///
    /// Both scores are reset to their starting value.
    ///
    /// # Panics
    ///
    /// Panics on invalid board dimensions, see [`Board::new`].
    pub fn new(rows: usize, cols: usize, mut first: Player, mut second: Player) -> Game {
        first.reset_score();
        second.reset_score();
        let board = Board::new(rows, cols, &first, &second);
        info!(rows, cols, first = first.name(), second = second.name(), "new game");
        Game {
            board,
            first,
            second,
            phase: Phase::AwaitingMove(Seat::First),
            skipped: None,
        }
    }

    /// Continues from an existing position with `first` to move.
    ///
    /// Scores are recomputed from the discs on the board.
    pub fn from_board(board: Board, mut first: Player, mut second: Player) -> Game {
        first.set_score(board.count(first.disc()));
        second.set_score(board.count(second.disc()));
        Game {
            board,
            first,
            second,
            phase: Phase::AwaitingMove(Seat::First),
            skipped: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Both players, first seat first.
    pub fn players(&self) -> (&Player, &Player) {
        (&self.first, &self.second)
    }

    /// Seat to move, or `None` once the game has ended.
    pub fn current(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingMove(seat) => Some(seat),
            Phase::Ended(_) => None,
        }
    }

    /// The seat whose previous turn was skipped for lack of moves, if the
    /// players have not been told yet.
    pub fn skipped(&self) -> Option<Seat> {
        self.skipped
    }

    /// Returns `true` if the player in `seat` has a legal move.
    pub fn can_move(&self, seat: Seat) -> bool {
        let (mover, opponent) = self.pair(seat);
        self.board.has_any_legal_move(mover, opponent)
    }

    /// Legal cells for the player in `seat`.
    pub fn legal_moves(&self, seat: Seat) -> Vec<Coord> {
        let (mover, opponent) = self.pair(seat);
        self.board.legal_moves(mover, opponent)
    }

    /// Prepares the next turn.
    ///
    /// Ends the game if neither player can move. If only the current player
    /// is stuck, its turn is skipped and the other seat becomes current.
    #[instrument(level = "debug", skip(self))]
    pub fn begin_turn(&mut self) -> Turn {
        let seat = match self.phase {
            Phase::AwaitingMove(seat) => seat,
            Phase::Ended(_) => return Turn::Over,
        };

        if !self.can_move(seat) {
            if !self.can_move(seat.other()) {
                info!("no legal moves for either player");
                self.phase = Phase::Ended(EndReason::NoMovesLeft);
                return Turn::Over;
            }
            debug!(?seat, "no legal moves, turn skipped");
            self.skipped = Some(seat);
            self.phase = Phase::AwaitingMove(seat.other());
            return Turn::Skipped(seat);
        }

        Turn::Move(seat)
    }

    /// Applies a command for the current player.
    ///
    /// An accepted placement or pass hands the turn to the other seat; `quit`
    /// ends the game.
    ///
    /// # Errors
    ///
    /// A rejected placement returns the board's reason and keeps the same
    /// player to move. `MoveError::GameOver` once the game has ended.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self, command: Command) -> Result<TurnResult, MoveError> {
        let seat = self.current().ok_or(MoveError::GameOver)?;

        let result = match command {
            Command::Quit => {
                info!(?seat, "player quit");
                self.phase = Phase::Ended(EndReason::Quit);
                return Ok(TurnResult::Quit);
            }
            Command::Pass => TurnResult::Passed,
            Command::Place(cell) => {
                let (board, mover, opponent) = self.split(seat);
                match board.evaluate_move(mover, opponent, &cell, MoveMode::Commit)? {
                    MoveOutcome::Applied(placement) => TurnResult::Placed(placement),
                    MoveOutcome::Legal => unreachable!("commit mode always applies"),
                }
            }
        };

        if self.skipped == Some(seat.other()) {
            self.skipped = None;
        }
        self.phase = Phase::AwaitingMove(seat.other());
        Ok(result)
    }

    /// Compares the final scores.
    pub fn outcome(&self) -> Outcome {
        let (a, b) = (self.first.score(), self.second.score());
        match a.cmp(&b) {
            Ordering::Equal => Outcome::Tie { score: a },
            Ordering::Greater => Outcome::Win {
                winner: Seat::First,
                margin: a - b,
            },
            Ordering::Less => Outcome::Win {
                winner: Seat::Second,
                margin: b - a,
            },
        }
    }

    fn pair(&self, seat: Seat) -> (&Player, &Player) {
        match seat {
            Seat::First => (&self.first, &self.second),
            Seat::Second => (&self.second, &self.first),
        }
    }

    fn split(&mut self, seat: Seat) -> (&mut Board, &mut Player, &mut Player) {
        match seat {
            Seat::First => (&mut self.board, &mut self.first, &mut self.second),
            Seat::Second => (&mut self.board, &mut self.second, &mut self.first),
        }
    }
}
