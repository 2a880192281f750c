//! Rectangular Othello board and the move engine.
//!
//! The board owns a row-major grid of [`Disc`] values. A move is evaluated by
//! walking outward from the target cell in each of the eight compass
//! directions, looking for a run of opponent discs closed off by one of the
//! mover's discs. The same scan serves both the non-mutating legality probe
//! and the committing move, so the two can never disagree.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, instrument};

use crate::coord::{Coord, MAX_INDEX};
use crate::disc::Disc;
use crate::error::MoveError;
use crate::player::Player;

/// Smallest allowed number of rows or columns.
pub const MIN_SIZE: usize = 4;

/// Largest allowed number of rows or columns (one per coordinate letter).
pub const MAX_SIZE: usize = MAX_INDEX;

/// Rows and columns used when the player accepts the default.
pub const DEFAULT_SIZE: usize = 8;

/// Row/column steps: up-left, up, up-right, right, down-right, down, down-left, left.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Returns `true` if `n` is an even number of rows or columns in
/// `MIN_SIZE..=MAX_SIZE`.
pub fn is_valid_dimension(n: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&n) && n.is_multiple_of(2)
}

/// How [`Board::evaluate_move`] treats a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Report legality as soon as one capturing direction is found.
    /// Nothing is mutated.
    Probe,
    /// Apply every capture, place the disc and update both scores.
    Commit,
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The cell the new disc was placed on.
    pub at: Coord,
    /// Number of opponent discs turned over.
    pub flipped: u32,
}

/// Successful result of [`Board::evaluate_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is legal (probe mode, board untouched).
    Legal,
    /// The move was played.
    Applied(Placement),
}

/// A run of bracketed opponent discs starting next to the target cell.
#[derive(Debug, Clone, Copy)]
struct Run {
    dr: isize,
    dc: isize,
    len: usize,
}

type Runs = ArrayVec<Run, 8>;

/// A rows x cols Othello board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Disc>,
}

impl Board {
    /// Creates a board with the four starting discs in the center.
    ///
    /// `first` owns the north-east and south-west center cells, `second` the
    /// north-west and south-east ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is odd or outside `MIN_SIZE..=MAX_SIZE`.
    /// Callers are expected to validate sizes before building a board.
    pub fn new(rows: usize, cols: usize, first: &Player, second: &Player) -> Board {
        assert!(
            is_valid_dimension(rows) && is_valid_dimension(cols),
            "board dimensions must be even and in {MIN_SIZE}..={MAX_SIZE}, got {rows}x{cols}"
        );

        let mut board = Board {
            rows,
            cols,
            cells: vec![Disc::EMPTY; rows * cols],
        };

        let (r, c) = (rows / 2, cols / 2);
        board.set(Coord::new(r - 1, c), first.disc());
        board.set(Coord::new(r, c - 1), first.disc());
        board.set(Coord::new(r - 1, c - 1), second.disc());
        board.set(Coord::new(r, c), second.disc());
        board
    }

    /// Creates a board from a text layout.
    ///
    /// Each character is one cell in row-major order: a player's symbol for
    /// that player's disc, `-` for an empty cell. Whitespace is ignored, so
    /// rows may be written on separate lines.
    ///
    /// # Panics
    ///
    /// Panics on invalid dimensions, a layout of the wrong length or an
    /// unknown character.
    pub fn from_layout(
        rows: usize,
        cols: usize,
        layout: &str,
        first: &Player,
        second: &Player,
    ) -> Board {
        assert!(
            is_valid_dimension(rows) && is_valid_dimension(cols),
            "board dimensions must be even and in {MIN_SIZE}..={MAX_SIZE}, got {rows}x{cols}"
        );

        let cells: Vec<Disc> = layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '-' => Disc::EMPTY,
                c if c == first.symbol() => first.disc(),
                c if c == second.symbol() => second.disc(),
                c => panic!("unknown layout character '{c}'"),
            })
            .collect();

        assert_eq!(cells.len(), rows * cols, "layout does not fit a {rows}x{cols} board");
        Board { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the coordinate names a cell of this board.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Returns the disc at `at`, or `None` off the board.
    pub fn get(&self, at: Coord) -> Option<Disc> {
        self.contains(at).then(|| self.cells[self.index(at)])
    }

    /// Returns one row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Disc] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of cells holding `disc`.
    pub fn count(&self, disc: Disc) -> u32 {
        self.cells.iter().filter(|&&d| d == disc).count() as u32
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> u32 {
        self.cells.iter().filter(|d| !d.is_empty()).count() as u32
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// Decodes a textual coordinate and checks that it lies on this board.
    ///
    /// # Errors
    ///
    /// `MoveError::BadLength` or `MoveError::OffBoard`.
    pub fn locate(&self, input: &str) -> Result<Coord, MoveError> {
        let at: Coord = input.parse()?;
        if self.contains(at) {
            Ok(at)
        } else {
            Err(MoveError::OffBoard)
        }
    }

    /// Evaluates a move given as text, probing or committing it.
    ///
    /// With `MoveMode::Probe` the board and both players are left untouched
    /// and `MoveOutcome::Legal` is returned for a legal move. With
    /// `MoveMode::Commit` the move is played and the placement is returned.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was rejected. A rejected move never
    /// mutates the board or the scores.
    pub fn evaluate_move(
        &mut self,
        mover: &mut Player,
        opponent: &mut Player,
        input: &str,
        mode: MoveMode,
    ) -> Result<MoveOutcome, MoveError> {
        let at = self.locate(input)?;
        match mode {
            MoveMode::Probe => self.probe_at(mover, opponent, at).map(|()| MoveOutcome::Legal),
            MoveMode::Commit => self.play_at(mover, opponent, at).map(MoveOutcome::Applied),
        }
    }

    /// Checks whether `mover` may place a disc at `at` without changing anything.
    ///
    /// # Errors
    ///
    /// `OffBoard`, `Occupied` or `NoCaptures`.
    pub fn probe_at(&self, mover: &Player, opponent: &Player, at: Coord) -> Result<(), MoveError> {
        self.captures(mover.disc(), opponent.disc(), at, MoveMode::Probe)
            .map(|_| ())
    }

    /// Plays a move for `mover` at `at`.
    ///
    /// All eight directions are scanned before anything is written, so the
    /// move is applied as a whole or not at all. Each flipped disc moves one
    /// point from `opponent` to `mover`, and the placed disc adds one more.
    ///
    /// # Errors
    ///
    /// `OffBoard`, `Occupied` or `NoCaptures`.
    #[instrument(level = "debug", skip(self, mover, opponent), fields(mover = %mover.name(), at = %at))]
    pub fn play_at(
        &mut self,
        mover: &mut Player,
        opponent: &mut Player,
        at: Coord,
    ) -> Result<Placement, MoveError> {
        let runs = self.captures(mover.disc(), opponent.disc(), at, MoveMode::Commit)?;

        let mut flipped = 0;
        for run in &runs {
            let mut cur = at;
            for _ in 0..run.len {
                cur = cur.step(run.dr, run.dc);
                self.set(cur, mover.disc());
            }
            flipped += run.len as u32;
        }

        mover.gain(flipped);
        opponent.lose(flipped);

        self.set(at, mover.disc());
        mover.gain(1);

        debug!(
            flipped,
            directions = runs.len(),
            mover_score = mover.score(),
            opponent_score = opponent.score(),
            "move applied"
        );
        Ok(Placement { at, flipped })
    }

    /// Returns `true` if `mover` has at least one legal move.
    ///
    /// Stops at the first legal cell found.
    pub fn has_any_legal_move(&self, mover: &Player, opponent: &Player) -> bool {
        self.coords()
            .any(|at| self.probe_at(mover, opponent, at).is_ok())
    }

    /// Lists every legal cell for `mover` in row-major order.
    pub fn legal_moves(&self, mover: &Player, opponent: &Player) -> Vec<Coord> {
        self.coords()
            .filter(|&at| self.probe_at(mover, opponent, at).is_ok())
            .collect()
    }

    /// Finds every capturing run for a disc placed at `at`.
    ///
    /// In probe mode the search stops after the first run.
    fn captures(&self, mover: Disc, opponent: Disc, at: Coord, mode: MoveMode) -> Result<Runs, MoveError> {
        if !self.contains(at) {
            return Err(MoveError::OffBoard);
        }
        if !self.cells[self.index(at)].is_empty() {
            return Err(MoveError::Occupied);
        }

        let mut runs = Runs::new();
        for &(dr, dc) in &DIRECTIONS {
            if let Some(len) = self.bracketed(at, dr, dc, mover, opponent) {
                runs.push(Run { dr, dc, len });
                if mode == MoveMode::Probe {
                    break;
                }
            }
        }

        if runs.is_empty() {
            Err(MoveError::NoCaptures)
        } else {
            Ok(runs)
        }
    }

    /// Walks from `at` in one direction and returns the length of the run of
    /// opponent discs closed off by a mover disc.
    ///
    /// `None` if the neighbouring cell is not the opponent's, or the run ends
    /// at an empty cell or the edge of the board.
    fn bracketed(&self, at: Coord, dr: isize, dc: isize, mover: Disc, opponent: Disc) -> Option<usize> {
        let mut len = 0;
        let mut cur = at;
        loop {
            cur = cur.offset(dr, dc).filter(|&c| self.contains(c))?;
            let disc = self.cells[self.index(cur)];
            if disc == opponent {
                len += 1;
            } else if disc == mover {
                return (len > 0).then_some(len);
            } else {
                return None;
            }
        }
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        debug_assert!(self.contains(at));
        at.row * self.cols + at.col
    }

    #[inline]
    fn set(&mut self, at: Coord, disc: Disc) {
        let idx = self.index(at);
        self.cells[idx] = disc;
    }
}

/// Writes the board in the layout accepted by [`Board::from_layout`], one
/// row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for disc in self.row(r) {
                let c = if disc.is_empty() { '-' } else { disc.symbol() };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
