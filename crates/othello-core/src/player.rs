//! Player identity and running score.

use crate::disc::{Color, Disc};
use crate::error::SetupError;

/// Number of cells each player owns when a game starts.
pub const INITIAL_SCORE: u32 = 2;

/// A participant in the game.
///
/// A player *has* a disc: every cell it owns holds a copy of that value.
/// The score is only changed by the board while a move is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    disc: Disc,
    score: u32,
}

impl Player {
    /// Creates a player with the starting score.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::BlankSymbol` for a whitespace symbol and
    /// `SetupError::ReservedColor` for the neutral color, since either would
    /// make the player's disc indistinguishable from an empty cell.
    pub fn new(name: impl Into<String>, symbol: char, color: Color) -> Result<Player, SetupError> {
        if symbol.is_whitespace() {
            return Err(SetupError::BlankSymbol);
        }
        if color.is_neutral() {
            return Err(SetupError::ReservedColor { color });
        }

        Ok(Player {
            name: name.into(),
            disc: Disc::new(symbol, color),
            score: INITIAL_SCORE,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn disc(&self) -> Disc {
        self.disc
    }

    pub fn symbol(&self) -> char {
        self.disc.symbol()
    }

    pub fn color(&self) -> Color {
        self.disc.color()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Puts the score back to its starting value for a fresh game.
    pub fn reset_score(&mut self) {
        self.score = INITIAL_SCORE;
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(crate) fn gain(&mut self, discs: u32) {
        self.score += discs;
    }

    pub(crate) fn lose(&mut self, discs: u32) {
        debug_assert!(self.score >= discs, "{} cannot lose {discs} discs", self.name);
        self.score = self.score.saturating_sub(discs);
    }
}
