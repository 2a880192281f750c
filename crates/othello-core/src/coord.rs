use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Largest number of rows or columns a coordinate letter can address.
pub const MAX_INDEX: usize = ALPHABET.len();

/// A cell position on the board, zero-based.
///
/// Textually a cell is written as a row letter followed by a column letter,
/// so `"ab"` is row 0, column 1:
///
/// ```text
///     a   b   c   d
/// a  aa  ab  ac  ad
/// b  ba  bb  bc  bd
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Steps once by `(dr, dc)`, returning `None` when the result would be
    /// negative. The upper bound is checked by the board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Steps once by `(dr, dc)` on a path the caller already walked.
    #[inline]
    pub(crate) fn step(self, dr: isize, dc: isize) -> Coord {
        debug_assert!(self.offset(dr, dc).is_some(), "step from {self:?} leaves the board");
        Coord {
            row: self.row.wrapping_add_signed(dr),
            col: self.col.wrapping_add_signed(dc),
        }
    }
}

/// Converts an index (0-25) into its letter (`'a'`-`'z'`).
///
/// # Returns
///
/// `None` if the index is past the end of the alphabet.
pub fn index_to_letter(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}

/// Converts a lowercase letter into its index (0-25).
///
/// # Returns
///
/// `None` for anything outside `'a'..='z'`.
pub fn letter_to_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

impl FromStr for Coord {
    type Err = MoveError;

    /// Decodes a coordinate such as `"cd"`, `"C D"` or `" cD "`.
    ///
    /// The input is lowercased and stripped of all whitespace first. Exactly
    /// two characters must remain; a character outside the alphabet names no
    /// cell and is reported as off the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if chars.len() != 2 {
            return Err(MoveError::BadLength);
        }

        let row = letter_to_index(chars[0]).ok_or(MoveError::OffBoard)?;
        let col = letter_to_index(chars[1]).ok_or(MoveError::OffBoard)?;
        Ok(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (index_to_letter(self.row), index_to_letter(self.col)) {
            (Some(r), Some(c)) => write!(f, "{r}{c}"),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_conversions() {
        assert_eq!(letter_to_index('a'), Some(0));
        assert_eq!(letter_to_index('z'), Some(25));
        assert_eq!(letter_to_index('A'), None);
        assert_eq!(letter_to_index('1'), None);
        assert_eq!(index_to_letter(0), Some('a'));
        assert_eq!(index_to_letter(25), Some('z'));
        assert_eq!(index_to_letter(26), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cd".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!("CD".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!(" c\td ".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!("zz".parse::<Coord>(), Ok(Coord::new(25, 25)));
    }

    #[test]
    fn test_from_str_bad_length() {
        assert_eq!("".parse::<Coord>(), Err(MoveError::BadLength));
        assert_eq!("a".parse::<Coord>(), Err(MoveError::BadLength));
        assert_eq!("abc".parse::<Coord>(), Err(MoveError::BadLength));
        assert_eq!("   ".parse::<Coord>(), Err(MoveError::BadLength));
    }

    #[test]
    fn test_from_str_unknown_letter_is_off_board() {
        assert_eq!("a1".parse::<Coord>(), Err(MoveError::OffBoard));
        assert_eq!("?b".parse::<Coord>(), Err(MoveError::OffBoard));
        assert_eq!("éa".parse::<Coord>(), Err(MoveError::OffBoard));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(0, 1).to_string(), "ab");
        assert_eq!(Coord::new(7, 7).to_string(), "hh");
        assert_eq!(Coord::new(30, 1).to_string(), "(30, 1)");
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(0, 3);
        assert_eq!(c.offset(1, -1), Some(Coord::new(1, 2)));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(Coord::new(2, 0).offset(0, -1), None);
    }
}
