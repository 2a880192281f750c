use derive_more::Display;

/// Display color attached to a disc.
///
/// The core only carries the tag; mapping it onto terminal escape codes is
/// up to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Color {
    Green,
    Yellow,
    Magenta,
    Cyan,
    Red,
    Blue,
    /// Neutral color of the empty disc. Never offered to players.
    White,
}

impl Color {
    /// Colors a player may choose, in the order they are offered.
    pub const PALETTE: [Color; 6] = [
        Color::Green,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Red,
        Color::Blue,
    ];

    /// Returns `true` for the neutral color reserved for empty cells.
    pub fn is_neutral(self) -> bool {
        self == Color::White
    }
}

/// A marker occupying a board cell.
///
/// Two discs are equal iff both the symbol and the color match, so every
/// cell owned by a player holds a copy of that player's disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disc {
    symbol: char,
    color: Color,
}

impl Disc {
    /// The unoccupied cell marker.
    pub const EMPTY: Disc = Disc {
        symbol: ' ',
        color: Color::White,
    };

    pub const fn new(symbol: char, color: Color) -> Disc {
        Disc { symbol, color }
    }

    pub fn symbol(self) -> char {
        self.symbol
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn is_empty(self) -> bool {
        self == Disc::EMPTY
    }
}

impl Default for Disc {
    fn default() -> Self {
        Disc::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Disc::new('X', Color::Red), Disc::new('X', Color::Red));
        assert_ne!(Disc::new('X', Color::Red), Disc::new('X', Color::Blue));
        assert_ne!(Disc::new('X', Color::Red), Disc::new('O', Color::Red));
    }

    #[test]
    fn test_empty() {
        assert!(Disc::EMPTY.is_empty());
        assert!(Disc::default().is_empty());
        assert!(!Disc::new(' ', Color::Green).is_empty());
        assert_eq!(Disc::EMPTY.symbol(), ' ');
        assert!(Disc::EMPTY.color().is_neutral());
    }

    #[test]
    fn test_palette_excludes_neutral() {
        assert!(Color::PALETTE.iter().all(|c| !c.is_neutral()));
        assert_eq!(Color::PALETTE.last(), Some(&Color::Blue));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Magenta.to_string(), "Magenta");
    }
}
