//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, wire protocol).
//!
//! # Board Dimensions
//!
//! - **Width**: 7 columns (indexed 0-6, left to right)
//! - **Height**: 6 rows (indexed 0-5, top to bottom)
//!
//! Tiles are dropped into a column and come to rest in the lowest empty row.
//!
//! # Word Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WORD_LEN` | 3 | Shortest word that can be matched |
//! | `MAX_WORD_LEN` | 7 | Longest word that can be matched |
//!
//! # Tile Sequence Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SEQUENCE_LEN` | 100 | Letters generated per batch |
//! | `TRAILING_WINDOW` | 10 | Window the repetition rules look back over |
//! | `MAX_REPEATS_IN_WINDOW` | 3 | A letter may not reach this count in the window |
//! | `MAX_CLASS_STREAK` | 3 | Vowel/consonant runs may not reach this length |
//! | `MAX_PICK_RETRIES` | 100 | Rejected samples before the fallback pick |
//!
//! # Examples
//!
//! ```
//! use wordfall_types::{Coord, Direction, Letter, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let a = Letter::from_char('a').unwrap();
//! assert_eq!(a.as_char(), 'A');
//! assert!(a.is_vowel());
//!
//! let c = Coord::new(2, 3);
//! assert_eq!(c.step(Direction::MainDiagonal), Coord::new(3, 4));
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 6);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (6 rows)
pub const BOARD_HEIGHT: u8 = 6;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Longest line (row, column or diagonal) that fits on the board
pub const MAX_LINE_LEN: usize = if BOARD_WIDTH > BOARD_HEIGHT {
    BOARD_WIDTH as usize
} else {
    BOARD_HEIGHT as usize
};

/// Shortest dictionary word
pub const MIN_WORD_LEN: usize = 3;

/// Longest dictionary word
pub const MAX_WORD_LEN: usize = 7;

/// Number of letters generated per tile sequence batch
pub const SEQUENCE_LEN: usize = 100;

/// Number of trailing letters the sequence constraints look at
pub const TRAILING_WINDOW: usize = 10;

/// A letter must appear fewer than this many times in the trailing window
pub const MAX_REPEATS_IN_WINDOW: usize = 3;

/// Runs of vowels (or consonants) must be shorter than this
pub const MAX_CLASS_STREAK: usize = 3;

/// Rejected samples allowed before the sequencer takes its fallback pick
pub const MAX_PICK_RETRIES: usize = 100;

/// Separator byte standing in for an empty cell in scanned lines
pub const EMPTY_MARK: u8 = b'.';

/// English letter frequencies in tenths of a percent, A through Z.
///
/// The weights sum to roughly 1000 and are used directly as pool counts.
pub const LETTER_WEIGHTS: [u16; 26] = [
    82, 15, 28, 43, 127, 22, 20, 61, 70, 2, 8, 40, 24, // A-M
    67, 75, 19, 1, 60, 63, 91, 28, 10, 24, 2, 20, 1, // N-Z
];

/// Default points for a cleared word, indexed by length.
///
/// Boggle-style table: three and four letter words are worth the least,
/// seven letters jump sharply.
pub const WORD_SCORES: [u32; MAX_WORD_LEN + 1] = [0, 0, 0, 10, 10, 20, 30, 50];

/// A single uppercase ASCII letter tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from an ASCII byte (either case).
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfall_types::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'q').map(|l| l.as_byte()), Some(b'Q'));
    /// assert_eq!(Letter::from_byte(b'3'), None);
    /// ```
    pub fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_alphabetic() {
            Some(Self(b.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Build a letter from a char (either case)
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_byte(c as u8)
        } else {
            None
        }
    }

    /// Letter for alphabet index 0..26
    pub fn from_index(i: usize) -> Option<Self> {
        if i < 26 {
            Some(Self(b'A' + i as u8))
        } else {
            None
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Alphabet index 0..26
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// A, E, I, O and U count as vowels; Y is a consonant.
    pub fn is_vowel(self) -> bool {
        matches!(self.0, b'A' | b'E' | b'I' | b'O' | b'U')
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Letter)`: Cell holding a letter tile
pub type Cell = Option<Letter>;

/// Board coordinate. Row 0 is the top row, column 0 the leftmost column.
///
/// Signed so that line walks can step off the board and be bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The next cell along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The previous cell along `direction`
    pub fn step_back(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row - dr, self.col - dc)
    }

    pub fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < BOARD_HEIGHT as i8
            && self.col >= 0
            && self.col < BOARD_WIDTH as i8
    }
}

/// The four line directions words can be read in.
///
/// Every direction reads left to right except [`Direction::Column`], which
/// reads top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Constant row, left to right
    Row,
    /// Constant column, top to bottom
    Column,
    /// Constant row - col, top-left to bottom-right
    MainDiagonal,
    /// Constant row + col, bottom-left to top-right
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Row,
        Self::Column,
        Self::MainDiagonal,
        Self::AntiDiagonal,
    ];

    /// (row, col) step taken when reading forward
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    /// Convert to camelCase string for the wire protocol
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
            Direction::MainDiagonal => "mainDiagonal",
            Direction::AntiDiagonal => "antiDiagonal",
        }
    }
}

/// Cosmetic theme signalled when one of the trigger words is cleared.
///
/// Purely informational: the engine passes it through to the presentation
/// layer and never reacts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl ThemeColor {
    /// Look up the theme triggered by `word` (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfall_types::ThemeColor;
    ///
    /// assert_eq!(ThemeColor::from_word("RED"), Some(ThemeColor::Red));
    /// assert_eq!(ThemeColor::from_word("reds"), None);
    /// ```
    pub fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("red") {
            Some(ThemeColor::Red)
        } else if word.eq_ignore_ascii_case("green") {
            Some(ThemeColor::Green)
        } else if word.eq_ignore_ascii_case("blue") {
            Some(ThemeColor::Blue)
        } else if word.eq_ignore_ascii_case("yellow") {
            Some(ThemeColor::Yellow)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeColor::Red => "red",
            ThemeColor::Green => "green",
            ThemeColor::Blue => "blue",
            ThemeColor::Yellow => "yellow",
        }
    }
}

/// A tile moved by gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileMove {
    pub from: Coord,
    pub to: Coord,
    pub letter: Letter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_weights_cover_alphabet() {
        let total: u32 = LETTER_WEIGHTS.iter().map(|&w| w as u32).sum();
        assert!((990..=1010).contains(&total), "total weight {}", total);
        assert!(LETTER_WEIGHTS.iter().all(|&w| w > 0));
    }

    #[test]
    fn letter_parsing() {
        assert_eq!(Letter::from_char('z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::from_char(' '), None);
        assert_eq!(Letter::from_char('é'), None);
        assert_eq!(Letter::from_index(0).unwrap().as_char(), 'A');
        assert_eq!(Letter::from_index(26), None);
        assert_eq!(Letter::from_char('M').unwrap().index(), 12);
        assert!(!Letter::from_char('y').unwrap().is_vowel());
    }

    #[test]
    fn coord_steps_and_bounds() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Direction::AntiDiagonal), Coord::new(2, 4));
        assert_eq!(c.step_back(Direction::AntiDiagonal), Coord::new(4, 2));
        assert!(c.in_bounds());
        assert!(!Coord::new(-1, 0).in_bounds());
        assert!(!Coord::new(0, BOARD_WIDTH as i8).in_bounds());
        assert!(!Coord::new(BOARD_HEIGHT as i8, 0).in_bounds());
    }

    #[test]
    fn max_line_len_matches_board() {
        assert_eq!(MAX_LINE_LEN, 7);
        assert_eq!(BOARD_SIZE, 42);
    }
}
