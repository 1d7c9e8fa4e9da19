//! Line scanner - extracts the four lines through a cell
//!
//! Each [`Line`] holds the letters and the coordinates of one full row,
//! column or diagonal, in reading order. Both arrays come out of the same
//! walk, so `letters[i]` is always the content of `coords[i]`; matched words
//! are mapped back to the board by slicing `coords`, never by walking again.
//! Empty cells contribute [`EMPTY_MARK`], which no dictionary word contains.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, Direction, EMPTY_MARK, MAX_LINE_LEN};

/// One scanned line: paired letters and board coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    direction: Direction,
    letters: ArrayVec<u8, MAX_LINE_LEN>,
    coords: ArrayVec<Coord, MAX_LINE_LEN>,
}

impl Line {
    /// Read the full line along `direction` passing through `through`.
    ///
    /// Walks back to the first in-bounds cell of the line, then forward to
    /// the board edge. For [`Direction::MainDiagonal`] the start is the
    /// top-left end; for [`Direction::AntiDiagonal`] the bottom-left end.
    /// A `through` cell off the board yields an empty line.
    pub fn extract(board: &Board, through: Coord, direction: Direction) -> Self {
        let mut letters = ArrayVec::new();
        let mut coords = ArrayVec::new();
        if !through.in_bounds() {
            return Self {
                direction,
                letters,
                coords,
            };
        }

        let mut start = through;
        while start.step_back(direction).in_bounds() {
            start = start.step_back(direction);
        }

        let mut cur = start;
        while cur.in_bounds() {
            letters.push(board.letter_at(cur).map_or(EMPTY_MARK, |l| l.as_byte()));
            coords.push(cur);
            cur = cur.step(direction);
        }

        Self {
            direction,
            letters,
            coords,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Line contents as text (letters and `EMPTY_MARK` separators)
    pub fn text(&self) -> &str {
        // Only ASCII letters and EMPTY_MARK are ever pushed.
        std::str::from_utf8(&self.letters).unwrap_or("")
    }

    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of `letters[start..end]`
    pub fn span(&self, start: usize, end: usize) -> &[Coord] {
        &self.coords[start..end]
    }

    /// First cell of the line; identifies the line within its direction
    pub fn origin(&self) -> Option<Coord> {
        self.coords.first().copied()
    }
}

/// The row, column, main diagonal and anti-diagonal through `cell`, in that order
pub fn scan_lines(board: &Board, cell: Coord) -> [Line; 4] {
    Direction::ALL.map(|direction| Line::extract(board, cell, direction))
}
