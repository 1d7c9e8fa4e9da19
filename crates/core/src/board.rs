//! Board module - manages the game grid
//!
//! The board is a 7x6 grid where each cell can be empty or hold a letter tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..5 (top to bottom), col ranges 0..6
//! (left to right). Tiles enter a column from the top and rest on the lowest
//! empty row.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, Letter, TileMove, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

/// The game board - 7 columns x 6 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Letter at `coord`, or None when empty or out of bounds
    pub fn letter_at(&self, coord: Coord) -> Option<Letter> {
        self.get(coord.row, coord.col).flatten()
    }

    pub fn is_in_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Check if position is empty (within bounds and unoccupied)
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Put a letter into an empty cell.
    /// Returns false (and leaves the board untouched) if the cell is out of
    /// bounds or already occupied.
    pub fn place(&mut self, row: i8, col: i8, letter: Letter) -> bool {
        match Self::index(row, col) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(letter);
                true
            }
            _ => false,
        }
    }

    /// Empty a cell. No-op if already empty or out of bounds.
    pub fn clear(&mut self, row: i8, col: i8) {
        if let Some(idx) = Self::index(row, col) {
            self.cells[idx] = None;
        }
    }

    /// Lowest empty row in `col`, scanning up from the bottom.
    /// Returns None when the column is full or out of range.
    pub fn find_drop_row(&self, col: i8) -> Option<i8> {
        if col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        (0..BOARD_HEIGHT as i8)
            .rev()
            .find(|&row| self.is_empty(row, col))
    }

    /// Compact every column downward, keeping the relative order of its tiles.
    ///
    /// Returns the tiles that moved. Uses a two-pointer pass per column with
    /// zero allocation; an already compacted board yields no moves.
    pub fn apply_gravity(&mut self) -> ArrayVec<TileMove, BOARD_SIZE> {
        let mut moves = ArrayVec::new();

        for col in 0..BOARD_WIDTH as i8 {
            let mut write_row = BOARD_HEIGHT as i8 - 1;
            for read_row in (0..BOARD_HEIGHT as i8).rev() {
                let Some(letter) = self.get(read_row, col).flatten() else {
                    continue;
                };
                if write_row != read_row {
                    self.clear(read_row, col);
                    self.place(write_row, col, letter);
                    moves.push(TileMove {
                        from: Coord::new(read_row, col),
                        to: Coord::new(write_row, col),
                        letter,
                    });
                }
                write_row -= 1;
            }
        }

        moves
    }

    /// True if the top row holds any tile (game over condition)
    pub fn is_board_full(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Coordinates of every occupied cell, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|_| {
                Coord::new(
                    (i / BOARD_WIDTH as usize) as i8,
                    (i % BOARD_WIDTH as usize) as i8,
                )
            })
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Remove every tile
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// Letters become tiles; `.` and spaces are empty cells. Missing rows are
    /// padded at the top so the given rows sit on the bottom of the board.
    /// Characters beyond the board width are ignored. No gravity is applied.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let skip = rows.len().saturating_sub(BOARD_HEIGHT as usize);
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, text) in rows.iter().skip(skip).enumerate() {
            let row = (offset + i) as i8;
            for (col, c) in text.chars().take(BOARD_WIDTH as usize).enumerate() {
                if let Some(letter) = Letter::from_char(c) {
                    board.place(row, col as i8, letter);
                }
            }
        }
        board
    }

    /// Render each row as text, top row first, `.` for empty cells
    pub fn to_rows(&self) -> Vec<String> {
        let width = BOARD_WIDTH as usize;
        self.cells
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Letter::as_char))
                    .collect()
            })
            .collect()
    }

    /// Write the board into a fixed char grid (for snapshots)
    pub fn write_char_grid(
        &self,
        out: &mut [[char; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            out[i / width][i % width] = cell.map_or('.', Letter::as_char);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
