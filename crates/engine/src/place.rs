use thiserror::Error;

use wordfall_core::Board;

use crate::types::{Coord, BOARD_WIDTH};

/// Why a placement was refused. The board is never touched when one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("column {0} is out of range")]
    ColumnOutOfRange(i8),
    #[error("column {0} is full")]
    ColumnFull(i8),
    #[error("game is over")]
    GameOver,
    #[error("a resolution cycle is already in progress")]
    ResolutionInProgress,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::ColumnOutOfRange(_) | PlaceError::ColumnFull(_) => "invalid_placement",
            PlaceError::GameOver => "game_over",
            PlaceError::ResolutionInProgress => "resolution_in_progress",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::ColumnOutOfRange(_) => "target column is outside the board",
            PlaceError::ColumnFull(_) => "target column has no empty cell",
            PlaceError::GameOver => "game is over; reset to play again",
            PlaceError::ResolutionInProgress => "placement rejected while a cycle is active",
        }
    }
}

/// Cell a tile dropped into `column` would land on
pub fn resolve_drop(board: &Board, column: i8) -> Result<Coord, PlaceError> {
    if column < 0 || column >= BOARD_WIDTH as i8 {
        return Err(PlaceError::ColumnOutOfRange(column));
    }
    board
        .find_drop_row(column)
        .map(|row| Coord::new(row, column))
        .ok_or(PlaceError::ColumnFull(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_lands_on_lowest_empty_row() {
        let board = Board::from_rows(&["A......", "B......"]);
        assert_eq!(resolve_drop(&board, 0), Ok(Coord::new(3, 0)));
        assert_eq!(resolve_drop(&board, 1), Ok(Coord::new(5, 1)));
    }

    #[test]
    fn drop_rejects_bad_columns() {
        let board = Board::from_rows(&["A", "A", "A", "A", "A", "A"]);
        assert_eq!(resolve_drop(&board, 0), Err(PlaceError::ColumnFull(0)));
        assert_eq!(resolve_drop(&board, -1), Err(PlaceError::ColumnOutOfRange(-1)));
        assert_eq!(resolve_drop(&board, 7), Err(PlaceError::ColumnOutOfRange(7)));
        assert_eq!(PlaceError::ColumnFull(0).code(), "invalid_placement");
    }
}
