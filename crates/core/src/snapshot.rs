use crate::types::{Letter, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of upcoming letters carried in a snapshot
pub const PREVIEW_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Board contents, top row first, `.` for empty
    pub board: [[char; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub upcoming: [Option<Letter>; PREVIEW_LEN],
    pub score: u32,
    pub words_cleared: u32,
    pub placements: u32,
    pub game_over: bool,
    pub resolving: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [['.'; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.upcoming = [None; PREVIEW_LEN];
        self.score = 0;
        self.words_cleared = 0;
        self.placements = 0;
        self.game_over = false;
        self.resolving = false;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.resolving
    }

    /// Board rows as strings, top row first
    pub fn rows(&self) -> Vec<String> {
        self.board.iter().map(|row| row.iter().collect()).collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [['.'; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            upcoming: [None; PREVIEW_LEN],
            score: 0,
            words_cleared: 0,
            placements: 0,
            game_over: false,
            resolving: false,
            seed: 0,
        }
    }
}
