//! Game module - the interface presentation layers drive
//!
//! Ties together the board, dictionary, tile sequence, scoring collaborator
//! and resolution engine. A placement either runs to completion in one call
//! ([`Game::place_tile`]) or is started with [`Game::drop_tile`] and advanced
//! with [`Game::step`] at the caller's pace. While a cycle is active further
//! placements are rejected.

use wordfall_core::{
    Board, Dictionary, GameSnapshot, Scorer, TileSequencer, WordLengthScorer, PREVIEW_LEN,
};

use crate::place::{resolve_drop, PlaceError};
use crate::resolution::{ResolutionEngine, ResolutionEvent, ResolutionStep};
use crate::types::{Coord, Letter};

/// Outcome of one fully resolved placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Where the tile landed
    pub placed: Coord,
    /// Every cleared word, in clearing order
    pub events: Vec<ResolutionEvent>,
    /// Board once stable
    pub board: Board,
    pub game_over: bool,
}

impl ResolutionResult {
    /// Sum of the score deltas of all events
    pub fn score(&self) -> u32 {
        self.events.iter().map(|e| e.score).sum()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S: Scorer = WordLengthScorer> {
    board: Board,
    dictionary: Dictionary,
    sequencer: TileSequencer,
    engine: ResolutionEngine,
    scorer: S,
    seed: u32,
    score: u32,
    words_cleared: u32,
    placements: u32,
    game_over: bool,
    /// Events of the running cycle
    cycle_events: Vec<ResolutionEvent>,
}

impl Game<WordLengthScorer> {
    /// Create a new game with the default scorer
    pub fn new(dictionary: Dictionary, seed: u32) -> Self {
        Self::with_scorer(dictionary, seed, WordLengthScorer)
    }
}

impl<S: Scorer> Game<S> {
    pub fn with_scorer(dictionary: Dictionary, seed: u32, scorer: S) -> Self {
        Self {
            board: Board::new(),
            dictionary,
            sequencer: TileSequencer::new(seed),
            engine: ResolutionEngine::new(),
            scorer,
            seed,
            score: 0,
            words_cleared: 0,
            placements: 0,
            game_over: false,
            cycle_events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words_cleared(&self) -> u32 {
        self.words_cleared
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// True while a resolution cycle is in progress
    pub fn resolving(&self) -> bool {
        self.engine.is_active()
    }

    /// Row a tile dropped into `column` would land on; None if the column is
    /// full or out of range
    pub fn drop_row(&self, column: i8) -> Option<i8> {
        self.board.find_drop_row(column)
    }

    /// Next `n` letters of the tile sequence, without consuming them
    pub fn peek_upcoming(&self, n: usize) -> Vec<Letter> {
        self.sequencer.peek(n)
    }

    /// Replace the board, e.g. to restore a saved position.
    /// Rejected while a cycle is running.
    pub fn set_board(&mut self, board: Board) -> Result<(), PlaceError> {
        if self.engine.is_active() {
            return Err(PlaceError::ResolutionInProgress);
        }
        self.game_over = board.is_board_full();
        self.board = board;
        Ok(())
    }

    fn check_playable(&self) -> Result<(), PlaceError> {
        if self.engine.is_active() {
            return Err(PlaceError::ResolutionInProgress);
        }
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        Ok(())
    }

    /// Place `letter` in `column` and start a resolution cycle.
    ///
    /// Returns the cell the tile landed on. Advance the cycle with
    /// [`Game::step`].
    pub fn drop_tile(&mut self, column: i8, letter: Letter) -> Result<Coord, PlaceError> {
        self.check_playable()?;
        let at = resolve_drop(&self.board, column)?;
        self.engine.begin(at)?;
        self.board.place(at.row, at.col, letter);
        self.placements += 1;
        self.cycle_events.clear();
        log::debug!("placed {} at {:?}", letter, at);
        Ok(at)
    }

    /// Advance the running cycle by one step. Returns None when idle.
    pub fn step(&mut self) -> Option<ResolutionStep> {
        let step = self
            .engine
            .step(&mut self.board, &self.dictionary, &mut self.scorer)?;
        match &step {
            ResolutionStep::Cleared { events, .. } => {
                for event in events {
                    self.score = self.score.saturating_add(event.score);
                    self.words_cleared += 1;
                }
                self.cycle_events.extend(events.iter().cloned());
            }
            ResolutionStep::Matched { .. } | ResolutionStep::Fell { .. } => {}
            ResolutionStep::Settled { game_over } => {
                self.game_over = *game_over;
            }
        }
        Some(step)
    }

    /// Drop the next sequenced letter into `column` and start a cycle.
    ///
    /// The letter is only consumed when the placement is accepted.
    pub fn drop_next(&mut self, column: i8) -> Result<(Coord, Letter), PlaceError> {
        let letter = self.sequencer.peek(1)[0];
        let at = self.drop_tile(column, letter)?;
        self.sequencer.next();
        Ok((at, letter))
    }

    /// Run the remaining steps of the cycle started at `placed` and collect
    /// its result. The engine holds no reference to the events afterwards.
    pub fn finish(&mut self, placed: Coord) -> ResolutionResult {
        while self.step().is_some() {}
        ResolutionResult {
            placed,
            events: std::mem::take(&mut self.cycle_events),
            board: self.board.clone(),
            game_over: self.game_over,
        }
    }

    /// Place `letter` in `column` and resolve the whole cascade
    pub fn place_tile(&mut self, column: i8, letter: Letter) -> Result<ResolutionResult, PlaceError> {
        let placed = self.drop_tile(column, letter)?;
        Ok(self.finish(placed))
    }

    /// Place the next sequenced letter in `column` and resolve the whole cascade
    pub fn place_next(&mut self, column: i8) -> Result<ResolutionResult, PlaceError> {
        let (placed, _) = self.drop_next(column)?;
        Ok(self.finish(placed))
    }

    /// Events produced so far by the running cycle
    pub fn cycle_events(&self) -> &[ResolutionEvent] {
        &self.cycle_events
    }

    /// Empty the board and clear score and game-over state
    pub fn reset_board(&mut self) {
        self.engine.reset();
        self.board.clear_all();
        self.score = 0;
        self.words_cleared = 0;
        self.placements = 0;
        self.game_over = false;
        self.cycle_events.clear();
    }

    /// Start a fresh tile sequence
    pub fn reset_sequence(&mut self) {
        self.sequencer.reset();
    }

    /// Reset board and sequence, reseeding the sequence
    pub fn restart(&mut self, seed: u32) {
        self.reset_board();
        self.seed = seed;
        self.sequencer.reseed(seed);
        log::info!("game restarted with seed {}", seed);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_char_grid(&mut out.board);
        out.upcoming = [None; PREVIEW_LEN];
        for (slot, letter) in out.upcoming.iter_mut().zip(self.peek_upcoming(PREVIEW_LEN)) {
            *slot = Some(letter);
        }
        out.score = self.score;
        out.words_cleared = self.words_cleared;
        out.placements = self.placements;
        out.game_over = self.game_over;
        out.resolving = self.engine.is_active();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
