//! Resolution engine - scan, clear, fall, repeat
//!
//! One placement is resolved as a sequence of discrete steps so a
//! presentation layer can pace them (highlight, then clear, then fall) or
//! run them all at once:
//!
//! ```text
//! Idle -> Scanning -> Clearing -> Falling -> Scanning (cascade) ... -> Idle
//! ```
//!
//! Scanning looks at the four lines through every cell that changed (the
//! placed tile, then every tile gravity moved) and reports what it found as a
//! `Matched` step; the next step clears those words. Each line contributes
//! every word left after overlapping candidates lose to their precedence
//! winner. Lines in different directions are independent, so a row word and
//! a column word sharing the placed tile both clear.
//!
//! Every accepted word is scored exactly once. Cascades terminate because each
//! clearing pass removes at least `MIN_WORD_LEN` tiles and a pass that finds
//! nothing ends the cycle.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use wordfall_core::{match_line, scan_lines, Board, Dictionary, Match, Scorer};

use crate::place::PlaceError;
use crate::types::{Coord, Direction, ThemeColor, TileMove, BOARD_SIZE};

/// Engine state between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scanning,
    Clearing,
    Falling,
}

/// One cleared word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEvent {
    pub word: String,
    pub coords: Vec<Coord>,
    pub direction: Direction,
    /// Points returned by the scoring collaborator
    pub score: u32,
    /// 0 for words formed by the drop itself, n for the n-th cascade
    pub cascade: u32,
    pub theme: Option<ThemeColor>,
}

/// A discrete step of a resolution cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStep {
    /// Words found on the board, about to be cleared
    Matched { cascade: u32, matches: Vec<Match> },
    /// Words scored and removed from the board
    Cleared {
        cascade: u32,
        events: Vec<ResolutionEvent>,
    },
    /// Tiles moved by gravity after a clear
    Fell { moves: Vec<TileMove> },
    /// The board is stable; the cycle is over
    Settled { game_over: bool },
}

/// All matches formed through `cells`, deduplicated and in precedence order.
///
/// Each distinct line is scanned once, however many changed cells it passes
/// through. Matches are ordered longest first, then by offset within their
/// line, then by direction and line position so the order is deterministic.
pub fn collect_matches(board: &Board, dict: &Dictionary, cells: &[Coord]) -> Vec<Match> {
    let mut seen_lines: HashSet<(Direction, Coord)> = HashSet::new();
    let mut seen_coords: HashSet<Vec<Coord>> = HashSet::new();
    let mut matches = Vec::new();

    for &cell in cells {
        if board.letter_at(cell).is_none() {
            continue;
        }
        for line in scan_lines(board, cell) {
            let Some(origin) = line.origin() else {
                continue;
            };
            if !seen_lines.insert((line.direction(), origin)) {
                continue;
            }
            for m in match_line(&line, dict) {
                let mut key = m.coords.clone();
                key.sort_unstable();
                if seen_coords.insert(key) {
                    matches.push(m);
                }
            }
        }
    }

    matches.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.start.cmp(&b.start))
            .then(a.direction.cmp(&b.direction))
            .then(a.coords.cmp(&b.coords))
    });
    matches
}

/// Resolution state machine for one placement at a time
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    phase: Phase,
    /// Cells to scan on the next Scanning step
    changed: Vec<Coord>,
    /// Matches waiting for the Clearing step
    found: Vec<Match>,
    cascade: u32,
}

impl ResolutionEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            changed: Vec::new(),
            found: Vec::new(),
            cascade: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Current cascade depth (0 until the first gravity pass moves a tile)
    pub fn cascade(&self) -> u32 {
        self.cascade
    }

    /// Start a cycle for a tile just placed at `placed`.
    /// Re-entrant calls are rejected without touching the running cycle.
    pub fn begin(&mut self, placed: Coord) -> Result<(), PlaceError> {
        if self.is_active() {
            return Err(PlaceError::ResolutionInProgress);
        }
        self.changed.clear();
        self.changed.push(placed);
        self.found.clear();
        self.cascade = 0;
        self.phase = Phase::Scanning;
        Ok(())
    }

    /// Abandon any running cycle
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one step. Returns None when idle.
    pub fn step(
        &mut self,
        board: &mut Board,
        dict: &Dictionary,
        scorer: &mut dyn Scorer,
    ) -> Option<ResolutionStep> {
        match self.phase {
            Phase::Idle => None,
            Phase::Scanning => {
                self.found = collect_matches(board, dict, &self.changed);
                self.changed.clear();
                if self.found.is_empty() {
                    self.phase = Phase::Idle;
                    let game_over = board.is_board_full();
                    if game_over {
                        log::info!("board full after resolution; game over");
                    }
                    return Some(ResolutionStep::Settled { game_over });
                }
                self.phase = Phase::Clearing;
                Some(ResolutionStep::Matched {
                    cascade: self.cascade,
                    matches: self.found.clone(),
                })
            }
            Phase::Clearing => Some(self.clear(board, scorer)),
            Phase::Falling => {
                let moves: ArrayVec<TileMove, BOARD_SIZE> = board.apply_gravity();
                self.changed.extend(moves.iter().map(|m| m.to));
                if !moves.is_empty() {
                    self.cascade += 1;
                    log::debug!("cascade {}: {} tiles fell", self.cascade, moves.len());
                }
                self.phase = Phase::Scanning;
                Some(ResolutionStep::Fell {
                    moves: moves.into_iter().collect(),
                })
            }
        }
    }

    fn clear(&mut self, board: &mut Board, scorer: &mut dyn Scorer) -> ResolutionStep {
        let mut cleared: HashSet<Coord> = HashSet::new();
        let mut events = Vec::with_capacity(self.found.len());

        for m in self.found.drain(..) {
            // Every tile already gone with an earlier word: nothing left to score.
            if m.coords.iter().all(|c| cleared.contains(c)) {
                log::debug!("skipping {:?}: tiles already cleared", m.word);
                continue;
            }
            let score = scorer.score(&m.word);
            log::debug!(
                "clearing {:?} ({}) for {} points",
                m.word,
                m.direction.as_str(),
                score
            );
            cleared.extend(m.coords.iter().copied());
            events.push(ResolutionEvent {
                word: m.word,
                coords: m.coords,
                direction: m.direction,
                score,
                cascade: self.cascade,
                theme: m.theme,
            });
        }

        for c in &cleared {
            board.clear(c.row, c.col);
        }

        self.phase = Phase::Falling;
        ResolutionStep::Cleared {
            cascade: self.cascade,
            events,
        }
    }

    /// Run the cycle to completion, returning every event in order and
    /// whether the settled board ends the game.
    pub fn run(
        &mut self,
        board: &mut Board,
        dict: &Dictionary,
        scorer: &mut dyn Scorer,
    ) -> (Vec<ResolutionEvent>, bool) {
        let mut all = Vec::new();
        let mut game_over = false;
        while let Some(step) = self.step(board, dict, scorer) {
            match step {
                ResolutionStep::Cleared { events, .. } => all.extend(events),
                ResolutionStep::Matched { .. } | ResolutionStep::Fell { .. } => {}
                ResolutionStep::Settled { game_over: over } => game_over = over,
            }
        }
        (all, game_over)
    }
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}
