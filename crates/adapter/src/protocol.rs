//! Protocol module - JSON message types for the adapter
//!
//! Line-delimited JSON. Every message has `type` and `seq`; server messages
//! also carry `ts` (timestamp in ms). Responses echo the request's `seq`.

use serde::{Deserialize, Serialize};

use wordfall_core::{GameSnapshot, Match};
use wordfall_engine::{PlaceError, ResolutionEvent, ResolutionResult, ResolutionStep};

use crate::types::{Coord, Letter, TileMove};

pub const PROTOCOL_VERSION: &str = "1.0.0";

// ============== Client -> Game Messages ==============

/// Requests a client may send
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Drop a tile. Without `letter` the next sequenced letter is used.
    Place {
        #[serde(default)]
        seq: u64,
        column: i8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        letter: Option<char>,
        /// Return every resolution step instead of only the final events
        #[serde(default)]
        steps: bool,
    },
    Peek {
        #[serde(default)]
        seq: u64,
        #[serde(default = "default_peek_count")]
        count: usize,
    },
    Observe {
        #[serde(default)]
        seq: u64,
    },
    Define {
        #[serde(default)]
        seq: u64,
        word: String,
    },
    Reset {
        #[serde(default)]
        seq: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
    },
}

fn default_peek_count() -> usize {
    wordfall_core::PREVIEW_LEN
}

impl Request {
    pub fn seq(&self) -> u64 {
        match self {
            Request::Place { seq, .. }
            | Request::Peek { seq, .. }
            | Request::Observe { seq }
            | Request::Define { seq, .. }
            | Request::Reset { seq, .. } => *seq,
        }
    }
}

/// Parse one request line
pub fn parse_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line.trim())
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordMsg {
    pub row: i8,
    pub col: i8,
}

impl From<Coord> for CoordMsg {
    fn from(c: Coord) -> Self {
        Self {
            row: c.row,
            col: c.col,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMsg {
    pub word: String,
    pub coords: Vec<CoordMsg>,
    pub direction: String,
    pub score: u32,
    pub cascade: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl From<&ResolutionEvent> for EventMsg {
    fn from(e: &ResolutionEvent) -> Self {
        Self {
            word: e.word.clone(),
            coords: e.coords.iter().copied().map(CoordMsg::from).collect(),
            direction: e.direction.as_str().to_string(),
            score: e.score,
            cascade: e.cascade,
            theme: e.theme.map(|t| t.as_str().to_string()),
        }
    }
}

/// A word found but not yet cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMsg {
    pub word: String,
    pub coords: Vec<CoordMsg>,
    pub direction: String,
}

impl From<&Match> for MatchMsg {
    fn from(m: &Match) -> Self {
        Self {
            word: m.word.clone(),
            coords: m.coords.iter().copied().map(CoordMsg::from).collect(),
            direction: m.direction.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMsg {
    pub from: CoordMsg,
    pub to: CoordMsg,
    pub letter: char,
}

impl From<&TileMove> for MoveMsg {
    fn from(m: &TileMove) -> Self {
        Self {
            from: m.from.into(),
            to: m.to.into(),
            letter: m.letter.as_char(),
        }
    }
}

/// One resolution step on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepMsg {
    Matched { cascade: u32, words: Vec<MatchMsg> },
    Cleared { cascade: u32, events: Vec<EventMsg> },
    Fell { moves: Vec<MoveMsg> },
    Settled { game_over: bool },
}

impl From<&ResolutionStep> for StepMsg {
    fn from(step: &ResolutionStep) -> Self {
        match step {
            ResolutionStep::Matched { cascade, matches } => StepMsg::Matched {
                cascade: *cascade,
                words: matches.iter().map(MatchMsg::from).collect(),
            },
            ResolutionStep::Cleared { cascade, events } => StepMsg::Cleared {
                cascade: *cascade,
                events: events.iter().map(EventMsg::from).collect(),
            },
            ResolutionStep::Fell { moves } => StepMsg::Fell {
                moves: moves.iter().map(MoveMsg::from).collect(),
            },
            ResolutionStep::Settled { game_over } => StepMsg::Settled {
                game_over: *game_over,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationBody {
    /// Board rows, top row first, `.` for empty
    pub board: Vec<String>,
    pub upcoming: Vec<char>,
    pub score: u32,
    pub words_cleared: u32,
    pub placements: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl From<&GameSnapshot> for ObservationBody {
    fn from(s: &GameSnapshot) -> Self {
        Self {
            board: s.rows(),
            upcoming: s.upcoming.iter().flatten().map(|l| l.as_char()).collect(),
            score: s.score,
            words_cleared: s.words_cleared,
            placements: s.placements,
            game_over: s.game_over,
            seed: s.seed,
        }
    }
}

/// Responses sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Welcome {
        seq: u64,
        ts: u64,
        protocol_version: String,
        game_id: String,
    },
    Resolution {
        seq: u64,
        ts: u64,
        placed: CoordMsg,
        letter: char,
        events: Vec<EventMsg>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        steps: Vec<StepMsg>,
        board: Vec<String>,
        score: u32,
        game_over: bool,
    },
    Upcoming {
        seq: u64,
        ts: u64,
        letters: Vec<char>,
    },
    Observation {
        seq: u64,
        ts: u64,
        #[serde(flatten)]
        body: ObservationBody,
    },
    Definition {
        seq: u64,
        ts: u64,
        word: String,
        known: bool,
        definition: Option<String>,
    },
    Error {
        seq: u64,
        ts: u64,
        code: String,
        message: String,
    },
}

pub fn create_welcome(seq: u64) -> Response {
    Response::Welcome {
        seq,
        ts: current_timestamp_ms(),
        protocol_version: PROTOCOL_VERSION.to_string(),
        game_id: "wordfall".to_string(),
    }
}

pub fn create_resolution(
    seq: u64,
    letter: Letter,
    result: &ResolutionResult,
    steps: &[ResolutionStep],
    score: u32,
) -> Response {
    Response::Resolution {
        seq,
        ts: current_timestamp_ms(),
        placed: result.placed.into(),
        letter: letter.as_char(),
        events: result.events.iter().map(EventMsg::from).collect(),
        steps: steps.iter().map(StepMsg::from).collect(),
        board: result.board.to_rows(),
        score,
        game_over: result.game_over,
    }
}

pub fn create_upcoming(seq: u64, letters: &[Letter]) -> Response {
    Response::Upcoming {
        seq,
        ts: current_timestamp_ms(),
        letters: letters.iter().map(|l| l.as_char()).collect(),
    }
}

pub fn create_observation(seq: u64, snapshot: &GameSnapshot) -> Response {
    Response::Observation {
        seq,
        ts: current_timestamp_ms(),
        body: snapshot.into(),
    }
}

pub fn create_definition(seq: u64, word: &str, definition: Option<&str>) -> Response {
    Response::Definition {
        seq,
        ts: current_timestamp_ms(),
        word: word.to_ascii_lowercase(),
        known: definition.is_some(),
        definition: definition.map(str::to_string),
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: &str, message: &str) -> Response {
    Response::Error {
        seq,
        ts: current_timestamp_ms(),
        code: code.to_string(),
        message: message.to_string(),
    }
}

pub fn create_place_error(seq: u64, err: PlaceError) -> Response {
    create_error(seq, err.code(), &err.to_string())
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
