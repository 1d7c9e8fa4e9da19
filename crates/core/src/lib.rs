//! Core word-board logic - pure, deterministic, and testable
//!
//! This crate contains the board, the dictionary, tile generation, and the
//! scan/match primitives the resolution engine is built from. It has **no
//! dependencies** on rendering, input, or networking, making it:
//!
//! - **Deterministic**: Same seed produces the same tile sequence
//! - **Testable**: Every rule is a plain function over a [`Board`]
//! - **Portable**: Can run behind a terminal, a socket, or a test harness
//!
//! # Module Structure
//!
//! - [`board`]: 7x6 grid with placement, drop-row lookup and gravity
//! - [`dictionary`]: Valid words with definitions, loaded from CSV word lists
//! - [`rng`]: Weighted, constraint-respecting letter sequence
//! - [`scanner`]: Row/column/diagonal extraction with paired coordinates
//! - [`matcher`]: Dictionary search within a line and per-line precedence
//! - [`scoring`]: Scoring collaborator trait and the default length table
//! - [`snapshot`]: Plain-data view of a game for observers
//!
//! # Example
//!
//! ```
//! use wordfall_core::{match_line, scan_lines, Board, Dictionary};
//! use wordfall_core::types::Coord;
//!
//! let dict = Dictionary::from_words(["cat", "boy"]);
//! let board = Board::from_rows(&["CAT.BOY"]);
//!
//! let [row, ..] = scan_lines(&board, Coord::new(5, 5));
//! let matches = match_line(&row, &dict);
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[1].word, "BOY");
//! assert_eq!(matches[1].coords[0], Coord::new(5, 4));
//! ```

pub mod board;
pub mod dictionary;
pub mod matcher;
pub mod rng;
pub mod scanner;
pub mod scoring;
pub mod snapshot;

pub use wordfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use dictionary::{Dictionary, DictionaryError, LoadReport};
pub use matcher::{find_words, match_line, select_disjoint, select_winner, Match, WordSpan};
pub use rng::{SimpleRng, TileSequencer};
pub use scanner::{scan_lines, Line};
pub use scoring::{calculate_word_score, Scorer, WordLengthScorer};
pub use snapshot::{GameSnapshot, PREVIEW_LEN};
