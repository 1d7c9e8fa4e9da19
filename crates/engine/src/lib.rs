//! Resolution engine and game facade
//!
//! - [`resolution`]: the scan -> clear -> fall -> cascade state machine
//! - [`game`]: [`Game`], the placement interface presentation layers call
//! - [`place`]: placement validation and [`PlaceError`]
//!
//! # Example
//!
//! ```
//! use wordfall_core::Dictionary;
//! use wordfall_engine::Game;
//! use wordfall_engine::types::Letter;
//!
//! let mut game = Game::new(Dictionary::from_words(["cat"]), 1);
//! let l = |c| Letter::from_char(c).unwrap();
//!
//! game.place_tile(0, l('C')).unwrap();
//! game.place_tile(1, l('A')).unwrap();
//! let result = game.place_tile(2, l('T')).unwrap();
//!
//! assert_eq!(result.events.len(), 1);
//! assert_eq!(result.events[0].word, "CAT");
//! assert_eq!(result.board.occupied_count(), 0);
//! ```

pub mod game;
pub mod place;
pub mod resolution;

pub use wordfall_types as types;

pub use game::{Game, ResolutionResult};
pub use place::{resolve_drop, PlaceError};
pub use resolution::{collect_matches, Phase, ResolutionEngine, ResolutionEvent, ResolutionStep};
