//! Wordfall (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `wordfall::{core,engine,adapter,types}`, plus the command-line
//! configuration used by the `wordfall` binary.

pub mod config;
pub mod logging;
pub mod play;

pub use wordfall_adapter as adapter;
pub use wordfall_core as core;
pub use wordfall_engine as engine;
pub use wordfall_types as types;
