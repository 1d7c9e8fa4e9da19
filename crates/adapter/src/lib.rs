//! Adapter module - drive a game over a line-delimited JSON protocol
//!
//! Presentation layers (a browser front end, a bot, a test harness) talk to
//! the engine through this crate instead of linking it directly.
//!
//! # Protocol Overview
//!
//! 1. **Connection**: Client connects to the TCP socket (default: 127.0.0.1:7878)
//! 2. **Welcome**: Server greets with a `welcome` message
//! 3. **Requests**: Client sends one JSON object per line
//! 4. **Responses**: Server answers each line with exactly one JSON object
//!
//! Every connection plays its own game; there is no shared state between
//! clients.
//!
//! # Message Types
//!
//! ## Client → Server
//!
//! - **place**: Drop a tile into a column (explicit letter or next in sequence)
//! - **peek**: Preview upcoming letters
//! - **observe**: Full game snapshot
//! - **define**: Look up a word's definition
//! - **reset**: Clear the board, optionally reseeding the tile sequence
//!
//! ## Server → Client
//!
//! - **welcome**, **resolution**, **upcoming**, **observation**, **definition**, **error**
//!
//! # Environment Variables
//!
//! - `WORDFALL_HOST`: Bind address (default: "127.0.0.1")
//! - `WORDFALL_PORT`: Port number (default: 7878)
//! - `WORDFALL_SEED`: Tile sequence seed for the first connection (default: 1)
//!
//! # Example Protocol Flow
//!
//! ```text
//! Server -> Client: {"type":"welcome","seq":0,"ts":1700000000000,"protocol_version":"1.0.0","game_id":"wordfall"}
//! Client -> Server: {"type":"place","seq":1,"column":3,"letter":"T"}
//! Server -> Client: {"type":"resolution","seq":1,"ts":1700000000001,"placed":{"row":5,"col":3},"letter":"T","events":[],...}
//! ```
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"place","column":3}
//! ```

pub mod protocol;
pub mod server;
pub mod session;

pub use wordfall_core as core;
pub use wordfall_engine as engine;
pub use wordfall_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use server::{run_server, ServerConfig};
pub use session::Session;
