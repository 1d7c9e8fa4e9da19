//! TCP server for the adapter
//!
//! Accepts connections and gives each one its own [`Session`]. Uses tokio for
//! async networking; the game itself stays synchronous and is only touched by
//! the connection task that owns it.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use wordfall_core::Dictionary;

use crate::protocol::{create_welcome, Response};
use crate::session::Session;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for the first connection; later connections add their index
    pub seed: u32,
    /// Longest request line accepted, in bytes. Longer lines are answered
    /// with an error and discarded without being buffered whole.
    pub max_line_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            seed: 1,
            max_line_len: 4096,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let host = env::var("WORDFALL_HOST").unwrap_or(defaults.host);
        let port = env::var("WORDFALL_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let seed = env::var("WORDFALL_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        Self {
            host,
            port,
            seed,
            max_line_len: defaults.max_line_len,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn encode(resp: &Response) -> anyhow::Result<Vec<u8>> {
    let mut buf = serde_json::to_vec(resp)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Run the server until the listener fails.
///
/// `ready` receives the bound address once listening (port 0 picks a free port).
pub async fn run_server(
    config: ServerConfig,
    dictionary: Arc<Dictionary>,
    ready: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("bind {}", config.bind_addr()))?;
    let addr = listener.local_addr()?;
    log::info!("adapter listening on {}", addr);
    if let Some(tx) = ready {
        let _ = tx.send(addr);
    }

    let mut next_id: u32 = 0;
    loop {
        let (socket, peer) = listener.accept().await?;
        let seed = config.seed.wrapping_add(next_id);
        next_id = next_id.wrapping_add(1);
        let dictionary = Arc::clone(&dictionary);
        let max_line_len = config.max_line_len;
        tokio::spawn(async move {
            log::info!("client {} connected", peer);
            if let Err(e) = handle_client(socket, dictionary, seed, max_line_len).await {
                log::warn!("client {} error: {:#}", peer, e);
            }
            log::info!("client {} disconnected", peer);
        });
    }
}

/// One request line read from a client
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineRead {
    Line(String),
    /// The line exceeded the limit; its bytes were skipped up to the newline
    TooLong,
    Eof,
}

/// Read one `\n`-terminated line, holding at most `max_len + 1` bytes of it.
async fn read_bounded_line<R>(reader: &mut R, max_len: usize) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let limit = max_len as u64 + 1;
    let mut buf = Vec::new();
    let n = (&mut *reader).take(limit).read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(LineRead::Eof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() > max_len {
        // Drain the rest of the oversized line in bounded chunks.
        loop {
            buf.clear();
            let n = (&mut *reader).take(limit).read_until(b'\n', &mut buf).await?;
            if n == 0 || buf.last() == Some(&b'\n') {
                break;
            }
        }
        return Ok(LineRead::TooLong);
    }

    if buf.len() > max_len {
        return Ok(LineRead::TooLong);
    }
    Ok(LineRead::Line(String::from_utf8_lossy(&buf).into_owned()))
}

async fn handle_client(
    socket: TcpStream,
    dictionary: Arc<Dictionary>,
    seed: u32,
    max_line_len: usize,
) -> anyhow::Result<()> {
    socket.set_nodelay(true)?;
    let (reader, mut writer) = socket.into_split();
    let mut reader = BufReader::new(reader);

    let mut session = Session::new((*dictionary).clone(), seed);
    writer.write_all(&encode(&create_welcome(0))?).await?;

    loop {
        let resp = match read_bounded_line(&mut reader, max_line_len).await? {
            LineRead::Eof => break,
            LineRead::TooLong => {
                crate::protocol::create_error(0, "invalid_request", "request line too long")
            }
            LineRead::Line(line) if line.trim().is_empty() => continue,
            LineRead::Line(line) => session.handle_line(&line),
        };
        writer.write_all(&encode(&resp)?).await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_read_skips_long_lines() {
        let input = format!("{{\"a\":1}}\r\n{}\n{{\"b\":2}}\nshort", "x".repeat(50));
        let mut reader = input.as_bytes();

        assert_eq!(
            read_bounded_line(&mut reader, 16).await.unwrap(),
            LineRead::Line("{\"a\":1}".to_string())
        );
        assert_eq!(read_bounded_line(&mut reader, 16).await.unwrap(), LineRead::TooLong);
        assert_eq!(
            read_bounded_line(&mut reader, 16).await.unwrap(),
            LineRead::Line("{\"b\":2}".to_string())
        );
        assert_eq!(
            read_bounded_line(&mut reader, 16).await.unwrap(),
            LineRead::Line("short".to_string())
        );
        assert_eq!(read_bounded_line(&mut reader, 16).await.unwrap(), LineRead::Eof);
    }

    #[tokio::test]
    async fn test_line_at_limit_is_accepted() {
        let mut reader: &[u8] = b"abcd\nabcde\n";
        assert_eq!(
            read_bounded_line(&mut reader, 4).await.unwrap(),
            LineRead::Line("abcd".to_string())
        );
        assert_eq!(read_bounded_line(&mut reader, 4).await.unwrap(), LineRead::TooLong);
        assert_eq!(read_bounded_line(&mut reader, 4).await.unwrap(), LineRead::Eof);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig {
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
