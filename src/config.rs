//! Command-line and environment configuration for the `wordfall` binary
//!
//! Environment variables supply defaults; explicit flags win.
//!
//! ```text
//! wordfall [play|serve] [--dict DIR] [--seed N] [--host H] [--port P] [--debug]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::adapter::ServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Play,
    Serve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Directory holding `{n}_letter_words.csv`; None uses the built-in list
    pub dict_dir: Option<PathBuf>,
    pub seed: u32,
    pub server: ServerConfig,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            mode: Mode::Play,
            dict_dir: None,
            seed: server.seed,
            server,
            debug: false,
        }
    }
}

impl Config {
    /// Defaults overridden by `WORDFALL_*` environment variables
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        Self {
            mode: Mode::Play,
            dict_dir: env::var_os("WORDFALL_DICT_DIR").map(PathBuf::from),
            seed: server.seed,
            server,
            debug: false,
        }
    }

    /// Apply command-line arguments (program name excluded) on top of `self`
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        if let Some(first) = args.first() {
            match first.as_str() {
                "play" => {
                    self.mode = Mode::Play;
                    i = 1;
                }
                "serve" => {
                    self.mode = Mode::Serve;
                    i = 1;
                }
                _ => {}
            }
        }

        while i < args.len() {
            match args[i].as_str() {
                "--dict" => {
                    i += 1;
                    let v = value(args, i, "--dict")?;
                    self.dict_dir = Some(PathBuf::from(v));
                }
                "--seed" => {
                    i += 1;
                    let v = value(args, i, "--seed")?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.server.seed = self.seed;
                }
                "--host" => {
                    i += 1;
                    self.server.host = value(args, i, "--host")?.to_string();
                }
                "--port" => {
                    i += 1;
                    let v = value(args, i, "--port")?;
                    self.server.port = v
                        .parse::<u16>()
                        .map_err(|_| anyhow!("invalid --port value: {}", v))?;
                }
                "--debug" => self.debug = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(self)
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn defaults_to_play() {
        let cfg = Config::default().with_args(&[]).unwrap();
        assert_eq!(cfg.mode, Mode::Play);
        assert_eq!(cfg.server.port, 7878);
        assert!(cfg.dict_dir.is_none());
    }

    #[test]
    fn parses_serve_flags() {
        let cfg = Config::default()
            .with_args(&args("serve --host 0.0.0.0 --port 9000 --seed 42 --dict words --debug"))
            .unwrap();
        assert_eq!(cfg.mode, Mode::Serve);
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.server.seed, 42);
        assert_eq!(cfg.dict_dir, Some(PathBuf::from("words")));
        assert!(cfg.debug);
    }

    #[test]
    fn flags_without_mode() {
        let cfg = Config::default().with_args(&args("--seed 7")).unwrap();
        assert_eq!(cfg.mode, Mode::Play);
        assert_eq!(cfg.seed, 7);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Config::default().with_args(&args("--port")).is_err());
        assert!(Config::default().with_args(&args("--port abc")).is_err());
        assert!(Config::default().with_args(&args("play --hold")).is_err());
    }
}
