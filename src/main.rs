//! Wordfall runner (default binary).
//!
//! `wordfall play` reads columns from stdin and prints the board;
//! `wordfall serve` exposes the game over the JSON line protocol.

use std::sync::Arc;

use anyhow::{Context, Result};

use wordfall::adapter::run_server;
use wordfall::config::{Config, Mode};
use wordfall::core::Dictionary;
use wordfall::engine::Game;
use wordfall::logging::init_logger;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env().with_args(&args)?;
    init_logger(config.debug);

    let dictionary = load_dictionary(&config);
    match config.mode {
        Mode::Play => play(config, dictionary),
        Mode::Serve => serve(config, dictionary),
    }
}

fn load_dictionary(config: &Config) -> Dictionary {
    match &config.dict_dir {
        Some(dir) => {
            let mut dict = Dictionary::new();
            dict.load_dir(dir);
            if dict.is_empty() {
                log::warn!("no words loaded from {}", dir.display());
            }
            dict
        }
        None => {
            log::info!("no word list directory given, using the built-in list");
            Dictionary::embedded()
        }
    }
}

fn play(config: Config, dictionary: Dictionary) -> Result<()> {
    let mut game = Game::new(dictionary, config.seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    wordfall::play::run(&mut game, stdin.lock(), &mut stdout)
}

fn serve(config: Config, dictionary: Dictionary) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(run_server(config.server, Arc::new(dictionary), None))
}
