//! Line-oriented play mode
//!
//! Reads one command per line and prints the board after every placement.
//! Generic over reader and writer so the loop runs the same against stdin or
//! a test buffer.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::PREVIEW_LEN;
use crate::engine::{Game, ResolutionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drop the next tile into this column
    Drop(i8),
    Peek(usize),
    Define(String),
    Reset,
    Help,
    Quit,
}

/// Parse one input line; None for blank lines
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let cmd = match head {
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        "r" | "reset" => Command::Reset,
        "p" | "peek" => {
            let n = match parts.next() {
                Some(v) => v.parse().map_err(|_| format!("bad count: {}", v))?,
                None => PREVIEW_LEN,
            };
            Command::Peek(n)
        }
        "d" | "define" => match parts.next() {
            Some(word) => Command::Define(word.to_string()),
            None => return Err("define needs a word".to_string()),
        },
        other => match other.parse::<i8>() {
            Ok(col) => Command::Drop(col),
            Err(_) => return Err(format!("unknown command: {}", other)),
        },
    };
    Ok(Some(cmd))
}

const HELP: &str = "\
commands:
  0-6          drop the next tile into that column
  peek [n]     show upcoming letters
  define WORD  show a word's definition
  reset        clear the board
  quit         leave";

fn render<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    writeln!(out, " 0123456")?;
    for row in game.board().to_rows() {
        writeln!(out, "|{}|", row)?;
    }
    let upcoming: String = game
        .peek_upcoming(PREVIEW_LEN)
        .iter()
        .map(|l| l.as_char())
        .collect();
    writeln!(
        out,
        "score {}  words {}  next {}",
        game.score(),
        game.words_cleared(),
        upcoming
    )?;
    Ok(())
}

fn report<W: Write>(out: &mut W, result: &ResolutionResult) -> Result<()> {
    for event in &result.events {
        write!(
            out,
            "  {} ({}, +{}",
            event.word,
            event.direction.as_str(),
            event.score
        )?;
        if event.cascade > 0 {
            write!(out, ", cascade {}", event.cascade)?;
        }
        if let Some(theme) = event.theme {
            write!(out, ", {}", theme.as_str())?;
        }
        writeln!(out, ")")?;
    }
    Ok(())
}

/// Run the play loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> Result<()> {
    render(out, game)?;
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Reset => {
                game.reset_board();
                render(out, game)?;
            }
            Command::Peek(n) => {
                let letters: String = game.peek_upcoming(n).iter().map(|l| l.as_char()).collect();
                writeln!(out, "{}", letters)?;
            }
            Command::Define(word) => match game.dictionary().definition(&word) {
                Some("") => writeln!(out, "{}: (no definition)", word)?,
                Some(def) => writeln!(out, "{}: {}", word, def)?,
                None => writeln!(out, "{}: not a word", word)?,
            },
            Command::Drop(col) => match game.place_next(col) {
                Ok(result) => {
                    report(out, &result)?;
                    render(out, game)?;
                    if result.game_over {
                        writeln!(out, "game over, final score {}", game.score())?;
                        break;
                    }
                }
                Err(err) => writeln!(out, "{}", err)?,
            },
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("3"), Ok(Some(Command::Drop(3))));
        assert_eq!(parse_command("peek"), Ok(Some(Command::Peek(PREVIEW_LEN))));
        assert_eq!(parse_command("p 9"), Ok(Some(Command::Peek(9))));
        assert_eq!(
            parse_command("define cat"),
            Ok(Some(Command::Define("cat".to_string())))
        );
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert!(parse_command("define").is_err());
        assert!(parse_command("hold").is_err());
    }

    #[test]
    fn loop_places_and_quits() {
        let mut game = Game::new(Dictionary::from_words(["cat"]), 3);
        let input = "0\n9\ndefine cat\nquit\n1\n";
        let mut out = Vec::new();
        run(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(game.placements(), 1);
        assert!(text.contains("column 9 is out of range"));
        assert!(text.contains("cat: (no definition)"));
    }
}
