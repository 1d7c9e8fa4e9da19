//! Session - one client's game behind the line protocol
//!
//! A session owns its [`Game`] outright; nothing is shared between
//! connections. Each request line produces exactly one response.

use wordfall_core::Dictionary;
use wordfall_engine::{Game, PlaceError, ResolutionStep};

use crate::protocol::{
    create_definition, create_error, create_observation, create_place_error, create_resolution,
    create_upcoming, parse_request, Request, Response,
};
use crate::types::Letter;

/// Most letters a single peek may ask for
pub const MAX_PEEK: usize = 100;

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(dictionary: Dictionary, seed: u32) -> Self {
        Self {
            game: Game::new(dictionary, seed),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle one raw request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match parse_request(line) {
            Ok(req) => self.handle(req),
            Err(e) => {
                log::debug!("bad request line: {}", e);
                create_error(0, "invalid_request", &e.to_string())
            }
        }
    }

    pub fn handle(&mut self, req: Request) -> Response {
        match req {
            Request::Place {
                seq,
                column,
                letter,
                steps,
            } => self.place(seq, column, letter, steps),
            Request::Peek { seq, count } => {
                create_upcoming(seq, &self.game.peek_upcoming(count.min(MAX_PEEK)))
            }
            Request::Observe { seq } => create_observation(seq, &self.game.snapshot()),
            Request::Define { seq, word } => {
                create_definition(seq, &word, self.game.dictionary().definition(&word))
            }
            Request::Reset { seq, seed } => {
                match seed {
                    Some(seed) => self.game.restart(seed),
                    None => {
                        self.game.reset_board();
                        self.game.reset_sequence();
                    }
                }
                create_observation(seq, &self.game.snapshot())
            }
        }
    }

    fn place(&mut self, seq: u64, column: i8, letter: Option<char>, with_steps: bool) -> Response {
        let dropped = match letter {
            Some(c) => match Letter::from_char(c) {
                Some(l) => self.game.drop_tile(column, l).map(|at| (at, l)),
                None => {
                    return create_error(seq, "invalid_letter", "letter must be A-Z");
                }
            },
            None => self.game.drop_next(column),
        };
        let (placed, letter) = match dropped {
            Ok(v) => v,
            Err(err) => return self.reject(seq, err),
        };

        let mut steps: Vec<ResolutionStep> = Vec::new();
        if with_steps {
            while let Some(step) = self.game.step() {
                steps.push(step);
            }
        }
        let result = self.game.finish(placed);
        create_resolution(seq, letter, &result, &steps, self.game.score())
    }

    fn reject(&self, seq: u64, err: PlaceError) -> Response {
        log::debug!("placement rejected: {}", err);
        create_place_error(seq, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Dictionary::from_words(["cat", "red"]), 1)
    }

    fn json(resp: &Response) -> serde_json::Value {
        serde_json::to_value(resp).unwrap()
    }

    #[test]
    fn test_place_reports_cleared_word() {
        let mut s = session();
        s.handle_line(r#"{"type":"place","column":0,"letter":"C"}"#);
        s.handle_line(r#"{"type":"place","column":1,"letter":"A"}"#);
        let v = json(&s.handle_line(r#"{"type":"place","seq":3,"column":2,"letter":"T"}"#));
        assert_eq!(v["type"], "resolution");
        assert_eq!(v["seq"], 3);
        assert_eq!(v["events"][0]["word"], "CAT");
        assert_eq!(v["events"][0]["direction"], "row");
        assert_eq!(v["score"], 10);
        assert!(v.get("steps").is_none());
    }

    #[test]
    fn test_place_with_steps() {
        let mut s = session();
        s.handle_line(r#"{"type":"place","column":0,"letter":"R"}"#);
        s.handle_line(r#"{"type":"place","column":1,"letter":"E"}"#);
        let v = json(&s.handle_line(r#"{"type":"place","column":2,"letter":"D","steps":true}"#));
        let steps = v["steps"].as_array().unwrap();
        assert_eq!(steps[0]["kind"], "matched");
        assert_eq!(steps[0]["words"][0]["word"], "RED");
        assert_eq!(steps[1]["kind"], "cleared");
        assert_eq!(steps[1]["events"][0]["theme"], "red");
        assert_eq!(steps[2]["kind"], "fell");
        assert_eq!(steps.last().unwrap()["kind"], "settled");
    }

    #[test]
    fn test_place_errors() {
        let mut s = session();
        let v = json(&s.handle_line(r#"{"type":"place","seq":1,"column":12}"#));
        assert_eq!(v["type"], "error");
        assert_eq!(v["code"], "invalid_placement");

        let v = json(&s.handle_line(r#"{"type":"place","column":1,"letter":"7"}"#));
        assert_eq!(v["code"], "invalid_letter");

        let v = json(&s.handle_line("{"));
        assert_eq!(v["code"], "invalid_request");
    }

    #[test]
    fn test_sequenced_place_matches_peek() {
        let mut s = session();
        let v = json(&s.handle_line(r#"{"type":"peek","count":2}"#));
        let first = v["letters"][0].clone();
        let v = json(&s.handle_line(r#"{"type":"place","column":4}"#));
        assert_eq!(v["letter"], first);
        assert_eq!(s.game().placements(), 1);
    }

    #[test]
    fn test_define_and_reset() {
        let mut s = session();
        let v = json(&s.handle_line(r#"{"type":"define","word":"CAT"}"#));
        assert_eq!(v["known"], true);
        assert_eq!(v["word"], "cat");

        s.handle_line(r#"{"type":"place","column":4,"letter":"Q"}"#);
        let v = json(&s.handle_line(r#"{"type":"reset","seed":9}"#));
        assert_eq!(v["type"], "observation");
        assert_eq!(v["seed"], 9);
        assert_eq!(v["placements"], 0);
    }
}
