//! Dictionary tests - loading word lists from a directory of CSV files

use std::fs;
use std::path::PathBuf;

use wordfall::core::{Dictionary, LoadReport};

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_load_dir_reads_every_length() {
    let dir = TempDir::new("wordfall-lists");
    fs::write(
        dir.0.join("3_letter_words.csv"),
        "word,definition\ncat,a feline\nDOG,\"a canine, loyal\"\n",
    )
    .unwrap();
    fs::write(dir.0.join("4_letter_words.csv"), "word,definition\ncart,\n").unwrap();
    fs::write(
        dir.0.join("7_letter_words.csv"),
        "word,definition\nrainbow,arc of colours\nrain bow,bad\n",
    )
    .unwrap();

    let mut dict = Dictionary::new();
    let report = dict.load_dir(&dir.0);

    assert_eq!(report, LoadReport { loaded: 4, skipped: 1 });
    assert_eq!(dict.len(), 4);
    assert!(dict.contains("DOG"));
    assert_eq!(dict.definition("dog"), Some("a canine, loyal"));
    assert_eq!(dict.definition("cart"), Some(""));
    assert_eq!(dict.longest_word_len(), 7);
}

#[test]
fn test_missing_dir_leaves_dictionary_empty() {
    let mut dict = Dictionary::new();
    let report = dict.load_dir(&std::env::temp_dir().join("wordfall-no-such-dir"));
    assert_eq!(report, LoadReport::default());
    assert!(dict.is_empty());
}

#[test]
fn test_loaded_words_drive_matching() {
    use wordfall::core::Board;
    use wordfall::engine::Game;
    use wordfall::types::Letter;

    let dir = TempDir::new("wordfall-match");
    fs::write(dir.0.join("3_letter_words.csv"), "word,definition\nsun,our star\n").unwrap();
    let mut dict = Dictionary::new();
    dict.load_dir(&dir.0);

    let mut game = Game::new(dict, 1);
    game.set_board(Board::from_rows(&["SU....."])).unwrap();
    let result = game
        .place_tile(2, Letter::from_char('N').unwrap())
        .unwrap();
    assert_eq!(result.events[0].word, "SUN");
    assert_eq!(game.dictionary().definition("SUN"), Some("our star"));
}
