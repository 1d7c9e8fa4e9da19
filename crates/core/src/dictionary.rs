//! Dictionary module - the set of valid words and their definitions
//!
//! Words are stored lowercase. Lookups are case-insensitive, so scanned board
//! lines (uppercase) can be checked directly.
//!
//! Word lists are CSV files with a `word,definition` header, one file per word
//! length, named `{n}_letter_words.csv`. A source that cannot be read is
//! logged and skipped: the dictionary degrades to whatever loaded, and an
//! empty dictionary is a valid (if useless) state.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{MAX_WORD_LEN, MIN_WORD_LEN};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid word: {0:?}")]
    InvalidWord(String),
}

/// Counts from loading one or more word sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadReport {
    fn merge(&mut self, other: LoadReport) {
        self.loaded += other.loaded;
        self.skipped += other.skipped;
    }
}

/// Small built-in word list used when no word list directory is configured
const FALLBACK_WORDS: &[(&str, &str)] = &[
    ("act", "something done"),
    ("age", "length of time something has existed"),
    ("air", "the mixture of gases around the earth"),
    ("ant", "a small social insect"),
    ("arm", "upper limb of the body"),
    ("art", "creative work"),
    ("ate", "past tense of eat"),
    ("bat", "a flying mammal; a club for hitting a ball"),
    ("bed", "a piece of furniture to sleep on"),
    ("bee", "a stinging insect that makes honey"),
    ("blue", "the colour of a clear sky"),
    ("boat", "a small vessel for travel on water"),
    ("bone", "rigid tissue of the skeleton"),
    ("car", "a motor vehicle"),
    ("care", "serious attention"),
    ("cart", "a small wheeled vehicle"),
    ("cat", "a small domesticated feline"),
    ("dog", "a domesticated canine"),
    ("ear", "organ of hearing"),
    ("east", "the direction of sunrise"),
    ("eat", "take in food"),
    ("green", "the colour of growing grass"),
    ("hat", "a covering for the head"),
    ("heart", "the organ that pumps blood"),
    ("heat", "the quality of being hot"),
    ("hen", "a female chicken"),
    ("ice", "frozen water"),
    ("late", "after the expected time"),
    ("lion", "a large wild cat"),
    ("man", "an adult male person"),
    ("near", "close in space or time"),
    ("net", "open mesh fabric"),
    ("note", "a brief written record"),
    ("oak", "a hardwood tree"),
    ("one", "the smallest whole number"),
    ("ore", "rock containing metal"),
    ("pen", "a writing instrument"),
    ("rain", "water falling from clouds"),
    ("rat", "a long-tailed rodent"),
    ("red", "the colour of blood"),
    ("rest", "a period of relaxation"),
    ("rose", "a thorny flowering shrub"),
    ("sea", "a large body of salt water"),
    ("seat", "a place to sit"),
    ("sit", "rest on the buttocks"),
    ("star", "a luminous celestial body"),
    ("stone", "a small piece of rock"),
    ("sun", "the star the earth orbits"),
    ("tea", "a drink made from leaves"),
    ("ten", "the number after nine"),
    ("tin", "a silvery metal"),
    ("tone", "a musical sound"),
    ("train", "a line of connected railway cars"),
    ("tree", "a tall woody plant"),
    ("water", "a clear liquid essential for life"),
    ("yellow", "the colour of ripe lemons"),
];

#[derive(Debug, Deserialize)]
struct WordRecord {
    word: String,
    #[serde(default)]
    definition: String,
}

/// Case-normalized word set with definitions
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashMap<String, String>,
    min_len: usize,
    max_len: usize,
    longest: usize,
}

impl Dictionary {
    /// Empty dictionary with the default length bounds
    pub fn new() -> Self {
        Self::with_bounds(MIN_WORD_LEN, MAX_WORD_LEN)
    }

    pub fn with_bounds(min_len: usize, max_len: usize) -> Self {
        Self {
            words: HashMap::new(),
            min_len: min_len.max(1),
            max_len: max_len.max(min_len.max(1)),
            longest: 0,
        }
    }

    /// Build from a word list with blank definitions, skipping invalid words
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfall_core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "Boy", "x", "c4t"]);
    /// assert!(dict.contains("CAT"));
    /// assert!(dict.contains("boy"));
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            let _ = dict.insert(word.as_ref(), "");
        }
        dict
    }

    /// The built-in fallback word list
    pub fn embedded() -> Self {
        let mut dict = Self::new();
        for (word, definition) in FALLBACK_WORDS {
            let _ = dict.insert(word, definition);
        }
        dict
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Length of the longest word actually loaded (0 when empty)
    pub fn longest_word_len(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Validate and add a word. Re-inserting a word replaces its definition.
    pub fn insert(&mut self, word: &str, definition: &str) -> Result<(), DictionaryError> {
        let word = word.trim();
        let len = word.len();
        if len < self.min_len
            || len > self.max_len
            || !word.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(DictionaryError::InvalidWord(word.to_string()));
        }
        self.words
            .insert(word.to_ascii_lowercase(), definition.trim().to_string());
        self.longest = self.longest.max(len);
        Ok(())
    }

    /// Membership test, case-insensitive
    pub fn contains(&self, word: &str) -> bool {
        if word.len() < self.min_len || word.len() > self.max_len {
            return false;
        }
        if word.bytes().all(|b| b.is_ascii_lowercase()) {
            return self.words.contains_key(word);
        }
        self.words.contains_key(&word.to_ascii_lowercase())
    }

    /// Stored definition; empty string when the source had none
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.words
            .get(&word.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Load one `word,definition` CSV source.
    ///
    /// Bad records are skipped and counted; a reader or header failure aborts
    /// this source only.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<LoadReport, DictionaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut report = LoadReport::default();
        for result in csv_reader.deserialize::<WordRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    log::debug!("skipping malformed record: {}", err);
                    report.skipped += 1;
                    continue;
                }
            };
            match self.insert(&record.word, &record.definition) {
                Ok(()) => report.loaded += 1,
                Err(_) => report.skipped += 1,
            }
        }
        Ok(report)
    }

    /// Load one CSV file
    pub fn load_csv_file(&mut self, path: &Path) -> Result<LoadReport, DictionaryError> {
        let file = std::fs::File::open(path)?;
        self.load_csv(file)
    }

    /// Load every `{n}_letter_words.csv` in `dir` for n within the length
    /// bounds. Missing or unreadable files are logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> LoadReport {
        let mut total = LoadReport::default();
        for n in self.min_len..=self.max_len {
            let path = dir.join(format!("{}_letter_words.csv", n));
            match self.load_csv_file(&path) {
                Ok(report) => {
                    log::debug!(
                        "{}: loaded {} words, skipped {}",
                        path.display(),
                        report.loaded,
                        report.skipped
                    );
                    total.merge(report);
                }
                Err(err) => {
                    log::warn!("skipping word source {}: {}", path.display(), err);
                }
            }
        }
        log::info!(
            "dictionary: {} words ({} records skipped)",
            self.len(),
            total.skipped
        );
        total
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
