//! Word matcher - finds dictionary words inside scanned lines
//!
//! [`find_words`] returns every dictionary substring of a line. Choosing which
//! ones clear is a separate step: among overlapping words the longest wins and
//! ties go to the leftmost (lowest start index). Words that share no cell with
//! a winner are kept too, so `CAT.BOY` yields both. The same rule applies to
//! rows, columns and both diagonals.

use std::cmp::Ordering;

use crate::dictionary::Dictionary;
use crate::scanner::Line;
use crate::types::{Coord, Direction, ThemeColor};

/// A word found at `line[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Precedence order: longer first, then leftmost.
pub fn precedence(a: &WordSpan, b: &WordSpan) -> Ordering {
    b.len().cmp(&a.len()).then(a.start.cmp(&b.start))
}

/// Every dictionary word contained in `line`, ordered by start then length.
///
/// Candidate lengths run from the dictionary's minimum up to the longest word
/// it actually holds.
///
/// # Examples
///
/// ```
/// use wordfall_core::{find_words, Dictionary};
///
/// let dict = Dictionary::from_words(["car", "art", "cart"]);
/// let words: Vec<_> = find_words("CART", &dict).into_iter().map(|w| w.word).collect();
/// assert_eq!(words, ["CAR", "CART", "ART"]);
/// ```
pub fn find_words(line: &str, dict: &Dictionary) -> Vec<WordSpan> {
    let bytes = line.as_bytes();
    let min = dict.min_len();
    let max = dict.longest_word_len().min(dict.max_len());
    let mut found = Vec::new();
    if max < min {
        return found;
    }

    for start in 0..bytes.len() {
        for len in min..=max {
            let end = start + len;
            if end > bytes.len() {
                break;
            }
            let candidate = &bytes[start..end];
            // A separator ends every longer candidate from this start too.
            if !candidate.iter().all(u8::is_ascii_alphabetic) {
                break;
            }
            let Ok(word) = std::str::from_utf8(candidate) else {
                break;
            };
            if dict.contains(word) {
                found.push(WordSpan {
                    word: word.to_ascii_uppercase(),
                    start,
                    end,
                });
            }
        }
    }

    found
}

/// The highest-precedence span, if any
pub fn select_winner(spans: &[WordSpan]) -> Option<&WordSpan> {
    spans.iter().min_by(|a, b| precedence(a, b))
}

/// Every span that clears: winners are taken in precedence order and any
/// span overlapping one already taken is dropped. Result is ordered by start.
pub fn select_disjoint(spans: &[WordSpan]) -> Vec<&WordSpan> {
    let mut ranked: Vec<&WordSpan> = spans.iter().collect();
    ranked.sort_by(|a, b| precedence(a, b));

    let mut kept: Vec<&WordSpan> = Vec::new();
    for span in ranked {
        if kept
            .iter()
            .all(|k| span.end <= k.start || span.start >= k.end)
        {
            kept.push(span);
        }
    }
    kept.sort_by_key(|span| span.start);
    kept
}

/// A dictionary word located on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub coords: Vec<Coord>,
    pub direction: Direction,
    /// Offset of the word within its line
    pub start: usize,
    /// Theme change signalled by this word, if it is a trigger word
    pub theme: Option<ThemeColor>,
}

impl Match {
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Find the words that clear on `line` and map them to board coordinates
pub fn match_line(line: &Line, dict: &Dictionary) -> Vec<Match> {
    let spans = find_words(line.text(), dict);
    let kept = select_disjoint(&spans);
    if !kept.is_empty() {
        log::debug!(
            "{} from {:?}: {} of {} candidates kept",
            line.direction().as_str(),
            line.origin(),
            kept.len(),
            spans.len()
        );
    }
    kept.into_iter()
        .map(|span| Match {
            theme: ThemeColor::from_word(&span.word),
            word: span.word.clone(),
            coords: line.span(span.start, span.end).to_vec(),
            direction: line.direction(),
            start: span.start,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::scanner::Line;

    #[test]
    fn finds_separated_words() {
        let dict = Dictionary::from_words(["cat", "boy"]);
        let spans = find_words("CAT.BOY", &dict);
        assert_eq!(
            spans,
            vec![
                WordSpan { word: "CAT".into(), start: 0, end: 3 },
                WordSpan { word: "BOY".into(), start: 4, end: 7 },
            ]
        );
    }

    #[test]
    fn words_never_span_separators() {
        let dict = Dictionary::from_words(["cab", "ab"]);
        assert!(find_words("CA.B", &dict).is_empty());
    }

    #[test]
    fn longest_then_leftmost() {
        let dict = Dictionary::from_words(["car", "art", "cart"]);
        let spans = find_words("CART", &dict);
        assert_eq!(spans.len(), 3);
        assert_eq!(select_winner(&spans).unwrap().word, "CART");

        let dict = Dictionary::from_words(["cat", "ate"]);
        let spans = find_words("CATE", &dict);
        assert_eq!(select_winner(&spans).unwrap().word, "CAT");
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        assert!(find_words("CART", &Dictionary::new()).is_empty());
    }

    #[test]
    fn match_line_maps_coordinates() {
        let dict = Dictionary::from_words(["red"]);
        let board = Board::from_rows(&[".XRED.."]);
        let line = Line::extract(&board, Coord::new(5, 3), Direction::Row);
        let matches = match_line(&line, &dict);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.word, "RED");
        assert_eq!(m.start, 2);
        assert_eq!(
            m.coords,
            vec![Coord::new(5, 2), Coord::new(5, 3), Coord::new(5, 4)]
        );
        assert_eq!(m.theme, Some(ThemeColor::Red));
    }

    #[test]
    fn disjoint_words_on_one_line_all_clear() {
        let dict = Dictionary::from_words(["cat", "boy"]);
        let board = Board::from_rows(&["CAT.BOY"]);
        let line = Line::extract(&board, Coord::new(5, 6), Direction::Row);
        let words: Vec<String> = match_line(&line, &dict)
            .into_iter()
            .map(|m| m.word)
            .collect();
        assert_eq!(words, ["CAT", "BOY"]);
    }

    #[test]
    fn overlapping_words_keep_only_the_winner() {
        let dict = Dictionary::from_words(["cat", "ate", "ten", "catnap", "nap"]);
        let spans = find_words("CATENAP", &dict);
        let kept: Vec<&str> = select_disjoint(&spans)
            .into_iter()
            .map(|s| s.word.as_str())
            .collect();
        // CAT wins over ATE; TEN overlaps CAT at T; NAP is separate.
        assert_eq!(kept, ["CAT", "NAP"]);

        let spans = find_words("CATNAP.", &dict);
        let kept: Vec<&str> = select_disjoint(&spans)
            .into_iter()
            .map(|s| s.word.as_str())
            .collect();
        assert_eq!(kept, ["CATNAP"]);
    }
}
