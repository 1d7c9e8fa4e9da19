//! Scoring module - points awarded for cleared words
//!
//! The resolution engine never computes points itself. It hands every
//! accepted word to a [`Scorer`] exactly once and records the returned delta.
//! [`WordLengthScorer`] is the default collaborator.

use crate::types::WORD_SCORES;

/// Scoring collaborator called once per cleared word
pub trait Scorer {
    fn score(&mut self, word: &str) -> u32;
}

/// Points by word length from [`WORD_SCORES`].
///
/// Words longer than the table use its last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordLengthScorer;

/// Base points for a word of `len` letters
pub fn calculate_word_score(len: usize) -> u32 {
    let last = WORD_SCORES.len() - 1;
    WORD_SCORES[len.min(last)]
}

impl Scorer for WordLengthScorer {
    fn score(&mut self, word: &str) -> u32 {
        calculate_word_score(word.len())
    }
}

impl<F> Scorer for F
where
    F: FnMut(&str) -> u32,
{
    fn score(&mut self, word: &str) -> u32 {
        self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_scores_by_length() {
        assert_eq!(calculate_word_score(0), 0);
        assert_eq!(calculate_word_score(3), 10);
        assert_eq!(calculate_word_score(5), 20);
        assert_eq!(calculate_word_score(7), 50);
        assert_eq!(calculate_word_score(12), 50);
        assert_eq!(WordLengthScorer.score("HOUSES"), 30);
    }

    #[test]
    fn test_closure_scorer() {
        let mut calls = 0;
        let mut scorer = |word: &str| {
            calls += 1;
            word.len() as u32
        };
        assert_eq!(Scorer::score(&mut scorer, "HOUSE"), 5);
        assert_eq!(calls, 1);
    }
}
