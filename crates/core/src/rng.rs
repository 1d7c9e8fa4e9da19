//! RNG module - constrained letter sequence generation
//!
//! Tiles are drawn from a pre-generated batch of letters. Each batch is built
//! by sampling a frequency-weighted pool and rejecting samples that would
//! break the repetition rules against the trailing window of accepted letters:
//!
//! - a letter may not appear `MAX_REPEATS_IN_WINDOW` times in the window
//! - vowels (and consonants) may not run `MAX_CLASS_STREAK` long
//!
//! After `MAX_PICK_RETRIES` rejected samples the least-bad candidate seen is
//! accepted, so generation always makes progress. Such picks are counted.
//!
//! Also provides a simple LCG for deterministic testing.

use std::collections::VecDeque;

use crate::types::{
    Letter, LETTER_WEIGHTS, MAX_CLASS_STREAK, MAX_PICK_RETRIES, MAX_REPEATS_IN_WINDOW,
    SEQUENCE_LEN, TRAILING_WINDOW,
};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Weighted pool of letters, one entry per unit of weight
fn build_pool() -> Vec<Letter> {
    LETTER_WEIGHTS
        .iter()
        .enumerate()
        .flat_map(|(i, &weight)| {
            Letter::from_index(i)
                .into_iter()
                .flat_map(move |l| std::iter::repeat(l).take(weight as usize))
        })
        .collect()
}

/// Number of rules `candidate` would break if appended to `window`.
fn violations(window: &VecDeque<Letter>, candidate: Letter) -> usize {
    let mut broken = 0;

    let repeats = window.iter().filter(|&&l| l == candidate).count();
    if repeats + 1 >= MAX_REPEATS_IN_WINDOW {
        broken += 1;
    }

    let streak = window
        .iter()
        .rev()
        .take_while(|l| l.is_vowel() == candidate.is_vowel())
        .count();
    if streak + 1 >= MAX_CLASS_STREAK {
        broken += 1;
    }

    broken
}

/// Self-renewing letter sequence for tile spawning
#[derive(Debug, Clone)]
pub struct TileSequencer {
    tiles: Vec<Letter>,
    cursor: usize,
    /// Trailing accepted letters, carried across batches
    window: VecDeque<Letter>,
    pool: Vec<Letter>,
    rng: SimpleRng,
    len: usize,
    fallbacks: u32,
}

impl TileSequencer {
    /// Create a sequencer with the default batch length
    pub fn new(seed: u32) -> Self {
        Self::with_len(seed, SEQUENCE_LEN)
    }

    pub fn with_len(seed: u32, len: usize) -> Self {
        let mut seq = Self {
            tiles: Vec::with_capacity(len.max(1)),
            cursor: 0,
            window: VecDeque::with_capacity(TRAILING_WINDOW),
            pool: build_pool(),
            rng: SimpleRng::new(seed),
            len: len.max(1),
            fallbacks: 0,
        };
        seq.regenerate();
        seq
    }

    fn pick(&mut self) -> Letter {
        let mut best: Option<(usize, Letter)> = None;
        for _ in 0..MAX_PICK_RETRIES {
            let candidate = self.pool[self.rng.next_range(self.pool.len() as u32) as usize];
            let broken = violations(&self.window, candidate);
            if broken == 0 {
                return candidate;
            }
            if best.map_or(true, |(b, _)| broken < b) {
                best = Some((broken, candidate));
            }
        }

        self.fallbacks += 1;
        // MAX_PICK_RETRIES is non-zero so a candidate was always seen.
        let letter = best.map_or(self.pool[0], |(_, l)| l);
        log::debug!(
            "tile sequencer fell back to {} after {} rejected samples",
            letter,
            MAX_PICK_RETRIES
        );
        letter
    }

    fn accept(&mut self, letter: Letter) {
        if self.window.len() == TRAILING_WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(letter);
    }

    /// Replace the batch with a freshly generated one and rewind the cursor
    fn regenerate(&mut self) {
        self.tiles.clear();
        for _ in 0..self.len {
            let letter = self.pick();
            self.accept(letter);
            self.tiles.push(letter);
        }
        self.cursor = 0;
    }

    /// Draw the next letter, regenerating when the batch is used up
    pub fn next(&mut self) -> Letter {
        if self.cursor >= self.tiles.len() {
            self.regenerate();
        }
        let letter = self.tiles[self.cursor];
        self.cursor += 1;
        letter
    }

    /// Preview the next `n` letters without consuming them.
    ///
    /// Past the end of the batch the preview is generated on a clone, so it
    /// is exactly what subsequent `next()` calls will return.
    pub fn peek(&self, n: usize) -> Vec<Letter> {
        let available = self.tiles.len() - self.cursor.min(self.tiles.len());
        if n <= available {
            return self.tiles[self.cursor..self.cursor + n].to_vec();
        }
        let mut preview = self.clone();
        (0..n).map(|_| preview.next()).collect()
    }

    /// Discard the current batch and start a new one.
    ///
    /// The trailing window is cleared; the RNG continues from its state.
    pub fn reset(&mut self) {
        self.window.clear();
        self.regenerate();
    }

    /// Restart from a new seed
    pub fn reseed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.reset();
    }

    /// How many picks had to take the fallback candidate
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    /// Index of the next letter within the current batch
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current batch
    pub fn tiles(&self) -> &[Letter] {
        &self.tiles
    }
}

impl Default for TileSequencer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_constraints(letters: &[Letter]) {
        for end in 1..=letters.len() {
            let start = end.saturating_sub(TRAILING_WINDOW);
            let window = &letters[start..end];
            let last = window[window.len() - 1];
            let repeats = window.iter().filter(|&&l| l == last).count();
            assert!(
                repeats < MAX_REPEATS_IN_WINDOW,
                "{} repeated {} times ending at {}",
                last,
                repeats,
                end
            );
            let streak = window
                .iter()
                .rev()
                .take_while(|l| l.is_vowel() == last.is_vowel())
                .count();
            assert!(streak < MAX_CLASS_STREAK, "streak of {} ending at {}", streak, end);
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(26) < 26);
        }
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_pool_follows_weights() {
        let pool = build_pool();
        let e = Letter::from_char('E').unwrap();
        let z = Letter::from_char('Z').unwrap();
        assert_eq!(pool.iter().filter(|&&l| l == e).count(), 127);
        assert_eq!(pool.iter().filter(|&&l| l == z).count(), 1);
    }

    #[test]
    fn test_sequence_respects_constraints() {
        for seed in [1, 42, 12345, 987654321] {
            let mut seq = TileSequencer::new(seed);
            let letters: Vec<Letter> = (0..300).map(|_| seq.next()).collect();
            assert_eq!(seq.fallbacks(), 0, "seed {}", seed);
            assert_constraints(&letters);
        }
    }

    #[test]
    fn test_regenerates_past_end() {
        let mut seq = TileSequencer::with_len(3, 10);
        for _ in 0..10 {
            seq.next();
        }
        assert_eq!(seq.cursor(), 10);
        seq.next();
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.tiles().len(), 10);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut seq = TileSequencer::with_len(9, 8);
        let preview = seq.peek(20);
        assert_eq!(preview.len(), 20);
        assert_eq!(seq.cursor(), 0);
        let drawn: Vec<Letter> = (0..20).map(|_| seq.next()).collect();
        assert_eq!(preview, drawn);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TileSequencer::new(77);
        let mut b = TileSequencer::new(77);
        for _ in 0..250 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_violations_detects_streaks_and_repeats() {
        let l = |c| Letter::from_char(c).unwrap();
        let window: VecDeque<Letter> = [l('A'), l('E')].into_iter().collect();
        assert_eq!(violations(&window, l('I')), 1);
        assert_eq!(violations(&window, l('T')), 0);

        let window: VecDeque<Letter> = [l('T'), l('A'), l('T')].into_iter().collect();
        assert_eq!(violations(&window, l('T')), 1);
        assert_eq!(violations(&window, l('O')), 0);
    }
}
