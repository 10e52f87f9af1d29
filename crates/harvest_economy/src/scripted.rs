//! # Scripted Random Source
//!
//! An [`RngCore`] that replays a fixed list of uniform draws, for tests and
//! for replaying a reported harvest exactly.
//!
//! **NOT FOR PRODUCTION** - every roll is known in advance.

use rand::RngCore;

/// Bits of mantissa `rand` uses when turning a `u64` into an `f64` in `[0, 1)`.
const F64_PRECISION: u32 = 53;

/// Draw that always succeeds a trial (any `p > 0`).
pub const HIT: f64 = 0.0;

/// Draw that always fails a trial (any `p < 0.99`).
pub const MISS: f64 = 0.99;

/// Replays a fixed sequence of `u64` words, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    words: Vec<u64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Replays raw words.
    #[must_use]
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words, cursor: 0 }
    }

    /// Replays uniform `f64` draws: each value comes back unchanged from
    /// `rng.gen::<f64>()`. Values are clamped into `[0, 1)`.
    #[must_use]
    pub fn from_units(units: &[f64]) -> Self {
        let scale = (1u64 << F64_PRECISION) as f64;
        let max = (1u64 << F64_PRECISION) - 1;
        let words = units
            .iter()
            .map(|u| {
                let mantissa = (u.clamp(0.0, 1.0) * scale) as u64;
                mantissa.min(max) << (64 - F64_PRECISION)
            })
            .collect();
        Self::from_words(words)
    }

    /// `hits` successful trials followed by `misses` failed ones.
    #[must_use]
    pub fn hits_then_misses(hits: usize, misses: usize) -> Self {
        let mut units = vec![HIT; hits];
        units.extend(std::iter::repeat(MISS).take(misses));
        Self::from_units(&units)
    }

    /// Number of words consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.cursor % self.words.len()];
        self.cursor += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
