//! # Random Source Seam
//!
//! File: cli/src/bot/random.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every random decision the bot makes (which opener, whether to echo, what a
//! die shows) goes through the `RandomSource` trait. Production wiring uses
//! `SeededRandom`, a thin wrapper over `rand::rngs::StdRng`; tests either seed
//! it or use `ScriptedRandom` to dictate outcomes one by one.
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// The three random operations the responder needs.
pub trait RandomSource {
    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`. Returns `low` when the range is empty or a single value.
    fn roll_range(&mut self, low: u64, high: u64) -> u64;

    /// `true` with the given probability. Values outside `[0, 1]` are clamped.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Standard random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn roll_range(&mut self, low: u64, high: u64) -> u64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        // `!(p > 0.0)` also catches NaN.
        if !(probability > 0.0) {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.rng.gen_bool(probability)
        }
    }
}

/// Deterministic source that replays queued outcomes.
///
/// Once a queue runs dry it falls back to index 0, `low`, and `false`.
/// Out-of-range queued indices are wrapped into range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    rolls: VecDeque<u64>,
    chances: VecDeque<bool>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u64>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        match (self.picks.pop_front(), len) {
            (_, 0) => 0,
            (Some(index), len) => index % len,
            (None, _) => 0,
        }
    }

    fn roll_range(&mut self, low: u64, high: u64) -> u64 {
        match self.rolls.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
