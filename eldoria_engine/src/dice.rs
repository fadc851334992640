//! All numeric randomness in the game goes through the [`Dice`] trait.
//!
//! Play uses [`RngDice`] over a `rand` generator (optionally seeded for
//! reproducible runs); tests load [`ScriptedDice`] with the exact rolls they need.
use std::collections::VecDeque;
use std::ops::RangeInclusive;

use eldoria_data::RangeDef;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed rolls.
pub trait Dice {
    /// Roll a value in `range` (both ends included).
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Roll within a content-defined range.
    fn roll_def(&mut self, range: RangeDef) -> u32 {
        self.roll(range.min..=range.max)
    }
}

/// Dice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng> {
    rng: R,
}
impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Deterministic dice: the same seed always gives the same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngDice<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.random_range(range)
    }
}

/// Dice that replay a fixed list of rolls.
///
/// Each value is clamped into the requested range. Once the list runs out,
/// every roll yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}
impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (lo, hi) = (*range.start(), *range.end());
        match self.rolls.pop_front() {
            Some(value) if lo <= hi => value.clamp(lo, hi),
            _ => lo,
        }
    }
}
