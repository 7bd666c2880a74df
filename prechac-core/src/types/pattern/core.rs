//! Core Pattern struct and implementation.

use super::lcm::lcm_of;
use super::parser::parse_swaps;
use super::validate::{average_props, check_collisions};
use crate::error::PatternError;
use crate::types::hand::{HandLayout, HANDS_PER_JUGGLER};
use crate::types::throw::Throw;
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::str::FromStr;

/// A multi-juggler passing pattern.
///
/// Built once from `(num_jugglers, notation)`. Construction parses the
/// notation into global swap values, validates the landing schedule and the
/// prop count, expands the sequence into per-hand local throws, and runs two
/// normalization passes so the result is juggler-role-independent: the
/// global sequence is rotated until the first local throw is a pass, and the
/// hand layout is flipped if that first pass would be diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    num_jugglers: usize,
    num_hands: usize,
    num_props: u32,
    swaps: Vec<u32>,
    layout: HandLayout,
    invert_hand_order: bool,
    throws: Vec<Throw>,
}

impl Pattern {
    /// Construct and normalize a pattern.
    pub fn new(num_jugglers: usize, notation: &str) -> Result<Self, PatternError> {
        if num_jugglers < 1 {
            return Err(PatternError::TooFewJugglers { given: num_jugglers });
        }

        let swaps = parse_swaps(notation)?;
        check_collisions(&swaps)?;

        let average = average_props(&swaps)?;
        if !average.is_integer() {
            return Err(PatternError::FractionalPropCount { average });
        }

        let mut pattern = Pattern {
            num_jugglers,
            num_hands: num_jugglers * HANDS_PER_JUGGLER,
            num_props: average.to_integer() as u32,
            swaps,
            layout: HandLayout::default_for(num_jugglers),
            invert_hand_order: false,
            throws: Vec::new(),
        };

        pattern.regenerate();
        pattern.correct_phase()?;
        pattern.correct_crossing();

        Ok(pattern)
    }

    /// Rebuild the local throw sequence from the current swaps and layout.
    ///
    /// The sequence length is the least common multiple of the period and
    /// the hand count: the smallest length at which the hand cursor and the
    /// swap cursor simultaneously return to their starting values, so the
    /// result is exactly one full repeating cycle. Idempotent for unchanged
    /// inputs.
    fn regenerate(&mut self) {
        let period = self.swaps.len();
        let num_sites = lcm_of(&[period, self.num_hands]);

        self.throws = (0..num_sites)
            .map(|site| {
                Throw::new(
                    site % self.num_hands,
                    self.swaps[site % period],
                    self.num_jugglers,
                    self.num_hands,
                    self.layout,
                )
            })
            .collect();
    }

    /// Phase correction: rotate the global sequence one beat left at a time
    /// until the first local throw is a pass. A full period of rotations
    /// without one means the pattern is entirely self-throws.
    fn correct_phase(&mut self) -> Result<(), PatternError> {
        let mut remaining = self.swaps.len();
        while !self.throws.first().map_or(false, |t| t.is_pass) {
            if remaining == 0 {
                return Err(PatternError::NoPass);
            }
            self.swaps.rotate_left(1);
            self.regenerate();
            remaining -= 1;
        }
        Ok(())
    }

    /// Crossing correction: if the first local throw is a diagonal pass,
    /// select the opposite hand layout and regenerate. This swaps which
    /// physical side is "right" without changing any throw value; for two
    /// jugglers it makes the first pass straight. Runs at most once.
    fn correct_crossing(&mut self) {
        if self.throws.first().map_or(false, |t| t.is_diagonal) {
            self.invert_hand_order = true;
            self.layout = self.layout.flipped();
            self.regenerate();
        }
    }

    /// Rotate the global sequence by n beats and rebuild the local throws.
    /// Positive n rotates right (last beat moves to the front), negative n
    /// rotates left. Normalization is not re-run, so rotating left then
    /// right by the same count restores the pattern exactly.
    pub fn rotate(&mut self, n: i32) {
        if self.swaps.is_empty() {
            return;
        }
        let len = self.swaps.len() as i32;
        let n = (((n % len) + len) % len) as usize;
        if n == 0 {
            return;
        }
        self.swaps.rotate_right(n);
        self.regenerate();
    }

    /// Number of jugglers in the pattern.
    pub fn num_jugglers(&self) -> usize {
        self.num_jugglers
    }

    /// Number of hands in the pattern (2 per juggler).
    pub fn num_hands(&self) -> usize {
        self.num_hands
    }

    /// Number of props the pattern keeps in the air.
    pub fn num_props(&self) -> u32 {
        self.num_props
    }

    /// Length of the global swap cycle.
    pub fn period(&self) -> usize {
        self.swaps.len()
    }

    /// The normalized global swap values.
    pub fn swaps(&self) -> &[u32] {
        &self.swaps
    }

    /// The hand layout in effect after normalization.
    pub fn layout(&self) -> HandLayout {
        self.layout
    }

    /// Whether crossing correction flipped the hand-layout convention.
    pub fn is_inverted(&self) -> bool {
        self.invert_hand_order
    }

    /// The derived local throw sequence, length `lcm(period, num_hands)`.
    pub fn local_throws(&self) -> &[Throw] {
        &self.throws
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    /// Parse a combined `"<jugglers> <notation>"` input, e.g. `"2 633"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (jugglers, notation) = match (parts.next(), parts.next(), parts.next()) {
            (Some(jugglers), Some(notation), None) => (jugglers, notation),
            _ => return Err(anyhow!("expected '<jugglers> <notation>', e.g. '2 633'")),
        };
        let jugglers: usize = jugglers
            .parse()
            .context("the juggler count must be a positive integer")?;
        Ok(Pattern::new(jugglers, notation)?)
    }
}

impl fmt::Display for Pattern {
    /// Prints the global swap list, e.g. `[ 3, 3, 6 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, swap) in self.swaps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", swap)?;
        }
        write!(f, " ]")
    }
}
