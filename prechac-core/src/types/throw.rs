//! A single hand-to-hand throw event, derived from the global sequence.
//!
//! Throws preserve full identity (source, destination, exact fractional
//! value, classification) so the formatters never have to re-derive anything
//! from the pattern.

use crate::types::hand::HandLayout;
use num_rational::Ratio;
use num_traits::ToPrimitive;
use std::fmt;

/// One local throw: a prop leaving `source` on some beat and landing in
/// `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throw {
    /// Hand the prop is thrown from.
    pub source: usize,
    /// Hand the prop lands in: `(source + global) mod numHands`.
    pub destination: usize,
    /// Juggler the destination hand belongs to.
    pub destination_juggler: usize,
    /// Raw per-beat notation value, in global units.
    pub global: u32,
    /// Throw height in local (Prechac) units: `global / numJugglers`, exact.
    pub swap: Ratio<i64>,
    /// True when the prop changes juggler, i.e. `global % numJugglers != 0`.
    pub is_pass: bool,
    /// True when source and destination carry the same side label under the
    /// pattern's hand layout. Only meaningful when `is_pass` is true.
    pub is_diagonal: bool,
}

impl Throw {
    /// Derive a throw from its source hand and global swap value.
    pub fn new(
        source: usize,
        global: u32,
        num_jugglers: usize,
        num_hands: usize,
        layout: HandLayout,
    ) -> Self {
        let destination = (source + global as usize) % num_hands;
        let swap = Ratio::new(global as i64, num_jugglers as i64);
        let is_pass = global as usize % num_jugglers != 0;
        let is_diagonal = layout.side_of(source, num_jugglers)
            == layout.side_of(destination, num_jugglers);
        Throw {
            source,
            destination,
            destination_juggler: destination % num_jugglers,
            global,
            swap,
            is_pass,
            is_diagonal,
        }
    }

    /// Whether notation output must carry an explicit cross marker.
    ///
    /// An even integer part of the throw height means the prop is expected
    /// to land on the same side it left from (even selfs return to the same
    /// hand); an odd one means the opposite side. The marker is required for
    /// passes that deviate from that expectation.
    pub fn requires_cross_sign(&self) -> bool {
        let expected_same_side = self.swap.floor().to_integer() % 2 == 0;
        self.is_pass && self.is_diagonal != expected_same_side
    }

    /// Throw height rendered for notation output: whole values as integers,
    /// fractional ones as decimals with at most two places.
    pub fn swap_str(&self) -> String {
        ratio_str(self.swap)
    }
}

/// Decimal rendering for exact ratios, trimmed of trailing zeros
/// (`3/2` -> "1.5", `5/3` -> "1.67", `4/1` -> "4").
pub(crate) fn ratio_str(value: Ratio<i64>) -> String {
    if value.is_integer() {
        return value.to_integer().to_string();
    }
    let approx = value.to_f64().unwrap_or_default();
    let s = format!("{:.2}", approx);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Throw {
    /// Local-siteswap label: the throw height, plus a letter naming the
    /// destination hand (`a` upward) when the throw is a pass.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.swap_str())?;
        if self.is_pass {
            write!(f, "{}", (b'a' + self.destination as u8) as char)?;
        }
        Ok(())
    }
}
