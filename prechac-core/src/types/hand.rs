//! Hand sides and the juggler-count-dependent hand layout policies.
//!
//! Hands are numbered `0..numHands` with two hands per juggler; the hand at
//! index `h` belongs to juggler `h % numJugglers`. A layout policy assigns a
//! physical side to each hand index. Which policy is in effect is a labeling
//! convention only: flipping it never changes a throw's numeric value, just
//! which passes count as diagonal.

use std::fmt;

/// Number of hands each juggler contributes to the pattern.
pub const HANDS_PER_JUGGLER: usize = 2;

/// Physical side of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Single-letter label used in renderings.
    pub fn letter(self) -> char {
        match self {
            Side::Right => 'R',
            Side::Left => 'L',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Hand-to-side assignment policy.
///
/// *Even* groups all right hands before all left hands
/// (`R R .. L L ..`); *odd* alternates sides per index (`R L R L ..`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandLayout {
    Even,
    Odd,
}

impl HandLayout {
    /// Layout selected automatically from the juggler count: even layout
    /// when the count is a multiple of 2, odd layout otherwise.
    pub fn default_for(num_jugglers: usize) -> Self {
        if num_jugglers % 2 == 0 {
            HandLayout::Even
        } else {
            HandLayout::Odd
        }
    }

    /// The opposite policy.
    pub fn flipped(self) -> Self {
        match self {
            HandLayout::Even => HandLayout::Odd,
            HandLayout::Odd => HandLayout::Even,
        }
    }

    /// Side of hand index `hand` under this policy.
    pub fn side_of(self, hand: usize, num_jugglers: usize) -> Side {
        match self {
            HandLayout::Even => {
                if hand < num_jugglers {
                    Side::Right
                } else {
                    Side::Left
                }
            }
            HandLayout::Odd => {
                if hand % 2 == 0 {
                    Side::Right
                } else {
                    Side::Left
                }
            }
        }
    }

    /// Full assignment table for `2 * num_jugglers` hands.
    pub fn sides(self, num_jugglers: usize) -> Vec<Side> {
        (0..num_jugglers * HANDS_PER_JUGGLER)
            .map(|hand| self.side_of(hand, num_jugglers))
            .collect()
    }
}
