//! Error type for pattern construction.
//!
//! Every failure is a synchronous, fatal-to-the-operation signal. Messages
//! are complete sentences meant to be surfaced to the user verbatim.

use num_rational::Ratio;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternError {
    /// The notation string was empty.
    EmptyNotation,
    /// A character outside `[0-9A-Za-z]` appeared in the notation.
    /// Position is 1-based.
    InvalidCharacter { ch: char, position: usize },
    /// Prop count requested on a zero-length swap sequence.
    EmptySequence,
    /// Two throws land in the same slot. Position is the 1-based beat of
    /// the second claimant.
    Collision { height: u32, position: usize },
    /// The average of the swap values is not a whole number.
    FractionalPropCount { average: Ratio<i64> },
    /// Phase correction went through a full period without finding a pass.
    NoPass,
    /// Fewer jugglers than the pattern model supports.
    TooFewJugglers { given: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyNotation => {
                write!(f, "The siteswap notation must not be empty.")
            }
            PatternError::InvalidCharacter { ch, position } => {
                write!(
                    f,
                    "Invalid character '{}' at position {} in the siteswap notation.",
                    ch, position
                )
            }
            PatternError::EmptySequence => {
                write!(
                    f,
                    "Unable to calculate the number of props: the swap sequence is empty."
                )
            }
            PatternError::Collision { height, position } => {
                write!(
                    f,
                    "Two throws land in the same slot: height {} at position {}.",
                    height, position
                )
            }
            PatternError::FractionalPropCount { average } => {
                write!(
                    f,
                    "The pattern does not use a whole number of props (average {}).",
                    average
                )
            }
            PatternError::NoPass => {
                write!(f, "The pattern contains no passes: every throw is a self.")
            }
            PatternError::TooFewJugglers { given } => {
                write!(f, "A pattern needs at least 1 juggler, got {}.", given)
            }
        }
    }
}

impl std::error::Error for PatternError {}
