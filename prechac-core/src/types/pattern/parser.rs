//! Notation parser: digit/letter string -> global swap values.

use crate::error::PatternError;

/// Parse a siteswap notation string into one global swap value per beat.
///
/// Digits `0`-`9` map to 0-9; letters map case-insensitively to
/// `10 + alphabetic position` (`a` -> 10, `b` -> 11, ... `z` -> 35). Any
/// other character is rejected.
pub fn parse_swaps(notation: &str) -> Result<Vec<u32>, PatternError> {
    if notation.is_empty() {
        return Err(PatternError::EmptyNotation);
    }

    let mut swaps = Vec::with_capacity(notation.len());
    for (i, ch) in notation.chars().enumerate() {
        let value = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => 10 + (ch as u32 - 'a' as u32),
            'A'..='Z' => 10 + (ch as u32 - 'A' as u32),
            _ => {
                return Err(PatternError::InvalidCharacter {
                    ch,
                    position: i + 1,
                })
            }
        };
        swaps.push(value);
    }

    Ok(swaps)
}
