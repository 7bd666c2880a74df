//! Siteswap well-formedness checks.

use crate::error::PatternError;
use num_rational::Ratio;

/// Verify the landing schedule by simulating one full period: each throw at
/// beat `i` lands in slot `(i + value) mod period`, and no slot may be
/// claimed twice. The reported position is the 1-based beat of the second
/// claimant.
pub fn check_collisions(swaps: &[u32]) -> Result<(), PatternError> {
    let period = swaps.len();
    let mut landing = vec![false; period];

    for (i, &value) in swaps.iter().enumerate() {
        let slot = (i + value as usize) % period;
        if landing[slot] {
            return Err(PatternError::Collision {
                height: value,
                position: i + 1,
            });
        }
        landing[slot] = true;
    }

    Ok(())
}

/// Exact average of the swap values, which is the pattern's prop count when
/// it is a whole number. Wholeness is a construction precondition checked by
/// the `Pattern` constructor, not here.
pub fn average_props(swaps: &[u32]) -> Result<Ratio<i64>, PatternError> {
    if swaps.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    let total: i64 = swaps.iter().map(|&v| v as i64).sum();
    Ok(Ratio::new(total, swaps.len() as i64))
}
