//! Effective reach derivation.

use super::error::PlinthError;
use super::types::{Level, MAX_LEVEL};

/// Reach multiplier per structural level. Length is tied to `MAX_LEVEL + 1`.
pub const REACH_MULTIPLIERS: [i64; MAX_LEVEL as usize + 1] = [1, 3, 8, 16, 27];

/// `base_reach` scaled by the multiplier for `level`.
///
/// A level outside `0..=MAX_LEVEL` cannot come out of a correct scan; it is
/// reported as an error rather than clamped.
pub fn effective_reach(level: Level, base_reach: i64) -> Result<i64, PlinthError> {
    if level > MAX_LEVEL {
        return Err(PlinthError::LevelOutOfRange { level });
    }
    Ok(base_reach * REACH_MULTIPLIERS[level as usize])
}
