//! Picks the vehicle a puzzle is about.
//!
//! Daily puzzles are a pure function of the date string; every other mode
//! draws uniformly from the catalog on each call, repeats allowed.

use crate::catalog::CatalogError;
use crate::core::{GameMode, Vehicle};
use rand::Rng;

/// Order-sensitive string hash used to seed the daily puzzle.
///
/// Walks the UTF-16 code units of `date`, accumulating `hash * 31 + unit`
/// with signed 32-bit wraparound, then takes the absolute value. The result
/// is bit-for-bit what the browser version of the game computes, including
/// `i32::MIN`, which maps to `2147483648` rather than overflowing.
///
/// # Example
///
/// ```rust
/// use cardle::selector::daily_seed;
///
/// assert_eq!(daily_seed("2024-01-01"), 613_341_632);
/// assert_eq!(daily_seed(""), 0);
/// ```
pub fn daily_seed(date: &str) -> u32 {
    date.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Catalog position of the daily puzzle for `date`, for a catalog of `len`.
pub fn daily_index(date: &str, len: usize) -> Result<usize, CatalogError> {
    if len == 0 {
        return Err(CatalogError::EmptyCatalog);
    }
    Ok(daily_seed(date) as usize % len)
}

/// Select the puzzle vehicle for `mode`.
///
/// `date` is only consulted in daily mode and `rng` only outside it.
pub fn select_puzzle<R: Rng>(
    mode: GameMode,
    date: &str,
    catalog: &[Vehicle],
    rng: &mut R,
) -> Result<Vehicle, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let index = match mode {
        GameMode::Daily => daily_index(date, catalog.len())?,
        GameMode::Easy | GameMode::Hard => rng.gen_range(0..catalog.len()),
    };
    Ok(catalog[index].clone())
}
