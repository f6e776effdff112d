//! Numeric types for shelf-life and quality.
//!
//! Shelf-life is fractional so that every rule shares one field type,
//! including rules that step by half a day. Quality only ever moves by
//! whole points.

/// Days remaining until the sell-by date. May go negative.
pub type Days = f64;

/// Quality score of an item.
pub type Quality = i64;

/// Lowest quality an ordinary item can reach.
pub const MIN_QUALITY: Quality = 0;

/// Highest quality an ordinary item can reach.
pub const MAX_QUALITY: Quality = 50;

/// Fixed quality of legendary items, outside the ordinary range.
pub const LEGENDARY_QUALITY: Quality = 80;

/// Apply a delta and hold the result at or above [`MIN_QUALITY`].
///
/// # Examples
///
/// ```rust
/// use gilded_rose::numeric::floor_quality;
///
/// assert_eq!(floor_quality(10, -2), 8);
/// assert_eq!(floor_quality(1, -4), 0);
/// ```
pub fn floor_quality(quality: Quality, delta: Quality) -> Quality {
    (quality + delta).max(MIN_QUALITY)
}

/// Apply a delta and hold the result at or below [`MAX_QUALITY`].
///
/// Only the ceiling is enforced, so a negative delta can still take
/// the result below zero.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::numeric::cap_quality;
///
/// assert_eq!(cap_quality(10, 1), 11);
/// assert_eq!(cap_quality(49, 2), 50);
/// ```
pub fn cap_quality(quality: Quality, delta: Quality) -> Quality {
    (quality + delta).min(MAX_QUALITY)
}

/// Whether a shelf-life value is still before the sell-by date.
pub(crate) fn before_sell_by(shelf_life: Days) -> bool {
    shelf_life > 0.0
}
