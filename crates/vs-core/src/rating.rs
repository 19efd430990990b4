//! Aggregate rating arithmetic
//!
//! Ratings are averaged in `f64` and rounded to [`RATING_PLACES`] decimal
//! places. Rounding works on the binary representation, so values that look
//! like exact ties in decimal may round down: `round(2.005, 2)` is `2.0`
//! because `2.005 * 100.0` is `200.49999999999997`.

use crate::error::{Result, VideoshopError};

/// Decimal places kept in an aggregate rating
pub const RATING_PLACES: i32 = 2;

/// Round `value` to `places` decimal places.
///
/// Scales by `10^places` (as a 64-bit integer, saturating), rounds to the
/// nearest integer with ties away from zero, then scales back. Non-finite
/// scaled values collapse to the nearest representable integer; NaN becomes
/// zero.
///
/// # Errors
///
/// Returns [`VideoshopError::InvalidArgument`] if `places` is negative.
pub fn round(value: f64, places: i32) -> Result<f64> {
    if places < 0 {
        return Err(VideoshopError::InvalidArgument(format!(
            "decimal places must be non-negative, got {}",
            places
        )));
    }

    let factor = 10f64.powi(places) as i64;
    let scaled = (value * factor as f64).round() as i64;
    Ok(scaled as f64 / factor as f64)
}

/// Mean of `ratings`, rounded to [`RATING_PLACES`].
///
/// An empty input has no mean; it is reported as `0.0`.
pub fn average<I>(ratings: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r), count + 1));

    if count == 0 {
        return 0.0;
    }

    // RATING_PLACES is a non-negative constant
    round(sum as f64 / count as f64, RATING_PLACES).unwrap_or(0.0)
}

/// Render a rating as a bar of `max` stars.
///
/// Only whole stars are filled: 4.9 out of 5 shows four.
pub fn stars(rating: f64, max: u32) -> String {
    let full = (rating.max(0.0).floor() as u32).min(max);
    let mut bar = String::with_capacity(max as usize * 3);
    for _ in 0..full {
        bar.push('★');
    }
    for _ in full..max {
        bar.push('☆');
    }
    bar
}
