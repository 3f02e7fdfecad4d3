//! Numeric presentation helpers
//!
//! Derived metrics are reported at fixed precision (void ratio to 2 places,
//! CBR and bearing capacity to 1 place) so that repeated evaluations and
//! rendered reports agree digit for digit.

/// Round to a fixed number of decimal places (half away from zero).
///
/// Non-finite values pass through unchanged.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Clamp that maps NaN to the lower bound instead of propagating it.
///
/// Malformed inputs should degrade to a bounded number, never to NaN.
#[inline]
pub fn clamp_or_low(value: f64, low: f64, high: f64) -> f64 {
    if value.is_nan() {
        low
    } else {
        value.clamp(low, high)
    }
}
