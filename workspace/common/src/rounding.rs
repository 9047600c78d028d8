//! One-decimal rounding shared by the generator, the slider and the dashboard labels.
//!
//! Values are rounded on their exact binary value with ties going away from zero,
//! which is what a browser's `toFixed(1)` produces. Going through `f64::round` on
//! `x * 10.0` is not equivalent: the multiplication itself can land on a tie.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to one decimal place.
///
/// Non-finite values (and magnitudes outside the decimal range) are returned unchanged.
pub fn round_tenth(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats `value` with exactly one fractional digit.
pub fn format_tenth(value: f64) -> String {
    format!("{:.1}", round_tenth(value))
}
