//! Common utility functions for calculator handlers.
//!
//! Every number a handler puts into a [`CalculationResult`] passes through
//! one of the formatters here. They reject NaN and infinities, which is how
//! an undefined formula (division by zero, log of a non-positive number,
//! square root of a negative) turns into a [`CalculationError`] instead of a
//! nonsensical display string.
//!
//! [`CalculationResult`]: crate::models::CalculationResult

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors a handler can raise while evaluating its formula.
#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    /// A quantity that must be displayed or charted is NaN or infinite.
    #[error("value is not a finite number: {0}")]
    NonFinite(f64),

    /// A chart or trend point carries a NaN or infinite magnitude.
    #[error("chart data contains a non-finite value")]
    UnchartableSeries,
}

/// Result type returned by every handler.
pub type Outcome = Result<crate::models::CalculationResult, CalculationError>;

/// Passes `value` through unchanged if it is finite.
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn finite(value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite(value))
    }
}

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454), 2), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds through [`Decimal`] when the value fits, so that `1.005` rounds
/// the way it reads rather than the way it is stored in binary.
fn rounded(
    value: f64,
    dp: u32,
) -> Option<Decimal> {
    let mut decimal = round_half_up(Decimal::try_from(value).ok()?, dp);
    if decimal.is_zero() {
        decimal.set_sign_positive(true);
    }
    Some(decimal)
}

/// Formats with exactly `dp` fraction digits (`12.5` → `"12.50"`).
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn fixed(
    value: f64,
    dp: u32,
) -> Result<String, CalculationError> {
    let value = finite(value)?;
    let precision = dp as usize;
    Ok(match rounded(value, dp) {
        Some(decimal) => format!("{decimal:.precision$}"),
        None => format!("{value:.precision$}"),
    })
}

/// `$` followed by [`fixed`] with two fraction digits.
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn money(value: f64) -> Result<String, CalculationError> {
    Ok(format!("${}", fixed(value, 2)?))
}

/// Formats with thousands separators and at most `max_fraction` fraction
/// digits, dropping trailing zeros (`1234567.891` → `"1,234,567.891"`).
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn grouped(
    value: f64,
    max_fraction: u32,
) -> Result<String, CalculationError> {
    let value = finite(value)?;
    let (negative, digits) = match rounded(value, max_fraction) {
        Some(decimal) => (
            decimal.is_sign_negative(),
            decimal.abs().normalize().to_string(),
        ),
        None => (value < 0.0, format!("{:.0}", value.abs())),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    Ok(out)
}

/// `$` followed by [`grouped`].
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn money_grouped(
    value: f64,
    max_fraction: u32,
) -> Result<String, CalculationError> {
    Ok(format!("${}", grouped(value, max_fraction)?))
}

/// Shortest text that reads back as the same number (`3.0` → `"3"`,
/// `2.5` → `"2.5"`).
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] for NaN and infinities.
pub fn plain(value: f64) -> Result<String, CalculationError> {
    let value = finite(value)?;
    if value == 0.0 {
        return Ok("0".to_string());
    }
    Ok(value.to_string())
}

/// Text shown in place of a secondary figure that has no finite value.
pub const NOT_AVAILABLE: &str = "n/a";

/// Keeps a formatted side figure, or [`NOT_AVAILABLE`] when it is undefined.
///
/// For details and steps only; a headline that fails to format should still
/// fail the calculation.
pub fn or_not_available(formatted: Result<String, CalculationError>) -> String {
    formatted.unwrap_or_else(|_| NOT_AVAILABLE.to_string())
}

/// Nearest whole number, with halves rounded toward positive infinity
/// (`2.5` → `3`, `-2.5` → `-2`).
pub fn round_nearest(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
