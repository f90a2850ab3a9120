// ============================================================================
// Errorbar Compressor
// value + error -> "value(error digits)"
// ============================================================================

use crate::domain::{Measurement, DEFAULT_ERROR_DIGITS};
use crate::numeric::{DecimalDigits, InputFault, NumericResult};

/// Compress a value and its error bar into compact notation.
///
/// The error is rounded to `error_digits` significant digits, the value is
/// rounded to the same decimal place, and the error digits are appended in
/// parentheses: `compress(1.23456, 0.0067, 2)` gives `"1.2346(67)"`.
///
/// Both numbers are rounded half away from zero on their shortest
/// round-trip decimal digits. If rounding the error carries into a new
/// leading digit (`0.96` with one digit), the decimal place is taken from
/// the rounded error, so exactly `error_digits` digits are always shown.
///
/// A zero error yields the plain shortest rendering of `value`, without
/// parentheses. The sign of `error` is ignored; the sign of `value` is
/// always kept.
///
/// # Errors
/// `InvalidInput` if `value` or `error` is NaN/infinite, or
/// `error_digits` is 0.
pub fn compress(value: f64, error: f64, error_digits: u32) -> NumericResult<String> {
    if !value.is_finite() {
        return Err(InputFault::NonFiniteValue.into());
    }
    if !error.is_finite() {
        return Err(InputFault::NonFiniteError.into());
    }
    if error_digits < 1 {
        return Err(InputFault::ZeroErrorDigits.into());
    }

    let magnitude = error.abs();
    if magnitude == 0.0 {
        tracing::trace!(value, "zero errorbar, rendering value only");
        return Ok(value.to_string());
    }

    let shown = i64::from(error_digits);
    let err = DecimalDigits::from_f64(magnitude)?;

    let mut place = err.exponent() - (shown - 1);
    let mut rounded_err = err.round_to_place(place);
    if rounded_err.exponent() > err.exponent() {
        place = rounded_err.exponent() - (shown - 1);
        tracing::debug!(
            error,
            error_digits,
            place,
            "errorbar rounding carried into a new leading digit"
        );
        rounded_err = err.round_to_place(place);
    }

    let rounded_value = DecimalDigits::from_f64(value)?.round_to_place(place);
    let frac_digits = usize::try_from(-place).unwrap_or(0);

    let body = rounded_value.to_fixed(frac_digits);
    let suffix = rounded_err.digits_between(place + shown - 1, place);

    let mut out = String::with_capacity(body.len() + suffix.len() + 3);
    if rounded_value.is_negative() {
        out.push('-');
    }
    out.push_str(&body);
    out.push('(');
    out.push_str(&suffix);
    out.push(')');

    tracing::trace!(value, error, error_digits, place, compact = %out, "compressed errorbar");
    Ok(out)
}

/// Compressor with a configured default number of error digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compressor {
    error_digits: u32,
}

impl Compressor {
    /// Compressor showing two error digits.
    pub const fn new() -> Self {
        Self {
            error_digits: DEFAULT_ERROR_DIGITS,
        }
    }

    /// Builder method: Set the default number of error digits
    pub const fn with_error_digits(mut self, error_digits: u32) -> Self {
        self.error_digits = error_digits;
        self
    }

    #[inline]
    pub const fn error_digits(&self) -> u32 {
        self.error_digits
    }

    /// Compress with the configured digit count.
    pub fn compress(&self, value: f64, error: f64) -> NumericResult<String> {
        compress(value, error, self.error_digits)
    }

    /// Compress with an explicit digit count for this call only.
    pub fn compress_with(&self, value: f64, error: f64, error_digits: u32) -> NumericResult<String> {
        compress(value, error, error_digits)
    }

    pub fn compress_measurement(&self, measurement: &Measurement) -> NumericResult<String> {
        measurement.compress(self.error_digits)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
