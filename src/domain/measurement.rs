// ============================================================================
// Measurement Domain Model
// A value with its error bar, plus uncorrelated error propagation
// ============================================================================

use crate::compress::{compress, parse_compact};
use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};
use std::str::FromStr;

use super::DEFAULT_ERROR_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A measured value together with its (non-negative) uncertainty.
///
/// Converting to `f64` yields the mean; `Display` yields the compact
/// `value(error)` form with two error digits.
///
/// # Example
/// ```
/// use errorbar::domain::Measurement;
///
/// let m = Measurement::new(100.2, 3.5);
/// assert_eq!(m.to_string(), "100.2(35)");
///
/// let doubled = m * 2.0;
/// assert_eq!(doubled.to_string(), "200.4(70)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Central value
    pub value: f64,

    /// Uncertainty (stored as a magnitude)
    pub error: f64,
}

impl Measurement {
    /// Create a measurement. A negative error is stored as its magnitude.
    #[inline]
    pub fn new(value: f64, error: f64) -> Self {
        Self {
            value,
            error: error.abs(),
        }
    }

    /// A measurement with no uncertainty.
    #[inline]
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn error(&self) -> f64 {
        self.error
    }

    /// Compact `value(error)` string with `error_digits` error digits.
    ///
    /// # Errors
    /// `InvalidInput` if either number is non-finite or `error_digits` is 0.
    pub fn compress(&self, error_digits: u32) -> NumericResult<String> {
        compress(self.value, self.error, error_digits)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Measurement> for f64 {
    #[inline]
    fn from(m: Measurement) -> f64 {
        m.value
    }
}

impl From<(f64, f64)> for Measurement {
    #[inline]
    fn from((value, error): (f64, f64)) -> Self {
        Self::new(value, error)
    }
}

impl FromStr for Measurement {
    type Err = NumericError;

    /// Parse compact notation, e.g. `"1.2346(67)"` or `"6.02(3)e23"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_compact(s)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compress(DEFAULT_ERROR_DIGITS) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{} +- {}", self.value, self.error),
        }
    }
}

// ============================================================================
// Scalar Arithmetic
// ============================================================================

impl Mul<f64> for Measurement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs, self.error * rhs.abs())
    }
}

impl Mul<Measurement> for f64 {
    type Output = Measurement;

    #[inline]
    fn mul(self, rhs: Measurement) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Measurement {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Measurement {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.value / rhs, self.error / rhs.abs())
    }
}

impl DivAssign<f64> for Measurement {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// Shifting by an exact scalar leaves the error untouched
impl Add<f64> for Measurement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.value + rhs, self.error)
    }
}

impl Add<Measurement> for f64 {
    type Output = Measurement;

    #[inline]
    fn add(self, rhs: Measurement) -> Self::Output {
        rhs + self
    }
}

impl Sub<f64> for Measurement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.value - rhs, self.error)
    }
}

impl Sub<Measurement> for f64 {
    type Output = Measurement;

    #[inline]
    fn sub(self, rhs: Measurement) -> Self::Output {
        Measurement::new(self - rhs.value, rhs.error)
    }
}

impl Neg for Measurement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.error)
    }
}

// ============================================================================
// Measurement Arithmetic (uncorrelated errors add in quadrature)
// ============================================================================

impl Add for Measurement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value, self.error.hypot(rhs.error))
    }
}

impl Sub for Measurement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value, self.error.hypot(rhs.error))
    }
}

// ============================================================================
// Tests
// ============================================================================
