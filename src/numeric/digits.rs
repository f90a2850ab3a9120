// ============================================================================
// Decimal Digits
// Sign / significant-digit / exponent decomposition of an f64
// ============================================================================

use super::errors::{InputFault, NumericError, NumericResult};
use smallvec::SmallVec;

/// Inline capacity of the digit buffer. The shortest round-trip form of an
/// f64 never exceeds 17 significant digits, plus one for a rounding carry.
const DIGIT_CAPACITY: usize = 24;

type DigitBuf = SmallVec<[u8; DIGIT_CAPACITY]>;

/// Decimal decomposition of a finite double.
///
/// Holds the significant digits of the shortest decimal representation that
/// round-trips to the same `f64`, most significant first. Digit `i` sits at
/// decimal place `exponent - i`, i.e. it is worth `d_i × 10^(exponent - i)`.
///
/// Zero is represented by an empty digit buffer. Trailing zero digits are
/// never stored.
///
/// # Example
/// ```
/// use errorbar::numeric::DecimalDigits;
///
/// let d = DecimalDigits::from_f64(0.0067).unwrap();
/// assert_eq!(d.digits(), &[6, 7]);
/// assert_eq!(d.exponent(), -3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDigits {
    negative: bool,
    digits: DigitBuf,
    exponent: i64,
}

impl DecimalDigits {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero with the given sign.
    #[inline]
    pub fn zero(negative: bool) -> Self {
        Self {
            negative,
            digits: DigitBuf::new(),
            exponent: 0,
        }
    }

    /// Decompose a finite double.
    ///
    /// The sign bit is kept, so `-0.0` decomposes to a negative zero.
    ///
    /// # Errors
    /// Returns `InvalidInput(NonFiniteValue)` for NaN or infinities.
    pub fn from_f64(x: f64) -> NumericResult<Self> {
        if !x.is_finite() {
            return Err(InputFault::NonFiniteValue.into());
        }

        let negative = x.is_sign_negative();

        // LowerExp without a precision is the shortest round-trip form,
        // e.g. "1.23456e0", "5e-1", "0e0".
        let text = format!("{:e}", x.abs());
        let (mantissa, exp) = text.split_once('e').ok_or(NumericError::Malformed)?;
        let exponent: i64 = exp.parse().map_err(|_| NumericError::Malformed)?;

        let mut digits: DigitBuf = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        while digits.last() == Some(&0) {
            digits.pop();
        }

        if digits.is_empty() {
            return Ok(Self::zero(negative));
        }

        Ok(Self {
            negative,
            digits,
            exponent,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Significant digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Decimal place of the leading digit (`floor(log10(|x|))` for nonzero x).
    #[inline]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Sign bit of the source value (true for `-0.0` as well).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The digit at decimal place `place` (0 outside the stored digits).
    #[inline]
    pub fn digit_at(&self, place: i64) -> u8 {
        let index = self.exponent - place;
        if index < 0 {
            return 0;
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(0)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round the magnitude to decimal place `place`, half away from zero.
    ///
    /// Only digits at places `>= place` survive. A carry out of the leading
    /// digit raises the exponent by one (`9.996` at place -2 becomes `10`).
    /// The sign is kept even when the result is zero.
    pub fn round_to_place(&self, place: i64) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        // Number of leading digits at or above `place`
        let keep = self.exponent - place + 1;

        if keep < 0 {
            return Self::zero(self.negative);
        }
        if keep == 0 {
            // Every digit lies below `place`; only the first one decides.
            return if self.digits[0] >= 5 {
                Self {
                    negative: self.negative,
                    digits: smallvec::smallvec![1],
                    exponent: place,
                }
            } else {
                Self::zero(self.negative)
            };
        }

        let keep = match usize::try_from(keep) {
            Ok(k) if k < self.digits.len() => k,
            _ => return self.clone(),
        };

        let mut digits: DigitBuf = SmallVec::from_slice(&self.digits[..keep]);
        let mut exponent = self.exponent;

        if self.digits[keep] >= 5 {
            let mut i = keep;
            loop {
                if i == 0 {
                    digits.insert(0, 1);
                    exponent += 1;
                    break;
                }
                i -= 1;
                if digits[i] == 9 {
                    digits[i] = 0;
                } else {
                    digits[i] += 1;
                    break;
                }
            }
        }

        while digits.last() == Some(&0) {
            digits.pop();
        }

        Self {
            negative: self.negative,
            digits,
            exponent,
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the magnitude in fixed-point notation with exactly
    /// `frac_digits` digits after the decimal point (no point when zero).
    ///
    /// The sign is not rendered. Digits below place `-frac_digits` are
    /// dropped, so round first.
    pub fn to_fixed(&self, frac_digits: usize) -> String {
        let top = self.exponent.max(0);
        let mut out = String::with_capacity(top as usize + frac_digits + 2);

        for place in (0..=top).rev() {
            out.push(char::from(b'0' + self.digit_at(place)));
        }

        if frac_digits > 0 {
            out.push('.');
            for place in 1..=frac_digits as i64 {
                out.push(char::from(b'0' + self.digit_at(-place)));
            }
        }

        out
    }

    /// The digits at decimal places `high` down to `low` inclusive, zero
    /// padded. Empty when `high < low`.
    pub fn digits_between(&self, high: i64, low: i64) -> String {
        if high < low {
            return String::new();
        }
        (low..=high)
            .rev()
            .map(|place| char::from(b'0' + self.digit_at(place)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
