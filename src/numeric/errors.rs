// ============================================================================
// Numeric Errors
// Error types for measurement compression and parsing
// ============================================================================

use std::fmt;

/// The specific reason an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFault {
    /// The value is NaN or infinite
    NonFiniteValue,
    /// The error bar is NaN or infinite
    NonFiniteError,
    /// Fewer than one error digit was requested
    ZeroErrorDigits,
}

/// Errors that can occur while compressing or expanding a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input cannot produce a meaningful compact string
    InvalidInput(InputFault),
    /// Text is not a number or not in `value(error)` notation
    Malformed,
}

impl NumericError {
    /// True for the caller-error class (`InvalidInput`).
    #[inline]
    pub const fn is_invalid_input(self) -> bool {
        matches!(self, NumericError::InvalidInput(_))
    }
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::NonFiniteValue => write!(f, "value is not finite"),
            InputFault::NonFiniteError => write!(f, "errorbar is not finite"),
            InputFault::ZeroErrorDigits => {
                write!(f, "errorbar digits must be at least 1")
            },
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(fault) => write!(f, "invalid input: {}", fault),
            NumericError::Malformed => {
                write!(f, "malformed input: expected a number or value(error) notation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

impl From<InputFault> for NumericError {
    #[inline]
    fn from(fault: InputFault) -> Self {
        NumericError::InvalidInput(fault)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
