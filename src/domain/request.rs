// ============================================================================
// Format Request
// A measurement plus the number of error digits to show
// ============================================================================

use crate::numeric::{InputFault, NumericResult};

use super::{Measurement, DEFAULT_ERROR_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to produce one compact string.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatRequest {
    /// The measurement to render
    pub measurement: Measurement,

    /// Significant digits of the error shown in parentheses (>= 1)
    #[cfg_attr(feature = "serde", serde(default = "default_error_digits"))]
    pub error_digits: u32,
}

#[cfg(feature = "serde")]
fn default_error_digits() -> u32 {
    DEFAULT_ERROR_DIGITS
}

impl FormatRequest {
    /// Create a request with the default two error digits
    pub fn new(measurement: Measurement) -> Self {
        Self {
            measurement,
            error_digits: DEFAULT_ERROR_DIGITS,
        }
    }

    /// Builder method: Set the number of error digits
    pub fn with_error_digits(mut self, error_digits: u32) -> Self {
        self.error_digits = error_digits;
        self
    }

    /// Validate the request
    pub fn validate(&self) -> NumericResult<()> {
        if !self.measurement.value.is_finite() {
            return Err(InputFault::NonFiniteValue.into());
        }
        if !self.measurement.error.is_finite() {
            return Err(InputFault::NonFiniteError.into());
        }
        if self.error_digits < 1 {
            return Err(InputFault::ZeroErrorDigits.into());
        }
        Ok(())
    }

    /// Produce the compact string.
    pub fn render(&self) -> NumericResult<String> {
        self.validate()?;
        self.measurement.compress(self.error_digits)
    }
}

impl From<Measurement> for FormatRequest {
    fn from(measurement: Measurement) -> Self {
        Self::new(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_defaults() {
        let request = FormatRequest::new(Measurement::new(1.0, 0.1));
        assert_eq!(request.error_digits, 2);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_render() {
        let request = FormatRequest::from(Measurement::new(-5.0, 0.5)).with_error_digits(1);
        assert_eq!(request.render().unwrap(), "-5.0(5)");
    }

    #[test]
    fn test_validate_rejects() {
        let zero_digits = FormatRequest::new(Measurement::new(1.0, 1.0)).with_error_digits(0);
        assert_eq!(
            zero_digits.validate(),
            Err(NumericError::InvalidInput(InputFault::ZeroErrorDigits))
        );

        let inf_error = FormatRequest::new(Measurement::new(1.0, f64::INFINITY));
        assert_eq!(
            inf_error.render(),
            Err(NumericError::InvalidInput(InputFault::NonFiniteError))
        );

        let nan_value = FormatRequest::new(Measurement::new(f64::NAN, 1.0));
        assert_eq!(
            nan_value.validate(),
            Err(NumericError::InvalidInput(InputFault::NonFiniteValue))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_default_digits() {
        let request: FormatRequest =
            serde_json::from_str(r#"{"measurement":{"value":1.5,"error":0.25}}"#).unwrap();
        assert_eq!(request.error_digits, 2);
        assert_eq!(request.render().unwrap(), "1.50(25)");
    }
}
