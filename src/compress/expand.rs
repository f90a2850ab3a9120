// ============================================================================
// Errorbar Expansion
// "value(error)" text -> Measurement
// ============================================================================

use crate::domain::Measurement;
use crate::numeric::{NumericError, NumericResult};

/// One expanded text field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Field in `value(error)` notation
    Measurement(Measurement),
    /// Plain number (only produced with `convert_float`)
    Number(f64),
    /// Anything else, passed through trimmed
    Text(String),
}

#[inline]
fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse compact errorbar notation back into a measurement.
///
/// Accepted forms: `1.2346(67)`, `-5.0(5)`, `12350(35)`, `6.02(3)e23`.
/// The parenthesized digits count in units of the value's last digit, so
/// `1.2346(67)` has error `0.0067`. An error written with its own decimal
/// point (`1234.5(1.2)`) is taken as an absolute error. A trailing exponent
/// scales both value and error.
///
/// # Errors
/// `Malformed` if the text does not match the notation, or a number
/// overflows.
pub fn parse_compact(text: &str) -> NumericResult<Measurement> {
    let s = text.trim();

    let open = s.find('(').ok_or(NumericError::Malformed)?;
    let close = s[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or(NumericError::Malformed)?;

    let mantissa = &s[..open];
    let err_text = &s[open + 1..close];
    let exp_text = &s[close + 1..];

    // Value mantissa: [+-]?DIGITS(.DIGITS*)?
    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !all_digits(int_part) {
        return Err(NumericError::Malformed);
    }
    let frac_digits = match frac_part {
        Some(f) if all_digits(f) => f.len(),
        Some(_) => return Err(NumericError::Malformed),
        None => 0,
    };

    // Exponent: ([eE][+-]?DIGITS)?
    let exponent: i64 = if exp_text.is_empty() {
        0
    } else {
        let exp = exp_text
            .strip_prefix(['e', 'E'])
            .ok_or(NumericError::Malformed)?;
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if digits.is_empty() || !all_digits(digits) {
            return Err(NumericError::Malformed);
        }
        exp.parse().map_err(|_| NumericError::Malformed)?
    };

    // Error: DIGITS(.DIGITS*)?
    let (err_int, err_frac) = match err_text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (err_text, None),
    };
    if err_int.is_empty() || !all_digits(err_int) || !err_frac.map_or(true, all_digits) {
        return Err(NumericError::Malformed);
    }

    let err_exponent = if err_frac.is_some() {
        exponent
    } else {
        i64::try_from(frac_digits)
            .ok()
            .and_then(|f| exponent.checked_sub(f))
            .ok_or(NumericError::Malformed)?
    };

    let value = parse_scaled(mantissa, exponent)?;
    let error = parse_scaled(err_text, err_exponent)?;

    Ok(Measurement::new(value, error))
}

// Decimal text times 10^exponent, correctly rounded by the float parser
fn parse_scaled(digits: &str, exponent: i64) -> NumericResult<f64> {
    let x: f64 = format!("{}e{}", digits, exponent)
        .parse()
        .map_err(|_| NumericError::Malformed)?;
    if x.is_finite() {
        Ok(x)
    } else {
        Err(NumericError::Malformed)
    }
}

/// Expand a sequence of text fields.
///
/// Fields in compact notation become [`Field::Measurement`]. Other fields
/// are passed through as [`Field::Text`], or, with `convert_float`, parsed
/// as plain numbers.
///
/// # Errors
/// With `convert_float`, `Malformed` for the first field that is neither
/// compact notation nor a number.
pub fn expand<'a, I>(fields: I, convert_float: bool) -> NumericResult<Vec<Field>>
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .map(|raw| {
            let field = raw.trim();
            if let Ok(measurement) = parse_compact(field) {
                return Ok(Field::Measurement(measurement));
            }
            if convert_float {
                field
                    .parse::<f64>()
                    .map(Field::Number)
                    .map_err(|_| NumericError::Malformed)
            } else {
                tracing::trace!(field, "field is not in errorbar notation");
                Ok(Field::Text(field.to_string()))
            }
        })
        .collect()
}

/// Expand a whitespace-separated line, e.g. a row of a results table.
pub fn expand_line(line: &str, convert_float: bool) -> NumericResult<Vec<Field>> {
    expand(line.split_whitespace(), convert_float)
}

/// Flatten expanded fields into numbers: a measurement contributes its
/// value followed by its error.
///
/// # Errors
/// `Malformed` if any field is text.
pub fn flatten(fields: &[Field]) -> NumericResult<Vec<f64>> {
    let mut out = Vec::with_capacity(fields.len() * 2);
    for field in fields {
        match field {
            Field::Measurement(m) => {
                out.push(m.value());
                out.push(m.error());
            },
            Field::Number(x) => out.push(*x),
            Field::Text(_) => return Err(NumericError::Malformed),
        }
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    fn parse(text: &str) -> (f64, f64) {
        let m = parse_compact(text).unwrap();
        (m.value(), m.error())
    }

    #[test]
    fn test_parse_fractional() {
        let (v, e) = parse("1.2346(67)");
        assert_eq!(v, 1.2346);
        assert!(close(e, 0.0067));

        let (v, e) = parse("-5.0(5)");
        assert_eq!(v, -5.0);
        assert!(close(e, 0.5));
    }

    #[test]
    fn test_parse_integer_value() {
        let (v, e) = parse("12350(35)");
        assert_eq!(v, 12350.0);
        assert_eq!(e, 35.0);

        let (v, e) = parse("+12(1)");
        assert_eq!(v, 12.0);
        assert_eq!(e, 1.0);
    }

    #[test]
    fn test_parse_exponent() {
        let (v, e) = parse("6.02(3)e23");
        assert!(close(v, 6.02e23));
        assert!(close(e, 0.03e23));

        let (v, e) = parse("1.5(2)E-5");
        assert!(close(v, 1.5e-5));
        assert!(close(e, 0.2e-5));
    }

    #[test]
    fn test_parse_absolute_error() {
        let (v, e) = parse("1234.5(1.2)");
        assert_eq!(v, 1234.5);
        assert!(close(e, 1.2));
    }

    #[test]
    fn test_parse_whitespace() {
        let (v, _) = parse("  3.14(10) \n");
        assert_eq!(v, 3.14);
    }

    #[test]
    fn test_parse_malformed() {
        for bad in [
            "",
            "1.5",
            "(5)",
            "1.5(",
            "1.5()",
            "1.5(x)",
            "a.5(5)",
            "1.5(5)e",
            "1.5(5)x3",
            "1.5(-5)",
            "1.5(5) trailing",
            "1(1)e999",
        ] {
            assert_eq!(parse_compact(bad), Err(NumericError::Malformed), "{bad:?}");
        }
    }

    #[test]
    fn test_expand_passthrough() {
        let fields = expand(["1.5(2)", " label ", "3.0"], false).unwrap();
        assert_eq!(fields.len(), 3);
        assert!(matches!(fields[0], Field::Measurement(_)));
        assert_eq!(fields[1], Field::Text("label".to_string()));
        assert_eq!(fields[2], Field::Text("3.0".to_string()));
    }

    #[test]
    fn test_expand_convert_float() {
        let fields = expand_line("0.25 1.5(2) -7", true).unwrap();
        assert_eq!(fields[0], Field::Number(0.25));
        assert_eq!(fields[2], Field::Number(-7.0));

        let flat = flatten(&fields).unwrap();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[1], 1.5);
        assert!(close(flat[2], 0.2));

        assert_eq!(expand_line("1.0 oops", true), Err(NumericError::Malformed));
    }

    #[test]
    fn test_flatten_rejects_text() {
        let fields = expand(["x"], false).unwrap();
        assert_eq!(flatten(&fields), Err(NumericError::Malformed));
    }
}
