// ============================================================================
// Command-Line Interface
// compress-errorbar VALUE ERROR [ERROR_DIGITS]
// ============================================================================

use crate::compress::compress;
use crate::domain::DEFAULT_ERROR_DIGITS;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

/// Compress a value and its error bar into value(error) notation.
#[derive(Debug, Parser)]
#[command(name = "compress-errorbar", version)]
pub struct CliArgs {
    /// Measured value
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Error bar (uncertainty) of the value
    #[arg(allow_negative_numbers = true)]
    pub error: f64,

    /// Significant digits of the error shown in parentheses
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_ERROR_DIGITS)]
    pub error_digits: u32,
}

/// Process exit classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// Invalid numeric literal or input the compressor rejects
    Failure = 1,
    /// Too few arguments
    Usage = 2,
}

impl ExitStatus {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Parse `args` (program name first), compress, and write the result.
///
/// The compact string goes to `out`; diagnostics go to `err`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match CliArgs::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_error) => return report_parse_error(&parse_error, out, err),
    };

    tracing::debug!(
        value = cli.value,
        error = cli.error,
        error_digits = cli.error_digits,
        "compressing errorbar"
    );

    match compress(cli.value, cli.error, cli.error_digits) {
        Ok(text) => match writeln!(out, "{}", text) {
            Ok(()) => ExitStatus::Success,
            Err(io_error) => {
                tracing::error!(%io_error, "failed to write result");
                ExitStatus::Failure
            },
        },
        Err(numeric_error) => {
            let _ = writeln!(err, "compress-errorbar: {}", numeric_error);
            ExitStatus::Failure
        },
    }
}

fn report_parse_error<O: Write, E: Write>(
    parse_error: &clap::Error,
    out: &mut O,
    err: &mut E,
) -> ExitStatus {
    let rendered = parse_error.render().to_string();
    match parse_error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", rendered);
            ExitStatus::Success
        },
        ErrorKind::MissingRequiredArgument => {
            let _ = write!(err, "{}", rendered);
            ExitStatus::Usage
        },
        _ => {
            let _ = write!(err, "{}", rendered);
            ExitStatus::Failure
        },
    }
}

/// Install a stderr `tracing` subscriber filtered by `ERRORBAR_LOG`
/// (default `warn`).
#[cfg(feature = "logging")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("ERRORBAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (ExitStatus, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv = std::iter::once("compress-errorbar").chain(args.iter().copied());
        let status = run(argv, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_default_digits() {
        let (status, out, err) = run_args(&["1.23456", "0.0067"]);
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "1.2346(67)\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_success_negative_value() {
        let (status, out, _) = run_args(&["-5.0", "0.5", "1"]);
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "-5.0(5)\n");
    }

    #[test]
    fn test_zero_error() {
        let (status, out, _) = run_args(&["7", "0"]);
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_too_few_arguments() {
        let (status, out, err) = run_args(&["1.0"]);
        assert_eq!(status, ExitStatus::Usage);
        assert_eq!(status.code(), 2);
        assert!(out.is_empty());
        assert!(!err.is_empty());

        let (status, _, _) = run_args(&[]);
        assert_eq!(status, ExitStatus::Usage);
    }

    #[test]
    fn test_invalid_literal() {
        let (status, out, err) = run_args(&["abc", "1"]);
        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(status.code(), 1);
        assert!(out.is_empty());
        assert!(!err.is_empty());

        let (status, _, _) = run_args(&["1", "1", "two"]);
        assert_eq!(status, ExitStatus::Failure);
    }

    #[test]
    fn test_invalid_input() {
        let (status, _, err) = run_args(&["1", "1", "0"]);
        assert_eq!(status, ExitStatus::Failure);
        assert!(err.contains("errorbar digits must be at least 1"));

        let (status, _, err) = run_args(&["nan", "1"]);
        assert_eq!(status, ExitStatus::Failure);
        assert!(err.contains("value is not finite"));
    }

    #[test]
    fn test_help() {
        let (status, out, _) = run_args(&["--help"]);
        assert_eq!(status, ExitStatus::Success);
        assert!(out.contains("Usage"));
    }
}
