// ============================================================================
// Errorbar Library
// Compact value(error) notation for measurements with uncertainties
// ============================================================================

//! # Errorbar
//!
//! Compresses a measured value and its uncertainty into the compact form used
//! in scientific reporting, where the parenthesized digits are the error
//! aligned with the last shown digit of the value.
//!
//! ## Features
//!
//! - **Exact decimal rounding** on the shortest round-trip digits of an f64
//! - **Round half away from zero** for both value and error
//! - **Carry handling** so the error always shows the requested digit count
//! - **Expansion** of `value(error)` text back into numbers
//! - **Error propagation** for scaled and summed measurements
//!
//! ## Example
//!
//! ```rust
//! use errorbar::prelude::*;
//!
//! assert_eq!(compress(1.23456, 0.0067, 2).unwrap(), "1.2346(67)");
//! assert_eq!(compress(-5.0, 0.5, 1).unwrap(), "-5.0(5)");
//! assert_eq!(compress(7.0, 0.0, 2).unwrap(), "7");
//!
//! let m: Measurement = "100.2(35)".parse().unwrap();
//! let total = m + Measurement::new(0.8, 1.2);
//! println!("total: {}", total);
//! ```

pub mod cli;
pub mod compress;
pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::compress::{compress, expand, flatten, parse_compact, Compressor, Field};
    pub use crate::domain::{FormatRequest, Measurement, DEFAULT_ERROR_DIGITS};
    pub use crate::numeric::{InputFault, NumericError, NumericResult};
}
