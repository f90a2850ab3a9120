// ============================================================================
// Numeric Module
// Decimal decomposition, rounding and rendering of doubles
// ============================================================================
//
// This module provides:
// - DecimalDigits: sign / significant digits / decimal exponent of an f64
// - NumericError: Error types for compression and parsing
//
// Design principles:
// - Rounding works on the shortest round-trip decimal digits, never on
//   binary float arithmetic
// - Round half away from zero everywhere
// - All fallible operations return Result (no panics)

mod digits;
mod errors;

pub use digits::DecimalDigits;
pub use errors::{InputFault, NumericError, NumericResult};
