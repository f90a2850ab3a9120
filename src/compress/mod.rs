// ============================================================================
// Compress Module
// Compact value(error) notation in both directions
// ============================================================================
//
// This module provides:
// - compress / Compressor: value + error -> "1.2346(67)"
// - parse_compact / expand: "1.2346(67)" -> value + error
//
// Value and error are always rounded to the same decimal place, set by the
// error's leading digit and the requested number of error digits.

mod compressor;
mod expand;

pub use compressor::{compress, Compressor};
pub use expand::{expand, expand_line, flatten, parse_compact, Field};
