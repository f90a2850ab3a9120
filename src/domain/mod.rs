// ============================================================================
// Domain Models Module
// Measurements and format requests
// ============================================================================

pub mod measurement;
pub mod request;

pub use measurement::Measurement;
pub use request::FormatRequest;

/// Error digits shown when the caller does not choose
pub const DEFAULT_ERROR_DIGITS: u32 = 2;
