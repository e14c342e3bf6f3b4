//! Type conversion error types.
//!
//! Failures raised by the driver's own `DATE` codec pass through this crate
//! unchanged as boxed errors; [`DateError`] covers only the conversions this
//! crate adds on top.

use thiserror::Error;

/// Errors from converting between civil dates and the driver's native date
/// representation.
#[derive(Debug, Error)]
pub enum DateError {
    /// The native date falls outside the civil year range (-9999 to 9999).
    #[error("date {date} is out of range for a civil date")]
    OutOfRange {
        /// Display form of the offending date.
        date: String,
    },
}
