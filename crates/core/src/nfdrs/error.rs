//! Input validation errors for the NFDRS calculator
//!
//! The only failure mode this component has: a malformed observation rejected
//! before any formula runs. Once an observation validates, every downstream
//! formula is defined and clamped over the whole input domain, so no other
//! error class exists.

/// A weather observation field violated its physical range
///
/// Surfaced to the caller immediately; never retried or recovered internally,
/// and never accompanied by a partial result.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    /// Relative humidity outside the valid range [0, 100]
    #[error("relative humidity {0}% is outside the valid range [0, 100]")]
    HumidityOutOfRange(f64),

    /// Negative wind speed
    #[error("wind speed {0} mph is negative")]
    NegativeWindSpeed(f64),

    /// Negative 24-hour precipitation
    #[error("24-hour precipitation {0} in is negative")]
    NegativePrecipitation(f64),

    /// A field is NaN or infinite
    #[error("{field} is not a finite number")]
    NonFinite {
        /// Name of the offending observation field
        field: &'static str,
    },
}
