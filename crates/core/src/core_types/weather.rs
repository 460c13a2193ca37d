//! Weather observation input record for fire danger calculations
//!
//! A single surface observation from a fire weather station: the four fields
//! the NFDRS formulas consume. Observations are immutable value objects built
//! fresh per calculation request; sourcing them (station feeds, archives) is
//! the caller's concern.

use crate::core_types::units::{Fahrenheit, Inches, MilesPerHour, Percent};
use serde::{Deserialize, Serialize};

/// Weather station observation for fire danger calculations
///
/// Field ranges are enforced by the calculator, not the constructor: relative
/// humidity must lie in [0, 100] and wind speed / precipitation must be
/// non-negative, and violations surface as
/// [`InvalidInputError`](crate::nfdrs::InvalidInputError) when a calculation
/// is requested.
///
/// # Example
/// ```
/// use nfdrs_core::WeatherObservation;
///
/// // Hot, dry, windy afternoon
/// let obs = WeatherObservation::from_raw(95.0, 15.0, 20.0, 0.0);
/// assert!(*obs.relative_humidity < 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Dry-bulb air temperature (°F)
    pub temperature: Fahrenheit,

    /// Relative humidity (%), valid range [0, 100]
    pub relative_humidity: Percent,

    /// 20-foot wind speed (mph), must be non-negative
    pub wind_speed: MilesPerHour,

    /// Precipitation accumulated over the past 24 hours (inches)
    ///
    /// Defaults to zero when absent from serialized input; must be
    /// non-negative.
    #[serde(default)]
    pub precipitation_24h: Inches,
}

impl WeatherObservation {
    /// Create an observation from typed quantities
    #[must_use]
    pub const fn new(
        temperature: Fahrenheit,
        relative_humidity: Percent,
        wind_speed: MilesPerHour,
        precipitation_24h: Inches,
    ) -> Self {
        WeatherObservation {
            temperature,
            relative_humidity,
            wind_speed,
            precipitation_24h,
        }
    }

    /// Create an observation from raw f64 values (°F, %, mph, inches)
    #[must_use]
    pub const fn from_raw(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        precipitation_24h: f64,
    ) -> Self {
        WeatherObservation {
            temperature: Fahrenheit::new(temperature),
            relative_humidity: Percent::new(relative_humidity),
            wind_speed: MilesPerHour::new(wind_speed),
            precipitation_24h: Inches::new(precipitation_24h),
        }
    }
}
