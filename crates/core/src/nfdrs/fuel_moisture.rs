//! 1-hour dead fuel moisture from surface weather
//!
//! Fine dead fuels (grass, litter, twigs under 1/4 inch) equilibrate with the
//! air within about an hour, so their moisture content can be estimated
//! directly from a single temperature/humidity observation. This is the
//! primary ignition-likelihood driver in NFDRS.
//!
//! # Scientific References
//! - Fosberg, M.A. & Deeming, J.E. (1971). "Derivation of the 1- and 10-hour
//!   timelag fuel moisture calculations", USDA Forest Service RM-207
//! - Deeming, J.E. et al. (1977). "The National Fire-Danger Rating System — 1978"

use crate::core_types::units::Percent;
use crate::core_types::weather::WeatherObservation;
use crate::nfdrs::error::InvalidInputError;
use crate::nfdrs::validate_observation;

/// Lower clamp on dead fuel moisture (%); keeps downstream damping terms
/// away from zero
pub const DEAD_FUEL_MOISTURE_MIN: f64 = 1.0;

/// Upper clamp on dead fuel moisture (%); fine fuels cannot physically hold
/// more before the formulas lose meaning
pub const DEAD_FUEL_MOISTURE_MAX: f64 = 30.0;

/// Temperature response coefficient (per °F above the 70°F reference)
const TEMP_RESPONSE_PER_DEG_F: f64 = 0.0154;

/// Reference temperature for the EMC formula (°F)
const TEMP_REFERENCE_F: f64 = 70.0;

/// Moisture added per inch of 24-hour precipitation (percentage points)
const WETTING_PER_INCH: f64 = 2.0;

/// Calculate equilibrium moisture content from humidity
///
/// Forest Service simplified piecewise form (percent moisture at 70°F):
/// - RH < 10:  EMC = 0.0062 × RH
/// - RH < 50:  EMC = 2.22 × (RH/100) − 0.16
/// - RH ≥ 50:  EMC = 21.06 × (RH/100) − 7.39
///
/// The low-humidity branch is a linear ramp joining the mid branch exactly at
/// RH = 10% (2.22 × 0.10 − 0.16 = 0.062), keeping EMC non-decreasing in
/// humidity over the whole [0, 100] domain. Fuel moisture, and with it every
/// downstream index, must respond monotonically to humidity; a seam that
/// drops EMC as humidity rises would surface in rain-wetted results.
pub(crate) fn equilibrium_moisture_content(relative_humidity: f64) -> f64 {
    let rh = relative_humidity;
    if rh < 10.0 {
        0.0062 * rh
    } else if rh < 50.0 {
        2.22 * (rh / 100.0) - 0.16
    } else {
        21.06 * (rh / 100.0) - 7.39
    }
}

/// Calculate 1-hour timelag dead fuel moisture content
///
/// EMC from relative humidity, scaled by the temperature response
/// `1 + 0.0154 × (T − 70)` (hotter air dries fuel below the 70°F reference,
/// cooler air does the opposite), then wetted by 2 percentage points per inch
/// of 24-hour precipitation. Output clamped to [1, 30] percent.
///
/// The linear temperature response crosses zero near 5°F; it is floored at
/// zero so sub-freezing observations scale the humidity contribution down to
/// nothing rather than inverting its sign (a negative factor would make
/// drier air read as wetter fuel).
///
/// # Errors
/// Returns [`InvalidInputError`] if the observation has out-of-range humidity,
/// negative wind or precipitation, or any non-finite field. No formula runs
/// on an invalid observation.
pub fn calculate_dead_fuel_moisture(
    observation: &WeatherObservation,
) -> Result<Percent, InvalidInputError> {
    validate_observation(observation)?;

    let emc = equilibrium_moisture_content(*observation.relative_humidity);
    let temp_factor =
        (1.0 + TEMP_RESPONSE_PER_DEG_F * (*observation.temperature - TEMP_REFERENCE_F)).max(0.0);
    let mut moisture = emc * temp_factor;

    // Rain wets fine fuels, raising moisture and lowering every downstream index
    if *observation.precipitation_24h > 0.0 {
        moisture += *observation.precipitation_24h * WETTING_PER_INCH;
    }

    Ok(Percent::new(
        moisture.clamp(DEAD_FUEL_MOISTURE_MIN, DEAD_FUEL_MOISTURE_MAX),
    ))
}
