//! NFDRS calculation pipeline
//!
//! National Fire Danger Rating System formulas, organized the way the indices
//! chain together: dead fuel moisture → spread component → energy release
//! component → burning index → danger class. Every step is pure arithmetic;
//! the only failure mode is a malformed observation, rejected up front.

pub mod components;
pub mod error;
pub mod fuel_moisture;

pub use components::{
    calculate_burning_index, calculate_energy_release_component, calculate_spread_component,
};
pub use error::InvalidInputError;
pub use fuel_moisture::calculate_dead_fuel_moisture;

use crate::core_types::danger::{bi_ranges, FireDangerClass, FireDangerResult};
use crate::core_types::units::Percent;
use crate::core_types::weather::WeatherObservation;
use tracing::debug;

/// Live fuel moisture used when no live-fuel field sampling is available
///
/// Fresh green vegetation holds more water than its own dry weight, so live
/// moisture sits well above 100%. No formula derives this from weather; it is
/// a fixed default, overridable per call via
/// [`calculate_fire_danger_with_live_moisture`].
pub const DEFAULT_LIVE_FUEL_MOISTURE: Percent = Percent::new(120.0);

/// Validate a weather observation before any formula runs
///
/// Checks, in field order: every field finite, relative humidity in [0, 100],
/// wind speed non-negative, precipitation non-negative. Violations are
/// rejected with a typed error, never silently clamped.
///
/// # Errors
/// Returns the first [`InvalidInputError`] encountered.
pub fn validate_observation(observation: &WeatherObservation) -> Result<(), InvalidInputError> {
    if !observation.temperature.value().is_finite() {
        return Err(InvalidInputError::NonFinite {
            field: "temperature",
        });
    }
    if !observation.relative_humidity.value().is_finite() {
        return Err(InvalidInputError::NonFinite {
            field: "relative_humidity",
        });
    }
    if !observation.wind_speed.value().is_finite() {
        return Err(InvalidInputError::NonFinite { field: "wind_speed" });
    }
    if !observation.precipitation_24h.value().is_finite() {
        return Err(InvalidInputError::NonFinite {
            field: "precipitation_24h",
        });
    }

    let rh = observation.relative_humidity.value();
    if !(0.0..=100.0).contains(&rh) {
        return Err(InvalidInputError::HumidityOutOfRange(rh));
    }
    if observation.wind_speed.value() < 0.0 {
        return Err(InvalidInputError::NegativeWindSpeed(
            observation.wind_speed.value(),
        ));
    }
    if observation.precipitation_24h.value() < 0.0 {
        return Err(InvalidInputError::NegativePrecipitation(
            observation.precipitation_24h.value(),
        ));
    }

    Ok(())
}

/// Classify a burning index into a fire danger class
///
/// Threshold lookup against [`bi_ranges`]: inclusive lower bound, exclusive
/// upper bound, exhaustive over BI ≥ 0. Negative values (which the clamped
/// pipeline never produces) classify as Low.
#[must_use]
pub fn classify_fire_danger(burning_index: f64) -> FireDangerClass {
    if bi_ranges::EXTREME.contains(&burning_index) {
        FireDangerClass::Extreme
    } else if bi_ranges::VERY_HIGH.contains(&burning_index) {
        FireDangerClass::VeryHigh
    } else if bi_ranges::HIGH.contains(&burning_index) {
        FireDangerClass::High
    } else if bi_ranges::MODERATE.contains(&burning_index) {
        FireDangerClass::Moderate
    } else {
        FireDangerClass::Low
    }
}

/// Run the complete fire danger calculation with the default live fuel moisture
///
/// Strict sequential pipeline over the validated observation: dead fuel
/// moisture → spread component → energy release component → burning index →
/// classification. Deterministic and side-effect-free: identical input always
/// yields the identical result.
///
/// # Errors
/// Returns [`InvalidInputError`] for out-of-range humidity, negative wind or
/// precipitation, or any non-finite field; no partial result is produced.
pub fn calculate_fire_danger(
    observation: &WeatherObservation,
) -> Result<FireDangerResult, InvalidInputError> {
    calculate_fire_danger_with_live_moisture(observation, DEFAULT_LIVE_FUEL_MOISTURE)
}

/// Run the complete fire danger calculation with caller-supplied live fuel moisture
///
/// See [`calculate_fire_danger`]; this variant is for callers with live-fuel
/// field sampling instead of the fixed default.
///
/// # Errors
/// Returns [`InvalidInputError`] for a malformed observation.
pub fn calculate_fire_danger_with_live_moisture(
    observation: &WeatherObservation,
    live_fuel_moisture: Percent,
) -> Result<FireDangerResult, InvalidInputError> {
    let dead_fuel_moisture = calculate_dead_fuel_moisture(observation)?;
    let spread_component = calculate_spread_component(observation.wind_speed, dead_fuel_moisture);
    let energy_release_component =
        calculate_energy_release_component(dead_fuel_moisture, live_fuel_moisture);
    let burning_index = calculate_burning_index(spread_component, energy_release_component);
    let danger_class = classify_fire_danger(burning_index);

    debug!(
        dead_fuel_moisture = *dead_fuel_moisture,
        spread_component,
        energy_release_component,
        burning_index,
        danger_class = danger_class.as_str(),
        "fire danger calculated"
    );

    Ok(FireDangerResult {
        dead_fuel_moisture_1hr: dead_fuel_moisture,
        live_fuel_moisture,
        spread_component,
        energy_release_component,
        burning_index,
        danger_class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rejects_bad_fields() {
        let bad_humidity = WeatherObservation::from_raw(85.0, 150.0, 12.0, 0.0);
        assert_eq!(
            validate_observation(&bad_humidity),
            Err(InvalidInputError::HumidityOutOfRange(150.0))
        );

        let bad_wind = WeatherObservation::from_raw(85.0, 25.0, -5.0, 0.0);
        assert_eq!(
            validate_observation(&bad_wind),
            Err(InvalidInputError::NegativeWindSpeed(-5.0))
        );

        let bad_rain = WeatherObservation::from_raw(85.0, 25.0, 12.0, -0.1);
        assert_eq!(
            validate_observation(&bad_rain),
            Err(InvalidInputError::NegativePrecipitation(-0.1))
        );
    }

    #[test]
    fn test_validation_rejects_non_finite_fields() {
        let nan_temp = WeatherObservation::from_raw(f64::NAN, 25.0, 12.0, 0.0);
        assert_eq!(
            validate_observation(&nan_temp),
            Err(InvalidInputError::NonFinite {
                field: "temperature"
            })
        );

        let inf_wind = WeatherObservation::from_raw(85.0, 25.0, f64::INFINITY, 0.0);
        assert_eq!(
            validate_observation(&inf_wind),
            Err(InvalidInputError::NonFinite { field: "wind_speed" })
        );
    }

    #[test]
    fn test_validation_accepts_boundary_values() {
        for rh in [0.0, 100.0] {
            let obs = WeatherObservation::from_raw(70.0, rh, 0.0, 0.0);
            assert!(validate_observation(&obs).is_ok(), "RH {rh} should be valid");
        }
    }

    #[test]
    fn test_classification_thresholds_exact() {
        assert_eq!(classify_fire_danger(0.0), FireDangerClass::Low);
        assert_eq!(classify_fire_danger(24.9), FireDangerClass::Low);
        assert_eq!(classify_fire_danger(25.0), FireDangerClass::Moderate);
        assert_eq!(classify_fire_danger(49.9), FireDangerClass::Moderate);
        assert_eq!(classify_fire_danger(50.0), FireDangerClass::High);
        assert_eq!(classify_fire_danger(74.9), FireDangerClass::High);
        assert_eq!(classify_fire_danger(75.0), FireDangerClass::VeryHigh);
        assert_eq!(classify_fire_danger(89.9), FireDangerClass::VeryHigh);
        assert_eq!(classify_fire_danger(90.0), FireDangerClass::Extreme);
        assert_eq!(classify_fire_danger(999.0), FireDangerClass::Extreme);
    }

    #[test]
    fn test_pipeline_produces_no_partial_result_on_error() {
        let obs = WeatherObservation::from_raw(85.0, 101.0, 12.0, 0.0);
        assert!(calculate_fire_danger(&obs).is_err());
    }

    #[test]
    fn test_live_moisture_override_lowers_erc() {
        let obs = WeatherObservation::from_raw(85.0, 25.0, 12.0, 0.0);
        let default = calculate_fire_danger(&obs).unwrap();
        let greener =
            calculate_fire_danger_with_live_moisture(&obs, Percent::new(200.0)).unwrap();
        assert!(greener.energy_release_component < default.energy_release_component);
        assert_eq!(greener.live_fuel_moisture, Percent::new(200.0));
    }
}
