//! NFDRS Calculation Core Library
//!
//! Implements the National Fire Danger Rating System (NFDRS) empirical
//! formulas used by the US Forest Service to quantify wildfire risk from
//! weather observations. A [`WeatherObservation`] (temperature, relative
//! humidity, wind speed, 24-hour precipitation) goes in; a
//! [`FireDangerResult`] (fuel moisture, spread component, energy release
//! component, burning index, and a categorical danger class) comes out.
//!
//! The whole pipeline is pure, deterministic scalar arithmetic: no I/O, no
//! shared state, no panics on valid input. Malformed input is rejected up
//! front with a typed [`InvalidInputError`] before any formula runs.
//!
//! ```
//! use nfdrs_core::{calculate_fire_danger, FireDangerClass, WeatherObservation};
//!
//! let obs = WeatherObservation::from_raw(85.0, 25.0, 12.0, 0.0);
//! let result = calculate_fire_danger(&obs).unwrap();
//! assert_eq!(result.danger_class, FireDangerClass::Moderate);
//! ```

// Core types and utilities
pub mod core_types;

// NFDRS formula implementations
pub mod nfdrs;

// Re-export core types
pub use core_types::{Fahrenheit, Inches, MilesPerHour, Percent};
pub use core_types::{bi_ranges, FireDangerClass, FireDangerResult, WeatherObservation};

// Re-export the calculation entry points
pub use nfdrs::{
    calculate_burning_index, calculate_dead_fuel_moisture, calculate_energy_release_component,
    calculate_fire_danger, calculate_fire_danger_with_live_moisture, calculate_spread_component,
    classify_fire_danger, validate_observation, InvalidInputError, DEFAULT_LIVE_FUEL_MOISTURE,
};
