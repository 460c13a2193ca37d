//! Spread component, energy release component, and burning index
//!
//! The three NFDRS indices derived from fuel moisture and wind. All three are
//! defined and clamped over the whole valid input domain, so these functions
//! are infallible; input validation happens once at the calculation entry
//! points.
//!
//! # Scientific References
//! - Deeming, J.E. et al. (1977). "The National Fire-Danger Rating System — 1978"
//! - Bradshaw, L.S. et al. (1984). "The 1978 National Fire-Danger Rating
//!   System: Technical Documentation", USDA Forest Service INT-169

use crate::core_types::units::{MilesPerHour, Percent};

/// Rate-of-spread to spread-component conversion constant (NFDRS standard)
const SPREAD_COMPONENT_SCALE: f64 = 0.560;

/// Wind speed exponent in the rate-of-spread proxy
const WIND_EXPONENT: f64 = 1.5;

/// Wind factor normalization divisor
const WIND_DIVISOR: f64 = 5.0;

/// Exponential moisture damping coefficient (per percent moisture)
const MOISTURE_DAMPING_COEFF: f64 = 0.108;

/// Weight of the dead fuel class in the two-component fuel model
const DEAD_FUEL_WEIGHT: f64 = 0.7;

/// Weight of the live fuel class in the two-component fuel model
const LIVE_FUEL_WEIGHT: f64 = 0.3;

/// Burning index scale: BI = 10 × SC × ERC / 100
const BURNING_INDEX_SCALE: f64 = 0.1;

/// Upper clamp on the spread component (NFDRS index convention)
pub const SPREAD_COMPONENT_MAX: f64 = 99.0;

/// Upper clamp on the energy release component
pub const ENERGY_RELEASE_COMPONENT_MAX: f64 = 100.0;

/// Upper clamp on the burning index (NFDRS index convention)
pub const BURNING_INDEX_MAX: f64 = 999.0;

/// Calculate the spread component (SC)
///
/// Rate-of-spread proxy: `SC = 0.560 × (wind^1.5 / 5) × exp(−0.108 × moisture)`.
/// Wind drives spread superlinearly; fuel moisture damps it exponentially
/// toward zero. Output clamped to [0, 99].
#[must_use]
pub fn calculate_spread_component(wind_speed: MilesPerHour, fuel_moisture: Percent) -> f64 {
    let wind_factor = wind_speed.value().powf(WIND_EXPONENT) / WIND_DIVISOR;
    let moisture_factor = (-MOISTURE_DAMPING_COEFF * fuel_moisture.value()).exp();
    let spread_rate = wind_factor * moisture_factor;

    (SPREAD_COMPONENT_SCALE * spread_rate).clamp(0.0, SPREAD_COMPONENT_MAX)
}

/// Calculate the energy release component (ERC)
///
/// Weighted sum over the fixed two-component fuel model (70% dead, 30% live)
/// of `1 − moisture_fraction`, scaled to an index:
/// `ERC = 100 × (0.7 × (1 − dead/100) + 0.3 × (1 − live/100))`.
/// Output clamped to [0, 100].
///
/// Live fuel moisture above 100% (fresh green vegetation holds more water
/// than dry matter) makes the live term negative, reducing available energy.
#[must_use]
pub fn calculate_energy_release_component(
    dead_fuel_moisture: Percent,
    live_fuel_moisture: Percent,
) -> f64 {
    let dead_factor = DEAD_FUEL_WEIGHT * (1.0 - dead_fuel_moisture.to_fraction());
    let live_factor = LIVE_FUEL_WEIGHT * (1.0 - live_fuel_moisture.to_fraction());

    ((dead_factor + live_factor) * 100.0).clamp(0.0, ENERGY_RELEASE_COMPONENT_MAX)
}

/// Calculate the burning index (BI)
///
/// `BI = 10 × SC × ERC / 100`, clamped to the NFDRS [0, 999] convention.
#[must_use]
pub fn calculate_burning_index(spread_component: f64, energy_release_component: f64) -> f64 {
    (BURNING_INDEX_SCALE * spread_component * energy_release_component)
        .clamp(0.0, BURNING_INDEX_MAX)
}
