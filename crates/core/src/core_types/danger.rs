//! Fire danger rating output types
//!
//! The categorical danger class, the burning-index thresholds that define it,
//! and the full result record a calculation produces.

use crate::core_types::units::Percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Burning index (BI) threshold constants for the NFDRS fire danger classes.
///
/// These constants define the boundaries between danger rating categories and
/// should be used consistently across the codebase for classification,
/// validation, and testing.
/// Note: Rust `Range` types use **inclusive lower bound and exclusive upper bound** [a, b).
pub mod bi_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Low" fire danger range `[0.0, 25.0)` (0.0 inclusive to 25.0 exclusive)
    pub const LOW: Range<f64> = 0.0..25.0;

    /// "Moderate" fire danger range `[25.0, 50.0)` (25.0 inclusive to 50.0 exclusive)
    pub const MODERATE: Range<f64> = 25.0..50.0;

    /// "High" fire danger range `[50.0, 75.0)` (50.0 inclusive to 75.0 exclusive)
    pub const HIGH: Range<f64> = 50.0..75.0;

    /// "Very High" fire danger range `[75.0, 90.0)` (75.0 inclusive to 90.0 exclusive)
    pub const VERY_HIGH: Range<f64> = 75.0..90.0;

    /// "Extreme" fire danger range `[90.0, ∞)` (90.0 inclusive, no upper bound)
    pub const EXTREME: RangeFrom<f64> = 90.0..;
}

/// Categorical fire danger rating derived from the burning index
///
/// The five NFDRS operational classes, in ascending order of severity.
/// Serialized in the upper-case wire form used by adjective rating feeds
/// (`LOW`, `MODERATE`, `HIGH`, `VERY_HIGH`, `EXTREME`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FireDangerClass {
    /// Fuels do not ignite readily; fires unlikely to spread
    Low,
    /// Fires can start from most accidental causes but spread slowly
    Moderate,
    /// Fires start easily and spread at moderate rates
    High,
    /// Fires start easily, spread rapidly, and are difficult to control
    VeryHigh,
    /// Explosive conditions; all fires are potentially serious
    Extreme,
}

impl FireDangerClass {
    /// Upper-case name matching the serialized wire form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FireDangerClass::Low => "LOW",
            FireDangerClass::Moderate => "MODERATE",
            FireDangerClass::High => "HIGH",
            FireDangerClass::VeryHigh => "VERY_HIGH",
            FireDangerClass::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for FireDangerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete fire danger calculation result
///
/// Immutable value object built fresh per calculation; not persisted by this
/// component. Index fields carry the standard NFDRS ranges: spread component
/// 0-99, energy release component 0-100, burning index 0-999.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireDangerResult {
    /// 1-hour timelag dead fuel moisture content (%), range [1, 30]
    pub dead_fuel_moisture_1hr: Percent,

    /// Live fuel moisture content (%) used in the calculation
    ///
    /// A fixed default in the absence of live-fuel field sampling; see
    /// [`DEFAULT_LIVE_FUEL_MOISTURE`](crate::nfdrs::DEFAULT_LIVE_FUEL_MOISTURE).
    pub live_fuel_moisture: Percent,

    /// Spread component (SC): rate-of-spread proxy, range [0, 99]
    pub spread_component: f64,

    /// Energy release component (ERC): available combustion energy, range [0, 100]
    pub energy_release_component: f64,

    /// Burning index (BI): composite fire-intensity index, range [0, 999]
    pub burning_index: f64,

    /// Categorical danger rating derived from the burning index
    pub danger_class: FireDangerClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ordering_ascends_with_severity() {
        assert!(FireDangerClass::Low < FireDangerClass::Moderate);
        assert!(FireDangerClass::VeryHigh < FireDangerClass::Extreme);
    }

    #[test]
    fn test_class_wire_form() {
        let json = serde_json::to_string(&FireDangerClass::VeryHigh).unwrap();
        assert_eq!(json, r#""VERY_HIGH""#);
        let class: FireDangerClass = serde_json::from_str(r#""EXTREME""#).unwrap();
        assert_eq!(class, FireDangerClass::Extreme);
    }

    #[test]
    fn test_bi_ranges_are_contiguous() {
        assert_eq!(bi_ranges::LOW.end, bi_ranges::MODERATE.start);
        assert_eq!(bi_ranges::MODERATE.end, bi_ranges::HIGH.start);
        assert_eq!(bi_ranges::HIGH.end, bi_ranges::VERY_HIGH.start);
        assert_eq!(bi_ranges::VERY_HIGH.end, bi_ranges::EXTREME.start);
    }
}
