//! Semantic unit types for type-safe weather quantity handling
//!
//! This module provides newtype wrappers for the physical quantities a fire
//! weather observation carries, to prevent accidental mixing of incompatible
//! units (e.g., Fahrenheit with Celsius, or wind speed with precipitation).
//!
//! # Design Philosophy
//! - All types wrap f64: the NFDRS formulas are a handful of scalar operations,
//!   so precision is free
//! - Total ordering via Ord trait (NaN handled via `total_cmp`)
//! - Deref to the raw value for use inside the empirical formulas
//! - Serde support for serialization
//!
//! Range validation (humidity in [0, 100], non-negative wind and rain) is the
//! calculator's job, not the constructor's: the calculation entry points reject
//! bad observations with a typed error instead of panicking.
//!
//! # Usage
//! ```
//! use nfdrs_core::core_types::units::{Fahrenheit, Percent};
//!
//! let temp = Fahrenheit::new(85.0);
//! assert!((temp.to_celsius() - 29.44).abs() < 0.01);
//!
//! let humidity = Percent::new(25.0);
//! assert!((humidity.to_fraction() - 0.25).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Fahrenheit (the unit NFDRS formulas are stated in)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Create a new Fahrenheit temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fahrenheit(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> f64 {
        (self.0 - 32.0) * 5.0 / 9.0
    }
}

impl From<f64> for Fahrenheit {
    fn from(v: f64) -> Self {
        Fahrenheit(v)
    }
}

impl From<Fahrenheit> for f64 {
    fn from(t: Fahrenheit) -> f64 {
        t.0
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

// ============================================================================
// PERCENTAGE
// ============================================================================

/// Percentage value (relative humidity, fuel moisture content)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to fraction (0-1)
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent(v)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> f64 {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// WIND SPEED
// ============================================================================

/// Wind speed in miles per hour (the unit NFDRS formulas are stated in)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MilesPerHour(f64);

impl Eq for MilesPerHour {}

impl PartialOrd for MilesPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MilesPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for MilesPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MilesPerHour {
    /// Create a new wind speed
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MilesPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilometers per hour
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> f64 {
        self.0 * 1.609344
    }
}

impl From<f64> for MilesPerHour {
    fn from(v: f64) -> Self {
        MilesPerHour(v)
    }
}

impl From<MilesPerHour> for f64 {
    fn from(w: MilesPerHour) -> f64 {
        w.0
    }
}

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mph", self.0)
    }
}

// ============================================================================
// PRECIPITATION
// ============================================================================

/// Precipitation depth in inches
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Inches(f64);

impl Eq for Inches {}

impl PartialOrd for Inches {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Inches {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Inches {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Inches {
    /// Create a new precipitation depth
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Inches(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to millimeters
    #[inline]
    #[must_use]
    pub fn to_mm(self) -> f64 {
        self.0 * 25.4
    }
}

impl From<f64> for Inches {
    fn from(v: f64) -> Self {
        Inches(v)
    }
}

impl From<Inches> for f64 {
    fn from(p: Inches) -> f64 {
        p.0
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} in", self.0)
    }
}
