//! Core types and utilities

pub mod danger;
pub mod units;
pub mod weather;

pub use danger::{bi_ranges, FireDangerClass, FireDangerResult};
pub use units::{Fahrenheit, Inches, MilesPerHour, Percent};
pub use weather::WeatherObservation;
