//! Validation of the NFDRS pipeline against reference scenarios and the
//! published index range/monotonicity properties.

use approx::assert_relative_eq;
use nfdrs_core::{
    calculate_fire_danger, classify_fire_danger, validate_observation, FireDangerClass,
    InvalidInputError, WeatherObservation,
};

/// Reference scenario: hot, dry, windy afternoon (85°F, 25% RH, 12 mph, no rain)
///
/// Expected component values worked through the published formulas by hand:
/// EMC 0.395 × temp factor 1.231 = 0.486 → clamped to 1.0% dead fuel moisture;
/// SC = 0.560 × (12^1.5 / 5) × exp(−0.108) ≈ 4.18;
/// ERC = 100 × (0.7 × 0.99 + 0.3 × (1 − 1.2)) = 63.3;
/// BI = 10 × SC × ERC / 100 ≈ 26.5 → MODERATE.
#[test]
fn test_hot_dry_windy_reference_scenario() {
    let obs = WeatherObservation::from_raw(85.0, 25.0, 12.0, 0.0);
    let result = calculate_fire_danger(&obs).unwrap();

    assert_relative_eq!(*result.dead_fuel_moisture_1hr, 1.0, epsilon = 1e-9);
    assert_relative_eq!(result.spread_component, 4.18, epsilon = 0.01);
    assert_relative_eq!(result.energy_release_component, 63.3, epsilon = 1e-9);
    assert_relative_eq!(result.burning_index, 26.45, epsilon = 0.05);
    assert_eq!(result.danger_class, FireDangerClass::Moderate);
}

/// Reference scenario: humid, mild day (80°F, 80% RH, 10 mph, no rain)
#[test]
fn test_humid_day_rates_low() {
    let obs = WeatherObservation::from_raw(80.0, 80.0, 10.0, 0.0);
    let result = calculate_fire_danger(&obs).unwrap();

    assert!(
        result.burning_index < 25.0,
        "Humid conditions should rate LOW, BI was {}",
        result.burning_index
    );
    assert_eq!(result.danger_class, FireDangerClass::Low);
}

#[test]
fn test_invalid_observations_rejected() {
    let cases = [
        (
            WeatherObservation::from_raw(85.0, 101.0, 12.0, 0.0),
            InvalidInputError::HumidityOutOfRange(101.0),
        ),
        (
            WeatherObservation::from_raw(85.0, -1.0, 12.0, 0.0),
            InvalidInputError::HumidityOutOfRange(-1.0),
        ),
        (
            WeatherObservation::from_raw(85.0, 25.0, -1.0, 0.0),
            InvalidInputError::NegativeWindSpeed(-1.0),
        ),
        (
            WeatherObservation::from_raw(85.0, 25.0, 12.0, -0.5),
            InvalidInputError::NegativePrecipitation(-0.5),
        ),
    ];

    for (obs, expected) in cases {
        assert_eq!(calculate_fire_danger(&obs), Err(expected));
    }
}

#[test]
fn test_classification_boundary_exactness() {
    // Inclusive-low / exclusive-high at every threshold
    assert_eq!(classify_fire_danger(24.9), FireDangerClass::Low);
    assert_eq!(classify_fire_danger(25.0), FireDangerClass::Moderate);
    assert_eq!(classify_fire_danger(90.0), FireDangerClass::Extreme);
}

#[test]
fn test_identical_input_identical_output() {
    let obs = WeatherObservation::from_raw(92.0, 18.0, 22.0, 0.05);
    let first = calculate_fire_danger(&obs).unwrap();
    let second = calculate_fire_danger(&obs).unwrap();
    assert_eq!(first, second);
}

/// Range invariants hold over a coarse grid of the whole valid input domain
#[test]
fn test_index_ranges_hold_across_input_grid() {
    for temp in [-20.0, 20.0, 70.0, 100.0, 120.0] {
        for rh in [0.0, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0] {
            for wind in [0.0, 5.0, 15.0, 40.0, 120.0] {
                for rain in [0.0, 0.05, 0.5, 3.0] {
                    let obs = WeatherObservation::from_raw(temp, rh, wind, rain);
                    let r = calculate_fire_danger(&obs).unwrap();

                    let fm = *r.dead_fuel_moisture_1hr;
                    assert!(
                        (1.0..=30.0).contains(&fm),
                        "dead fuel moisture {fm} out of range for {obs:?}"
                    );
                    assert!(
                        (0.0..=99.0).contains(&r.spread_component),
                        "SC {} out of range for {obs:?}",
                        r.spread_component
                    );
                    assert!(
                        (0.0..=100.0).contains(&r.energy_release_component),
                        "ERC {} out of range for {obs:?}",
                        r.energy_release_component
                    );
                    assert!(
                        (0.0..=999.0).contains(&r.burning_index),
                        "BI {} out of range for {obs:?}",
                        r.burning_index
                    );
                }
            }
        }
    }
}

/// Drier air never lowers the danger: SC and BI are non-increasing in RH
/// over the whole valid domain, sub-freezing and rain-wetted days included
#[test]
fn test_humidity_monotonicity() {
    for temp in [-40.0, 0.0, 40.0, 70.0, 95.0, 120.0] {
        for wind in [5.0, 15.0, 30.0] {
            for rain in [0.0, 0.5, 3.0] {
                let mut prev_sc = f64::INFINITY;
                let mut prev_bi = f64::INFINITY;
                for rh_step in 0..=100 {
                    let rh = f64::from(rh_step);
                    let obs = WeatherObservation::from_raw(temp, rh, wind, rain);
                    let r = calculate_fire_danger(&obs).unwrap();
                    assert!(
                        r.spread_component <= prev_sc + 1e-9,
                        "SC rose with humidity at T={temp} wind={wind} rain={rain} RH={rh}"
                    );
                    assert!(
                        r.burning_index <= prev_bi + 1e-9,
                        "BI rose with humidity at T={temp} wind={wind} rain={rain} RH={rh}"
                    );
                    prev_sc = r.spread_component;
                    prev_bi = r.burning_index;
                }
            }
        }
    }
}

/// Cold, rain-wetted days sit above the moisture floor, where an inverted
/// temperature response would make humidity raise the spread component
#[test]
fn test_cold_rain_humidity_extremes() {
    let dry_air = WeatherObservation::from_raw(-40.0, 0.0, 15.0, 3.0);
    let damp_air = WeatherObservation::from_raw(-40.0, 100.0, 15.0, 3.0);
    let r_dry = calculate_fire_danger(&dry_air).unwrap();
    let r_damp = calculate_fire_danger(&damp_air).unwrap();

    assert!(
        r_damp.spread_component <= r_dry.spread_component,
        "SC rose with humidity: RH=0 -> {}, RH=100 -> {}",
        r_dry.spread_component,
        r_damp.spread_component
    );
    assert!(r_damp.burning_index <= r_dry.burning_index);
}

/// More wind never slows the spread component
#[test]
fn test_wind_monotonicity() {
    for rh in [10.0, 30.0, 60.0, 90.0] {
        let mut prev_sc = -1.0;
        for wind_step in 0..=60 {
            let wind = f64::from(wind_step);
            let obs = WeatherObservation::from_raw(85.0, rh, wind, 0.0);
            let r = calculate_fire_danger(&obs).unwrap();
            assert!(
                r.spread_component >= prev_sc - 1e-9,
                "SC fell with wind at RH={rh} wind={wind}"
            );
            prev_sc = r.spread_component;
        }
    }
}

/// Rain wets fuel: moisture rises, burning index falls (or stays clamped)
#[test]
fn test_precipitation_lowers_danger() {
    let dry = WeatherObservation::from_raw(85.0, 40.0, 15.0, 0.0);
    let wet = WeatherObservation::from_raw(85.0, 40.0, 15.0, 2.0);
    let r_dry = calculate_fire_danger(&dry).unwrap();
    let r_wet = calculate_fire_danger(&wet).unwrap();

    assert!(r_wet.dead_fuel_moisture_1hr > r_dry.dead_fuel_moisture_1hr);
    assert!(r_wet.burning_index < r_dry.burning_index);
}

#[test]
fn test_validate_observation_is_the_only_gate() {
    // Anything validation accepts, the pipeline computes without error
    let extremes = [
        WeatherObservation::from_raw(-40.0, 0.0, 0.0, 0.0),
        WeatherObservation::from_raw(130.0, 100.0, 150.0, 10.0),
    ];
    for obs in extremes {
        validate_observation(&obs).unwrap();
        assert!(calculate_fire_danger(&obs).is_ok());
    }
}

#[test]
fn test_result_serializes_with_wire_class_names() {
    let obs = WeatherObservation::from_raw(85.0, 25.0, 12.0, 0.0);
    let result = calculate_fire_danger(&obs).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(
        json.contains(r#""danger_class":"MODERATE""#),
        "unexpected wire form: {json}"
    );
}
