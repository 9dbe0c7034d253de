// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Great-circle distance estimation.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine great-circle distance in kilometers between two points given in
/// decimal degrees.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DELHI: Coordinate = Coordinate::new(28.6139, 77.2090);
    const MUMBAI: Coordinate = Coordinate::new(19.0760, 72.8777);

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine(DELHI.lat, DELHI.lon, DELHI.lat, DELHI.lon), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Delhi to Mumbai is roughly 1150 km as the crow flies
        let d = DELHI.distance_km(&MUMBAI);
        assert!((1100.0..1200.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_half_circumference() {
        let d = haversine(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_haversine_is_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let there = haversine(lat1, lon1, lat2, lon2);
            let back = haversine(lat2, lon2, lat1, lon1);
            prop_assert!((there - back).abs() < 1e-6);
            prop_assert!(there >= 0.0);
        }

        #[test]
        fn prop_haversine_zero_for_same_point(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            prop_assert_eq!(haversine(lat, lon, lat, lon), 0.0);
        }
    }
}
