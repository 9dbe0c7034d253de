// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Static city table for the transport estimator.
//!
//! This is a separate, smaller dataset from the destination graph: a handful
//! of hub cities with hand-entered road distances for common pairs.

use crate::geo::Coordinate;

/// A hub city known to the estimator.
#[derive(Debug, Clone, Copy)]
pub struct City {
    /// Lowercase name; the table is sorted by it
    pub name: &'static str,
    /// Position used for great-circle fallback
    pub location: Coordinate,
}

/// Hub cities sorted by name for binary search.
pub const CITIES: &[City] = &[
    City { name: "agra", location: Coordinate::new(27.1767, 78.0081) },
    City { name: "bangalore", location: Coordinate::new(12.9716, 77.5946) },
    City { name: "chennai", location: Coordinate::new(13.0827, 80.2707) },
    City { name: "darjeeling", location: Coordinate::new(27.0410, 88.2663) },
    City { name: "delhi", location: Coordinate::new(28.6139, 77.2090) },
    City { name: "goa", location: Coordinate::new(15.2993, 74.1240) },
    City { name: "hyderabad", location: Coordinate::new(17.3850, 78.4867) },
    City { name: "jaipur", location: Coordinate::new(26.9124, 75.7873) },
    City { name: "kochi", location: Coordinate::new(9.9312, 76.2673) },
    City { name: "kolkata", location: Coordinate::new(22.5726, 88.3639) },
    City { name: "manali", location: Coordinate::new(32.2432, 77.1892) },
    City { name: "mumbai", location: Coordinate::new(19.0760, 72.8777) },
    City { name: "munnar", location: Coordinate::new(10.0889, 77.0595) },
    City { name: "mysore", location: Coordinate::new(12.2958, 76.6394) },
    City { name: "pondicherry", location: Coordinate::new(11.9416, 79.8083) },
    City { name: "pune", location: Coordinate::new(18.5204, 73.8567) },
    City { name: "rishikesh", location: Coordinate::new(30.0869, 78.2676) },
    City { name: "varanasi", location: Coordinate::new(25.3176, 82.9739) },
];

/// Road distances in kilometers. Pairs are unordered.
pub const DISTANCES_KM: &[(&str, &str, f64)] = &[
    ("delhi", "agra", 233.0),
    ("delhi", "jaipur", 281.0),
    ("agra", "jaipur", 240.0),
    ("delhi", "mumbai", 1421.0),
    ("delhi", "kolkata", 1530.0),
    ("delhi", "manali", 537.0),
    ("delhi", "rishikesh", 240.0),
    ("mumbai", "pune", 149.0),
    ("mumbai", "goa", 590.0),
    ("mumbai", "bangalore", 984.0),
    ("bangalore", "chennai", 346.0),
    ("bangalore", "mysore", 145.0),
    ("bangalore", "hyderabad", 570.0),
    ("chennai", "pondicherry", 150.0),
    ("kolkata", "darjeeling", 620.0),
    ("kochi", "munnar", 130.0),
];
