// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Transport cost and time estimation between hub cities.
//!
//! Distances come from a hand-entered table where one exists and from the
//! great-circle distance otherwise. Each mode turns a distance into a cost
//! and a travel time through its [`ModeProfile`].

mod cities;

use std::collections::HashMap;

use serde::Serialize;

pub use cities::{City, CITIES, DISTANCES_KM};

use crate::config::estimator::{EstimatorConfig, ModeProfile};
use crate::data_structures::sorting::binary_search_by;
use crate::routing::TransportMode;

/// Where a distance figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    /// Hand-entered road distance
    Table,
    /// Haversine estimate
    GreatCircle,
}

/// A distance between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceEstimate {
    /// Kilometers
    pub km: f64,
    /// Origin of the figure
    pub source: DistanceSource,
}

/// Cost and time of a trip by one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripEstimate {
    /// Mode of travel
    pub mode: TransportMode,
    /// Distance used for the estimate
    pub distance_km: f64,
    /// Rounded cost in currency units
    pub cost: u64,
    /// Rounded travel time in minutes
    pub minutes: u64,
}

/// Estimates trip costs over the static city table.
#[derive(Debug, Clone)]
pub struct TransportEstimator {
    config: EstimatorConfig,
    distances: HashMap<(String, String), f64>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl TransportEstimator {
    /// Creates an estimator with the given profiles and thresholds.
    pub fn new(config: EstimatorConfig) -> Self {
        let distances = DISTANCES_KM
            .iter()
            .map(|(a, b, km)| (pair_key(a, b), *km))
            .collect();
        Self { config, distances }
    }

    /// Finds a hub city by name, case-insensitively.
    pub fn city(&self, name: &str) -> Option<&'static City> {
        let needle = name.trim().to_lowercase();
        binary_search_by(CITIES, |city| city.name.cmp(needle.as_str())).map(|i| &CITIES[i])
    }

    /// Distance between two hub cities. `None` if either city is unknown.
    pub fn distance(&self, origin: &str, destination: &str) -> Option<DistanceEstimate> {
        let from = self.city(origin)?;
        let to = self.city(destination)?;

        if let Some(km) = self.distances.get(&pair_key(from.name, to.name)) {
            return Some(DistanceEstimate {
                km: *km,
                source: DistanceSource::Table,
            });
        }

        tracing::debug!(origin = from.name, destination = to.name, "No table distance, using great-circle estimate");
        Some(DistanceEstimate {
            km: from.location.distance_km(&to.location),
            source: DistanceSource::GreatCircle,
        })
    }

    /// Cost and time of covering `km` by `mode`. `None` for modes without a
    /// profile.
    pub fn price(&self, mode: &TransportMode, km: f64) -> Option<TripEstimate> {
        let profile: &ModeProfile = self.config.profile(mode)?;
        Some(TripEstimate {
            mode: mode.clone(),
            distance_km: km,
            cost: (profile.base_cost + profile.cost_per_km * km).round() as u64,
            minutes: (profile.minutes_per_km * km).round() as u64,
        })
    }

    /// Estimate for one mode between two hub cities.
    pub fn estimate(&self, origin: &str, destination: &str, mode: &TransportMode) -> Option<TripEstimate> {
        let distance = self.distance(origin, destination)?;
        self.price(mode, distance.km)
    }

    /// Estimates for every mode with a profile.
    pub fn estimate_all(&self, origin: &str, destination: &str) -> Vec<TripEstimate> {
        let Some(distance) = self.distance(origin, destination) else {
            return Vec::new();
        };
        TransportMode::KNOWN
            .iter()
            .filter_map(|mode| self.price(mode, distance.km))
            .collect()
    }

    /// Modes worth suggesting for a trip of `km`, by fixed distance thresholds.
    pub fn optimal_modes(&self, km: f64) -> Vec<TransportMode> {
        let t = &self.config.thresholds;
        let mut modes = Vec::with_capacity(4);

        if km > t.flight_above {
            modes.push(TransportMode::Flight);
        }
        if km > t.train_above && km < t.train_below {
            modes.push(TransportMode::Train);
        }
        if km < t.bus_below {
            modes.push(TransportMode::Bus);
        }
        if km < t.car_below {
            modes.push(TransportMode::Car);
        }

        modes.truncate(t.max_suggestions);
        modes
    }
}

impl Default for TransportEstimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}
