//! Transport estimator configuration module.
//!
//! Cost and travel-time profiles per mode and the distance thresholds used
//! to suggest modes for a trip.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::routing::TransportMode;
use serde::{Deserialize, Serialize};

/// Estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Flight profile
    pub flight: ModeProfile,
    /// Train profile
    pub train: ModeProfile,
    /// Bus profile
    pub bus: ModeProfile,
    /// Car profile
    pub car: ModeProfile,
    /// Mode suggestion thresholds
    pub thresholds: ModeThresholds,
}

impl EstimatorConfig {
    /// Profile for `mode`, if it has one.
    pub fn profile(&self, mode: &TransportMode) -> Option<&ModeProfile> {
        match mode {
            TransportMode::Flight => Some(&self.flight),
            TransportMode::Train => Some(&self.train),
            TransportMode::Bus => Some(&self.bus),
            TransportMode::Car => Some(&self.car),
            TransportMode::Other(_) => None,
        }
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            flight: ModeProfile {
                cost_per_km: 5.0,
                base_cost: 2500.0,
                minutes_per_km: 0.08,
            },
            train: ModeProfile {
                cost_per_km: 1.5,
                base_cost: 200.0,
                minutes_per_km: 1.0,
            },
            bus: ModeProfile {
                cost_per_km: 1.2,
                base_cost: 100.0,
                minutes_per_km: 1.4,
            },
            car: ModeProfile {
                cost_per_km: 10.0,
                base_cost: 0.0,
                minutes_per_km: 1.2,
            },
            thresholds: ModeThresholds::default(),
        }
    }
}

impl Validate for EstimatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.flight.validate_as("flight")?;
        self.train.validate_as("train")?;
        self.bus.validate_as("bus")?;
        self.car.validate_as("car")?;
        self.thresholds.validate()
    }
}

/// Cost and time model of one mode.
///
/// `cost = round(base_cost + cost_per_km * km)`,
/// `minutes = round(minutes_per_km * km)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Currency units per kilometer
    pub cost_per_km: f64,
    /// Fixed cost per trip
    pub base_cost: f64,
    /// Travel minutes per kilometer
    pub minutes_per_km: f64,
}

impl ModeProfile {
    fn validate_as(&self, mode: &str) -> ConfigResult<()> {
        for (field, value) in [
            ("cost_per_km", self.cost_per_km),
            ("base_cost", self.base_cost),
            ("minutes_per_km", self.minutes_per_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("estimator.{mode}.{field}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Distance thresholds in kilometers for suggesting modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeThresholds {
    /// Flights are suggested above this distance
    pub flight_above: f64,
    /// Trains are suggested above this distance...
    pub train_above: f64,
    /// ...and below this one
    pub train_below: f64,
    /// Buses are suggested below this distance
    pub bus_below: f64,
    /// Cars are suggested below this distance
    pub car_below: f64,
    /// Maximum number of suggested modes
    pub max_suggestions: usize,
}

impl Default for ModeThresholds {
    fn default() -> Self {
        Self {
            flight_above: 1000.0,
            train_above: 200.0,
            train_below: 1500.0,
            bus_below: 500.0,
            car_below: 300.0,
            max_suggestions: 3,
        }
    }
}

impl Validate for ModeThresholds {
    fn validate(&self) -> ConfigResult<()> {
        if self.train_above >= self.train_below {
            return Err(ConfigError::ValidationError(
                "train_above must be less than train_below".to_string(),
            ));
        }

        if self.max_suggestions == 0 {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
