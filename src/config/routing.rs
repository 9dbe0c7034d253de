//! Routing configuration module.
//!
//! Cost rates per transport mode, the preferred-mode discount, and the
//! multipliers used when synthesizing a full-mesh graph.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::routing::TransportMode;
use serde::{Deserialize, Serialize};

/// Routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Currency units per distance unit, by mode
    pub rates: ModeRates,

    /// Factor applied to the traversal weight of edges in the preferred mode
    pub preference_discount: f64,

    /// Edge synthesis multipliers
    pub mesh: MeshConfig,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            rates: ModeRates::default(),
            preference_discount: 0.8,
            mesh: MeshConfig::default(),
        }
    }
}

impl Validate for RoutingConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.rates.validate()?;
        self.mesh.validate()?;

        if !(self.preference_discount > 0.0 && self.preference_discount <= 1.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "routing.preference_discount".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }

        Ok(())
    }
}

/// Cost per distance unit for each mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRates {
    /// Flight rate
    pub flight: f64,
    /// Train rate
    pub train: f64,
    /// Bus rate
    pub bus: f64,
    /// Car rate
    pub car: f64,
    /// Rate for any other mode
    pub default: f64,
}

impl ModeRates {
    /// Rate for `mode`; unknown modes get the default rate.
    pub fn rate_for(&self, mode: &TransportMode) -> f64 {
        match mode {
            TransportMode::Flight => self.flight,
            TransportMode::Train => self.train,
            TransportMode::Bus => self.bus,
            TransportMode::Car => self.car,
            TransportMode::Other(_) => self.default,
        }
    }
}

impl Default for ModeRates {
    fn default() -> Self {
        Self {
            flight: 8.0,
            train: 2.0,
            bus: 1.5,
            car: 3.0,
            default: 5.0,
        }
    }
}

impl Validate for ModeRates {
    fn validate(&self) -> ConfigResult<()> {
        for (key, rate) in [
            ("flight", self.flight),
            ("train", self.train),
            ("bus", self.bus),
            ("car", self.car),
            ("default", self.default),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("routing.rates.{key}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Distance multipliers for the parallel edges of a full-mesh graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Flight edge multiplier
    pub flight: f64,
    /// Train edge multiplier
    pub train: f64,
    /// Car edge multiplier
    pub car: f64,
}

impl MeshConfig {
    /// The `(mode, multiplier)` pairs, in insertion order.
    pub fn multipliers(&self) -> Vec<(TransportMode, f64)> {
        vec![
            (TransportMode::Flight, self.flight),
            (TransportMode::Train, self.train),
            (TransportMode::Car, self.car),
        ]
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            flight: 1.0,
            train: 1.5,
            car: 2.0,
        }
    }
}

impl Validate for MeshConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, multiplier) in [("flight", self.flight), ("train", self.train), ("car", self.car)] {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("routing.mesh.{key}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}
