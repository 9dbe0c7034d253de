// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Edge-generation policies.
//!
//! A policy decides which edges join a pair of destinations. The graph is
//! built by offering every unordered pair to the policy, so swapping in real
//! routing data means supplying a different policy, not touching the search.

use std::collections::HashMap;

use crate::catalog::Destination;
use crate::config::routing::MeshConfig;
use crate::routing::TransportMode;

/// One edge proposed by a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    /// Mode of the edge
    pub mode: TransportMode,
    /// Distance-like traversal weight
    pub weight: f64,
}

/// Decides the edges between two destinations.
pub trait EdgePolicy {
    /// Edges to add between `a` and `b`. Each is inserted in both directions.
    fn edges_between(&self, a: &Destination, b: &Destination) -> Vec<EdgeSpec>;
}

/// Connects every pair with one edge per mode, weighted by the great-circle
/// distance times a per-mode multiplier.
#[derive(Debug, Clone)]
pub struct FullMeshPolicy {
    multipliers: Vec<(TransportMode, f64)>,
}

impl FullMeshPolicy {
    /// Creates a policy with explicit `(mode, multiplier)` pairs.
    pub fn new(multipliers: Vec<(TransportMode, f64)>) -> Self {
        Self { multipliers }
    }
}

impl From<&MeshConfig> for FullMeshPolicy {
    fn from(config: &MeshConfig) -> Self {
        Self::new(config.multipliers())
    }
}

impl Default for FullMeshPolicy {
    fn default() -> Self {
        Self::from(&MeshConfig::default())
    }
}

impl EdgePolicy for FullMeshPolicy {
    fn edges_between(&self, a: &Destination, b: &Destination) -> Vec<EdgeSpec> {
        let distance = a.location.distance_km(&b.location);
        self.multipliers
            .iter()
            .map(|(mode, multiplier)| EdgeSpec {
                mode: mode.clone(),
                weight: distance * multiplier,
            })
            .collect()
    }
}

/// Connects only the pairs listed in an explicit table, in either direction.
#[derive(Debug, Clone, Default)]
pub struct TablePolicy {
    edges: HashMap<(String, String), Vec<EdgeSpec>>,
}

impl TablePolicy {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn pair_key(a: &str, b: &str) -> (String, String) {
        let (a, b) = (a.to_lowercase(), b.to_lowercase());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Adds an edge between two named destinations.
    pub fn with_edge(mut self, a: &str, b: &str, mode: TransportMode, weight: f64) -> Self {
        self.edges
            .entry(Self::pair_key(a, b))
            .or_default()
            .push(EdgeSpec { mode, weight });
        self
    }
}

impl EdgePolicy for TablePolicy {
    fn edges_between(&self, a: &Destination, b: &Destination) -> Vec<EdgeSpec> {
        self.edges
            .get(&Self::pair_key(&a.name, &b.name))
            .cloned()
            .unwrap_or_default()
    }
}
