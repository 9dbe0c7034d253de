// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Write-only map marker surface.

use serde::Serialize;

use crate::geo::Coordinate;

/// Something that can draw a labelled marker at a coordinate.
pub trait MarkerSurface {
    /// Places a marker. The surface gives nothing back.
    fn place_marker(&mut self, label: &str, at: Coordinate);
}

/// A placed marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker label
    pub label: String,
    /// Marker position
    pub at: Coordinate,
}

/// Surface that records markers in memory.
#[derive(Debug, Clone, Default)]
pub struct MarkerLog {
    markers: Vec<Marker>,
}

impl MarkerLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in placement order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of markers placed.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no marker was placed.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Consumes the log.
    pub fn into_markers(self) -> Vec<Marker> {
        self.markers
    }
}

impl MarkerSurface for MarkerLog {
    fn place_marker(&mut self, label: &str, at: Coordinate) {
        self.markers.push(Marker {
            label: label.to_string(),
            at,
        });
    }
}
