// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Interfaces to the systems around the index.
//!
//! None of these feed back into search, ranking or routing. Remote lookups
//! degrade to canned data, telemetry is dropped on failure, and the map
//! surface is write-only.

mod markers;
mod places;
mod telemetry;

pub use markers::{Marker, MarkerLog, MarkerSurface};
pub use places::{DateRange, Listing, ListingSource, PlaceLookup, PlaceProvider, PlaceReport, StaticPlaces};
pub use telemetry::{Event, EventSink, Telemetry, TracingSink};

#[cfg(test)]
pub use places::MockPlaceProvider;
#[cfg(test)]
pub use telemetry::MockEventSink;
