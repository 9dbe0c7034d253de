// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Route optimization between destinations.
//!
//! The graph is built once from the catalog through an [`EdgePolicy`] and
//! then queried with [`DestinationGraph::find_shortest_path`].

mod error;
pub mod graph;
mod mode;
pub mod policy;

pub use error::{RoutingError, RoutingResult};
pub use graph::{DestinationGraph, Edge, Hop, Route, RouteOutcome};
pub use mode::TransportMode;
pub use policy::{EdgePolicy, EdgeSpec, FullMeshPolicy, TablePolicy};
