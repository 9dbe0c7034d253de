// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the destination graph.

/// Errors raised while building the destination graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    /// Edge weights must be finite and non-negative for shortest paths to hold.
    #[error("Invalid weight {weight} on edge {from} - {to}")]
    InvalidWeight {
        /// One endpoint
        from: String,
        /// The other endpoint
        to: String,
        /// The rejected weight
        weight: f64,
    },

    /// Vertex ids must be non-empty.
    #[error("Empty vertex id not allowed")]
    EmptyVertex,
}

/// Result type for graph operations
pub type RoutingResult<T> = Result<T, RoutingError>;
