//! Yatra Library
//!
//! Destination indexing, ranking and route optimization for travel
//! planning. A fixed destination catalog is loaded once into a
//! [`TravelIndex`](explorer::TravelIndex), which answers name searches,
//! popularity and attribute queries, cheapest-route requests over a
//! multimodal graph, and activity rankings.
//!
//! # Architecture
//!
//! - Small purpose-built data structures (`data_structures`) back every index
//! - The index is an explicitly constructed value; there is no global state
//! - Core operations are synchronous and never fail: absent results are
//!   `None`, empty, or an explicit route outcome
//! - Remote collaborators sit behind async traits and degrade to local data

pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod estimator;
pub mod explorer;
pub mod geo;
pub mod routing;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use explorer::TravelIndex;

/// Version information for Yatra.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter. Safe to call more than once.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
