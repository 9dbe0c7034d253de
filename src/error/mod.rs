//! Error module for Yatra.
//!
//! Each subsystem owns a focused error enum; `YatraError` wraps them for code
//! that crosses subsystem boundaries (index construction, the CLI).
//!
//! Lookups never fail with an error: a missing destination is `None` and an
//! unreachable route is `RouteOutcome::Unreachable`. Collaborator failures
//! are recovered where they happen and only ever logged.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::catalog::UnknownCategory;
use crate::data_structures::{KeyedStoreError, LexiconTrieError};
use crate::routing::RoutingError;

pub mod config;

/// Result type alias used throughout Yatra.
pub type YatraResult<T> = Result<T, YatraError>;

/// Core error enum for Yatra.
#[derive(Error, Debug)]
pub enum YatraError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A name could not be added to the prefix index.
    #[error("Prefix index error: {0}")]
    Trie(#[from] LexiconTrieError),

    /// A name could not be added to the exact-name store.
    #[error("Keyed store error: {0}")]
    Store(#[from] KeyedStoreError),

    /// The destination graph rejected an edge.
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    /// A category label was not recognized.
    #[error(transparent)]
    Category(#[from] UnknownCategory),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: YatraError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: YatraError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs through `tracing`, attaching the current span
/// trace when a `tracing_error::ErrorLayer` is installed.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        let span_trace = tracing_error::SpanTrace::capture();
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            span_trace = %span_trace,
            "Error reported"
        );
    }
}

/// Installed error reporter.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the error reporter. Only the first call takes effect.
///
/// # Returns
///
/// `true` if this call installed the reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTER.set(reporter).is_ok();
    if !installed {
        tracing::warn!("Error reporter was already installed, ignoring new reporter");
    }
    installed
}

/// Report an error through the installed reporter, or stderr if none is set.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
