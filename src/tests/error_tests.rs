//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::catalog::Category;
use crate::data_structures::{KeyedStore, LexiconTrie};
use crate::error::config::ConfigError;
use crate::error::{report_error, set_error_reporter, ErrorContext, ErrorReporter, TracingErrorReporter, YatraError};
use crate::routing::DestinationGraph;
use crate::routing::TransportMode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = YatraError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that subsystem errors convert into `YatraError`.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: YatraError = io_error.into();
    assert!(format!("{error}").contains("file not found"));

    let error: YatraError = ConfigError::ValidationError("bad limit".to_string()).into();
    assert!(matches!(error, YatraError::Config(_)));
    assert!(format!("{error}").contains("bad limit"));

    let error: YatraError = "Desert".parse::<Category>().unwrap_err().into();
    assert_eq!(format!("{error}"), "Unknown destination category: Desert");
}

/// Test that index construction errors surface with their source.
#[test]
fn test_index_errors_convert() {
    let mut store: KeyedStore<u32> = KeyedStore::new();
    let error: YatraError = store.set("", 1).unwrap_err().into();
    assert!(matches!(error, YatraError::Store(_)));

    let mut trie: LexiconTrie<u32> = LexiconTrie::new();
    let error: YatraError = trie.insert("", 1).unwrap_err().into();
    assert!(matches!(error, YatraError::Trie(_)));

    let mut graph = DestinationGraph::new();
    let error: YatraError = graph
        .add_edge("A", "B", -1.0, TransportMode::Car)
        .unwrap_err()
        .into();
    assert!(matches!(error, YatraError::Routing(_)));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports once installed.
///
/// Only the first installation takes effect, so this is the only test that
/// installs a reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    report_error(ErrorContext::new(YatraError::Custom("test error".to_string()), "test_component"));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(YatraError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
