// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Best-effort event logging.
//!
//! Events are handed to a sink on a spawned task. The caller never waits for
//! delivery and never sees a failure.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;

/// A usage event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Event name, e.g. `search` or `route`
    pub name: String,
    /// Event payload
    pub detail: Value,
    /// When the event happened
    pub at: DateTime<Utc>,
}

impl Event {
    /// Creates an event timestamped now.
    pub fn new(name: impl Into<String>, detail: Value) -> Self {
        Self {
            name: name.into(),
            detail,
            at: Utc::now(),
        }
    }
}

/// Destination for usage events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Persists one event.
    async fn record(&self, event: Event) -> anyhow::Result<()>;
}

/// Sink that writes events to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl EventSink for TracingSink {
    async fn record(&self, event: Event) -> anyhow::Result<()> {
        tracing::info!(event = %event.name, detail = %event.detail, at = %event.at, "Telemetry");
        Ok(())
    }
}

/// Fire-and-forget dispatcher in front of an optional sink.
#[derive(Clone, Default)]
pub struct Telemetry {
    sink: Option<Arc<dyn EventSink>>,
}

impl Telemetry {
    /// Dispatcher delivering to `sink`.
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Dispatcher that drops every event.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a sink is attached.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Spawns delivery of `event`. Returns `None` when telemetry is disabled
    /// or no tokio runtime is running; the handle is only useful for tests.
    pub fn emit(&self, event: Event) -> Option<JoinHandle<()>> {
        let sink = self.sink.clone()?;
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::trace!(event = %event.name, "No runtime, dropping telemetry event");
                return None;
            }
        };

        Some(runtime.spawn(async move {
            let name = event.name.clone();
            if let Err(e) = sink.record(event).await {
                tracing::debug!(event = %name, error = %e, "Telemetry event dropped");
            }
        }))
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_event_is_delivered() {
        let mut sink = MockEventSink::new();
        sink.expect_record()
            .withf(|event| event.name == "search" && event.detail["query"] == "goa")
            .times(1)
            .returning(|_| Ok(()));

        let telemetry = Telemetry::new(Arc::new(sink));
        let handle = telemetry.emit(Event::new("search", json!({ "query": "goa" })));
        handle.unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn test_sink_failure_is_swallowed() {
        let mut sink = MockEventSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("store unavailable")));

        let telemetry = Telemetry::new(Arc::new(sink));
        let handle = telemetry.emit(Event::new("route", Value::Null)).unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_telemetry_drops_events() {
        let telemetry = Telemetry::disabled();
        assert!(!telemetry.is_enabled());
        assert!(telemetry.emit(Event::new("search", Value::Null)).is_none());
    }

    #[test]
    fn test_emit_without_runtime() {
        let telemetry = Telemetry::new(Arc::new(TracingSink));
        assert!(telemetry.emit(Event::new("search", Value::Null)).is_none());
    }
}
