//! # LogWriter: structured event logger
//!
//! A built-in subscriber that renders incoming [`Event`]s through
//! [`tracing`]. Overrides and degradations log at `warn`, start failures at
//! `error`, everything else at `info`.
//!
//! The writer only emits records; install a `tracing` subscriber (e.g.
//! `tracing_subscriber::fmt()`) in the host application to see output.

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event logging subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn platform(e: &Event) -> &str {
    e.platform.as_ref().map(|p| p.as_str()).unwrap_or("-")
}

fn service(e: &Event) -> &str {
    e.service.as_ref().map(|k| k.as_str()).unwrap_or("-")
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::StarterRegistered => {
                tracing::info!(platform = platform(e), "registered platform starter");
            }
            EventKind::StarterOverridden => {
                tracing::warn!(platform = platform(e), "overriding existing platform starter");
            }
            EventKind::ServiceStarting => {
                tracing::info!(
                    platform = platform(e),
                    service = service(e),
                    "starting service"
                );
            }
            EventKind::ServiceInitialized => {
                tracing::info!(service = service(e), "service initialized");
            }
            EventKind::RoutesConfigured => {
                tracing::info!(service = service(e), "routes configured");
            }
            EventKind::EngineStarting => {
                tracing::info!(service = service(e), "starting engine");
            }
            EventKind::StartFailed => {
                tracing::error!(
                    service = service(e),
                    error = e.error.as_deref().unwrap_or("unknown"),
                    "failed to start service"
                );
            }
            EventKind::SignalReceived => {
                tracing::info!(
                    signal = e.signal.as_deref().unwrap_or("unknown"),
                    "received signal"
                );
            }
            EventKind::ContextCancelled => {
                tracing::info!("context done, exiting signal watcher");
            }
            EventKind::SignalWatchFailed => {
                tracing::warn!(
                    error = e.error.as_deref().unwrap_or("unknown"),
                    "signal watcher unavailable; relying on caller cancellation"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
