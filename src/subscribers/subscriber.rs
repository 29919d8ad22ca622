//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], an extension point for plugging custom event
//! sinks into the runtime (logging, metrics, audit trails).
//!
//! ## Architecture
//! ```text
//! Bus ──► subscriber listener (in Launcher) ──► sub1.on_event()
//!                                           ──► sub2.on_event()
//!                                           ──► subN.on_event()
//! ```
//!
//! ## Rules
//! - Events are delivered in publish order, one at a time per listener.
//! - A slow subscriber delays the others on the same listener; keep
//!   `on_event` fast and non-blocking.
//! - A listener that lags behind the bus capacity skips the oldest events
//!   and continues.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use servisor::{Event, EventKind, Subscribe};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Subscribe for Metrics {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::StartFailed) {
//!             // export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }  // prefer short, descriptive names
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for runtime observability.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from the launcher's listener task, not in the publisher
    /// context. Events arrive in publish order.
    async fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs/metrics.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
