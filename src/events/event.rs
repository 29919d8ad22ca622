//! # Runtime events emitted by the registry, launcher, and starters.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Registry events**: starter registration and overrides
//! - **Start-sequence events**: the lifecycle of one `start` call
//! - **Signal events**: the signal watcher's observations
//!
//! The [`Event`] struct carries additional metadata such as timestamps,
//! platform and service identifiers, signal names, and error text.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use servisor::{Event, EventKind, PlatformId, ServiceKind};
//!
//! let ev = Event::now(EventKind::ServiceStarting)
//!     .with_platform(PlatformId::VIRTUAL_MACHINE)
//!     .with_service(ServiceKind::HTTP);
//!
//! assert_eq!(ev.kind, EventKind::ServiceStarting);
//! assert_eq!(ev.platform.as_ref().map(|p| p.as_str()), Some("virtual_machine"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::contracts::ServiceKind;
use crate::platform::PlatformId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Registry events ===
    /// A starter was registered for a platform.
    ///
    /// Sets:
    /// - `platform`: platform identifier
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    StarterRegistered,

    /// A registration replaced an existing starter for the same platform.
    ///
    /// Published before the overwrite completes, and always followed by a
    /// [`EventKind::StarterRegistered`] for the same platform.
    ///
    /// Sets:
    /// - `platform`: platform identifier
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    StarterOverridden,

    // === Start-sequence events ===
    /// The launcher resolved a starter and is handing the service off.
    ///
    /// Sets:
    /// - `platform`: platform identifier
    /// - `service`: service kind
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ServiceStarting,

    /// The service's one-time initialization completed.
    ///
    /// Sets:
    /// - `service`: service kind
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ServiceInitialized,

    /// The service bound its routes onto the engine.
    ///
    /// Sets:
    /// - `service`: service kind
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RoutesConfigured,

    /// The engine's blocking run loop is about to start.
    ///
    /// Sets:
    /// - `service`: service kind
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    EngineStarting,

    /// The start sequence failed; the error propagates to the caller.
    ///
    /// Sets:
    /// - `service`: service kind
    /// - `error`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    StartFailed,

    // === Signal events ===
    /// A termination signal was observed; the run scope was cancelled.
    ///
    /// Sets:
    /// - `signal`: signal name (e.g. "SIGTERM")
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalReceived,

    /// The run scope was cancelled from outside before any signal arrived.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ContextCancelled,

    /// Signal-stream registration failed; shutdown degrades to parent
    /// cancellation only. The start sequence continues.
    ///
    /// Sets:
    /// - `error`: registration failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalWatchFailed,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Event classification.
    pub kind: EventKind,
    /// Platform identifier, if applicable.
    pub platform: Option<PlatformId>,
    /// Service kind, if applicable.
    pub service: Option<ServiceKind>,
    /// Signal name, if applicable.
    pub signal: Option<Arc<str>>,
    /// Human-readable error text, if applicable.
    pub error: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            platform: None,
            service: None,
            signal: None,
            error: None,
        }
    }

    /// Attaches a platform identifier.
    #[inline]
    pub fn with_platform(mut self, platform: PlatformId) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Attaches a service kind.
    #[inline]
    pub fn with_service(mut self, service: ServiceKind) -> Self {
        self.service = Some(service);
        self
    }

    /// Attaches a signal name.
    #[inline]
    pub fn with_signal(mut self, signal: impl Into<Arc<str>>) -> Self {
        self.signal = Some(signal.into());
        self
    }

    /// Attaches a human-readable error.
    #[inline]
    pub fn with_error(mut self, error: impl Into<Arc<str>>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_increases_monotonically() {
        let a = Event::now(EventKind::StarterRegistered);
        let b = Event::now(EventKind::StarterRegistered);
        let c = Event::now(EventKind::ContextCancelled);
        assert!(a.seq < b.seq);
        assert!(b.seq < c.seq);
    }

    #[test]
    fn test_builders_attach_metadata() {
        let ev = Event::now(EventKind::StartFailed)
            .with_service(ServiceKind::HTTP)
            .with_error("engine run failed: boom");
        assert_eq!(ev.service, Some(ServiceKind::HTTP));
        assert_eq!(ev.error.as_deref(), Some("engine run failed: boom"));
        assert!(ev.platform.is_none());
        assert!(ev.signal.is_none());
    }

    #[test]
    fn test_signal_event_carries_name() {
        let ev = Event::now(EventKind::SignalReceived).with_signal("SIGTERM");
        assert_eq!(ev.signal.as_deref(), Some("SIGTERM"));
    }
}
