//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to runtime events emitted by the registry, launcher,
//! starters, and the signal watcher.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Registry` (registration/override), `Launcher`
//!   (`ServiceStarting`), `VmStarter` (start-sequence progress and
//!   failures), the signal watcher (signal/cancellation observations).
//! - **Consumers**: `Launcher`'s subscriber listener (fans out to
//!   [`Subscribe`](crate::Subscribe) sinks) and any ad-hoc
//!   [`Bus::subscribe`] receiver.
//!
//! None of these observation points are required for correctness; an
//! unobserved bus drops events silently.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
