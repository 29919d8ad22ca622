//! # Launcher: the entry point of the bootstrap pipeline.
//!
//! The [`Launcher`] owns the event bus and a [`Registry`], resolves platform
//! identifiers to starters, and delegates start calls. Built through
//! [`LauncherBuilder`], which also wires the subscriber fan-out listener and
//! registers the built-in VM starter.
//!
//! ## High-level architecture
//! ```text
//! Launcher::builder(cfg)
//!   .with_subscribers(subs)
//!   .build()
//!     ├─► Bus::new(cfg.bus_capacity)
//!     ├─► subscriber listener: Bus.subscribe() ─► sub.on_event(&Event) per sub
//!     ├─► Registry::new(bus)
//!     └─► registry.register(VIRTUAL_MACHINE, VmStarter)
//!
//! Launcher::start(ctx, service, platform, deps)
//!     ├─► registry.lookup(platform)      ─ Err ─► UnknownPlatform (no events)
//!     ├─► publish(ServiceStarting { platform, service })
//!     └─► starter.start(ctx, service, deps)      (result returned unchanged)
//! ```
//!
//! ## Rules
//! - The registry is instance-scoped: two launchers never share starters.
//! - The built-in VM registration is ordinary and overridable via
//!   [`Launcher::register_platform`].
//! - The launcher wraps nothing: a starter's error reaches the caller as-is.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::contracts::{ServiceRef, StarterRef};
use crate::core::registry::Registry;
use crate::core::vm::VmStarter;
use crate::deps::Deps;
use crate::error::StartError;
use crate::events::{Bus, Event, EventKind};
use crate::platform::PlatformId;
use crate::subscribers::Subscribe;

/// Builder for constructing a [`Launcher`].
pub struct LauncherBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl LauncherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive runtime events (registrations, start progress,
    /// failures, signals) through a dedicated listener task.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds and returns the launcher.
    ///
    /// Initializes the event bus, spawns the subscriber listener (when
    /// subscribers were provided; call from within a Tokio runtime), and
    /// registers the built-in [`VmStarter`] under
    /// [`PlatformId::VIRTUAL_MACHINE`].
    pub fn build(self) -> Launcher {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());

        if !self.subscribers.is_empty() {
            spawn_subscriber_listener(bus.subscribe(), self.subscribers);
        }

        let registry = Registry::new(bus.clone());
        registry.register(
            PlatformId::VIRTUAL_MACHINE,
            Arc::new(VmStarter::new(bus.clone())),
        );

        Launcher { bus, registry }
    }
}

/// Forwards bus events to the subscribers, in publish order.
fn spawn_subscriber_listener(
    mut rx: tokio::sync::broadcast::Receiver<Event>,
    subscribers: Vec<Arc<dyn Subscribe>>,
) {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => {
                    for sub in &subscribers {
                        sub.on_event(&ev).await;
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });
}

/// Resolves platform starters and delegates service starts to them.
pub struct Launcher {
    bus: Bus,
    registry: Registry,
}

impl Launcher {
    /// Returns a builder for a launcher with the given configuration.
    pub fn builder(cfg: Config) -> LauncherBuilder {
        LauncherBuilder::new(cfg)
    }

    /// Starts `service` on `platform`, blocking until the service stops.
    ///
    /// Resolves the starter first; an unknown platform fails with
    /// [`StartError::UnknownPlatform`] before any service method runs.
    /// The starter's result is returned unchanged.
    pub async fn start(
        &self,
        ctx: CancellationToken,
        service: ServiceRef,
        platform: PlatformId,
        deps: &Deps,
    ) -> Result<(), StartError> {
        let starter = self.registry.lookup(&platform)?;

        self.bus.publish(
            Event::now(EventKind::ServiceStarting)
                .with_platform(platform)
                .with_service(service.kind()),
        );

        starter.start(ctx, service, deps).await
    }

    /// Registers a custom starter under `platform`.
    ///
    /// Overwrites any existing registration; the override is observable on
    /// the bus. Registration is synchronous and in-memory.
    pub fn register_platform(&self, platform: PlatformId, starter: StarterRef) {
        self.registry.register(platform, starter);
    }

    /// Resolves the starter registered under `platform` without starting
    /// anything.
    pub fn platform_starter(&self, platform: &PlatformId) -> Result<StarterRef, StartError> {
        self.registry.lookup(platform)
    }

    /// Returns the event bus for ad-hoc subscription.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }
}
