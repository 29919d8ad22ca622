//! # VM starter - the built-in virtual-machine start strategy.
//!
//! [`VmStarter`] drives a service through the full start sequence on the
//! virtual-machine platform and blocks on the engine's run loop.
//!
//! ## Lifecycle
//! ```text
//! VmStarter::start(ctx, service, deps)
//!   ├─► service.init(ctx, deps)            ─ Err ─► InitializationFailed
//!   │      └─► publish(ServiceInitialized)
//!   ├─► service.kind()
//!   │      ├─ HTTP ──► start_http()
//!   │      └─ other ─► UnsupportedServiceKind
//!   │
//!   └─ start_http:
//!        ├─► service.as_http()             ─ None ─► ServiceKindMismatch
//!        ├─► deps.engine()                 ─ None ─► EngineNotFound
//!        ├─► http.configure_routes(ctx, engine)
//!        │      ├─ Err ─► RouteConfigurationFailed
//!        │      └─► publish(RoutesConfigured)
//!        ├─► spawn_signal_watcher(ctx) ──► run_ctx (child token)
//!        ├─► publish(EngineStarting)
//!        └─► engine.run(run_ctx, [])       ─ Err ─► EngineRunFailed
//! ```
//!
//! ## Rules
//! - Initialization gates everything; no later step runs after it fails.
//! - The engine must already be in the dependency bag before routes are
//!   configured; a missing engine stops the sequence first.
//! - Every failure publishes one `StartFailed` event and propagates the
//!   error unchanged to the caller.
//! - The watcher owns a child token of the caller's context; a termination
//!   signal cancels the child only, the caller's token is never cancelled
//!   from inside.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::contracts::{ServiceKind, ServiceRef, Starter};
use crate::core::signals::Termination;
use crate::deps::Deps;
use crate::error::StartError;
use crate::events::{Bus, Event, EventKind};

/// Starter for the virtual-machine platform.
///
/// Stateless apart from its bus handle; one instance can serve any number
/// of concurrent `start` calls.
pub struct VmStarter {
    bus: Bus,
}

impl VmStarter {
    /// Creates a starter publishing on `bus`.
    pub fn new(bus: Bus) -> Self {
        Self { bus }
    }

    /// Creates a starter with a private, unobserved bus.
    ///
    /// Observability degrades to no-op; the start sequence itself is
    /// unaffected. Useful when embedding the starter without a launcher.
    pub fn silent() -> Self {
        Self { bus: Bus::new(1) }
    }

    /// Returns the bus this starter publishes on.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Publishes a `StartFailed` event and hands the error back.
    fn fail(&self, kind: &ServiceKind, err: StartError) -> StartError {
        self.bus.publish(
            Event::now(EventKind::StartFailed)
                .with_service(kind.clone())
                .with_error(err.to_string()),
        );
        err
    }

    /// Spawns the signal watcher and returns the run scope.
    ///
    /// The returned token is a child of `ctx`: a termination signal cancels
    /// it, and cancellation of `ctx` propagates into it. If signal-stream
    /// registration fails the watcher is skipped; the child token still
    /// follows the caller's cancellation.
    fn spawn_signal_watcher(&self, ctx: &CancellationToken) -> CancellationToken {
        let run_ctx = ctx.child_token();

        let mut term = match Termination::new() {
            Ok(term) => term,
            Err(err) => {
                self.bus.publish(
                    Event::now(EventKind::SignalWatchFailed).with_error(err.to_string()),
                );
                return run_ctx;
            }
        };

        let bus = self.bus.clone();
        let watched = run_ctx.clone();
        tokio::spawn(async move {
            tokio::select! {
                sig = term.recv() => {
                    bus.publish(Event::now(EventKind::SignalReceived).with_signal(sig.as_str()));
                    watched.cancel();
                }
                _ = watched.cancelled() => {
                    bus.publish(Event::now(EventKind::ContextCancelled));
                }
            }
        });

        run_ctx
    }

    /// Drives the HTTP path: capability probe, engine lookup, route
    /// configuration, then the blocking run.
    async fn start_http(
        &self,
        ctx: CancellationToken,
        service: ServiceRef,
        deps: &Deps,
        kind: ServiceKind,
    ) -> Result<(), StartError> {
        let http = match service.as_http() {
            Some(http) => http,
            None => {
                let err = StartError::ServiceKindMismatch { kind: kind.clone() };
                return Err(self.fail(&kind, err));
            }
        };

        let engine = match deps.engine() {
            Some(engine) => engine,
            None => return Err(self.fail(&kind, StartError::EngineNotFound)),
        };

        if let Err(source) = http.configure_routes(ctx.clone(), engine.as_ref()).await {
            return Err(self.fail(&kind, StartError::RouteConfigurationFailed { source }));
        }
        self.bus
            .publish(Event::now(EventKind::RoutesConfigured).with_service(kind.clone()));

        let run_ctx = self.spawn_signal_watcher(&ctx);

        self.bus
            .publish(Event::now(EventKind::EngineStarting).with_service(kind.clone()));
        match engine.run(run_ctx, &[]).await {
            Ok(()) => Ok(()),
            Err(source) => Err(self.fail(&kind, StartError::EngineRunFailed { source })),
        }
    }
}

#[async_trait]
impl Starter for VmStarter {
    fn name(&self) -> &str {
        "virtual_machine"
    }

    async fn start(
        &self,
        ctx: CancellationToken,
        service: ServiceRef,
        deps: &Deps,
    ) -> Result<(), StartError> {
        let kind = service.kind();

        if let Err(source) = service.init(ctx.clone(), deps).await {
            return Err(self.fail(&kind, StartError::InitializationFailed { source }));
        }
        self.bus
            .publish(Event::now(EventKind::ServiceInitialized).with_service(kind.clone()));

        if kind == ServiceKind::HTTP {
            self.start_http(ctx, service, deps, kind).await
        } else {
            Err(self.fail(&kind, StartError::UnsupportedServiceKind { kind: kind.clone() }))
        }
    }
}
