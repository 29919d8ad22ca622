//! # servisor
//!
//! **Servisor** is a small bootstrapping library for Rust services.
//!
//! It provides a pluggable registry of platform starters: a service declares
//! what it is (its [`ServiceKind`]), a starter knows how to bring it up on a
//! named platform, and the [`Launcher`] resolves the platform identifier and
//! drives the start sequence. The crate is designed as a building block for
//! applications that want one entry point across runtime environments.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!    ┌──────────────┐        ┌──────────────┐       ┌──────────────┐
//!    │   Service    │        │    Deps      │       │   Engine     │
//!    │ (your app)   │        │ (typed bag)  │       │ (HTTP stack) │
//!    └──────┬───────┘        └──────┬───────┘       └──────┬───────┘
//!           └───────────────────────┼──────────────────────┘
//!                                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Launcher (entry point)                                           │
//! │  - Bus (broadcast events)                                         │
//! │  - Registry (PlatformId ─► StarterRef)                            │
//! │  - subscriber listener (fans out to Subscribe sinks)              │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                     ┌──────────────────────┐
//!                     │  Starter (per       ─┼──► VmStarter (built-in)
//!                     │  platform strategy)  │    custom starters...
//!                     └──────────┬───────────┘
//!                                ▼
//!            init ─► classify ─► probe ─► routes ─► signal watcher ─► run
//!                                │
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Bus (broadcast channel)                    │
//! │                 (capacity: Config::bus_capacity)                  │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                      LogWriter / custom Subscribe sinks
//! ```
//!
//! ### Lifecycle
//! ```text
//! Launcher::start(ctx, service, platform, deps)
//!   ├─► Registry::lookup(platform)       ─ unknown ─► UnknownPlatform
//!   ├─► publish(ServiceStarting)
//!   └─► Starter::start(ctx, service, deps)
//!         ├─► service.init(ctx, deps)    ─ Err ─► InitializationFailed
//!         ├─► service.kind()             ─ other ─► UnsupportedServiceKind
//!         ├─► service.as_http()          ─ None ─► ServiceKindMismatch
//!         ├─► deps.engine()              ─ None ─► EngineNotFound
//!         ├─► http.configure_routes(ctx, engine)
//!         ├─► spawn signal watcher ──► run_ctx (child token)
//!         │     ├─ SIGINT/SIGTERM ─► publish(SignalReceived), cancel run_ctx
//!         │     └─ ctx cancelled  ─► publish(ContextCancelled)
//!         └─► engine.run(run_ctx, [])    (blocks until stop/cancel)
//! ```
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits                  |
//! |-------------------|----------------------------------------------------------------------|-------------------------------------|
//! | **Registry**      | Map platform identifiers to start strategies, override-safe.        | [`Registry`], [`PlatformId`]        |
//! | **Contracts**     | Capability vocabulary between services, engines, and starters.      | [`Service`], [`Engine`], [`Starter`]|
//! | **Launch**        | Resolve-and-delegate entry point with builder configuration.        | [`Launcher`], [`LauncherBuilder`]   |
//! | **Dependencies**  | Typed heterogeneous bag scanned for the first match.                | [`Deps`]                            |
//! | **Observability** | Broadcast runtime events to pluggable sinks.                        | [`Event`], [`Bus`], [`Subscribe`]   |
//! | **Errors**        | Typed errors for every failure point of the start sequence.         | [`StartError`]                      |
//!
//! ## Optional features
//! - `logging` *(default)*: exports [`LogWriter`], a built-in subscriber that
//!   renders events through `tracing`.
//!
//! ## Example
//! ```rust
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use servisor::{
//!     BoxError, BoxHandlerFuture, Config, Deps, Engine, HttpService, Launcher, PlatformId,
//!     RouteHandle, RouteHandler, Service, ServiceKind, ServiceRef,
//! };
//!
//! // An engine stub; a real one would wrap an HTTP server library.
//! struct InlineEngine;
//!
//! #[async_trait]
//! impl Engine for InlineEngine {
//!     async fn run(&self, _ctx: CancellationToken, _addrs: &[SocketAddr]) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//!
//!     fn register_handler(
//!         &self,
//!         method: http::Method,
//!         path: &str,
//!         _handler: RouteHandler,
//!     ) -> RouteHandle {
//!         RouteHandle { method, path: path.to_string() }
//!     }
//! }
//!
//! struct Hello;
//!
//! #[async_trait]
//! impl Service for Hello {
//!     fn kind(&self) -> ServiceKind {
//!         ServiceKind::HTTP
//!     }
//!
//!     async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//!
//!     fn as_http(&self) -> Option<&dyn HttpService> {
//!         Some(self)
//!     }
//! }
//!
//! #[async_trait]
//! impl HttpService for Hello {
//!     async fn configure_routes(
//!         &self,
//!         _ctx: CancellationToken,
//!         engine: &dyn Engine,
//!     ) -> Result<(), BoxError> {
//!         let handler: RouteHandler = Arc::new(|_req: http::Request<Vec<u8>>| -> BoxHandlerFuture {
//!             Box::pin(async { http::Response::new(b"hello".to_vec()) })
//!         });
//!         engine.register_handler(http::Method::GET, "/hello", handler);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build the launcher; the VM starter is registered out of the box.
//!     let launcher = Launcher::builder(Config::default()).build();
//!
//!     let service: ServiceRef = Arc::new(Hello);
//!     let deps = Deps::new().with_engine(InlineEngine);
//!
//!     // Blocks until the engine's run loop returns (immediately here).
//!     let ctx = CancellationToken::new();
//!     launcher
//!         .start(ctx, service, PlatformId::VIRTUAL_MACHINE, &deps)
//!         .await?;
//!     Ok(())
//! }
//! ```
mod config;
mod contracts;
mod core;
mod deps;
mod error;
mod events;
mod platform;
mod subscribers;

#[cfg(test)]
pub(crate) mod testing;

// ---- Public re-exports ----

pub use crate::config::Config;
pub use crate::contracts::{
    BoxHandlerFuture, Engine, EngineRef, HttpService, RouteHandle, RouteHandler, Service,
    ServiceKind, ServiceRef, Starter, StarterRef,
};
pub use crate::core::{Launcher, LauncherBuilder, Registry, VmStarter};
pub use crate::deps::Deps;
pub use crate::error::{BoxError, StartError};
pub use crate::events::{Bus, Event, EventKind};
pub use crate::platform::PlatformId;
pub use crate::subscribers::Subscribe;

// Optional: expose the built-in tracing-backed logger subscriber.
// Enable with: `--features logging` (on by default)
#[cfg(feature = "logging")]
pub use crate::subscribers::LogWriter;
