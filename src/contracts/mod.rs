//! # Capability contracts between services, engines, and starters.
//!
//! This module provides the trait vocabulary the bootstrap pipeline is built
//! from:
//! - [`Service`] - a startable unit with a declared [`ServiceKind`]
//! - [`HttpService`] - the HTTP capability a service may expose
//! - [`Engine`] - the serving runtime a starter wires routes into and runs
//! - [`Starter`] - a platform-specific start strategy
//!
//! ## Quick wiring
//! ```text
//! Launcher::start(ctx, service, platform, deps)
//!      └─► Starter::start(ctx, service, deps)
//!           ├─► Service::init(ctx, deps)
//!           ├─► Service::kind() / Service::as_http()
//!           ├─► HttpService::configure_routes(ctx, engine)
//!           └─► Engine::run(ctx, addrs)        (blocking)
//! ```

mod engine;
mod service;
mod starter;

pub use engine::{BoxHandlerFuture, Engine, EngineRef, RouteHandle, RouteHandler};
pub use service::{HttpService, Service, ServiceKind, ServiceRef};
pub use starter::{Starter, StarterRef};
