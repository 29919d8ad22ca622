//! # Serving engine contract.
//!
//! An [`Engine`] is the request-handling runtime a starter wires a service
//! into: routes are registered up front, then [`Engine::run`] blocks for the
//! service's operational lifetime. The common handle type is [`EngineRef`],
//! an `Arc<dyn Engine>`; starters scan the dependency bag for it.
//!
//! Handlers are typed with the `http` crate but stay framework-neutral:
//! an engine adapts [`RouteHandler`] callbacks onto whatever serving library
//! it wraps.
//!
//! ## Rules
//! - `run` blocks until the loop stops on its own or the provided context is
//!   cancelled; cooperating engines watch the token and drain cleanly.
//! - `register_handler` is synchronous; engines accept registrations any
//!   time before `run`.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::BoxError;

/// Shared handle to an engine (`Arc<dyn Engine>`).
pub type EngineRef = Arc<dyn Engine>;

/// Boxed future returned by a route handler.
pub type BoxHandlerFuture = Pin<Box<dyn Future<Output = http::Response<Vec<u8>>> + Send>>;

/// Shared async callback handling one request.
pub type RouteHandler = Arc<dyn Fn(http::Request<Vec<u8>>) -> BoxHandlerFuture + Send + Sync>;

/// Receipt for a registered route.
#[derive(Clone, Debug)]
pub struct RouteHandle {
    /// HTTP method the handler was bound under.
    pub method: http::Method,
    /// Path pattern the handler was bound under.
    pub path: String,
}

/// # Blocking, cancellable serving runtime.
///
/// Wraps a concrete serving library behind a narrow surface: register
/// handlers, then run until stopped.
#[async_trait]
pub trait Engine: Send + Sync + 'static {
    /// Runs the serving loop until it stops or `ctx` is cancelled.
    ///
    /// An empty `addrs` slice means the engine's default bind address.
    /// This call blocks the calling task for the service's lifetime.
    async fn run(&self, ctx: CancellationToken, addrs: &[SocketAddr]) -> Result<(), BoxError>;

    /// Registers a handler for `method` + `path`, returning a receipt.
    fn register_handler(
        &self,
        method: http::Method,
        path: &str,
        handler: RouteHandler,
    ) -> RouteHandle;
}
