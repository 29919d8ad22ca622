//! Test doubles shared across the crate's unit tests.
//!
//! [`RecordingService`] and [`RecordingEngine`] are flag-configurable fakes
//! that append to a shared [`CallLog`], so tests can assert both outcomes
//! and call order. [`StubStarter`] is a named no-op starter for registry
//! tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::contracts::{
    BoxHandlerFuture, Engine, HttpService, RouteHandle, RouteHandler, Service, ServiceKind,
    ServiceRef, Starter,
};
use crate::deps::Deps;
use crate::error::{BoxError, StartError};

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub(crate) fn record(&self, entry: &'static str) {
        self.0.lock().unwrap().push(entry);
    }

    pub(crate) fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// Service fake with pluggable failure points.
pub(crate) struct RecordingService {
    kind: ServiceKind,
    http: bool,
    fail_init: Option<&'static str>,
    fail_routes: Option<&'static str>,
    log: CallLog,
}

impl RecordingService {
    /// An HTTP service that succeeds everywhere.
    pub(crate) fn http(log: CallLog) -> Self {
        Self {
            kind: ServiceKind::HTTP,
            http: true,
            fail_init: None,
            fail_routes: None,
            log,
        }
    }

    /// Overrides the reported kind.
    pub(crate) fn with_kind(mut self, kind: ServiceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Makes the HTTP capability probe return `None`.
    pub(crate) fn without_http(mut self) -> Self {
        self.http = false;
        self
    }

    /// Makes `init` fail with `msg`.
    pub(crate) fn fail_init(mut self, msg: &'static str) -> Self {
        self.fail_init = Some(msg);
        self
    }

    /// Makes `configure_routes` fail with `msg`.
    pub(crate) fn fail_routes(mut self, msg: &'static str) -> Self {
        self.fail_routes = Some(msg);
        self
    }
}

#[async_trait]
impl Service for RecordingService {
    fn kind(&self) -> ServiceKind {
        self.kind.clone()
    }

    async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
        self.log.record("init");
        match self.fail_init {
            Some(msg) => Err(msg.into()),
            None => Ok(()),
        }
    }

    fn as_http(&self) -> Option<&dyn HttpService> {
        if self.http { Some(self) } else { None }
    }
}

#[async_trait]
impl HttpService for RecordingService {
    async fn configure_routes(
        &self,
        _ctx: CancellationToken,
        engine: &dyn Engine,
    ) -> Result<(), BoxError> {
        self.log.record("routes");
        if let Some(msg) = self.fail_routes {
            return Err(msg.into());
        }
        let handler: RouteHandler = Arc::new(|_req: http::Request<Vec<u8>>| -> BoxHandlerFuture {
            Box::pin(async { http::Response::new(Vec::new()) })
        });
        engine.register_handler(http::Method::GET, "/healthz", handler);
        Ok(())
    }
}

/// Engine fake with a recordable route table and a startable run loop.
pub(crate) struct RecordingEngine {
    fail_run: Option<&'static str>,
    wait_for_cancel: bool,
    run_started: Arc<Notify>,
    routes: Arc<Mutex<Vec<RouteHandle>>>,
    log: CallLog,
}

impl RecordingEngine {
    fn base(log: CallLog) -> Self {
        Self {
            fail_run: None,
            wait_for_cancel: false,
            run_started: Arc::new(Notify::new()),
            routes: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    /// A run loop that returns `Ok` immediately.
    pub(crate) fn ok(log: CallLog) -> Self {
        Self::base(log)
    }

    /// A run loop that fails with `msg` immediately.
    pub(crate) fn failing(msg: &'static str, log: CallLog) -> Self {
        let mut engine = Self::base(log);
        engine.fail_run = Some(msg);
        engine
    }

    /// A run loop that blocks until its context is cancelled.
    pub(crate) fn until_cancelled(log: CallLog) -> Self {
        let mut engine = Self::base(log);
        engine.wait_for_cancel = true;
        engine
    }

    /// Notified once the run loop has been entered.
    pub(crate) fn run_started(&self) -> Arc<Notify> {
        self.run_started.clone()
    }

    /// Shared view of the registered routes.
    pub(crate) fn routes_handle(&self) -> Arc<Mutex<Vec<RouteHandle>>> {
        self.routes.clone()
    }
}

#[async_trait]
impl Engine for RecordingEngine {
    async fn run(&self, ctx: CancellationToken, _addrs: &[SocketAddr]) -> Result<(), BoxError> {
        self.log.record("run");
        self.run_started.notify_one();
        if self.wait_for_cancel {
            ctx.cancelled().await;
        }
        match self.fail_run {
            Some(msg) => Err(msg.into()),
            None => Ok(()),
        }
    }

    fn register_handler(
        &self,
        method: http::Method,
        path: &str,
        _handler: RouteHandler,
    ) -> RouteHandle {
        let handle = RouteHandle {
            method,
            path: path.to_string(),
        };
        self.routes.lock().unwrap().push(handle.clone());
        handle
    }
}

/// Named starter that records nothing and always succeeds.
pub(crate) struct StubStarter {
    name: String,
}

impl StubStarter {
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Starter for StubStarter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(
        &self,
        _ctx: CancellationToken,
        _service: ServiceRef,
        _deps: &Deps,
    ) -> Result<(), StartError> {
        Ok(())
    }
}
