//! End-to-end shutdown on a real POSIX signal.
//!
//! Raising a signal is process-wide, so this scenario lives in its own test
//! binary instead of next to the unit tests.

#![cfg(unix)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use servisor::{
    BoxError, Config, Deps, Engine, EventKind, HttpService, Launcher, PlatformId, RouteHandle,
    RouteHandler, Service, ServiceKind, ServiceRef,
};

/// Engine that parks in `run` until its context is cancelled.
struct WaitEngine {
    started: Arc<Notify>,
}

#[async_trait]
impl Engine for WaitEngine {
    async fn run(&self, ctx: CancellationToken, _addrs: &[SocketAddr]) -> Result<(), BoxError> {
        self.started.notify_one();
        ctx.cancelled().await;
        Ok(())
    }

    fn register_handler(
        &self,
        method: http::Method,
        path: &str,
        _handler: RouteHandler,
    ) -> RouteHandle {
        RouteHandle {
            method,
            path: path.to_string(),
        }
    }
}

struct Probe;

#[async_trait]
impl Service for Probe {
    fn kind(&self) -> ServiceKind {
        ServiceKind::HTTP
    }

    async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
        Ok(())
    }

    fn as_http(&self) -> Option<&dyn HttpService> {
        Some(self)
    }
}

#[async_trait]
impl HttpService for Probe {
    async fn configure_routes(
        &self,
        _ctx: CancellationToken,
        _engine: &dyn Engine,
    ) -> Result<(), BoxError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_sigterm_cancels_engine_and_reports_signal() {
    let launcher = Arc::new(Launcher::builder(Config::default()).build());
    let mut events = launcher.bus().subscribe();

    let started = Arc::new(Notify::new());
    let deps = Deps::new().with_engine(WaitEngine {
        started: started.clone(),
    });
    let service: ServiceRef = Arc::new(Probe);

    let ctx = CancellationToken::new();
    let task = tokio::spawn({
        let launcher = Arc::clone(&launcher);
        let ctx = ctx.clone();
        async move {
            launcher
                .start(ctx, service, PlatformId::VIRTUAL_MACHINE, &deps)
                .await
        }
    });

    // The watcher's signal streams are registered before the engine runs,
    // so once `run` has been entered the raise below cannot be missed.
    timeout(Duration::from_secs(5), started.notified())
        .await
        .expect("engine did not start in time");

    unsafe {
        libc::raise(libc::SIGTERM);
    }

    let result = timeout(Duration::from_secs(5), task)
        .await
        .expect("start did not return after SIGTERM")
        .expect("start task panicked");
    assert!(result.is_ok(), "start returned {result:?}");

    let mut signal = None;
    loop {
        let ev = timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("no signal event observed")
            .expect("event bus closed");
        if ev.kind == EventKind::SignalReceived {
            signal = ev.signal.clone();
            break;
        }
    }
    assert_eq!(signal.as_deref(), Some("SIGTERM"));
}
