//! # Example: basic_http
//!
//! Minimal example of bringing up an HTTP service on the built-in
//! `virtual_machine` platform.
//!
//! Demonstrates how to:
//! - Implement [`Service`] + [`HttpService`] for an application.
//! - Provide an [`Engine`] through the [`Deps`] bag.
//! - Attach the built-in [`LogWriter`] subscriber and start via [`Launcher`].
//!
//! ## Flow
//! ```text
//! HelloService ──► Launcher::start(ctx, service, "virtual_machine", deps)
//!     ├─► Registry::lookup("virtual_machine") ──► VmStarter
//!     ├─► Bus.publish(ServiceStarting)
//!     └─► VmStarter::start()
//!           ├─► service.init()              ──► publish(ServiceInitialized)
//!           ├─► service.as_http()
//!           ├─► deps.engine()               ──► EchoEngine
//!           ├─► configure_routes()          ──► publish(RoutesConfigured)
//!           ├─► spawn signal watcher
//!           ├─► publish(EngineStarting)
//!           └─► engine.run(run_ctx, [])
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_http
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use servisor::{
    BoxError, BoxHandlerFuture, Config, Deps, Engine, HttpService, Launcher, LogWriter,
    PlatformId, RouteHandle, RouteHandler, Service, ServiceKind, ServiceRef, Subscribe,
};

/// In-memory engine that records routes and "serves" one synthetic request
/// per route before returning. A real engine would wrap an HTTP server.
#[derive(Default)]
struct EchoEngine {
    routes: Mutex<Vec<(RouteHandle, RouteHandler)>>,
}

#[async_trait]
impl Engine for EchoEngine {
    async fn run(&self, _ctx: CancellationToken, addrs: &[SocketAddr]) -> Result<(), BoxError> {
        if addrs.is_empty() {
            println!("[engine] serving on default bind");
        } else {
            println!("[engine] serving on {addrs:?}");
        }

        let routes = self.routes.lock().unwrap().clone();
        for (route, handler) in routes {
            let req = http::Request::builder()
                .method(route.method.clone())
                .uri(route.path.as_str())
                .body(Vec::new())?;
            let resp = handler(req).await;
            println!("[engine] {} {} -> {}", route.method, route.path, resp.status());
        }
        Ok(())
    }

    fn register_handler(
        &self,
        method: http::Method,
        path: &str,
        handler: RouteHandler,
    ) -> RouteHandle {
        let route = RouteHandle {
            method,
            path: path.to_string(),
        };
        self.routes.lock().unwrap().push((route.clone(), handler));
        route
    }
}

/// The application: an HTTP service exposing two routes.
struct HelloService;

#[async_trait]
impl Service for HelloService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::HTTP
    }

    async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
        println!("[hello] warming up");
        Ok(())
    }

    fn as_http(&self) -> Option<&dyn HttpService> {
        Some(self)
    }
}

#[async_trait]
impl HttpService for HelloService {
    async fn configure_routes(
        &self,
        _ctx: CancellationToken,
        engine: &dyn Engine,
    ) -> Result<(), BoxError> {
        let hello: RouteHandler = Arc::new(|_req: http::Request<Vec<u8>>| -> BoxHandlerFuture {
            Box::pin(async { http::Response::new(b"hello, servisor".to_vec()) })
        });
        engine.register_handler(http::Method::GET, "/hello", hello);

        let health: RouteHandler = Arc::new(|_req: http::Request<Vec<u8>>| -> BoxHandlerFuture {
            Box::pin(async {
                let mut resp = http::Response::new(Vec::new());
                *resp.status_mut() = http::StatusCode::NO_CONTENT;
                resp
            })
        });
        engine.register_handler(http::Method::GET, "/healthz", health);
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Render library events to stdout
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 2. Build runtime configuration (defaults are fine here)
    let cfg = Config::default();

    // 3. Attach the built-in tracing-backed subscriber
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];

    // 4. Create the launcher; the "virtual_machine" starter is pre-registered
    let launcher = Launcher::builder(cfg).with_subscribers(subs).build();

    // 5. Hand the engine to the starter through the dependency bag
    let deps = Deps::new().with_engine(EchoEngine::default());

    // 6. Start on the built-in VM platform; blocks until the engine returns
    let service: ServiceRef = Arc::new(HelloService);
    launcher
        .start(
            CancellationToken::new(),
            service,
            PlatformId::VIRTUAL_MACHINE,
            &deps,
        )
        .await?;

    println!("\nfinished");
    Ok(())
}
