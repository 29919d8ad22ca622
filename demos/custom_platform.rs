//! # Example: custom_platform
//!
//! Registers a custom platform starter next to the built-in one and starts a
//! non-HTTP service on it.
//!
//! Demonstrates how to:
//! - Implement the [`Starter`] trait for your own runtime environment.
//! - Register it under a new [`PlatformId`] via [`Launcher::register_platform`].
//! - Handle the typed [`StartError`] for an unknown platform.
//!
//! ## Flow
//! ```text
//! WorkerService ──► Launcher::register_platform("container", ContainerStarter)
//!     └─► Launcher::start(ctx, service, "container", deps)
//!           ├─► Registry::lookup("container") ──► ContainerStarter
//!           ├─► Bus.publish(ServiceStarting)
//!           └─► ContainerStarter::start()
//!                 ├─► service.init()
//!                 └─► drive the workload until done
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example custom_platform
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use servisor::{
    BoxError, Config, Deps, Launcher, PlatformId, Service, ServiceKind, ServiceRef, StartError,
    Starter, StarterRef,
};

/// Starter for container-like environments. It initializes the service and
/// then drives the workload itself instead of delegating to an HTTP engine.
struct ContainerStarter;

#[async_trait]
impl Starter for ContainerStarter {
    fn name(&self) -> &str {
        "container"
    }

    async fn start(
        &self,
        ctx: CancellationToken,
        service: ServiceRef,
        deps: &Deps,
    ) -> Result<(), StartError> {
        service
            .init(ctx.clone(), deps)
            .await
            .map_err(|source| StartError::InitializationFailed { source })?;

        println!("[container] running a {} service", service.kind());
        for i in 1..=3 {
            if ctx.is_cancelled() {
                println!("[container] cancelled");
                return Ok(());
            }
            println!("[container] tick {i}");
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        println!("[container] done");
        Ok(())
    }
}

/// A background worker; it never exposes HTTP routes.
struct WorkerService;

#[async_trait]
impl Service for WorkerService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::new("worker")
    }

    async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
        println!("[worker] loading job definitions");
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Build runtime configuration
    let cfg = Config::default();

    // 2. No subscribers for simplicity
    let launcher = Launcher::builder(cfg).build();

    // 3. Register the custom platform next to the built-in "virtual_machine"
    let container = PlatformId::new("container");
    let starter: StarterRef = Arc::new(ContainerStarter);
    launcher.register_platform(container.clone(), starter);

    // 4. Start the worker on it; no engine needed in the dependency bag
    let service: ServiceRef = Arc::new(WorkerService);
    let deps = Deps::new();
    launcher
        .start(CancellationToken::new(), service, container, &deps)
        .await?;

    // 5. Unknown platforms fail with a typed error
    match launcher.platform_starter(&PlatformId::new("bare_metal")) {
        Ok(_) => unreachable!("bare_metal was never registered"),
        Err(e) => println!("\nlookup failed as expected: {e}"),
    }

    Ok(())
}
