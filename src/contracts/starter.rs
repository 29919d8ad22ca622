//! # Platform start strategy.
//!
//! A [`Starter`] knows how to take a service from "constructed" to "serving"
//! on one particular platform. The registry maps platform identifiers to
//! [`StarterRef`] handles; the launcher resolves and delegates.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::contracts::service::ServiceRef;
use crate::deps::Deps;
use crate::error::StartError;

/// Shared handle to a starter (`Arc<dyn Starter>`).
pub type StarterRef = Arc<dyn Starter>;

/// # Platform-specific start strategy.
///
/// Implementors drive the full start sequence for their platform:
/// initialize the service, classify it, wire it to its runtime, and block
/// until it stops. The call returns only when the service is done (cleanly
/// or with an error).
#[async_trait]
pub trait Starter: Send + Sync + 'static {
    /// Returns a stable, human-readable starter name.
    fn name(&self) -> &str;

    /// Starts `service` with the given dependency bag, blocking until the
    /// service stops.
    ///
    /// Cancellation of `ctx` is the only external stop mechanism; starters
    /// derive child scopes from it rather than replacing it.
    async fn start(
        &self,
        ctx: CancellationToken,
        service: ServiceRef,
        deps: &Deps,
    ) -> Result<(), StartError>;
}
