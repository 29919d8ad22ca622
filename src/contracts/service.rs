//! # Service abstraction and the HTTP capability.
//!
//! A [`Service`] is the unit a starter boots: it declares a [`ServiceKind`],
//! performs one-time initialization, and may expose kind-specific
//! capabilities through explicit probes. The common handle type is
//! [`ServiceRef`], an `Arc<dyn Service>` suitable for sharing across the
//! runtime.
//!
//! ## Rules
//! - `init` runs exactly once per start attempt, before anything else.
//! - A service declaring [`ServiceKind::HTTP`] must return `Some(self)` from
//!   [`Service::as_http`]; a starter treats the combination of HTTP kind and
//!   a `None` probe as a distinct mismatch error.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::contracts::engine::Engine;
use crate::deps::Deps;
use crate::error::BoxError;

/// Shared handle to a service (`Arc<dyn Service>`).
pub type ServiceRef = Arc<dyn Service>;

/// Opaque classification of what a service is.
///
/// Starters dispatch on the kind; [`ServiceKind::HTTP`] is the one kind the
/// built-in starter understands. Custom starters may define their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceKind(Cow<'static, str>);

impl ServiceKind {
    /// The HTTP service kind.
    pub const HTTP: ServiceKind = ServiceKind(Cow::Borrowed("http"));

    /// Creates a kind from an arbitrary string.
    pub fn new(kind: impl Into<Cow<'static, str>>) -> Self {
        Self(kind.into())
    }

    /// Returns the kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// # Startable service unit.
///
/// Implementors report a stable [`kind`](Service::kind), initialize once per
/// start attempt, and opt into capabilities via probes such as
/// [`as_http`](Service::as_http).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use servisor::{BoxError, Deps, Service, ServiceKind};
///
/// struct Worker;
///
/// #[async_trait]
/// impl Service for Worker {
///     fn kind(&self) -> ServiceKind {
///         ServiceKind::new("worker")
///     }
///
///     async fn init(&self, _ctx: CancellationToken, _deps: &Deps) -> Result<(), BoxError> {
///         // pull dependencies out of the bag, open connections...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Service: Send + Sync + 'static {
    /// Returns the kind this service wants to be started as.
    fn kind(&self) -> ServiceKind;

    /// Performs one-time initialization before the service is wired up.
    ///
    /// Receives the caller's cancellation token and the dependency bag.
    /// Any error aborts the start sequence before classification.
    async fn init(&self, ctx: CancellationToken, deps: &Deps) -> Result<(), BoxError>;

    /// Probes for the HTTP capability.
    ///
    /// Services declaring [`ServiceKind::HTTP`] must override this to return
    /// `Some(self)`. The default is `None`.
    fn as_http(&self) -> Option<&dyn HttpService> {
        None
    }
}

/// # HTTP capability of a service.
///
/// Exposed through [`Service::as_http`]; gives the service a chance to bind
/// its routes onto the engine before the run loop starts.
#[async_trait]
pub trait HttpService: Service {
    /// Binds the service's routes onto the engine.
    ///
    /// Called after `init` and after an engine was found in the dependency
    /// bag; an error here stops the start sequence before the engine runs.
    async fn configure_routes(
        &self,
        ctx: CancellationToken,
        engine: &dyn Engine,
    ) -> Result<(), BoxError>;
}
