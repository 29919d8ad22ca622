//! Error types used by the bootstrap runtime.
//!
//! This module defines:
//!
//! - [`StartError`]: failures raised while resolving a platform starter and
//!   driving a service through its start sequence.
//! - [`BoxError`]: the boxed error type collaborators (services, engines)
//!   return from their own fallible operations.
//!
//! [`StartError`] provides [`as_label`](StartError::as_label) for
//! logging/metrics; wrapped collaborator errors stay reachable through
//! [`std::error::Error::source`].

use thiserror::Error;

use crate::contracts::ServiceKind;
use crate::platform::PlatformId;

/// Boxed error returned by service and engine collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// # Errors produced by the start sequence.
///
/// Each variant maps to one failure point in the resolve/initialize/
/// configure/run pipeline. Variants carrying a `source` wrap the
/// collaborator's own error exactly once; nothing is swallowed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StartError {
    /// No starter is registered under the requested platform identifier.
    #[error("no starter registered for platform: {platform}")]
    UnknownPlatform {
        /// The platform identifier that failed to resolve.
        platform: PlatformId,
    },

    /// The service's one-time initialization failed; nothing else ran.
    #[error("failed to initialize service: {source}")]
    InitializationFailed {
        /// The underlying initialization error.
        source: BoxError,
    },

    /// The service reported a kind this starter has no path for.
    #[error("unsupported service kind for this platform: {kind}")]
    UnsupportedServiceKind {
        /// The kind the service reported.
        kind: ServiceKind,
    },

    /// The service reported a kind whose capability it does not expose.
    #[error("service reports kind {kind} but does not implement the matching capability")]
    ServiceKindMismatch {
        /// The kind the service reported.
        kind: ServiceKind,
    },

    /// No engine was present in the dependency bag.
    #[error("engine not found in dependencies for HTTP service")]
    EngineNotFound,

    /// The service failed while binding routes to the engine.
    #[error("failed to configure routes: {source}")]
    RouteConfigurationFailed {
        /// The underlying route-configuration error.
        source: BoxError,
    },

    /// The engine's run loop returned an error.
    #[error("engine run failed: {source}")]
    EngineRunFailed {
        /// The underlying run-loop error.
        source: BoxError,
    },
}

impl StartError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use servisor::{PlatformId, StartError};
    ///
    /// let err = StartError::UnknownPlatform { platform: PlatformId::new("lambda") };
    /// assert_eq!(err.as_label(), "unknown_platform");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StartError::UnknownPlatform { .. } => "unknown_platform",
            StartError::InitializationFailed { .. } => "initialization_failed",
            StartError::UnsupportedServiceKind { .. } => "unsupported_service_kind",
            StartError::ServiceKindMismatch { .. } => "service_kind_mismatch",
            StartError::EngineNotFound => "engine_not_found",
            StartError::RouteConfigurationFailed { .. } => "route_configuration_failed",
            StartError::EngineRunFailed { .. } => "engine_run_failed",
        }
    }
}
