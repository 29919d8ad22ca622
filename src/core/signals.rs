//! # Cross-platform termination-signal streams.
//!
//! Provides [`Termination`], the pair of signal streams the VM starter's
//! watcher waits on.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//!
//! **Other platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]
//!
//! Stream registration happens in [`Termination::new`], before any watcher
//! task runs; signals arriving after `new` returns are not lost.

/// The termination signal that was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TermSignal {
    /// SIGINT / Ctrl-C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl TermSignal {
    /// Returns the conventional signal name.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TermSignal::Interrupt => "SIGINT",
            TermSignal::Terminate => "SIGTERM",
        }
    }
}

/// Registered termination-signal streams.
#[cfg(unix)]
pub(crate) struct Termination {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Termination {
    /// Registers SIGINT and SIGTERM streams.
    ///
    /// Returns `Err` if signal registration with the OS fails.
    pub(crate) fn new() -> std::io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let sigint = signal(SignalKind::interrupt())?;
        let sigterm = signal(SignalKind::terminate())?;
        Ok(Self { sigint, sigterm })
    }

    /// Waits for either registered signal.
    pub(crate) async fn recv(&mut self) -> TermSignal {
        tokio::select! {
            _ = self.sigint.recv() => TermSignal::Interrupt,
            _ = self.sigterm.recv() => TermSignal::Terminate,
        }
    }
}

/// Registered termination-signal streams.
#[cfg(not(unix))]
pub(crate) struct Termination;

#[cfg(not(unix))]
impl Termination {
    /// Registration is deferred to the first `recv` on non-Unix targets.
    pub(crate) fn new() -> std::io::Result<Self> {
        Ok(Self)
    }

    /// Waits for Ctrl-C.
    pub(crate) async fn recv(&mut self) -> TermSignal {
        let _ = tokio::signal::ctrl_c().await;
        TermSignal::Interrupt
    }
}
