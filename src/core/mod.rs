//! Runtime core: registry, starters, and the launcher.
//!
//! This module contains the embedded implementation of the bootstrap
//! pipeline. The public API from this module is [`Launcher`] (with
//! [`LauncherBuilder`]), [`Registry`], and the built-in [`VmStarter`].
//!
//! Modules:
//! - `launcher`: resolves platforms and delegates starts, owns the bus;
//! - `registry`: concurrent-safe platform-to-starter map;
//! - `signals`: cross-platform termination-signal streams;
//! - `vm`: the virtual-machine start strategy.

mod launcher;
mod registry;
mod signals;
mod vm;

pub use launcher::{Launcher, LauncherBuilder};
pub use registry::Registry;
pub use vm::VmStarter;
