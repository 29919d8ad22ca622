//! # Typed dependency bag.
//!
//! [`Deps`] carries the values a caller hands to a starter: an engine, a
//! database pool, a config handle, anything a service's `init` wants to pull
//! out. Entries are typed; the bag is scanned in insertion order and the
//! first value of the requested type wins.
//!
//! ## Rules
//! - **Order-insensitive contract**: starters never assume position or count;
//!   they ask for a type and take the first match.
//! - **Engines enter as [`EngineRef`]**: use [`Deps::with_engine`] (or push an
//!   `EngineRef` directly) so the starter's scan can find them.
//! - The bag is read-only once handed to a starter (`&Deps`).
//!
//! ## Example
//! ```
//! use servisor::Deps;
//!
//! let deps = Deps::new()
//!     .with(42u32)
//!     .with(String::from("dsn://primary"))
//!     .with(7u32);
//!
//! assert_eq!(deps.first::<u32>(), Some(&42));
//! assert_eq!(deps.first::<String>().map(String::as_str), Some("dsn://primary"));
//! assert!(deps.first::<bool>().is_none());
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::contracts::{Engine, EngineRef};

/// Ordered, heterogeneous bag of typed dependencies.
#[derive(Default)]
pub struct Deps {
    items: Vec<Box<dyn Any + Send + Sync>>,
}

impl Deps {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a value, returning the bag (builder form).
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Adds a value in place.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.items.push(Box::new(value));
    }

    /// Adds an engine, coerced to the [`EngineRef`] handle starters scan for.
    pub fn with_engine<E: Engine>(self, engine: E) -> Self {
        let engine: EngineRef = Arc::new(engine);
        self.with(engine)
    }

    /// Returns the first value of type `T` in insertion order, if any.
    pub fn first<T: Any>(&self) -> Option<&T> {
        self.items.iter().find_map(|item| item.downcast_ref::<T>())
    }

    /// Returns the first engine in the bag, if any.
    pub fn engine(&self) -> Option<EngineRef> {
        self.first::<EngineRef>().cloned()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for Deps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deps").field("len", &self.items.len()).finish()
    }
}
