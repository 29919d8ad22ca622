//! # Runtime configuration.
//!
//! Provides [`Config`], the settings consumed by [`Launcher::builder`](crate::Launcher::builder).
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]

/// Configuration for the launcher runtime.
///
/// ## Field semantics
/// - `bus_capacity`: Event bus ring buffer size (min 1; clamped by the builder)
///
/// ## Notes
/// Fields are public for flexibility. Prefer the helper accessors over
/// repeating sentinel checks at call sites.
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events will
    /// observe `Lagged` and skip older items. Minimum value is 1.
    pub bus_capacity: usize,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `bus_capacity = 1024` (good baseline)
    fn default() -> Self {
        Self { bus_capacity: 1024 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(Config::default().bus_capacity, 1024);
    }

    #[test]
    fn test_capacity_clamped_to_one() {
        let cfg = Config { bus_capacity: 0 };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }
}
