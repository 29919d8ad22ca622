//! # Platform registry - maps platform identifiers to starters.
//!
//! The registry is the pluggable heart of the bootstrap pipeline: embedding
//! applications register custom starters under their own [`PlatformId`]s,
//! and the launcher resolves identifiers at start time.
//!
//! ## Architecture
//! ```text
//! register(platform, starter)            lookup(&platform)
//!         │                                      │
//!         ▼                                      ▼
//!   ┌──────────────────────────────────────────────────┐
//!   │  RwLock<HashMap<PlatformId, StarterRef>>         │
//!   └──────────────────────────────────────────────────┘
//!         │
//!         ├─► existing entry? publish StarterOverridden (before overwrite)
//!         └─► publish StarterRegistered (after insert)
//! ```
//!
//! ## Rules
//! - Re-registering a platform overwrites; the override is observable as a
//!   `StarterOverridden` event published before the overwrite completes.
//! - There is no removal operation.
//! - Critical sections are bounded and never suspend; a `register` that
//!   completes before a `lookup` begins is visible to that lookup.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::contracts::StarterRef;
use crate::error::StartError;
use crate::events::{Bus, Event, EventKind};
use crate::platform::PlatformId;

/// Concurrent-safe store of platform starters.
pub struct Registry {
    starters: RwLock<HashMap<PlatformId, StarterRef>>,
    bus: Bus,
}

impl Registry {
    /// Creates an empty registry publishing on `bus`.
    pub fn new(bus: Bus) -> Self {
        Self {
            starters: RwLock::new(HashMap::new()),
            bus,
        }
    }

    /// Registers `starter` under `platform`, overwriting any existing entry.
    ///
    /// An overwrite publishes [`EventKind::StarterOverridden`] before the new
    /// entry lands; every registration publishes
    /// [`EventKind::StarterRegistered`] once the entry is in place.
    pub fn register(&self, platform: PlatformId, starter: StarterRef) {
        {
            let mut starters = self.starters.write().unwrap();
            if starters.contains_key(&platform) {
                let ev = Event::now(EventKind::StarterOverridden).with_platform(platform.clone());
                self.bus.publish(ev);
            }
            starters.insert(platform.clone(), starter);
        }
        self.bus
            .publish(Event::now(EventKind::StarterRegistered).with_platform(platform));
    }

    /// Resolves the starter registered under `platform`.
    ///
    /// Returns [`StartError::UnknownPlatform`] when no entry exists.
    pub fn lookup(&self, platform: &PlatformId) -> Result<StarterRef, StartError> {
        let starters = self.starters.read().unwrap();
        starters
            .get(platform)
            .cloned()
            .ok_or_else(|| StartError::UnknownPlatform {
                platform: platform.clone(),
            })
    }

    /// Returns the number of registered platforms.
    pub fn len(&self) -> usize {
        self.starters.read().unwrap().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.starters.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::StubStarter;

    fn registry() -> Registry {
        Registry::new(Bus::new(64))
    }

    #[test]
    fn test_lookup_of_unregistered_platform_fails() {
        let reg = registry();
        let err = reg.lookup(&PlatformId::new("lambda")).unwrap_err();
        assert!(matches!(err, StartError::UnknownPlatform { .. }));
        assert!(err.to_string().contains("lambda"));
    }

    #[test]
    fn test_register_then_lookup_returns_starter() {
        let reg = registry();
        reg.register(
            PlatformId::new("container"),
            Arc::new(StubStarter::named("container-starter")),
        );
        let starter = reg.lookup(&PlatformId::new("container")).unwrap();
        assert_eq!(starter.name(), "container-starter");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_second_registration_wins_and_publishes_override() {
        let bus = Bus::new(64);
        let mut rx = bus.subscribe();
        let reg = Registry::new(bus);
        let platform = PlatformId::new("container");

        reg.register(platform.clone(), Arc::new(StubStarter::named("first")));
        reg.register(platform.clone(), Arc::new(StubStarter::named("second")));

        assert_eq!(reg.lookup(&platform).unwrap().name(), "second");

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::StarterRegistered,
                EventKind::StarterOverridden,
                EventKind::StarterRegistered,
            ]
        );
    }

    #[test]
    fn test_concurrent_registration_and_lookup() {
        let reg = registry();

        std::thread::scope(|s| {
            for i in 0..100 {
                let reg = &reg;
                s.spawn(move || {
                    reg.register(
                        PlatformId::new(format!("platform-{i}")),
                        Arc::new(StubStarter::named(format!("starter-{i}"))),
                    );
                });
            }
        });

        assert_eq!(reg.len(), 100);

        std::thread::scope(|s| {
            for i in 0..100 {
                let reg = &reg;
                s.spawn(move || {
                    let starter = reg.lookup(&PlatformId::new(format!("platform-{i}"))).unwrap();
                    assert_eq!(starter.name(), format!("starter-{i}"));
                });
            }
        });
    }
}
