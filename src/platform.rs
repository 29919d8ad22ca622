//! # Platform identifiers.
//!
//! A [`PlatformId`] names a runtime environment a service can be started on.
//! Identifiers are opaque strings: the registry treats them purely as map
//! keys and attaches no semantics beyond equality.
//!
//! The crate ships one built-in identifier, [`PlatformId::VIRTUAL_MACHINE`].
//! Embedding applications mint their own with [`PlatformId::new`] when they
//! register custom starters (container runtimes, function platforms, etc.).

use std::borrow::Cow;
use std::fmt;

/// Opaque identifier of a runtime platform.
///
/// Cheap to clone; comparison and hashing operate on the underlying string.
///
/// # Example
/// ```
/// use servisor::PlatformId;
///
/// let vm = PlatformId::VIRTUAL_MACHINE;
/// assert_eq!(vm.as_str(), "virtual_machine");
///
/// let custom = PlatformId::new("container");
/// assert_ne!(custom, vm);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlatformId(Cow<'static, str>);

impl PlatformId {
    /// The built-in virtual-machine platform.
    pub const VIRTUAL_MACHINE: PlatformId = PlatformId(Cow::Borrowed("virtual_machine"));

    /// Creates an identifier from an arbitrary string.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_id_is_stable() {
        assert_eq!(PlatformId::VIRTUAL_MACHINE.as_str(), "virtual_machine");
        assert_eq!(PlatformId::VIRTUAL_MACHINE.to_string(), "virtual_machine");
    }

    #[test]
    fn test_custom_ids_compare_by_value() {
        let a = PlatformId::new("container");
        let b = PlatformId::new(String::from("container"));
        assert_eq!(a, b);
        assert_ne!(a, PlatformId::VIRTUAL_MACHINE);
    }
}
