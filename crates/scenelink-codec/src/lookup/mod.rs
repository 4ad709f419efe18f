//! The narrow lookup contract through which references are resolved.
//!
//! The host environment owns every scene object; this crate only ever holds
//! borrows obtained through these traits. A [`Directory`] resolves a
//! [`ContainerId`] to a live container, a [`Container`] resolves an object
//! name, and an [`ObjectView`] resolves the names of its own members. The
//! decoder walks these steps in order and reports the first one that fails.

use std::fmt;

/// Identifier of a top-level container in the host's registry.
///
/// # Example
///
/// ```
/// use scenelink_codec::ContainerId;
///
/// let id = ContainerId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(i64);

impl ContainerId {
    /// Creates a container id from its raw integer form.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer form carried on the wire.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContainerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Capability to resolve container ids to live containers.
///
/// Implemented by the host environment's registry. Lookup is a pure read of
/// the registry's current state; a missing id simply returns `None`.
pub trait Directory {
    /// Live container type produced by a successful lookup.
    type Container: Container;

    /// Resolves a container id, or `None` when no such container exists.
    fn container(&self, id: ContainerId) -> Option<&Self::Container>;
}

/// Capability to resolve object names within one container.
pub trait Container {
    /// Live object type produced by a successful lookup.
    type Object: ObjectView;

    /// Resolves an object by name, or `None` when absent.
    fn object(&self, name: &str) -> Option<&Self::Object>;
}

/// Read access to the identity of a live scene object.
///
/// Encoding needs exactly the identifiers exposed here; nothing about the
/// object's content crosses the boundary.
pub trait ObjectView {
    /// Live member type produced by a successful lookup.
    type Member: MemberView;

    /// Returns the id of the container that owns this object.
    fn container_id(&self) -> ContainerId;

    /// Returns the object's registry name.
    fn name(&self) -> &str;

    /// Resolves a named member of this object, or `None` when absent.
    fn member(&self, name: &str) -> Option<&Self::Member>;
}

/// Read access to the identity of a named member of an object.
pub trait MemberView {
    /// Returns the member's name within its owning object.
    fn name(&self) -> &str;
}

/// Object type reachable through a directory's containers.
pub type ObjectOf<D> = <<D as Directory>::Container as Container>::Object;

/// Member type reachable through a directory's objects.
pub type MemberOf<D> = <ObjectOf<D> as ObjectView>::Member;
