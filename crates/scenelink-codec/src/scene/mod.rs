//! In-memory scene directory for tests.
//!
//! A plain owned data model implementing the [`lookup`](crate::lookup)
//! traits, standing in for the host environment in unit and integration
//! tests. Never used on the production path.

use std::collections::BTreeMap;

use crate::lookup::{Container, ContainerId, Directory, MemberView, ObjectView};
use crate::transform::Transform;

/// Root of the in-memory scene, keyed by container id.
#[derive(Debug, Clone, Default)]
pub struct SceneDirectory {
    containers: BTreeMap<ContainerId, SceneContainer>,
}

impl SceneDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty container and returns it for population.
    pub fn add_container(&mut self, id: ContainerId) -> &mut SceneContainer {
        self.containers.entry(id).or_insert_with(|| SceneContainer {
            id,
            bodies: BTreeMap::new(),
        })
    }
}

impl Directory for SceneDirectory {
    type Container = SceneContainer;

    fn container(&self, id: ContainerId) -> Option<&SceneContainer> {
        self.containers.get(&id)
    }
}

/// A container holding named bodies.
#[derive(Debug, Clone)]
pub struct SceneContainer {
    id: ContainerId,
    bodies: BTreeMap<String, SceneBody>,
}

impl SceneContainer {
    /// Inserts an empty body and returns it for population.
    pub fn add_body(&mut self, name: &str) -> &mut SceneBody {
        let id = self.id;
        self.bodies
            .entry(name.to_owned())
            .or_insert_with(|| SceneBody {
                container: id,
                name: name.to_owned(),
                transform: Transform::IDENTITY,
                parts: BTreeMap::new(),
            })
    }
}

impl Container for SceneContainer {
    type Object = SceneBody;

    fn object(&self, name: &str) -> Option<&SceneBody> {
        self.bodies.get(name)
    }
}

/// A body with named parts and a pose.
#[derive(Debug, Clone)]
pub struct SceneBody {
    container: ContainerId,
    name: String,
    transform: Transform,
    parts: BTreeMap<String, ScenePart>,
}

impl SceneBody {
    /// Inserts a named part.
    pub fn add_part(&mut self, name: &str) -> &mut Self {
        self.parts.insert(
            name.to_owned(),
            ScenePart {
                name: name.to_owned(),
            },
        );
        self
    }

    /// Sets the body's pose.
    pub fn set_transform(&mut self, transform: Transform) -> &mut Self {
        self.transform = transform;
        self
    }

    /// Returns the body's pose.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl ObjectView for SceneBody {
    type Member = ScenePart;

    fn container_id(&self) -> ContainerId {
        self.container
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn member(&self, name: &str) -> Option<&ScenePart> {
        self.parts.get(name)
    }
}

/// A named part of a body.
#[derive(Debug, Clone)]
pub struct ScenePart {
    name: String,
}

impl MemberView for ScenePart {
    fn name(&self) -> &str {
        &self.name
    }
}
