//! Scene container for entities
//!
//! A [`Scene`] owns an insertion-ordered collection of entities plus an
//! id index for O(1) lookup. The order list and the index are kept
//! consistent by every mutation: an id appears in one exactly when it
//! appears in the other.

use std::collections::HashMap;

use log::debug;

use crate::component::Component;
use crate::entity::{Entity, EntityId};

/// Snapshot of scene counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Number of entities in the scene
    pub total_entities: usize,
    /// Number of entities currently active
    pub active_entities: usize,
    /// Number of components attached across all entities
    pub total_components: usize,
}

/// An ordered, id-indexed collection of entities
pub struct Scene {
    name: String,
    active: bool,
    /// Entity ids in insertion order
    order: Vec<EntityId>,
    /// Entity storage, indexed by id
    entities: HashMap<EntityId, Entity>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("created scene '{}'", name);
        Self {
            name,
            active: true,
            order: Vec::new(),
            entities: HashMap::new(),
        }
    }

    /// The scene name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the scene name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether this scene runs update ticks
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the scene active state
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Create a new entity in the scene, returning its id
    pub fn create_entity(&mut self, name: impl Into<String>) -> EntityId {
        self.add_entity(Entity::new(name))
    }

    /// Add an existing entity to the scene, returning its id
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        debug!("added entity '{}' (id {}) to scene '{}'", entity.name(), id.raw(), self.name);
        self.entities.insert(id, entity);
        self.order.push(id);
        id
    }

    /// Remove an entity by id, dropping it and detaching its components
    ///
    /// Returns whether an entity was removed.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        match self.entities.remove(&id) {
            Some(entity) => {
                self.order.retain(|other| *other != id);
                debug!(
                    "removed entity '{}' (id {}) from scene '{}'",
                    entity.name(),
                    id.raw(),
                    self.name
                );
                // Dropping the entity here runs its component detach hooks
                true
            }
            None => false,
        }
    }

    /// Check whether an entity with the given id is in the scene
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Get an entity by id
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get an entity by id mutably
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Find the first entity with the given name, in insertion order
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.iter().find(|entity| entity.name() == name)
    }

    /// Find all entities matching a predicate, in insertion order
    pub fn find_entities(&self, predicate: impl Fn(&Entity) -> bool) -> Vec<&Entity> {
        self.iter().filter(|entity| predicate(entity)).collect()
    }

    /// Find all entities carrying a component of the exact type `T`
    ///
    /// Matches only the concrete component type: an entity holding a
    /// `BoxCollider` is not returned by a query for `CircleCollider`, and
    /// there is no query by abstract capability.
    pub fn find_with_component<T: Component>(&self) -> Vec<&Entity> {
        self.find_entities(|entity| entity.has_component::<T>())
    }

    /// Iterate over entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Number of entities in the scene
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.order.len()
    }

    /// Check if the scene is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Scene counts snapshot
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            total_entities: self.entity_count(),
            active_entities: self.iter().filter(|e| e.is_active()).count(),
            total_components: self.iter().map(Entity::component_count).sum(),
        }
    }

    /// Run the per-frame hook of every active entity, in insertion order
    ///
    /// Does nothing while the scene is inactive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        for i in 0..self.order.len() {
            let id = self.order[i];
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.update(dt);
            }
        }
    }

    /// Run the fixed-step hook of every active entity, in insertion order
    pub fn fixed_update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        for i in 0..self.order.len() {
            let id = self.order[i];
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.fixed_update(dt);
            }
        }
    }

    /// Remove all entities, detaching their components
    pub fn clear(&mut self) {
        debug!("clearing {} entities from scene '{}'", self.order.len(), self.name);
        self.entities.clear();
        self.order.clear();
    }
}
