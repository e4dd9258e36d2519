//! Entity and its component registry
//!
//! An [`Entity`] owns at most one component per concrete type, keyed by
//! `TypeId`. Entity ids are process-unique and monotonically increasing;
//! they are never reused.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use sim2d_math::Vec2;

use crate::component::Component;
use crate::transform::Transform;

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of an entity
///
/// Ids increase monotonically and are never reused within a process, so a
/// stored id can go stale but never silently refer to a different entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A uniquely identified container of components
///
/// Entities also carry their own position/rotation/scale triple. This is
/// separate from any attached [`Transform`] component and the two are not
/// synchronized; collision queries read the Transform component only.
pub struct Entity {
    id: EntityId,
    name: String,
    active: bool,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    components: HashMap<TypeId, Box<dyn Component>>,
}

impl Entity {
    /// Create a new entity with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        let id = EntityId::next();
        let name = name.into();
        debug!("created entity '{}' (id {})", name, id.raw());
        Self {
            id,
            name,
            active: true,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            components: HashMap::new(),
        }
    }

    /// The entity's unique id
    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The entity's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the entity's name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether this entity receives update ticks
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the entity active state
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Entity-level position (independent of any Transform component)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the entity-level position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Entity-level rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the entity-level rotation in degrees
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Entity-level scale
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the entity-level scale
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Add a component, keeping any existing one of the same type
    ///
    /// If a component of type `T` is already present, a warning is emitted
    /// and the existing instance is returned unchanged; the new value is
    /// dropped. Otherwise the component's owner id is set, the component is
    /// inserted, and its `on_attach` hook runs. Components that require a
    /// Transform get a default one inserted first (with a warning) when the
    /// entity has none.
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut T {
        let type_id = TypeId::of::<T>();
        if self.components.contains_key(&type_id) {
            warn!(
                "component {} already exists on '{}' (id {}); keeping the existing one",
                component.type_name(),
                self.name,
                self.id.raw()
            );
        } else {
            if component.requires_transform() && !self.has_component::<Transform>() {
                warn!(
                    "'{}' (id {}) has no Transform; adding a default one for {}",
                    self.name,
                    self.id.raw(),
                    component.type_name()
                );
                self.insert_component(Transform::default());
            }
            debug!(
                "added component {} to '{}' (id {})",
                component.type_name(),
                self.name,
                self.id.raw()
            );
            self.insert_component(component);
        }

        self.components
            .get_mut(&type_id)
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
            .expect("component storage is keyed by TypeId")
    }

    fn insert_component<T: Component>(&mut self, mut component: T) {
        // Owner is set exactly once, before on_attach runs.
        component.set_owner(self.id);
        let type_id = TypeId::of::<T>();
        self.components.insert(type_id, Box::new(component));
        if let Some(component) = self.components.get_mut(&type_id) {
            component.on_attach();
        }
    }

    /// Get the component of type `T`, if present
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }

    /// Get the component of type `T` mutably, if present
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
    }

    /// Check whether a component of the exact type `T` is present
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Remove the component of type `T`, running its `on_detach` hook
    ///
    /// Returns whether a component was removed.
    pub fn remove_component<T: Component>(&mut self) -> bool {
        match self.components.remove(&TypeId::of::<T>()) {
            Some(mut component) => {
                component.on_detach();
                debug!(
                    "removed component {} from '{}' (id {})",
                    component.type_name(),
                    self.name,
                    self.id.raw()
                );
                true
            }
            None => false,
        }
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Shortcut for `get_component::<Transform>()`
    ///
    /// Collision queries resolve the Transform through this lookup on every
    /// call rather than caching a reference.
    pub fn transform(&self) -> Option<&Transform> {
        self.get_component::<Transform>()
    }

    /// Mutable shortcut for `get_component_mut::<Transform>()`
    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.get_component_mut::<Transform>()
    }

    /// Run the per-frame hook of every active component
    ///
    /// Does nothing while the entity is inactive. Storage is keyed by type
    /// identity, so the order across component types is not deterministic;
    /// do not rely on it.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        for component in self.components.values_mut() {
            if component.is_active() {
                component.update(dt);
            }
        }
    }

    /// Run the fixed-step hook of every active component
    ///
    /// Same activity gating and ordering caveat as [`update`](Self::update).
    pub fn fixed_update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        for component in self.components.values_mut() {
            if component.is_active() {
                component.fixed_update(dt);
            }
        }
    }
}

impl Drop for Entity {
    /// Detach every still-present component exactly once
    ///
    /// Components removed earlier via `remove_component` were already
    /// detached and are no longer in the map. Detach order follows the
    /// type-keyed map's iteration order and is unspecified.
    fn drop(&mut self) {
        for component in self.components.values_mut() {
            component.on_detach();
        }
        self.components.clear();
    }
}
