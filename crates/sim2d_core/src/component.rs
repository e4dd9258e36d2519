//! Component capability
//!
//! A [`Component`] is a typed capability attached to exactly one [`Entity`].
//! Each entity owns at most one component per concrete type; components are
//! looked up by their `TypeId` and downcast through [`Any`].
//!
//! Lifecycle: constructed, attached (owner id set, then [`Component::on_attach`]
//! runs), zero or more update ticks, detached ([`Component::on_detach`] runs
//! exactly once), destroyed.
//!
//! [`Entity`]: crate::Entity

use std::any::Any;

use crate::entity::EntityId;

/// A capability attachable to an entity
///
/// Implementors must store an active flag and the owner back-reference
/// themselves; [`Entity`](crate::Entity) sets the owner exactly once, before
/// `on_attach` runs. The back-reference is an [`EntityId`], not a pointer,
/// so it can never dangle if the entity goes away first.
pub trait Component: Any {
    /// Short type name used in diagnostics
    fn type_name(&self) -> &'static str;

    /// Whether this component receives update ticks
    fn is_active(&self) -> bool;

    /// Set the component active state
    fn set_active(&mut self, active: bool);

    /// Id of the owning entity, if attached
    fn owner(&self) -> Option<EntityId>;

    /// Set the owning entity id
    ///
    /// Called by [`Entity`](crate::Entity) exactly once at insertion time;
    /// user code has no reason to call this.
    fn set_owner(&mut self, owner: EntityId);

    /// Called after the component has been inserted into its entity
    fn on_attach(&mut self) {}

    /// Called when the component is removed or its entity is destroyed
    fn on_detach(&mut self) {}

    /// Called once per frame while the component and its entity are active
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Called once per fixed physics step while the component and its
    /// entity are active
    fn fixed_update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Whether attaching this component requires a Transform on the entity
    ///
    /// When true and the entity has none, a default Transform is inserted
    /// (with a warning) before this component attaches.
    fn requires_transform(&self) -> bool {
        false
    }

    /// Upcast for downcasting to the concrete component type
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete component type
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
