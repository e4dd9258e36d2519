//! Collider components
//!
//! Two concrete collider components, [`BoxCollider`] and [`CircleCollider`],
//! share their query logic through the [`Collider`] trait, whose provided
//! methods delegate to the symmetric free functions in [`crate::collision`].
//! Colliders hold no transform reference; every query takes the live
//! [`Transform`], which callers resolve by component lookup.
//!
//! The trigger flag and layer are inert metadata: a consuming query layer
//! applies layer filtering and treats trigger colliders as detection-only.
//! Nothing here enforces either.

use sim2d_math::{Rect, Vec2};

use crate::collision::{self, ColliderShape};
use crate::component::Component;
use crate::entity::EntityId;
use crate::transform::Transform;

/// Shape-based bounds/intersection/containment queries for an entity
pub trait Collider: Component {
    /// The world-positionable geometry of this collider
    fn shape(&self) -> ColliderShape;

    /// Whether this collider is detection-only (no physical response)
    fn is_trigger(&self) -> bool;

    /// Set the trigger flag
    fn set_trigger(&mut self, trigger: bool);

    /// Layer tag consumed by external filtering
    fn layer(&self) -> i32;

    /// Set the layer tag
    fn set_layer(&mut self, layer: i32);

    /// Axis-aligned world-space bounds, derived from the given transform
    fn bounds(&self, transform: &Transform) -> Rect {
        collision::shape_bounds(&self.shape(), transform)
    }

    /// Check if a world-space point is inside or on this collider
    fn contains_point(&self, transform: &Transform, point: Vec2) -> bool {
        collision::shape_contains_point(&self.shape(), transform, point)
    }

    /// Check if this collider intersects another, touching included
    ///
    /// Symmetric for every shape pairing: `a.intersects(.., b, ..)` equals
    /// `b.intersects(.., a, ..)`.
    fn intersects(
        &self,
        transform: &Transform,
        other: &dyn Collider,
        other_transform: &Transform,
    ) -> bool {
        collision::shapes_intersect(&self.shape(), transform, &other.shape(), other_transform)
    }
}

/// Rectangular collider with a size and an offset from the entity center
#[derive(Clone, Debug)]
pub struct BoxCollider {
    size: Vec2,
    offset: Vec2,
    trigger: bool,
    layer: i32,
    active: bool,
    owner: Option<EntityId>,
}

impl Default for BoxCollider {
    fn default() -> Self {
        Self::new(Vec2::ONE, Vec2::ZERO)
    }
}

impl BoxCollider {
    /// Create a box collider with the given size and offset
    ///
    /// Size is not validated; a non-positive size yields a degenerate box.
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self {
            size,
            offset,
            trigger: false,
            layer: 0,
            active: true,
            owner: None,
        }
    }

    /// Set the trigger flag on construction
    pub fn with_trigger(mut self, trigger: bool) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the layer on construction
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Unscaled size of the box
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the unscaled size of the box
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Offset from the entity center, in world units
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Set the offset from the entity center
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

impl Collider for BoxCollider {
    fn shape(&self) -> ColliderShape {
        ColliderShape::Box {
            size: self.size,
            offset: self.offset,
        }
    }

    fn is_trigger(&self) -> bool {
        self.trigger
    }

    fn set_trigger(&mut self, trigger: bool) {
        self.trigger = trigger;
    }

    fn layer(&self) -> i32 {
        self.layer
    }

    fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }
}

impl Component for BoxCollider {
    fn type_name(&self) -> &'static str {
        "BoxCollider"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: EntityId) {
        self.owner = Some(owner);
    }

    fn requires_transform(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Circular collider with a radius and an offset from the entity center
#[derive(Clone, Debug)]
pub struct CircleCollider {
    radius: f32,
    offset: Vec2,
    trigger: bool,
    layer: i32,
    active: bool,
    owner: Option<EntityId>,
}

impl Default for CircleCollider {
    fn default() -> Self {
        Self::new(0.5, Vec2::ZERO)
    }
}

impl CircleCollider {
    /// Create a circle collider with the given radius and offset
    ///
    /// Radius is not validated; a non-positive radius yields a degenerate
    /// circle.
    pub fn new(radius: f32, offset: Vec2) -> Self {
        Self {
            radius,
            offset,
            trigger: false,
            layer: 0,
            active: true,
            owner: None,
        }
    }

    /// Set the trigger flag on construction
    pub fn with_trigger(mut self, trigger: bool) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the layer on construction
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Unscaled radius of the circle
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the unscaled radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Offset from the entity center, in world units
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Set the offset from the entity center
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

impl Collider for CircleCollider {
    fn shape(&self) -> ColliderShape {
        ColliderShape::Circle {
            radius: self.radius,
            offset: self.offset,
        }
    }

    fn is_trigger(&self) -> bool {
        self.trigger
    }

    fn set_trigger(&mut self, trigger: bool) {
        self.trigger = trigger;
    }

    fn layer(&self) -> i32 {
        self.layer
    }

    fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }
}

impl Component for CircleCollider {
    fn type_name(&self) -> &'static str {
        "CircleCollider"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: EntityId) {
        self.owner = Some(owner);
    }

    fn requires_transform(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
