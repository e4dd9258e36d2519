//! Narrow-phase collision queries
//!
//! All queries here are pure functions of a shape and the live [`Transform`]
//! it is evaluated against; nothing is cached, so there is no invalidation
//! to get wrong. Intersection is a single symmetric function over the
//! closed [`ColliderShape`] enum: box-circle is implemented once and the
//! circle-box arm delegates to it, so `shapes_intersect(a, b) ==
//! shapes_intersect(b, a)` holds for every pairing. The match is exhaustive,
//! so a new shape variant cannot be added without handling every pairing.
//!
//! Conventions:
//! - All intersection and containment comparisons are inclusive, so shapes
//!   that exactly touch count as intersecting.
//! - A box is axis-aligned in world space: the entity scale is applied
//!   elementwise to its size, translation to its center, and rotation is
//!   ignored.
//! - A circle's radius is scaled by the larger of the two scale factors.
//! - Shape offsets are in world units and are not scaled.
//!
//! Non-positive sizes and radii are not validated; they produce degenerate
//! shapes (a zero-size box is a point that can still touch).

use serde::{Serialize, Deserialize};
use sim2d_math::{Rect, Vec2};

use crate::collider::{BoxCollider, CircleCollider, Collider};
use crate::entity::Entity;
use crate::transform::Transform;

/// Geometry of a collider, world-positioned by a [`Transform`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// An axis-aligned box with the given unscaled size, centered at the
    /// transform position plus `offset`
    Box { size: Vec2, offset: Vec2 },
    /// A circle with the given unscaled radius, centered at the transform
    /// position plus `offset`
    Circle { radius: f32, offset: Vec2 },
}

impl ColliderShape {
    fn world_center(&self, transform: &Transform) -> Vec2 {
        let offset = match self {
            ColliderShape::Box { offset, .. } => *offset,
            ColliderShape::Circle { offset, .. } => *offset,
        };
        transform.position() + offset
    }
}

fn scaled_radius(radius: f32, transform: &Transform) -> f32 {
    radius * transform.scale().max_component()
}

/// Axis-aligned world-space bounds of a shape
///
/// A circle's bounds are the square around its scaled radius.
pub fn shape_bounds(shape: &ColliderShape, transform: &Transform) -> Rect {
    let center = shape.world_center(transform);
    match shape {
        ColliderShape::Box { size, .. } => {
            let scaled = size.component_mul(transform.scale());
            Rect::from_center_size(center, scaled)
        }
        ColliderShape::Circle { radius, .. } => {
            let r = scaled_radius(*radius, transform);
            Rect::from_center_half_extents(center, Vec2::splat(r))
        }
    }
}

/// Check whether a world-space point is inside or on a shape
pub fn shape_contains_point(shape: &ColliderShape, transform: &Transform, point: Vec2) -> bool {
    match shape {
        ColliderShape::Box { .. } => shape_bounds(shape, transform).contains(point),
        ColliderShape::Circle { radius, .. } => {
            let r = scaled_radius(*radius, transform);
            let delta = point - shape.world_center(transform);
            delta.length_squared() <= r * r
        }
    }
}

/// Check whether two world-positioned shapes intersect, touching included
pub fn shapes_intersect(
    a: &ColliderShape,
    ta: &Transform,
    b: &ColliderShape,
    tb: &Transform,
) -> bool {
    match (a, b) {
        (ColliderShape::Box { .. }, ColliderShape::Box { .. }) => {
            shape_bounds(a, ta).intersects(&shape_bounds(b, tb))
        }
        (ColliderShape::Box { .. }, ColliderShape::Circle { radius, .. }) => box_vs_circle(
            shape_bounds(a, ta),
            b.world_center(tb),
            scaled_radius(*radius, tb),
        ),
        // Single source of truth: circle-box is box-circle with the
        // arguments swapped, which makes the test symmetric by construction.
        (ColliderShape::Circle { .. }, ColliderShape::Box { .. }) => {
            shapes_intersect(b, tb, a, ta)
        }
        (
            ColliderShape::Circle { radius: ra, .. },
            ColliderShape::Circle { radius: rb, .. },
        ) => {
            let delta = a.world_center(ta) - b.world_center(tb);
            let radius_sum = scaled_radius(*ra, ta) + scaled_radius(*rb, tb);
            delta.length_squared() <= radius_sum * radius_sum
        }
    }
}

/// Box-circle test: clamp the circle center to the box to find the closest
/// box point, then compare its squared distance to the radius squared.
fn box_vs_circle(bounds: Rect, circle_center: Vec2, radius: f32) -> bool {
    let closest = bounds.closest_point(circle_center);
    let delta = circle_center - closest;
    delta.length_squared() <= radius * radius
}

/// Check whether any collider of one entity intersects any collider of another
///
/// Each entity's Transform is resolved by component lookup on every call;
/// no collider holds a transform reference that could go stale. An entity
/// with no Transform or no collider intersects nothing. Layer filtering and
/// trigger semantics are left to the caller.
pub fn entities_intersect(a: &Entity, b: &Entity) -> bool {
    let (Some(ta), Some(tb)) = (
        a.get_component::<Transform>(),
        b.get_component::<Transform>(),
    ) else {
        return false;
    };

    for sa in collider_shapes(a) {
        for sb in collider_shapes(b) {
            if shapes_intersect(&sa, ta, &sb, tb) {
                return true;
            }
        }
    }
    false
}

fn collider_shapes(entity: &Entity) -> Vec<ColliderShape> {
    let mut shapes = Vec::with_capacity(2);
    if let Some(collider) = entity.get_component::<BoxCollider>() {
        shapes.push(collider.shape());
    }
    if let Some(collider) = entity.get_component::<CircleCollider>() {
        shapes.push(collider.shape());
    }
    shapes
}
