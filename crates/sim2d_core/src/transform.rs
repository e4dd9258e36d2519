//! Transform component (position, rotation, scale)
//!
//! The transform caches its affine matrix and rebuilds it lazily: every
//! mutator marks the cache dirty, and the next matrix read recomputes it.
//! The dirty flag is true exactly when the cached matrix does not reflect
//! the current position/rotation/scale.

use std::cell::Cell;

use sim2d_math::{Affine2, Vec2};

use crate::component::Component;
use crate::entity::EntityId;

/// Position, rotation, and scale of an entity, with a cached affine matrix
///
/// Rotation is stored and exposed in degrees, counter-clockwise positive.
/// The matrix composes scale, then rotation, then translation.
#[derive(Clone, Debug)]
pub struct Transform {
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    active: bool,
    owner: Option<EntityId>,
    // Cached matrix; Cells keep matrix reads usable through &self.
    matrix: Cell<Affine2>,
    dirty: Cell<bool>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0, Vec2::ONE)
    }
}

impl Transform {
    /// Create a transform with the given position, rotation (degrees), and scale
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
            active: true,
            owner: None,
            matrix: Cell::new(Affine2::IDENTITY),
            dirty: Cell::new(true),
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec2) -> Self {
        Self::new(position, 0.0, Vec2::ONE)
    }

    /// World position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the world position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.dirty.set(true);
    }

    /// Translate by an offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
        self.dirty.set(true);
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    /// Rotate by an angle in degrees
    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
        self.dirty.set(true);
    }

    /// Scale factors
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the scale factors
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.dirty.set(true);
    }

    /// Set a uniform scale on both axes
    pub fn set_scale_uniform(&mut self, scale: f32) {
        self.set_scale(Vec2::splat(scale));
    }

    /// Unit vector pointing along the rotation angle
    pub fn forward(&self) -> Vec2 {
        let radians = self.rotation.to_radians();
        Vec2::new(radians.cos(), radians.sin())
    }

    /// Unit vector perpendicular to [`forward`](Self::forward) (rotation + 90 degrees)
    pub fn right(&self) -> Vec2 {
        let radians = (self.rotation + 90.0).to_radians();
        Vec2::new(radians.cos(), radians.sin())
    }

    /// The local-to-world affine matrix, rebuilt lazily
    ///
    /// Applies scale, then rotation, then translation. Consecutive calls
    /// without an intervening mutation return bit-identical matrices.
    pub fn matrix(&self) -> Affine2 {
        if self.dirty.get() {
            let rebuilt = Affine2::translation(self.position)
                * Affine2::rotation(self.rotation.to_radians())
                * Affine2::scale(self.scale);
            self.matrix.set(rebuilt);
            self.dirty.set(false);
        }
        self.matrix.get()
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.matrix().transform_point(local)
    }

    /// Transform a point from world space back to local space
    ///
    /// Round-trips with [`transform_point`](Self::transform_point) for any
    /// finite point and non-zero scale.
    pub fn inverse_transform_point(&self, world: Vec2) -> Vec2 {
        self.matrix().inverse().transform_point(world)
    }
}

impl Component for Transform {
    fn type_name(&self) -> &'static str {
        "Transform"
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

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec2::ZERO);
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), Vec2::ONE);

        let p = Vec2::new(3.0, -2.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_matrix_idempotent() {
        let mut t = Transform::new(Vec2::new(1.0, 2.0), 30.0, Vec2::new(2.0, 0.5));
        let a = t.matrix();
        let b = t.matrix();
        assert_eq!(a, b);

        // A mutator invalidates the cache; the next read reflects it
        t.set_position(Vec2::new(5.0, 5.0));
        let c = t.matrix();
        assert_ne!(a, c);
        assert!(vec_approx_eq(c.transform_point(Vec2::ZERO), Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_mutators_mark_dirty() {
        let mut t = Transform::default();
        t.matrix();
        assert!(!t.dirty.get());

        t.translate(Vec2::X);
        assert!(t.dirty.get());
        t.matrix();

        t.rotate(45.0);
        assert!(t.dirty.get());
        t.matrix();

        t.set_scale(Vec2::splat(2.0));
        assert!(t.dirty.get());
        t.matrix();

        t.set_rotation(10.0);
        assert!(t.dirty.get());
    }

    #[test]
    fn test_transform_order() {
        // Scale, then rotate, then translate
        let t = Transform::new(Vec2::new(10.0, 0.0), 90.0, Vec2::splat(2.0));

        // X * 2 = (2, 0), rotated 90 degrees = (0, 2), + (10, 0) = (10, 2)
        let p = t.transform_point(Vec2::X);
        assert!(vec_approx_eq(p, Vec2::new(10.0, 2.0)), "got {:?}", p);
    }

    #[test]
    fn test_forward_right() {
        let t = Transform::new(Vec2::ZERO, 0.0, Vec2::ONE);
        assert!(vec_approx_eq(t.forward(), Vec2::X));
        assert!(vec_approx_eq(t.right(), Vec2::Y));

        let t = Transform::new(Vec2::ZERO, 90.0, Vec2::ONE);
        assert!(vec_approx_eq(t.forward(), Vec2::Y));
        assert!(vec_approx_eq(t.right(), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_round_trip() {
        let t = Transform::new(Vec2::new(4.0, -7.0), 33.0, Vec2::new(1.5, 0.25));
        let p = Vec2::new(-2.0, 8.0);
        let back = t.inverse_transform_point(t.transform_point(p));
        assert!(vec_approx_eq(p, back), "Expected {:?}, got {:?}", p, back);
    }

    #[test]
    fn test_rotation_in_degrees() {
        let mut t = Transform::default();
        t.rotate(90.0);
        t.rotate(90.0);
        assert_eq!(t.rotation(), 180.0);
        assert!(vec_approx_eq(t.forward(), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_component_impl() {
        let mut t = Transform::default();
        assert_eq!(t.type_name(), "Transform");
        assert!(t.is_active());
        t.set_active(false);
        assert!(!t.is_active());
        assert!(t.owner().is_none());
    }
}
