//! Axis-aligned rectangle
//!
//! A lightweight world-space bounds primitive used for collision queries.
//! All containment and overlap tests are inclusive of the boundary.

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// An axis-aligned rectangle stored as min/max corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner (both components are minimums)
    pub min: Vec2,
    /// Maximum corner (both components are maximums)
    pub max: Vec2,
}

impl Rect {
    /// Create a new rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create a rectangle centered at a position with given full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents (half the size on each axis)
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Get the full size on each axis
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if a point is inside or on the rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if two rectangles overlap, touching edges included
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Get the closest point inside or on the rectangle to a given point
    ///
    /// An inverted rectangle (a min corner past its max corner) resolves to
    /// its min corner on the inverted axis rather than panicking.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp_components(self.min, self.max)
    }

    /// Translate the rectangle by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}
