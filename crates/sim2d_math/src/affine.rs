//! 2D affine transform
//!
//! An `Affine2` is a 2x2 linear part plus a translation, the standard
//! matrix form for composing scale, rotation, and translation in 2D.
//! Stored row-major as the top two rows of a 3x3 matrix whose bottom row
//! is implicitly `[0, 0, 1]`.

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// A 2D affine transform (rotation/scale/shear plus translation)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m02: 0.0,
        m10: 0.0,
        m11: 1.0,
        m12: 0.0,
    };

    /// Create a pure translation transform
    pub fn translation(offset: Vec2) -> Self {
        Self {
            m02: offset.x,
            m12: offset.y,
            ..Self::IDENTITY
        }
    }

    /// Create a pure rotation transform
    ///
    /// The angle is in radians, counter-clockwise positive.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m02: 0.0,
            m10: sin,
            m11: cos,
            m12: 0.0,
        }
    }

    /// Create a pure (possibly non-uniform) scale transform
    pub fn scale(factors: Vec2) -> Self {
        Self {
            m00: factors.x,
            m11: factors.y,
            ..Self::IDENTITY
        }
    }

    /// Transform a point by this transform
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * p.x + self.m01 * p.y + self.m02,
            self.m10 * p.x + self.m11 * p.y + self.m12,
        )
    }

    /// Transform a direction by this transform (no translation applied)
    pub fn transform_direction(&self, d: Vec2) -> Vec2 {
        Vec2::new(self.m00 * d.x + self.m01 * d.y, self.m10 * d.x + self.m11 * d.y)
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Compute the inverse transform
    ///
    /// `inverse().transform_point(transform_point(p)) == p` for any finite
    /// point, as long as the linear part is invertible. A degenerate
    /// transform (near-zero determinant) inverts to identity.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return Self::IDENTITY;
        }
        let inv_det = 1.0 / det;

        let m00 = self.m11 * inv_det;
        let m01 = -self.m01 * inv_det;
        let m10 = -self.m10 * inv_det;
        let m11 = self.m00 * inv_det;

        Self {
            m00,
            m01,
            m02: -(m00 * self.m02 + m01 * self.m12),
            m10,
            m11,
            m12: -(m10 * self.m02 + m11 * self.m12),
        }
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Self;

    /// Compose two transforms: `a * b` applies `b` first, then `a`
    fn mul(self, rhs: Self) -> Self {
        Self {
            m00: self.m00 * rhs.m00 + self.m01 * rhs.m10,
            m01: self.m00 * rhs.m01 + self.m01 * rhs.m11,
            m02: self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02,
            m10: self.m10 * rhs.m00 + self.m11 * rhs.m10,
            m11: self.m10 * rhs.m01 + self.m11 * rhs.m11,
            m12: self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12,
        }
    }
}
