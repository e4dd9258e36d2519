//! 2D Mathematics Library
//!
//! This crate provides the 2D geometry types used by the sim2d core.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Rect`] - Axis-aligned rectangle stored as min/max corners
//! - [`Affine2`] - 2D affine transform (linear part plus translation)

mod vec2;
mod rect;
mod affine;

pub use vec2::Vec2;
pub use rect::Rect;
pub use affine::Affine2;
