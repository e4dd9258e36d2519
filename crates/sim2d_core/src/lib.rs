//! Core types for the sim2d entity model
//!
//! This crate provides a component-based entity system with narrow-phase
//! collision queries:
//!
//! - [`Component`] - Capability attachable to an entity, with lifecycle hooks
//! - [`Transform`] - Position, rotation, scale, and a cached affine matrix
//! - [`Collider`] / [`BoxCollider`] / [`CircleCollider`] - Shape queries
//! - [`ColliderShape`] - Closed shape enum with symmetric intersection tests
//! - [`Entity`] - One-of-each-type component registry with a unique id
//! - [`Scene`] - Ordered, id-indexed entity collection
//! - [`SeededRng`] - Deterministic random numbers for reproducible runs
//!
//! Execution is single-threaded and synchronous: an external driver calls
//! [`Scene::update`] / [`Scene::fixed_update`] once per tick, which fan out
//! to each active entity's active components.

mod component;
mod transform;
mod collider;
pub mod collision;
mod entity;
mod scene;
mod rng;

pub use component::Component;
pub use transform::Transform;
pub use collider::{BoxCollider, CircleCollider, Collider};
pub use collision::{entities_intersect, shapes_intersect, ColliderShape};
pub use entity::{Entity, EntityId};
pub use scene::{Scene, SceneStats};
pub use rng::SeededRng;

// Re-export the math types used throughout the public API
pub use sim2d_math::{Affine2, Rect, Vec2};
