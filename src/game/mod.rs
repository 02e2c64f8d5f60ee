//! Simulation core
//!
//! Everything that advances the game by one frame, kept free of platform
//! calls so it runs headless under test:
//! - Object: the tagged-variant entity model and its kinematic fields
//! - Step: per-object gravity, state machines, shooting and integration
//! - Collision: AABB overlap tests and the push-out response policy
//! - World: the layered object collections, spear pool and level builder

pub mod collision;
pub mod object;
pub mod step;
pub mod world;

pub use object::{GameObject, ObjectData, ObjectKind};
pub use world::{ObjectId, World};
