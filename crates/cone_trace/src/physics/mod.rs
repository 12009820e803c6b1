//! Physics module for collision queries
//!
//! Provides the object filtering, primitives and query interface the cone
//! tracer sweeps through, plus a small sphere-only reference world.

pub mod collision;
pub mod collision_layers;
pub mod query;
pub mod world;

pub use collision::{Ray, Sphere, SweepContact};
pub use collision_layers::{CollisionChannel, CollisionLayers, ObjectQueryParams};
pub use query::{find_ignorable_owner, CollisionWorld, HitResult, Ignorable, ObjectId, QueryParams};
pub use world::{CollisionResponse, SphereBody, SphereWorld};
