//! Collision primitives used by swept queries
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (rays, spheres) and the
//!   sphere-vs-sphere sweep

pub mod primitives;

// Re-export commonly used types
pub use primitives::{sweep_sphere_sphere, Ray, Sphere, SweepContact};
