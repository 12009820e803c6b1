//! # Cone Trace
//!
//! Swept collision queries for variable-radius cones.
//!
//! ## Features
//!
//! - **Tangent Sphere Chains**: a frustum is covered by spheres inscribed in
//!   its lateral surface, each touching its predecessor on the axis
//! - **Pluggable Back-ends**: sweeps go through the [`CollisionWorld`] trait
//! - **Hit Policies**: collect every hit, truncate on a block, or halt
//! - **Structured Diagnostics**: every rejection and termination is an event
//! - **Debug Drawing**: cone outlines and impact points for any sink
//!
//! ## Quick Start
//!
//! ```rust
//! use cone_trace::prelude::*;
//!
//! let mut world = SphereWorld::new();
//! world.add_sphere(Point3::new(0.0, 0.0, 100.0), 5.0, CollisionChannel::WorldStatic, CollisionResponse::Block);
//!
//! let tracer = ConeTracer::new(&world);
//! let params = ConeParams::new(Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0);
//! let outcome = tracer
//!     .trace(&params, &[CollisionChannel::WorldStatic], &[], &TraceOptions::default())
//!     .unwrap();
//!
//! assert!(outcome.any_hit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod dataset;
pub mod debug;
pub mod foundation;
pub mod physics;
pub mod trace;

pub use physics::{CollisionWorld, HitResult};
pub use trace::{multi_cone_trace, ConeTracer, TraceError};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConeTraceConfig},
        debug::{DebugDrawSystem, DebugDrawType, DebugSink, DebugTraceOptions},
        foundation::math::{Point3, Real, Vec3},
        physics::{
            CollisionChannel, CollisionResponse, CollisionWorld, HitResult, Ignorable, ObjectId,
            ObjectQueryParams, QueryParams, SphereWorld,
        },
        trace::{
            multi_cone_trace, ConeParams, ConeTracer, HitPolicy, Termination, TraceError, TraceEvent,
            TraceObserver, TraceOptions, TraceOutcome,
        },
    };
}
