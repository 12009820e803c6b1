//! Cone trace
//!
//! A cone (frustum) sweep is approximated by a chain of spheres, each
//! tangent to the frustum's lateral surface and touching its predecessor on
//! the axis. Every sphere is swept a short distance through the collision
//! world and the hits are aggregated under a [`HitPolicy`].

pub mod cone;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod stepper;
pub mod tangent;
pub mod tracer;

pub use cone::{Cone, ConeParams};
pub use diagnostics::{EventRecorder, LogObserver, NullObserver, TraceEvent, TraceObserver};
pub use dispatch::{HitCollection, HitPolicy, SweepDispatcher, SweepReport};
pub use error::TraceError;
pub use stepper::{ConeSphere, ConeStepper, DegenerateReason, SphereKind, StepResult, Termination};
pub use tangent::TangentSolution;
pub use tracer::{multi_cone_trace, ConeTracer, TraceOptions, TraceOutcome, TRACE_TAG};
