//! Debug visualization
//!
//! Shapes, a frame-based draw system, and the visualization of cone traces.

pub mod cone_debug;
pub mod draw;

pub use cone_debug::{draw_cone_trace, DebugDrawType, DebugTraceOptions};
pub use draw::{DebugDrawSystem, DebugShape, DebugSink};
