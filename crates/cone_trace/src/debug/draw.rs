//! Debug drawing primitives and system
//!
//! Debug drawing facilities let callers visualize simple shapes (lines,
//! points, spheres, circles) produced by queries. Temporary shapes expire
//! after their duration; persistent ones stay for the life of the system.

use crate::foundation::math::{Point3, Real, UnitVec3, Vec4};

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        start: Point3,
        end: Point3,
        color: Vec4,
        thickness: f32,
        duration: f32,
    },

    /// Wireframe sphere at center with radius
    Sphere {
        center: Point3,
        radius: Real,
        color: Vec4,
        duration: f32,
    },

    /// Circle in the plane spanned by `x_axis` and `y_axis`
    Circle {
        center: Point3,
        radius: Real,
        segments: u32,
        x_axis: UnitVec3,
        y_axis: UnitVec3,
        color: Vec4,
        thickness: f32,
        duration: f32,
    },

    /// Half circle bulging along `y_axis`
    HalfCircle {
        center: Point3,
        radius: Real,
        segments: u32,
        x_axis: UnitVec3,
        y_axis: UnitVec3,
        color: Vec4,
        thickness: f32,
        duration: f32,
    },

    /// Point at position
    Point {
        position: Point3,
        color: Vec4,
        size: f32,
        duration: f32,
    },
}

impl DebugShape {
    /// Get remaining duration
    pub fn duration(&self) -> f32 {
        match self {
            Self::Line { duration, .. }
            | Self::Sphere { duration, .. }
            | Self::Circle { duration, .. }
            | Self::HalfCircle { duration, .. }
            | Self::Point { duration, .. } => *duration,
        }
    }

    /// Get the shape color
    pub fn color(&self) -> Vec4 {
        match self {
            Self::Line { color, .. }
            | Self::Sphere { color, .. }
            | Self::Circle { color, .. }
            | Self::HalfCircle { color, .. }
            | Self::Point { color, .. } => *color,
        }
    }

    /// Decrease duration by delta_time, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        match self {
            Self::Line { duration, .. }
            | Self::Sphere { duration, .. }
            | Self::Circle { duration, .. }
            | Self::HalfCircle { duration, .. }
            | Self::Point { duration, .. } => {
                *duration -= delta_time;
                *duration <= 0.0
            }
        }
    }
}

/// Consumer of debug geometry
///
/// Queries hand their visualization to a sink and never read anything back.
pub trait DebugSink {
    /// Submit a shape. Persistent shapes ignore their duration.
    fn submit(&mut self, shape: DebugShape, persistent: bool);
}

/// Debug drawing system for rendering debug shapes
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    temporary_shapes: Vec<DebugShape>,

    /// Persistent shapes that never expire
    persistent_shapes: Vec<DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: Vec::new(),
            enabled: true,
        }
    }

    /// Update shape lifetimes and remove expired temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }

    /// Get the number of persistent shapes
    pub fn persistent_count(&self) -> usize {
        self.persistent_shapes.len()
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugSink for DebugDrawSystem {
    fn submit(&mut self, shape: DebugShape, persistent: bool) {
        if !self.enabled {
            return;
        }

        if persistent {
            self.persistent_shapes.push(shape);
        } else {
            self.temporary_shapes.push(shape);
        }
    }
}
