//! Math utilities and types
//!
//! Provides the vector, plane and frame primitives the cone tracer is built
//! on. Geometry runs in `f64`: the stepper chains plane intersections and
//! error accumulates quickly in single precision.

pub use nalgebra::{Unit, Vector3, Vector4};

/// Scalar type used for all trace geometry
pub type Real = f64;

/// 3D vector type
pub type Vec3 = Vector3<Real>;

/// 3D unit vector type
pub type UnitVec3 = Unit<Vec3>;

/// 3D point type
pub type Point3 = nalgebra::Point3<Real>;

/// RGBA color type used by debug drawing
pub type Vec4 = Vector4<f32>;

/// Length below which a vector counts as zero
pub const SMALL_NUMBER: Real = 1.0e-8;

/// Tolerance used for "nearly equal" comparisons on lengths
pub const KINDA_SMALL_NUMBER: Real = 1.0e-4;

/// Math constants
pub mod constants {
    use super::Real;

    /// Pi constant
    pub const PI: Real = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: Real = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: Real = 180.0 / PI;
}

/// Normalizes `v`, or returns `None` when it is too short to have a direction
pub fn safe_normal(v: &Vec3) -> Option<UnitVec3> {
    Unit::try_new(*v, SMALL_NUMBER)
}

/// Rotate `v` by `degrees` about `axis` (right-handed)
pub fn rotate_about_axis(v: &Vec3, axis: &UnitVec3, degrees: Real) -> Vec3 {
    let rotation = nalgebra::Rotation3::from_axis_angle(axis, degrees * constants::DEG_TO_RAD);
    rotation * v
}

/// Infinite plane described by a point on it and a unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane
    pub origin: Point3,
    /// Unit normal of the plane
    pub normal: UnitVec3,
}

impl Plane {
    /// Build a plane through `origin` with the given normal
    pub fn from_point_normal(origin: Point3, normal: UnitVec3) -> Self {
        Self { origin, normal }
    }

    /// Signed distance from `point` to the plane (positive on the normal side)
    pub fn signed_distance(&self, point: &Point3) -> Real {
        self.normal.dot(&(point - self.origin))
    }

    /// Intersect the ray `origin + t * direction` (t >= 0) with this plane.
    ///
    /// Rays parallel to the plane, or pointing away from it, miss.
    pub fn intersect_ray(&self, origin: &Point3, direction: &Vec3) -> Option<Point3> {
        let denom = self.normal.dot(direction);
        if denom.abs() <= SMALL_NUMBER {
            return None;
        }

        let t = -self.signed_distance(origin) / denom;
        if t < 0.0 {
            return None;
        }

        Some(origin + direction * t)
    }
}

/// Orthonormal basis derived from a trace direction
///
/// `up = right x forward`, so a positive rotation about `up` turns `right`
/// toward `forward`. The stepper relies on this handedness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The trace direction
    pub forward: UnitVec3,
    /// First axis perpendicular to `forward`
    pub right: UnitVec3,
    /// Second axis perpendicular to both `forward` and `right`
    pub up: UnitVec3,
}

impl Frame {
    /// Build a frame whose `forward` axis is `direction`.
    ///
    /// `right` is derived from the world axis least aligned with `forward`, so
    /// the same direction always yields the same frame.
    pub fn from_direction(forward: UnitVec3) -> Self {
        let abs = forward.abs();
        let reference = if abs.x <= abs.y && abs.x <= abs.z {
            Vec3::x()
        } else if abs.y <= abs.z {
            Vec3::y()
        } else {
            Vec3::z()
        };

        // Project the reference axis out of forward; never parallel by construction
        let right = Unit::new_normalize(reference - forward.into_inner() * forward.dot(&reference));
        let up = Unit::new_normalize(right.cross(&*forward));

        Self { forward, right, up }
    }
}
