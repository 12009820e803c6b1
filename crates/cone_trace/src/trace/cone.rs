//! Cone description and validation

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Frame, Point3, Real, UnitVec3, Vec3, KINDA_SMALL_NUMBER};
use crate::physics::collision::Sphere;
use crate::trace::error::TraceError;

/// Caller-supplied cone parameters, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Apex-side center of the cone
    pub start: Point3,
    /// Trace direction; normalized during validation
    pub direction: Vec3,
    /// Radius at `start`
    pub start_radius: Real,
    /// Radius at the far end
    pub end_radius: Real,
    /// Distance from `start` to the far end along `direction`
    pub length: Real,
}

impl ConeParams {
    /// Bundle cone parameters
    pub fn new(start: Point3, direction: Vec3, start_radius: Real, end_radius: Real, length: Real) -> Self {
        Self {
            start,
            direction,
            start_radius,
            end_radius,
            length,
        }
    }
}

/// A validated frustum: radius varies linearly from `start_radius` to
/// `end_radius` over `length` along `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    start: Point3,
    direction: UnitVec3,
    start_radius: Real,
    end_radius: Real,
    length: Real,
}

impl Cone {
    /// Validate parameters: scalars first, then direction
    pub fn new(params: &ConeParams) -> Result<Self, TraceError> {
        let positive = |value: Real| value.is_finite() && value > 0.0;

        if !(positive(params.length) && positive(params.start_radius) && positive(params.end_radius)) {
            return Err(TraceError::InvalidGeometryParameters {
                length: params.length,
                start_radius: params.start_radius,
                end_radius: params.end_radius,
            });
        }

        if !params.direction.iter().all(|c| c.is_finite())
            || params.direction.norm() <= KINDA_SMALL_NUMBER
        {
            return Err(TraceError::DegenerateDirection);
        }

        Ok(Self {
            start: params.start,
            direction: UnitVec3::new_normalize(params.direction),
            start_radius: params.start_radius,
            end_radius: params.end_radius,
            length: params.length,
        })
    }

    /// Center of the start cap
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Center of the end cap, `start + length * direction`
    pub fn end(&self) -> Point3 {
        self.start + self.direction.into_inner() * self.length
    }

    /// Unit trace direction
    pub fn direction(&self) -> UnitVec3 {
        self.direction
    }

    /// Radius at the start cap
    pub fn start_radius(&self) -> Real {
        self.start_radius
    }

    /// Radius at the end cap
    pub fn end_radius(&self) -> Real {
        self.end_radius
    }

    /// Axial length
    pub fn length(&self) -> Real {
        self.length
    }

    /// Sphere at the start cap
    pub fn start_sphere(&self) -> Sphere {
        Sphere::new(self.start, self.start_radius)
    }

    /// Sphere at the end cap
    pub fn end_sphere(&self) -> Sphere {
        Sphere::new(self.end(), self.end_radius)
    }

    /// Signed distance of `point` from the start, projected onto the axis
    pub fn axial_distance(&self, point: &Point3) -> Real {
        self.direction.dot(&(point - self.start))
    }

    /// Radius of the frustum at axial distance `t`
    pub fn radius_at(&self, t: Real) -> Real {
        self.start_radius + (self.end_radius - self.start_radius) * (t / self.length)
    }

    /// Orthonormal frame around the trace direction
    pub fn frame(&self) -> Frame {
        Frame::from_direction(self.direction)
    }
}
