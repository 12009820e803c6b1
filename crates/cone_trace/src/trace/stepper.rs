//! Tangent-sphere chain along a frustum
//!
//! The stepper emits the start sphere, then a chain of interpolated spheres
//! each touching the previous one on the axis and tangent to the frustum's
//! lateral surface, then the end sphere. All construction happens in the
//! plane spanned by `frame.right` and `frame.forward`.
//!
//! One iteration, from the previous sphere `P` and the rotated tangent `t`:
//! 1. cast `P.center + s * t` onto the tangent plane (the lateral surface),
//! 2. turn `P.center - hit` by -90 degrees about `up` and cast from the hit
//!    onto the direction plane (the axis); that point is the new center,
//! 3. the new radius reaches back to the front of `P` on the axis,
//! 4. turn `hit - center` by +90 degrees about `up` for the next `t`.

use crate::foundation::math::{rotate_about_axis, safe_normal, Frame, Plane, Real, UnitVec3};
use crate::physics::collision::Sphere;
use crate::trace::cone::Cone;
use crate::trace::tangent::TangentSolution;

/// Where a sphere came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphereKind {
    /// The cone's own start sphere
    Start,
    /// A sphere synthesized by the tangent construction
    Interpolated,
    /// The cone's own end sphere
    End,
}

/// A sphere emitted by the stepper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeSphere {
    /// Origin of the sphere
    pub kind: SphereKind,
    /// World-space sphere
    pub sphere: Sphere,
    /// Distance of the center from the cone start along the axis
    pub axial_distance: Real,
}

/// Why stepping stopped before reaching the end of the cone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// The rotated tangent could not be normalized
    DegenerateTangent,
    /// The ray toward the lateral surface missed the tangent plane
    TangentPlaneMissed,
    /// The ray back toward the axis missed the direction plane
    DirectionPlaneMissed,
    /// The new sphere did not advance along the axis
    NoForwardProgress,
}

/// Outcome of one stepping iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepResult {
    /// A new interpolated sphere
    NextSphere(Sphere),
    /// The next sphere would reach or overshoot the end of the cone
    EndOfCone,
    /// The construction broke down
    GeometryDegenerate(DegenerateReason),
}

/// How the sphere sequence ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stepping reached the end of the cone
    Completed,
    /// Stepping stopped on degenerate geometry; the end sphere was still emitted
    Degenerate(DegenerateReason),
    /// The consumer halted the sequence after a blocking hit
    HaltedOnHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepperState {
    Start,
    Stepping,
    End,
    Terminated,
}

#[derive(Debug, Clone, Copy)]
struct SteppingState {
    previous: Sphere,
    rotated_tangent: Option<UnitVec3>,
    distance_traveled: Real,
}

/// Single-pass generator of the spheres covering a cone
#[derive(Debug, Clone)]
pub struct ConeStepper {
    cone: Cone,
    frame: Frame,
    tangent_plane: Plane,
    direction_plane: Plane,
    end_tolerance: Real,
    state: StepperState,
    stepping: SteppingState,
    termination: Option<Termination>,
}

impl ConeStepper {
    /// Prepare stepping for `cone`.
    ///
    /// `tangent` must come from solving the start and end circles of `cone`
    /// in `frame`. Interpolated spheres within `end_tolerance` of the end are
    /// folded into the end sphere. A negative or non-finite tolerance counts
    /// as zero.
    pub fn new(cone: Cone, frame: Frame, tangent: &TangentSolution, end_tolerance: Real) -> Self {
        let end_tolerance = if end_tolerance.is_finite() { end_tolerance.max(0.0) } else { 0.0 };
        let tangent_plane = Plane::from_point_normal(tangent.tangent_point, tangent.contact_direction);
        let direction_plane = Plane::from_point_normal(cone.start(), frame.right);

        // Bisector of the contact direction and the axis
        let rotated_tangent =
            safe_normal(&(tangent.contact_direction.into_inner() + frame.forward.into_inner()));

        Self {
            cone,
            frame,
            tangent_plane,
            direction_plane,
            end_tolerance,
            state: StepperState::Start,
            stepping: SteppingState {
                previous: cone.start_sphere(),
                rotated_tangent,
                distance_traveled: 0.0,
            },
            termination: None,
        }
    }

    /// Plane containing the lateral tangent line
    pub fn tangent_plane(&self) -> &Plane {
        &self.tangent_plane
    }

    /// Plane containing the cone axis, normal to `frame.right`
    pub fn direction_plane(&self) -> &Plane {
        &self.direction_plane
    }

    /// How the sequence ended, once it has
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Whether the sequence is exhausted
    pub fn is_terminated(&self) -> bool {
        self.state == StepperState::Terminated
    }

    /// Stop the sequence immediately; no end sphere is emitted
    pub fn halt(&mut self) {
        if self.state != StepperState::Terminated {
            self.state = StepperState::Terminated;
            self.termination = Some(Termination::HaltedOnHit);
        }
    }

    /// Run one stepping iteration from the previous sphere
    pub fn step(&mut self) -> StepResult {
        let previous = self.stepping.previous;
        let up = self.frame.up;

        let Some(rotated_tangent) = self.stepping.rotated_tangent else {
            return StepResult::GeometryDegenerate(DegenerateReason::DegenerateTangent);
        };

        let Some(tangent_hit) = self.tangent_plane.intersect_ray(&previous.center, &rotated_tangent) else {
            return StepResult::GeometryDegenerate(DegenerateReason::TangentPlaneMissed);
        };

        let Some(toward_axis) = safe_normal(&rotate_about_axis(&(previous.center - tangent_hit), &up, -90.0)) else {
            return StepResult::GeometryDegenerate(DegenerateReason::DegenerateTangent);
        };

        let Some(center) = self.direction_plane.intersect_ray(&tangent_hit, &toward_axis) else {
            return StepResult::GeometryDegenerate(DegenerateReason::DirectionPlaneMissed);
        };

        let previous_front = previous.center + self.frame.forward.into_inner() * previous.radius;
        let radius = (center - previous_front).norm();

        let axial_distance = self.cone.axial_distance(&center);
        if axial_distance >= self.cone.length() - self.end_tolerance {
            return StepResult::EndOfCone;
        }
        if !axial_distance.is_finite() || axial_distance <= self.stepping.distance_traveled {
            return StepResult::GeometryDegenerate(DegenerateReason::NoForwardProgress);
        }

        let sphere = Sphere::new(center, radius);
        self.stepping = SteppingState {
            previous: sphere,
            rotated_tangent: safe_normal(&rotate_about_axis(&(tangent_hit - center), &up, 90.0)),
            distance_traveled: axial_distance,
        };

        StepResult::NextSphere(sphere)
    }
}

impl Iterator for ConeStepper {
    type Item = ConeSphere;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StepperState::Start => {
                self.state = StepperState::Stepping;
                Some(ConeSphere {
                    kind: SphereKind::Start,
                    sphere: self.cone.start_sphere(),
                    axial_distance: 0.0,
                })
            }
            StepperState::Stepping => match self.step() {
                StepResult::NextSphere(sphere) => Some(ConeSphere {
                    kind: SphereKind::Interpolated,
                    sphere,
                    axial_distance: self.stepping.distance_traveled,
                }),
                StepResult::EndOfCone => {
                    self.termination = Some(Termination::Completed);
                    self.state = StepperState::End;
                    self.next()
                }
                StepResult::GeometryDegenerate(reason) => {
                    self.termination = Some(Termination::Degenerate(reason));
                    self.state = StepperState::End;
                    self.next()
                }
            },
            StepperState::End => {
                self.state = StepperState::Terminated;
                Some(ConeSphere {
                    kind: SphereKind::End,
                    sphere: self.cone.end_sphere(),
                    axial_distance: self.cone.length(),
                })
            }
            StepperState::Terminated => None,
        }
    }
}
