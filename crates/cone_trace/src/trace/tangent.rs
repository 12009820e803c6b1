//! External tangent between two coaxial circles
//!
//! Both circles lie in the plane spanned by `frame.right` and
//! `frame.forward`, one centered at `circle_a.center`, the other at
//! `circle_a.center + separation`. The same-side tangent line touches
//! circle A at a point whose direction from the center makes an angle with
//! the axis; its cosine is `|r_a - r_b| / |separation|`.
//!
//! See <https://mathworld.wolfram.com/Circle-CircleTangents.html>.

use crate::foundation::math::{
    constants::RAD_TO_DEG, rotate_about_axis, Frame, Point3, Real, UnitVec3, Vec3, SMALL_NUMBER,
};
use crate::physics::collision::Sphere;
use crate::trace::error::TraceError;

/// Solution of the tangent construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSolution {
    /// Arccosine of `|r_a - r_b| / |separation|` in degrees; 90 when the
    /// radii are equal
    pub angle: Real,
    /// Direction from circle A's center to the contact point
    pub contact_direction: UnitVec3,
    /// Where the tangent line touches circle A
    pub tangent_point: Point3,
}

impl TangentSolution {
    /// Equal radii: the tangent line runs parallel to the axis
    pub fn is_cylindrical(&self) -> bool {
        (self.angle - 90.0).abs() <= SMALL_NUMBER
    }
}

/// Solve for the external tangent on the `frame.right` side.
///
/// `separation` must run along `frame.forward`. Growing radii tilt the
/// contact direction backward (away from circle B), shrinking radii tilt it
/// forward.
pub fn solve(
    circle_a: &Sphere,
    radius_b: Real,
    separation: &Vec3,
    frame: &Frame,
) -> Result<TangentSolution, TraceError> {
    let distance = separation.norm();
    if distance <= SMALL_NUMBER {
        return Err(TraceError::DegenerateSeparation);
    }

    let radius_difference = (circle_a.radius - radius_b).abs();
    let cos_angle = radius_difference / distance;
    if cos_angle > 1.0 {
        return Err(TraceError::InvalidTangentGeometry {
            radius_difference,
            separation: distance,
        });
    }

    let angle = cos_angle.acos() * RAD_TO_DEG;
    let tilt = 90.0 - angle;
    let rotation = if radius_b >= circle_a.radius { -tilt } else { tilt };

    let contact_direction =
        UnitVec3::new_normalize(rotate_about_axis(&frame.right, &frame.up, rotation));
    let tangent_point = circle_a.center + contact_direction.into_inner() * circle_a.radius;

    Ok(TangentSolution {
        angle,
        contact_direction,
        tangent_point,
    })
}
