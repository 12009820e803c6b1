//! Cone trace errors

use thiserror::Error;

use crate::foundation::math::Real;

/// Reasons a cone trace is rejected before any sweep is issued
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    /// The object filter contains no valid object channel
    #[error("invalid object types: no valid object channel to query")]
    InvalidQueryConfiguration,

    /// Length or a radius is not strictly positive
    #[error(
        "length: {length}, start radius: {start_radius}, end radius: {end_radius}; \
         none of them can be smaller or equal to zero"
    )]
    InvalidGeometryParameters {
        /// Requested cone length
        length: Real,
        /// Requested start radius
        start_radius: Real,
        /// Requested end radius
        end_radius: Real,
    },

    /// The trace direction is (nearly) the zero vector
    #[error("cone trace direction can't be zero")]
    DegenerateDirection,

    /// The two circles of the tangent construction are coincident
    #[error("tangent circles are coincident; no finite tangent exists")]
    DegenerateSeparation,

    /// The radius difference exceeds the circle separation
    #[error("radius difference {radius_difference} exceeds circle separation {separation}")]
    InvalidTangentGeometry {
        /// `|radius_a - radius_b|`
        radius_difference: Real,
        /// Distance between the circle centers
        separation: Real,
    },
}
