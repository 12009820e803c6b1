//! Primitive collision shapes and intersection algorithms
//!
//! Provides basic geometric primitives (rays, spheres) with the intersection
//! tests needed by swept-sphere queries.

use crate::foundation::math::{Point3, Real, Vec3};

/// A ray for ray casting and sweeps
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Point3,
    /// The direction of the ray (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: Real) -> Point3 {
        self.origin + self.direction * t
    }
}

/// A sphere in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// The center position of the sphere in world space
    pub center: Point3,
    /// The radius of the sphere
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub fn new(center: Point3, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Check if `point` is inside or on the sphere
    pub fn contains_point(&self, point: &Point3) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Test ray intersection with this sphere
    /// Returns (distance, hit_point, normal) if hit, None otherwise
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(Real, Point3, Vec3)> {
        // Vector from ray origin to sphere center
        let oc = ray.origin - self.center;

        // Solve: |origin + t*direction - center|^2 = radius^2
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        // Use the closest non-negative intersection
        let t = if t1 >= 0.0 {
            t1
        } else if t2 >= 0.0 {
            t2
        } else {
            return None; // Ray pointing away from sphere
        };

        let hit_point = ray.point_at(t);
        let normal = (hit_point - self.center).normalize();

        Some((t, hit_point, normal))
    }
}

/// Contact produced by sweeping one sphere against another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepContact {
    /// Distance travelled along the sweep before contact
    pub distance: Real,
    /// Fraction of the sweep completed before contact, in `[0, 1]`
    pub time: Real,
    /// Center of the moving sphere at contact
    pub location: Point3,
    /// Contact point on the surface of the static sphere
    pub impact_point: Point3,
    /// Surface normal of the static sphere at the contact point
    pub normal: Vec3,
    /// The moving sphere already overlapped at the start of the sweep
    pub initial_overlap: bool,
}

/// Sweep a sphere of `radius` from `from` to `to` against a static sphere.
///
/// Reduces to a ray cast against the target inflated by `radius`. Starting
/// in overlap reports a contact at time zero whose normal points from the
/// target toward the sweep origin.
pub fn sweep_sphere_sphere(
    from: &Point3,
    to: &Point3,
    radius: Real,
    target: &Sphere,
) -> Option<SweepContact> {
    let inflated = Sphere::new(target.center, target.radius + radius);

    if inflated.contains_point(from) {
        let offset = from - target.center;
        let normal = if offset.norm_squared() > Real::EPSILON {
            offset.normalize()
        } else {
            // Concentric start: push out against the sweep direction
            let sweep = from - to;
            if sweep.norm_squared() > Real::EPSILON {
                sweep.normalize()
            } else {
                Vec3::z()
            }
        };

        return Some(SweepContact {
            distance: 0.0,
            time: 0.0,
            location: *from,
            impact_point: target.center + normal * target.radius,
            normal,
            initial_overlap: true,
        });
    }

    let delta = to - from;
    let length = delta.norm();
    if length <= Real::EPSILON {
        return None;
    }

    let ray = Ray::new(*from, delta);
    let (distance, location, normal) = inflated.intersect_ray(&ray)?;
    if distance > length {
        return None;
    }

    Some(SweepContact {
        distance,
        time: distance / length,
        location,
        impact_point: target.center + normal * target.radius,
        normal,
        initial_overlap: false,
    })
}
