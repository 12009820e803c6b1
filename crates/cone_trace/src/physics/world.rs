//! Reference collision world made of static spheres
//!
//! Small enough to reason about exactly, which makes it the back-end of the
//! tracer tests and the demo. Real hosts implement [`CollisionWorld`] on top
//! of their own physics engine.

use std::cell::Cell;

use crate::foundation::math::{Point3, Real};
use crate::physics::collision::{sweep_sphere_sphere, Sphere};
use crate::physics::collision_layers::{CollisionChannel, ObjectQueryParams};
use crate::physics::query::{CollisionWorld, HitResult, ObjectId, QueryParams};

/// How a body responds to queries that can see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResponse {
    /// The body stops the query
    Block,
    /// The body is reported but does not stop the query
    Overlap,
}

/// A static sphere body
#[derive(Debug, Clone)]
pub struct SphereBody {
    /// Object id reported in hits
    pub id: ObjectId,
    /// World-space shape
    pub shape: Sphere,
    /// Object channel the body belongs to
    pub channel: CollisionChannel,
    /// Response to queries
    pub response: CollisionResponse,
}

/// Collision world containing static sphere bodies
///
/// Multi-sweep semantics: results are sorted by time of impact and include
/// overlaps up to and including the first blocking hit.
#[derive(Debug, Default)]
pub struct SphereWorld {
    bodies: Vec<SphereBody>,
    next_id: u64,
    sweep_count: Cell<usize>,
}

impl SphereWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body and return its id
    pub fn add_sphere(
        &mut self,
        center: Point3,
        radius: Real,
        channel: CollisionChannel,
        response: CollisionResponse,
    ) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;

        self.bodies.push(SphereBody {
            id,
            shape: Sphere::new(center, radius),
            channel,
            response,
        });

        id
    }

    /// Number of sweeps served since creation
    pub fn sweep_count(&self) -> usize {
        self.sweep_count.get()
    }
}

impl CollisionWorld for SphereWorld {
    fn sweep_sphere(
        &self,
        from: &Point3,
        to: &Point3,
        radius: Real,
        objects: &ObjectQueryParams,
        params: &QueryParams,
    ) -> Vec<HitResult> {
        self.sweep_count.set(self.sweep_count.get() + 1);

        let mut hits: Vec<HitResult> = self
            .bodies
            .iter()
            .filter(|body| objects.accepts(body.channel) && !params.is_ignored(body.id))
            .filter_map(|body| {
                sweep_sphere_sphere(from, to, radius, &body.shape).map(|contact| HitResult {
                    object: body.id,
                    impact_point: contact.impact_point,
                    location: contact.location,
                    normal: contact.normal,
                    distance: contact.distance,
                    time: contact.time,
                    blocking: body.response == CollisionResponse::Block,
                })
            })
            .collect();

        // Stable: equal times keep insertion order
        hits.sort_by(|a, b| a.time.total_cmp(&b.time));

        if let Some(first_block) = hits.iter().position(|hit| hit.blocking) {
            hits.truncate(first_block + 1);
        }

        hits
    }
}
