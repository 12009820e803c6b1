//! One swept-sphere query per cone sphere, aggregated under a hit policy

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Point3, Vec3};
use crate::physics::collision_layers::ObjectQueryParams;
use crate::physics::query::{CollisionWorld, HitResult, ObjectId, QueryParams};
use crate::trace::stepper::{ConeSphere, SphereKind};

/// What happens to the collected hits when a sweep reports a blocking hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitPolicy {
    /// Keep every hit of every sweep
    #[default]
    CollectAll,
    /// Replace everything collected so far with the sweep's first blocking
    /// hit, then keep sweeping. Non-blocking hits never truncate, and only
    /// interpolated spheres truncate; the start and end sphere sweeps always
    /// append.
    TruncateOnBlock,
    /// Keep only the first blocking hit of any sweep, start and end spheres
    /// included, then stop sweeping
    HaltOnBlock,
}

impl HitPolicy {
    /// Policy for the classic "break on first hit" flag
    pub fn from_break_on_first_hit(break_on_first_hit: bool) -> Self {
        if break_on_first_hit {
            Self::TruncateOnBlock
        } else {
            Self::CollectAll
        }
    }

    /// Whether a blocking hit of a `kind` sphere replaces the collected hits
    pub fn truncates(self, kind: SphereKind) -> bool {
        match self {
            Self::CollectAll => false,
            Self::TruncateOnBlock => kind == SphereKind::Interpolated,
            Self::HaltOnBlock => true,
        }
    }
}

/// Hits gathered over all sweeps of one trace, in sweep order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitCollection {
    hits: Vec<HitResult>,
}

impl HitCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the hits of one sweep
    pub fn append(&mut self, hits: impl IntoIterator<Item = HitResult>) {
        self.hits.extend(hits);
    }

    /// Discard everything and keep only `hit`
    pub fn replace_with(&mut self, hit: HitResult) {
        self.hits.clear();
        self.hits.push(hit);
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// No hit collected
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Iterate over the hits
    pub fn iter(&self) -> std::slice::Iter<'_, HitResult> {
        self.hits.iter()
    }

    /// Hits as a slice
    pub fn as_slice(&self) -> &[HitResult] {
        &self.hits
    }

    /// Take the hits
    pub fn into_vec(self) -> Vec<HitResult> {
        self.hits
    }
}

impl<'a> IntoIterator for &'a HitCollection {
    type Item = &'a HitResult;
    type IntoIter = std::slice::Iter<'a, HitResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// What a single sweep did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Hits returned by the sweep
    pub hits: usize,
    /// The collection was replaced by this blocking hit
    pub truncated_to: Option<ObjectId>,
    /// The policy asks to stop sweeping
    pub halt: bool,
}

/// Issues the sweeps of one trace and owns its hit collection
pub struct SweepDispatcher<'q, W: CollisionWorld + ?Sized> {
    world: &'q W,
    objects: &'q ObjectQueryParams,
    params: &'q QueryParams,
    offset: Vec3,
    policy: HitPolicy,
    hits: HitCollection,
    sweeps: usize,
}

impl<'q, W: CollisionWorld + ?Sized> SweepDispatcher<'q, W> {
    /// Sweeps run from each sphere center to `center + offset`; the offset
    /// must be non-zero.
    pub fn new(
        world: &'q W,
        objects: &'q ObjectQueryParams,
        params: &'q QueryParams,
        offset: Vec3,
        policy: HitPolicy,
    ) -> Self {
        Self {
            world,
            objects,
            params,
            offset,
            policy,
            hits: HitCollection::new(),
            sweeps: 0,
        }
    }

    /// Sweep one cone sphere and fold its hits into the collection
    pub fn dispatch(&mut self, cone_sphere: &ConeSphere) -> SweepReport {
        let sphere = &cone_sphere.sphere;
        let to: Point3 = sphere.center + self.offset;
        let results = self
            .world
            .sweep_sphere(&sphere.center, &to, sphere.radius, self.objects, self.params);
        self.sweeps += 1;

        let mut report = SweepReport {
            hits: results.len(),
            ..SweepReport::default()
        };

        let first_block = if self.policy.truncates(cone_sphere.kind) {
            results.iter().find(|hit| hit.blocking).cloned()
        } else {
            None
        };

        match first_block {
            Some(block) => {
                report.truncated_to = Some(block.object);
                report.halt = self.policy == HitPolicy::HaltOnBlock;
                self.hits.replace_with(block);
            }
            None => self.hits.append(results),
        }

        report
    }

    /// Hits collected so far
    pub fn hits(&self) -> &HitCollection {
        &self.hits
    }

    /// Number of sweeps issued
    pub fn sweep_count(&self) -> usize {
        self.sweeps
    }

    /// Finish dispatching and hand over the collection and sweep count
    pub fn finish(self) -> (HitCollection, usize) {
        (self.hits, self.sweeps)
    }
}
