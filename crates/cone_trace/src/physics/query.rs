//! Collision query interface
//!
//! The cone tracer never talks to a concrete physics back-end. It issues
//! swept-sphere queries through [`CollisionWorld`] and treats the returned
//! [`HitResult`]s as opaque records, inspecting only `blocking` and
//! `impact_point`.

use crate::foundation::math::{Point3, Real, Vec3};
use crate::physics::collision_layers::ObjectQueryParams;

/// Opaque reference to an object known to a collision world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wrap a raw object id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Result of a swept query against a single object
#[derive(Debug, Clone, PartialEq)]
pub struct HitResult {
    /// The object that was hit
    pub object: ObjectId,
    /// Contact point on the surface of the hit object
    pub impact_point: Point3,
    /// Center of the swept shape at the time of contact
    pub location: Point3,
    /// Surface normal at the impact point
    pub normal: Vec3,
    /// Distance travelled along the sweep before contact
    pub distance: Real,
    /// Fraction of the sweep travelled before contact, in `[0, 1]`
    pub time: Real,
    /// The hit fully obstructs the query (as opposed to an overlap)
    pub blocking: bool,
}

/// Non-filter parameters of a query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Name attached to the query for profiling and debugging
    pub tag: &'static str,
    /// Objects the query must never report
    ignored: Vec<ObjectId>,
    /// Ask the back-end to fill in physical materials
    pub return_physical_material: bool,
    /// Ask the back-end to fill in face indices
    pub return_face_index: bool,
}

impl QueryParams {
    /// Create query params with a tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Ignore a single object
    pub fn add_ignored(&mut self, object: ObjectId) {
        if !self.ignored.contains(&object) {
            self.ignored.push(object);
        }
    }

    /// Ignore several objects
    pub fn add_ignored_all(&mut self, objects: &[ObjectId]) {
        for &object in objects {
            self.add_ignored(object);
        }
    }

    /// Check if a query with these params skips `object`
    pub fn is_ignored(&self, object: ObjectId) -> bool {
        self.ignored.contains(&object)
    }

    /// Objects ignored by the query
    pub fn ignored(&self) -> &[ObjectId] {
        &self.ignored
    }
}

/// Capability of objects that take part in ownership chains
///
/// The trace context is often not itself something a query can ignore (a
/// component, a weapon mount); its nearest ignorable owner is.
pub trait Ignorable {
    /// Id of this object in the collision world
    fn object_id(&self) -> ObjectId;

    /// Whether this object can be placed on a query's ignore list
    fn is_ignorable(&self) -> bool;

    /// The object owning this one, if any
    fn owner(&self) -> Option<&dyn Ignorable>;
}

/// Find the object to ignore for "ignore self": the context itself when it
/// is ignorable, otherwise the first ignorable object up its owner chain
pub fn find_ignorable_owner(context: &dyn Ignorable) -> Option<ObjectId> {
    let mut current = Some(context);
    while let Some(object) = current {
        if object.is_ignorable() {
            return Some(object.object_id());
        }
        current = object.owner();
    }
    None
}

/// Swept-sphere query back-end
pub trait CollisionWorld {
    /// Sweep a sphere of `radius` from `from` to `to` and report every object
    /// matching `objects` and not ignored by `params`.
    ///
    /// Results are ordered by `time`. `from == to` is not a valid sweep.
    fn sweep_sphere(
        &self,
        from: &Point3,
        to: &Point3,
        radius: Real,
        objects: &ObjectQueryParams,
        params: &QueryParams,
    ) -> Vec<HitResult>;
}

impl<W: CollisionWorld + ?Sized> CollisionWorld for &W {
    fn sweep_sphere(
        &self,
        from: &Point3,
        to: &Point3,
        radius: Real,
        objects: &ObjectQueryParams,
        params: &QueryParams,
    ) -> Vec<HitResult> {
        (**self).sweep_sphere(from, to, radius, objects, params)
    }
}
