//! Cone trace orchestration
//!
//! Validates a trace request, sets up the tangent construction, then feeds
//! every sphere of the stepper to the sweep dispatcher.

use crate::config::{ConeTraceConfig, ConfigError};
use crate::debug::{draw_cone_trace, DebugSink, DebugTraceOptions};
use crate::foundation::math::{Point3, Real, Vec3};
use crate::physics::collision_layers::{CollisionChannel, ObjectQueryParams};
use crate::physics::query::{find_ignorable_owner, CollisionWorld, HitResult, Ignorable, ObjectId, QueryParams};
use crate::trace::cone::{Cone, ConeParams};
use crate::trace::diagnostics::{LogObserver, TraceEvent, TraceObserver};
use crate::trace::dispatch::{HitPolicy, SweepDispatcher};
use crate::trace::error::TraceError;
use crate::trace::stepper::{ConeSphere, ConeStepper, Termination};
use crate::trace::tangent;

/// Tag attached to every sweep of a cone trace
pub const TRACE_TAG: &str = "ConeTraceMultiForObjects";

static LOG_OBSERVER: LogObserver = LogObserver;

/// Per-call trace options
#[derive(Clone, Copy, Default)]
pub struct TraceOptions<'a> {
    /// What a blocking hit does to the collected hits
    pub hit_policy: HitPolicy,
    /// Ignore the nearest ignorable object of `self_context`'s owner chain
    pub ignore_self: bool,
    /// The object issuing the trace
    pub self_context: Option<&'a dyn Ignorable>,
    /// Debug drawing; falls back to the tracer configuration when `None`
    pub debug: Option<&'a DebugTraceOptions>,
}

impl<'a> TraceOptions<'a> {
    /// Options with the given hit policy
    pub fn with_policy(hit_policy: HitPolicy) -> Self {
        Self {
            hit_policy,
            ..Self::default()
        }
    }

    /// Ignore `context`, or its nearest ignorable owner
    pub fn ignoring_self(mut self, context: &'a dyn Ignorable) -> Self {
        self.ignore_self = true;
        self.self_context = Some(context);
        self
    }
}

/// Result of a successful trace
#[derive(Debug, Clone, PartialEq)]
pub struct TraceOutcome {
    /// Hits after the hit policy was applied
    pub hits: Vec<HitResult>,
    /// `hits` is not empty
    pub any_hit: bool,
    /// Every swept sphere, in sweep order
    pub spheres: Vec<ConeSphere>,
    /// How sphere emission ended
    pub termination: Termination,
    /// Number of sweeps issued
    pub sweep_count: usize,
}

impl TraceOutcome {
    /// Stepping reached the end of the cone or was halted by a hit
    pub fn terminated_normally(&self) -> bool {
        !self.terminated_on_error()
    }

    /// Stepping broke down on degenerate geometry
    pub fn terminated_on_error(&self) -> bool {
        matches!(self.termination, Termination::Degenerate(_))
    }
}

/// Sweeps variable-radius cones through a collision world
pub struct ConeTracer<'w, W: CollisionWorld + ?Sized> {
    world: &'w W,
    config: ConeTraceConfig,
    observer: &'w dyn TraceObserver,
}

impl<'w, W: CollisionWorld + ?Sized> ConeTracer<'w, W> {
    /// Tracer with default configuration reporting to the `log` facade
    pub fn new(world: &'w W) -> Self {
        Self {
            world,
            config: ConeTraceConfig::default(),
            observer: &LOG_OBSERVER,
        }
    }

    /// Replace the configuration; invalid configurations are refused
    pub fn with_config(mut self, config: ConeTraceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Report diagnostics to `observer`
    pub fn with_observer(mut self, observer: &'w dyn TraceObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ConeTraceConfig {
        &self.config
    }

    /// Trace a cone.
    ///
    /// Validation runs in order: object types, then length and radii, then
    /// direction. A rejected trace issues no sweep.
    pub fn trace(
        &self,
        params: &ConeParams,
        object_types: &[CollisionChannel],
        ignore: &[ObjectId],
        options: &TraceOptions<'_>,
    ) -> Result<TraceOutcome, TraceError> {
        self.run(params, object_types, ignore, options, None)
    }

    /// Trace a cone and draw it into `sink`
    pub fn trace_with_debug(
        &self,
        params: &ConeParams,
        object_types: &[CollisionChannel],
        ignore: &[ObjectId],
        options: &TraceOptions<'_>,
        sink: &mut dyn DebugSink,
    ) -> Result<TraceOutcome, TraceError> {
        self.run(params, object_types, ignore, options, Some(sink))
    }

    fn reject(&self, error: TraceError) -> TraceError {
        self.observer.on_event(&TraceEvent::Rejected { error: error.clone() });
        error
    }

    fn object_query(&self, object_types: &[CollisionChannel]) -> Result<ObjectQueryParams, TraceError> {
        let (objects, rejected) = ObjectQueryParams::from_channels(object_types);
        for channel in rejected {
            self.observer.on_event(&TraceEvent::InvalidObjectType { channel });
        }

        if objects.is_valid() {
            Ok(objects)
        } else {
            Err(self.reject(TraceError::InvalidQueryConfiguration))
        }
    }

    fn query_params(&self, ignore: &[ObjectId], options: &TraceOptions<'_>) -> QueryParams {
        let mut params = QueryParams::new(TRACE_TAG);
        params.return_physical_material = true;
        params.return_face_index = true;
        params.add_ignored_all(ignore);

        if options.ignore_self {
            match options.self_context.and_then(find_ignorable_owner) {
                Some(owner) => params.add_ignored(owner),
                None => self.observer.on_event(&TraceEvent::SelfNotFound),
            }
        }

        params
    }

    fn run(
        &self,
        params: &ConeParams,
        object_types: &[CollisionChannel],
        ignore: &[ObjectId],
        options: &TraceOptions<'_>,
        sink: Option<&mut dyn DebugSink>,
    ) -> Result<TraceOutcome, TraceError> {
        let objects = self.object_query(object_types)?;
        let cone = Cone::new(params).map_err(|e| self.reject(e))?;
        let frame = cone.frame();
        let solution = tangent::solve(
            &cone.start_sphere(),
            cone.end_radius(),
            &(cone.end() - cone.start()),
            &frame,
        )
        .map_err(|e| self.reject(e))?;

        let query = self.query_params(ignore, options);
        let offset = -frame.forward.into_inner() * self.config.sweep_offset;

        let mut stepper = ConeStepper::new(cone, frame, &solution, self.config.end_tolerance);
        let mut dispatcher = SweepDispatcher::new(self.world, &objects, &query, offset, options.hit_policy);
        let mut spheres = Vec::new();

        while let Some(sphere) = stepper.next() {
            let report = dispatcher.dispatch(&sphere);
            let sweep = spheres.len();
            spheres.push(sphere);

            if let Some(object) = report.truncated_to {
                self.observer.on_event(&TraceEvent::HitsTruncated { sweep, object });
            }
            if report.halt {
                stepper.halt();
                self.observer.on_event(&TraceEvent::HaltedOnHit { sweep });
            }
        }

        let termination = stepper.termination().unwrap_or(Termination::Completed);
        if let Termination::Degenerate(reason) = termination {
            self.observer.on_event(&TraceEvent::SteppingDegenerate {
                reason,
                spheres: spheres.len().saturating_sub(1),
            });
        }

        let (hits, sweep_count) = dispatcher.finish();
        self.observer.on_event(&TraceEvent::Completed {
            spheres: spheres.len(),
            sweeps: sweep_count,
            hits: hits.len(),
        });

        if let Some(sink) = sink {
            let debug = options.debug.unwrap_or(&self.config.debug);
            draw_cone_trace(sink, &cone, &frame, &solution.contact_direction, &spheres, hits.as_slice(), debug);
        }

        Ok(TraceOutcome {
            any_hit: !hits.is_empty(),
            hits: hits.into_vec(),
            spheres,
            termination,
            sweep_count,
        })
    }
}

/// Trace a cone through `world` and return every hit plus whether there was
/// any.
///
/// `break_on_first_hit` replaces the collected hits with the first blocking
/// hit of a sweep but keeps sweeping. Rejected traces return no hits; the
/// reason goes to the `log` facade.
pub fn multi_cone_trace<W: CollisionWorld + ?Sized>(
    world: &W,
    context: Option<&dyn Ignorable>,
    start: Point3,
    direction: Vec3,
    start_radius: Real,
    end_radius: Real,
    length: Real,
    object_types: &[CollisionChannel],
    ignore: &[ObjectId],
    break_on_first_hit: bool,
    ignore_self: bool,
    debug: Option<(&DebugTraceOptions, &mut dyn DebugSink)>,
) -> (Vec<HitResult>, bool) {
    let tracer = ConeTracer::new(world);
    let params = ConeParams::new(start, direction, start_radius, end_radius, length);
    let mut options = TraceOptions {
        hit_policy: HitPolicy::from_break_on_first_hit(break_on_first_hit),
        ignore_self,
        self_context: context,
        debug: None,
    };

    let result = match debug {
        Some((debug_options, sink)) => {
            options.debug = Some(debug_options);
            tracer.trace_with_debug(&params, object_types, ignore, &options, sink)
        }
        None => tracer.trace(&params, object_types, ignore, &options),
    };

    match result {
        Ok(outcome) => (outcome.hits, outcome.any_hit),
        Err(_) => (Vec::new(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DebugDrawSystem, DebugDrawType};
    use crate::physics::world::{CollisionResponse, SphereWorld};
    use crate::trace::diagnostics::EventRecorder;
    use crate::trace::stepper::{DegenerateReason, SphereKind};
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    const STATIC: &[CollisionChannel] = &[CollisionChannel::WorldStatic];

    fn scenario_cone() -> ConeParams {
        ConeParams::new(Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0)
    }

    /// A blocker only the second sphere (axial ~21.7, radius ~11.7) reaches,
    /// and an overlap body deep inside the cone
    fn scenario_world() -> (SphereWorld, ObjectId, ObjectId) {
        let mut world = SphereWorld::new();
        let block = world.add_sphere(Point3::new(5.0, 0.0, 22.0), 1.0, CollisionChannel::WorldStatic, CollisionResponse::Block);
        let overlap = world.add_sphere(Point3::new(0.0, 0.0, 200.0), 1.0, CollisionChannel::WorldStatic, CollisionResponse::Overlap);
        (world, block, overlap)
    }

    struct Node {
        id: ObjectId,
        ignorable: bool,
        owner: Option<Box<Node>>,
    }

    impl Ignorable for Node {
        fn object_id(&self) -> ObjectId {
            self.id
        }

        fn is_ignorable(&self) -> bool {
            self.ignorable
        }

        fn owner(&self) -> Option<&dyn Ignorable> {
            self.owner.as_deref().map(|node| node as &dyn Ignorable)
        }
    }

    #[test]
    fn test_empty_world_scenario() {
        let world = SphereWorld::new();
        let tracer = ConeTracer::new(&world);
        let outcome = tracer.trace(&scenario_cone(), STATIC, &[], &TraceOptions::default()).unwrap();

        assert!(!outcome.any_hit);
        assert!(outcome.hits.is_empty());
        assert_eq!(outcome.termination, Termination::Completed);
        assert!(outcome.terminated_normally());

        let first = outcome.spheres.first().unwrap();
        assert_eq!(first.kind, SphereKind::Start);
        assert_eq!(first.sphere.center, Point3::origin());
        assert_relative_eq!(first.sphere.radius, 10.0);

        let last = outcome.spheres.last().unwrap();
        assert_eq!(last.kind, SphereKind::End);
        assert_relative_eq!(last.sphere.center, Point3::new(0.0, 0.0, 500.0), epsilon = 1e-9);
        assert_relative_eq!(last.sphere.radius, 50.0);

        // One sweep per sphere, Start and End included
        assert_eq!(outcome.sweep_count, outcome.spheres.len());
        assert_eq!(world.sweep_count(), outcome.spheres.len());
    }

    #[test]
    fn test_zero_direction_issues_no_sweep() {
        let world = SphereWorld::new();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let params = ConeParams::new(Point3::origin(), Vec3::zeros(), 10.0, 50.0, 500.0);

        let result = tracer.trace(&params, STATIC, &[], &TraceOptions::default());
        assert_eq!(result, Err(TraceError::DegenerateDirection));
        assert_eq!(world.sweep_count(), 0);
        assert_eq!(
            recorder.events(),
            vec![TraceEvent::Rejected { error: TraceError::DegenerateDirection }]
        );

        let (hits, any_hit) = multi_cone_trace(
            &world, None, Point3::origin(), Vec3::zeros(), 10.0, 50.0, 500.0, STATIC, &[], false, false, None,
        );
        assert!(hits.is_empty());
        assert!(!any_hit);
        assert_eq!(world.sweep_count(), 0);
    }

    #[test]
    fn test_only_invalid_channels_rejected() {
        let (world, _, _) = scenario_world();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let channels = [CollisionChannel::Visibility, CollisionChannel::Game(200)];

        let result = tracer.trace(&scenario_cone(), &channels, &[], &TraceOptions::default());
        assert_eq!(result, Err(TraceError::InvalidQueryConfiguration));
        assert_eq!(world.sweep_count(), 0);
        assert_eq!(
            recorder.events(),
            vec![
                TraceEvent::InvalidObjectType { channel: CollisionChannel::Visibility },
                TraceEvent::InvalidObjectType { channel: CollisionChannel::Game(200) },
                TraceEvent::Rejected { error: TraceError::InvalidQueryConfiguration },
            ]
        );
    }

    #[test]
    fn test_invalid_channel_dropped_when_others_valid() {
        let (world, block, _) = scenario_world();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let channels = [CollisionChannel::Camera, CollisionChannel::WorldStatic];

        let outcome = tracer.trace(&scenario_cone(), &channels, &[], &TraceOptions::default()).unwrap();
        assert!(outcome.hits.iter().any(|h| h.object == block));
        assert_eq!(
            recorder.events()[0],
            TraceEvent::InvalidObjectType { channel: CollisionChannel::Camera }
        );
    }

    #[test]
    fn test_filter_checked_before_geometry() {
        let world = SphereWorld::new();
        let tracer = ConeTracer::new(&world).with_observer(&crate::trace::diagnostics::NullObserver);
        let params = ConeParams::new(Point3::origin(), Vec3::zeros(), -1.0, 50.0, 500.0);

        assert_eq!(
            tracer.trace(&params, &[], &[], &TraceOptions::default()),
            Err(TraceError::InvalidQueryConfiguration)
        );
        assert!(matches!(
            tracer.trace(&params, STATIC, &[], &TraceOptions::default()),
            Err(TraceError::InvalidGeometryParameters { .. })
        ));
    }

    #[test]
    fn test_truncate_on_block_keeps_sweeping() {
        let (world, block, overlap) = scenario_world();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let options = TraceOptions::with_policy(HitPolicy::TruncateOnBlock);

        let outcome = tracer.trace(&scenario_cone(), STATIC, &[], &options).unwrap();

        // The blocker replaced the collection at the second sweep; later
        // sweeps appended the overlap body
        assert!(recorder.events().contains(&TraceEvent::HitsTruncated { sweep: 1, object: block }));
        assert_eq!(outcome.hits[0].object, block);
        assert!(outcome.hits.len() >= 2);
        assert!(outcome.hits[1..].iter().all(|h| h.object == overlap));
        assert_eq!(outcome.termination, Termination::Completed);
        assert_eq!(outcome.spheres.last().unwrap().kind, SphereKind::End);
    }

    #[test]
    fn test_halt_on_block_stops_after_blocking_sweep() {
        let (world, block, _) = scenario_world();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let options = TraceOptions::with_policy(HitPolicy::HaltOnBlock);

        let outcome = tracer.trace(&scenario_cone(), STATIC, &[], &options).unwrap();

        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].object, block);
        assert!(outcome.hits[0].blocking);
        assert_eq!(outcome.sweep_count, 2);
        assert_eq!(outcome.spheres.len(), 2);
        assert_eq!(outcome.termination, Termination::HaltedOnHit);
        assert!(outcome.terminated_normally());
        assert!(recorder.events().contains(&TraceEvent::HaltedOnHit { sweep: 1 }));
    }

    #[test]
    fn test_collect_all_keeps_every_hit() {
        let (world, block, overlap) = scenario_world();
        let (hits, any_hit) = multi_cone_trace(
            &world, None, Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0, STATIC, &[], false, false, None,
        );

        assert!(any_hit);
        assert_eq!(hits[0].object, block);
        assert!(hits.iter().any(|h| h.object == overlap));
    }

    #[test]
    fn test_break_on_first_hit_truncates() {
        let (world, block, _) = scenario_world();
        let (hits, any_hit) = multi_cone_trace(
            &world, None, Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0, STATIC, &[], true, false, None,
        );

        assert!(any_hit);
        assert_eq!(hits.iter().filter(|h| h.object == block).count(), 1);
        assert_eq!(hits[0].object, block);
    }

    #[test]
    fn test_ignore_list_and_ignore_self() {
        let (world, block, overlap) = scenario_world();
        let tracer = ConeTracer::new(&world);

        let outcome = tracer.trace(&scenario_cone(), STATIC, &[overlap], &TraceOptions::default()).unwrap();
        assert!(outcome.hits.iter().all(|h| h.object == block));

        // Component -> non-ignorable mount -> the blocker
        let context = Node {
            id: ObjectId::new(100),
            ignorable: false,
            owner: Some(Box::new(Node {
                id: ObjectId::new(101),
                ignorable: false,
                owner: Some(Box::new(Node {
                    id: block,
                    ignorable: true,
                    owner: None,
                })),
            })),
        };
        let options = TraceOptions::default().ignoring_self(&context);
        let outcome = tracer.trace(&scenario_cone(), STATIC, &[overlap], &options).unwrap();
        assert!(!outcome.any_hit);
    }

    #[test]
    fn test_ignore_self_without_owner_reports() {
        let world = SphereWorld::new();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let context = Node {
            id: ObjectId::new(1),
            ignorable: false,
            owner: None,
        };

        tracer
            .trace(&scenario_cone(), STATIC, &[], &TraceOptions::default().ignoring_self(&context))
            .unwrap();
        assert_eq!(recorder.events()[0], TraceEvent::SelfNotFound);
    }

    #[test]
    fn test_degenerate_stepping_still_sweeps_end() {
        let world = SphereWorld::new();
        let recorder = EventRecorder::new();
        let tracer = ConeTracer::new(&world).with_observer(&recorder);
        let params = ConeParams::new(Point3::origin(), Vec3::z(), 1.0, 11.0, 10.0);

        let outcome = tracer.trace(&params, STATIC, &[], &TraceOptions::default()).unwrap();
        assert!(outcome.terminated_on_error());
        assert_eq!(outcome.spheres.len(), 2);
        assert_eq!(outcome.sweep_count, 2);
        assert!(recorder.events().contains(&TraceEvent::SteppingDegenerate {
            reason: DegenerateReason::DegenerateTangent,
            spheres: 1,
        }));
    }

    #[test]
    fn test_impossible_tangent_rejected() {
        let world = SphereWorld::new();
        let tracer = ConeTracer::new(&world);
        let params = ConeParams::new(Point3::origin(), Vec3::z(), 1.0, 30.0, 10.0);

        let result = tracer.trace(&params, STATIC, &[], &TraceOptions::default());
        assert!(matches!(result, Err(TraceError::InvalidTangentGeometry { .. })));
        assert_eq!(world.sweep_count(), 0);
    }

    #[test]
    fn test_deterministic() {
        let (world, _, _) = scenario_world();
        let tracer = ConeTracer::new(&world);
        let params = ConeParams::new(Point3::new(-3.0, 4.0, 1.0), Vec3::new(0.2, 0.1, 1.0), 10.0, 50.0, 500.0);

        let a = tracer.trace(&params, STATIC, &[], &TraceOptions::default()).unwrap();
        let b = tracer.trace(&params, STATIC, &[], &TraceOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    /// Forwards to a `SphereWorld` and records every sweep segment
    #[derive(Default)]
    struct RecordingWorld {
        inner: SphereWorld,
        sweeps: RefCell<Vec<(Point3, Point3)>>,
    }

    impl CollisionWorld for RecordingWorld {
        fn sweep_sphere(
            &self,
            from: &Point3,
            to: &Point3,
            radius: Real,
            objects: &ObjectQueryParams,
            params: &QueryParams,
        ) -> Vec<HitResult> {
            self.sweeps.borrow_mut().push((*from, *to));
            self.inner.sweep_sphere(from, to, radius, objects, params)
        }
    }

    #[test]
    fn test_sweeps_run_backward_by_offset() {
        let world = RecordingWorld::default();
        let config = ConeTraceConfig::new().with_sweep_offset(0.5);
        let tracer = ConeTracer::new(&world).with_config(config).unwrap();
        let params = ConeParams::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 1.0, 0.0), 10.0, 50.0, 500.0);
        let outcome = tracer.trace(&params, STATIC, &[], &TraceOptions::default()).unwrap();

        let sweeps = world.sweeps.borrow();
        assert_eq!(sweeps.len(), outcome.spheres.len());
        let expected = -Vec3::new(1.0, 1.0, 0.0).normalize() * 0.5;
        for ((from, to), sphere) in sweeps.iter().zip(&outcome.spheres) {
            assert_eq!(*from, sphere.sphere.center);
            assert_relative_eq!(to - from, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_invalid_config_refused() {
        let world = RecordingWorld::default();

        for config in [
            ConeTraceConfig::new().with_sweep_offset(0.0),
            ConeTraceConfig::new().with_sweep_offset(Real::NAN),
            ConeTraceConfig {
                end_tolerance: Real::NAN,
                ..ConeTraceConfig::new()
            },
        ] {
            assert!(matches!(
                ConeTracer::new(&world).with_config(config),
                Err(ConfigError::Invalid(_))
            ));
        }
        assert!(world.sweeps.borrow().is_empty());
    }

    #[test]
    fn test_break_on_first_hit_ignores_end_cap_blocks() {
        let mut world = SphereWorld::new();
        let overlap = world.add_sphere(Point3::new(0.0, 0.0, 5.0), 1.0, CollisionChannel::WorldStatic, CollisionResponse::Overlap);
        // Only the end sphere (radius 50 at 500) reaches it
        let block = world.add_sphere(Point3::new(0.0, 0.0, 549.0), 1.0, CollisionChannel::WorldStatic, CollisionResponse::Block);

        let (hits, any_hit) = multi_cone_trace(
            &world, None, Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0, STATIC, &[], true, false, None,
        );

        assert!(any_hit);
        assert_eq!(hits.iter().map(|h| h.object).collect::<Vec<_>>(), vec![overlap, block]);
    }

    #[test]
    fn test_debug_drawing() {
        let (world, _, _) = scenario_world();
        let tracer = ConeTracer::new(&world);
        let debug = DebugTraceOptions::with_draw_type(DebugDrawType::ForDuration);
        let options = TraceOptions {
            hit_policy: HitPolicy::HaltOnBlock,
            debug: Some(&debug),
            ..TraceOptions::default()
        };
        let mut draw = DebugDrawSystem::new();

        let outcome = tracer
            .trace_with_debug(&scenario_cone(), STATIC, &[], &options, &mut draw)
            .unwrap();

        // One point per hit, 2 caps, 2 half circles, 4 lines
        assert_eq!(draw.shape_count(), outcome.hits.len() + 8);
        draw.update(debug.draw_time + 1.0);
        assert_eq!(draw.shape_count(), 0);
    }

    #[test]
    fn test_debug_disabled_by_default() {
        let world = SphereWorld::new();
        let tracer = ConeTracer::new(&world);
        let mut draw = DebugDrawSystem::new();
        tracer
            .trace_with_debug(&scenario_cone(), STATIC, &[], &TraceOptions::default(), &mut draw)
            .unwrap();
        assert_eq!(draw.shape_count(), 0);
    }
}
