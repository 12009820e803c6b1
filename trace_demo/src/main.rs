//! Cone trace demo
//!
//! Sweeps a widening cone out of a turret through a small asteroid field and
//! logs what it hits.
//!
//! Usage: `trace_demo [config.toml|config.ron]`

use cone_trace::dataset::{DatasetLoader, SourceType};
use cone_trace::debug::{DebugDrawType, DebugTraceOptions};
use cone_trace::foundation::logging;
use cone_trace::prelude::*;
use cone_trace::trace::{EventRecorder, LogObserver};

/// Ship carrying the turret; the only thing "ignore self" can skip
struct Ship {
    id: ObjectId,
}

impl Ignorable for Ship {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn is_ignorable(&self) -> bool {
        true
    }

    fn owner(&self) -> Option<&dyn Ignorable> {
        None
    }
}

/// Turret mount; not a collision object itself
struct Turret<'a> {
    ship: &'a Ship,
}

impl Ignorable for Turret<'_> {
    fn object_id(&self) -> ObjectId {
        ObjectId::new(u64::MAX)
    }

    fn is_ignorable(&self) -> bool {
        false
    }

    fn owner(&self) -> Option<&dyn Ignorable> {
        Some(self.ship)
    }
}

fn build_world() -> (SphereWorld, ObjectId) {
    let mut world = SphereWorld::new();
    let ship = world.add_sphere(Point3::origin(), 8.0, CollisionChannel::Pawn, CollisionResponse::Block);

    let asteroids = [
        (Point3::new(4.0, 0.0, 60.0), 3.0, CollisionResponse::Overlap),
        (Point3::new(-25.0, 10.0, 180.0), 6.0, CollisionResponse::Block),
        (Point3::new(30.0, -30.0, 320.0), 12.0, CollisionResponse::Block),
        (Point3::new(200.0, 0.0, 250.0), 10.0, CollisionResponse::Block),
    ];
    for (center, radius, response) in asteroids {
        world.add_sphere(center, radius, CollisionChannel::WorldDynamic, response);
    }

    (world, ship)
}

fn load_config() -> Result<ConeTraceConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            Ok(ConeTraceConfig::load_from_file(&path)?)
        }
        None => Ok(ConeTraceConfig::default()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    let loader = DatasetLoader::new(config.dataset.clone());
    match loader.load_random(SourceType::Uav, &mut rand::thread_rng()) {
        Ok(lines) => log::info!("Loaded UAV sample with {} lines", lines.len()),
        Err(e) => log::info!("No UAV sample available: {e}"),
    }

    let (world, ship_id) = build_world();
    let ship = Ship { id: ship_id };
    let turret = Turret { ship: &ship };

    let recorder = EventRecorder::new();
    let tracer = ConeTracer::new(&world).with_config(config)?.with_observer(&recorder);
    let params = ConeParams::new(Point3::origin(), Vec3::z(), 10.0, 50.0, 500.0);
    let channels = [CollisionChannel::WorldDynamic, CollisionChannel::Pawn, CollisionChannel::Visibility];

    let debug = DebugTraceOptions::with_draw_type(DebugDrawType::ForDuration);
    let mut draw = DebugDrawSystem::new();

    for policy in [HitPolicy::CollectAll, HitPolicy::TruncateOnBlock, HitPolicy::HaltOnBlock] {
        let options = TraceOptions {
            hit_policy: policy,
            debug: Some(&debug),
            ..TraceOptions::default()
        }
        .ignoring_self(&turret);

        let outcome = tracer.trace_with_debug(&params, &channels, &[], &options, &mut draw)?;
        for event in recorder.take() {
            LogObserver.on_event(&event);
        }

        log::info!(
            "{policy:?}: {} spheres, {} sweeps, {:?}, {} hits",
            outcome.spheres.len(),
            outcome.sweep_count,
            outcome.termination,
            outcome.hits.len()
        );
        for hit in &outcome.hits {
            log::info!(
                "  {:?} at {:.2?} (blocking: {})",
                hit.object,
                hit.impact_point.coords.as_slice(),
                hit.blocking
            );
        }
    }

    log::info!("Debug shapes queued: {}", draw.shape_count());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");

    log::info!("Starting cone trace demo");

    match run() {
        Ok(()) => {
            log::info!("Cone trace demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Cone trace demo failed: {:?}", e);
            Err(e)
        }
    }
}
