//! Cone trace visualization

use serde::{Deserialize, Serialize};

use crate::foundation::math::{rotate_about_axis, Frame, Point3, UnitVec3, Vec4};
use crate::physics::query::HitResult;
use crate::trace::cone::Cone;
use crate::trace::stepper::ConeSphere;

use super::draw::{DebugShape, DebugSink};

/// How long trace visualization stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DebugDrawType {
    /// Nothing is drawn
    #[default]
    None,
    /// Shapes live for a single update
    ForOneFrame,
    /// Shapes live for `draw_time` seconds
    ForDuration,
    /// Shapes stay until removed
    Persistent,
}

/// Debug drawing options of a cone trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugTraceOptions {
    /// Lifetime of the shapes
    pub draw_type: DebugDrawType,
    /// Seconds shapes last with `DebugDrawType::ForDuration`
    pub draw_time: f32,
    /// Line thickness of circles and lines
    pub line_thickness: f32,
    /// Outline color when nothing was hit
    pub trace_color: Vec4,
    /// Outline color when anything was hit
    pub trace_hit_color: Vec4,
    /// Color of impact points
    pub hit_point_color: Vec4,
    /// Size of impact points
    pub hit_point_size: f32,
    /// Segments of the start and end circles
    pub circle_segments: u32,
    /// Segments of the end cap half circles
    pub half_circle_segments: u32,
    /// Also draw a circle for every swept sphere
    pub draw_segments: bool,
    /// Color of the per-sphere circles
    pub segment_color: Vec4,
}

impl Default for DebugTraceOptions {
    fn default() -> Self {
        Self {
            draw_type: DebugDrawType::None,
            draw_time: 5.0,
            line_thickness: 0.0,
            trace_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            trace_hit_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            hit_point_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            hit_point_size: 15.0,
            circle_segments: 24,
            half_circle_segments: 16,
            draw_segments: false,
            segment_color: Vec4::new(0.5, 0.0, 0.5, 1.0),
        }
    }
}

impl DebugTraceOptions {
    /// Options drawing with the given lifetime and default styling
    pub fn with_draw_type(draw_type: DebugDrawType) -> Self {
        Self {
            draw_type,
            ..Self::default()
        }
    }

    /// Whether anything is drawn
    pub fn is_enabled(&self) -> bool {
        self.draw_type != DebugDrawType::None
    }

    /// Shapes are submitted as persistent
    pub fn persistent(&self) -> bool {
        self.draw_type == DebugDrawType::Persistent
    }

    /// Duration given to submitted shapes
    pub fn lifetime(&self) -> f32 {
        if self.draw_type == DebugDrawType::ForDuration {
            self.draw_time
        } else {
            0.0
        }
    }
}

/// Submit the outline of a traced cone and its impact points to `sink`.
///
/// `contact_direction` is the tangent contact direction at the start cap;
/// the four lateral lines are that direction turned by quarter turns about
/// the axis.
pub fn draw_cone_trace(
    sink: &mut dyn DebugSink,
    cone: &Cone,
    frame: &Frame,
    contact_direction: &UnitVec3,
    spheres: &[ConeSphere],
    hits: &[HitResult],
    options: &DebugTraceOptions,
) {
    if !options.is_enabled() {
        return;
    }

    let persistent = options.persistent();
    let duration = options.lifetime();
    let thickness = options.line_thickness;
    let color = if hits.is_empty() {
        options.trace_color
    } else {
        options.trace_hit_color
    };

    for hit in hits {
        sink.submit(
            DebugShape::Point {
                position: hit.impact_point,
                color: options.hit_point_color,
                size: options.hit_point_size,
                duration,
            },
            persistent,
        );
    }

    let circle = |center: Point3, radius, segments, x_axis, y_axis, color| DebugShape::Circle {
        center,
        radius,
        segments,
        x_axis,
        y_axis,
        color,
        thickness,
        duration,
    };

    // Caps
    sink.submit(
        circle(cone.end(), cone.end_radius(), options.circle_segments, frame.right, frame.up, color),
        persistent,
    );
    sink.submit(
        circle(cone.start(), cone.start_radius(), options.circle_segments, frame.right, frame.up, color),
        persistent,
    );
    for x_axis in [frame.right, frame.up] {
        sink.submit(
            DebugShape::HalfCircle {
                center: cone.end(),
                radius: cone.end_radius(),
                segments: options.half_circle_segments,
                x_axis,
                y_axis: frame.forward,
                color,
                thickness,
                duration,
            },
            persistent,
        );
    }

    // Lateral lines
    for degrees in [0.0, 90.0, 180.0, -90.0] {
        let side = rotate_about_axis(contact_direction, &frame.forward, degrees);
        sink.submit(
            DebugShape::Line {
                start: cone.start() + side * cone.start_radius(),
                end: cone.end() + side * cone.end_radius(),
                color,
                thickness,
                duration,
            },
            persistent,
        );
    }

    if options.draw_segments {
        for sphere in spheres {
            sink.submit(
                circle(
                    sphere.sphere.center,
                    sphere.sphere.radius,
                    options.circle_segments,
                    frame.right,
                    frame.up,
                    options.segment_color,
                ),
                persistent,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::physics::query::ObjectId;
    use crate::trace::cone::ConeParams;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct RecordingSink {
        shapes: Vec<(DebugShape, bool)>,
    }

    impl DebugSink for RecordingSink {
        fn submit(&mut self, shape: DebugShape, persistent: bool) {
            self.shapes.push((shape, persistent));
        }
    }

    fn cone() -> Cone {
        Cone::new(&ConeParams::new(Point3::origin(), Vec3::z(), 10.0, 10.0, 100.0)).unwrap()
    }

    fn hit() -> HitResult {
        HitResult {
            object: ObjectId::new(7),
            impact_point: Point3::new(0.0, 5.0, 50.0),
            location: Point3::new(0.0, 0.0, 50.0),
            normal: Vec3::y(),
            distance: 0.0,
            time: 0.0,
            blocking: true,
        }
    }

    #[test]
    fn test_disabled_draws_nothing() {
        let cone = cone();
        let frame = cone.frame();
        let mut sink = RecordingSink::default();
        draw_cone_trace(&mut sink, &cone, &frame, &frame.right, &[], &[hit()], &DebugTraceOptions::default());
        assert!(sink.shapes.is_empty());
    }

    #[test]
    fn test_outline_without_hits() {
        let cone = cone();
        let frame = cone.frame();
        let options = DebugTraceOptions::with_draw_type(DebugDrawType::ForDuration);
        let mut sink = RecordingSink::default();
        draw_cone_trace(&mut sink, &cone, &frame, &frame.right, &[], &[], &options);

        // 2 caps, 2 half circles, 4 lines
        assert_eq!(sink.shapes.len(), 8);
        for (shape, persistent) in &sink.shapes {
            assert!(!persistent);
            assert_eq!(shape.color(), options.trace_color);
            assert_relative_eq!(shape.duration(), options.draw_time);
        }

        // Cylinder lateral lines run parallel to the axis at the radius
        let lines: Vec<_> = sink
            .shapes
            .iter()
            .filter_map(|(shape, _)| match shape {
                DebugShape::Line { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 4);
        for (start, end) in lines {
            assert_relative_eq!((start - cone.start()).norm(), 10.0, epsilon = 1e-9);
            assert_relative_eq!((end - start).normalize(), Vec3::z(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hits_switch_color_and_draw_points() {
        let cone = cone();
        let frame = cone.frame();
        let mut options = DebugTraceOptions::with_draw_type(DebugDrawType::Persistent);
        options.draw_segments = true;
        let spheres = [ConeSphere {
            kind: crate::trace::stepper::SphereKind::Start,
            sphere: cone.start_sphere(),
            axial_distance: 0.0,
        }];
        let mut sink = RecordingSink::default();
        draw_cone_trace(&mut sink, &cone, &frame, &frame.right, &spheres, &[hit()], &options);

        assert_eq!(sink.shapes.len(), 10);
        assert!(sink.shapes.iter().all(|(_, persistent)| *persistent));
        assert!(matches!(sink.shapes[0].0, DebugShape::Point { .. }));
        assert_eq!(sink.shapes[0].0.color(), options.hit_point_color);
        assert_eq!(sink.shapes[1].0.color(), options.trace_hit_color);
        assert_eq!(sink.shapes[9].0.color(), options.segment_color);
    }
}
