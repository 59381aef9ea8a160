//! Draw interaction plugin for the map widget
//!
//! Runs once per frame inside the map widget: feeds pointer input to the
//! draw state machine, renders completed features and the in-progress
//! sketch, and drives the measurement tooltips.

use egui::epaint::{CircleShape, PathShape, PathStroke};
use egui::{Color32, Pos2, Response, Shape, Stroke, Ui};
use geo::Point;
use geosketch_core::{
    DrawMode, DrawState, FeatureStore, Geometry, MeasureTooltips, Measurement, Sketch, SketchEvent,
};
use walkers::{Plugin, Projector};

use super::tooltip;

const FEATURE_COLOR: Color32 = Color32::from_rgb(51, 153, 204);
const FILL_GAMMA: f32 = 0.25;
const SKETCH_COLOR: Color32 = Color32::from_rgb(255, 204, 51);
const STROKE_WIDTH: f32 = 2.0;
const POINT_RADIUS: f32 = 5.0;
const VERTEX_RADIUS: f32 = 3.0;
const DASH_LENGTH: f32 = 8.0;
const GAP_LENGTH: f32 = 5.0;

/// Per-frame plugin wiring one panel's draw interaction into the map
pub struct DrawPlugin<'a> {
    pub draw: &'a mut DrawState,
    pub features: &'a FeatureStore,
    pub tooltips: Option<&'a mut MeasureTooltips>,
    /// Geometries finished this frame, handed back to the panel
    pub finished: &'a mut Vec<Geometry>,
}

impl Plugin for DrawPlugin<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
    ) {
        let DrawPlugin {
            draw,
            features,
            mut tooltips,
            finished,
        } = *self;

        let mut events = Vec::new();

        if let Some(pos) = response.hover_pos()
            && let Some(event) = draw.pointer_moved(unproject(projector, pos))
        {
            events.push(event);
        }

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.extend(draw.double_click(unproject(projector, pos)));
            }
        } else if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.extend(draw.click(unproject(projector, pos)));
            }
        }

        if response.clicked_by(egui::PointerButton::Secondary)
            || ui.input(|i| i.key_pressed(egui::Key::Escape))
        {
            events.extend(draw.cancel());
        }

        for event in &events {
            if let Some(tooltips) = tooltips.as_deref_mut() {
                // Freeze the tooltip at the completed geometry's anchor
                // before the lifecycle retires it
                if let SketchEvent::Finished(geometry) = event
                    && let (Some(anchor), Some(measurement)) =
                        (geometry.anchor(), Measurement::of(geometry))
                {
                    tooltips.on_sketch_change(anchor, measurement.to_string());
                }
                tooltips.on_event(event);
            }
            if let SketchEvent::Finished(geometry) = event {
                finished.push(geometry.clone());
            }
        }

        // The tracking tooltip follows the live sketch
        if let Some(tooltips) = tooltips.as_deref_mut()
            && let Some(sketch) = draw.sketch()
            && let (Some(anchor), Some(measurement)) = (sketch.anchor(), sketch.measurement())
        {
            tooltips.on_sketch_change(anchor, measurement.to_string());
        }

        let mut shapes = Vec::new();
        for feature in features.iter() {
            draw_geometry(&mut shapes, projector, &feature.geometry);
        }
        if let Some(sketch) = draw.sketch() {
            draw_sketch(&mut shapes, projector, sketch);
        }
        ui.painter().extend(shapes);

        if let Some(tooltips) = tooltips.as_deref() {
            tooltip::draw_measure_tooltips(ui, projector, tooltips);
        }
        tooltip::draw_help_tooltip(ui, response, draw.mode(), draw.is_sketching());
    }
}

fn unproject(projector: &Projector, pos: Pos2) -> Point {
    projector.unproject(pos.to_vec2())
}

fn project(projector: &Projector, position: Point) -> Pos2 {
    projector.project(position).to_pos2()
}

fn draw_geometry(shapes: &mut Vec<Shape>, projector: &Projector, geometry: &Geometry) {
    match geometry {
        Geometry::Point(p) => {
            shapes.push(point_shape(project(projector, *p), FEATURE_COLOR));
        }
        Geometry::Line(line) => {
            let points = line.points().map(|p| project(projector, p)).collect();
            shapes.push(path_shape(points, false));
        }
        Geometry::Polygon(polygon) => {
            let mut points: Vec<Pos2> = polygon
                .exterior()
                .points()
                .map(|p| project(projector, p))
                .collect();
            // The ring repeats its first vertex; a closed path must not
            points.pop();
            // todo: concave rings need proper tessellation, fill assumes convex
            shapes.push(path_shape(points, true));
        }
        Geometry::Circle { center, radius_m } => {
            let center_px = project(projector, *center);
            let radius_px = *radius_m as f32 * projector.scale_pixel_per_meter(*center);
            shapes.push(
                CircleShape {
                    center: center_px,
                    radius: radius_px,
                    fill: FEATURE_COLOR.gamma_multiply(FILL_GAMMA),
                    stroke: Stroke::new(STROKE_WIDTH, FEATURE_COLOR),
                }
                .into(),
            );
        }
    }
}

fn draw_sketch(shapes: &mut Vec<Shape>, projector: &Projector, sketch: &Sketch) {
    match sketch.mode() {
        DrawMode::Line | DrawMode::Polygon => {
            let mut points: Vec<Pos2> = sketch
                .working_points()
                .iter()
                .map(|p| project(projector, *p))
                .collect();
            if sketch.mode() == DrawMode::Polygon && points.len() >= 3 {
                // Preview the closing segment
                points.push(points[0]);
            }
            if points.len() >= 2 {
                shapes.extend(Shape::dashed_line(
                    &points,
                    Stroke::new(STROKE_WIDTH, SKETCH_COLOR),
                    DASH_LENGTH,
                    GAP_LENGTH,
                ));
            }
            for vertex in sketch.vertices() {
                shapes.push(vertex_shape(project(projector, *vertex)));
            }
        }
        DrawMode::Circle => {
            let Some(center) = sketch.vertices().first() else {
                return;
            };
            let center_px = project(projector, *center);
            shapes.push(vertex_shape(center_px));
            if let Some(radius_m) = sketch.radius_m() {
                let radius_px = radius_m as f32 * projector.scale_pixel_per_meter(*center);
                shapes.push(
                    CircleShape {
                        center: center_px,
                        radius: radius_px,
                        fill: Color32::TRANSPARENT,
                        stroke: Stroke::new(STROKE_WIDTH, SKETCH_COLOR),
                    }
                    .into(),
                );
            }
        }
        DrawMode::Point | DrawMode::None => {}
    }
}

fn point_shape(center: Pos2, color: Color32) -> Shape {
    CircleShape {
        center,
        radius: POINT_RADIUS,
        fill: color,
        stroke: Stroke::new(1.0, Color32::WHITE),
    }
    .into()
}

fn vertex_shape(center: Pos2) -> Shape {
    CircleShape {
        center,
        radius: VERTEX_RADIUS,
        fill: SKETCH_COLOR,
        stroke: Stroke::NONE,
    }
    .into()
}

fn path_shape(points: Vec<Pos2>, closed: bool) -> Shape {
    PathShape {
        points,
        closed,
        fill: if closed {
            Color32::WHITE.gamma_multiply(FILL_GAMMA)
        } else {
            Color32::TRANSPARENT
        },
        stroke: PathStroke::new(STROKE_WIDTH, FEATURE_COLOR),
    }
    .into()
}
