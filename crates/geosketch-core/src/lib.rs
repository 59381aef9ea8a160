//! Geometry model, sketch state machine, and geodesic measurement.
//!
//! This crate holds everything a map panel needs that is not UI:
//! - Drawn feature storage (points, lines, polygons, circles)
//! - The draw-mode / in-progress-sketch state machine
//! - Geodesic length/area measurement and its display formatting
//! - The measurement tooltip lifecycle

mod feature;
mod measure;
mod mode;
mod sketch;
mod tooltip;

pub use feature::{Feature, FeatureStore, Geometry};
pub use measure::{
    AREA_KM_THRESHOLD_M2, LENGTH_KM_THRESHOLD_M, Measurement, distance_m, format_area,
    format_length, line_length_m, polygon_area_m2,
};
pub use mode::DrawMode;
pub use sketch::{DrawState, Sketch, SketchEvent};
pub use tooltip::{MeasureTooltips, Tooltip, TooltipStyle, help_text};
