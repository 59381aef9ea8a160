//! Measurement tooltip lifecycle
//!
//! One tooltip tracks the in-progress sketch; on completion it freezes in
//! place with static styling and a fresh tracking tooltip is pre-created
//! for the next gesture.

use geo::Point;

use crate::{DrawMode, SketchEvent};

/// Visual style of a measurement tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipStyle {
    /// Follows the evolving sketch
    Tracking,
    /// Frozen on a completed gesture
    Static,
}

/// A measurement label positioned at a geographic coordinate.
///
/// The position is None until the sketch it tracks produces a measurable
/// geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub position: Option<Point>,
    pub text: String,
    pub style: TooltipStyle,
}

impl Tooltip {
    fn tracking() -> Self {
        Self {
            position: None,
            text: String::new(),
            style: TooltipStyle::Tracking,
        }
    }
}

/// Measurement tooltip state for one map panel.
///
/// Driven by the draw interaction's events: a gesture start binds the
/// pre-created tracking tooltip to the sketch, sketch changes move and
/// relabel it, and the gesture end retires it as a static tooltip.
#[derive(Debug)]
pub struct MeasureTooltips {
    sketching: bool,
    /// Tooltip tracking the in-progress sketch (pre-created while idle)
    active: Tooltip,
    /// Frozen tooltips on completed gestures
    retired: Vec<Tooltip>,
}

impl Default for MeasureTooltips {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasureTooltips {
    pub fn new() -> Self {
        Self {
            sketching: false,
            active: Tooltip::tracking(),
            retired: Vec::new(),
        }
    }

    /// The tracking tooltip, shown only while it has a position
    pub fn active(&self) -> &Tooltip {
        &self.active
    }

    /// Frozen tooltips of completed gestures, oldest first
    pub fn retired(&self) -> &[Tooltip] {
        &self.retired
    }

    pub fn is_sketching(&self) -> bool {
        self.sketching
    }

    /// A draw gesture started
    pub fn on_draw_start(&mut self) {
        self.sketching = true;
    }

    /// The sketch moved or grew: update the tracking tooltip
    pub fn on_sketch_change(&mut self, position: Point, text: impl Into<String>) {
        if !self.sketching {
            return;
        }
        self.active.position = Some(position);
        self.active.text = text.into();
    }

    /// The gesture completed: freeze the tracking tooltip in place and
    /// pre-create a fresh one for the next gesture
    pub fn on_draw_end(&mut self) {
        self.sketching = false;
        let finished = std::mem::replace(&mut self.active, Tooltip::tracking());
        if finished.position.is_some() {
            self.retired.push(Tooltip {
                style: TooltipStyle::Static,
                ..finished
            });
        }
    }

    /// The gesture was cancelled: discard the tracking tooltip's content
    pub fn on_draw_cancel(&mut self) {
        self.sketching = false;
        self.active = Tooltip::tracking();
    }

    /// Apply a draw interaction event
    pub fn on_event(&mut self, event: &SketchEvent) {
        match event {
            SketchEvent::Started => self.on_draw_start(),
            SketchEvent::Changed => {}
            SketchEvent::Finished(_) => self.on_draw_end(),
            SketchEvent::Cancelled => self.on_draw_cancel(),
        }
    }

    /// Drop all frozen tooltips (when the feature store is cleared)
    pub fn clear_retired(&mut self) {
        self.retired.clear();
    }
}

/// Hint text for the cursor-following help tooltip
pub fn help_text(mode: DrawMode, sketching: bool) -> Option<&'static str> {
    if !mode.is_drawing() {
        return None;
    }
    if !sketching {
        return Some("Click to start drawing");
    }
    match mode {
        DrawMode::Line => Some("Double-click to finish the line"),
        DrawMode::Polygon => Some("Double-click to finish the polygon"),
        DrawMode::Circle => Some("Click to set the radius"),
        DrawMode::Point | DrawMode::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    #[test]
    fn test_idle_to_sketching_on_draw_start() {
        let mut tooltips = MeasureTooltips::new();
        assert!(!tooltips.is_sketching());
        tooltips.on_draw_start();
        assert!(tooltips.is_sketching());
    }

    #[test]
    fn test_change_before_start_is_ignored() {
        let mut tooltips = MeasureTooltips::new();
        tooltips.on_sketch_change(point! { x: 1.0, y: 1.0 }, "12.00 m");
        assert_eq!(tooltips.active().position, None);
    }

    #[test]
    fn test_completed_gesture_freezes_tooltip_and_spawns_one_tracker() {
        let mut tooltips = MeasureTooltips::new();
        tooltips.on_draw_start();
        tooltips.on_sketch_change(point! { x: 1.0, y: 2.0 }, "1.50 km");
        tooltips.on_draw_end();

        // Exactly one frozen tooltip, at the final anchor, static style
        assert_eq!(tooltips.retired().len(), 1);
        let frozen = &tooltips.retired()[0];
        assert_eq!(frozen.style, TooltipStyle::Static);
        assert_eq!(frozen.position, Some(point! { x: 1.0, y: 2.0 }));
        assert_eq!(frozen.text, "1.50 km");

        // Exactly one fresh tracking tooltip, unpositioned
        let active = tooltips.active();
        assert_eq!(active.style, TooltipStyle::Tracking);
        assert_eq!(active.position, None);
        assert!(active.text.is_empty());
        assert!(!tooltips.is_sketching());
    }

    #[test]
    fn test_unpositioned_tooltip_is_not_retired() {
        let mut tooltips = MeasureTooltips::new();
        tooltips.on_draw_start();
        tooltips.on_draw_end();
        assert!(tooltips.retired().is_empty());
    }

    #[test]
    fn test_cancel_retires_nothing() {
        let mut tooltips = MeasureTooltips::new();
        tooltips.on_draw_start();
        tooltips.on_sketch_change(point! { x: 1.0, y: 2.0 }, "85.00 m");
        tooltips.on_draw_cancel();

        assert!(tooltips.retired().is_empty());
        assert_eq!(tooltips.active().position, None);
        assert!(!tooltips.is_sketching());
    }

    #[test]
    fn test_consecutive_gestures_accumulate_static_tooltips() {
        let mut tooltips = MeasureTooltips::new();
        for i in 0..3 {
            tooltips.on_draw_start();
            tooltips.on_sketch_change(point! { x: i as f64, y: 0.0 }, format!("{i}.00 m"));
            tooltips.on_draw_end();
        }
        assert_eq!(tooltips.retired().len(), 3);
        assert_eq!(tooltips.retired()[0].text, "0.00 m");
        assert_eq!(tooltips.retired()[2].text, "2.00 m");
    }

    #[test]
    fn test_help_text_follows_sketch_state() {
        assert_eq!(help_text(DrawMode::None, false), None);
        assert_eq!(
            help_text(DrawMode::Line, false),
            Some("Click to start drawing")
        );
        assert_eq!(
            help_text(DrawMode::Polygon, true),
            Some("Double-click to finish the polygon")
        );
        assert_eq!(
            help_text(DrawMode::Circle, true),
            Some("Click to set the radius")
        );
    }
}
