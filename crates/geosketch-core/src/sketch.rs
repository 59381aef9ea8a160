//! Draw interaction and in-progress sketch state

use geo::{Centroid, LineString, Point, Polygon};

use crate::{DrawMode, Geometry, Measurement, measure};

/// The geometry currently being drawn, not yet finalized
#[derive(Debug, Clone)]
pub struct Sketch {
    mode: DrawMode,
    /// Vertices fixed by clicks
    vertices: Vec<Point>,
    /// Vertex tracking the cursor
    preview: Option<Point>,
}

impl Sketch {
    fn new(mode: DrawMode, first: Point) -> Self {
        Self {
            mode,
            vertices: vec![first],
            preview: None,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Vertices fixed so far
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Cursor-tracking vertex, if the pointer has moved since the last click
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    /// Fixed vertices plus the preview vertex
    pub fn working_points(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if let Some(preview) = self.preview {
            points.push(preview);
        }
        points
    }

    /// Preview radius in meters for a circle sketch
    pub fn radius_m(&self) -> Option<f64> {
        if self.mode != DrawMode::Circle {
            return None;
        }
        let center = *self.vertices.first()?;
        let rim = self.preview?;
        Some(measure::distance_m(center, rim))
    }

    /// Live geodesic measurement of the working geometry
    pub fn measurement(&self) -> Option<Measurement> {
        match self.mode {
            DrawMode::Line => {
                let points = self.working_points();
                if points.len() < 2 {
                    return None;
                }
                let line = LineString::from(points);
                Some(Measurement::Length(measure::line_length_m(&line)))
            }
            DrawMode::Polygon => {
                let points = self.working_points();
                if points.len() < 3 {
                    return None;
                }
                let ring = LineString::from(points);
                let polygon = Polygon::new(ring, vec![]);
                Some(Measurement::Area(measure::polygon_area_m2(&polygon)))
            }
            _ => None,
        }
    }

    /// Position where the tracking tooltip should sit: the working
    /// geometry's last vertex for lines, its centroid for polygons
    pub fn anchor(&self) -> Option<Point> {
        match self.mode {
            DrawMode::Polygon if self.working_points().len() >= 3 => {
                let ring = LineString::from(self.working_points());
                Polygon::new(ring, vec![]).centroid()
            }
            _ => {
                let points = self.working_points();
                points.last().copied()
            }
        }
    }

    /// Working points with consecutive duplicates removed.
    ///
    /// Double clicks deliver a plain click at the same position first, so
    /// the final vertex is usually doubled up.
    fn distinct_points(&self) -> Vec<Point> {
        let mut points = self.working_points();
        points.dedup();
        points
    }

    /// Build the finished geometry, if the sketch has enough distinct
    /// vertices for its mode
    fn finish(&self) -> Option<Geometry> {
        let points = self.distinct_points();
        if points.len() < self.mode.min_vertices() {
            return None;
        }

        match self.mode {
            DrawMode::Point => Some(Geometry::Point(points[0])),
            DrawMode::Line => Some(Geometry::Line(LineString::from(points))),
            DrawMode::Polygon => {
                let ring = LineString::from(points);
                Some(Geometry::Polygon(Polygon::new(ring, vec![])))
            }
            DrawMode::Circle => {
                let radius_m = measure::distance_m(points[0], points[1]);
                if radius_m <= 0.0 {
                    return None;
                }
                Some(Geometry::Circle {
                    center: points[0],
                    radius_m,
                })
            }
            DrawMode::None => None,
        }
    }
}

/// Events emitted by the draw interaction
#[derive(Debug, Clone)]
pub enum SketchEvent {
    /// A draw gesture started
    Started,
    /// The sketch geometry changed (vertex added or preview moved)
    Changed,
    /// The gesture completed with a finished geometry
    Finished(Geometry),
    /// The gesture was discarded without producing a geometry
    Cancelled,
}

/// Draw interaction state for one map panel.
///
/// Holds the selected mode and at most one in-progress sketch; switching
/// modes replaces the interaction, so two can never be active at once.
#[derive(Debug, Default)]
pub struct DrawState {
    mode: DrawMode,
    sketch: Option<Sketch>,
}

impl DrawState {
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn sketch(&self) -> Option<&Sketch> {
        self.sketch.as_ref()
    }

    pub fn is_sketching(&self) -> bool {
        self.sketch.is_some()
    }

    /// Switch draw mode, detaching the previous interaction.
    ///
    /// Any in-progress sketch is discarded; completed features are not
    /// touched. Returns the cancellation event if a sketch was discarded.
    pub fn set_mode(&mut self, mode: DrawMode) -> Option<SketchEvent> {
        if mode == self.mode {
            return None;
        }
        tracing::debug!(from = self.mode.name(), to = mode.name(), "draw mode changed");
        self.mode = mode;
        self.cancel()
    }

    /// Primary click at a map position
    pub fn click(&mut self, at: Point) -> Vec<SketchEvent> {
        if !self.mode.is_drawing() {
            return Vec::new();
        }

        match &mut self.sketch {
            None => {
                let sketch = Sketch::new(self.mode, at);
                if self.mode.finishes_on_first_click() {
                    // Point gestures complete immediately
                    let finished = sketch.finish();
                    match finished {
                        Some(geometry) => {
                            vec![SketchEvent::Started, SketchEvent::Finished(geometry)]
                        }
                        None => Vec::new(),
                    }
                } else {
                    self.sketch = Some(sketch);
                    vec![SketchEvent::Started, SketchEvent::Changed]
                }
            }
            Some(sketch) => match self.mode {
                DrawMode::Circle => {
                    // Second click fixes the radius
                    sketch.preview = Some(at);
                    self.finish_sketch()
                }
                _ => {
                    sketch.vertices.push(at);
                    vec![SketchEvent::Changed]
                }
            },
        }
    }

    /// Double click finishes line and polygon gestures
    pub fn double_click(&mut self, at: Point) -> Vec<SketchEvent> {
        let Some(sketch) = &mut self.sketch else {
            return Vec::new();
        };
        if !matches!(sketch.mode, DrawMode::Line | DrawMode::Polygon) {
            return Vec::new();
        }
        sketch.preview = Some(at);
        self.finish_sketch()
    }

    /// Pointer moved over the map while a sketch is active
    pub fn pointer_moved(&mut self, at: Point) -> Option<SketchEvent> {
        let sketch = self.sketch.as_mut()?;
        if sketch.preview == Some(at) {
            return None;
        }
        sketch.preview = Some(at);
        Some(SketchEvent::Changed)
    }

    /// Discard the in-progress sketch, if any
    pub fn cancel(&mut self) -> Option<SketchEvent> {
        if self.sketch.take().is_some() {
            tracing::debug!("sketch cancelled");
            Some(SketchEvent::Cancelled)
        } else {
            None
        }
    }

    /// Finalize the active sketch. A sketch that cannot finish yet
    /// (too few distinct vertices) is left active.
    fn finish_sketch(&mut self) -> Vec<SketchEvent> {
        let Some(sketch) = &self.sketch else {
            return Vec::new();
        };
        let finished = sketch.finish();
        let is_circle = sketch.mode == DrawMode::Circle;
        match finished {
            Some(geometry) => {
                self.sketch = None;
                vec![SketchEvent::Finished(geometry)]
            }
            // Zero-radius circles are discarded, not stored
            None if is_circle => {
                self.sketch = None;
                vec![SketchEvent::Cancelled]
            }
            None => Vec::new(),
        }
    }
}
