//! Draw mode types

/// Geometry type produced by the active draw interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Draw a single position
    Point,
    /// Draw an open polyline
    Line,
    /// Draw a closed ring
    Polygon,
    /// Draw a circle from center and radius
    Circle,
    /// No draw interaction armed
    #[default]
    None,
}

impl DrawMode {
    /// All selectable modes, in dropdown order
    pub const ALL: [DrawMode; 5] = [
        DrawMode::Point,
        DrawMode::Line,
        DrawMode::Polygon,
        DrawMode::Circle,
        DrawMode::None,
    ];

    /// Get the display name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            DrawMode::Point => "Point",
            DrawMode::Line => "LineString",
            DrawMode::Polygon => "Polygon",
            DrawMode::Circle => "Circle",
            DrawMode::None => "None",
        }
    }

    /// Check if this mode arms a draw interaction
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawMode::None)
    }

    /// Check if a gesture in this mode completes on the first click
    pub fn finishes_on_first_click(&self) -> bool {
        matches!(self, DrawMode::Point)
    }

    /// Minimum number of placed vertices for a finishable sketch
    pub fn min_vertices(&self) -> usize {
        match self {
            DrawMode::Point => 1,
            DrawMode::Line => 2,
            DrawMode::Polygon => 3,
            DrawMode::Circle => 2,
            DrawMode::None => 0,
        }
    }
}
