//! Drawn feature storage

use geo::{Centroid, LineString, Point, Polygon};
use uuid::Uuid;

/// A completed drawn geometry, in lon/lat degrees
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(LineString),
    Polygon(Polygon),
    /// Center plus geodesic radius in meters
    Circle { center: Point, radius_m: f64 },
}

impl Geometry {
    /// Position where a label for this geometry should sit.
    ///
    /// Lines anchor at their last vertex, polygons at their centroid.
    /// Returns None for an empty line.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Geometry::Point(p) => Some(*p),
            Geometry::Line(line) => line.points().last(),
            Geometry::Polygon(polygon) => polygon.centroid(),
            Geometry::Circle { center, .. } => Some(*center),
        }
    }
}

/// A drawn shape with identity and an optional measurement label
#[derive(Debug, Clone)]
pub struct Feature {
    pub id: Uuid,
    pub geometry: Geometry,
    pub label: Option<String>,
}

impl Feature {
    /// Create a new unlabeled feature
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            label: None,
        }
    }

    /// Attach a measurement label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Insertion-ordered collection of completed features.
///
/// Owned by a single map panel; unbounded, cleared only explicitly.
#[derive(Debug, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    /// Add a feature, returning its ID
    pub fn push(&mut self, feature: Feature) -> Uuid {
        let id = feature.id;
        self.features.push(feature);
        id
    }

    /// Iterate over features in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Get a feature by ID
    pub fn get(&self, id: Uuid) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Remove all features
    pub fn clear(&mut self) {
        self.features.clear();
    }
}
