//! Geodesic measurement and display formatting

use std::fmt;

use geo::{Distance, Geodesic, GeodesicArea, Length, LineString, Point, Polygon};

use crate::Geometry;

/// Lengths above this many meters are displayed in kilometers
pub const LENGTH_KM_THRESHOLD_M: f64 = 100.0;

/// Areas above this many square meters are displayed in square kilometers
pub const AREA_KM_THRESHOLD_M2: f64 = 10_000.0;

/// A geodesic measurement of a line or polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Length in meters
    Length(f64),
    /// Area in square meters
    Area(f64),
}

impl Measurement {
    /// Measure a completed geometry. Points and circles are not measured.
    pub fn of(geometry: &Geometry) -> Option<Self> {
        match geometry {
            Geometry::Line(line) => Some(Measurement::Length(line_length_m(line))),
            Geometry::Polygon(polygon) => Some(Measurement::Area(polygon_area_m2(polygon))),
            Geometry::Point(_) | Geometry::Circle { .. } => None,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Length(meters) => f.write_str(&format_length(*meters)),
            Measurement::Area(square_meters) => f.write_str(&format_area(*square_meters)),
        }
    }
}

/// Geodesic length of a line in meters
pub fn line_length_m(line: &LineString) -> f64 {
    Geodesic.length(line)
}

/// Geodesic area of a polygon in square meters
pub fn polygon_area_m2(polygon: &Polygon) -> f64 {
    polygon.geodesic_area_unsigned()
}

/// Geodesic distance between two positions in meters
pub fn distance_m(a: Point, b: Point) -> f64 {
    Geodesic.distance(a, b)
}

/// Format a length: meters up to 100 m, kilometers above, two decimals
pub fn format_length(meters: f64) -> String {
    if meters > LENGTH_KM_THRESHOLD_M {
        format!("{:.2} km", meters / 1_000.0)
    } else {
        format!("{:.2} m", meters)
    }
}

/// Format an area: square meters up to 10 000 m², square kilometers above,
/// two decimals
pub fn format_area(square_meters: f64) -> String {
    if square_meters > AREA_KM_THRESHOLD_M2 {
        format!("{:.2} km²", square_meters / 1_000_000.0)
    } else {
        format!("{:.2} m²", square_meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::point;

    #[test]
    fn test_format_length_meters() {
        assert_eq!(format_length(85.0), "85.00 m");
        assert_eq!(format_length(0.0), "0.00 m");
        assert_eq!(format_length(99.994), "99.99 m");
    }

    #[test]
    fn test_format_length_kilometers() {
        assert_eq!(format_length(1500.0), "1.50 km");
        assert_eq!(format_length(100.01), "0.10 km");
    }

    #[test]
    fn test_format_length_threshold_is_exclusive() {
        // Exactly 100 m stays in meters
        assert_eq!(format_length(100.0), "100.00 m");
    }

    #[test]
    fn test_format_area_square_meters() {
        assert_eq!(format_area(5_000.0), "5000.00 m²");
        assert_eq!(format_area(10_000.0), "10000.00 m²");
    }

    #[test]
    fn test_format_area_square_kilometers() {
        assert_eq!(format_area(20_000.0), "0.02 km²");
        assert_eq!(format_area(3_500_000.0), "3.50 km²");
    }

    #[test]
    fn test_line_length_paris_to_london() {
        let line = LineString::from(vec![(2.3522, 48.8566), (-0.1278, 51.5074)]);
        let length = line_length_m(&line);
        // Roughly 344 km
        assert_relative_eq!(length, 344_000.0, max_relative = 0.01);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        let p = point! { x: 10.0, y: 50.0 };
        assert_relative_eq!(distance_m(p, p), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_polygon_area_unit_square_near_equator() {
        // ~111 km per degree at the equator, so a 0.01° square is ~1.11 km
        // on a side and ~1.23e6 m² in area
        let ring = LineString::from(vec![
            (0.0, 0.0),
            (0.01, 0.0),
            (0.01, 0.01),
            (0.0, 0.01),
            (0.0, 0.0),
        ]);
        let area = polygon_area_m2(&Polygon::new(ring, vec![]));
        assert_relative_eq!(area, 1.23e6, max_relative = 0.02);
    }

    #[test]
    fn test_measurement_of_geometry() {
        let point = Geometry::Point(point! { x: 0.0, y: 0.0 });
        assert_eq!(Measurement::of(&point), None);

        let line = Geometry::Line(LineString::from(vec![(0.0, 0.0), (0.001, 0.0)]));
        match Measurement::of(&line) {
            Some(Measurement::Length(m)) => assert!(m > 0.0),
            other => panic!("expected a length, got {:?}", other),
        }

        let ring = LineString::from(vec![(0.0, 0.0), (0.01, 0.0), (0.01, 0.01), (0.0, 0.01)]);
        let polygon = Geometry::Polygon(Polygon::new(ring, vec![]));
        match Measurement::of(&polygon) {
            Some(Measurement::Area(a)) => assert!(a > 0.0),
            other => panic!("expected an area, got {:?}", other),
        }
    }
}
