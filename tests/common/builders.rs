//! Feature builders shared by the integration tests.

#![allow(dead_code)]

use dxf_features::geometry::make_polygon;
use dxf_features::{Coordinate, Feature, Geometry};

/// Closed axis-aligned square ring with its lower-left corner at (x, y)
pub fn square_ring(x: f64, y: f64, size: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(x, y),
        Coordinate::new(x + size, y),
        Coordinate::new(x + size, y + size),
        Coordinate::new(x, y + size),
        Coordinate::new(x, y),
    ]
}

pub fn point_feature(x: f64, y: f64) -> Feature {
    Feature::new(Geometry::Point(Coordinate::new(x, y)))
}

pub fn line_feature(coords: &[(f64, f64)]) -> Feature {
    Feature::new(Geometry::LineString(
        coords.iter().map(|&(x, y)| Coordinate::new(x, y)).collect(),
    ))
}

/// A 10x10 room with a 2x2 pillar hole
pub fn room_with_pillar() -> Feature {
    Feature::new(make_polygon(
        square_ring(0.0, 0.0, 10.0),
        vec![square_ring(4.0, 4.0, 2.0)],
    ))
}

/// One feature of every geometry kind, on distinct layers
pub fn mixed_features() -> Vec<Feature> {
    vec![
        point_feature(1.0, 2.0).with_layer("POINTS"),
        point_feature(3.0, 4.0).with_layer("LABELS").with_text("Hall"),
        line_feature(&[(0.0, 0.0), (10.0, 0.0)]).with_layer("WALL"),
        line_feature(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]).with_layer("PIPES"),
        Feature::new(make_polygon(square_ring(20.0, 20.0, 5.0), vec![])).with_layer("ROOM"),
    ]
}
