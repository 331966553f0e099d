//! Geometry values carried by feature records
//!
//! Only the construction primitives the codec needs live here: building
//! points, line strings and polygons, closing rings and computing the planar
//! envelope written into the HEADER extents.

pub mod reconcile;

pub use reconcile::{finalize_vertices, hole_layer_name, VertexInterpretation, HOLE_LAYER_SUFFIX};

use crate::types::{Coordinate, Envelope};

/// A polygon: one exterior ring plus zero or more interior rings (holes).
///
/// Rings are stored closed (first coordinate repeated at the end).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Exterior ring
    pub exterior: Vec<Coordinate>,
    /// Interior rings
    pub interiors: Vec<Vec<Coordinate>>,
}

impl Polygon {
    /// Check whether the polygon has interior rings
    pub fn has_holes(&self) -> bool {
        !self.interiors.is_empty()
    }
}

/// A geometry value.
///
/// Decoded features only ever hold `Point`, `LineString` or `Polygon`.
/// `Collection` exists so hosts can hand multi-geometries to the encoder,
/// which writes one entity run per component.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Polygon),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Geometry type name
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::Collection(_) => "GeometryCollection",
        }
    }

    /// Check whether this geometry holds no coordinate at all
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(coords) => coords.is_empty(),
            Geometry::Polygon(p) => p.exterior.is_empty(),
            Geometry::Collection(parts) => parts.iter().all(Geometry::is_empty),
        }
    }

    /// All coordinates, rings and components flattened in order
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut out = Vec::new();
        self.collect_coordinates(&mut out);
        out
    }

    fn collect_coordinates(&self, out: &mut Vec<Coordinate>) {
        match self {
            Geometry::Point(c) => out.push(*c),
            Geometry::LineString(coords) => out.extend_from_slice(coords),
            Geometry::Polygon(p) => {
                out.extend_from_slice(&p.exterior);
                for ring in &p.interiors {
                    out.extend_from_slice(ring);
                }
            }
            Geometry::Collection(parts) => {
                for part in parts {
                    part.collect_coordinates(out);
                }
            }
        }
    }

    /// Planar envelope, `None` for an empty geometry
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coordinates(&self.coordinates())
    }

    /// Simple components of this geometry; nested collections are flattened
    pub fn components(&self) -> Vec<&Geometry> {
        match self {
            Geometry::Collection(parts) => parts.iter().flat_map(Geometry::components).collect(),
            _ => vec![self],
        }
    }

    /// Check whether this geometry (or any component) is a polygon with holes
    pub fn has_holes(&self) -> bool {
        match self {
            Geometry::Polygon(p) => p.has_holes(),
            Geometry::Collection(parts) => parts.iter().any(Geometry::has_holes),
            _ => false,
        }
    }
}

/// Build a point geometry
pub fn make_point(coord: Coordinate) -> Geometry {
    Geometry::Point(coord)
}

/// Build a line string geometry
pub fn make_line_string(coords: Vec<Coordinate>) -> Geometry {
    Geometry::LineString(coords)
}

/// Build a polygon geometry; every ring is closed on the way in
pub fn make_polygon(mut exterior: Vec<Coordinate>, interiors: Vec<Vec<Coordinate>>) -> Geometry {
    ring_close(&mut exterior);
    let interiors = interiors
        .into_iter()
        .map(|mut ring| {
            ring_close(&mut ring);
            ring
        })
        .collect();
    Geometry::Polygon(Polygon { exterior, interiors })
}

/// Append the first coordinate when the last one differs from it (XY only)
pub fn ring_close(coords: &mut Vec<Coordinate>) {
    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if !first.equals_2d(last) {
            let first = *first;
            coords.push(first);
        }
    }
}
