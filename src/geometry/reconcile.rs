//! Degenerate-geometry and hole-layer policy.
//!
//! Every codec that turns a vertex list into a geometry (POLYLINE,
//! LWPOLYLINE, and the polygon encoder) goes through [`finalize_vertices`],
//! and every codec that places a polygon hole on a layer goes through
//! [`hole_layer_name`].

use super::{make_line_string, make_point, Geometry, Polygon};
use crate::types::Coordinate;
use std::borrow::Cow;

/// Suffix appended to the exterior layer name for interior-ring entities
pub const HOLE_LAYER_SUFFIX: &str = "_";

/// How a vertex list should be read, selected by bit 0 of the polyline flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexInterpretation {
    /// Open line string
    Line,
    /// Closed ring of a polygon
    Polygon,
}

impl VertexInterpretation {
    /// Interpretation selected by a polyline flag word
    pub fn from_closed(closed: bool) -> Self {
        if closed {
            VertexInterpretation::Polygon
        } else {
            VertexInterpretation::Line
        }
    }
}

/// Turn a finished vertex list into a geometry.
///
/// - no vertex: `None`
/// - one vertex, or two equal vertices: `Point`
/// - polygon interpretation: the ring is closed first; a closed ring of two or
///   three vertices cannot bound an area and becomes a `LineString`
/// - otherwise the requested `LineString` or `Polygon`
pub fn finalize_vertices(
    mut coords: Vec<Coordinate>,
    interpretation: VertexInterpretation,
) -> Option<Geometry> {
    if interpretation == VertexInterpretation::Polygon {
        super::ring_close(&mut coords);
    }

    match coords.len() {
        0 => None,
        1 => Some(make_point(coords[0])),
        2 if coords[0].equals_2d(&coords[1]) => Some(make_point(coords[0])),
        n => match interpretation {
            VertexInterpretation::Line => Some(make_line_string(coords)),
            VertexInterpretation::Polygon if n <= 3 => Some(make_line_string(coords)),
            VertexInterpretation::Polygon => Some(Geometry::Polygon(Polygon {
                exterior: coords,
                interiors: Vec::new(),
            })),
        },
    }
}

/// Layer name used for the interior rings of a polygon on `layer`
pub fn hole_layer_name(layer: &str, suffix_enabled: bool) -> Cow<'_, str> {
    if suffix_enabled {
        Cow::Owned(format!("{}{}", layer, HOLE_LAYER_SUFFIX))
    } else {
        Cow::Borrowed(layer)
    }
}
