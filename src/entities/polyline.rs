//! POLYLINE entity codec and the polygon encoder
//!
//! A POLYLINE run is the POLYLINE header, any number of VERTEX runs and a
//! closing SEQEND. Bit 0 of the header flags selects a ring (polygon) or an
//! open line string.

use super::{pending_feature, point, read_common, vertex, write_common, write_line_string};
use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::{finalize_vertices, hole_layer_name, Geometry, Polygon, VertexInterpretation};
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, EncodeOptions};
use crate::io::dxf::{SEQEND, VERTEX};
use crate::types::Coordinate;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (code 70 of the POLYLINE header)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i32 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// Read a POLYLINE run up to and including its SEQEND.
///
/// A marker other than VERTEX or SEQEND also ends the run; it is returned
/// as the lookahead. A run without any usable vertex is dropped.
pub fn read(reader: &mut dyn DxfStreamReader) -> Result<(Option<Feature>, DxfGroup)> {
    let mut feature = pending_feature();
    let mut flags = PolylineFlags::empty();
    let mut vertices = Vec::new();

    let mut group = reader.read_group("POLYLINE entity")?;
    let next = loop {
        if group.is_marker(VERTEX) {
            group = vertex::read(reader, &mut vertices)?;
            continue;
        }
        if group.is_marker(SEQEND) {
            break reader.skip_to_marker("SEQEND")?;
        }
        if group.is_entity_marker() {
            log::debug!("POLYLINE ended by {} without SEQEND", group.value);
            break group;
        }
        if !read_common(&mut feature, &group, true)? && group.code == 70 {
            flags = PolylineFlags::from_bits_retain(group.as_int()?);
        }
        group = reader.read_group("POLYLINE entity")?;
    };

    let interpretation = VertexInterpretation::from_closed(flags.contains(PolylineFlags::CLOSED));
    let feature = finalize_vertices(vertices, interpretation).map(|geometry| Feature {
        geometry,
        ..feature
    });
    Ok((feature, next))
}

/// Write a POLYLINE run over `coords`
pub fn write<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    coords: &[Coordinate],
    layer: &str,
    closed: bool,
    precision: usize,
) -> Result<()> {
    write_common(writer, "POLYLINE", feature, layer, true)?;
    writer.write_int(66, 1)?;
    // the header point is a placeholder; the vertices carry the geometry
    writer.write_fixed(10, 0.0, 1)?;
    writer.write_fixed(20, 0.0, 1)?;
    if coords.first().is_some_and(|c| c.z.is_some()) {
        writer.write_fixed(30, 0.0, 1)?;
    }
    let mut flags = PolylineFlags::POLYLINE_3D;
    if closed {
        flags |= PolylineFlags::CLOSED;
    }
    writer.write_int(70, flags.bits())?;

    for c in coords {
        vertex::write(writer, c, layer, precision)?;
    }
    writer.write_entity_type(SEQEND)
}

/// Write a polygon: one closed POLYLINE for the exterior ring and one per
/// hole, the holes on the hole layer.
///
/// Each ring goes through the degenerate-geometry policy first; a ring that
/// reduces to a point or a line string is written as that geometry.
pub fn write_polygon<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    polygon: &Polygon,
    layer: &str,
    options: &EncodeOptions,
) -> Result<()> {
    write_ring(writer, feature, &polygon.exterior, layer, options.precision)?;

    let hole_layer = hole_layer_name(layer, options.hole_suffix);
    for hole in &polygon.interiors {
        write_ring(writer, feature, hole, &hole_layer, options.precision)?;
    }
    Ok(())
}

/// Write one ring as a closed POLYLINE, or as what it reduces to
fn write_ring<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    ring: &[Coordinate],
    layer: &str,
    precision: usize,
) -> Result<()> {
    match finalize_vertices(ring.to_vec(), VertexInterpretation::Polygon) {
        Some(Geometry::Polygon(closed)) => write(writer, feature, &closed.exterior, layer, true, precision),
        Some(Geometry::Point(c)) => point::write(writer, feature, &c, layer, precision),
        Some(Geometry::LineString(coords)) => write_line_string(writer, feature, &coords, layer, precision),
        _ => {
            log::warn!("empty ring on layer {} not written", layer);
            Ok(())
        }
    }
}
