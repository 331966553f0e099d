//! VERTEX codec for POLYLINE runs

use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, PointReader};
use crate::types::Coordinate;
use bitflags::bitflags;

bitflags! {
    /// Vertex flags (code 70 of a VERTEX)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VertexFlags: i32 {
        const EXTRA_VERTEX = 1;
        const CURVE_FIT_TANGENT = 2;
        const SPLINE_VERTEX = 8;
        const SPLINE_CONTROL = 16;
        /// Vertex of a 3D polyline
        const POLYLINE_3D = 32;
        const POLYGON_MESH = 64;
        const POLYFACE_FACE = 128;
    }
}

/// Read one VERTEX run, appending its coordinate to `vertices`.
///
/// A vertex missing X or Y adds nothing.
pub fn read(reader: &mut dyn DxfStreamReader, vertices: &mut Vec<Coordinate>) -> Result<DxfGroup> {
    let mut location = PointReader::new(10);
    loop {
        let group = reader.read_group("VERTEX entity")?;
        if group.is_entity_marker() {
            match location.coordinate() {
                Some(c) => vertices.push(c),
                None => log::debug!("VERTEX without X or Y skipped"),
            }
            return Ok(group);
        }
        location.accept(&group)?;
    }
}

/// Write one VERTEX run
pub fn write<W: DxfStreamWriter>(
    writer: &mut W,
    location: &Coordinate,
    layer: &str,
    precision: usize,
) -> Result<()> {
    writer.write_entity_type("VERTEX")?;
    writer.write_string(8, layer)?;
    writer.write_coordinate(10, location, precision)?;
    writer.write_int(70, VertexFlags::POLYLINE_3D.bits())
}
