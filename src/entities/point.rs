//! POINT entity codec

use super::{pending_feature, read_common, write_common};
use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::make_point;
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, PointReader};
use crate::types::Coordinate;

/// Read a POINT run. A point without X or Y is dropped.
pub fn read(reader: &mut dyn DxfStreamReader) -> Result<(Option<Feature>, DxfGroup)> {
    let mut feature = pending_feature();
    let mut location = PointReader::new(10);

    loop {
        let group = reader.read_group("POINT entity")?;
        if group.is_entity_marker() {
            let feature = location.coordinate().map(|c| Feature {
                geometry: make_point(c),
                ..feature
            });
            return Ok((feature, group));
        }
        if !read_common(&mut feature, &group, false)? {
            location.accept(&group)?;
        }
    }
}

/// Write a POINT run
pub fn write<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    location: &Coordinate,
    layer: &str,
    precision: usize,
) -> Result<()> {
    write_common(writer, "POINT", feature, layer, false)?;
    writer.write_coordinate(10, location, precision)
}
