//! LINE entity codec

use super::{pending_feature, read_common, write_common};
use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::{finalize_vertices, VertexInterpretation};
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, PointReader};
use crate::types::Coordinate;

/// Read a LINE run into a two-point line string, or a point when both ends
/// coincide. A line missing an X or Y of either end is dropped.
pub fn read(reader: &mut dyn DxfStreamReader) -> Result<(Option<Feature>, DxfGroup)> {
    let mut feature = pending_feature();
    let mut start = PointReader::new(10);
    let mut end = PointReader::new(11);

    loop {
        let group = reader.read_group("LINE entity")?;
        if group.is_entity_marker() {
            let feature = match (start.coordinate(), end.coordinate()) {
                (Some(a), Some(b)) => finalize_vertices(vec![a, b], VertexInterpretation::Line)
                    .map(|geometry| Feature { geometry, ..feature }),
                _ => None,
            };
            return Ok((feature, group));
        }
        if !read_common(&mut feature, &group, true)? && !start.accept(&group)? {
            end.accept(&group)?;
        }
    }
}

/// Write a LINE run
pub fn write<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    start: &Coordinate,
    end: &Coordinate,
    layer: &str,
    precision: usize,
) -> Result<()> {
    write_common(writer, "LINE", feature, layer, true)?;
    writer.write_coordinate(10, start, precision)?;
    writer.write_coordinate(11, end, precision)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::geometry::Geometry;

    #[test]
    fn test_read_line() {
        let mut r = reader_for(&[
            (8, "WALL"),
            (10, "0"),
            (20, "0"),
            (11, "10"),
            (21, "0"),
            (0, "ENDSEC"),
        ]);
        let (feature, next) = read(&mut r).unwrap();
        let feature = feature.unwrap();

        assert_eq!(
            feature.geometry,
            Geometry::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)])
        );
        assert_eq!(feature.layer.as_deref(), Some("WALL"));
        assert_eq!(feature.color, Some(256));
        assert!(next.is_marker("ENDSEC"));
    }

    #[test]
    fn test_elevation_and_z() {
        let mut r = reader_for(&[
            (38, "4.0"),
            (10, "0"),
            (20, "0"),
            (30, "1"),
            (11, "1"),
            (21, "1"),
            (31, "2"),
            (0, "EOF"),
        ]);
        let feature = read(&mut r).unwrap().0.unwrap();
        assert_eq!(feature.elevation, Some(4.0));
        assert_eq!(
            feature.geometry.coordinates(),
            vec![Coordinate::new_3d(0.0, 0.0, 1.0), Coordinate::new_3d(1.0, 1.0, 2.0)]
        );
    }

    #[test]
    fn test_zero_length_line_is_a_point() {
        let mut r = reader_for(&[(10, "1"), (20, "1"), (11, "1"), (21, "1"), (0, "EOF")]);
        let feature = read(&mut r).unwrap().0.unwrap();
        assert_eq!(feature.geometry, Geometry::Point(Coordinate::new(1.0, 1.0)));
    }

    #[test]
    fn test_line_without_end_is_dropped() {
        let mut r = reader_for(&[(10, "0"), (20, "0"), (11, "5"), (0, "EOF")]);
        let (feature, next) = read(&mut r).unwrap();
        assert!(feature.is_none());
        assert!(next.is_marker("EOF"));
    }

    #[test]
    fn test_write_line() {
        let feature = Feature::new(Geometry::LineString(vec![]));
        let out = written(|w| {
            write(
                w,
                &feature,
                &Coordinate::new(0.0, 0.0),
                &Coordinate::new(10.0, 0.0),
                "WALL",
                4,
            )
        });
        assert_eq!(
            out,
            "  0\nLINE\n  8\nWALL\n 10\n0.0000\n 20\n0.0000\n 11\n10.0000\n 21\n0.0000\n"
        );
    }
}
