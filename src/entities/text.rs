//! TEXT entity codec
//!
//! A text is a point feature whose TEXT attribute is set. Only the insertion
//! point, the string, height, rotation and style survive the trip; alignment
//! and oblique settings are dropped.

use super::{pending_feature, read_common, write_common};
use crate::error::Result;
use crate::feature::{Feature, DEFAULT_TEXT_STYLE};
use crate::geometry::make_point;
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, PointReader};
use crate::types::Coordinate;

/// Read a TEXT run. A text without X or Y is dropped.
pub fn read(reader: &mut dyn DxfStreamReader) -> Result<(Option<Feature>, DxfGroup)> {
    let mut feature = Feature {
        text: Some(String::new()),
        text_height: Some(0.0),
        text_rotation: Some(0.0),
        text_style: Some(DEFAULT_TEXT_STYLE.to_string()),
        ..pending_feature()
    };
    let mut location = PointReader::new(10);

    loop {
        let group = reader.read_group("TEXT entity")?;
        if group.is_entity_marker() {
            let feature = location.coordinate().map(|c| Feature {
                geometry: make_point(c),
                ..feature
            });
            return Ok((feature, group));
        }
        if read_common(&mut feature, &group, false)? || location.accept(&group)? {
            continue;
        }
        match group.code {
            1 => feature.text = Some(group.value),
            40 => feature.text_height = Some(group.as_double()?),
            50 => feature.text_rotation = Some(group.as_double()?),
            7 => feature.text_style = Some(group.value),
            _ => {}
        }
    }
}

/// Write a TEXT run
pub fn write<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    location: &Coordinate,
    layer: &str,
    precision: usize,
) -> Result<()> {
    write_common(writer, "TEXT", feature, layer, false)?;
    writer.write_coordinate(10, location, precision)?;
    writer.write_string(1, feature.text.as_deref().unwrap_or_default())?;
    if let Some(height) = feature.text_height {
        writer.write_double(40, height)?;
    }
    if let Some(rotation) = feature.text_rotation {
        writer.write_double(50, rotation)?;
    }
    if let Some(style) = feature.text_style.as_deref() {
        writer.write_string(7, style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::geometry::Geometry;

    #[test]
    fn test_read_text() {
        let mut r = reader_for(&[
            (8, "LABELS"),
            (10, "5.0"),
            (20, "6.0"),
            (40, "2.5"),
            (1, "Room 101"),
            (50, "90"),
            (7, "ROMANS"),
            (72, "1"),
            (0, "ENDSEC"),
        ]);
        let (feature, next) = read(&mut r).unwrap();
        let feature = feature.unwrap();

        assert_eq!(feature.geometry, Geometry::Point(Coordinate::new(5.0, 6.0)));
        assert_eq!(feature.text.as_deref(), Some("Room 101"));
        assert_eq!(feature.text_height, Some(2.5));
        assert_eq!(feature.text_rotation, Some(90.0));
        assert_eq!(feature.text_style.as_deref(), Some("ROMANS"));
        assert!(next.is_marker("ENDSEC"));
    }

    #[test]
    fn test_text_defaults() {
        let mut r = reader_for(&[(10, "0"), (20, "0"), (0, "EOF")]);
        let feature = read(&mut r).unwrap().0.unwrap();
        assert_eq!(feature.text.as_deref(), Some(""));
        assert_eq!(feature.text_height, Some(0.0));
        assert_eq!(feature.text_rotation, Some(0.0));
        assert_eq!(feature.text_style.as_deref(), Some(DEFAULT_TEXT_STYLE));
        assert_eq!(feature.elevation, None);
    }

    #[test]
    fn test_write_text() {
        let mut feature = Feature::new(Geometry::Point(Coordinate::new(1.0, 2.0))).with_text("A");
        feature.text_height = Some(2.5);
        let out = written(|w| write(w, &feature, &Coordinate::new(1.0, 2.0), "T", 1));
        assert_eq!(
            out,
            "  0\nTEXT\n  8\nT\n 10\n1.0\n 20\n2.0\n  1\nA\n 40\n2.5\n"
        );
    }
}
