//! Entity codecs: DXF entity runs to features and back
//!
//! Every reader is entered right after its `0/KEYWORD` marker has been
//! consumed and returns the feature it built together with the first group
//! it did not interpret (always a code 0 marker). Readers never push groups
//! back into the stream.

use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::io::dxf::{DxfGroup, DxfStreamReader, DxfStreamWriter, DxfStreamWriterExt, EncodeOptions};
use crate::types::Coordinate;
use std::fmt;

pub mod line;
pub mod lwpolyline;
pub mod point;
pub mod polyline;
pub mod text;
pub mod vertex;

pub use polyline::PolylineFlags;
pub use vertex::VertexFlags;

/// Entity keywords that decode into features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Point,
    Text,
    Line,
    Polyline,
    LwPolyline,
}

impl EntityKind {
    /// Every supported kind
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Point,
        EntityKind::Text,
        EntityKind::Line,
        EntityKind::Polyline,
        EntityKind::LwPolyline,
    ];

    /// DXF keyword of the entity
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Point => "POINT",
            EntityKind::Text => "TEXT",
            EntityKind::Line => "LINE",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::LwPolyline => "LWPOLYLINE",
        }
    }

    /// Look a kind up by its keyword
    pub fn from_name(name: &str) -> Option<Self> {
        EntityKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode one entity run of the given kind
pub fn read_entity(
    kind: EntityKind,
    reader: &mut dyn DxfStreamReader,
) -> Result<(Option<Feature>, DxfGroup)> {
    match kind {
        EntityKind::Point => point::read(reader),
        EntityKind::Text => text::read(reader),
        EntityKind::Line => line::read(reader),
        EntityKind::Polyline => polyline::read(reader),
        EntityKind::LwPolyline => lwpolyline::read(reader),
    }
}

/// Feature carrying the entity defaults; the geometry is filled in once the
/// run has ended
pub(crate) fn pending_feature() -> Feature {
    Feature::with_entity_defaults(Geometry::Collection(Vec::new()))
}

/// Apply a group every entity understands.
///
/// Returns `false` when the group is not a common attribute. Code 38 is only
/// taken when `elevation` is set.
pub(crate) fn read_common(feature: &mut Feature, group: &DxfGroup, elevation: bool) -> Result<bool> {
    match group.code {
        8 => feature.layer = Some(group.value.clone()),
        6 => feature.ltype = Some(group.value.clone()),
        39 => feature.thickness = Some(group.as_double()?),
        62 => feature.color = Some(group.as_int()?),
        38 if elevation => feature.elevation = Some(group.as_double()?),
        999 => log::debug!("DXF comment: {}", group.value),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Write the marker, the layer and every non-default common attribute
pub(crate) fn write_common<W: DxfStreamWriter>(
    writer: &mut W,
    entity_type: &str,
    feature: &Feature,
    layer: &str,
    elevation: bool,
) -> Result<()> {
    writer.write_entity_type(entity_type)?;
    writer.write_string(8, layer)?;
    if let Some(ltype) = feature.explicit_ltype() {
        writer.write_string(6, ltype)?;
    }
    if elevation {
        if let Some(value) = feature.explicit_elevation() {
            writer.write_double(38, value)?;
        }
    }
    if let Some(value) = feature.explicit_thickness() {
        writer.write_double(39, value)?;
    }
    if let Some(color) = feature.explicit_color() {
        writer.write_int(62, color)?;
    }
    Ok(())
}

/// Encode one feature as one or more entity runs on `layer`
pub fn write_feature<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    layer: &str,
    options: &EncodeOptions,
) -> Result<()> {
    for component in feature.geometry.components() {
        match component {
            Geometry::Point(c) if feature.text.is_some() => {
                text::write(writer, feature, c, layer, options.precision)?
            }
            Geometry::Point(c) => point::write(writer, feature, c, layer, options.precision)?,
            Geometry::LineString(coords) => {
                write_line_string(writer, feature, coords, layer, options.precision)?
            }
            Geometry::Polygon(polygon) => {
                polyline::write_polygon(writer, feature, polygon, layer, options)?
            }
            Geometry::Collection(_) => {}
        }
    }
    Ok(())
}

/// Two coordinates become a LINE, more a POLYLINE
pub(crate) fn write_line_string<W: DxfStreamWriter>(
    writer: &mut W,
    feature: &Feature,
    coords: &[Coordinate],
    layer: &str,
    precision: usize,
) -> Result<()> {
    match coords {
        [] => {
            log::warn!("empty line string on layer {} not written", layer);
            Ok(())
        }
        [single] => point::write(writer, feature, single, layer, precision),
        [start, end] => line::write(writer, feature, start, end, layer, precision),
        _ => polyline::write(writer, feature, coords, layer, false, precision),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::io::dxf::{DxfStreamReader, DxfTextReader, DxfTextWriter};
    use std::io::{BufReader, Cursor};

    /// Reader over `code\nvalue\n` text built from pairs
    pub fn reader_for(groups: &[(i32, &str)]) -> DxfTextReader<Cursor<Vec<u8>>> {
        let mut text = String::new();
        for (code, value) in groups {
            text.push_str(&format!("{}\n{}\n", code, value));
        }
        DxfTextReader::new(BufReader::new(Cursor::new(text.into_bytes())))
    }

    /// Run a writer closure and return what it wrote
    pub fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut DxfTextWriter<&mut Vec<u8>>) -> crate::error::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut DxfTextWriter::new(&mut buf)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Drain a reader, for checking nothing was left behind
    pub fn remaining(reader: &mut dyn DxfStreamReader) -> usize {
        let mut count = 0;
        while reader.next_group().unwrap().is_some() {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::geometry::{make_polygon, Polygon};

    #[test]
    fn test_kind_names() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EntityKind::from_name("CIRCLE"), None);
    }

    #[test]
    fn test_read_common_codes() {
        let mut feature = pending_feature();
        assert!(read_common(&mut feature, &DxfGroup::new(8, "WALL"), false).unwrap());
        assert!(read_common(&mut feature, &DxfGroup::new(62, "3"), false).unwrap());
        assert!(!read_common(&mut feature, &DxfGroup::new(38, "2.5"), false).unwrap());
        assert!(read_common(&mut feature, &DxfGroup::new(38, "2.5"), true).unwrap());
        assert!(!read_common(&mut feature, &DxfGroup::new(10, "1"), true).unwrap());

        assert_eq!(feature.layer.as_deref(), Some("WALL"));
        assert_eq!(feature.color, Some(3));
        assert_eq!(feature.elevation, Some(2.5));
    }

    #[test]
    fn test_write_common_elides_defaults() {
        let feature = pending_feature();
        let out = written(|w| write_common(w, "POINT", &feature, "0", true));
        assert_eq!(out, "  0\nPOINT\n  8\n0\n");
    }

    #[test]
    fn test_write_common_non_defaults() {
        let mut feature = pending_feature().with_color(1);
        feature.thickness = Some(2.5);
        feature.elevation = Some(10.0);
        feature.ltype = Some("DASHED".into());

        let out = written(|w| write_common(w, "LINE", &feature, "A", true));
        assert_eq!(
            out,
            "  0\nLINE\n  8\nA\n  6\nDASHED\n 38\n10.0\n 39\n2.5\n 62\n1\n"
        );
    }

    #[test]
    fn test_collection_writes_each_component() {
        let geometry = Geometry::Collection(vec![
            Geometry::Point(Coordinate::new(0.0, 0.0)),
            Geometry::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]),
            make_polygon(
                vec![
                    Coordinate::new(0.0, 0.0),
                    Coordinate::new(1.0, 0.0),
                    Coordinate::new(1.0, 1.0),
                ],
                vec![],
            ),
        ]);
        let feature = Feature::new(geometry);
        let out = written(|w| write_feature(w, &feature, "0", &EncodeOptions::default()));

        assert_eq!(out.matches("\nPOINT\n").count(), 1);
        assert_eq!(out.matches("\nLINE\n").count(), 1);
        assert_eq!(out.matches("\nPOLYLINE\n").count(), 1);
    }

    #[test]
    fn test_point_with_text_becomes_text() {
        let feature = Feature::new(Geometry::Point(Coordinate::new(1.0, 2.0))).with_text("A-1");
        let out = written(|w| write_feature(w, &feature, "0", &EncodeOptions::default()));
        assert!(out.starts_with("  0\nTEXT\n"));
    }

    #[test]
    fn test_empty_geometries_write_nothing() {
        let feature = Feature::new(Geometry::LineString(vec![]));
        let out = written(|w| write_feature(w, &feature, "0", &EncodeOptions::default()));
        assert!(out.is_empty());

        let polygon = Feature::new(Geometry::Polygon(Polygon {
            exterior: vec![],
            interiors: vec![],
        }));
        let out = written(|w| write_feature(w, &polygon, "0", &EncodeOptions::default()));
        assert!(out.is_empty());
    }
}
