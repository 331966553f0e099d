//! Integration tests for DXF reading

mod common;

use common::*;
use dxf_features::io::dxf::DxfReaderConfiguration;
use dxf_features::{Coordinate, DxfError, DxfReader, Geometry, NotificationType, Polygon};
use std::io::{Cursor, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Test that DxfReader can be created from a non-existent file (should error)
#[test]
fn test_dxf_reader_from_nonexistent_file() {
    let result = DxfReader::from_file("nonexistent.dxf");
    assert!(matches!(result, Err(DxfError::Io(_))));
}

#[test]
fn test_read_line_on_layer() {
    let doc = read_str(&entities_dxf(&[
        (0, "LINE"),
        (8, "WALL"),
        (10, "0.0"),
        (20, "0.0"),
        (11, "5.0"),
        (21, "0.0"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    let feature = &doc.features()[0];
    assert_eq!(
        feature.geometry,
        Geometry::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(5.0, 0.0)])
    );
    assert_eq!(feature.layer.as_deref(), Some("WALL"));
    assert_eq!(feature.ltype.as_deref(), Some("BYLAYER"));
    assert_eq!(feature.color, Some(256));
    assert_eq!(feature.thickness, Some(0.0));
}

#[test]
fn test_read_closed_polyline_is_auto_closed() {
    let doc = read_str(&entities_dxf(&[
        (0, "POLYLINE"),
        (8, "PARCEL"),
        (66, "1"),
        (70, "1"),
        (0, "VERTEX"),
        (10, "0"),
        (20, "0"),
        (0, "VERTEX"),
        (10, "1"),
        (20, "0"),
        (0, "VERTEX"),
        (10, "1"),
        (20, "1"),
        (0, "SEQEND"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    assert_eq!(
        doc.features()[0].geometry,
        Geometry::Polygon(Polygon {
            exterior: vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 0.0),
            ],
            interiors: vec![],
        })
    );
}

#[test]
fn test_degenerate_vertex_lists() {
    // a closed ring of two distinct points is only a line
    let doc = read_str(&entities_dxf(&[
        (0, "LWPOLYLINE"),
        (70, "1"),
        (10, "0"),
        (20, "0"),
        (10, "3"),
        (20, "4"),
        (0, "POLYLINE"),
        (70, "0"),
        (0, "VERTEX"),
        (10, "2"),
        (20, "2"),
        (0, "VERTEX"),
        (10, "2"),
        (20, "2"),
        (0, "SEQEND"),
    ]));

    assert_eq!(doc.feature_count(), 2);
    assert!(matches!(&doc.features()[0].geometry, Geometry::LineString(c) if c.len() == 3));
    assert_eq!(doc.features()[1].geometry, Geometry::Point(Coordinate::new(2.0, 2.0)));
}

#[test]
fn test_comments_are_ignored_everywhere() {
    let doc = read_str(&dxf_text(&[
        (999, "leading comment"),
        (0, "SECTION"),
        (2, "ENTITIES"),
        (999, "between entities"),
        (0, "POINT"),
        (999, "inside an entity"),
        (10, "1"),
        (20, "2"),
        (0, "ENDSEC"),
        (0, "EOF"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    assert_eq!(doc.features()[0].geometry, Geometry::Point(Coordinate::new(1.0, 2.0)));
    assert!(doc.notifications.is_empty());
}

#[test]
fn test_unknown_entities_keep_order() {
    let doc = read_str(&entities_dxf(&[
        (0, "POINT"),
        (10, "1"),
        (20, "1"),
        (0, "CIRCLE"),
        (10, "0"),
        (20, "0"),
        (40, "3"),
        (0, "POINT"),
        (10, "2"),
        (20, "2"),
        (0, "HATCH"),
        (0, "POINT"),
        (10, "3"),
        (20, "3"),
    ]));

    let xs: Vec<f64> = doc
        .features()
        .iter()
        .map(|f| match &f.geometry {
            Geometry::Point(c) => c.x,
            other => panic!("unexpected geometry {other:?}"),
        })
        .collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(doc.notifications.of_type(NotificationType::NotSupported).len(), 2);
}

#[test]
fn test_incomplete_point_is_dropped() {
    let doc = read_str(&entities_dxf(&[
        (0, "POINT"),
        (8, "BROKEN"),
        (10, "1"),
        (0, "POINT"),
        (10, "5"),
        (20, "6"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    assert!(doc.notifications.has_type(NotificationType::IncompleteGeometry));
}

#[test]
fn test_nan_coordinate_is_dropped() {
    let doc = read_str(&entities_dxf(&[
        (0, "POINT"),
        (10, "NaN"),
        (20, "2"),
        (0, "POINT"),
        (10, "1"),
        (20, "inf"),
        (0, "POINT"),
        (10, "3"),
        (20, "4"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    assert_eq!(doc.features()[0].geometry, Geometry::Point(Coordinate::new(3.0, 4.0)));
    assert_eq!(doc.notifications.of_type(NotificationType::IncompleteGeometry).len(), 2);
}

#[test]
fn test_eof_inside_entities_ends_the_document() {
    let doc = read_str(&dxf_text(&[
        (0, "SECTION"),
        (2, "ENTITIES"),
        (0, "POINT"),
        (10, "1"),
        (20, "2"),
        (0, "EOF"),
        (0, "SECTION"),
        (2, "ENTITIES"),
        (0, "POINT"),
        (10, "5"),
        (20, "5"),
        (0, "ENDSEC"),
    ]));

    assert_eq!(doc.feature_count(), 1);
    assert_eq!(doc.features()[0].geometry, Geometry::Point(Coordinate::new(1.0, 2.0)));
}

#[test]
fn test_blocks_and_entities_are_concatenated() {
    let doc = read_str(&dxf_text(&[
        (0, "SECTION"),
        (2, "BLOCKS"),
        (0, "BLOCK"),
        (2, "DOOR"),
        (0, "POINT"),
        (10, "1"),
        (20, "1"),
        (0, "ENDBLK"),
        (0, "ENDSEC"),
        (0, "SECTION"),
        (2, "ENTITIES"),
        (0, "POINT"),
        (10, "2"),
        (20, "2"),
        (0, "ENDSEC"),
        (0, "EOF"),
    ]));

    assert_eq!(doc.feature_count(), 2);
    assert_eq!(doc.features()[0].geometry, Geometry::Point(Coordinate::new(1.0, 1.0)));
}

#[test]
fn test_text_attributes() {
    let doc = read_str(&entities_dxf(&[
        (0, "TEXT"),
        (8, "LABELS"),
        (62, "3"),
        (10, "10"),
        (20, "20"),
        (30, "1.5"),
        (40, "2.5"),
        (1, "Kitchen"),
        (50, "90"),
        (7, "ROMANS"),
    ]));

    let text = &doc.features()[0];
    assert_eq!(text.geometry, Geometry::Point(Coordinate::new_3d(10.0, 20.0, 1.5)));
    assert_eq!(text.text.as_deref(), Some("Kitchen"));
    assert_eq!(text.text_height, Some(2.5));
    assert_eq!(text.text_rotation, Some(90.0));
    assert_eq!(text.text_style.as_deref(), Some("ROMANS"));
    assert_eq!(text.color, Some(3));
}

#[test]
fn test_header_and_tables() {
    let doc = read_str(&dxf_text(&[
        (0, "SECTION"),
        (2, "HEADER"),
        (9, "$ACADVER"),
        (1, "AC1009"),
        (9, "$EXTMIN"),
        (10, "0.0"),
        (20, "0.0"),
        (0, "ENDSEC"),
        (0, "SECTION"),
        (2, "TABLES"),
        (0, "TABLE"),
        (2, "LTYPE"),
        (70, "1"),
        (0, "LTYPE"),
        (2, "DASHED"),
        (70, "0"),
        (3, "Dashed __ __"),
        (72, "65"),
        (73, "2"),
        (40, "0.75"),
        (49, "0.5"),
        (49, "-0.25"),
        (0, "ENDTAB"),
        (0, "TABLE"),
        (2, "LAYER"),
        (70, "1"),
        (0, "LAYER"),
        (2, "WALL"),
        (70, "4"),
        (62, "-1"),
        (6, "DASHED"),
        (0, "ENDTAB"),
        (0, "ENDSEC"),
        (0, "EOF"),
    ]));

    assert_eq!(doc.version(), Some("AC1009"));
    assert_eq!(doc.header_variable("$EXTMIN").map(|v| v.len()), Some(2));

    let dashed = doc.tables.line_types.as_ref().unwrap().get("DASHED").unwrap();
    assert_eq!(dashed.description, "Dashed __ __");
    assert_eq!(dashed.elements, vec![0.5, -0.25]);

    let wall = doc.tables.layer("WALL").unwrap();
    assert_eq!(wall.line_type, "DASHED");
    assert!(wall.is_locked());
    assert!(wall.is_off());
    assert_eq!(doc.layer_names(), vec!["WALL".to_string()]);
}

#[test]
fn test_malformed_number_is_fatal() {
    let err = try_read_str(&entities_dxf(&[(0, "POINT"), (10, "1,5"), (20, "2")])).unwrap_err();
    assert!(matches!(err, DxfError::MalformedNumber { code: 10, .. }));
}

#[test]
fn test_malformed_group_code_is_fatal() {
    let err = try_read_str("  0\nSECTION\nabc\nENTITIES\n").unwrap_err();
    assert!(matches!(err, DxfError::MalformedGroupCode { line: 3, .. }));
}

#[test]
fn test_truncated_stream_is_fatal() {
    let text = dxf_text(&[(0, "SECTION"), (2, "ENTITIES"), (0, "LINE"), (10, "1")]);
    let err = try_read_str(&text).unwrap_err();
    assert!(matches!(err, DxfError::UnexpectedEndOfStream(_)));
}

#[test]
fn test_cancellation_flag() {
    let text = entities_dxf(&[(0, "POINT"), (10, "1"), (20, "1")]);
    let flag = Arc::new(AtomicBool::new(false));

    let doc = read_str_with(&text, DxfReaderConfiguration::default().with_cancel_flag(flag.clone()));
    assert_eq!(doc.feature_count(), 1);

    flag.store(true, std::sync::atomic::Ordering::Relaxed);
    let doc = read_str_with(&text, DxfReaderConfiguration::default().with_cancel_flag(flag));
    assert_eq!(doc.feature_count(), 0);
    assert!(doc.notifications.has_type(NotificationType::Warning));
}

#[test]
fn test_binary_dxf_rejected() {
    let mut data = b"AutoCAD Binary DXF\r\n\x1a\0".to_vec();
    data.extend_from_slice(&[0; 16]);
    let result = DxfReader::from_reader(Cursor::new(data));
    assert!(matches!(result, Err(DxfError::UnsupportedFormat(_))));
}

#[test]
fn test_read_from_file_with_crlf() {
    let path = test_output_path("read_crlf.dxf");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        let text = entities_dxf(&[(0, "POINT"), (8, "SURVEY"), (10, "7.25"), (20, "-3")]);
        file.write_all(text.replace('\n', "\r\n").as_bytes()).unwrap();
    }

    let doc = DxfReader::from_file(&path).unwrap().read().unwrap();
    assert_eq!(doc.features()[0].geometry, Geometry::Point(Coordinate::new(7.25, -3.0)));
    assert_eq!(doc.features()[0].layer.as_deref(), Some("SURVEY"));
}
