//! LWPOLYLINE entity codec (decode only)
//!
//! Vertices are inline: each X (10) opens a coordinate and the Y (20) that
//! follows closes it. The elevation (38) becomes the Z of every vertex read
//! after it. Bulges and widths are ignored.

use super::{pending_feature, read_common, PolylineFlags};
use crate::error::Result;
use crate::feature::Feature;
use crate::geometry::{finalize_vertices, VertexInterpretation};
use crate::io::dxf::{DxfGroup, DxfStreamReader};
use crate::types::Coordinate;

/// Read an LWPOLYLINE run. A run without any complete vertex is dropped.
pub fn read(reader: &mut dyn DxfStreamReader) -> Result<(Option<Feature>, DxfGroup)> {
    let mut feature = Feature {
        elevation: Some(0.0),
        ..pending_feature()
    };
    let mut flags = PolylineFlags::empty();
    let mut vertices = Vec::new();
    let mut pending_x: Option<f64> = None;
    let mut explicit_elevation: Option<f64> = None;

    let next = loop {
        let group = reader.read_group("LWPOLYLINE entity")?;
        if group.is_entity_marker() {
            break group;
        }
        match group.code {
            10 => pending_x = Some(group.as_double()?),
            20 => {
                let y = group.as_double()?;
                let x = pending_x.take();
                if let Some(c) = Coordinate::from_parts(x, Some(y), explicit_elevation) {
                    vertices.push(c);
                }
            }
            38 => {
                let elevation = group.as_double()?;
                feature.elevation = Some(elevation);
                explicit_elevation = Some(elevation);
            }
            70 => flags = PolylineFlags::from_bits_retain(group.as_int()?),
            _ => {
                read_common(&mut feature, &group, false)?;
            }
        }
    };

    let interpretation = VertexInterpretation::from_closed(flags.contains(PolylineFlags::CLOSED));
    let feature = finalize_vertices(vertices, interpretation).map(|geometry| Feature {
        geometry,
        ..feature
    });
    Ok((feature, next))
}
