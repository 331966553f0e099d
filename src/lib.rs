//! # dxf-features
//!
//! A codec between ASCII DXF group-code streams and simple geometric
//! features: a geometry (point, line string or polygon) plus a fixed set of
//! attributes (LAYER, LTYPE, ELEVATION, THICKNESS, COLOR, TEXT, TEXT_HEIGHT,
//! TEXT_ROTATION, TEXT_STYLE).
//!
//! ## Features
//!
//! - Decode POINT, TEXT, LINE, POLYLINE/VERTEX and LWPOLYLINE entities from
//!   the BLOCKS and ENTITIES sections
//! - Decode the LAYER, LTYPE, STYLE, UCS, VIEW, VPORT, APPID and DIMSTYLE
//!   tables and the HEADER variables
//! - Encode features to an R12 document, with polygon holes on `_`-suffixed
//!   layers
//! - Degenerate vertex lists are reduced to the simplest valid geometry
//!   instead of failing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_features::{DxfReader, DxfWriter, EncodeOptions};
//!
//! // Read a DXF file
//! let doc = DxfReader::from_file("sample.dxf")?.read()?;
//!
//! for feature in doc.features() {
//!     println!("{:?} on {:?}", feature.geometry, feature.layer);
//! }
//!
//! // Write the features back
//! let options = EncodeOptions::from_features(doc.features()).with_precision(3);
//! DxfWriter::new(doc.features()).with_options(options).write_to_file("output.dxf")?;
//! # Ok::<(), dxf_features::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `DxfStreamReader` - sequential group source with no push-back; every
//!   decode routine hands back the first group it did not consume
//! - `TableEntry` - trait implemented by every symbol table item
//! - `Document` - header variables, tables, features and notifications of
//!   one decode

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Coordinate, Envelope, Vector2, Vector3};

// Re-export the feature model
pub use feature::{Attribute, AttributeType, AttributeValue, Feature};
pub use geometry::{finalize_vertices, Geometry, Polygon, VertexInterpretation};

// Re-export table types
pub use tables::{
    AppId, DimStyle, Layer, LineType, Table, TableEntry, TableKind, Tables, TextStyle, Ucs, VPort,
    View,
};

// Re-export document
pub use document::Document;
pub use notification::{Notification, NotificationCollection, NotificationType};

// Re-export I/O types
pub use io::dxf::{DxfReader, DxfReaderConfiguration, DxfWriter, EncodeOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert_eq!(doc.feature_count(), 0);
        assert_eq!(doc.tables.kind_count(), 0);
        assert!(doc.notifications.is_empty());
    }
}
