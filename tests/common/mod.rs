//! Shared test utilities for dxf-features integration tests.
//!
//! Builds DXF text from group lists, reads and writes through the public
//! API, and resolves output paths. Every test crate imports it via
//! `mod common;`.

#![allow(dead_code)]

pub mod builders;

use dxf_features::io::dxf::DxfReaderConfiguration;
use dxf_features::{Document, DxfReader, DxfWriter, EncodeOptions, Feature, Result};
use std::io::Cursor;
use std::path::PathBuf;

// ===========================================================================
// Paths
// ===========================================================================

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    let _ = std::fs::create_dir_all(&dir);
    dir.join(filename)
}

// ===========================================================================
// DXF text builders
// ===========================================================================

/// Render groups as DXF text, codes right-aligned the way writers do.
pub fn dxf_text(groups: &[(i32, &str)]) -> String {
    groups
        .iter()
        .map(|(code, value)| format!("{:>3}\n{}\n", code, value))
        .collect()
}

/// Wrap entity groups in an ENTITIES section and an EOF.
pub fn entities_dxf(groups: &[(i32, &str)]) -> String {
    let mut all = vec![(0, "SECTION"), (2, "ENTITIES")];
    all.extend_from_slice(groups);
    all.extend_from_slice(&[(0, "ENDSEC"), (0, "EOF")]);
    dxf_text(&all)
}

/// Trimmed lines of DXF text
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).collect()
}

/// Values of the groups with `code` in DXF text
pub fn values_of<'a>(text: &'a str, code: &str) -> Vec<&'a str> {
    lines(text)
        .chunks(2)
        .filter(|pair| pair.len() == 2 && pair[0] == code)
        .map(|pair| pair[1])
        .collect()
}

// ===========================================================================
// Read / write helpers
// ===========================================================================

/// Decode DXF text.
pub fn try_read_str(text: &str) -> Result<Document> {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))?.read()
}

/// Decode DXF text, panicking on error.
pub fn read_str(text: &str) -> Document {
    try_read_str(text).unwrap_or_else(|e| panic!("Failed to read DXF: {e:?}"))
}

/// Decode DXF text with a reader configuration.
pub fn read_str_with(text: &str, config: DxfReaderConfiguration) -> Document {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))
        .and_then(|reader| reader.with_configuration(config).read())
        .unwrap_or_else(|e| panic!("Failed to read DXF: {e:?}"))
}

/// Encode features to DXF text.
pub fn encode(features: &[Feature], options: EncodeOptions) -> String {
    let bytes = DxfWriter::new(features)
        .with_options(options)
        .write_to_vec()
        .unwrap_or_else(|e| panic!("Failed to write DXF: {e:?}"));
    String::from_utf8(bytes).expect("encoder writes UTF-8")
}

/// Encode then decode.
pub fn roundtrip(features: &[Feature], options: EncodeOptions) -> Document {
    read_str(&encode(features, options))
}
