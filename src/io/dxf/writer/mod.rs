//! DXF writer module

mod layer_names;
mod section_writer;
mod stream_writer;
mod text_writer;

pub use layer_names::{collect_layer_names, sanitize_layer_name, MAX_LAYER_NAME_LEN};
pub use section_writer::{SectionWriter, ACAD_VERSION, TRANSLATOR};
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::{format_double, format_fixed, DxfTextWriter};

use crate::document::Document;
use crate::error::Result;
use crate::feature::Feature;
use crate::tables::Tables;
use crate::types::Envelope;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default number of decimals for entity coordinates
pub const DEFAULT_PRECISION: usize = 4;

/// Options controlling how features are encoded
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOptions {
    /// Candidate layer names, in order. The first one is used for features
    /// without a LAYER value; all of them get a LAYER table item.
    pub layer_names: Vec<String>,

    /// Write polygon holes on a `_`-suffixed twin of the feature's layer
    pub hole_suffix: bool,

    /// Decimals of entity coordinates
    pub precision: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            layer_names: Vec::new(),
            hole_suffix: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EncodeOptions {
    /// Default options with the layer names the features use
    pub fn from_features(features: &[Feature]) -> Self {
        Self::default().with_layer_names(collect_layer_names(features))
    }

    /// Set the candidate layer names
    pub fn with_layer_names(mut self, layer_names: Vec<String>) -> Self {
        self.layer_names = layer_names;
        self
    }

    /// Enable or disable the hole layers
    pub fn with_hole_suffix(mut self, hole_suffix: bool) -> Self {
        self.hole_suffix = hole_suffix;
        self
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// DXF file writer
pub struct DxfWriter<'a> {
    features: &'a [Feature],
    /// Tables to write instead of the synthesized ones
    tables: Option<&'a Tables>,
    options: EncodeOptions,
}

impl<'a> DxfWriter<'a> {
    /// Create a writer for `features` with default options
    pub fn new(features: &'a [Feature]) -> Self {
        Self {
            features,
            tables: None,
            options: EncodeOptions::default(),
        }
    }

    /// Create a writer that re-encodes a decoded document, keeping its
    /// tables when it had any
    pub fn from_document(document: &'a Document) -> Self {
        Self {
            features: document.features(),
            tables: (document.tables.kind_count() > 0).then_some(&document.tables),
            options: EncodeOptions::default().with_layer_names(document.layer_names()),
        }
    }

    /// Set the encode options
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The encode options in use
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream_writer = DxfTextWriter::new(writer);
        self.write_dxf(&mut stream_writer)?;
        stream_writer.flush()
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Write DXF content to a stream writer
    fn write_dxf<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        let envelope = self.envelope();

        let mut section_writer = SectionWriter::new(writer);
        section_writer.write_comments(self.features.len())?;
        section_writer.write_header(envelope.as_ref())?;
        match self.tables {
            Some(tables) => section_writer.write_tables(tables)?,
            None => section_writer.write_tables(&self.synthesized_tables())?,
        }
        section_writer.write_entities(self.features, &self.options)?;

        writer.write_eof()
    }

    /// STYLE, LTYPE and LAYER tables for the configured layer names; hole
    /// layers are only added when some polygon has a hole to put there
    fn synthesized_tables(&self) -> Tables {
        let hole_layers =
            self.options.hole_suffix && self.features.iter().any(|f| f.geometry.has_holes());
        Tables::synthesized(&self.options.layer_names, hole_layers)
    }

    /// Envelope of every feature written
    pub fn envelope(&self) -> Option<Envelope> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.envelope())
            .reduce(|a, b| a.merge(&b))
    }
}

/// Encode `features` to a file
pub fn write_dxf<P: AsRef<Path>>(features: &[Feature], options: EncodeOptions, path: P) -> Result<()> {
    DxfWriter::new(features).with_options(options).write_to_file(path)
}
