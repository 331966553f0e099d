//! DXF section writers
//!
//! The encoder writes an R12 (AC1009) document: HEADER, TABLES and ENTITIES.

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use super::EncodeOptions;
use crate::entities::write_feature;
use crate::error::Result;
use crate::feature::Feature;
use crate::io::dxf::group::{ENDTAB, TABLE};
use crate::tables::*;
use crate::types::Envelope;

/// Version written to `$ACADVER`
pub const ACAD_VERSION: &str = "AC1009";

/// Translator line written in the leading comments
pub const TRANSLATOR: &str = concat!("TRANSLATED BY dxf-features ", env!("CARGO_PKG_VERSION"));

/// Decimals of the extents and limits variables
const EXTENTS_PRECISION: usize = 6;

/// Writes all DXF sections
pub struct SectionWriter<'a, W: DxfStreamWriter> {
    writer: &'a mut W,
}

impl<'a, W: DxfStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// Write the comments in front of the HEADER
    pub fn write_comments(&mut self, feature_count: usize) -> Result<()> {
        self.writer.write_comment(&format!("{} features", feature_count))?;
        self.writer.write_comment(TRANSLATOR)
    }

    /// Write the HEADER section. Extents and limits come from `envelope`,
    /// or are zero when nothing was written.
    pub fn write_header(&mut self, envelope: Option<&Envelope>) -> Result<()> {
        let (min_x, min_y, max_x, max_y) = envelope
            .map(|e| (e.min_x, e.min_y, e.max_x, e.max_y))
            .unwrap_or((0.0, 0.0, 0.0, 0.0));

        self.writer.write_section_start("HEADER")?;

        self.write_header_variable("$ACADVER", |w| w.write_string(1, ACAD_VERSION))?;
        self.write_header_variable("$CECOLOR", |w| w.write_int(62, 256))?;
        self.write_header_variable("$CELTYPE", |w| w.write_string(6, "BYLAYER"))?;
        self.write_header_variable("$CLAYER", |w| w.write_string(8, "0"))?;
        self.write_header_variable("$ELEVATION", |w| w.write_fixed(40, 0.0, 3))?;

        // Drawing extents
        self.write_header_variable("$EXTMAX", |w| {
            w.write_fixed(10, max_x, EXTENTS_PRECISION)?;
            w.write_fixed(20, max_y, EXTENTS_PRECISION)
        })?;
        self.write_header_variable("$EXTMIN", |w| {
            w.write_fixed(10, min_x, EXTENTS_PRECISION)?;
            w.write_fixed(20, min_y, EXTENTS_PRECISION)
        })?;

        // Insertion base point
        self.write_header_variable("$INSBASE", |w| {
            w.write_fixed(10, 0.0, 1)?;
            w.write_fixed(20, 0.0, 1)?;
            w.write_fixed(30, 0.0, 1)
        })?;

        // Drawing limits
        self.write_header_variable("$LIMCHECK", |w| w.write_int(70, 1))?;
        self.write_header_variable("$LIMMAX", |w| {
            w.write_fixed(10, max_x, EXTENTS_PRECISION)?;
            w.write_fixed(20, max_y, EXTENTS_PRECISION)
        })?;
        self.write_header_variable("$LIMMIN", |w| {
            w.write_fixed(10, min_x, EXTENTS_PRECISION)?;
            w.write_fixed(20, min_y, EXTENTS_PRECISION)
        })?;

        // Units: decimal, two digits
        self.write_header_variable("$LUNITS", |w| w.write_int(70, 2))?;
        self.write_header_variable("$LUPREC", |w| w.write_int(70, 2))?;

        self.writer.write_section_end()
    }

    /// Write a header variable
    fn write_header_variable<F>(&mut self, name: &str, write_value: F) -> Result<()>
    where
        F: FnOnce(&mut W) -> Result<()>,
    {
        self.writer.write_string(9, name)?;
        write_value(self.writer)
    }

    /// Write the TABLES section. Absent or empty tables are left out.
    pub fn write_tables(&mut self, tables: &Tables) -> Result<()> {
        self.writer.write_section_start("TABLES")?;

        for kind in TableKind::ALL {
            match kind {
                TableKind::VPort => self.write_table_opt(tables.vports.as_ref())?,
                TableKind::LineType => self.write_table_opt(tables.line_types.as_ref())?,
                TableKind::Layer => self.write_table_opt(tables.layers.as_ref())?,
                TableKind::TextStyle => self.write_table_opt(tables.text_styles.as_ref())?,
                TableKind::View => self.write_table_opt(tables.views.as_ref())?,
                TableKind::Ucs => self.write_table_opt(tables.ucss.as_ref())?,
                TableKind::AppId => self.write_table_opt(tables.app_ids.as_ref())?,
                TableKind::DimStyle => self.write_table_opt(tables.dim_styles.as_ref())?,
            }
        }

        self.writer.write_section_end()
    }

    fn write_table_opt<T: TableEntry>(&mut self, table: Option<&Table<T>>) -> Result<()> {
        match table {
            Some(table) if !table.is_empty() => self.write_table(table),
            _ => Ok(()),
        }
    }

    /// Write one table: header with item count, one run per item, ENDTAB
    pub fn write_table<T: TableEntry>(&mut self, table: &Table<T>) -> Result<()> {
        let kind = T::KIND.name();
        self.writer.write_entity_type(TABLE)?;
        self.writer.write_string(2, kind)?;
        self.writer.write_int(70, table.len() as i32)?;

        for item in table.iter() {
            self.writer.write_entity_type(kind)?;
            self.writer.write_string(2, item.name())?;
            self.writer.write_int(70, item.flags())?;
            item.write_fields(self.writer)?;
        }

        self.writer.write_entity_type(ENDTAB)
    }

    /// Write the ENTITIES section
    pub fn write_entities(&mut self, features: &[Feature], options: &EncodeOptions) -> Result<()> {
        self.writer.write_section_start("ENTITIES")?;

        for feature in features {
            let layer = entity_layer(feature, options);
            write_feature(self.writer, feature, layer, options)?;
        }

        self.writer.write_section_end()
    }
}

/// Layer a feature is written on: its own LAYER, else the first configured
/// layer name, else "0"
pub(crate) fn entity_layer<'f>(feature: &'f Feature, options: &'f EncodeOptions) -> &'f str {
    feature
        .layer_name()
        .or_else(|| options.layer_names.first().map(String::as_str))
        .filter(|name| !name.is_empty())
        .unwrap_or("0")
}
