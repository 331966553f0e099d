//! DXF (Drawing Exchange Format) reading and writing
//!
//! Decoding walks the group stream once, section by section, and collects
//! features, symbol tables and header variables into a [`Document`].
//! Encoding writes an R12 document from a slice of features.
//!
//! [`Document`]: crate::document::Document

mod code_page;
pub mod group;
mod reader;
mod writer;

pub use code_page::{encoding_from_code_page, scan_header_encoding};
pub use group::{DxfGroup, GroupCodeClass, ENDSEC, ENDTAB, EOF, SECTION, SEQEND, TABLE, VERTEX};
pub use reader::{
    DxfReader, DxfReaderConfiguration, DxfStreamReader, DxfTextReader, PointReader, SectionEnd, SectionReader,
};
pub use writer::{
    collect_layer_names, format_double, format_fixed, sanitize_layer_name, write_dxf, DxfStreamWriter,
    DxfStreamWriterExt, DxfTextWriter, DxfWriter, EncodeOptions, SectionWriter, ACAD_VERSION,
    DEFAULT_PRECISION, MAX_LAYER_NAME_LEN, TRANSLATOR,
};
