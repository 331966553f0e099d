//! DXF file reader

mod section_reader;
mod stream_reader;
mod text_reader;

pub use section_reader::{SectionEnd, SectionReader};
pub use stream_reader::{DxfStreamReader, PointReader};
pub use text_reader::DxfTextReader;

use crate::document::Document;
use crate::error::{DxfError, Result};
use crate::io::dxf::code_page::scan_header_encoding;
use crate::io::dxf::group::{EOF, SECTION};
use crate::notification::NotificationType;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sentinel opening a binary DXF file
const BINARY_SENTINEL: &[u8] = b"AutoCAD Binary DXF";

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When set, the read stops before the next top-level section and
    /// returns what was decoded so far.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl DxfReaderConfiguration {
    /// Watch `flag` for cancellation
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// DXF file reader
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);

        if Self::is_binary(&mut buf_reader)? {
            return Err(DxfError::UnsupportedFormat(
                "binary DXF is not supported".to_string(),
            ));
        }

        Ok(Self {
            reader: Box::new(DxfTextReader::new(buf_reader)),
            config: DxfReaderConfiguration::default(),
        })
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Check if a stream contains binary DXF data
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        let mut buffer = vec![0u8; BINARY_SENTINEL.len()];
        let mut filled = 0;
        while filled < buffer.len() {
            let n = reader.read(&mut buffer[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        // Always seek back to start after checking
        reader.seek(SeekFrom::Start(0))?;

        Ok(filled == BINARY_SENTINEL.len() && buffer == BINARY_SENTINEL)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the stream and return the decoded document
    pub fn read(mut self) -> Result<Document> {
        self.detect_encoding()?;

        let mut document = Document::new();

        while let Some(group) = self.reader.next_group()? {
            if group.is_marker(EOF) {
                break;
            }
            if !group.is_marker(SECTION) {
                if group.is_comment() {
                    log::debug!("DXF comment: {}", group.value);
                } else {
                    log::trace!("group {} outside any section ignored", group);
                }
                continue;
            }

            if self.config.is_cancelled() {
                log::warn!("DXF read cancelled");
                document
                    .notifications
                    .notify(NotificationType::Warning, "read cancelled before all sections were decoded");
                break;
            }

            let name = self.reader.read_group("SECTION")?;
            log::debug!("reading {} section", name.value);

            let mut section_reader = SectionReader::new(self.reader.as_mut());
            let end = match name.value.as_str() {
                "HEADER" => {
                    section_reader.read_header(&mut document)?;
                    SectionEnd::EndSec
                }
                "TABLES" => section_reader.read_tables(&mut document)?,
                "BLOCKS" | "ENTITIES" => section_reader.read_entities(&mut document, &name.value)?,
                "CLASSES" | "OBJECTS" => {
                    section_reader.skip_section(&name.value)?;
                    SectionEnd::EndSec
                }
                _ => {
                    document.notifications.notify(
                        NotificationType::NotSupported,
                        format!("{} section skipped", name.value),
                    );
                    section_reader.skip_section(&name.value)?;
                    SectionEnd::EndSec
                }
            };
            if end == SectionEnd::Eof {
                break;
            }
        }

        log::debug!(
            "DXF read complete: {} features, {} notifications",
            document.feature_count(),
            document.notifications.len()
        );
        Ok(document)
    }

    /// Pre-scan the HEADER for the code page, then rewind for the full read
    fn detect_encoding(&mut self) -> Result<()> {
        let encoding = scan_header_encoding(self.reader.as_mut())?;
        self.reader.reset()?;
        if let Some(encoding) = encoding {
            log::debug!("using {} for non UTF-8 text", encoding.name());
            self.reader.set_encoding(encoding);
        }
        Ok(())
    }
}
