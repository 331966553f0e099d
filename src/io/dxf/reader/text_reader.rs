//! DXF ASCII text reader

use super::stream_reader::DxfStreamReader;
use crate::error::{DxfError, Result};
use crate::io::dxf::group::DxfGroup;
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// Reads groups from an ASCII DXF stream, two lines at a time
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    /// Non-UTF8 fallback encoding.  `None` means Latin-1.
    encoding: Option<&'static Encoding>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            encoding: None,
        }
    }

    /// Read one line without its terminator; `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = match std::str::from_utf8(&bytes) {
            Ok(s) => s.to_string(),
            Err(_) => match self.encoding {
                Some(enc) => enc.decode(&bytes).0.into_owned(),
                // Latin-1 maps bytes 0-255 straight to code points
                None => bytes.iter().map(|&b| b as char).collect(),
            },
        };
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn next_group(&mut self) -> Result<Option<DxfGroup>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let code_line_number = self.line_number;

        let code = match code_line.parse::<i32>() {
            Ok(code) => code,
            Err(_) => {
                // trailing blank lines after the last group
                if code_line.is_empty() && self.read_line()?.is_none() {
                    return Ok(None);
                }
                return Err(DxfError::MalformedGroupCode {
                    line: code_line_number,
                    value: code_line,
                });
            }
        };

        let value = self.read_line()?.ok_or_else(|| {
            DxfError::UnexpectedEndOfStream(format!(
                "value of group code {} at line {}",
                code, code_line_number
            ))
        })?;

        Ok(Some(DxfGroup::new(code, value)))
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
