//! ASCII DXF writer

use super::stream_writer::DxfStreamWriter;
use crate::error::Result;
use std::io::Write;

/// ASCII DXF stream writer
pub struct DxfTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a DXF code right-aligned in a 3-character field
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Shortest readable form of a double: up to 15 decimals, trailing zeros
/// trimmed, never fewer than one decimal
pub fn format_double(value: f64) -> String {
    if value == value.trunc() {
        return format!("{:.1}", value);
    }
    let formatted = format!("{:.15}", value);
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Fixed-point form with exactly `precision` decimals
pub fn format_fixed(value: f64, precision: usize) -> String {
    // no "-0.0000" for values that round to zero
    let rounded = format!("{:.*}", precision, value);
    if rounded.starts_with('-') && rounded[1..].bytes().all(|b| b == b'0' || b == b'.') {
        rounded[1..].to_string()
    } else {
        rounded
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_int(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_double(value))?;
        Ok(())
    }

    fn write_fixed(&mut self, code: i32, value: f64, precision: usize) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_fixed(value, precision))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
