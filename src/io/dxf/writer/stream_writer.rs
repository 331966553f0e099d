//! DXF stream writer trait and common helpers

use crate::error::Result;
use crate::io::dxf::group::{COMMENT_CODE, ENDSEC, EOF, MARKER_CODE, SECTION};
use crate::types::{Coordinate, Vector2, Vector3};

/// Trait for writing DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an integer value
    fn write_int(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a double with as many digits as needed, at least one decimal
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a double with exactly `precision` decimals
    fn write_fixed(&mut self, code: i32, value: f64, precision: usize) -> Result<()>;

    /// Flush the writer
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a coordinate as `x_code`, `x_code + 10` and, when Z is present,
    /// `x_code + 20`
    fn write_coordinate(&mut self, x_code: i32, point: &Coordinate, precision: usize) -> Result<()> {
        self.write_fixed(x_code, point.x, precision)?;
        self.write_fixed(x_code + 10, point.y, precision)?;
        if let Some(z) = point.z {
            self.write_fixed(x_code + 20, z, precision)?;
        }
        Ok(())
    }

    /// Write a 2D point (codes 10/20 or similar)
    fn write_point2d(&mut self, x_code: i32, point: Vector2, precision: usize) -> Result<()> {
        self.write_fixed(x_code, point.x, precision)?;
        self.write_fixed(x_code + 10, point.y, precision)?;
        Ok(())
    }

    /// Write a 3D point (codes 10/20/30 or similar)
    fn write_point3d(&mut self, x_code: i32, point: Vector3, precision: usize) -> Result<()> {
        self.write_fixed(x_code, point.x, precision)?;
        self.write_fixed(x_code + 10, point.y, precision)?;
        self.write_fixed(x_code + 20, point.z, precision)?;
        Ok(())
    }

    /// Write an entity, table or section marker
    fn write_entity_type(&mut self, entity_type: &str) -> Result<()> {
        self.write_string(MARKER_CODE, entity_type)
    }

    /// Write a comment group
    fn write_comment(&mut self, text: &str) -> Result<()> {
        self.write_string(COMMENT_CODE, text)
    }

    /// Write section start
    fn write_section_start(&mut self, section_name: &str) -> Result<()> {
        self.write_string(MARKER_CODE, SECTION)?;
        self.write_string(2, section_name)?;
        Ok(())
    }

    /// Write section end
    fn write_section_end(&mut self) -> Result<()> {
        self.write_string(MARKER_CODE, ENDSEC)
    }

    /// Write end of file
    fn write_eof(&mut self) -> Result<()> {
        self.write_string(MARKER_CODE, EOF)
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: DxfStreamWriter> DxfStreamWriterExt for T {}
