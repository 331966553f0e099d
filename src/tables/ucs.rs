//! User coordinate system table entry

use super::{point_axis, TableEntry, TableKind, TABLE_PRECISION};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter, DxfStreamWriterExt};
use crate::types::Vector3;

/// A UCS table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Ucs {
    /// UCS name
    pub name: String,
    /// Raw flag word
    pub flags: i32,
    /// Origin (10/20/30)
    pub origin: Vector3,
    /// X axis direction (11/21/31)
    pub x_axis: Vector3,
    /// Y axis direction (12/22/32)
    pub y_axis: Vector3,
}

impl Ucs {
    /// Create a UCS equal to the world coordinate system
    pub fn new(name: impl Into<String>) -> Self {
        Ucs {
            name: name.into(),
            flags: 0,
            origin: Vector3::ZERO,
            x_axis: Vector3::UNIT_X,
            y_axis: Vector3::UNIT_Y,
        }
    }
}

impl Default for Ucs {
    fn default() -> Self {
        Ucs::new("")
    }
}

impl TableEntry for Ucs {
    const KIND: TableKind = TableKind::Ucs;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn flags(&self) -> i32 {
        self.flags
    }

    fn set_flags(&mut self, flags: i32) {
        self.flags = flags;
    }

    fn read_field(&mut self, group: &DxfGroup) -> Result<()> {
        let target = match point_axis(group.code) {
            Some((0, axis)) => Some((&mut self.origin, axis)),
            Some((1, axis)) => Some((&mut self.x_axis, axis)),
            Some((2, axis)) => Some((&mut self.y_axis, axis)),
            _ => None,
        };
        if let Some((vector, axis)) = target {
            vector.set_axis(axis, group.as_double()?);
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_point3d(10, self.origin, TABLE_PRECISION)?;
        writer.write_point3d(11, self.x_axis, TABLE_PRECISION)?;
        writer.write_point3d(12, self.y_axis, TABLE_PRECISION)
    }
}
