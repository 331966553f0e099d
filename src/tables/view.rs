//! Named view table entry

use super::{point_axis, TableEntry, TableKind, TABLE_PRECISION};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{Vector2, Vector3};

/// A VIEW table entry
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub name: String,
    pub flags: i32,
    /// View height (40)
    pub height: f64,
    /// View width (41)
    pub width: f64,
    /// View center in display coordinates (10/20)
    pub center: Vector2,
    /// View direction from target (11/21/31)
    pub direction: Vector3,
    /// Target point (12/22/32)
    pub target: Vector3,
    pub lens_length: f64,
    pub front_clipping: f64,
    pub back_clipping: f64,
    /// Twist angle (50)
    pub twist_angle: f64,
    /// View mode (71)
    pub view_mode: i32,
}

impl View {
    /// Create a plan view
    pub fn new(name: impl Into<String>) -> Self {
        View {
            name: name.into(),
            flags: 0,
            height: 1.0,
            width: 1.0,
            center: Vector2::ZERO,
            direction: Vector3::UNIT_Z,
            target: Vector3::ZERO,
            lens_length: 50.0,
            front_clipping: 0.0,
            back_clipping: 0.0,
            twist_angle: 0.0,
            view_mode: 0,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::new("")
    }
}

impl TableEntry for View {
    const KIND: TableKind = TableKind::View;

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
        match group.code {
            40 => self.height = group.as_double()?,
            41 => self.width = group.as_double()?,
            42 => self.lens_length = group.as_double()?,
            43 => self.front_clipping = group.as_double()?,
            44 => self.back_clipping = group.as_double()?,
            50 => self.twist_angle = group.as_double()?,
            71 => self.view_mode = group.as_int()?,
            10 => self.center.x = group.as_double()?,
            20 => self.center.y = group.as_double()?,
            code => match point_axis(code) {
                Some((1, axis)) => self.direction.set_axis(axis, group.as_double()?),
                Some((2, axis)) => self.target.set_axis(axis, group.as_double()?),
                _ => {}
            },
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_fixed(40, self.height, TABLE_PRECISION)?;
        writer.write_fixed(41, self.width, TABLE_PRECISION)?;
        writer.write_point2d(10, self.center, TABLE_PRECISION)?;
        writer.write_point3d(11, self.direction, TABLE_PRECISION)?;
        writer.write_point3d(12, self.target, TABLE_PRECISION)?;
        writer.write_fixed(42, self.lens_length, TABLE_PRECISION)?;
        writer.write_fixed(43, self.front_clipping, TABLE_PRECISION)?;
        writer.write_fixed(44, self.back_clipping, TABLE_PRECISION)?;
        writer.write_fixed(50, self.twist_angle, TABLE_PRECISION)?;
        writer.write_int(71, self.view_mode)
    }
}
