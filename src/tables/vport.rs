//! Viewport table entry

use super::{TableEntry, TableKind, TABLE_PRECISION};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{Vector2, Vector3};

/// A VPORT table entry
#[derive(Debug, Clone, PartialEq)]
pub struct VPort {
    pub name: String,
    pub flags: i32,
    /// Lower-left corner (10/20)
    pub lower_left: Vector2,
    /// Upper-right corner (11/21)
    pub upper_right: Vector2,
    /// View center (12/22)
    pub center: Vector2,
    /// Snap base point (13/23)
    pub snap_base: Vector2,
    /// Snap spacing (14/24)
    pub snap_spacing: Vector2,
    /// Grid spacing (15/25)
    pub grid_spacing: Vector2,
    /// View direction (16/26/36)
    pub direction: Vector3,
    /// View target (17/27/37)
    pub target: Vector3,
    pub height: f64,
    pub aspect_ratio: f64,
    pub lens_length: f64,
    pub front_clipping: f64,
    pub back_clipping: f64,
    pub snap_rotation: f64,
    pub twist_angle: f64,
    pub view_mode: i32,
    pub circle_zoom: i32,
}

impl VPort {
    /// Create a viewport showing the unit square
    pub fn new(name: impl Into<String>) -> Self {
        VPort {
            name: name.into(),
            flags: 0,
            lower_left: Vector2::ZERO,
            upper_right: Vector2::new(1.0, 1.0),
            center: Vector2::new(0.5, 0.5),
            snap_base: Vector2::ZERO,
            snap_spacing: Vector2::new(1.0, 1.0),
            grid_spacing: Vector2::new(1.0, 1.0),
            direction: Vector3::UNIT_Z,
            target: Vector3::ZERO,
            height: 1.0,
            aspect_ratio: 1.0,
            lens_length: 50.0,
            front_clipping: 0.0,
            back_clipping: 0.0,
            snap_rotation: 0.0,
            twist_angle: 0.0,
            view_mode: 0,
            circle_zoom: 100,
        }
    }

    fn planar_mut(&mut self, index: i32) -> Option<&mut Vector2> {
        match index {
            0 => Some(&mut self.lower_left),
            1 => Some(&mut self.upper_right),
            2 => Some(&mut self.center),
            3 => Some(&mut self.snap_base),
            4 => Some(&mut self.snap_spacing),
            5 => Some(&mut self.grid_spacing),
            _ => None,
        }
    }
}

impl Default for VPort {
    fn default() -> Self {
        VPort::new("")
    }
}

impl TableEntry for VPort {
    const KIND: TableKind = TableKind::VPort;

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
            10..=15 => {
                let value = group.as_double()?;
                if let Some(v) = self.planar_mut(group.code - 10) {
                    v.x = value;
                }
            }
            20..=25 => {
                let value = group.as_double()?;
                if let Some(v) = self.planar_mut(group.code - 20) {
                    v.y = value;
                }
            }
            16 | 26 | 36 => self
                .direction
                .set_axis((group.code / 10 - 1) as usize, group.as_double()?),
            17 | 27 | 37 => self
                .target
                .set_axis((group.code / 10 - 1) as usize, group.as_double()?),
            40 => self.height = group.as_double()?,
            41 => self.aspect_ratio = group.as_double()?,
            42 => self.lens_length = group.as_double()?,
            43 => self.front_clipping = group.as_double()?,
            44 => self.back_clipping = group.as_double()?,
            50 => self.snap_rotation = group.as_double()?,
            51 => self.twist_angle = group.as_double()?,
            71 => self.view_mode = group.as_int()?,
            72 => self.circle_zoom = group.as_int()?,
            _ => {}
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_point2d(10, self.lower_left, TABLE_PRECISION)?;
        writer.write_point2d(11, self.upper_right, TABLE_PRECISION)?;
        writer.write_point2d(12, self.center, TABLE_PRECISION)?;
        writer.write_point2d(13, self.snap_base, TABLE_PRECISION)?;
        writer.write_point2d(14, self.snap_spacing, TABLE_PRECISION)?;
        writer.write_point2d(15, self.grid_spacing, TABLE_PRECISION)?;
        writer.write_point3d(16, self.direction, TABLE_PRECISION)?;
        writer.write_point3d(17, self.target, TABLE_PRECISION)?;
        writer.write_fixed(40, self.height, TABLE_PRECISION)?;
        writer.write_fixed(41, self.aspect_ratio, TABLE_PRECISION)?;
        writer.write_fixed(42, self.lens_length, TABLE_PRECISION)?;
        writer.write_fixed(43, self.front_clipping, TABLE_PRECISION)?;
        writer.write_fixed(44, self.back_clipping, TABLE_PRECISION)?;
        writer.write_fixed(50, self.snap_rotation, TABLE_PRECISION)?;
        writer.write_fixed(51, self.twist_angle, TABLE_PRECISION)?;
        writer.write_int(71, self.view_mode)?;
        writer.write_int(72, self.circle_zoom)
    }
}
