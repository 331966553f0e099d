//! Layer table entry

use super::{TableEntry, TableKind};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};
use bitflags::bitflags;

/// Color given to layers created for encoded features
pub const SYNTHESIZED_LAYER_COLOR: i32 = 131;

/// Line type given to layers created for encoded features
pub const CONTINUOUS: &str = "CONTINUOUS";

bitflags! {
    /// Layer flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i32 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
        /// Layer depends on an external reference
        const XREF_DEPENDENT = 16;
        /// The external reference was resolved
        const XREF_RESOLVED = 32;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Raw flag word
    pub flags: i32,
    /// Color index; negative when the layer is off
    pub color: i32,
    /// Line type name
    pub line_type: String,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: 0,
            color: 7,
            line_type: CONTINUOUS.to_string(),
        }
    }

    /// The layer written for each candidate layer name of an encode
    pub fn synthesized(name: &str) -> Self {
        Layer::new(name).with_color(SYNTHESIZED_LAYER_COLOR)
    }

    /// Set the color index
    pub fn with_color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    /// Known flag bits
    pub fn layer_flags(&self) -> LayerFlags {
        LayerFlags::from_bits_truncate(self.flags)
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.layer_flags().contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.layer_flags().contains(LayerFlags::LOCKED)
    }

    /// Check if the layer is off
    pub fn is_off(&self) -> bool {
        self.color < 0
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.is_off() && !self.is_frozen()
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::new("")
    }
}

impl TableEntry for Layer {
    const KIND: TableKind = TableKind::Layer;

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
            62 => self.color = group.as_int()?,
            6 => self.line_type = group.value.clone(),
            _ => {}
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_int(62, self.color)?;
        writer.write_string(6, &self.line_type)
    }
}
