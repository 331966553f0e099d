//! Line type table entry

use super::{TableEntry, TableKind, TABLE_PRECISION};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};

/// Alignment code every line type uses (`A`)
const ALIGNMENT_A: i32 = 65;

/// A line type table entry
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Raw flag word
    pub flags: i32,
    /// Descriptive text
    pub description: String,
    /// Alignment code (72)
    pub alignment: i32,
    /// Total pattern length (40)
    pub pattern_length: f64,
    /// Dash, dot and space lengths (49); the element count (73) is derived
    pub elements: Vec<f64>,
}

impl LineType {
    /// Create an empty line type
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            flags: 0,
            description: String::new(),
            alignment: ALIGNMENT_A,
            pattern_length: 0.0,
            elements: Vec::new(),
        }
    }

    /// The solid line type written in front of encoded features
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..LineType::new(super::layer::CONTINUOUS)
        }
    }

    /// Check if the pattern is a solid line
    pub fn is_solid(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for LineType {
    fn default() -> Self {
        LineType::new("")
    }
}

impl TableEntry for LineType {
    const KIND: TableKind = TableKind::LineType;

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
            3 => self.description = group.value.clone(),
            72 => self.alignment = group.as_int()?,
            40 => self.pattern_length = group.as_double()?,
            49 => self.elements.push(group.as_double()?),
            _ => {}
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(3, &self.description)?;
        writer.write_int(72, self.alignment)?;
        writer.write_int(73, self.elements.len() as i32)?;
        writer.write_fixed(40, self.pattern_length, 1)?;
        for element in &self.elements {
            writer.write_fixed(49, *element, TABLE_PRECISION)?;
        }
        Ok(())
    }
}
