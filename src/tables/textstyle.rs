//! Text style table entry

use super::{TableEntry, TableKind};
use crate::error::Result;
use crate::feature::DEFAULT_TEXT_STYLE;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};
use bitflags::bitflags;

/// Decimals used for style sizes and angles
const STYLE_PRECISION: usize = 1;

bitflags! {
    /// Text generation flags (code 71)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i32 {
        /// Text is backward (mirrored in X)
        const BACKWARD = 2;
        /// Text is upside down (mirrored in Y)
        const UPSIDE_DOWN = 4;
    }
}

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Style name
    pub name: String,
    /// Raw flag word
    pub flags: i32,
    /// Fixed text height (0 = variable)
    pub height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle
    pub oblique_angle: f64,
    /// Text generation flags (71)
    pub generation: i32,
    /// Last height used
    pub last_height: f64,
    /// Primary font file name
    pub font_file: String,
    /// Big font file name (for Asian languages)
    pub big_font_file: String,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            flags: 0,
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            generation: 0,
            last_height: 1.0,
            font_file: String::new(),
            big_font_file: String::new(),
        }
    }

    /// The STANDARD style written in front of encoded features
    pub fn standard() -> Self {
        TextStyle {
            font_file: "txt".to_string(),
            ..TextStyle::new(DEFAULT_TEXT_STYLE)
        }
    }

    /// Known generation flag bits
    pub fn generation_flags(&self) -> TextGenerationFlags {
        TextGenerationFlags::from_bits_truncate(self.generation)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::new("")
    }
}

impl TableEntry for TextStyle {
    const KIND: TableKind = TableKind::TextStyle;

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
            41 => self.width_factor = group.as_double()?,
            50 => self.oblique_angle = group.as_double()?,
            71 => self.generation = group.as_int()?,
            42 => self.last_height = group.as_double()?,
            3 => self.font_file = group.value.clone(),
            4 => self.big_font_file = group.value.clone(),
            _ => {}
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_fixed(40, self.height, STYLE_PRECISION)?;
        writer.write_fixed(41, self.width_factor, STYLE_PRECISION)?;
        writer.write_fixed(50, self.oblique_angle, STYLE_PRECISION)?;
        writer.write_int(71, self.generation)?;
        writer.write_fixed(42, self.last_height, STYLE_PRECISION)?;
        writer.write_string(3, &self.font_file)?;
        writer.write_string(4, &self.big_font_file)
    }
}
