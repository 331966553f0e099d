//! Dimension style table entry
//!
//! Only the R12 core of the DIMSTYLE record is kept; the remaining
//! DIMxxx variables are skipped on read.

use super::{TableEntry, TableKind, TABLE_PRECISION};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};

/// A DIMSTYLE table entry
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    pub name: String,
    pub flags: i32,
    /// General dimensioning suffix (3)
    pub dimpost: String,
    /// Alternate dimensioning suffix (4)
    pub dimapost: String,
    /// Overall scale factor (40)
    pub dimscale: f64,
    /// Arrow size (41)
    pub dimasz: f64,
    /// Extension line offset (42)
    pub dimexo: f64,
    /// Dimension line increment (43)
    pub dimdli: f64,
    /// Extension line extension (44)
    pub dimexe: f64,
    /// Text height (140)
    pub dimtxt: f64,
    /// Center mark size (141)
    pub dimcen: f64,
    /// Generate tolerances (71)
    pub dimtol: i32,
    /// Generate limits (72)
    pub dimlim: i32,
    /// Text inside horizontal (73)
    pub dimtih: i32,
    /// Text outside horizontal (74)
    pub dimtoh: i32,
}

impl DimStyle {
    /// Create a dimension style with the drawing defaults
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            name: name.into(),
            flags: 0,
            dimpost: String::new(),
            dimapost: String::new(),
            dimscale: 1.0,
            dimasz: 0.18,
            dimexo: 0.0625,
            dimdli: 0.38,
            dimexe: 0.18,
            dimtxt: 0.18,
            dimcen: 0.09,
            dimtol: 0,
            dimlim: 0,
            dimtih: 1,
            dimtoh: 1,
        }
    }
}

impl Default for DimStyle {
    fn default() -> Self {
        DimStyle::new("")
    }
}

impl TableEntry for DimStyle {
    const KIND: TableKind = TableKind::DimStyle;

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
            3 => self.dimpost = group.value.clone(),
            4 => self.dimapost = group.value.clone(),
            40 => self.dimscale = group.as_double()?,
            41 => self.dimasz = group.as_double()?,
            42 => self.dimexo = group.as_double()?,
            43 => self.dimdli = group.as_double()?,
            44 => self.dimexe = group.as_double()?,
            140 => self.dimtxt = group.as_double()?,
            141 => self.dimcen = group.as_double()?,
            71 => self.dimtol = group.as_int()?,
            72 => self.dimlim = group.as_int()?,
            73 => self.dimtih = group.as_int()?,
            74 => self.dimtoh = group.as_int()?,
            _ => {}
        }
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(3, &self.dimpost)?;
        writer.write_string(4, &self.dimapost)?;
        writer.write_fixed(40, self.dimscale, TABLE_PRECISION)?;
        writer.write_fixed(41, self.dimasz, TABLE_PRECISION)?;
        writer.write_fixed(42, self.dimexo, TABLE_PRECISION)?;
        writer.write_fixed(43, self.dimdli, TABLE_PRECISION)?;
        writer.write_fixed(44, self.dimexe, TABLE_PRECISION)?;
        writer.write_fixed(140, self.dimtxt, TABLE_PRECISION)?;
        writer.write_fixed(141, self.dimcen, TABLE_PRECISION)?;
        writer.write_int(71, self.dimtol)?;
        writer.write_int(72, self.dimlim)?;
        writer.write_int(73, self.dimtih)?;
        writer.write_int(74, self.dimtoh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_core_variables() {
        let mut style = DimStyle::default();
        for group in [
            DxfGroup::new(3, "<> mm"),
            DxfGroup::new(40, "2.0"),
            DxfGroup::new(140, "3.5"),
            DxfGroup::new(73, "0"),
            DxfGroup::new(176, "2"),
        ] {
            style.read_field(&group).unwrap();
        }
        assert_eq!(style.dimpost, "<> mm");
        assert_eq!(style.dimscale, 2.0);
        assert_eq!(style.dimtxt, 3.5);
        assert_eq!(style.dimtih, 0);
        assert_eq!(style.dimasz, 0.18);
    }
}
