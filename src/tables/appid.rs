//! Application ID table entry

use super::{TableEntry, TableKind};
use crate::error::Result;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};

/// An application ID table entry; it carries only a name and flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppId {
    /// Application name
    pub name: String,
    /// Raw flag word
    pub flags: i32,
}

impl AppId {
    /// Create a new application ID
    pub fn new(name: impl Into<String>) -> Self {
        AppId {
            name: name.into(),
            flags: 0,
        }
    }
}

impl TableEntry for AppId {
    const KIND: TableKind = TableKind::AppId;

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

    fn read_field(&mut self, _group: &DxfGroup) -> Result<()> {
        Ok(())
    }

    fn write_fields<W: DxfStreamWriter>(&self, _writer: &mut W) -> Result<()> {
        Ok(())
    }
}
