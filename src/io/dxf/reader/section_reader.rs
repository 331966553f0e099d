//! DXF section readers
//!
//! Each section reader is entered after the `2/NAME` group of its section
//! and returns once it has consumed the section's `ENDSEC`.

use super::stream_reader::DxfStreamReader;
use crate::document::Document;
use crate::entities::{read_entity, EntityKind};
use crate::error::Result;
use crate::io::dxf::group::{DxfGroup, ENDSEC, ENDTAB, EOF, TABLE, VARIABLE_NAME_CODE};
use crate::notification::NotificationType;
use crate::tables::*;
use indexmap::IndexMap;

/// Block structure markers that are expected inside BLOCKS and never reported
const BLOCK_MARKERS: [&str; 2] = ["BLOCK", "ENDBLK"];

/// How a section run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEnd {
    /// Closed by its ENDSEC; more sections may follow
    EndSec,
    /// Cut short by the file's EOF marker; the read is over
    Eof,
}

/// Section reader for parsing DXF sections
pub struct SectionReader<'a> {
    reader: &'a mut dyn DxfStreamReader,
}

impl<'a> SectionReader<'a> {
    /// Create a new section reader
    pub fn new(reader: &'a mut dyn DxfStreamReader) -> Self {
        Self { reader }
    }

    /// Read the HEADER section: every `9/$NAME` group starts a variable and
    /// the groups after it, up to the next name, are its values
    pub fn read_header(&mut self, document: &mut Document) -> Result<()> {
        let mut current: Option<String> = None;

        loop {
            let group = self.reader.read_group("HEADER section")?;
            if group.is_marker(ENDSEC) {
                return Ok(());
            }
            if group.code == VARIABLE_NAME_CODE {
                document.header.insert(group.value.clone(), Vec::new());
                current = Some(group.value);
                continue;
            }
            if group.is_comment() {
                log::debug!("DXF comment: {}", group.value);
                continue;
            }
            match current.as_ref().and_then(|name| document.header.get_mut(name)) {
                Some(values) => values.push(group),
                None => log::trace!("header group {} before any variable name", group),
            }
        }
    }

    /// Discard a section the codec does not interpret
    pub fn skip_section(&mut self, name: &str) -> Result<()> {
        log::trace!("skipping {} section", name);
        self.reader.skip_past_marker(ENDSEC, name)
    }

    /// Read the TABLES section
    pub fn read_tables(&mut self, document: &mut Document) -> Result<SectionEnd> {
        let mut group = self.reader.read_group("TABLES section")?;

        loop {
            if group.is_marker(ENDSEC) {
                return Ok(SectionEnd::EndSec);
            }
            if group.is_marker(EOF) {
                log::warn!("TABLES section ended by EOF");
                return Ok(SectionEnd::Eof);
            }
            if !group.is_marker(TABLE) {
                if group.is_comment() {
                    log::debug!("DXF comment: {}", group.value);
                }
                group = self.reader.read_group("TABLES section")?;
                continue;
            }

            let name = self.reader.read_group("TABLE")?;
            let tables = &mut document.tables;
            group = match TableKind::from_name(&name.value) {
                Some(TableKind::VPort) => self.read_table_into(&mut tables.vports)?,
                Some(TableKind::LineType) => self.read_table_into(&mut tables.line_types)?,
                Some(TableKind::Layer) => self.read_table_into(&mut tables.layers)?,
                Some(TableKind::TextStyle) => self.read_table_into(&mut tables.text_styles)?,
                Some(TableKind::View) => self.read_table_into(&mut tables.views)?,
                Some(TableKind::Ucs) => self.read_table_into(&mut tables.ucss)?,
                Some(TableKind::AppId) => self.read_table_into(&mut tables.app_ids)?,
                Some(TableKind::DimStyle) => self.read_table_into(&mut tables.dim_styles)?,
                None => {
                    document.notifications.notify(
                        NotificationType::NotSupported,
                        format!("{} table skipped", name.value),
                    );
                    self.reader.skip_past_marker(ENDTAB, "TABLE")?;
                    self.reader.read_group("TABLES section")?
                }
            };
        }
    }

    /// Read one table and merge it into `slot`; a second table of the same
    /// kind adds to the first
    fn read_table_into<T: TableEntry>(&mut self, slot: &mut Option<Table<T>>) -> Result<DxfGroup> {
        let (table, next) = self.read_table::<T>()?;
        log::trace!("{} table: {} items", T::KIND, table.len());
        match slot {
            Some(existing) => existing.extend(table),
            None => *slot = Some(table),
        }
        Ok(next)
    }

    /// Read the items of one table up to its ENDTAB.
    ///
    /// Returns the table and the first group after it.
    fn read_table<T: TableEntry>(&mut self) -> Result<(Table<T>, DxfGroup)> {
        let context = T::KIND.name();
        let mut table = Table::new();
        let mut group = self.reader.read_group(context)?;

        loop {
            if group.is_marker(ENDTAB) {
                let next = self.reader.read_group("TABLES section")?;
                return Ok((table, next));
            }
            if group.is_marker(context) {
                let (item, next) = self.read_table_item::<T>()?;
                match item {
                    Some(item) => {
                        table.insert(item);
                    }
                    None => log::debug!("{} item without a name discarded", context),
                }
                group = next;
                continue;
            }
            if group.is_entity_marker() {
                log::warn!("{} table ended by {} without ENDTAB", context, group.value);
                return Ok((table, group));
            }
            // table header groups (handle, max entries, subclass markers)
            group = self.reader.read_group(context)?;
        }
    }

    /// Read the run of one table item. Items without a name (code 2) are
    /// returned as `None`.
    fn read_table_item<T: TableEntry>(&mut self) -> Result<(Option<T>, DxfGroup)> {
        let mut item = T::default();
        let mut named = false;

        loop {
            let group = self.reader.read_group(T::KIND.name())?;
            if group.is_entity_marker() {
                return Ok((named.then_some(item), group));
            }
            match group.code {
                2 => {
                    item.set_name(group.value);
                    named = true;
                }
                70 => item.set_flags(group.as_int()?),
                999 => log::debug!("DXF comment: {}", group.value),
                _ => item.read_field(&group)?,
            }
        }
    }

    /// Read the entity runs of a BLOCKS or ENTITIES section
    pub fn read_entities(&mut self, document: &mut Document, section: &str) -> Result<SectionEnd> {
        let mut skipped: IndexMap<String, usize> = IndexMap::new();
        let mut group = self.reader.read_group(section)?;

        let end = loop {
            if group.is_marker(ENDSEC) {
                break SectionEnd::EndSec;
            }
            if group.is_marker(EOF) {
                log::warn!("{} section ended by EOF", section);
                break SectionEnd::Eof;
            }
            if group.is_entity_marker() {
                if let Some(kind) = EntityKind::from_name(&group.value) {
                    let (feature, next) = read_entity(kind, &mut *self.reader)?;
                    match feature {
                        Some(feature) => document.add_feature(feature),
                        None => document.notifications.notify(
                            NotificationType::IncompleteGeometry,
                            format!("{} entity in {} dropped: incomplete geometry", kind, section),
                        ),
                    }
                    group = next;
                    continue;
                }
                if !BLOCK_MARKERS.contains(&group.value.as_str()) {
                    *skipped.entry(group.value).or_default() += 1;
                }
            } else if group.is_comment() {
                log::debug!("DXF comment: {}", group.value);
            }
            group = self.reader.read_group(section)?;
        };

        for (keyword, count) in skipped {
            document.notifications.notify(
                NotificationType::NotSupported,
                format!("{} {} entities skipped in {}", count, keyword, section),
            );
        }
        Ok(end)
    }
}
